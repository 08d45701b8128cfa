// Day Timeline Library
// Layout and interaction engine for the day-view timeline

pub mod interaction;
pub mod layout;
pub mod models;
pub mod ui_egui;
