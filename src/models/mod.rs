// Data models for the timeline engine

pub mod item;
pub mod settings;
