// Gesture state machine types
//
// One explicit state value per edit session instead of a collection of
// independent booleans, so impossible combinations (dragging while
// resizing) cannot be represented.

/// Phase of the per-item gesture state machine.
///
/// `Idle → Editing` on a sustained press of an editable item,
/// `Editing → Dragging | ResizingTop | ResizingBottom` on pointer motion
/// over the body or a handle, back to `Editing` on release, and
/// `Editing → Idle` on a tap outside or an explicit exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Editing,
    Dragging,
    ResizingTop,
    ResizingBottom,
}

impl GestureState {
    /// True while a pointer gesture is consuming motion.
    pub fn is_active_gesture(&self) -> bool {
        matches!(
            self,
            GestureState::Dragging | GestureState::ResizingTop | GestureState::ResizingBottom
        )
    }
}

/// Which edge of a block is being resized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Top edge - adjusts start time
    Top,
    /// Bottom edge - adjusts end time
    Bottom,
}

impl ResizeHandle {
    /// Returns the cursor icon for this handle
    pub fn cursor_icon(&self) -> egui::CursorIcon {
        egui::CursorIcon::ResizeVertical
    }

    /// The gesture state a drag on this handle enters
    pub fn gesture(&self) -> GestureState {
        match self {
            ResizeHandle::Top => GestureState::ResizingTop,
            ResizeHandle::Bottom => GestureState::ResizingBottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(GestureState::default(), GestureState::Idle);
    }

    #[test]
    fn only_motion_states_are_active_gestures() {
        assert!(!GestureState::Idle.is_active_gesture());
        assert!(!GestureState::Editing.is_active_gesture());
        assert!(GestureState::Dragging.is_active_gesture());
        assert!(GestureState::ResizingTop.is_active_gesture());
        assert!(GestureState::ResizingBottom.is_active_gesture());
    }

    #[test]
    fn handles_map_to_their_states() {
        assert_eq!(ResizeHandle::Top.gesture(), GestureState::ResizingTop);
        assert_eq!(ResizeHandle::Bottom.gesture(), GestureState::ResizingBottom);
    }
}
