//! Button snapshots for the current and previous frame.

/// Buttons held during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

/// Input for one frame, with the previous frame kept for edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub current: Buttons,
    pub previous: Buttons,
}

impl InputState {
    /// Advance to the next frame's buttons.
    pub fn update(&mut self, next: Buttons) {
        self.previous = self.current;
        self.current = next;
    }

    /// -1, 0 or +1.
    pub fn horizontal(&self) -> f32 {
        let left = if self.current.left { -1.0 } else { 0.0 };
        let right = if self.current.right { 1.0 } else { 0.0 };
        left + right
    }

    pub fn jump_held(&self) -> bool {
        self.current.jump
    }

    /// True only on the frame shoot goes down.
    pub fn shoot_pressed(&self) -> bool {
        self.current.shoot && !self.previous.shoot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shoot_is_edge_triggered() {
        let mut input = InputState::default();
        let shoot = Buttons {
            shoot: true,
            ..Buttons::default()
        };

        input.update(shoot);
        assert!(input.shoot_pressed());
        input.update(shoot);
        assert!(!input.shoot_pressed());
        input.update(Buttons::default());
        input.update(shoot);
        assert!(input.shoot_pressed());
    }

    #[test]
    fn test_horizontal_cancels() {
        let mut input = InputState::default();
        input.update(Buttons {
            left: true,
            right: true,
            ..Buttons::default()
        });
        assert_eq!(input.horizontal(), 0.0);
        input.update(Buttons {
            left: true,
            ..Buttons::default()
        });
        assert_eq!(input.horizontal(), -1.0);
    }
}
