// Validated per-step input handed to the character core

use super::InputError;

/// Continuous input for one fixed simulation step
///
/// Press edges travel separately through the character's input buffer; this
/// carries the held/continuous part of the frame. Construct it with
/// [`TickInput::new`], which rejects values the core does not handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    movement_axis: f32,
    grounded: bool,
    delta_time: f32,
    jump_held: Option<bool>,
}

impl TickInput {
    /// Validate raw host values
    pub fn new(movement_axis: f32, grounded: bool, delta_time: f32) -> Result<Self, InputError> {
        if !delta_time.is_finite() {
            return Err(InputError::NonFiniteDelta(delta_time));
        }
        if delta_time <= 0.0 {
            return Err(InputError::NonPositiveDelta(delta_time));
        }
        if !movement_axis.is_finite() || movement_axis.abs() > 1.0 {
            return Err(InputError::AxisOutOfRange(movement_axis));
        }

        Ok(Self {
            movement_axis,
            grounded,
            delta_time,
            jump_held: None,
        })
    }

    /// Report whether the jump control is still held down
    ///
    /// Hosts that never call this get no short hop / full jump classification.
    pub fn with_jump_held(mut self, held: bool) -> Self {
        self.jump_held = Some(held);
        self
    }

    pub fn movement_axis(&self) -> f32 {
        self.movement_axis
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn jump_held(&self) -> Option<bool> {
        self.jump_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = TickInput::new(-0.5, true, 1.0 / 60.0).unwrap();
        assert_eq!(input.movement_axis(), -0.5);
        assert!(input.grounded());
        assert_eq!(input.jump_held(), None);
    }

    #[test]
    fn test_rejects_non_positive_delta() {
        assert_eq!(
            TickInput::new(0.0, true, 0.0),
            Err(InputError::NonPositiveDelta(0.0))
        );
        assert!(matches!(
            TickInput::new(0.0, true, -0.1),
            Err(InputError::NonPositiveDelta(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_delta() {
        assert!(matches!(
            TickInput::new(0.0, true, f32::NAN),
            Err(InputError::NonFiniteDelta(_))
        ));
        assert!(matches!(
            TickInput::new(0.0, true, f32::INFINITY),
            Err(InputError::NonFiniteDelta(_))
        ));
    }

    #[test]
    fn test_rejects_axis_out_of_range() {
        assert!(matches!(
            TickInput::new(1.5, false, 0.016),
            Err(InputError::AxisOutOfRange(_))
        ));
        assert!(matches!(
            TickInput::new(f32::NAN, false, 0.016),
            Err(InputError::AxisOutOfRange(_))
        ));
    }

    #[test]
    fn test_jump_held_builder() {
        let input = TickInput::new(0.0, false, 0.016).unwrap().with_jump_held(true);
        assert_eq!(input.jump_held(), Some(true));
    }
}
