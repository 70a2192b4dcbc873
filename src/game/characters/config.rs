// Controller tuning - every character uses the same base numbers

use crate::engine::input::ACTION_VALIDITY_WINDOW;

/// Tuning constants read by the controller. The core never mutates these.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    // Movement
    /// Horizontal speed at full move intent (units/second)
    pub max_speed: f32,
    /// Move intent below this magnitude does not turn the sprite
    pub move_deadzone: f32,

    // Jumping
    /// Launch speed of a jump from the ground
    pub ground_jump_speed: f32,
    /// Launch speed of the single air jump
    pub air_jump_speed: f32,
    /// Shared scalar applied to both launch speeds
    pub jump_modifier: f32,
    /// Upward velocity multiplier applied when a ground jump is released early
    pub jump_deceleration: f32,
    /// How long jump must stay held after take-off to count as a full jump
    pub full_jump_threshold: f32,

    // Dashing
    /// Horizontal speed while a dash phase is active
    pub dash_speed: f32,
    /// Time between dashes; the dash phase itself lasts an eighth of this
    pub dash_cooldown: f32,

    // Input
    /// How long a buffered press stays eligible (seconds)
    pub action_validity_window: f32,

    // Vitals
    /// Upper bound of the damage percent counter
    pub max_vital: i32,
}

/// The one configuration used by all characters
pub const BASE_CONFIG: ControllerConfig = ControllerConfig {
    max_speed: 3.0,
    move_deadzone: 0.01,

    ground_jump_speed: 12.0,
    air_jump_speed: 14.0,
    jump_modifier: 1.5,
    jump_deceleration: 0.5,
    full_jump_threshold: 0.12,

    dash_speed: 12.0,
    dash_cooldown: 0.6,

    action_validity_window: ACTION_VALIDITY_WINDOW,

    max_vital: 999,
};

/// Rejected tuning values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("jump_deceleration must be within [0, 1], got {0}")]
    DecelerationOutOfRange(f32),

    #[error("max_vital must be positive, got {0}")]
    InvalidMaxVital(i32),
}

impl Default for ControllerConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl ControllerConfig {
    pub fn standard() -> Self {
        BASE_CONFIG
    }

    /// Check every field the controller divides by or counts down from
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_speed", self.max_speed),
            ("ground_jump_speed", self.ground_jump_speed),
            ("air_jump_speed", self.air_jump_speed),
            ("jump_modifier", self.jump_modifier),
            ("full_jump_threshold", self.full_jump_threshold),
            ("dash_speed", self.dash_speed),
            ("dash_cooldown", self.dash_cooldown),
            ("action_validity_window", self.action_validity_window),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.jump_deceleration) {
            return Err(ConfigError::DecelerationOutOfRange(self.jump_deceleration));
        }
        if !(self.move_deadzone.is_finite() && self.move_deadzone >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "move_deadzone",
                value: self.move_deadzone,
            });
        }
        if self.max_vital <= 0 {
            return Err(ConfigError::InvalidMaxVital(self.max_vital));
        }
        Ok(())
    }

    /// Launch speed of a ground jump after the modifier
    pub fn ground_launch(&self) -> f32 {
        self.ground_jump_speed * self.jump_modifier
    }

    /// Launch speed of an air jump after the modifier
    pub fn air_launch(&self) -> f32 {
        self.air_jump_speed * self.jump_modifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ControllerConfig::default();
        assert_eq!(config.max_speed, 3.0);
        assert_eq!(config.ground_jump_speed, 12.0);
        assert_eq!(config.air_jump_speed, 14.0);
        assert_eq!(config.action_validity_window, 0.8);
        assert_eq!(config.max_vital, 999);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_equals_default() {
        assert_eq!(ControllerConfig::standard(), ControllerConfig::default());
    }

    #[test]
    fn test_launch_speeds_use_modifier() {
        let config = ControllerConfig::default();
        assert_eq!(config.ground_launch(), 18.0);
        assert_eq!(config.air_launch(), 21.0);
    }

    #[test]
    fn test_rejects_zero_dash_cooldown() {
        let config = ControllerConfig {
            dash_cooldown: 0.0,
            ..ControllerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "dash_cooldown",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_nan_speed() {
        let config = ControllerConfig {
            max_speed: f32::NAN,
            ..ControllerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "max_speed", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_deceleration_and_vital() {
        let config = ControllerConfig {
            jump_deceleration: 1.5,
            ..ControllerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DecelerationOutOfRange(1.5))
        );

        let config = ControllerConfig {
            max_vital: 0,
            ..ControllerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxVital(0)));
    }
}
