// Tunables for the particle field. The defaults are what the page ships with;
// JavaScript never sees these, only Rust callers and tests build custom ones.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub particle_radius: f64,
    pub particle_color: Color,
    /// Painted over the whole surface each frame instead of clearing it.
    pub trail_color: Color,
    pub influence_radius: f64,
    pub attraction_strength: f64,
    /// Multiplied into the velocity every step.
    pub friction: f64,
    /// Jitter per velocity component is uniform in +/- wander_strength / 2.
    pub wander_strength: f64,
    /// Initial velocity components are uniform in +/- initial_speed.
    pub initial_speed: f64,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 300;
    pub const PARTICLE_RADIUS: f64 = 1.5;
    pub const PARTICLE_COLOR: Color = Color::from_u32(0x10b9_81cc);
    pub const TRAIL_COLOR: Color = Color::from_u32(0x0206_1733);
    pub const INFLUENCE_RADIUS: f64 = 300.0;
    pub const ATTRACTION_STRENGTH: f64 = 0.05;
    pub const FRICTION: f64 = 0.96;
    pub const WANDER_STRENGTH: f64 = 0.1;
    pub const INITIAL_SPEED: f64 = 1.0;

    pub fn validate(&self) -> Result<(), String> {
        if self.particle_count == 0 {
            return Err(String::from("particle_count must be at least 1"));
        }
        if !(self.particle_radius > 0.0) {
            return Err(format!("particle_radius must be positive, got {}", self.particle_radius));
        }
        if !(self.influence_radius > 0.0) {
            return Err(format!("influence_radius must be positive, got {}", self.influence_radius));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(format!("friction must be in (0, 1], got {}", self.friction));
        }
        for (name, value) in &[
            ("attraction_strength", self.attraction_strength),
            ("wander_strength", self.wander_strength),
            ("initial_speed", self.initial_speed),
        ] {
            if !(*value >= 0.0) {
                return Err(format!("{} must not be negative, got {}", name, value));
            }
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            particle_radius: FieldConfig::PARTICLE_RADIUS,
            particle_color: FieldConfig::PARTICLE_COLOR,
            trail_color: FieldConfig::TRAIL_COLOR,
            influence_radius: FieldConfig::INFLUENCE_RADIUS,
            attraction_strength: FieldConfig::ATTRACTION_STRENGTH,
            friction: FieldConfig::FRICTION,
            wander_strength: FieldConfig::WANDER_STRENGTH,
            initial_speed: FieldConfig::INITIAL_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_field() {
        let config = FieldConfig {
            particle_count: 0,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_friction_that_would_accelerate() {
        let config = FieldConfig {
            friction: 1.01,
            ..FieldConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("friction"));
    }

    #[test]
    fn rejects_nan_strengths() {
        let config = FieldConfig {
            wander_strength: f64::NAN,
            ..FieldConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("wander_strength"));
    }

    #[test]
    fn zero_wander_and_attraction_are_allowed() {
        let config = FieldConfig {
            wander_strength: 0.0,
            attraction_strength: 0.0,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
