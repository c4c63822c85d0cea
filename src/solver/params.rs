use serde::Deserialize;

/// Tunable solver parameters. An external settings surface may change any of
/// these between ticks; values are not validated.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Vertical body acceleration; negative points down.
    pub gravity: f64,
    pub vorticity_epsilon: f64,
    pub buoyancy_epsilon: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            gravity: -9.81,
            vorticity_epsilon: 0.01,
            buoyancy_epsilon: 0.02,
        }
    }
}

/// Slider metadata for a settings panel: drag speed and suggested bounds.
/// Advisory only; setters never clamp. A negative speed inverts the drag
/// direction, so dragging right makes gravity pull harder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub label: &'static str,
    pub speed: f64,
    pub min: f64,
    pub max: f64,
}

impl SolverParams {
    pub const GRAVITY_RANGE: ParamRange = ParamRange { label: "Gravity", speed: -0.1, min: -10.0, max: 0.0 };
    pub const VORTICITY_RANGE: ParamRange = ParamRange { label: "Vorticity", speed: 0.001, min: 0.0, max: 0.05 };
    pub const BUOYANCY_RANGE: ParamRange = ParamRange { label: "Buoyancy", speed: 0.02, min: 0.0, max: 0.05 };

    /// Mutable handle to each tunable paired with its slider metadata.
    pub fn sliders_mut(&mut self) -> [(ParamRange, &mut f64); 3] {
        [
            (Self::GRAVITY_RANGE, &mut self.gravity),
            (Self::VORTICITY_RANGE, &mut self.vorticity_epsilon),
            (Self::BUOYANCY_RANGE, &mut self.buoyancy_epsilon),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SolverParams::default();
        assert_eq!(params.gravity, -9.81);
        assert_eq!(params.vorticity_epsilon, 0.01);
        assert_eq!(params.buoyancy_epsilon, 0.02);
    }

    #[test]
    fn test_defaults_inside_slider_ranges() {
        let mut params = SolverParams::default();
        for (range, value) in params.sliders_mut() {
            assert!(*value >= range.min && *value <= range.max, "{} default {} outside range", range.label, value);
        }
    }

    #[test]
    fn test_slider_metadata() {
        assert_eq!(SolverParams::GRAVITY_RANGE.speed, -0.1, "Gravity drags downward");
        assert_eq!(SolverParams::VORTICITY_RANGE.speed, 0.001);
        assert_eq!(SolverParams::BUOYANCY_RANGE.speed, 0.02);
        for range in [SolverParams::GRAVITY_RANGE, SolverParams::VORTICITY_RANGE, SolverParams::BUOYANCY_RANGE] {
            assert!(range.min < range.max, "{} bounds inverted", range.label);
        }
    }

    #[test]
    fn test_sliders_write_through() {
        let mut params = SolverParams::default();
        for (_, value) in params.sliders_mut() {
            *value = 42.0; // out of range on purpose: no validation
        }
        assert_eq!(params.gravity, 42.0);
        assert_eq!(params.vorticity_epsilon, 42.0);
        assert_eq!(params.buoyancy_epsilon, 42.0);
    }

    #[test]
    fn test_partial_yaml() {
        let params: SolverParams = serde_yaml::from_str("gravity: -1.5\n").unwrap();
        assert_eq!(params.gravity, -1.5);
        assert_eq!(params.vorticity_epsilon, 0.01);
    }
}
