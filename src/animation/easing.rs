/// Maps the linear progress of an animation onto the eased progress.
///
/// Every curve starts at 0 and ends at 1.
#[derive(Debug, Copy, Clone)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Accelerates from rest, `t³`
    CubicIn,
    /// Decelerates to rest
    CubicOut,
    /// Accelerates during the first half and decelerates during the second
    CubicInOut,
    /// A caller supplied curve. It should map 0 to 0 and 1 to 1.
    Custom(fn(f64) -> f64),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::CubicIn
    }
}

impl Easing {
    /// Returns the eased progress for the linear progress `t`.
    /// `t` is clamped to [0.0; 1.0].
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
        match self {
            Easing::Linear => t,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let inverse = 1.0 - t;
                1.0 - inverse * inverse * inverse
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inverse = -2.0 * t + 2.0;
                    1.0 - inverse * inverse * inverse / 2.0
                }
            }
            Easing::Custom(curve) => curve(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearly_eq::assert_nearly_eq;

    const TOLERANCE: f64 = 1e-12;

    fn all_builtin_curves() -> Vec<Easing> {
        vec![
            Easing::Linear,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
        ]
    }

    #[test]
    fn builtin_curves_start_at_zero_and_end_at_one() {
        for easing in all_builtin_curves() {
            assert_nearly_eq!(0.0, easing.apply(0.0), TOLERANCE);
            assert_nearly_eq!(1.0, easing.apply(1.0), TOLERANCE);
        }
    }

    #[test]
    fn cubic_in_is_cube_of_progress() {
        assert_nearly_eq!(0.125, Easing::CubicIn.apply(0.5), TOLERANCE);
        assert_nearly_eq!(0.001, Easing::CubicIn.apply(0.1), TOLERANCE);
    }

    #[test]
    fn cubic_out_mirrors_cubic_in() {
        assert_nearly_eq!(0.875, Easing::CubicOut.apply(0.5), TOLERANCE);
    }

    #[test]
    fn cubic_in_out_is_half_way_at_half_time() {
        assert_nearly_eq!(0.5, Easing::CubicInOut.apply(0.5), TOLERANCE);
        assert_nearly_eq!(0.0625, Easing::CubicInOut.apply(0.25), TOLERANCE);
    }

    #[test]
    fn progress_outside_of_unit_range_is_clamped() {
        assert_eq!(0.0, Easing::Linear.apply(-3.0));
        assert_eq!(1.0, Easing::Linear.apply(7.0));
        assert_eq!(0.0, Easing::Linear.apply(std::f64::NAN));
    }

    #[test]
    fn custom_curve_is_used() {
        fn square(t: f64) -> f64 {
            t * t
        }

        assert_nearly_eq!(0.25, Easing::Custom(square).apply(0.5), TOLERANCE);
    }

    #[test]
    fn default_is_cubic_in() {
        assert_nearly_eq!(0.125, Easing::default().apply(0.5), TOLERANCE);
    }
}
