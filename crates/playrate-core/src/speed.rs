//! The playback-rate value and its clamp policy.

/// Slowest rate the engine will ever store or apply.
pub const MIN_SPEED: f64 = 0.1;

/// Fastest rate the engine will ever store or apply.
pub const MAX_SPEED: f64 = 16.0;

/// Rate used when nothing has been persisted, and the keyboard reset target.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Increment applied by the speed-up / slow-down shortcuts.
pub const SPEED_STEP: f64 = 0.25;

/// Constrain a requested rate to `[MIN_SPEED, MAX_SPEED]`.
///
/// Total over all of `f64`: infinities land on the nearest bound and NaN
/// resolves to [`DEFAULT_SPEED`], so unvalidated input can be fed straight
/// through without a separate validity check.
pub fn clamp_speed(requested: f64) -> f64 {
    if requested.is_nan() {
        return DEFAULT_SPEED;
    }
    requested.clamp(MIN_SPEED, MAX_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_in_range_pass_through() {
        assert_eq!(clamp_speed(1.0), 1.0);
        assert_eq!(clamp_speed(0.25), 0.25);
        assert_eq!(clamp_speed(15.99), 15.99);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(clamp_speed(MIN_SPEED), MIN_SPEED);
        assert_eq!(clamp_speed(MAX_SPEED), MAX_SPEED);
    }

    #[test]
    fn out_of_range_values_land_on_bounds() {
        assert_eq!(clamp_speed(0.0), MIN_SPEED);
        assert_eq!(clamp_speed(-3.0), MIN_SPEED);
        assert_eq!(clamp_speed(20.0), MAX_SPEED);
        assert_eq!(clamp_speed(1e9), MAX_SPEED);
    }

    #[test]
    fn non_finite_values_stay_in_range() {
        assert_eq!(clamp_speed(f64::INFINITY), MAX_SPEED);
        assert_eq!(clamp_speed(f64::NEG_INFINITY), MIN_SPEED);
        assert_eq!(clamp_speed(f64::NAN), DEFAULT_SPEED);
    }

    #[test]
    fn clamping_is_idempotent() {
        for raw in [-5.0, 0.0, 0.1, 1.37, 16.0, 42.0, f64::NAN, f64::INFINITY] {
            let once = clamp_speed(raw);
            assert_eq!(clamp_speed(once), once);
            assert!((MIN_SPEED..=MAX_SPEED).contains(&once));
        }
    }
}
