//! Needle angle tween driven by per-frame time deltas.

use std::time::Duration;

use tracing::debug;

use crate::controller::PressureObserver;
use crate::easing::Easing;
use crate::pressure::{angle_of, Pressure};

/// Default needle travel time.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationPhase {
    Idle,
    Animating { from: f64, to: f64, elapsed: Duration },
}

/// Owns the displayed needle angle and moves it toward its target.
///
/// A new target always starts from the value currently on screen, so a
/// retarget mid-flight never snaps.
#[derive(Debug, Clone)]
pub struct NeedleAnimator {
    value: f64,
    phase: AnimationPhase,
    duration: Duration,
    easing: Easing,
}

impl NeedleAnimator {
    pub fn new(angle: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            value: angle,
            phase: AnimationPhase::Idle,
            duration,
            easing,
        }
    }

    /// Angle currently displayed.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Angle the needle is heading to (or resting at).
    pub fn target(&self) -> f64 {
        match self.phase {
            AnimationPhase::Idle => self.value,
            AnimationPhase::Animating { to, .. } => to,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, AnimationPhase::Animating { .. })
    }

    pub fn retarget(&mut self, target: f64) {
        if target == self.target() {
            return;
        }
        debug!(from = self.value, to = target, "needle retargeted");
        self.phase = AnimationPhase::Animating {
            from: self.value,
            to: target,
            elapsed: Duration::ZERO,
        };
    }

    /// Advance by `dt` and return the new displayed angle.
    pub fn tick(&mut self, dt: Duration) -> f64 {
        if let AnimationPhase::Animating { from, to, elapsed } = &mut self.phase {
            *elapsed = elapsed.saturating_add(dt);
            if *elapsed >= self.duration {
                self.value = *to;
                self.phase = AnimationPhase::Idle;
                debug!(angle = self.value, "needle settled");
            } else {
                let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                self.value = *from + (*to - *from) * self.easing.apply(t);
            }
        }
        self.value
    }
}

impl PressureObserver for NeedleAnimator {
    fn pressure_committed(&mut self, pressure: Pressure) {
        self.retarget(angle_of(pressure));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pressure::START_ANGLE;

    fn animator() -> NeedleAnimator {
        NeedleAnimator::new(START_ANGLE, DEFAULT_DURATION, Easing::Bounce)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_animator_does_not_move() {
        let mut needle = animator();
        assert_eq!(needle.tick(ms(100)), START_ANGLE);
        assert!(!needle.is_animating());
    }

    #[test]
    fn full_run_lands_exactly_on_target() {
        let mut needle = animator();
        needle.retarget(-90.0);
        for _ in 0..32 {
            needle.tick(ms(16));
        }
        assert_eq!(needle.value(), -90.0);
        assert_eq!(needle.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn single_oversized_tick_completes() {
        let mut needle = animator();
        needle.retarget(-10.0);
        assert_eq!(needle.tick(ms(10_000)), -10.0);
    }

    #[test]
    fn retarget_starts_from_in_flight_value() {
        let mut needle = animator();
        needle.pressure_committed(Pressure::new(10).unwrap());
        let in_flight = needle.tick(ms(100));
        assert!(in_flight > START_ANGLE && in_flight < -154.0);

        needle.pressure_committed(Pressure::new(90).unwrap());
        match needle.phase() {
            AnimationPhase::Animating { from, to, elapsed } => {
                assert_eq!(from, in_flight);
                assert_eq!(to, angle_of(Pressure::new(90).unwrap()));
                assert_eq!(elapsed, Duration::ZERO);
            }
            AnimationPhase::Idle => panic!("expected a running animation"),
        }
        let next = needle.tick(ms(1));
        assert!((next - in_flight).abs() < 1.0);
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut needle = animator();
        needle.retarget(-90.0);
        needle.tick(ms(200));
        let before = needle.phase();
        needle.retarget(-90.0);
        assert_eq!(needle.phase(), before);
    }

    #[test]
    fn zero_duration_snaps_on_first_tick() {
        let mut needle = NeedleAnimator::new(START_ANGLE, Duration::ZERO, Easing::Linear);
        needle.retarget(-50.0);
        assert_eq!(needle.tick(Duration::ZERO), -50.0);
    }

    #[test]
    fn linear_easing_is_halfway_at_half_time() {
        let mut needle = NeedleAnimator::new(-170.0, ms(500), Easing::Linear);
        needle.retarget(-10.0);
        assert!((needle.tick(ms(250)) - -90.0).abs() < 1e-9);
    }
}
