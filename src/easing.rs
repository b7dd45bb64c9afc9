use std::fmt;
use std::str::FromStr;

/// Progress curve for needle animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Reaches the end early and bounces three times before settling.
    #[default]
    Bounce,
}

impl Easing {
    /// Map normalized time to normalized progress. `apply(0) == 0` and
    /// `apply(1) == 1` for every curve; output never leaves `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::Bounce => bounce(t).clamp(0.0, 1.0),
        }
    }
}

fn bounce(t: f64) -> f64 {
    fn parabola(t: f64) -> f64 {
        t * t * 8.0
    }

    let t = t * 1.1226;
    if t < 0.3535 {
        parabola(t)
    } else if t < 0.7408 {
        parabola(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        parabola(t - 0.8526) + 0.9
    } else {
        parabola(t - 1.0435) + 0.95
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Easing::Linear => "linear",
            Easing::Bounce => "bounce",
        })
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Easing::Linear),
            "bounce" => Ok(Easing::Bounce),
            other => Err(format!("unknown easing `{other}` (expected `bounce` or `linear`)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::Bounce] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn bounce_overshoots_then_falls_back() {
        // First contact with the end happens around 31% of the way in.
        let first_peak = Easing::Bounce.apply(0.3148);
        let first_dip = Easing::Bounce.apply(0.4874);
        assert!(first_peak > 0.99, "peak {first_peak}");
        assert!(first_dip < 0.75, "dip {first_dip}");
    }

    #[test]
    fn parses_names() {
        assert_eq!("bounce".parse::<Easing>(), Ok(Easing::Bounce));
        assert_eq!("LINEAR".parse::<Easing>(), Ok(Easing::Linear));
        assert!("elastic".parse::<Easing>().is_err());
    }

    proptest! {
        #[test]
        fn bounce_stays_in_unit_range(t in 0.0f64..=1.0) {
            let v = Easing::Bounce.apply(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
