/// Monotonic curve mapping normalized time `[0,1]` to fill progress `[0,1]`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Easing {
    /// Constant fill rate.
    Linear,
    /// `t²`: slow start, fast finish. The fill accelerates into the
    /// reaction window, so the reliable reaction time shrinks near the end.
    #[default]
    QuadraticIn,
}

impl Easing {
    /// Evaluates the curve. Input outside `[0,1]` is clamped first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn quadratic_is_slow_then_fast() {
        let curve = Easing::QuadraticIn;
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(0.5), 0.25);
        assert_eq!(curve.apply(1.0), 1.0);
        // Second half covers three quarters of the fill.
        assert!(curve.apply(1.0) - curve.apply(0.5) > curve.apply(0.5));
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(Easing::QuadraticIn.apply(2.0), 1.0);
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    }

    #[test]
    fn parses_from_config_names() {
        assert_eq!(Easing::from_str("quadratic_in").unwrap(), Easing::QuadraticIn);
        assert_eq!(Easing::from_str("LINEAR").unwrap(), Easing::Linear);
        assert_eq!(Easing::QuadraticIn.to_string(), "quadratic_in");
    }
}
