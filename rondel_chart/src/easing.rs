// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for fixed-duration transitions.
//!
//! Transitions in this crate are monotone and wall-clock bounded; springs and
//! other physical models are out of scope.

/// A timing curve mapping linear progress to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease-in: slow start.
    EaseIn,
    /// Cubic ease-out: slow finish.
    EaseOut,
    /// Cubic ease-in-out: slow start and finish.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` to eased progress.
    ///
    /// The input is clamped to `[0, 1]`; the output stays in `[0, 1]` with
    /// `apply(0) == 0` and `apply(1) == 1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::EaseInOut.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(7.5), 1.0);
    }

    #[test]
    fn curves_are_monotone() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            let mut last = 0.0;
            for i in 1..=100 {
                let t = f64::from(i) / 100.0;
                let eased = easing.apply(t);
                assert!(eased >= last, "{easing:?} not monotone at t={t}");
                last = eased;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        for t in [0.1, 0.25, 0.4] {
            assert!((e.apply(t) - (1.0 - e.apply(1.0 - t))).abs() < 1e-12);
        }
    }
}
