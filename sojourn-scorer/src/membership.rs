//! Fuzzy membership functions shared by every scoring strategy.
//!
//! Both the weighted fuzzy scorer and the legacy crisp scorer evaluate
//! their linguistic labels ("low budget", "near", "high popularity")
//! through this one library, so boundary behaviour is identical across
//! strategies.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when validating membership parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MembershipError {
    /// A parameter was NaN or infinite.
    #[error("membership parameters must be finite")]
    NonFinite,
    /// Parameters were not in non-decreasing order.
    #[error("membership parameters must be non-decreasing")]
    Unordered,
}

/// A membership function mapping a numeric input to a degree of truth in
/// `[0.0, 1.0]` for a qualitative label.
///
/// Degenerate configurations are well-defined rather than dividing by
/// zero: a triangular shape with a collapsed edge (`a == b` or `b == c`)
/// evaluates to `0.0` at that edge, while a trapezoidal shape with a
/// collapsed edge (`a == b` or `c == d`) treats the boundary point as part
/// of the plateau, so a label anchored at the end of its domain saturates
/// there.
///
/// # Examples
/// ```
/// use sojourn_scorer::MembershipFn;
///
/// let warm = MembershipFn::Triangular { a: 10.0, b: 20.0, c: 30.0 };
/// assert_eq!(warm.degree(20.0), 1.0);
/// assert_eq!(warm.degree(15.0), 0.5);
/// assert_eq!(warm.degree(30.0), 0.0);
///
/// // A right shoulder: full membership is held through the domain edge.
/// let high = MembershipFn::Trapezoidal { a: 0.6, b: 0.85, c: 1.0, d: 1.0 };
/// assert_eq!(high.degree(1.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFn {
    /// Rises linearly from 0 at `a` to 1 at `b`, falls back to 0 at `c`.
    Triangular {
        /// Left edge of the support.
        a: f32,
        /// Peak.
        b: f32,
        /// Right edge of the support.
        c: f32,
    },
    /// Rises from 0 at `a` to 1 at `b`, holds 1 through `[b, c]`, falls to
    /// 0 at `d`.
    Trapezoidal {
        /// Left edge of the support.
        a: f32,
        /// Start of the plateau.
        b: f32,
        /// End of the plateau.
        c: f32,
        /// Right edge of the support.
        d: f32,
    },
}

impl MembershipFn {
    /// Build a validated triangular shape.
    ///
    /// # Errors
    /// Returns [`MembershipError`] when a parameter is non-finite or the
    /// parameters are not non-decreasing.
    pub fn triangular(a: f32, b: f32, c: f32) -> Result<Self, MembershipError> {
        validate(&[a, b, c])?;
        Ok(Self::Triangular { a, b, c })
    }

    /// Build a validated trapezoidal shape.
    ///
    /// # Errors
    /// Returns [`MembershipError`] when a parameter is non-finite or the
    /// parameters are not non-decreasing.
    pub fn trapezoidal(a: f32, b: f32, c: f32, d: f32) -> Result<Self, MembershipError> {
        validate(&[a, b, c, d])?;
        Ok(Self::Trapezoidal { a, b, c, d })
    }

    /// Degree of membership of `x`, always in `[0.0, 1.0]`.
    ///
    /// Non-finite inputs evaluate to `0.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "membership degrees are linear interpolation"
    )]
    pub fn degree(self, x: f32) -> f32 {
        if !x.is_finite() {
            return 0.0;
        }
        match self {
            Self::Triangular { a, b, c } => {
                if x <= a || x >= c {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else if x > b {
                    (c - x) / (c - b)
                } else {
                    1.0
                }
            }
            Self::Trapezoidal { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else if x > c {
                    (d - x) / (d - c)
                } else {
                    1.0
                }
            }
        }
    }
}

fn validate(params: &[f32]) -> Result<(), MembershipError> {
    if params.iter().any(|value| !value.is_finite()) {
        return Err(MembershipError::NonFinite);
    }
    let ordered = params
        .iter()
        .zip(params.iter().skip(1))
        .all(|(left, right)| left <= right);
    if !ordered {
        return Err(MembershipError::Unordered);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when setup breaks"
    )]

    use super::*;
    use rstest::rstest;

    const TRIANGLE: MembershipFn = MembershipFn::Triangular {
        a: 0.0,
        b: 5.0,
        c: 10.0,
    };
    const TRAPEZOID: MembershipFn = MembershipFn::Trapezoidal {
        a: 0.0,
        b: 2.0,
        c: 8.0,
        d: 10.0,
    };

    #[rstest]
    #[case(5.0, 1.0)]
    #[case(0.0, 0.0)]
    #[case(10.0, 0.0)]
    #[case(2.5, 0.5)]
    #[case(7.5, 0.5)]
    #[case(-1.0, 0.0)]
    #[case(11.0, 0.0)]
    fn triangular_degrees(#[case] x: f32, #[case] expected: f32) {
        assert_eq!(TRIANGLE.degree(x), expected);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 0.5)]
    #[case(2.0, 1.0)]
    #[case(5.0, 1.0)]
    #[case(8.0, 1.0)]
    #[case(9.0, 0.5)]
    #[case(10.0, 0.0)]
    fn trapezoidal_degrees(#[case] x: f32, #[case] expected: f32) {
        assert_eq!(TRAPEZOID.degree(x), expected);
    }

    #[rstest]
    fn degenerate_triangular_edges_stay_zero_without_dividing() {
        let left_shoulder = MembershipFn::Triangular {
            a: 0.0,
            b: 0.0,
            c: 0.2,
        };
        assert_eq!(left_shoulder.degree(0.0), 0.0);
        assert_eq!(left_shoulder.degree(0.1), 0.5);

        let right_shoulder = MembershipFn::Triangular {
            a: 20.0,
            b: 40.0,
            c: 40.0,
        };
        assert_eq!(right_shoulder.degree(40.0), 0.0);
        assert_eq!(right_shoulder.degree(30.0), 0.5);
    }

    #[rstest]
    fn degenerate_trapezoidal_edges_saturate() {
        let left = MembershipFn::Trapezoidal {
            a: 0.0,
            b: 0.0,
            c: 0.15,
            d: 0.4,
        };
        assert_eq!(left.degree(0.0), 1.0);

        let right = MembershipFn::Trapezoidal {
            a: 0.6,
            b: 0.85,
            c: 1.0,
            d: 1.0,
        };
        assert_eq!(right.degree(1.0), 1.0);
        assert_eq!(right.degree(0.6), 0.0);
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    #[case(f32::NEG_INFINITY)]
    fn non_finite_input_evaluates_to_zero(#[case] x: f32) {
        assert_eq!(TRIANGLE.degree(x), 0.0);
        assert_eq!(TRAPEZOID.degree(x), 0.0);
    }

    #[rstest]
    fn constructors_reject_unordered_parameters() {
        let err = MembershipFn::triangular(1.0, 0.5, 2.0).expect_err("unordered");
        assert_eq!(err, MembershipError::Unordered);
        let err = MembershipFn::trapezoidal(0.0, 1.0, 0.5, 2.0).expect_err("unordered");
        assert_eq!(err, MembershipError::Unordered);
    }

    #[rstest]
    fn constructors_reject_non_finite_parameters() {
        let err = MembershipFn::triangular(0.0, f32::NAN, 1.0).expect_err("non-finite");
        assert_eq!(err, MembershipError::NonFinite);
    }

    #[rstest]
    fn validated_constructors_accept_degenerate_shoulders() {
        assert!(MembershipFn::triangular(0.0, 0.0, 0.2).is_ok());
        assert!(MembershipFn::trapezoidal(0.6, 0.85, 1.0, 1.0).is_ok());
    }
}
