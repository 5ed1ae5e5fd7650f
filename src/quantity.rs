pub mod area;
pub mod cost;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Dimension-tagged `f64`.
///
/// The const parameters are the exponents of power, area, time and cost,
/// so that, for example, kilowatt-hours cannot be added to a tariff.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize>(
    pub OrderedFloat<f64>,
);

impl<const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize>
    Quantity<POWER, AREA, TIME, COST>
{
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    #[must_use]
    pub const fn into_inner(self) -> f64 {
        self.0.0
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

impl<const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize> Default
    for Quantity<POWER, AREA, TIME, COST>
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize> Mul<f64>
    for Quantity<POWER, AREA, TIME, COST>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize> Div<f64>
    for Quantity<POWER, AREA, TIME, COST>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize> Div<Self>
    for Quantity<POWER, AREA, TIME, COST>
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0.0 / rhs.0.0
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use super::*;

    pub type Bare = Quantity<0, 0, 0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_min() {
        assert_eq!(Bare::from(1).min(Bare::from(2)), Bare::from(1));
        assert_eq!(Bare::from(2).min(Bare::from(1)), Bare::from(1));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Bare::from(1).clamp(Bare::from(2), Bare::from(3)), Bare::from(2));
        assert_eq!(Bare::from(4).clamp(Bare::from(2), Bare::from(3)), Bare::from(3));
    }

    #[test]
    fn test_sum() {
        let total: Bare = [Bare::from(1.5), Bare::from(2.5)].into_iter().sum();
        assert_eq!(total, Bare::from(4.0));
    }

    #[test]
    fn test_is_negative() {
        assert!(Bare::from(-0.1).is_negative());
        assert!(!Bare::ZERO.is_negative());
    }

    #[test]
    fn test_nan_is_not_finite() {
        assert!(!Bare::from(f64::NAN).is_finite());
        assert!(Bare::from(1.0).is_finite());
    }

    #[test]
    fn test_ratio() {
        assert!((Bare::from(3.0) / Bare::from(2.0) - 1.5).abs() < f64::EPSILON);
    }
}
