pub mod carbon;
pub mod energy;
pub mod intensity;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// A dimension-tagged scalar: `ENERGY` and `CARBON` are the exponents of the
/// respective base dimensions, so the compiler rejects mixed-up arithmetic.
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
pub struct Quantity<T, const ENERGY: isize, const CARBON: isize>(pub T);

impl<const ENERGY: isize, const CARBON: isize> Quantity<f64, ENERGY, CARBON> {
    pub const ZERO: Self = Self(0.0);

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl<T, const ENERGY: isize, const CARBON: isize> Mul<T> for Quantity<T, ENERGY, CARBON>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, ENERGY, CARBON>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const ENERGY: isize, const CARBON: isize> Div<T> for Quantity<T, ENERGY, CARBON>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, ENERGY, CARBON>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub type Bare<T> = Quantity<T, 0, 0>;

    #[test]
    fn test_is_valid() {
        assert!(Bare::from(0.0).is_valid());
        assert!(!Bare::from(-1.0).is_valid());
        assert!(!Bare::from(f64::NAN).is_valid());
    }
}
