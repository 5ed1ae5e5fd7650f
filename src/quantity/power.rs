use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, energy::KilowattHours, time::Hours};

/// Rated power draw.
///
/// Kept in watts rather than kilowatts because that is what's on a device label
/// and what the store records.
pub type Watts = Quantity<1, 0, 0, 0>;

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W", self.0)
    }
}

impl Debug for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}W", self.0)
    }
}

impl Mul<Hours> for Watts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        KilowattHours::from_watt_hours(self.0.0 * rhs.0.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_watts_times_hours() {
        let energy = Watts::from(1200.0) * Hours::from(176.0);
        assert_abs_diff_eq!(energy.into_inner(), 211.2, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Watts::from(1199.6).to_string(), "1200 W");
    }
}
