use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, rate::KilowattHourRate};

pub type KilowattHours = Quantity<1, 0, 1, 0>;

impl KilowattHours {
    pub fn from_watt_hours(watt_hours: f64) -> Self {
        Self::from(watt_hours / 1000.0)
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kWh", self.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_watt_hours() {
        assert_abs_diff_eq!(KilowattHours::from_watt_hours(60_000.0).into_inner(), 60.0);
    }

    #[test]
    fn test_times_rate() {
        let cost = KilowattHours::from(271.2) * KilowattHourRate::from(0.95);
        assert_abs_diff_eq!(cost.into_inner(), 257.64, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours::from(211.2).to_string(), "211.20 kWh");
    }
}
