use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;

use crate::quantity::Quantity;

pub type Cost = Quantity<0, 0, 0, 1>;

impl Cost {
    pub const ONE_CENT: Self = Self(OrderedFloat(0.01));

    /// Abbreviates costs of a thousand and above: `R$ 1.2k`.
    #[must_use]
    pub fn compact(self) -> String {
        if self.0 < OrderedFloat(1000.0) {
            self.to_string()
        } else {
            format!("R$ {:.1}k", self.0 / 1000.0)
        }
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(257.64).to_string(), "R$ 257.64");
    }

    #[test]
    fn test_compact() {
        assert_eq!(Cost::from(999.5).compact(), "R$ 999.50");
        assert_eq!(Cost::from(1234.0).compact(), "R$ 1.2k");
    }
}
