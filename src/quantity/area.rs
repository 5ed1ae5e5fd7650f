use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type SquareMetres = Quantity<0, 1, 0, 0>;

impl Display for SquareMetres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} m²", self.0)
    }
}

impl Debug for SquareMetres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m²", self.0)
    }
}
