use std::fmt::{Display, Formatter};

/// Part of a whole, rendered as a percentage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FormattedShare(f64);

impl FormattedShare {
    /// Zero when the whole is not positive. Clamped to `0..=1`.
    #[must_use]
    pub fn of(part: f64, whole: f64) -> Self {
        if whole > 0.0 { Self((part / whole).clamp(0.0, 1.0)) } else { Self(0.0) }
    }
}

impl Display for FormattedShare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FormattedShare::of(257.64, 287.64).to_string(), "89.6%");
    }

    #[test]
    fn test_zero_whole() {
        assert_eq!(FormattedShare::of(0.0, 0.0).to_string(), "0.0%");
    }

    #[test]
    fn test_clamped() {
        assert_eq!(FormattedShare::of(2.0, 1.0).to_string(), "100.0%");
        assert_eq!(FormattedShare::of(-1.0, 1.0).to_string(), "0.0%");
    }
}
