use std::{fmt::Display, ops::Deref};

/// Integer percentage in the 0..=100 range, as shown next to progress bars and
/// calendar cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);

    /// Ratio of `part` to `whole` rounded half-up, so 2 of 3 comes out as 67.
    /// An empty whole yields 0 rather than an error.
    pub fn from_ratio(part: usize, whole: usize) -> Percentage {
        if whole == 0 {
            return Percentage::ZERO;
        }
        Percentage((part as f64 / whole as f64 * 100.).round() as u8)
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Deref for Percentage {
    type Target = u8;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Percentage;

    #[test]
    fn empty_whole_is_zero() {
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
    }

    #[test]
    fn two_of_three_rounds_up_to_67() {
        assert_eq!(*Percentage::from_ratio(2, 3), 67);
    }

    #[test]
    fn exact_halves_round_up() {
        // 1/8 = 12.5%
        assert_eq!(*Percentage::from_ratio(1, 8), 13);
    }

    #[test]
    fn bounds() {
        assert_eq!(*Percentage::from_ratio(0, 5), 0);
        assert_eq!(*Percentage::from_ratio(5, 5), 100);
    }
}
