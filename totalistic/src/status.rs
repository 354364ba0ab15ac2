use std::fmt::{Display, Write};

use crate::error::Error;

/// Activity level of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    #[default]
    Inactive,
    Low,
    High,
}

impl Status {
    pub fn value(self) -> u8 {
        match self {
            Status::Inactive => 0,
            Status::Low => 1,
            Status::High => 2,
        }
    }

    pub fn sign(self) -> char {
        match self {
            Status::Inactive => ' ',
            Status::Low => '-',
            Status::High => '+',
        }
    }

    /// A base-3 digit, as found in a rule number.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Status::Inactive),
            1 => Some(Status::Low),
            2 => Some(Status::High),
            _ => None,
        }
    }

    /// The status of the initial active cell. Only the two active levels are
    /// accepted.
    pub fn seed(value: i64) -> Result<Self, Error> {
        match value {
            1 => Ok(Status::Low),
            2 => Ok(Status::High),
            _ => Err(Error::InvalidSeed(value)),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signs() {
        let signs: String = [Status::Inactive, Status::Low, Status::High]
            .map(Status::sign)
            .iter()
            .collect();
        assert_eq!(signs, " -+");
    }

    #[test]
    fn test_digits() {
        for digit in 0..3 {
            assert_eq!(Status::from_digit(digit).map(Status::value), Some(digit));
        }
        assert_eq!(Status::from_digit(3), None);
    }

    #[test]
    fn test_seed() {
        assert_eq!(Status::seed(1), Ok(Status::Low));
        assert_eq!(Status::seed(2), Ok(Status::High));
        for bad in [-1, 0, 3, 100] {
            assert_eq!(Status::seed(bad), Err(Error::InvalidSeed(bad)));
        }
    }
}
