use std::fmt::{Display, Write};

use log::debug;

use crate::{error::Error, status::Status};

/// Number of possible neighborhood sums, 0 through 6.
pub const TABLE_SIZE: usize = 7;

/// Largest rule expressible in seven base-3 digits.
pub const MAX_RULE: i64 = 3i64.pow(TABLE_SIZE as u32) - 1;

/// The new status for every neighborhood sum, indexed by that sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TransitionTable([Status; TABLE_SIZE]);

impl TransitionTable {
    pub fn decode(rule: i64) -> Result<Self, Error> {
        if !(0..=MAX_RULE).contains(&rule) {
            return Err(Error::InvalidRule(rule));
        }
        let mut rest = rule;
        let mut entries = [Status::Inactive; TABLE_SIZE];
        for entry in &mut entries {
            // Always in 0..3, so from_digit cannot miss.
            *entry = Status::from_digit((rest % 3) as u8).unwrap_or_default();
            rest /= 3;
        }
        let table = Self(entries);
        debug!("rule {rule} decodes to {table}");
        Ok(table)
    }

    /// New status for a neighborhood sum; `sum` is at most 6.
    pub(crate) fn get(&self, sum: u8) -> Status {
        self.0[sum as usize]
    }

    pub fn entries(&self) -> &[Status; TABLE_SIZE] {
        &self.0
    }

    /// The rule number this table was decoded from.
    pub fn rule(&self) -> i64 {
        self.0
            .iter()
            .rev()
            .fold(0, |rule, status| rule * 3 + status.value() as i64)
    }
}

/// Base-3 digits, most significant neighborhood sum first.
impl Display for TransitionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for status in self.0.iter().rev() {
            f.write_char(char::from(b'0' + status.value()))?;
        }
        Ok(())
    }
}
