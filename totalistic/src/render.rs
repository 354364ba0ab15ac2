//! Fixed-width text layouts for the rule, the generations and the final
//! lifetime counts. Nothing here emits a final newline.

use std::fmt::{Display, Write};

use itertools::Itertools;

use crate::{
    lattice::{CENTER, Lattice, WORLD_SIZE},
    rule::TransitionTable,
    status::Status,
};

/// Every ordered `[left, me, right]` triple, grouped by neighborhood sum.
const NEIGHBORHOODS: &str = "\
Local Sum:   6       5       4       3       2       1       0      
States:    |+++|   |++-|   |++ |   |+- |   |-- |   |-  |   |   |    
                   |+-+|   |+ +|   |+ -|   |- -|   | - |            
                   |-++|   | ++|   |-+ |   | --|   |  -|            
                           |+--|   | +-|   |+  |                    
                           |-+-|   |- +|   | + |                    
                           |--+|   | -+|   |  +|                    
                                   |---|                            
";

/// The neighborhood diagram followed by the table's new status for each sum.
pub struct Diagram<'a>(pub &'a TransitionTable);

impl Display for Diagram<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(NEIGHBORHOODS)?;
        f.write_str("New Status: ")?;
        let mut fields = self.0.entries().iter().rev().map(|s| format!("|{s}|"));
        f.write_str(&fields.join("     "))
    }
}

/// Generation 0. The sign sits in the seed's column and the value in the
/// column where later rows print their total. It is not newline-terminated,
/// so the first evolved row, or the separator, continues on the same line.
pub struct InitialLine(pub Status);

impl Display for InitialLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self(seed) = *self;
        let tail = WORLD_SIZE - CENTER;
        write!(f, "{:CENTER$}{seed}{:tail$}{} ", "", "", seed.value())
    }
}

pub struct GenerationRow<'a> {
    pub lattice: &'a Lattice,
    pub total: u32,
}

impl Display for GenerationRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for status in self.lattice.statuses() {
            f.write_char(status.sign())?;
        }
        write!(f, " {} ", self.total)
    }
}

pub struct Separator;

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&"_".repeat(WORLD_SIZE))
    }
}

/// Each cell's lifetime count as a two-row numeral: tens digit above, ones
/// digit below. Zero is blank on both rows.
pub struct LifetimeCounts<'a>(pub &'a Lattice);

impl Display for LifetimeCounts<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts = self.0.cells().iter().map(|c| c.lifetime_count()).collect_vec();
        for &count in &counts {
            f.write_char(tens(count))?;
        }
        f.write_char('\n')?;
        for &count in &counts {
            f.write_char(ones(count))?;
        }
        Ok(())
    }
}

fn tens(count: u32) -> char {
    match count {
        0..10 => ' ',
        _ => digit(count / 10),
    }
}

fn ones(count: u32) -> char {
    match count {
        0 => ' ',
        _ => digit(count),
    }
}

fn digit(n: u32) -> char {
    char::from_digit(n % 10, 10).unwrap_or('?')
}
