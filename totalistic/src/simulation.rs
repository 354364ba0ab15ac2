use std::io::{self, Write};

use log::{debug, trace};

use crate::{
    error::Error,
    evolve,
    lattice::{CENTER, Lattice},
    render::{Diagram, GenerationRow, InitialLine, LifetimeCounts, Separator},
    rule::TransitionTable,
    status::Status,
};

pub const MAX_GENERATIONS: i64 = 49;

/// Requested generation count, 1 through 49. Generation 0 is the seed, so a
/// run prints `count - 1` evolved rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generations(u8);

impl Generations {
    pub fn new(count: i64) -> Result<Self, Error> {
        match u8::try_from(count) {
            Ok(n) if (1..=MAX_GENERATIONS).contains(&count) => Ok(Self(n)),
            _ => Err(Error::InvalidGenerations(count)),
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// Prints the rule's digits and what it does to every neighborhood.
pub fn describe_rule(table: &TransitionTable, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "The value array for rule #{} is {table}", table.rule())?;
    writeln!(out, "The evolution of all possible states are as follows:")?;
    writeln!(out, "{}", Diagram(table))
}

/// A lattice seeded with one active cell in the middle, evolving under a
/// fixed table.
#[derive(Clone, Debug)]
pub struct Simulation {
    table: TransitionTable,
    lattice: Lattice,
    seed: Status,
}

impl Simulation {
    pub fn new(table: TransitionTable, seed: Status) -> Self {
        let mut lattice = Lattice::new();
        lattice.reset();
        lattice.seed(CENTER, seed);
        Self {
            table,
            lattice,
            seed,
        }
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// One generation: sum every neighborhood, then update every cell.
    pub fn advance(&mut self) -> u32 {
        self.lattice.compute_neighborhood_sums();
        evolve::step(&mut self.lattice, &self.table)
    }

    /// Evolves and prints rows for generations `1..count`, then the lifetime
    /// counts.
    pub fn run(&mut self, generations: Generations, out: &mut impl Write) -> io::Result<()> {
        debug!(
            "running rule {} for {} generations from seed {}",
            self.table.rule(),
            generations.get(),
            self.seed.value()
        );
        writeln!(out, "Initializing world & evolving...")?;
        write!(out, "{}", InitialLine(self.seed))?;
        for generation in 1..generations.get() {
            let total = self.advance();
            trace!("generation {generation}: total activity {total}");
            let row = GenerationRow {
                lattice: &self.lattice,
                total,
            };
            writeln!(out, "{row}")?;
        }
        writeln!(out, "{Separator}")?;
        writeln!(out, "{}", LifetimeCounts(&self.lattice))?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_range() {
        assert_eq!(Generations::new(1).map(Generations::get), Ok(1));
        assert_eq!(Generations::new(49).map(Generations::get), Ok(49));
        for bad in [i64::MIN, -1, 0, 50, 256, 257] {
            assert_eq!(Generations::new(bad), Err(Error::InvalidGenerations(bad)));
        }
    }

    #[test]
    fn test_new_is_seeded() {
        let table = TransitionTable::decode(100).unwrap();
        let sim = Simulation::new(table, Status::High);
        let cells = sim.lattice().cells();
        assert_eq!(cells[CENTER].status(), Status::High);
        assert_eq!(cells[CENTER].lifetime_count(), 2);
        assert_eq!(cells.iter().map(|c| c.lifetime_count()).sum::<u32>(), 2);
    }

    #[test]
    fn test_initial_line_runs_into_first_row() {
        let table = TransitionTable::decode(0).unwrap();
        let mut out = Vec::new();
        let mut sim = Simulation::new(table, Status::Low);
        sim.run(Generations::new(2).unwrap(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = format!("{:32}-{:33}1 {:65} 0 \n", "", "", "");
        assert_eq!(text.lines().nth(1), expected.strip_suffix('\n'));
        assert!(text.contains(&expected));
    }

    #[test]
    fn test_row_count() {
        let table = TransitionTable::decode(1635).unwrap();
        for count in [1, 2, 10, 49] {
            let mut out = Vec::new();
            let mut sim = Simulation::new(table, Status::Low);
            sim.run(Generations::new(count).unwrap(), &mut out).unwrap();
            let text = String::from_utf8(out).unwrap();
            // The initial line shares a line with the first row or the separator.
            assert_eq!(text.lines().count(), 1 + (count as usize - 1) + 3);
        }
    }
}
