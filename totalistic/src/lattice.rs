use crate::status::Status;

/// Number of cells on the ring.
pub const WORLD_SIZE: usize = 65;

/// Index of the initial active cell.
pub const CENTER: usize = WORLD_SIZE / 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) status: Status,
    pub(crate) neighborhood_sum: u8,
    pub(crate) lifetime_count: u32,
}

impl Cell {
    pub fn status(&self) -> Status {
        self.status
    }

    /// `[left] + [me] + [right]` as of the last `compute_neighborhood_sums`.
    pub fn neighborhood_sum(&self) -> u8 {
        self.neighborhood_sum
    }

    /// Sum of this cell's status over every generation so far, the seed included.
    pub fn lifetime_count(&self) -> u32 {
        self.lifetime_count
    }
}

/// A fixed ring of cells: index 0 and index `WORLD_SIZE - 1` are neighbours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    cells: [Cell; WORLD_SIZE],
}

impl Default for Lattice {
    fn default() -> Self {
        Self {
            cells: [Cell::default(); WORLD_SIZE],
        }
    }
}

impl Lattice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Activates a single cell. Expects a freshly reset lattice.
    pub fn seed(&mut self, position: usize, status: Status) {
        let cell = &mut self.cells[position];
        cell.status = status;
        cell.lifetime_count = status.value() as u32;
    }

    /// Recomputes every cell's neighborhood sum from the current statuses.
    ///
    /// This only reads statuses, so it must run as a separate pass before
    /// [`crate::evolve::step`] overwrites them.
    pub fn compute_neighborhood_sums(&mut self) {
        let sums: [u8; WORLD_SIZE] = std::array::from_fn(|i| {
            neighbours(i)
                .into_iter()
                .map(|j| self.cells[j].status.value())
                .sum()
        });
        for (cell, sum) in self.cells.iter_mut().zip(sums) {
            cell.neighborhood_sum = sum;
        }
    }

    pub fn cells(&self) -> &[Cell; WORLD_SIZE] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell; WORLD_SIZE] {
        &mut self.cells
    }

    pub fn statuses(&self) -> impl Iterator<Item = Status> + '_ {
        self.cells.iter().map(Cell::status)
    }
}

/// `[left, me, right]` with wrapping at both ends.
fn neighbours(i: usize) -> [usize; 3] {
    [(i + WORLD_SIZE - 1) % WORLD_SIZE, i, (i + 1) % WORLD_SIZE]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sums(lattice: &Lattice) -> Vec<u8> {
        lattice.cells().iter().map(Cell::neighborhood_sum).collect()
    }

    #[test]
    fn test_empty_sums() {
        let mut lattice = Lattice::new();
        lattice.compute_neighborhood_sums();
        assert!(sums(&lattice).iter().all(|&s| s == 0));
    }

    #[test]
    fn test_wraparound() {
        let mut lattice = Lattice::new();
        lattice.seed(0, Status::High);
        lattice.compute_neighborhood_sums();
        let sums = sums(&lattice);
        assert_eq!((sums[WORLD_SIZE - 1], sums[0], sums[1]), (2, 2, 2));
        assert_eq!(sums.iter().map(|&s| s as u32).sum::<u32>(), 6);

        lattice.reset();
        lattice.seed(WORLD_SIZE - 1, Status::Low);
        lattice.compute_neighborhood_sums();
        assert_eq!(lattice.cells()[0].neighborhood_sum(), 1);
        assert_eq!(lattice.cells()[WORLD_SIZE - 2].neighborhood_sum(), 1);
    }

    #[test]
    fn test_sums_idempotent() {
        let mut lattice = Lattice::new();
        lattice.seed(CENTER, Status::High);
        lattice.seed(CENTER + 1, Status::Low);
        lattice.compute_neighborhood_sums();
        let first = sums(&lattice);
        lattice.compute_neighborhood_sums();
        assert_eq!(sums(&lattice), first);
        assert_eq!(&first[CENTER - 1..=CENTER + 2], &[2, 3, 3, 1]);
    }

    #[test]
    fn test_seed_and_reset() {
        let mut lattice = Lattice::new();
        lattice.seed(CENTER, Status::Low);
        assert_eq!(CENTER, 32);
        let cell = lattice.cells()[CENTER];
        assert_eq!((cell.status(), cell.lifetime_count()), (Status::Low, 1));
        assert_eq!(lattice.statuses().filter(|&s| s != Status::Inactive).count(), 1);

        lattice.reset();
        assert_eq!(lattice, Lattice::new());
    }
}
