use crate::{lattice::Lattice, rule::TransitionTable};

/// Advances every cell by one generation and returns the new total activity.
///
/// Reads the neighborhood sums left by
/// [`Lattice::compute_neighborhood_sums`], which the caller runs first.
/// Each cell's lifetime count grows by its new status.
pub fn step(lattice: &mut Lattice, table: &TransitionTable) -> u32 {
    let mut total = 0;
    for cell in lattice.cells_mut() {
        let status = table.get(cell.neighborhood_sum);
        cell.lifetime_count += status.value() as u32;
        cell.status = status;
        total += status.value() as u32;
    }
    total
}
