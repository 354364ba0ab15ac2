//! A one-dimensional totalistic cellular automaton: three states, radius one,
//! on a ring of 65 cells.
//!
//! A rule number in `0..=2186` decodes to a [`TransitionTable`] mapping each
//! neighborhood sum `[left] + [me] + [right]` to a new [`Status`].

mod error;
pub mod evolve;
mod lattice;
pub mod render;
mod rule;
mod simulation;
mod status;


pub use crate::{
    error::Error,
    lattice::{CENTER, Cell, Lattice, WORLD_SIZE},
    rule::{MAX_RULE, TABLE_SIZE, TransitionTable},
    simulation::{Generations, MAX_GENERATIONS, Simulation, describe_rule},
    status::Status,
};
