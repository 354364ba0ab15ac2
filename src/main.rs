//! `totalistic-ca` — runs a three-state totalistic cellular automaton from a
//! single active cell and prints every generation.
//!
//! Values not given as flags are asked for on stdin.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{value_parser, Parser};
use totalistic::{
    describe_rule, Generations, Simulation, Status, TransitionTable, MAX_GENERATIONS, MAX_RULE,
};

use crate::prompt::Prompter;

mod prompt;

const RULE_PROMPT: &str = "Enter the rule # (0-2186): ";
const GENERATIONS_PROMPT: &str = "Enter the number of generations (1-49): \n";
const SEED_PROMPT: &str = "Enter the value (1 or 2) for the initial active cell: \n";

/// Evolve a one-dimensional totalistic cellular automaton.
#[derive(Parser, Debug, Default)]
#[command(name = "totalistic-ca", version)]
struct Args {
    /// Rule number; its seven base-3 digits give the new status per neighborhood sum.
    #[arg(long, value_parser = value_parser!(i64).range(0..=MAX_RULE))]
    rule: Option<i64>,

    /// Number of generations, counting the initial one.
    #[arg(long, value_parser = value_parser!(i64).range(1..=MAX_GENERATIONS))]
    generations: Option<i64>,

    /// Status of the initial active cell.
    #[arg(long, value_parser = value_parser!(i64).range(1..=2))]
    seed: Option<i64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args, io::stdin().lock(), io::stdout().lock())
}

fn run(args: &Args, input: impl BufRead, output: impl Write) -> Result<()> {
    let mut prompter = Prompter::new(input, output);
    writeln!(
        prompter.output(),
        "Welcome to the Totalistic Cellular Automaton!"
    )?;

    let table = match args.rule {
        Some(rule) => TransitionTable::decode(rule)?,
        None => prompter.ask(
            RULE_PROMPT,
            &format!("{RULE_PROMPT}\n"),
            TransitionTable::decode,
        )?,
    };
    describe_rule(&table, prompter.output())?;

    let generations = match args.generations {
        Some(count) => Generations::new(count)?,
        None => prompter.ask(GENERATIONS_PROMPT, GENERATIONS_PROMPT, Generations::new)?,
    };
    let seed = match args.seed {
        Some(value) => Status::seed(value)?,
        None => prompter.ask(SEED_PROMPT, SEED_PROMPT, Status::seed)?,
    };

    Simulation::new(table, seed).run(generations, prompter.output())?;
    Ok(())
}
