use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use anyhow::{bail, Result};
use log::debug;

/// Reads whitespace-separated whole numbers from `input`, re-prompting on
/// `output` until one is accepted. Several answers may share a line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `first`, then `retry` after every rejected token. Tokens that
    /// are not integers are rejected the same way as out-of-range values.
    pub fn ask<T, E: std::fmt::Display>(
        &mut self,
        first: &str,
        retry: &str,
        accept: impl Fn(i64) -> Result<T, E>,
    ) -> Result<T> {
        let mut prompt = first;
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(token) = self.next_token()? else {
                bail!("input ended while waiting for: {}", first.trim_end());
            };
            match token.parse::<i64>() {
                Ok(value) => match accept(value) {
                    Ok(accepted) => return Ok(accepted),
                    Err(e) => debug!("rejected {value}: {e}"),
                },
                Err(e) => debug!("rejected {token:?}: {e}"),
            }
            prompt = retry;
        }
    }

    /// Blank lines are skipped; `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }
}
