use std::io::{self, BufRead, Empty, Sink, Stdin, Stdout, Write};

use super::strategy::Strategy;
use crate::error::StrategyError;
use crate::game::{Board, Checker};

/// Something a [`ManualStrategy`] can read one line at a time from.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only while a single line is read so that two
/// human sides can share it.
pub struct SharedStdin(Stdin);

impl LineSource for SharedStdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// A person typing column numbers, one per line.
///
/// Bad input is reported on `output` and asked for again; only end of input
/// or an I/O failure ends the prompt loop.
pub struct ManualStrategy<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> ManualStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ManualStrategy { input, output }
    }

    /// Consume the strategy, returning what was written to the prompt stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl ManualStrategy<SharedStdin, Stdout> {
    /// Prompt on stdout and read from stdin.
    pub fn stdio() -> Self {
        Self::new(SharedStdin(io::stdin()), io::stdout())
    }
}

impl ManualStrategy<Empty, Sink> {
    /// A human whose columns are fed straight to the game (e.g. by key
    /// presses) rather than typed. Asking it for a move reports closed input.
    pub fn detached() -> Self {
        Self::new(io::empty(), io::sink())
    }
}

impl<R: LineSource, W: Write> Strategy for ManualStrategy<R, W> {
    fn choose_move(&mut self, board: &Board, checker: Checker) -> Result<usize, StrategyError> {
        if board.is_full() {
            return Err(StrategyError::NoLegalMove);
        }

        loop {
            write!(self.output, "Player {checker}, enter a column: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(StrategyError::InputClosed);
            }

            match line.trim().parse::<i64>() {
                Ok(col) if col >= 0 && board.can_drop(col as usize) => return Ok(col as usize),
                Ok(_) => writeln!(self.output, "Column is full or invalid. Try again!")?,
                Err(_) => writeln!(self.output, "Invalid input. Enter a number.")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
