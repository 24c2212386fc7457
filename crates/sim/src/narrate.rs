//! Writes step snapshots and final results either as prose or as JSON lines.

use std::fmt;
use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct Final<'a, R> {
    result: &'a R,
}

pub struct Narrator<W> {
    out: W,
    format: OutputFormat,
    pause: Duration,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W, format: OutputFormat, pause: Duration) -> Self {
        Self { out, format, pause }
    }

    /// Pulls one snapshot at a time from `steps`, writing and pausing after each.
    /// Returns the number of snapshots written.
    pub fn play<I>(&mut self, steps: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: fmt::Display + Serialize,
    {
        let mut written = 0;
        for step in steps {
            self.step(&step)?;
            written += 1;
        }
        Ok(written)
    }

    pub fn step<S: fmt::Display + Serialize>(&mut self, step: &S) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{step}\n")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, step)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        Ok(())
    }

    /// Final summary; in JSON mode it is wrapped as `{"result": ...}`.
    pub fn result<R: fmt::Display + Serialize>(&mut self, result: &R) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{result}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &Final { result })?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
