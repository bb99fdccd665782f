use crate::lesson;
use anyhow::Context;
use log::debug;
use std::io;
use std::io::Write;

/// Builder for a [`LessonApplication`] with a configurable output sink.
pub struct AppBuilder<W: Write = io::Stdout> {
    output: W,
}

impl AppBuilder<io::Stdout> {
    /// Create a builder for an application that reports to standard output.
    pub fn new() -> Self {
        Self {
            output: io::stdout(),
        }
    }
}

impl Default for AppBuilder<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> AppBuilder<W> {
    /// Create a builder with an arbitrary output sink.
    pub fn with_output(output: W) -> Self {
        Self { output }
    }

    pub fn build(self) -> LessonApplication<W> {
        LessonApplication {
            output: self.output,
        }
    }
}

/// Single-run console application: performs the lesson computation and
/// reports it with exactly one line on the output sink.
pub struct LessonApplication<W: Write> {
    output: W,
}

impl<W: Write> LessonApplication<W> {
    pub fn run(mut self) -> anyhow::Result<()> {
        let a = lesson::OPERAND_A;
        let b = lesson::OPERAND_B;
        debug!("operands initialized: a={a}, b={b}");

        let value = lesson::compute(a, b);
        debug!("computed value: {value}");

        writeln!(self.output, "{}", lesson::render(value)).context("write output line")?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_run_writes_single_line() {
        let mut buf = Vec::new();
        AppBuilder::with_output(&mut buf).build().run().unwrap();

        assert_eq!(buf, b"Hello world, the value is: 24\n");
    }
}
