//! Line-oriented text sink the demo writes through.
//!
//! Wrapping any `io::Write` lets the binary print to stdout while tests
//! capture the exact same bytes into a `Vec<u8>`.

use colored::Colorize;
use std::io::{self, Write};

pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    /// Render headers in bold. Only meaningful when `out` is a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn header(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.bold())
        } else {
            self.line(text)
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
