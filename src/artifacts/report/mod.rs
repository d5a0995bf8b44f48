//! Report rendering
//!
//! A report is an ordered list of hunks, one per merged context window. Each
//! hunk lists its lines in document order with a one-character prefix:
//!
//! - `' '`: unchanged context
//! - `'-'`: removed from the left file
//! - `'+'`: added in the right file
//!
//! Hunks are separated by a single blank line.

use colored::Colorize;
use derive_new::new;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Context,
    Removed,
    Added,
}

impl LineKind {
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Context => ' ',
            LineKind::Removed => '-',
            LineKind::Added => '+',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RenderedLine {
    kind: LineKind,
    text: String,
}

impl RenderedLine {
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn as_string(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.text)
    }

    pub fn colorize(&self) -> String {
        match self.kind {
            LineKind::Context => self.as_string(),
            LineKind::Removed => self.as_string().red().to_string(),
            LineKind::Added => self.as_string().green().to_string(),
        }
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Hunk {
    lines: Vec<RenderedLine>,
}

impl Hunk {
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn changes(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.kind() != LineKind::Context)
            .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Report {
    hunks: Vec<Hunk>,
}

impl Report {
    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Printable lines, with an empty line between hunks
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for (index, hunk) in self.hunks.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.extend(hunk.lines().iter().map(RenderedLine::as_string));
        }

        lines
    }

    pub fn render(&self, writer: &mut dyn Write, color: bool) -> std::io::Result<()> {
        for (index, hunk) in self.hunks.iter().enumerate() {
            if index > 0 {
                writeln!(writer)?;
            }
            for line in hunk.lines() {
                if color {
                    writeln!(writer, "{}", line.colorize())?;
                } else {
                    writeln!(writer, "{}", line)?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
