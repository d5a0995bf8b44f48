//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Adapter that lets a report be written into the minus pager
///
/// The pager only accepts strings, so every write must be valid UTF-8. Once
/// the report is complete, [`PagerWriter::finish`] hands the buffered text to
/// the pager and blocks until the user quits it.
///
/// ## Usage
///
/// ```ignore
/// let mut writer = PagerWriter::new(Pager::new());
/// report.render(&mut writer, false)?;
/// writer.finish()?;
/// ```
#[derive(new, Clone)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn finish(self) -> anyhow::Result<()> {
        minus::page_all(self.pager)?;
        Ok(())
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
