use crate::areas::ignore_list::IgnoreList;
use crate::areas::session::Session;
use crate::artifacts::banner::{Banner, device_name};
use crate::artifacts::diff::diff_bytes;
use anyhow::Context;

/// What a comparison run ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The target device is on the ignore list; nothing was compared
    Ignored,
    /// No semantic difference
    Identical,
    /// Differences were reported in this many hunks
    Changed(usize),
}

impl Session {
    pub fn compare(&self) -> anyhow::Result<Outcome> {
        let settings = self.settings();

        if self.is_ignored()? {
            tracing::info!(device = %settings.right.display(), "device is on the ignore list");
            return Ok(Outcome::Ignored);
        }

        let left = self.workspace().read_file(&settings.left)?;
        let right = self.workspace().read_file(&settings.right)?;
        let report = diff_bytes(&left, &right, &settings.parse)?;

        if report.is_empty() {
            return Ok(Outcome::Identical);
        }

        if !settings.no_header {
            let device = device_name(&settings.right, settings.resolve)?;
            Banner::new(device).write(&mut **self.writer())?;
        }

        report
            .render(&mut **self.writer(), settings.color)
            .context("failed to write report")?;

        Ok(Outcome::Changed(report.hunks().len()))
    }

    fn is_ignored(&self) -> anyhow::Result<bool> {
        let Some(path) = &self.settings().ignore_file else {
            return Ok(false);
        };

        match IgnoreList::load(path) {
            Ok(ignore_list) => Ok(ignore_list.matches(&self.settings().right)),
            Err(error) => {
                tracing::warn!(%error, "ignore list skipped");
                Ok(false)
            }
        }
    }
}
