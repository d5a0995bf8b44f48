use crate::artifacts::diff::change_region::Side;
use crate::artifacts::normalize::line::{Line, Separator};
use crate::errors::{DiffError, Result};

/// The semantic lines of one configuration file
///
/// Comment lines and blank lines are dropped; every retained line keeps a
/// record of what was dropped right before it so that the structural parser
/// can still treat those gaps as boundaries when asked to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDocument {
    lines: Vec<Line>,
}

impl NormalizedDocument {
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut pending = Separator::empty();
        let (mut comments, mut blanks) = (0usize, 0usize);

        for (source_index, raw) in text.lines().enumerate() {
            let line = Line::classify(raw, source_index);

            if line.is_blank() {
                pending |= Separator::BLANK;
                blanks += 1;
            } else if line.is_comment() {
                pending |= Separator::COMMENT;
                comments += 1;
            } else {
                lines.push(line.with_preceded_by(pending));
                pending = Separator::empty();
            }
        }

        tracing::debug!(
            retained = lines.len(),
            comments,
            blanks,
            "normalized configuration text"
        );

        NormalizedDocument { lines }
    }

    pub fn from_bytes(bytes: &[u8], side: Side) -> Result<Self> {
        let text =
            std::str::from_utf8(bytes).map_err(|source| DiffError::Encoding { side, source })?;

        Ok(Self::from_text(text))
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(Line::text).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Serialize back to text, one retained line per row
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}\n", line.text()))
            .collect()
    }
}

/// Normalize one configuration file's text
pub fn normalize(text: &str) -> NormalizedDocument {
    NormalizedDocument::from_text(text)
}
