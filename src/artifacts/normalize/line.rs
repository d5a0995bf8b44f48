use bitflags::bitflags;
use derive_new::new;

pub const COMMENT_MARKER: char = '!';

bitflags! {
    /// Non-semantic lines dropped between two retained lines
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Separator: u8 {
        const BLANK = 0b01;
        const COMMENT = 0b10;
    }
}

impl Separator {
    /// Parse a flag string such as `"bc"` (`b` = blank, `c` = comment)
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut separator = Self::empty();

        for c in s.chars() {
            match c {
                'b' | 'B' => separator |= Self::BLANK,
                'c' | 'C' => separator |= Self::COMMENT,
                _ => return None,
            }
        }

        Some(separator)
    }
}

/// One line of configuration text with its trailing whitespace removed
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Line {
    text: String,
    source_index: usize,
    is_comment: bool,
    #[new(default)]
    preceded_by: Separator,
}

impl Line {
    pub fn classify(raw: &str, source_index: usize) -> Self {
        let text = raw.trim_end();
        let is_comment = text.trim_start().starts_with(COMMENT_MARKER);

        Line::new(text.to_string(), source_index, is_comment)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_index(&self) -> usize {
        self.source_index
    }

    pub fn is_comment(&self) -> bool {
        self.is_comment
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn preceded_by(&self) -> Separator {
        self.preceded_by
    }

    pub fn with_preceded_by(mut self, separator: Separator) -> Self {
        self.preceded_by = separator;
        self
    }

    /// Number of leading whitespace characters; a tab counts as one
    pub fn indent(&self) -> usize {
        self.text.chars().take_while(|c| c.is_whitespace()).count()
    }

    /// The first `words` whitespace-delimited tokens, if the line has that many
    pub fn leading_words(&self, words: usize) -> Option<Vec<&str>> {
        let tokens = self
            .text
            .split_whitespace()
            .take(words)
            .collect::<Vec<_>>();

        (words > 0 && tokens.len() == words).then_some(tokens)
    }
}
