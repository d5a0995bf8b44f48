use crate::artifacts::structure::parser::ParseOptions;
use derive_new::new;
use std::path::PathBuf;

/// Everything one comparison run is configured with
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Settings {
    pub left: PathBuf,
    pub right: PathBuf,
    pub parse: ParseOptions,
    #[new(default)]
    pub no_header: bool,
    #[new(default)]
    pub ignore_file: Option<PathBuf>,
    #[new(default)]
    pub color: bool,
    #[new(default)]
    pub resolve: bool,
}

impl Settings {
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    pub fn with_ignore_file(mut self, ignore_file: Option<PathBuf>) -> Self {
        self.ignore_file = ignore_file;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_resolve(mut self, resolve: bool) -> Self {
        self.resolve = resolve;
        self
    }
}
