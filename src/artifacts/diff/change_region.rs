use derive_new::new;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Removed,
}

/// A contiguous run of lines present on only one side
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangeRegion {
    kind: ChangeKind,
    side: Side,
    lines: Range<usize>,
}

impl ChangeRegion {
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn lines(&self) -> Range<usize> {
        self.lines.clone()
    }
}
