use derive_new::new;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A header line and its more-indented body
    Section,
    /// Consecutive lines sharing the same leading words
    Group,
}

/// A node of the structural forest
///
/// Members are a contiguous range of normalized line indices. Parents are
/// stored as ids into the owning forest, never as references.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Block {
    kind: BlockKind,
    header: Option<usize>,
    members: Range<usize>,
    depth: usize,
    parent: Option<BlockId>,
}

impl Block {
    pub fn section(header: usize, depth: usize, parent: Option<BlockId>) -> Self {
        Block::new(
            BlockKind::Section,
            Some(header),
            header..header + 1,
            depth,
            parent,
        )
    }

    pub fn group(members: Range<usize>, depth: usize, parent: Option<BlockId>) -> Self {
        Block::new(BlockKind::Group, None, members, depth, parent)
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn is_section(&self) -> bool {
        self.kind == BlockKind::Section
    }

    pub fn header(&self) -> Option<usize> {
        self.header
    }

    pub fn members(&self) -> Range<usize> {
        self.members.clone()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<BlockId> {
        self.parent
    }

    pub(crate) fn close(&mut self, end: usize) {
        self.members.end = end;
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            BlockKind::Section => "section",
            BlockKind::Group => "group",
        };
        write!(
            f,
            "{kind} [{}..{}) depth {}",
            self.members.start, self.members.end, self.depth
        )
    }
}
