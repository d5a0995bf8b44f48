use crate::artifacts::structure::block::{Block, BlockId, BlockKind};

/// Structural blocks of one normalized document
///
/// Blocks live in a flat arena and reference their parent by id. Every line
/// maps to at most one innermost block; lines outside any block map to none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    blocks: Vec<Block>,
    innermost: Vec<Option<BlockId>>,
}

impl Forest {
    pub(crate) fn new(blocks: Vec<Block>, innermost: Vec<Option<BlockId>>) -> Self {
        Forest { blocks, innermost }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.0]
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.innermost.len()
    }

    pub fn innermost(&self, line: usize) -> Option<BlockId> {
        self.innermost.get(line).copied().flatten()
    }

    pub fn innermost_block(&self, line: usize) -> Option<&Block> {
        self.innermost(line).map(|id| self.block(id))
    }

    /// Parent chain of a block, nearest first
    pub fn ancestors(&self, id: BlockId) -> Vec<BlockId> {
        let mut chain = Vec::new();
        let mut current = self.block(id).parent();

        while let Some(parent) = current {
            chain.push(parent);
            current = self.block(parent).parent();
        }

        chain
    }

    /// The depth-0 block enclosing `id` (which may be `id` itself)
    pub fn root(&self, id: BlockId) -> BlockId {
        self.ancestors(id).last().copied().unwrap_or(id)
    }

    /// Header lines of every section enclosing `id`, outermost first
    pub fn ancestor_headers(&self, id: BlockId) -> Vec<usize> {
        let mut headers = self
            .ancestors(id)
            .into_iter()
            .filter_map(|ancestor| self.block(ancestor).header())
            .collect::<Vec<_>>();
        headers.reverse();
        headers
    }

    /// Depth-0 blocks in document order
    pub fn roots(&self) -> Vec<BlockId> {
        let mut roots = (0..self.blocks.len())
            .map(BlockId)
            .filter(|id| self.block(*id).parent().is_none())
            .collect::<Vec<_>>();
        roots.sort_by_key(|id| self.block(*id).members().start);
        roots
    }

    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|block| block.kind() == kind).count()
    }

    /// Lines that belong to no block at all
    pub fn unaffiliated(&self) -> impl Iterator<Item = usize> + '_ {
        self.innermost
            .iter()
            .enumerate()
            .filter(|(_, block)| block.is_none())
            .map(|(line, _)| line)
    }
}
