use crate::artifacts::normalize::document::NormalizedDocument;
use crate::artifacts::normalize::line::{Line, Separator};
use crate::artifacts::structure::block::{Block, BlockId, BlockKind};
use crate::artifacts::structure::forest::Forest;

pub const DEFAULT_GROUP_WORDS: usize = 2;

/// Knobs of the structural heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    group_words: usize,
    boundaries: Separator,
}

impl ParseOptions {
    pub fn new(group_words: usize, boundaries: Separator) -> Self {
        ParseOptions {
            group_words: group_words.max(1),
            boundaries,
        }
    }

    /// Leading words two lines must share to be grouped
    pub fn group_words(&self) -> usize {
        self.group_words
    }

    /// Dropped-line kinds that close every open section
    pub fn boundaries(&self) -> Separator {
        self.boundaries
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions::new(DEFAULT_GROUP_WORDS, Separator::empty())
    }
}

struct GroupRun<'l> {
    key: Vec<&'l str>,
    indent: usize,
    parent: Option<BlockId>,
    start: usize,
    end: usize,
}

#[derive(Debug, Clone, Default)]
pub struct StructureParser {
    options: ParseOptions,
}

impl StructureParser {
    pub fn new(options: ParseOptions) -> Self {
        StructureParser { options }
    }

    pub fn parse(&self, document: &NormalizedDocument) -> Forest {
        let lines = document.lines();
        let mut blocks = Vec::new();
        let mut innermost = vec![None; lines.len()];

        let enclosing = self.nest_sections(lines, &mut blocks, &mut innermost);
        self.collect_groups(lines, &enclosing, &mut blocks, &mut innermost);

        let forest = Forest::new(blocks, innermost);
        tracing::debug!(
            lines = lines.len(),
            sections = forest.count(BlockKind::Section),
            groups = forest.count(BlockKind::Group),
            "parsed configuration structure"
        );

        forest
    }

    fn is_boundary(&self, line: &Line) -> bool {
        self.options.boundaries().intersects(line.preceded_by())
    }

    /// Open a section at every line followed by a more-indented one and
    /// close it on the first line indented at or below its header.
    ///
    /// Returns, per line, the section whose body directly contains it.
    fn nest_sections(
        &self,
        lines: &[Line],
        blocks: &mut Vec<Block>,
        innermost: &mut [Option<BlockId>],
    ) -> Vec<Option<BlockId>> {
        let mut open: Vec<(BlockId, usize)> = Vec::new();
        let mut enclosing = vec![None; lines.len()];

        for (index, line) in lines.iter().enumerate() {
            let indent = line.indent();
            let boundary = self.is_boundary(line);

            while let Some(&(id, header_indent)) = open.last() {
                if !boundary && indent > header_indent {
                    break;
                }
                blocks[id.0].close(index);
                open.pop();
            }

            let parent = open.last().map(|&(id, _)| id);
            enclosing[index] = parent;
            innermost[index] = parent;

            let opens_section = lines
                .get(index + 1)
                .is_some_and(|next| next.indent() > indent && !self.is_boundary(next));

            if opens_section {
                let id = BlockId(blocks.len());
                blocks.push(Block::section(index, open.len(), parent));
                open.push((id, indent));
                innermost[index] = Some(id);
            }
        }

        for (id, _) in open {
            blocks[id.0].close(lines.len());
        }

        enclosing
    }

    /// Collapse runs of 2+ consecutive sibling lines sharing their leading
    /// words into groups. Section headers never join a group.
    fn collect_groups(
        &self,
        lines: &[Line],
        enclosing: &[Option<BlockId>],
        blocks: &mut Vec<Block>,
        innermost: &mut [Option<BlockId>],
    ) {
        let mut run: Option<GroupRun> = None;

        for (index, line) in lines.iter().enumerate() {
            let is_header = innermost[index].is_some_and(|id| blocks[id.0].header() == Some(index));
            let key = if is_header {
                None
            } else {
                line.leading_words(self.options.group_words())
            };

            if let (Some(current), Some(key)) = (run.as_mut(), key.as_ref()) {
                let continues = current.end == index
                    && current.parent == enclosing[index]
                    && current.indent == line.indent()
                    && current.key == *key
                    && !self.is_boundary(line);

                if continues {
                    current.end = index + 1;
                    continue;
                }
            }

            if let Some(done) = run.take() {
                Self::push_group(done, blocks, innermost);
            }

            run = key.map(|key| GroupRun {
                key,
                indent: line.indent(),
                parent: enclosing[index],
                start: index,
                end: index + 1,
            });
        }

        if let Some(done) = run {
            Self::push_group(done, blocks, innermost);
        }
    }

    fn push_group(run: GroupRun, blocks: &mut Vec<Block>, innermost: &mut [Option<BlockId>]) {
        if run.end - run.start < 2 {
            return;
        }

        let depth = run.parent.map_or(0, |parent| blocks[parent.0].depth() + 1);
        let id = BlockId(blocks.len());
        blocks.push(Block::group(run.start..run.end, depth, run.parent));

        for slot in &mut innermost[run.start..run.end] {
            *slot = Some(id);
        }
    }
}
