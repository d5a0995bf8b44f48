use crate::artifacts::diff::change_region::{ChangeRegion, Side};
use crate::artifacts::structure::block::BlockId;
use crate::artifacts::structure::forest::Forest;
use std::collections::BTreeSet;
use std::ops::Range;

/// Identity of the structure a line is reported under
///
/// Lines inside a section share the key of its top-level section, lines of a
/// top-level group share the group's key and unaffiliated lines stand alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowKey {
    Block(BlockId),
    Line(usize),
}

impl WindowKey {
    pub fn of(forest: &Forest, line: usize) -> Self {
        match forest.innermost(line) {
            Some(id) => WindowKey::Block(forest.root(id)),
            None => WindowKey::Line(line),
        }
    }
}

/// Number of distinct windows the given lines would be reported in
pub fn window_count(forest: &Forest, lines: Range<usize>) -> usize {
    lines
        .map(|line| WindowKey::of(forest, line))
        .collect::<BTreeSet<_>>()
        .len()
}

/// The lines of one side that must be shown around a change
///
/// `lines` is the hull of every innermost block touched by the change;
/// `anchors` are headers of enclosing sections that fall outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    side: Side,
    lines: Range<usize>,
    anchors: BTreeSet<usize>,
    keys: BTreeSet<WindowKey>,
}

impl ContextWindow {
    pub fn from_region(region: &ChangeRegion, forest: &Forest) -> Self {
        let mut lines = region.lines();
        let mut anchors = BTreeSet::new();
        let mut keys = BTreeSet::new();

        for line in region.lines() {
            keys.insert(WindowKey::of(forest, line));

            if let Some(id) = forest.innermost(line) {
                let members = forest.block(id).members();
                lines = lines.start.min(members.start)..lines.end.max(members.end);
                anchors.extend(forest.ancestor_headers(id));
            }
        }

        anchors.retain(|anchor| !lines.contains(anchor));

        ContextWindow {
            side: region.side(),
            lines,
            anchors,
            keys,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn lines(&self) -> Range<usize> {
        self.lines.clone()
    }

    pub fn anchors(&self) -> &BTreeSet<usize> {
        &self.anchors
    }

    pub fn contains(&self, line: usize) -> bool {
        self.lines.contains(&line) || self.anchors.contains(&line)
    }

    /// Every line of the window in document order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.anchors.iter().copied().chain(self.lines.clone())
    }

    /// Overlapping, adjacent, or inside the same top-level structure
    pub fn merges_with(&self, other: &ContextWindow) -> bool {
        let touches =
            other.lines.start <= self.lines.end && self.lines.start <= other.lines.end;

        touches || !self.keys.is_disjoint(&other.keys)
    }

    pub fn merge(&mut self, other: ContextWindow) {
        self.lines =
            self.lines.start.min(other.lines.start)..self.lines.end.max(other.lines.end);
        self.anchors.extend(other.anchors);
        self.keys.extend(other.keys);

        let lines = self.lines.clone();
        self.anchors.retain(|anchor| !lines.contains(anchor));
    }

    /// Build the windows of one side and merge them in document order
    pub fn collect<'r>(
        regions: impl IntoIterator<Item = &'r ChangeRegion>,
        forest: &Forest,
    ) -> Vec<ContextWindow> {
        let mut windows = regions
            .into_iter()
            .map(|region| ContextWindow::from_region(region, forest))
            .collect::<Vec<_>>();
        windows.sort_by_key(|window| window.lines.start);

        let mut merged: Vec<ContextWindow> = Vec::with_capacity(windows.len());
        for window in windows {
            match merged.last_mut() {
                Some(last) if last.merges_with(&window) => last.merge(window),
                _ => merged.push(window),
            }
        }

        merged
    }
}
