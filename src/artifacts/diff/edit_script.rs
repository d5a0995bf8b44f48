use crate::artifacts::diff::change_region::{ChangeKind, ChangeRegion, Side};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    Delete { left: usize },
    Insert { right: usize },
    Equal { left: usize, right: usize },
}

impl Edit {
    pub fn left(&self) -> Option<usize> {
        match self {
            Edit::Delete { left } | Edit::Equal { left, .. } => Some(*left),
            Edit::Insert { .. } => None,
        }
    }

    pub fn right(&self) -> Option<usize> {
        match self {
            Edit::Insert { right } | Edit::Equal { right, .. } => Some(*right),
            Edit::Delete { .. } => None,
        }
    }

    pub fn index(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    /// The side a non-equal edit touches
    pub fn changed_side(&self) -> Option<Side> {
        match self {
            Edit::Delete { .. } => Some(Side::Left),
            Edit::Insert { .. } => Some(Side::Right),
            Edit::Equal { .. } => None,
        }
    }

    fn change(side: Side, index: usize) -> Self {
        match side {
            Side::Left => Edit::Delete { left: index },
            Side::Right => Edit::Insert { right: index },
        }
    }

    fn equal(side: Side, index: usize, other: usize) -> Self {
        match side {
            Side::Left => Edit::Equal {
                left: index,
                right: other,
            },
            Side::Right => Edit::Equal {
                left: other,
                right: index,
            },
        }
    }
}

/// An ordered edit script between two line sequences
///
/// Along the script the left and right indices each increase by exactly one
/// on every edit that touches that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    edits: Vec<Edit>,
}

impl EditScript {
    pub fn new(edits: Vec<Edit>) -> Self {
        EditScript { edits }
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn get(&self, position: usize) -> Option<&Edit> {
        self.edits.get(position)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        self.edits.iter().any(|edit| !edit.is_equal())
    }

    /// Script position of every line on `side`, indexed by line
    pub fn positions(&self, side: Side) -> Vec<usize> {
        self.edits
            .iter()
            .enumerate()
            .filter_map(|(position, edit)| edit.index(side).map(|_| position))
            .collect()
    }

    /// Maximal runs of removed (left) and added (right) lines
    ///
    /// A region ends at the next equal edit; edits of the other side may be
    /// interleaved without breaking it.
    pub fn regions(&self) -> Vec<ChangeRegion> {
        let mut regions = Vec::new();
        let mut position = 0;

        while position < self.edits.len() {
            if self.edits[position].is_equal() {
                position += 1;
                continue;
            }

            let end = self.change_end(position);
            for side in [Side::Left, Side::Right] {
                let indices = self.edits[position..end]
                    .iter()
                    .filter(|edit| edit.changed_side() == Some(side))
                    .filter_map(|edit| edit.index(side))
                    .collect::<Vec<_>>();

                if let (Some(first), Some(last)) = (indices.first(), indices.last()) {
                    let kind = match side {
                        Side::Left => ChangeKind::Removed,
                        Side::Right => ChangeKind::Added,
                    };
                    regions.push(ChangeRegion::new(kind, side, *first..*last + 1));
                }
            }

            position = end;
        }

        regions
    }

    fn change_end(&self, start: usize) -> usize {
        self.edits[start..]
            .iter()
            .position(Edit::is_equal)
            .map_or(self.edits.len(), |offset| start + offset)
    }

    /// Slide pure insertion or deletion runs along equal neighbours
    ///
    /// A run whose first line equals the line after it (or whose last line
    /// equals the line before it) can move without changing the edit cost.
    /// Each run is placed where `cost` is lowest; ties keep the original
    /// position, then the smallest shift.
    pub fn compact<F>(&mut self, left: &[&str], right: &[&str], cost: F)
    where
        F: Fn(Side, Range<usize>) -> usize,
    {
        let mut position = 0;

        while position < self.edits.len() {
            if self.edits[position].is_equal() {
                position += 1;
                continue;
            }

            let end = self.change_end(position);
            let side = self.edits[position].changed_side();
            let pure = self.edits[position..end]
                .iter()
                .all(|edit| edit.changed_side() == side);

            if let (true, Some(side)) = (pure, side) {
                let texts = match side {
                    Side::Left => left,
                    Side::Right => right,
                };
                position = self.slide_run(side, texts, position..end, &cost);
            } else {
                position = end;
            }
        }
    }

    fn slide_run<F>(&mut self, side: Side, texts: &[&str], run: Range<usize>, cost: &F) -> usize
    where
        F: Fn(Side, Range<usize>) -> usize,
    {
        let Some(start) = self.edits[run.start].index(side) else {
            return run.end;
        };
        let len = run.len();

        let up = (0..run.start)
            .take_while(|&j| {
                self.edits[run.start - 1 - j].is_equal()
                    && texts[start - 1 - j] == texts[start + len - 1 - j]
            })
            .count();
        let down = (0..self.edits.len() - run.end)
            .take_while(|&j| {
                self.edits[run.end + j].is_equal() && texts[start + j] == texts[start + len + j]
            })
            .count();

        let best = (-(up as isize)..=down as isize)
            .min_by_key(|&offset| {
                let shifted = start.saturating_add_signed(offset);
                (cost(side, shifted..shifted + len), offset.unsigned_abs(), offset)
            })
            .unwrap_or(0);

        if best == 0 {
            return run.end;
        }

        let lo = run.start.saturating_add_signed(best.min(0));
        let hi = run.end.saturating_add_signed(best.max(0));
        let others = self.edits[lo..hi]
            .iter()
            .filter(|edit| edit.is_equal())
            .filter_map(|edit| edit.index(side.other()))
            .collect::<Vec<_>>();

        let new_start = start.saturating_add_signed(best);
        let mut rebuilt = Vec::with_capacity(hi - lo);
        if best > 0 {
            rebuilt.extend(
                others
                    .iter()
                    .enumerate()
                    .map(|(j, other)| Edit::equal(side, start + j, *other)),
            );
            rebuilt.extend((new_start..new_start + len).map(|index| Edit::change(side, index)));
        } else {
            rebuilt.extend((new_start..new_start + len).map(|index| Edit::change(side, index)));
            rebuilt.extend(
                others
                    .iter()
                    .enumerate()
                    .map(|(j, other)| Edit::equal(side, new_start + len + j, *other)),
            );
        }

        tracing::trace!(%side, from = start, to = new_start, len, "slid change run");
        self.edits.splice(lo..hi, rebuilt);

        hi
    }
}
