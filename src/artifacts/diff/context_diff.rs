use crate::artifacts::diff::change_region::{ChangeRegion, Side};
use crate::artifacts::diff::context_window::{ContextWindow, window_count};
use crate::artifacts::diff::edit_script::{Edit, EditScript};
use crate::artifacts::diff::myers::{DiffAlgorithm, MyersDiff};
use crate::artifacts::normalize::document::NormalizedDocument;
use crate::artifacts::report::{Hunk, LineKind, RenderedLine, Report};
use crate::artifacts::structure::forest::Forest;
use crate::artifacts::structure::parser::{ParseOptions, StructureParser};
use std::collections::BTreeSet;

/// Structure-aware comparison of two normalized documents
///
/// The line-level edit script is computed once; every later stage works on
/// integer positions into the two documents and the script.
#[derive(Debug)]
pub struct ContextDiff<'d> {
    left: &'d NormalizedDocument,
    right: &'d NormalizedDocument,
    left_forest: Forest,
    right_forest: Forest,
    script: EditScript,
}

impl<'d> ContextDiff<'d> {
    pub fn new(
        left: &'d NormalizedDocument,
        right: &'d NormalizedDocument,
        options: &ParseOptions,
    ) -> Self {
        let parser = StructureParser::new(*options);
        let left_forest = parser.parse(left);
        let right_forest = parser.parse(right);

        let (left_texts, right_texts) = (left.texts(), right.texts());
        let mut script = MyersDiff::new(&left_texts, &right_texts).diff();
        script.compact(&left_texts, &right_texts, |side, lines| match side {
            Side::Left => window_count(&left_forest, lines),
            Side::Right => window_count(&right_forest, lines),
        });

        ContextDiff {
            left,
            right,
            left_forest,
            right_forest,
            script,
        }
    }

    pub fn document(&self, side: Side) -> &NormalizedDocument {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn forest(&self, side: Side) -> &Forest {
        match side {
            Side::Left => &self.left_forest,
            Side::Right => &self.right_forest,
        }
    }

    pub fn script(&self) -> &EditScript {
        &self.script
    }

    pub fn regions(&self) -> Vec<ChangeRegion> {
        self.script.regions()
    }

    /// Merged context windows of one side, in document order
    pub fn windows(&self, side: Side) -> Vec<ContextWindow> {
        let regions = self.regions();
        ContextWindow::collect(
            regions.iter().filter(|region| region.side() == side),
            self.forest(side),
        )
    }

    /// Script positions of each rendered hunk
    ///
    /// Windows of both sides are projected onto the edit script; projections
    /// that overlap or touch are shown together so every block appears once
    /// with its before and after lines.
    pub fn hunks(&self) -> Vec<BTreeSet<usize>> {
        let mut projections = [Side::Left, Side::Right]
            .into_iter()
            .flat_map(|side| {
                let positions = self.script.positions(side);
                self.windows(side)
                    .into_iter()
                    .map(move |window| {
                        window
                            .indices()
                            .filter_map(|line| positions.get(line).copied())
                            .collect::<BTreeSet<_>>()
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|projection| !projection.is_empty())
            .collect::<Vec<_>>();
        projections.sort_by_key(|projection| projection.first().copied());

        let mut hunks: Vec<BTreeSet<usize>> = Vec::with_capacity(projections.len());
        for projection in projections {
            let joins = match (hunks.last(), projection.first()) {
                (Some(last), Some(first)) => last.last().is_some_and(|end| *first <= end + 1),
                _ => false,
            };

            match hunks.last_mut() {
                Some(last) if joins => last.extend(projection),
                _ => hunks.push(projection),
            }
        }

        hunks
    }

    pub fn report(&self) -> Report {
        let regions = self.regions();
        if regions.is_empty() {
            tracing::debug!("documents are equivalent");
            return Report::default();
        }

        let hunks = self
            .hunks()
            .into_iter()
            .map(|positions| {
                Hunk::new(
                    positions
                        .into_iter()
                        .filter_map(|position| self.render_edit(position))
                        .collect(),
                )
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            regions = regions.len(),
            left_windows = self.windows(Side::Left).len(),
            right_windows = self.windows(Side::Right).len(),
            hunks = hunks.len(),
            "computed context diff"
        );

        Report::new(hunks)
    }

    fn render_edit(&self, position: usize) -> Option<RenderedLine> {
        let (kind, line) = match *self.script.get(position)? {
            Edit::Equal { left, .. } => (LineKind::Context, self.left.line(left)?),
            Edit::Delete { left } => (LineKind::Removed, self.left.line(left)?),
            Edit::Insert { right } => (LineKind::Added, self.right.line(right)?),
        };

        Some(RenderedLine::new(kind, line.text().to_string()))
    }
}
