use crate::artifacts::diff::edit_script::{Edit, EditScript};
use derive_new::new;

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> EditScript;
}

/// Myers' O(ND) shortest edit script over two slices
///
/// Edits carry indices into `a` and `b` instead of copies of the values, so
/// callers keep working on their own immutable line arenas.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq> MyersDiff<'d, T> {
    fn offset(&self) -> isize {
        (self.a.len() + self.b.len()) as isize + 1
    }
}

impl<'d, T: Eq> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset();

        let mut v = vec![0; 2 * offset as usize + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // came from k+1, thus an insertion
                    v[idx + 1]
                } else {
                    // came from k-1, thus a deletion
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset();
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;
            let idx = |k: isize| (offset + k) as usize;

            let prev_k = if k == -d || (k != d && v[idx(k - 1)] < v[idx(k + 1)]) {
                k + 1
            } else {
                k - 1
            };

            let prev_x = v[idx(prev_k)];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn diff(&self) -> EditScript {
        let mut edits = self
            .backtrack()
            .into_iter()
            .map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    Edit::Insert {
                        right: prev_y as usize,
                    }
                } else if y == prev_y {
                    Edit::Delete {
                        left: prev_x as usize,
                    }
                } else {
                    Edit::Equal {
                        left: prev_x as usize,
                        right: prev_y as usize,
                    }
                }
            })
            .collect::<Vec<_>>();

        edits.reverse();
        EditScript::new(edits)
    }
}
