use crate::NodeId;
use crate::Pixels;
use crate::STACK_COLUMNS;
use crate::STACK_MARGIN;
use crate::STACK_PITCH;
use crate::Value;
use crate::layout::Point;
use std::collections::BTreeMap;

/// A deposited traversal: which sample landed and how far off it was.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Marker {
    pub sample: usize,
    pub error: Option<Value>,
}

/// Grid cell `(column, row)` of the `index`-th marker,
/// filled left-to-right then top-to-bottom.
pub fn cell(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index % columns, index / columns)
}

/// Geometry of a leaf's accumulation area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub columns: usize,
    pub pitch: Pixels,
    pub margin: Pixels,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: STACK_COLUMNS,
            pitch: STACK_PITCH,
            margin: STACK_MARGIN,
        }
    }
}

impl Grid {
    /// Offset of the `index`-th marker from its leaf.
    /// Rows are centred under the leaf and grow downward.
    pub fn offset(&self, index: usize) -> (Pixels, Pixels) {
        let (col, row) = cell(index, self.columns);
        let half = (self.columns.max(1) - 1) as Pixels * self.pitch / 2.0;
        (
            col as Pixels * self.pitch - half,
            self.margin + row as Pixels * self.pitch,
        )
    }
    pub fn place(&self, leaf: Point, index: usize) -> Point {
        let (dx, dy) = self.offset(index);
        leaf.offset(dx, dy)
    }
}

/// Append-only per-leaf marker lists. Only a full reset removes markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stacks {
    leaves: BTreeMap<NodeId, Vec<Marker>>,
}

impl Stacks {
    /// Appends a marker and returns its slot, the count before insertion.
    pub fn deposit(&mut self, leaf: NodeId, marker: Marker) -> usize {
        let stack = self.leaves.entry(leaf).or_default();
        stack.push(marker);
        stack.len() - 1
    }
    pub fn markers(&self, leaf: NodeId) -> &[Marker] {
        self.leaves.get(&leaf).map(Vec::as_slice).unwrap_or(&[])
    }
    pub fn count(&self, leaf: NodeId) -> usize {
        self.markers(leaf).len()
    }
    pub fn total(&self) -> usize {
        self.leaves.values().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[Marker])> {
        self.leaves.iter().map(|(id, m)| (*id, m.as_slice()))
    }
    pub fn clear(&mut self) {
        self.leaves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_wrap_after_columns() {
        assert_eq!(cell(0, 4), (0, 0));
        assert_eq!(cell(3, 4), (3, 0));
        assert_eq!(cell(4, 4), (0, 1));
        assert_eq!(cell(9, 4), (1, 2));
        assert_eq!(cell(5, 0), (0, 5));
    }
    #[test]
    fn grid_is_centred_under_leaf() {
        let grid = Grid {
            columns: 3,
            pitch: 10.0,
            margin: 20.0,
        };
        assert_eq!(grid.offset(0), (-10.0, 20.0));
        assert_eq!(grid.offset(1), (0.0, 20.0));
        assert_eq!(grid.offset(3), (-10.0, 30.0));
        assert_eq!(grid.place(Point::new(100.0, 0.0), 2), Point::new(110.0, 20.0));
    }
    #[test]
    fn deposits_take_next_slot() {
        let mut stacks = Stacks::default();
        assert_eq!(stacks.deposit(4, Marker::default()), 0);
        assert_eq!(stacks.deposit(4, Marker::default()), 1);
        assert_eq!(stacks.deposit(9, Marker::default()), 0);
        assert_eq!(stacks.count(4), 2);
        assert_eq!(stacks.total(), 3);
        stacks.clear();
        assert!(stacks.is_empty());
        assert_eq!(stacks.count(4), 0);
    }
}
