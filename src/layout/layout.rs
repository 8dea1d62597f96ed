use super::*;
use crate::NODE_SPACING_X;
use crate::NODE_SPACING_Y;
use crate::NodeId;
use crate::Pixels;
use crate::predict::Link;
use crate::predict::Path;
use crate::tree::Hierarchy;
use crate::tree::Model;
use std::collections::BTreeMap;

/// Fixed distance between neighbouring leaves and between depths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub dx: Pixels,
    pub dy: Pixels,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            dx: NODE_SPACING_X,
            dy: NODE_SPACING_Y,
        }
    }
}

/// Node coordinates and the edge list of a drawn tree.
///
/// Leaves sit on consecutive slots `dx` apart in left-to-right order,
/// each split is centred over its two children, and depth `d` sits at
/// `y = d * dy`. The root is at `x = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    points: BTreeMap<NodeId, Point>,
    links: Vec<Link>,
}

impl Layout {
    pub fn new(hierarchy: &Hierarchy, spacing: Spacing) -> Self {
        let mut points = BTreeMap::new();
        let mut slot = 0usize;
        Self::place(hierarchy, hierarchy.root(), 0, spacing, &mut slot, &mut points);
        let shift = points.get(&hierarchy.root()).map(|p| p.x).unwrap_or(0.0);
        points.values_mut().for_each(|p| p.x -= shift);
        let links = hierarchy.links().into_iter().map(Link::from).collect();
        Self { points, links }
    }
    pub fn point(&self, id: NodeId) -> Option<Point> {
        self.points.get(&id).copied()
    }
    pub fn points(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.points.iter().map(|(id, p)| (*id, *p))
    }
    pub fn links(&self) -> &[Link] {
        &self.links
    }
    /// Coordinates of every node on a path, root first.
    pub fn trace(&self, path: &Path) -> Vec<Point> {
        path.nodes()
            .iter()
            .filter_map(|id| self.point(*id))
            .collect()
    }
    pub fn bounds(&self) -> Bounds {
        Bounds::enclosing(self.points.values().copied())
    }
}

impl Layout {
    fn place(
        hierarchy: &Hierarchy,
        id: NodeId,
        depth: usize,
        spacing: Spacing,
        slot: &mut usize,
        points: &mut BTreeMap<NodeId, Point>,
    ) -> Pixels {
        let kids = hierarchy.children(id);
        let x = match kids.as_slice() {
            [] => {
                let x = *slot as Pixels * spacing.dx;
                *slot += 1;
                x
            }
            _ => {
                let xs = kids
                    .iter()
                    .map(|kid| Self::place(hierarchy, *kid, depth + 1, spacing, slot, points))
                    .collect::<Vec<_>>();
                (xs[0] + xs[xs.len() - 1]) / 2.0
            }
        };
        points.insert(id, Point::new(x, depth as Pixels * spacing.dy));
        x
    }
}

impl From<&Model> for Layout {
    fn from(model: &Model) -> Self {
        Self::new(&Hierarchy::from(model), Spacing::default())
    }
}
