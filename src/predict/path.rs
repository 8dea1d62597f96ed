use crate::NodeId;

/// Stable identifier of a parent-child edge, `link-{parent}-{child}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link {
    pub parent: NodeId,
    pub child: NodeId,
}

impl From<(NodeId, NodeId)> for Link {
    fn from((parent, child): (NodeId, NodeId)) -> Self {
        Self { parent, child }
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "link-{}-{}", self.parent, self.child)
    }
}

/// Root-to-leaf sequence of visited nodes.
/// Never empty: a traversal always visits at least the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<NodeId>);

impl Path {
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }
    pub fn root(&self) -> NodeId {
        self.0[0]
    }
    pub fn leaf(&self) -> NodeId {
        self.0[self.0.len() - 1]
    }
    /// Number of visited nodes, depth + 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Number of edges between root and leaf.
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }
    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.0.windows(2).map(|w| Link::from((w[0], w[1])))
    }
    pub fn contains_link(&self, link: &Link) -> bool {
        self.links().any(|l| l == *link)
    }
}

impl TryFrom<Vec<NodeId>> for Path {
    type Error = &'static str;
    fn try_from(nodes: Vec<NodeId>) -> Result<Self, Self::Error> {
        match nodes.is_empty() {
            true => Err("path must contain the root"),
            false => Ok(Self(nodes)),
        }
    }
}

impl From<Path> for Vec<NodeId> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids = self
            .0
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" > ");
        write!(f, "{}", ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert!(Path::try_from(vec![]).is_err());
    }
    #[test]
    fn single_node_has_no_links() {
        let path = Path::try_from(vec![4]).unwrap();
        assert_eq!(path.root(), 4);
        assert_eq!(path.leaf(), 4);
        assert_eq!(path.depth(), 0);
        assert_eq!(path.links().count(), 0);
    }
    #[test]
    fn links_follow_visit_order() {
        let path = Path::try_from(vec![0, 1, 4]).unwrap();
        let links = path.links().map(|l| l.to_string()).collect::<Vec<_>>();
        assert_eq!(links, vec!["link-0-1", "link-1-4"]);
        assert!(path.contains_link(&Link::from((1, 4))));
        assert!(!path.contains_link(&Link::from((0, 4))));
        assert_eq!(path.to_string(), "0 > 1 > 4");
    }
}
