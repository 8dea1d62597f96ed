use crate::NodeId;

/// Errors that make a model or metadata document unusable.
/// Any of these aborts loading; there is no partial-tree fallback.
#[derive(Debug)]
pub enum ModelError {
    Io(std::io::Error),
    Json(serde_json::Error),
    MissingField(NodeId, &'static str),
    DuplicateNode(NodeId),
    MissingRoot(NodeId),
    DanglingChild { parent: NodeId, child: NodeId },
    SecondParent(NodeId),
    RootHasParent(NodeId),
    Unreachable(NodeId),
    UnnamedFeature { node: NodeId, feature: usize },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read document: {}", e),
            Self::Json(e) => write!(f, "malformed document: {}", e),
            Self::MissingField(id, field) => write!(f, "node {} is missing `{}`", id, field),
            Self::DuplicateNode(id) => write!(f, "node {} is declared twice", id),
            Self::MissingRoot(id) => write!(f, "root {} does not exist", id),
            Self::DanglingChild { parent, child } => {
                write!(f, "node {} references missing child {}", parent, child)
            }
            Self::SecondParent(id) => write!(f, "node {} has more than one parent", id),
            Self::RootHasParent(id) => write!(f, "root {} is a child of another node", id),
            Self::Unreachable(id) => write!(f, "node {} is not reachable from the root", id),
            Self::UnnamedFeature { node, feature } => {
                write!(f, "node {} splits on feature {} which has no name", node, feature)
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ModelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
