use crate::NodeId;

/// Reasons a single sample cannot be routed to a leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The sample has no column for a feature the path needs.
    MissingFeature(String),
    /// The column exists but does not hold a number.
    InvalidValue { feature: String, text: String },
    /// A split refers to a feature index with no name.
    UnnamedFeature(usize),
    /// A node reference does not resolve.
    DanglingNode(NodeId),
    /// The walk revisited more nodes than the model holds.
    Cycle(NodeId),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFeature(name) => write!(f, "sample has no feature `{}`", name),
            Self::InvalidValue { feature, text } => {
                write!(f, "feature `{}` is not numeric: {:?}", feature, text)
            }
            Self::UnnamedFeature(i) => write!(f, "feature index {} has no name", i),
            Self::DanglingNode(id) => write!(f, "node {} does not exist", id),
            Self::Cycle(id) => write!(f, "traversal loops at node {}", id),
        }
    }
}

impl std::error::Error for PredictError {}
