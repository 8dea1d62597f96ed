use super::ModelError;
use crate::NodeId;
use crate::Value;
use serde::Deserialize;

/// Which child a split sends a sample to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Left,
    Right,
}

/// Binary routing rule of an internal node.
/// A value at or below the threshold goes left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub feature: usize,
    pub threshold: Value,
    pub left: NodeId,
    pub right: NodeId,
}

impl Split {
    pub fn route(&self, value: Value) -> Branch {
        if value <= self.threshold {
            Branch::Left
        } else {
            Branch::Right
        }
    }
    pub fn child(&self, branch: Branch) -> NodeId {
        match branch {
            Branch::Left => self.left,
            Branch::Right => self.right,
        }
    }
    pub fn children(&self) -> [(Branch, NodeId); 2] {
        [(Branch::Left, self.left), (Branch::Right, self.right)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    Split(Split),
    Leaf(Value),
}

/// A validated tree node.
/// The descriptive fields are whatever the exporter wrote and may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    id: NodeId,
    kind: Kind,
    mean: Option<Value>,
    samples: Option<usize>,
    impurity: Option<Value>,
}

impl TreeNode {
    pub fn leaf(id: NodeId, value: Value) -> Self {
        Self {
            id,
            kind: Kind::Leaf(value),
            mean: Some(value),
            samples: None,
            impurity: None,
        }
    }
    pub fn split(id: NodeId, feature: usize, threshold: Value, left: NodeId, right: NodeId) -> Self {
        Self {
            id,
            kind: Kind::Split(Split {
                feature,
                threshold,
                left,
                right,
            }),
            mean: None,
            samples: None,
            impurity: None,
        }
    }
    pub fn id(&self) -> NodeId {
        self.id
    }
    pub fn kind(&self) -> &Kind {
        &self.kind
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, Kind::Leaf(_))
    }
    pub fn split_rule(&self) -> Option<&Split> {
        match self.kind {
            Kind::Split(ref split) => Some(split),
            Kind::Leaf(_) => None,
        }
    }
    /// Prediction of a leaf; None for splits.
    pub fn value(&self) -> Option<Value> {
        match self.kind {
            Kind::Leaf(value) => Some(value),
            Kind::Split(_) => None,
        }
    }
    /// Mean target of the training rows that reached this node.
    pub fn mean(&self) -> Option<Value> {
        self.mean
    }
    pub fn samples(&self) -> Option<usize> {
        self.samples
    }
    pub fn impurity(&self) -> Option<Value> {
        self.impurity
    }
}

/// Node exactly as it appears in the model document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub id: NodeId,
    pub is_leaf: bool,
    #[serde(default)]
    pub feature_index: Option<usize>,
    #[serde(default)]
    pub threshold: Option<Value>,
    #[serde(default)]
    pub left: Option<NodeId>,
    #[serde(default)]
    pub right: Option<NodeId>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub n_samples: Option<usize>,
    #[serde(default)]
    pub impurity: Option<Value>,
}

impl TryFrom<RawNode> for TreeNode {
    type Error = ModelError;
    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let id = raw.id;
        let missing = |field| ModelError::MissingField(id, field);
        let kind = if raw.is_leaf {
            Kind::Leaf(raw.value.ok_or_else(|| missing("value"))?)
        } else {
            Kind::Split(Split {
                feature: raw.feature_index.ok_or_else(|| missing("featureIndex"))?,
                threshold: raw.threshold.ok_or_else(|| missing("threshold"))?,
                left: raw.left.ok_or_else(|| missing("left"))?,
                right: raw.right.ok_or_else(|| missing("right"))?,
            })
        };
        Ok(Self {
            id,
            kind,
            mean: raw.value,
            samples: raw.n_samples,
            impurity: raw.impurity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn threshold_routes_left_inclusive() {
        let split = Split {
            feature: 0,
            threshold: 5.0,
            left: 1,
            right: 2,
        };
        assert_eq!(split.route(4.99), Branch::Left);
        assert_eq!(split.route(5.0), Branch::Left);
        assert_eq!(split.route(5.01), Branch::Right);
    }
    #[test]
    fn leaf_requires_value() {
        let node = TreeNode::try_from(raw(r#"{"id":3,"isLeaf":true}"#));
        assert!(matches!(node, Err(ModelError::MissingField(3, "value"))));
    }
    #[test]
    fn split_requires_children() {
        let node = TreeNode::try_from(raw(
            r#"{"id":0,"isLeaf":false,"featureIndex":1,"threshold":2.5,"left":1}"#,
        ));
        assert!(matches!(node, Err(ModelError::MissingField(0, "right"))));
    }
    #[test]
    fn exporter_fields_are_kept() {
        let node = TreeNode::try_from(raw(
            r#"{"id":0,"isLeaf":false,"feature":"MedInc","featureIndex":0,
                "threshold":5.03,"left":1,"right":2,
                "nSamples":3000,"impurity":1.31,"value":2.07}"#,
        ))
        .unwrap();
        assert!(!node.is_leaf());
        assert_eq!(node.value(), None);
        assert_eq!(node.mean(), Some(2.07));
        assert_eq!(node.samples(), Some(3000));
        assert_eq!(node.split_rule().map(|s| s.threshold), Some(5.03));
    }
}
