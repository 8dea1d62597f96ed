use super::*;
use crate::NodeId;
use crate::Value;
use crate::data::Sample;
use crate::tree::Kind;
use crate::tree::Meta;
use crate::tree::Model;

/// Outcome of routing one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub leaf: NodeId,
    pub value: Value,
    pub path: Path,
}

impl Prediction {
    /// Signed error, predicted minus true.
    pub fn error(&self, truth: Value) -> Value {
        self.value - truth
    }
}

/// Routes samples through a model, resolving feature indices to sample
/// columns via the metadata's feature names.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    model: &'a Model,
    names: &'a [String],
}

impl<'a> Predictor<'a> {
    pub fn new(model: &'a Model, meta: &'a Meta) -> Self {
        Self {
            model,
            names: meta.feature_names(),
        }
    }
    pub fn model(&self) -> &Model {
        self.model
    }
    /// Walks from the root: at each split, a value at or below the
    /// threshold goes left, otherwise right. Pure and deterministic.
    pub fn predict(&self, sample: &Sample) -> Result<Prediction, PredictError> {
        let mut id = self.model.root();
        let mut path = Vec::new();
        loop {
            if path.len() > self.model.len() {
                return Err(PredictError::Cycle(id));
            }
            let node = self.model.get(id).ok_or(PredictError::DanglingNode(id))?;
            path.push(id);
            match node.kind() {
                Kind::Leaf(value) => {
                    return Ok(Prediction {
                        leaf: id,
                        value: *value,
                        path: Path::try_from(path).expect("root was visited"),
                    });
                }
                Kind::Split(split) => {
                    let value = self.resolve(sample, split.feature)?;
                    id = split.child(split.route(value));
                }
            }
        }
    }
}

impl Predictor<'_> {
    fn resolve(&self, sample: &Sample, feature: usize) -> Result<Value, PredictError> {
        let name = self
            .names
            .get(feature)
            .ok_or(PredictError::UnnamedFeature(feature))?;
        let text = sample
            .get(name)
            .ok_or_else(|| PredictError::MissingFeature(name.clone()))?;
        text.trim()
            .parse::<Value>()
            .map_err(|_| PredictError::InvalidValue {
                feature: name.clone(),
                text: text.to_string(),
            })
    }
}
