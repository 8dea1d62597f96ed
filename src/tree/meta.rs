use super::ModelError;
use crate::Value;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Summary of one column over the training set.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Stats {
    pub min: Value,
    pub max: Value,
    pub median: Value,
}

/// Hyperparameters the tree was grown with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Params {
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub min_samples_leaf: Option<usize>,
    #[serde(default)]
    pub random_state: Option<u64>,
}

/// Feature metadata document.
/// `featureNames[i]` names the column that `featureIndex == i` splits on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    feature_names: Vec<String>,
    target: String,
    #[serde(default)]
    n_train: Option<usize>,
    #[serde(default)]
    params: Params,
    #[serde(default)]
    feature_stats: BTreeMap<String, Stats>,
    #[serde(default)]
    target_stats: Option<Stats>,
}

impl Meta {
    pub fn new(feature_names: Vec<String>, target: impl Into<String>) -> Self {
        Self {
            feature_names,
            target: target.into(),
            n_train: None,
            params: Params::default(),
            feature_stats: BTreeMap::new(),
            target_stats: None,
        }
    }
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ModelError> {
        Self::try_from(std::fs::read_to_string(path)?.as_str())
    }
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
    pub fn feature(&self, index: usize) -> Option<&str> {
        self.feature_names.get(index).map(String::as_str)
    }
    pub fn target(&self) -> &str {
        &self.target
    }
    pub fn n_train(&self) -> Option<usize> {
        self.n_train
    }
    pub fn params(&self) -> &Params {
        &self.params
    }
    pub fn feature_stats(&self, name: &str) -> Option<&Stats> {
        self.feature_stats.get(name)
    }
    pub fn target_stats(&self) -> Option<&Stats> {
        self.target_stats.as_ref()
    }
}

impl TryFrom<&str> for Meta {
    type Error = ModelError;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(json)?)
    }
}
