use crate::Arbitrary;
use crate::Value;
use std::collections::BTreeMap;

/// One row of the test set: column name to raw text.
/// Values stay textual until a traversal asks for them, so a bad cell
/// only fails the sample that contains it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    fields: BTreeMap<String, String>,
}

impl Sample {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
    /// Numeric value of a column, None when absent or not a number.
    pub fn number(&self, name: &str) -> Option<Value> {
        self.get(name).and_then(|s| s.trim().parse::<Value>().ok())
    }
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }
    pub fn len(&self) -> usize {
        self.fields.len()
    }
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Sample
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Sample
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Random sample over `feat0..feat3` and `target`, values in [0, 10).
impl Arbitrary for Sample {
    fn random() -> Self {
        (0..4)
            .map(|i| format!("feat{}", i))
            .chain(std::iter::once(String::from("target")))
            .map(|name| (name, format!("{:.3}", rand::random::<f64>() * 10.0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_lazily() {
        let sample = Sample::from([("a", " 1.5 "), ("b", "n/a")]);
        assert_eq!(sample.number("a"), Some(1.5));
        assert_eq!(sample.number("b"), None);
        assert_eq!(sample.number("c"), None);
        assert_eq!(sample.get("b"), Some("n/a"));
    }
    #[test]
    fn random_sample_has_all_columns() {
        let sample = Sample::random();
        assert_eq!(sample.len(), 5);
        assert!(sample.number("feat3").is_some());
        assert!(sample.number("target").is_some());
    }
}
