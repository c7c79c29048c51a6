//! Field snapshots taken at submission time

use serde::Serialize;

/// Ordered name/value pairs captured from a form.
///
/// The snapshot owns its data, so edits made to the form after submission
/// never reach a request that is already in flight. Serializes as a
/// sequence of pairs, which is what `application/x-www-form-urlencoded`
/// encoders expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldSnapshot {
    pairs: Vec<(String, String)>,
}

impl FieldSnapshot {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Name/value pairs in form order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value recorded under `name`
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
