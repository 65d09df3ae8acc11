//! Insertion-ordered named multipliers.

use num_traits::Float;

/// Named multipliers applied in insertion order after the core stages.
///
/// Behaves like an ordered mapping: inserting an existing name replaces its
/// multiplier and keeps its original position. Because floating-point
/// multiplication is not associative, the order is significant in the last
/// bits of the result.
///
/// # Examples
///
/// ```
/// use valuer_models::pipeline::AdditionalFactors;
///
/// let factors = AdditionalFactors::new()
///     .with("brand_reputation", 1.1_f64)
///     .with("special_features", 1.05);
///
/// assert_eq!(factors.len(), 2);
/// assert_eq!(factors.names().collect::<Vec<_>>(), ["brand_reputation", "special_features"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdditionalFactors<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for AdditionalFactors<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Float> AdditionalFactors<T> {
    /// Empty factor list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a factor, returning the previous multiplier.
    pub fn insert(&mut self, name: impl Into<String>, multiplier: T) -> Option<T> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, multiplier)),
            None => {
                self.entries.push((name, multiplier));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, multiplier: T) -> Self {
        self.insert(name, multiplier);
        self
    }

    /// Multiplier for `name`, if present.
    pub fn get(&self, name: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, m)| *m)
    }

    /// Number of factors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no factors are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Factor names in application order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, multiplier)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.entries.iter().map(|(n, m)| (n.as_str(), *m))
    }

    /// Multiply `value` by every factor, left to right.
    pub fn apply(&self, value: T) -> T {
        self.entries.iter().fold(value, |acc, (_, m)| acc * *m)
    }
}

impl<T: Float, S: Into<String>> FromIterator<(S, T)> for AdditionalFactors<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut factors = Self::new();
        for (name, multiplier) in iter {
            factors.insert(name, multiplier);
        }
        factors
    }
}
