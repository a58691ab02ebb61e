//! Claims carrier attached to an authenticated request.
//!
//! Claims are verified upstream (see `middleware::auth`) and are read-only from here on.
//! Lookups are explicit about absence: `get` returns `Option`, `require` returns
//! `MissingClaim` so a handler cannot silently continue without an identity.

use std::collections::BTreeMap;

use thiserror::Error;

/// A required claim was absent (or blank) on an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required claim: {name}")]
pub struct MissingClaim {
    pub name: String,
}

/// Immutable claim-name → claim-value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Claims {
    values: BTreeMap<String, String>,
}

impl Claims {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Raw lookup. Blank values are reported as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn require(&self, name: &str) -> Result<&str, MissingClaim> {
        self.get(name).ok_or_else(|| MissingClaim {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Claims
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
