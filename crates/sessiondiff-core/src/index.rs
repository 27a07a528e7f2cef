use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::Security;

/// Key-value store of decoded securities keyed by security group.
///
/// Inserting a key that is already present replaces the stored record and
/// hands back the previous one: the latest line for a group wins.
pub trait SecurityStore {
    fn insert(&mut self, security: Security) -> Option<Security>;

    fn get(&self, security_group: &str) -> Option<&Security>;

    /// Keys in ascending order.
    fn keys(&self) -> Vec<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered in-memory [`SecurityStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityIndex {
    entries: BTreeMap<String, Security>,
}

impl SecurityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Security)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl SecurityStore for SecurityIndex {
    fn insert(&mut self, security: Security) -> Option<Security> {
        let previous = self
            .entries
            .insert(security.security_group.clone(), security);
        if let Some(previous) = &previous {
            debug!(
                security_group = %previous.security_group,
                "replaced earlier record for security group"
            );
        }
        previous
    }

    fn get(&self, security_group: &str) -> Option<&Security> {
        self.entries.get(security_group)
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<Security> for SecurityIndex {
    fn from_iter<I: IntoIterator<Item = Security>>(iter: I) -> Self {
        let mut index = Self::new();
        for security in iter {
            index.insert(security);
        }
        index
    }
}
