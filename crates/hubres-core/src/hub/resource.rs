//! Content returned by the hub resolver.

use std::collections::HashMap;

use crate::resolver::{ConfigSource, ResolvedResource};

/// YAML bytes fetched from the hub. Carries no annotations and no source:
/// the hub response gives no digest to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHubResource {
    content: Vec<u8>,
}

impl ResolvedHubResource {
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }
}

impl ResolvedResource for ResolvedHubResource {
    fn data(&self) -> &[u8] {
        &self.content
    }

    fn annotations(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn source(&self) -> Option<&ConfigSource> {
        None
    }
}
