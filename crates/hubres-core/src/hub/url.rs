//! Hub lookup URL built from a positional template.
//!
//! The template carries four `%s` slots filled with catalog, kind, name and
//! version, in that order. Values are substituted verbatim: nothing is
//! percent-encoded, so a value containing `/`, `?` or `#` changes the URL
//! structure.

use crate::error::ResolveError;
use crate::params::HubParams;

const SLOT: &str = "%s";
const SLOT_COUNT: usize = 4;

/// Public Tekton Hub API endpoint for raw resource YAML.
pub const DEFAULT_HUB_URL: &str = "https://api.hub.tekton.dev/v1/resource/%s/%s/%s/%s/yaml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    raw: String,
    /// Literal text around the slots; always `SLOT_COUNT + 1` pieces.
    pieces: Vec<String>,
}

impl UrlTemplate {
    pub fn parse(template: &str) -> Result<Self, ResolveError> {
        let pieces: Vec<String> = template.split(SLOT).map(String::from).collect();
        let found = pieces.len() - 1;
        if found != SLOT_COUNT {
            return Err(ResolveError::InvalidTemplate {
                template: template.to_string(),
                found,
            });
        }
        Ok(Self {
            raw: template.to_string(),
            pieces,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn render(&self, params: &HubParams) -> String {
        let values = [
            params.catalog.as_str(),
            params.kind.as_str(),
            params.name.as_str(),
            params.version.as_str(),
        ];
        let mut url = String::with_capacity(
            self.raw.len() + values.iter().map(|v| v.len()).sum::<usize>(),
        );
        url.push_str(&self.pieces[0]);
        for (value, piece) in values.iter().zip(&self.pieces[1..]) {
            url.push_str(value);
            url.push_str(piece);
        }
        url
    }
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self {
            raw: DEFAULT_HUB_URL.to_string(),
            pieces: DEFAULT_HUB_URL.split(SLOT).map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Kind;

    fn hub_params(catalog: &str, kind: Kind, name: &str, version: &str) -> HubParams {
        HubParams {
            catalog: catalog.to_string(),
            kind,
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn render_fills_slots_in_order() {
        let t = UrlTemplate::default();
        let url = t.render(&hub_params("Tekton", Kind::Task, "git-clone", "0.9"));
        assert_eq!(
            url,
            "https://api.hub.tekton.dev/v1/resource/Tekton/task/git-clone/0.9/yaml"
        );
    }

    #[test]
    fn render_with_query_style_template() {
        let t = UrlTemplate::parse("http://hub/%s?kind=%s&name=%s&v=%s").unwrap();
        let url = t.render(&hub_params("c", Kind::Pipeline, "n", "1"));
        assert_eq!(url, "http://hub/c?kind=pipeline&name=n&v=1");
    }

    #[test]
    fn render_does_not_escape_values() {
        let t = UrlTemplate::default();
        let url = t.render(&hub_params("a/b", Kind::Task, "x?y", "1#2"));
        assert_eq!(
            url,
            "https://api.hub.tekton.dev/v1/resource/a/b/task/x?y/1#2/yaml"
        );
    }

    #[test]
    fn parse_rejects_wrong_slot_count() {
        for (t, n) in [("http://hub/%s/%s/%s", 3), ("http://hub/", 0), ("%s%s%s%s%s", 5)] {
            match UrlTemplate::parse(t) {
                Err(ResolveError::InvalidTemplate { found, .. }) => assert_eq!(found, n),
                other => panic!("{t}: expected InvalidTemplate, got {other:?}"),
            }
        }
    }
}
