//! Issue-tracker REST API: category terms and issue listings.

use crate::client::RestClient;
use crate::config::TrackerConfig;
use crate::error::Result;
use serde::{Deserialize, Deserializer};

/// A tracked issue with its HTML description body.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub nid: u64,
    pub title: String,
    #[serde(default)]
    pub body: IssueBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueBody {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct Term {
    #[serde(deserialize_with = "id_from_string_or_number")]
    tid: u64,
}

/// The tracker serializes numeric ids as JSON strings; accept both shapes.
fn id_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(id) => Ok(id),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

pub struct TrackerClient {
    rest: RestClient,
    config: TrackerConfig,
}

impl TrackerClient {
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(&config.api_base)?,
            config: config.clone(),
        })
    }

    /// Resolve a release-note tag label to its numeric category id. The first
    /// listed term wins.
    pub async fn resolve_category(&self, label: &str) -> Result<Option<u64>> {
        let query = [
            ("vocabulary", self.config.vocabulary_id.to_string()),
            ("name", label.to_string()),
        ];
        let terms: Vec<Term> = self.rest.fetch_all("taxonomy_term.json", &query).await?;
        Ok(terms.first().map(|term| term.tid))
    }

    /// All project issues carrying the given category id, in listing order.
    pub async fn list_issues(&self, category_id: u64) -> Result<Vec<Issue>> {
        let category_field = format!("taxonomy_vocabulary_{}", self.config.vocabulary_id);
        let query = [
            ("field_project", self.config.project_filter_id.to_string()),
            ("type", self.config.issue_type.clone()),
            (category_field.as_str(), category_id.to_string()),
        ];
        self.rest.fetch_all("node.json", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_ids_deserialize_from_strings_and_numbers() {
        let from_string: Issue = serde_json::from_str(
            r#"{"nid": "3371535", "title": "Fix crash", "body": {"value": "<p>x</p>"}}"#,
        )
        .unwrap();
        let from_number: Issue =
            serde_json::from_str(r#"{"nid": 3371535, "title": "Fix crash"}"#).unwrap();

        assert_eq!(from_string.nid, 3371535);
        assert_eq!(from_string.body.value, "<p>x</p>");
        assert_eq!(from_number.nid, 3371535);
        assert_eq!(from_number.body.value, "");
    }

    #[test]
    fn non_numeric_issue_ids_are_rejected() {
        let result: std::result::Result<Issue, _> =
            serde_json::from_str(r#"{"nid": "abc", "title": "Fix crash"}"#);
        assert!(result.is_err());
    }
}
