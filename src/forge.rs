//! Version-control forge API: release tags and commit history.

use crate::client::RestClient;
use crate::config::ForgeConfig;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A release tag with the timestamp of the commit it points at.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    pub commit: TagCommit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagCommit {
    pub created_at: DateTime<Utc>,
}

/// One commit as listed by the forge; only the title participates in
/// issue matching.
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub title: String,
}

pub struct ForgeClient {
    rest: RestClient,
    project_id: u64,
}

impl ForgeClient {
    pub fn new(config: &ForgeConfig) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(&config.api_base)?,
            project_id: config.project_id,
        })
    }

    /// Most recent tag matching the search prefix, if any. The forge orders
    /// tags most-recently-updated first.
    pub async fn last_tag(&self, search: &str) -> Result<Option<Tag>> {
        let path = format!("projects/{}/repository/tags", self.project_id);
        let query = [("search", search.to_string())];
        let tags: Vec<Tag> = self.rest.fetch_all(&path, &query).await?;
        Ok(tags.into_iter().next())
    }

    /// All commits on `ref_name` created after `since`, in server order.
    pub async fn list_commits(&self, ref_name: &str, since: DateTime<Utc>) -> Result<Vec<Commit>> {
        let path = format!("projects/{}/repository/commits", self.project_id);
        let query = [
            ("ref_name", ref_name.to_string()),
            ("since", since.to_rfc3339()),
        ];
        self.rest.fetch_all(&path, &query).await
    }
}
