//! End-to-end export pipeline: fetch, reconcile, extract, assemble, write.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tokio::runtime::Runtime;
use url::Url;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{ExportError, Result};
use crate::extract::{self, Extraction};
use crate::forge::ForgeClient;
use crate::matcher;
use crate::reconcile;
use crate::release::Release;
use crate::report::{self, ReportMeta};
use crate::tracker::TrackerClient;
use crate::ui;

pub fn execute(cli: &Cli) -> Result<()> {
    let release = Release::parse(&cli.release)?;
    let mut config = Config::load(Path::new(&cli.config))?;
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }

    let rt = Runtime::new()?;
    rt.block_on(run(&release, &config, cli.verbose))?;
    Ok(())
}

/// Run the whole pipeline and write the document. Returns the path of the
/// generated file.
pub async fn run(release: &Release, config: &Config, verbose: bool) -> Result<PathBuf> {
    ui::section_header(&format!("Release notes for {release}"));

    let branch = release.branch();
    let forge = ForgeClient::new(&config.forge)?;

    ui::status_message(&format!(
        "Fetching the last tagged release from the forge for the {branch} branch"
    ));
    let tag = forge
        .last_tag(&release.tag_search())
        .await?
        .ok_or_else(|| ExportError::TagNotFound {
            search: release.tag_search(),
        })?;
    ui::success_message(&format!(
        "Last tag is {} created at {}",
        tag.name, tag.commit.created_at
    ));

    ui::status_message(&format!(
        "Fetching all commits on {branch} since {}",
        tag.commit.created_at
    ));
    let commits = forge.list_commits(&branch, tag.commit.created_at).await?;
    let committed: HashSet<u64> = commits
        .iter()
        .filter_map(|commit| matcher::issue_id(&commit.title))
        .collect();
    ui::success_message(&format!(
        "{} commits reference {} distinct issues",
        commits.len(),
        committed.len()
    ));

    let tracker = TrackerClient::new(&config.tracker)?;
    let label = release.note_tag_label();

    ui::status_message(&format!("Resolving the category id for the tag '{label}'"));
    let category_id = tracker
        .resolve_category(&label)
        .await?
        .ok_or_else(|| ExportError::CategoryNotFound {
            label: label.clone(),
        })?;

    ui::status_message(&format!(
        "Fetching all tracker issues with the category id {category_id}"
    ));
    let issues = tracker.list_issues(category_id).await?;
    let reconciled = reconcile::reconcile(&committed, issues);
    ui::success_message(&format!(
        "Found {} issues to add in the release notes",
        reconciled.len()
    ));

    let mut notes = Vec::new();
    let mut missing = Vec::new();
    for issue in &reconciled {
        match extract::extract(issue, &config.tracker.issue_url_base) {
            Extraction::Found(note) => notes.push(note),
            Extraction::Missing(entry) => missing.push(entry),
        }
    }
    if !missing.is_empty() {
        ui::warning_message(&format!(
            "{} issues lack an extractable release-notes section",
            missing.len()
        ));
        if verbose {
            for entry in &missing {
                println!("  missing: #{} {}", entry.issue_id, entry.issue_title);
            }
        }
    }

    let meta = ReportMeta {
        version: release.to_string(),
        branch,
        tag_name: tag.name.clone(),
        tag_timestamp: tag.commit.created_at.to_rfc3339(),
        tag_label: label.clone(),
        search_url: search_url(config, &label)?,
        issue_url_base: config.tracker.issue_url_base.clone(),
    };
    let document = report::assemble(&notes, &missing, &meta);

    fs::create_dir_all(&config.output_dir)?;
    let path = config.output_dir.join(format!("{release}.html"));
    fs::write(&path, document)?;

    let shown = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
    ui::info_message(&format!(
        "File generated, open in a browser: file://{}",
        shown.display()
    ));

    Ok(path)
}

/// Tracker search page listing every issue carrying the release-note tag.
fn search_url(config: &Config, label: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &config.tracker.search_base,
        &[
            ("projects", config.tracker.project_label.as_str()),
            ("issue_tags", label),
        ],
    )?;
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_the_tag_label() {
        let config = Config::default();

        let url = search_url(&config, "10.0.1 release notes").unwrap();

        assert_eq!(
            url,
            "https://www.drupal.org/project/issues/search?projects=Drupal+core&issue_tags=10.0.1+release+notes"
        );
    }
}
