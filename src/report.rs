//! Final document assembly.
//!
//! The document is meant to be opened in a browser and copy/pasted into the
//! published release notes, so the list scaffolding around the notes is
//! entity-encoded on purpose: it must read as literal `<ul>`/`<li>` markup
//! instead of rendering as an actual list.

use crate::extract::{MissingNote, ReleaseNote};

/// Header metadata for one assembled report.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub version: String,
    pub branch: String,
    pub tag_name: String,
    pub tag_timestamp: String,
    pub tag_label: String,
    pub search_url: String,
    pub issue_url_base: String,
}

/// Convert newlines to presentational breaks, keeping the newline itself.
pub fn nl2br(text: &str) -> String {
    text.replace('\n', "<br />\n")
}

/// Render the final document from extracted notes, issues lacking notes and
/// the release metadata. Pure function of its inputs.
pub fn assemble(notes: &[ReleaseNote], missing: &[MissingNote], meta: &ReportMeta) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<style>\n\
         body {{max-width: 60em;margin:1em auto;font-family:sans-serif;}}\n\
         </style>\n\
         <h1>Release notes for version {version}</h1>\n\
         <p>\n\
         Issues committed to the {branch} branch <br>\n\
         since version {tag} released at {timestamp} <br>\n\
         with the tag \n\
         <a href=\"{search_url}\">\n  {label}</a>\n\
         </p>\n",
        version = meta.version,
        branch = meta.branch,
        tag = meta.tag_name,
        timestamp = meta.tag_timestamp,
        search_url = meta.search_url,
        label = meta.tag_label,
    ));

    let bodies: Vec<&str> = notes.iter().map(|note| note.html.as_str()).collect();
    out.push_str(&nl2br("&lt;ul>\n\n&lt;li>\n"));
    out.push_str(&bodies.join(&nl2br("\n&lt;/li>\n\n&lt;li>\n")));
    out.push_str(&nl2br("\n&lt;/li>\n\n&lt;/ul>"));

    out.push_str(&nl2br("\n\n\nMissing release notes:\n"));
    let links: Vec<String> = missing
        .iter()
        .map(|entry| {
            format!(
                "<a href='{base}{id}'>#{id} {title}</a>",
                base = meta.issue_url_base,
                id = entry.issue_id,
                title = entry.issue_title,
            )
        })
        .collect();
    out.push_str(&links.join(&nl2br("\n")));

    out
}
