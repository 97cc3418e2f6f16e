//! Release-note extraction from issue description HTML.
//!
//! Issue bodies are loosely structured author-written HTML. The release-note
//! section is located either by the `summary-release-notes` anchor id or by
//! the last `h2`/`h3` heading mentioning the word "release". Everything
//! between that heading and the next `h2`/`h3` becomes the note body.

use crate::report::nl2br;
use crate::tracker::Issue;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

static NOTES_ANCHOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#summary-release-notes").expect("Failed to compile notes anchor selector")
});

static SECTION_HEADINGS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2, h3").expect("Failed to compile heading selector"));

static RELEASE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\brelease\b").expect("Failed to compile release word regex"));

/// Sections whose trimmed text is at or below this length carry no usable
/// note, only leftovers such as a bare heading.
const MIN_SECTION_LENGTH: usize = 9;

/// An extracted, display-ready release note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    pub issue_id: u64,
    pub issue_title: String,
    pub html: String,
}

/// An issue whose description yielded no usable release-note section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingNote {
    pub issue_id: u64,
    pub issue_title: String,
}

/// Outcome of extraction: every issue produces exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(ReleaseNote),
    Missing(MissingNote),
}

/// Extract the release-note section from an issue's description body.
pub fn extract(issue: &Issue, issue_url_base: &str) -> Extraction {
    let document = Html::parse_fragment(&issue.body.value);

    let Some(heading) = find_section_heading(&document) else {
        return missing(issue);
    };

    let section = collect_section(heading);
    let text = html_escape::encode_text(&strip_markup(&section)).into_owned();
    if text.trim().len() <= MIN_SECTION_LENGTH {
        return missing(issue);
    }

    let attribution = format!(
        "&lt;!--From <a href='{issue_url_base}{id}'>#{id} {title}</a>-->",
        id = issue.nid,
        title = issue.title,
    );
    Extraction::Found(ReleaseNote {
        issue_id: issue.nid,
        issue_title: issue.title.clone(),
        html: nl2br(&format!("{attribution}\n\n{text}")),
    })
}

fn missing(issue: &Issue) -> Extraction {
    Extraction::Missing(MissingNote {
        issue_id: issue.nid,
        issue_title: issue.title.clone(),
    })
}

/// Locate the heading that opens the release-note section. The anchor id is
/// authoritative; otherwise headings are scanned in document order and the
/// last one mentioning "release" wins.
fn find_section_heading(document: &Html) -> Option<ElementRef<'_>> {
    if let Some(anchor) = document.select(&NOTES_ANCHOR).next() {
        return Some(anchor);
    }

    let mut found = None;
    for candidate in document.select(&SECTION_HEADINGS) {
        let text: String = candidate.text().collect();
        if RELEASE_WORD.is_match(&text) {
            found = Some(candidate);
        }
    }
    found
}

/// Inner markup of every element sibling between the heading and the next
/// `h2`/`h3`, joined with newlines.
fn collect_section(heading: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    for node in heading.next_siblings() {
        if let Some(element) = ElementRef::wrap(node) {
            let name = element.value().name();
            if name == "h2" || name == "h3" {
                break;
            }
            parts.push(element.inner_html());
        }
    }
    parts.join("\n")
}

/// Drop all markup except `<a>` and `<code>` elements, keeping their
/// attributes, and flatten everything else to its text content.
fn strip_markup(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    collect_text(fragment.root_element(), &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for node in element.children() {
        if let Some(child) = ElementRef::wrap(node) {
            let name = child.value().name();
            if name == "a" || name == "code" {
                out.push('<');
                out.push_str(name);
                for (attr, value) in child.value().attrs() {
                    out.push_str(&format!(" {attr}=\"{value}\""));
                }
                out.push('>');
                collect_text(child, out);
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            } else {
                collect_text(child, out);
            }
        } else if let Node::Text(text) = node.value() {
            out.push_str(text);
        }
    }
}
