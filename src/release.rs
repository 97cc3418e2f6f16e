use crate::error::{ExportError, Result};
use semver::Version;
use std::fmt;

/// Release coordinates derived from the version argument.
///
/// A release `major.minor.patch` collects commits from the `major.minor.x`
/// branch and issues tagged `<version> release notes` on the tracker.
#[derive(Debug, Clone)]
pub struct Release {
    version: Version,
}

impl Release {
    pub fn parse(input: &str) -> Result<Self> {
        let version = Version::parse(input).map_err(|err| ExportError::InvalidVersion {
            input: input.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self { version })
    }

    /// Branch receiving commits for this release line.
    pub fn branch(&self) -> String {
        format!("{}.{}.x", self.version.major, self.version.minor)
    }

    /// Anchored search prefix selecting tags of this release line.
    pub fn tag_search(&self) -> String {
        format!("^{}.{}", self.version.major, self.version.minor)
    }

    /// Tracker tag labelling issues that carry notes for this release.
    pub fn note_tag_label(&self) -> String {
        format!("{} release notes", self.version)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}
