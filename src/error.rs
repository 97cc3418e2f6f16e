use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid release version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Request to {url} failed with status {status}")]
    RequestFailed { url: String, status: u16 },

    #[error("No tag matching '{search}' found on the forge")]
    TagNotFound { search: String },

    #[error("The tag '{label}' can not be found on the tracker")]
    CategoryNotFound { label: String },
}

impl ExportError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::ConfigParse(err) => format!("Failed to parse configuration file: {err}"),
            Self::InvalidVersion { input, reason } => {
                format!("Release version argument must be major.minor.patch, got '{input}' ({reason})")
            }
            Self::Http(err) => format!("HTTP request failed: {err}"),
            Self::UrlParse(err) => format!("Invalid URL: {err}"),
            Self::RequestFailed { url, status } => {
                format!("{url} answered with status {status}")
            }
            Self::TagNotFound { search } => {
                format!("No tag matching '{search}' exists on the forge")
            }
            Self::CategoryNotFound { label } => {
                format!("The tag '{label}' can not be found on the tracker")
            }
        }
    }
}
