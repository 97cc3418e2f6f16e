use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(
    author,
    version,
    about = "Builds a release-notes document from forge history and tracker issues"
)]
pub struct Cli {
    /// Release version to assemble notes for (major.minor.patch)
    #[clap(value_name = "VERSION")]
    pub release: String,

    /// Configuration file path (built-in defaults are used when the file is absent)
    #[clap(short, long, default_value = "relnotes.toml")]
    pub config: String,

    /// Directory the generated document is written to
    #[clap(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
