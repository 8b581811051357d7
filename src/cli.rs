use clap::Parser;
use std::path::PathBuf;

/// Build an SPDX 3 JSON-LD SBOM for a build tree
#[derive(Parser, Debug)]
#[command(name = "spdx-builder")]
#[command(version)]
#[command(about = "Build an SPDX 3 JSON-LD SBOM for a build tree", long_about = None)]
pub struct Args {
    /// Source tree that logical file paths are resolved against
    #[arg(short = 's', long, value_name = "DIR")]
    pub source_root: PathBuf,

    /// Path prefix to strip from emitted paths
    /// Can be specified multiple times: --strip-prefix /build --strip-prefix /opt/sdk
    #[arg(long = "strip-prefix", value_name = "PREFIX")]
    pub strip_prefixes: Vec<String>,

    /// Logical file to register (replaces the built-in file list)
    /// Can be specified multiple times
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<String>,

    /// Build artifact to describe with a package
    #[arg(short, long, value_name = "PATH")]
    pub artifact: Option<String>,

    /// Name of the artifact's package (defaults to the artifact file name)
    #[arg(long, value_name = "NAME")]
    pub package_name: Option<String>,

    /// Comment attached to the artifact's package
    #[arg(long, value_name = "TEXT")]
    pub package_comment: Option<String>,

    /// Version of the artifact's package
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Comment of the document's creation info
    #[arg(long, value_name = "TEXT")]
    pub comment: Option<String>,

    /// Path to a config file (defaults to spdx-builder.config.yml in the source root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output, including a dump of the full node graph
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory that receives spdx.jsonld (created if absent)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}

impl Args {
    /// Parses the process arguments, leaving the exit decision to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
