mod cli;

use cli::Args;
use spdx_builder::adapters::outbound::console::{init_logging, StderrProgressReporter};
use spdx_builder::adapters::outbound::filesystem::{FileSystemWriter, Sha256FileHasher};
use spdx_builder::adapters::outbound::formatters::SpdxJsonLdFormatter;
use spdx_builder::application::dto::{PackageOptions, SbomRequest};
use spdx_builder::application::use_cases::GenerateSbomUseCase;
use spdx_builder::config::{self, ConfigFile};
use spdx_builder::ports::outbound::ProgressReporter;
use spdx_builder::shared::error::{ExitCode, SbomError};
use spdx_builder::shared::security::validate_source_root;
use spdx_builder::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = parse_error_exit_code(&e);
            // --help and --version arrive here as errors too
            let _ = e.print();
            let _ = io::stdout().flush();
            process::exit(code.as_i32());
        }
    };
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Exit code for a clap parse result that stopped the run
fn parse_error_exit_code(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}

fn run(args: Args) -> Result<()> {
    validate_source_root(&args.source_root)?;

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&args.source_root)?,
    };

    let output_dir = args.output_dir.clone();
    let request = build_request(args, config.unwrap_or_default())?;

    let progress_reporter = StderrProgressReporter::new();
    let use_case = GenerateSbomUseCase::new(Sha256FileHasher::new(), StderrProgressReporter::new());
    let response = use_case.execute(request)?;

    fs::create_dir_all(&output_dir).map_err(|e| SbomError::OutputDirectoryError {
        path: output_dir.clone(),
        details: e.to_string(),
    })?;

    let writer = FileSystemWriter::in_directory(&output_dir);
    response
        .builder
        .write(&SpdxJsonLdFormatter::new(), &writer)?;

    progress_reporter.report_completion(&format!(
        "✅ Output complete: {}",
        writer.output_path().display()
    ));
    Ok(())
}

/// Merges CLI arguments over config file values
///
/// Scalar options from the command line win; strip prefixes from both
/// sources are kept, command line first.
fn build_request(args: Args, config: ConfigFile) -> Result<SbomRequest> {
    let mut strip_prefixes = args.strip_prefixes;
    strip_prefixes.extend(config.strip_prefixes.unwrap_or_default());

    let files = if args.files.is_empty() {
        config.files
    } else {
        Some(args.files)
    };

    let package = PackageOptions {
        name: args.package_name.or(config.package_name),
        version: args.package_version.or(config.package_version),
        comment: args.package_comment.or(config.package_comment),
    };

    let mut builder = SbomRequest::builder()
        .source_root(args.source_root)
        .strip_prefixes(strip_prefixes)
        .artifact(args.artifact)
        .package(package)
        .comment(args.comment.or(config.comment))
        .verbose(args.verbose);
    if let Some(files) = files {
        builder = builder.files(files);
    }
    builder.build()
}
