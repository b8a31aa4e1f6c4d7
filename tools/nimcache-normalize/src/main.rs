//! Renames the C files Nim writes into its cache directory so they no longer spell out the directory layout of the
//! machine that built them.

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use nimcache_demangle::host::{self, HostInfo};
use nimcache_demangle::nimcache::normalize::Normalizer;
use nimcache_demangle::nimcache::{DEFAULT_MODULE_MARKER, DEFAULT_SEGMENT_MARKER, DecodedName, Markers};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Decodes the file names Nim generates for C sources.
#[derive(Parser)]
#[command(name = "nimcache-normalize", version, long_about = None)]
struct Cli {
    /// Token that starts every name produced by the module system
    #[arg(long, global = true, default_value = DEFAULT_MODULE_MARKER, value_parser = NonEmptyStringValueParser::new())]
    module_marker: String,

    /// Token that separates path segments
    #[arg(long, global = true, default_value = DEFAULT_SEGMENT_MARKER, value_parser = NonEmptyStringValueParser::new())]
    segment_marker: String,

    /// Log every planned rename. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rename every encoded file of a Nim cache directory
    Rename {
        /// Directory containing the generated C sources
        directory: PathBuf,

        /// Only report what would be renamed
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the decoded form of each name. Names without the module marker are printed unchanged.
    Decode {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the operating system, CPU architecture and C compiler of this host
    Host,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn rename(normalizer: &Normalizer, directory: &Path, dry_run: bool) -> anyhow::Result<()> {
    if dry_run {
        let plan = normalizer
            .plan(directory)
            .with_context(|| format!("failed to plan renames in `{}`", directory.display()))?;

        for rename in &plan {
            info!(source = %rename.source.display(), target = %rename.target.display(), "would rename");
        }

        info!(count = plan.len(), "dry run, nothing renamed");
    } else {
        normalizer
            .normalize(directory)
            .with_context(|| format!("failed to normalize `{}`", directory.display()))?;
    }

    Ok(())
}

#[expect(clippy::print_stdout, reason = "command output")]
fn decode(markers: &Markers, names: &[String]) {
    for name in names {
        match DecodedName::parse(name, markers) {
            Some(decoded) => println!("{decoded}"),
            None => println!("{name}"),
        }
    }
}

#[expect(clippy::print_stdout, reason = "command output")]
fn print_host(host: &HostInfo) {
    println!("{} {} {}", host.operating_system, host.cpu_architecture, host.compiler);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let markers = Markers::new(cli.module_marker, cli.segment_marker)?;

    match cli.command {
        Command::Rename { directory, dry_run } => rename(&Normalizer::new(markers), &directory, dry_run)?,
        Command::Decode { names } => decode(&markers, &names),
        Command::Host => print_host(host::host_info()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rename() {
        let cli = Cli::try_parse_from(["nimcache-normalize", "rename", "--dry-run", "nimcache"]).unwrap();

        assert_eq!(cli.module_marker, "@m");
        assert_eq!(cli.segment_marker, "@s");
        assert!(matches!(cli.command, Command::Rename { dry_run: true, .. }));
    }

    #[test]
    fn test_reject_empty_marker() {
        assert!(Cli::try_parse_from(["nimcache-normalize", "--module-marker", "", "host"]).is_err());
    }
}
