//! protoc-gen-twirp_jsbrowser
//!
//! Reads a `CodeGeneratorRequest` from stdin and writes a
//! `CodeGeneratorResponse` to stdout. Diagnostics go to stderr only.

use std::ffi::OsString;
use std::io;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use twirpjs_gen::output::VERSION;
use twirpjs_gen::plugin::run;

/// protoc plugin that generates Twirp clients for the browser
#[derive(Parser, Debug)]
#[command(name = "protoc-gen-twirp_jsbrowser")]
#[command(about, long_about = None, disable_version_flag = true)]
struct Cli {
    /// Print version and exit
    #[arg(long)]
    version: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Rewrites the single-dash `-version` spelling to `--version`.
fn normalize_arg(arg: OsString) -> OsString {
    if arg == "-version" {
        OsString::from("--version")
    } else {
        arg
    }
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Nothing is installed at verbosity 0. Output always goes to stderr because
/// stdout carries the encoded response.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,twirpjs_gen=info,twirpjs_define=info".to_string(),
            2 => "warn,twirpjs_gen=debug,twirpjs_define=debug".to_string(),
            _ => "debug,twirpjs_gen=trace,twirpjs_define=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse_from(std::env::args_os().map(normalize_arg));

    if cli.version {
        println!("{}", VERSION);
        return Ok(());
    }

    init_tracing(cli.verbose);

    run(io::stdin().lock(), io::stdout().lock())
        .wrap_err("protoc-gen-twirp_jsbrowser: generation failed")?;

    Ok(())
}
