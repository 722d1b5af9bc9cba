#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "jsonbin", about = "Compact binary JSON encode/decode tools")]
struct Cli {
	/// Log progress to stderr; honours RUST_LOG when set.
	#[arg(long, short, global = true)]
	verbose: bool,
	/// Never log, even with RUST_LOG set.
	#[arg(long, short, global = true, conflicts_with = "verbose")]
	quiet: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a JSON file into the binary format.
	Encode(cmd::encode::Args),
	/// Decode a binary file back to JSON.
	Decode(cmd::decode::Args),
	/// Summarize the structure of a binary file.
	Info(cmd::info::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose, cli.quiet);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> jsonbin::codec::Result<()> {
	match command {
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}

fn init_tracing(verbose: bool, quiet: bool) {
	// stdout carries command output, so logs stay off unless asked for
	let filter = if verbose && !quiet {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jsonbin=debug"))
	} else {
		EnvFilter::new("off")
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(true)
		.with_writer(std::io::stderr)
		.init();
}
