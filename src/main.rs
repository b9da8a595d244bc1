#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "paramdoc", about = "Parameter document inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print parameter values, one line per leaf.
	Show(cmd::show::Args),
	/// List parameter codes with their value kinds.
	List(cmd::list::Args),
	/// Print one parameter or the value at an index path.
	Get(cmd::get::Args),
	/// Render a two-dimensional array as an aligned table.
	Table(cmd::table::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run() -> paramdoc::param::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Show(args) => cmd::show::run(args),
		Commands::List(args) => cmd::list::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Table(args) => cmd::table::run(args),
	}
}
