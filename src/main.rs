mod greeting;
mod models;
mod utils;

use greeting::hello;
use std::io::{self, Write};

fn main() -> Result<(), io::Error> {
	// stdout carries only the greeting, logs go to stderr when asked for
	if std::env::var("RUST_LOG").is_ok() {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_writer(io::stderr)
			.init();
	}
	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{}", hello("João", ""))?;
	Ok(())
}
