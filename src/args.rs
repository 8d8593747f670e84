use clap::Parser;

/// A server for a couple of rendered pages!
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(super) struct Args {
	/// Address to bind to
	#[arg(short, long, value_name = "ADDR", default_value = "0.0.0.0")]
	pub address: String,

	/// Port to listen on
	#[arg(short, long, value_name = "PORT", default_value_t = 8080)]
	pub port: u16,
}
