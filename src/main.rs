#![warn(clippy::pedantic, clippy::all, clippy::cargo)]
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]
use clap::Parser;
use tokio::signal;
use tracing::{error, info, instrument};

use sitekit::site;

mod args;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() {
	tracing_subscriber::fmt::init();
	let args = args::Args::parse();

	let address = format!("{}:{}", args.address, args.port);
	let router = site::router();

	info!("Binding to {}", address);
	let listener = match tokio::net::TcpListener::bind(&address).await {
		Ok(listener) => listener,
		Err(e) => {
			error!("Tcp binding error: {}", e);
			panic!()
		}
	};
	if let Err(e) = axum::serve(listener, router)
		.with_graceful_shutdown(async {
			if let Err(e) = signal::ctrl_c().await {
				error!("Failed to listen for ctrl_c signal: {}", e);
				panic!()
			}
			info!("Gracefully shutting down from SIGINT");
		})
		.await
	{
		error!("Axum serving error: {}", e);
	}
}
