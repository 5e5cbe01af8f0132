use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = legalease_api::Args::parse();

	legalease_api::run(args).await
}
