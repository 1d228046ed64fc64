use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = antojo_cli::Args::parse();

	antojo_cli::run(args).await
}
