use clap::Parser;
use tracing_subscriber::EnvFilter;

use picard_parser::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("picard_parser=debug,info")
    } else {
        EnvFilter::new("picard_parser=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Parse(args) => {
            cli::parse::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Get(args) => {
            cli::get::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
