use clap::Parser;
use dualtok::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
