use clap::Parser;
use miette::Result;
use pixgen::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = cli.printer();

    match cli.command {
        Commands::Generate(args) => pixgen::cli::generate::run(args, &cli.settings, &printer)?,
        Commands::Init(args) => pixgen::cli::init::run(args, &cli.settings, &printer)?,
        Commands::Palette(args) => pixgen::cli::palette::run(args, &cli.settings, &printer)?,
        Commands::Completions(args) => pixgen::cli::completions::run(args)?,
    }

    Ok(())
}
