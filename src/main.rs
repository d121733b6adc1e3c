use clap::Parser;
use miette::Result;
use imgascii::cli::{Cli, Commands};
use imgascii::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions(args)) => imgascii::cli::completions::run(args)?,
        None => {
            let printer = if cli.convert.quiet {
                Printer::quiet()
            } else {
                Printer::new()
            };
            imgascii::cli::convert::run(cli.convert, &printer)?
        }
    }

    Ok(())
}
