use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = tinge::cli::Cli::parse();
    let config = tinge::config::from_cli(&cli)?;

    let command = cli.command.clone().unwrap_or(tinge::cli::CliCommand::Show);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    tinge::commands::execute(&config, command, &mut handle)?;

    Ok(())
}
