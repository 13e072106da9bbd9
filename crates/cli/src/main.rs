use clap::Parser;

use permnames_cli::CliOptions;

fn main() -> anyhow::Result<()> {
    permnames_observability::init();

    let options = CliOptions::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    permnames_cli::run(&options, stdin.lock(), stdout.lock())?;
    Ok(())
}
