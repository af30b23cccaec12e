use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for cooley")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    Analyze,
    Bench,
    Demo {
        /// Name of the demo under `demos/`
        name: String,
        /// Arguments forwarded to the demo
        args: Vec<String>,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status(),
        Commands::Test => test_command(&cfg).status(),
        Commands::Clippy => clippy_command().status(),
        Commands::Fmt => fmt_command().status(),
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                Ok(fmt)
            } else {
                clippy_command().status()
            }
        }
        Commands::Bench => bench_command(&cfg).status(),
        Commands::Demo { name, args } => demo_command(&cfg, &name, &args)?.status(),
    }?;

    std::process::exit(status.code().unwrap_or(1));
}
