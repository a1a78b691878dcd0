use clap::Parser;
use miette::Result;
use schoolctl::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for readable diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Login(args) => schoolctl::cli::commands::login::run(args, &cli.global),
        Commands::Logout => schoolctl::cli::commands::login::run_logout(&cli.global),
        Commands::Student(cmd) => schoolctl::cli::commands::student::run(cmd, &cli.global),
        Commands::Teacher(cmd) => schoolctl::cli::commands::teacher::run(cmd, &cli.global),
        Commands::Class(cmd) => schoolctl::cli::commands::class::run(cmd, &cli.global),
        Commands::Ledger(cmd) => schoolctl::cli::commands::ledger::run(cmd, &cli.global),
        Commands::Data(cmd) => schoolctl::cli::commands::data::run(cmd, &cli.global),
        Commands::Completions(args) => schoolctl::cli::commands::completions::run(args),
    }
}
