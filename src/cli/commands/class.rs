//! `schoolctl class` command - Class lookup

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::api::ApiClient;
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Session;
use crate::entities::ClassFilter;

#[derive(Subcommand, Debug)]
pub enum ClassCommands {
    /// List classes
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Page to fetch
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, default_value_t = crate::entities::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

pub fn run(cmd: ClassCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ClassCommands::List(args) => run_list(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let session = Session::load();
    let client =
        ApiClient::new(global.config(), &session).map_err(|e| miette::miette!("{}", e))?;
    let filter = ClassFilter {
        page_size: args.page_size,
        page_number: args.page,
    };
    let page = client
        .list_classes(&filter)
        .map_err(|e| miette::miette!("Failed to fetch classes: {}", e))?;

    match effective_format(global.format, true) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&page.data).into_diagnostic()?
            );
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&page.data).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    if page.data.is_empty() {
        println!("No classes found.");
        return Ok(());
    }

    println!(
        "{:<38} {:<24}",
        style("CLASS ID").bold(),
        style("NAME").bold()
    );
    println!("{}", "-".repeat(62));
    for class in &page.data {
        println!(
            "{:<38} {:<24}",
            class.id.map(|id| id.to_string()).unwrap_or_default(),
            class.name
        );
    }

    println!();
    println!(
        "{} class(es) - {}",
        style(page.data.len()).cyan(),
        page.page_label(args.page)
    );
    Ok(())
}
