//! `schoolctl data` command - Bulk import, sample download, data reset

use std::path::PathBuf;

use clap::Subcommand;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::api::ApiClient;
use crate::cli::helpers::confirm;
use crate::cli::output;
use crate::cli::GlobalOpts;
use crate::core::{ImportBackend, ImportSession, ImportState, Session};

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Download the sample import workbook
    Sample(SampleArgs),

    /// Validate and import an Excel workbook interactively
    Upload(UploadArgs),

    /// Delete all imported data on the server
    Reset(ResetArgs),
}

#[derive(clap::Args, Debug)]
pub struct SampleArgs {
    /// Where to write the workbook
    #[arg(long, short = 'o', default_value = "sample.xlsx")]
    pub out: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct UploadArgs {
    /// Workbook to start with; otherwise pick one inside the workflow
    pub file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: DataCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        DataCommands::Sample(args) => run_sample(args, global),
        DataCommands::Upload(args) => run_upload(args, global),
        DataCommands::Reset(args) => run_reset(args, global),
    }
}

fn client(global: &GlobalOpts) -> Result<ApiClient> {
    let session = Session::load();
    ApiClient::new(global.config(), &session).map_err(|e| miette::miette!("{}", e))
}

fn run_sample(args: SampleArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    if global.verbose {
        eprintln!("GET /v1/Export/export-sample");
    }
    let bytes = client
        .export_sample(&args.out)
        .map_err(|e| miette::miette!("Failed to download sample workbook: {}", e))?;
    output::success(&format!(
        "Wrote {} ({} bytes)",
        style(args.out.display()).cyan(),
        bytes
    ));
    Ok(())
}

fn run_reset(args: ResetArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    if !args.yes && !confirm("This will delete all imported data. Are you sure?")? {
        println!("Aborted.");
        return Ok(());
    }
    client
        .reset_data()
        .map_err(|e| miette::miette!("Failed to reset data: {}", e))?;
    output::success("Imported data cleared.");
    Ok(())
}

const MENU_CHOOSE: usize = 0;
const MENU_VALIDATE: usize = 1;
const MENU_IMPORT: usize = 2;
const MENU_STATUS: usize = 3;
const MENU_RESET: usize = 4;
const MENU_QUIT: usize = 5;

/// Interactive import workflow. Validation gates import: a newly chosen
/// file must pass `validate` before `import` becomes available, and picking
/// another file drops the session back to the start.
fn run_upload(args: UploadArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let theme = ColorfulTheme::default();
    let mut session = ImportSession::new();

    if let Some(file) = args.file {
        session.select_file(file);
    }

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt(format!("Import workflow [{}]", session.state()))
            .items(&[
                "Choose file",
                "Validate file",
                "Import data",
                "Show status",
                "Reset imported data (danger)",
                "Quit",
            ])
            .default(default_menu_item(&session))
            .interact()
            .into_diagnostic()?;

        match choice {
            MENU_CHOOSE => {
                let path: String = Input::with_theme(&theme)
                    .with_prompt("Workbook path")
                    .interact_text()
                    .into_diagnostic()?;
                session.select_file(PathBuf::from(path.trim()));
            }
            MENU_VALIDATE => match session.validate(&client) {
                Ok(message) => output::success(&message),
                Err(e) => output::warn(&e.to_string()),
            },
            MENU_IMPORT => match session.import(&client) {
                Ok(summary) => {
                    output::success("Import finished.");
                    println!("{}", summary);
                }
                Err(e) => output::warn(&e.to_string()),
            },
            MENU_STATUS => print_status(&session),
            MENU_RESET => {
                if confirm("This will delete all imported data. Are you sure?")? {
                    match session.reset(&client) {
                        Ok(()) => output::success("Imported data cleared."),
                        Err(e) => output::warn(&e.to_string()),
                    }
                }
            }
            _ => break,
        }
    }

    Ok(())
}

fn default_menu_item(session: &ImportSession) -> usize {
    match session.state() {
        ImportState::Idle if session.selected_file().is_none() => MENU_CHOOSE,
        ImportState::Idle => MENU_VALIDATE,
        ImportState::Validated => MENU_IMPORT,
        ImportState::Imported => MENU_QUIT,
    }
}

fn print_status(session: &ImportSession) {
    println!("{}: {}", style("State").bold(), session.state());
    if let Some(file) = session.selected_file() {
        println!("{}: {}", style("Selected file").bold(), file.display());
    }
    if let Some(file) = session.validated_file() {
        println!("{}: {}", style("Validated file").bold(), file.display());
    }
}
