//! `schoolctl ledger` command - Ledger account management

use clap::Subcommand;
use console::style;
use dialoguer::theme::ColorfulTheme;
use miette::{IntoDiagnostic, Result};

use crate::api::ApiClient;
use crate::cli::forms::{self, ReviewField, SelectOption};
use crate::cli::helpers::truncate_str;
use crate::cli::output::{self, effective_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::validate::{check, FieldConstraint, FieldKind};
use crate::core::Session;
use crate::entities::{AccountType, LedgerAccount, LedgerFilter};

#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// List ledger accounts with filtering
    List(ListArgs),

    /// Create a ledger account
    Add(AddArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by account name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Filter by account code
    #[arg(long)]
    pub code: Option<String>,

    /// Filter by account group
    #[arg(long)]
    pub group: Option<String>,

    /// Page to fetch
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, default_value_t = crate::entities::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Account name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Account code
    #[arg(long)]
    pub code: Option<String>,

    /// Account group
    #[arg(long)]
    pub group: Option<String>,

    /// Account type (assets/liabilities/income/expenses)
    #[arg(long = "type", short = 't')]
    pub account_type: Option<AccountType>,

    /// Description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Prompt for every field interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(cmd: LedgerCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        LedgerCommands::List(args) => run_list(args, global),
        LedgerCommands::Add(args) => run_add(args, global),
    }
}

fn client(global: &GlobalOpts) -> Result<ApiClient> {
    let session = Session::load();
    ApiClient::new(global.config(), &session).map_err(|e| miette::miette!("{}", e))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let filter = LedgerFilter {
        account_name: args.name.unwrap_or_default(),
        account_code: args.code.unwrap_or_default(),
        account_group: args.group.unwrap_or_default(),
        page_size: args.page_size,
        page_number: args.page,
    };
    let page = client
        .list_ledger_accounts(&filter)
        .map_err(|e| miette::miette!("Failed to fetch ledger accounts: {}", e))?;

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
        println!("No ledger accounts found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<28} {:<18} {:<12}",
        style("CODE").bold(),
        style("NAME").bold(),
        style("GROUP").bold(),
        style("TYPE").bold()
    );
    println!("{}", "-".repeat(70));
    for account in &page.data {
        println!(
            "{:<10} {:<28} {:<18} {:<12}",
            truncate_str(&account.account_code, 10),
            truncate_str(&account.account_name, 26),
            truncate_str(&account.account_group, 16),
            account.account_type
        );
    }

    println!();
    println!(
        "{} account(s) - {}",
        style(page.data.len()).cyan(),
        page.page_label(args.page)
    );
    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let account = if args.interactive
        || (args.name.is_none() && args.code.is_none() && args.group.is_none())
    {
        prompt_account(fill_from_args(&args))?
    } else {
        account_from_args(&args)?
    };

    forms::print_review(
        "Ledger Account",
        &[
            ReviewField::text("Account Name", &account.account_name),
            ReviewField::text("Account Code", &account.account_code),
            ReviewField::text("Account Group", &account.account_group),
            ReviewField::select("Account Type", account.account_type.to_string()),
            ReviewField::text("Description", &account.description),
        ],
    );
    if !crate::cli::helpers::confirm("Save this account?")? {
        println!("Aborted.");
        return Ok(());
    }
    client
        .save_ledger_account(&account)
        .map_err(|e| miette::miette!("Failed to save ledger account: {}", e))?;
    output::success(&format!(
        "Created ledger account {}",
        style(&account.account_name).cyan()
    ));
    Ok(())
}

fn fill_from_args(args: &AddArgs) -> LedgerAccount {
    LedgerAccount {
        account_name: args.name.clone().unwrap_or_default(),
        account_code: args.code.clone().unwrap_or_default(),
        account_group: args.group.clone().unwrap_or_default(),
        account_type: args.account_type.unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        ..LedgerAccount::blank()
    }
}

/// Flag-only path. Runs the same field rules the interactive form would.
fn account_from_args(args: &AddArgs) -> Result<LedgerAccount> {
    let account = fill_from_args(args);
    let required = FieldConstraint::required(FieldKind::Text);
    for (value, label) in [
        (&account.account_name, "Account Name"),
        (&account.account_code, "Account Code"),
        (&account.account_group, "Account Group"),
    ] {
        if let Some(message) = check(value, label, &required) {
            return Err(miette::miette!("{}", message));
        }
    }
    Ok(account)
}

fn prompt_account(mut account: LedgerAccount) -> Result<LedgerAccount> {
    let theme = ColorfulTheme::default();
    let required = FieldConstraint::required(FieldKind::Text);

    account.account_name =
        forms::text_field(&theme, "Account Name", required, &account.account_name)?;
    account.account_code =
        forms::text_field(&theme, "Account Code", required, &account.account_code)?;
    account.account_group =
        forms::text_field(&theme, "Account Group", required, &account.account_group)?;

    let type_value = forms::select_field(
        &theme,
        "Account Type",
        &type_options(),
        &account.account_type.to_string(),
    )?;
    account.account_type = type_value
        .parse()
        .map_err(|e: String| miette::miette!("{}", e))?;

    account.description = forms::text_field(
        &theme,
        "Description",
        FieldConstraint::optional(FieldKind::Text),
        &account.description,
    )?;

    Ok(account)
}

fn type_options() -> Vec<SelectOption> {
    AccountType::ALL
        .iter()
        .map(|account_type| {
            let name = account_type.to_string();
            SelectOption::new(name.clone(), name)
        })
        .collect()
}
