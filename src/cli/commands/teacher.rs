//! `schoolctl teacher` command - Teacher record management

use std::collections::HashMap;

use clap::Subcommand;
use console::style;
use dialoguer::theme::ColorfulTheme;
use miette::{IntoDiagnostic, Result};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::cli::forms::{self, ReviewField, SelectOption};
use crate::cli::helpers::{date_cell, truncate_str};
use crate::cli::output::{self, effective_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::validate::{FieldConstraint, FieldKind};
use crate::core::Session;
use crate::entities::{ClassFilter, SubjectFilter, Teacher, TeacherFilter};

#[derive(Subcommand, Debug)]
pub enum TeacherCommands {
    /// List teachers with filtering
    List(ListArgs),

    /// Show one teacher's details
    Show(ShowArgs),

    /// Create a teacher through the interactive form
    Add,

    /// Edit an existing teacher through the interactive form
    Edit(EditArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by ID number
    #[arg(long)]
    pub id_number: Option<String>,

    /// Filter by name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Filter by gender (Male/Female/Other)
    #[arg(long, short = 'g')]
    pub gender: Option<String>,

    /// Filter by phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Filter by email
    #[arg(long)]
    pub email: Option<String>,

    /// Filter by assigned class id (repeatable)
    #[arg(long = "class", short = 'c', value_name = "CLASS_ID")]
    pub class_ids: Vec<Uuid>,

    /// Filter by assigned subject id (repeatable)
    #[arg(long = "subject", short = 's', value_name = "SUBJECT_ID")]
    pub subject_ids: Vec<Uuid>,

    /// Page to fetch
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, default_value_t = crate::entities::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Teacher id (GUID)
    pub id: Uuid,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Teacher id (GUID)
    pub id: Uuid,
}

pub fn run(cmd: TeacherCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TeacherCommands::List(args) => run_list(args, global),
        TeacherCommands::Show(args) => run_show(args, global),
        TeacherCommands::Add => run_add(global),
        TeacherCommands::Edit(args) => run_edit(args, global),
    }
}

fn client(global: &GlobalOpts) -> Result<ApiClient> {
    let session = Session::load();
    ApiClient::new(global.config(), &session).map_err(|e| miette::miette!("{}", e))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let filter = TeacherFilter {
        id_number: args.id_number.unwrap_or_default(),
        full_name: args.name.unwrap_or_default(),
        gender: args.gender.unwrap_or_default(),
        phone_number: args.phone.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        class_ids: args.class_ids,
        subject_ids: args.subject_ids,
        page_size: args.page_size,
        page_number: args.page,
    };
    if global.verbose {
        eprintln!("POST /v1/Teacher/list page {}", filter.page_number);
    }
    let page = client
        .list_teachers(&filter)
        .map_err(|e| miette::miette!("Failed to fetch teachers: {}", e))?;

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
        println!("No teachers found.");
        return Ok(());
    }

    let (classes, subjects) = load_lookups(&client)?;

    println!(
        "{:<12} {:<24} {:<8} {:<14} {:<24} {:<18} {:<18}",
        style("ID NO.").bold(),
        style("NAME").bold(),
        style("GENDER").bold(),
        style("PHONE").bold(),
        style("EMAIL").bold(),
        style("CLASSES").bold(),
        style("SUBJECTS").bold()
    );
    println!("{}", "-".repeat(122));

    for teacher in &page.data {
        println!(
            "{:<12} {:<24} {:<8} {:<14} {:<24} {:<18} {:<18}",
            truncate_str(&teacher.id_number, 12),
            truncate_str(&teacher.full_name, 22),
            teacher.gender,
            truncate_str(&teacher.phone_number, 14),
            truncate_str(&teacher.email, 22),
            truncate_str(&assigned_names(&teacher.class_ids, &classes), 16),
            truncate_str(&assigned_names(&teacher.subject_ids, &subjects), 16)
        );
    }

    println!();
    println!(
        "{} teacher(s) - {}",
        style(page.data.len()).cyan(),
        page.page_label(args.page)
    );
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let teacher = client
        .teacher_detail(args.id)
        .map_err(|e| miette::miette!("Failed to load teacher: {}", e))?;

    match effective_format(global.format, false) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&teacher).into_diagnostic()?
            );
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&teacher).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("Name").bold(), style(&teacher.full_name).yellow());
    println!("{}: {}", style("ID Number").bold(), teacher.id_number);
    println!("{}: {}", style("Gender").bold(), teacher.gender);
    println!("{}: {}", style("Phone").bold(), teacher.phone_number);
    println!("{}: {}", style("Email").bold(), teacher.email);
    println!("{}: {}", style("Address").bold(), teacher.address);
    println!(
        "{}: {}",
        style("Hire Date").bold(),
        date_cell(&teacher.hire_date)
    );
    let (classes, subjects) = load_lookups(&client)?;
    println!(
        "{}: {}",
        style("Classes").bold(),
        assigned_names(&teacher.class_ids, &classes)
    );
    println!(
        "{}: {}",
        style("Subjects").bold(),
        assigned_names(&teacher.subject_ids, &subjects)
    );
    println!("{}", style("─".repeat(60)).dim());
    Ok(())
}

/// Fetch the class and subject reference lists once, keyed by id, for
/// resolving assignment names. Teacher records only carry ids.
fn load_lookups(
    client: &ApiClient,
) -> Result<(HashMap<Uuid, String>, HashMap<Uuid, String>)> {
    let classes = client
        .list_classes(&ClassFilter::lookup())
        .map_err(|e| miette::miette!("Failed to load classes: {}", e))?
        .data
        .into_iter()
        .filter_map(|class| class.id.map(|id| (id, class.name)))
        .collect();
    let subjects = client
        .list_subjects(&SubjectFilter::lookup())
        .map_err(|e| miette::miette!("Failed to load subjects: {}", e))?
        .data
        .into_iter()
        .filter_map(|subject| subject.id.map(|id| (id, subject.name)))
        .collect();
    Ok((classes, subjects))
}

/// Join the resolvable names for a set of assignment ids; ids missing from
/// the lookup are skipped, and no assignments render as a dash.
fn assigned_names(ids: &[Uuid], lookup: &HashMap<Uuid, String>) -> String {
    let names: Vec<&str> = ids
        .iter()
        .filter_map(|id| lookup.get(id).map(String::as_str))
        .collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

fn run_add(global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let teacher = prompt_teacher(Teacher::blank())?;
    submit(&client, &teacher, "Created teacher")
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let current = client
        .teacher_detail(args.id)
        .map_err(|e| miette::miette!("Failed to load teacher: {}", e))?;
    let teacher = prompt_teacher(current)?;
    submit(&client, &teacher, "Updated teacher")
}

fn submit(client: &ApiClient, teacher: &Teacher, verb: &str) -> Result<()> {
    forms::print_review(
        "Teacher",
        &[
            ReviewField::text("ID Number", &teacher.id_number),
            ReviewField::text("Full Name", &teacher.full_name),
            ReviewField::select("Gender", &teacher.gender),
            ReviewField::text("Phone Number", &teacher.phone_number),
            ReviewField::email("Email", &teacher.email),
            ReviewField::text("Address", &teacher.address),
            ReviewField::date("Hire Date", &teacher.hire_date),
        ],
    );
    if !crate::cli::helpers::confirm("Save this teacher?")? {
        println!("Aborted.");
        return Ok(());
    }
    client
        .save_teacher(teacher)
        .map_err(|e| miette::miette!("Failed to save teacher: {}", e))?;
    output::success(&format!("{} {}", verb, style(&teacher.full_name).cyan()));
    Ok(())
}

fn prompt_teacher(mut teacher: Teacher) -> Result<Teacher> {
    let theme = ColorfulTheme::default();

    teacher.id_number = forms::text_field(
        &theme,
        "ID Number",
        FieldConstraint::required(FieldKind::Text),
        &teacher.id_number,
    )?;
    teacher.full_name = forms::text_field(
        &theme,
        "Full Name",
        FieldConstraint::required(FieldKind::Text),
        &teacher.full_name,
    )?;
    teacher.gender = forms::select_field(&theme, "Gender", &gender_options(), &teacher.gender)?;
    teacher.phone_number = forms::text_field(
        &theme,
        "Phone Number",
        FieldConstraint::optional(FieldKind::Text),
        &teacher.phone_number,
    )?;
    teacher.email = forms::text_field(
        &theme,
        "Email",
        FieldConstraint::optional(FieldKind::Email),
        &teacher.email,
    )?;
    teacher.address = forms::text_field(
        &theme,
        "Address",
        FieldConstraint::optional(FieldKind::Text),
        &teacher.address,
    )?;
    teacher.hire_date = forms::date_field(&theme, "Hire Date", false, &teacher.hire_date)?;

    Ok(teacher)
}

fn gender_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Male", "Male"),
        SelectOption::new("Female", "Female"),
        SelectOption::new("Other", "Other"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigned_names_resolve_through_the_lookup() {
        let math = Uuid::from_u128(1);
        let science = Uuid::from_u128(2);
        let unknown = Uuid::from_u128(9);
        let lookup: HashMap<Uuid, String> = [
            (math, "Mathematics".to_string()),
            (science, "Science".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            assigned_names(&[math, science], &lookup),
            "Mathematics, Science"
        );
        // Ids absent from the lookup are skipped, not rendered raw
        assert_eq!(assigned_names(&[math, unknown], &lookup), "Mathematics");
        assert_eq!(assigned_names(&[], &lookup), "-");
        assert_eq!(assigned_names(&[unknown], &lookup), "-");
    }
}
