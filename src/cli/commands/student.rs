//! `schoolctl student` command - Student record management

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
use crate::entities::{ClassFilter, SchoolClass, Student, StudentFilter};

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// List students with filtering
    List(ListArgs),

    /// Show one student's details
    Show(ShowArgs),

    /// Create a student through the interactive form
    Add,

    /// Edit an existing student through the interactive form
    Edit(EditArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by ID number
    #[arg(long)]
    pub id_number: Option<String>,

    /// Filter by admission number
    #[arg(long)]
    pub admission_number: Option<String>,

    /// Filter by gender (Male/Female/Other)
    #[arg(long, short = 'g')]
    pub gender: Option<String>,

    /// Filter by class id
    #[arg(long, short = 'c')]
    pub class: Option<Uuid>,

    /// Page to fetch
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, default_value_t = crate::entities::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Student id (GUID)
    pub id: Uuid,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Student id (GUID)
    pub id: Uuid,
}

pub fn run(cmd: StudentCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        StudentCommands::List(args) => run_list(args, global),
        StudentCommands::Show(args) => run_show(args, global),
        StudentCommands::Add => run_add(global),
        StudentCommands::Edit(args) => run_edit(args, global),
    }
}

fn client(global: &GlobalOpts) -> Result<ApiClient> {
    let session = Session::load();
    ApiClient::new(global.config(), &session).map_err(|e| miette::miette!("{}", e))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let filter = StudentFilter {
        id_number: args.id_number.unwrap_or_default(),
        admission_number: args.admission_number.unwrap_or_default(),
        gender: args.gender.unwrap_or_default(),
        class_id: args.class,
        page_size: args.page_size,
        page_number: args.page,
        ..StudentFilter::default()
    };
    if global.verbose {
        eprintln!("POST /v1/Students/list page {}", filter.page_number);
    }
    let page = client
        .list_students(&filter)
        .map_err(|e| miette::miette!("Failed to fetch students: {}", e))?;

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
        println!("No students found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<12} {:<28} {:<14} {:<8} {:<10}",
        style("ID NO.").bold(),
        style("ADMISSION").bold(),
        style("NAME").bold(),
        style("CLASS").bold(),
        style("GENDER").bold(),
        style("DOB").bold()
    );
    println!("{}", "-".repeat(88));

    for student in &page.data {
        println!(
            "{:<12} {:<12} {:<28} {:<14} {:<8} {:<10}",
            truncate_str(&student.id_number, 12),
            truncate_str(student.admission_number.as_deref().unwrap_or(""), 12),
            truncate_str(&student.full_name(), 26),
            truncate_str(&student.class_name, 12),
            student.gender,
            date_cell(&student.date_of_birth)
        );
    }

    println!();
    println!(
        "{} student(s) - {}",
        style(page.data.len()).cyan(),
        page.page_label(args.page)
    );
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let student = client
        .student_detail(args.id)
        .map_err(|e| miette::miette!("Failed to load student: {}", e))?;

    match effective_format(global.format, false) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&student).into_diagnostic()?
            );
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&student).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("Name").bold(), style(student.full_name()).yellow());
    println!("{}: {}", style("ID Number").bold(), student.id_number);
    println!(
        "{}: {}",
        style("Admission No.").bold(),
        student.admission_number.as_deref().unwrap_or("-")
    );
    println!("{}: {}", style("Class").bold(), student.class_name);
    println!("{}: {}", style("Gender").bold(), student.gender);
    println!("{}: {}", style("Phone").bold(), student.phone_number);
    println!("{}: {}", style("Email").bold(), student.email);
    println!(
        "{}: {}",
        style("Date of Birth").bold(),
        date_cell(&student.date_of_birth)
    );
    println!(
        "{}: {}",
        style("Admission Date").bold(),
        date_cell(&student.admission_date)
    );
    println!("{}: {}", style("Current Address").bold(), student.address);
    println!(
        "{}: {}",
        style("Permanent Address").bold(),
        student.permanent_address
    );
    if student.is_scholarship {
        println!("{}: yes", style("Scholarship").bold());
    }
    println!("{}", style("─".repeat(60)).dim());
    Ok(())
}

fn run_add(global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let student = prompt_student(&client, Student::blank())?;
    submit(&client, &student, "Created student")
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let client = client(global)?;
    let current = client
        .student_detail(args.id)
        .map_err(|e| miette::miette!("Failed to load student: {}", e))?;
    let student = prompt_student(&client, current)?;
    submit(&client, &student, "Updated student")
}

fn submit(client: &ApiClient, student: &Student, verb: &str) -> Result<()> {
    print_review(student);
    if !crate::cli::helpers::confirm("Save this student?")? {
        println!("Aborted.");
        return Ok(());
    }
    client
        .save_student(student)
        .map_err(|e| miette::miette!("Failed to save student: {}", e))?;
    output::success(&format!(
        "{} {}",
        verb,
        style(student.full_name()).cyan()
    ));
    Ok(())
}

/// Walk the full student form. Constraints mirror the back-office form:
/// names and ID number 3-30 chars, phone 6-15, email 5-30.
fn prompt_student(client: &ApiClient, mut student: Student) -> Result<Student> {
    let theme = ColorfulTheme::default();

    let classes = client
        .list_classes(&ClassFilter::lookup())
        .map_err(|e| miette::miette!("Failed to load classes: {}", e))?
        .data;
    if classes.is_empty() {
        return Err(miette::miette!(
            "No classes available; a student must be assigned to a class."
        ));
    }

    let class_value = forms::select_field(
        &theme,
        "Class",
        &class_options(&classes),
        &student
            .class_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    )?;
    student.class_id = Uuid::parse_str(&class_value).ok();
    student.class_name = classes
        .iter()
        .find(|class| class.id.map(|id| id.to_string()).as_deref() == Some(&class_value))
        .map(|class| class.name.clone())
        .unwrap_or_default();

    let name_len = FieldConstraint::required(FieldKind::Text).with_length(3, 30);
    student.id_number = forms::text_field(&theme, "ID Number", name_len, &student.id_number)?;
    student.first_name = forms::text_field(&theme, "First Name", name_len, &student.first_name)?;
    student.middle_name = forms::text_field(
        &theme,
        "Middle Name",
        FieldConstraint::optional(FieldKind::Text),
        &student.middle_name,
    )?;
    student.last_name = forms::text_field(&theme, "Last Name", name_len, &student.last_name)?;

    student.gender = forms::select_field(&theme, "Gender", &gender_options(), &student.gender)?;
    student.blood_group = forms::select_field(
        &theme,
        "Blood Group",
        &blood_group_options(),
        &student.blood_group,
    )?;

    student.date_of_birth =
        forms::date_field(&theme, "Date Of Birth", true, &student.date_of_birth)?;
    student.phone_number = forms::text_field(
        &theme,
        "Phone Number",
        FieldConstraint::required(FieldKind::Text).with_length(6, 15),
        &student.phone_number,
    )?;
    student.email = forms::text_field(
        &theme,
        "Email",
        FieldConstraint::required(FieldKind::Email).with_length(5, 30),
        &student.email,
    )?;

    let optional = FieldConstraint::optional(FieldKind::Text);
    student.medical_notes =
        forms::text_field(&theme, "Medical Notes", optional, &student.medical_notes)?;
    student.previous_school =
        forms::text_field(&theme, "Previous School", optional, &student.previous_school)?;
    student.is_scholarship =
        forms::bool_field(&theme, "Scholarship student?", student.is_scholarship)?;
    student.admission_date =
        forms::date_field(&theme, "Admission Date", true, &student.admission_date)?;
    student.citizenship_number = forms::text_field(
        &theme,
        "Citizenship Number",
        optional,
        &student.citizenship_number,
    )?;
    student.passport_number =
        forms::text_field(&theme, "Passport Number", optional, &student.passport_number)?;

    let required = FieldConstraint::required(FieldKind::Text);
    student.address = forms::text_field(&theme, "Current Address", required, &student.address)?;
    student.permanent_address = forms::text_field(
        &theme,
        "Permanent Address",
        required,
        &student.permanent_address,
    )?;
    student.emergency_contact_name = forms::text_field(
        &theme,
        "Emergency Contact Name",
        required,
        &student.emergency_contact_name,
    )?;
    student.emergency_contact_number = forms::text_field(
        &theme,
        "Emergency Contact Number",
        required,
        &student.emergency_contact_number,
    )?;
    student.relation_with_emergency_contact = forms::text_field(
        &theme,
        "Emergency Contact Relation",
        required,
        &student.relation_with_emergency_contact,
    )?;

    Ok(student)
}

fn print_review(student: &Student) {
    forms::print_review(
        "Student",
        &[
            ReviewField::select("Class", &student.class_name),
            ReviewField::text("ID Number", &student.id_number),
            ReviewField::text("First Name", &student.first_name),
            ReviewField::text("Middle Name", &student.middle_name),
            ReviewField::text("Last Name", &student.last_name),
            ReviewField::select("Gender", &student.gender),
            ReviewField::select("Blood Group", &student.blood_group),
            ReviewField::date("Date Of Birth", &student.date_of_birth),
            ReviewField::text("Phone Number", &student.phone_number),
            ReviewField::email("Email", &student.email),
            ReviewField::text("Medical Notes", &student.medical_notes),
            ReviewField::text("Previous School", &student.previous_school),
            ReviewField::date("Admission Date", &student.admission_date),
            ReviewField::text("Current Address", &student.address),
            ReviewField::text("Permanent Address", &student.permanent_address),
            ReviewField::text("Emergency Contact", &student.emergency_contact_name),
        ],
    );
}

fn class_options(classes: &[SchoolClass]) -> Vec<SelectOption> {
    classes
        .iter()
        .map(|class| {
            SelectOption::new(
                class.id.map(|id| id.to_string()).unwrap_or_default(),
                class.name.clone(),
            )
        })
        .collect()
}

fn gender_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Male", "Male"),
        SelectOption::new("Female", "Female"),
        SelectOption::new("Other", "Other"),
    ]
}

fn blood_group_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("x", "Unknown")];
    for group in ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"] {
        options.push(SelectOption::new(group, group));
    }
    options
}
