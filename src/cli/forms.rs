//! Interactive form fields
//!
//! Wizard prompts wrap dialoguer controls and run every keystroke's final
//! value through `core::validate::check`, so a constraint violation is shown
//! inline and the prompt repeats; nothing invalid ever reaches the API.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::core::validate::{caption_detached, check, normalize_date, FieldConstraint, FieldKind};

/// One choice in a select field
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Free-text (or email) input validated against the field's constraints.
pub fn text_field(
    theme: &ColorfulTheme,
    label: &str,
    constraint: FieldConstraint,
    initial: &str,
) -> Result<String> {
    let owned_label = label.to_string();
    Input::with_theme(theme)
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(move |value: &String| match check(value, &owned_label, &constraint) {
            Some(message) => Err(message),
            None => Ok(()),
        })
        .interact_text()
        .into_diagnostic()
        .map(|value: String| value.trim().to_string())
}

/// Date input; the accepted value is normalized to plain `YYYY-MM-DD`.
pub fn date_field(
    theme: &ColorfulTheme,
    label: &str,
    required: bool,
    initial: &str,
) -> Result<String> {
    let constraint = FieldConstraint {
        required,
        kind: FieldKind::Date,
        min_length: None,
        max_length: None,
    };
    let value = text_field(theme, label, constraint, &normalize_date(initial))?;
    Ok(normalize_date(&value))
}

/// Single-choice picker; returns the chosen option's value.
pub fn select_field(
    theme: &ColorfulTheme,
    label: &str,
    options: &[SelectOption],
    initial_value: &str,
) -> Result<String> {
    let labels: Vec<&str> = options.iter().map(|opt| opt.label.as_str()).collect();
    let default = options
        .iter()
        .position(|opt| opt.value == initial_value)
        .unwrap_or(0);
    let chosen = Select::with_theme(theme)
        .with_prompt(label)
        .items(&labels)
        .default(default)
        .interact()
        .into_diagnostic()?;
    Ok(options[chosen].value.clone())
}

/// Yes/no toggle.
pub fn bool_field(theme: &ColorfulTheme, label: &str, initial: bool) -> Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt(label)
        .default(initial)
        .interact()
        .into_diagnostic()
}

/// One row of the pre-submit review block
#[derive(Debug)]
pub struct ReviewField {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
    pub is_select: bool,
}

impl ReviewField {
    pub fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            kind: FieldKind::Text,
            is_select: false,
        }
    }

    pub fn email(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Email,
            ..Self::text(label, value)
        }
    }

    pub fn date(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Date,
            ..Self::text(label, value)
        }
    }

    pub fn select(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            is_select: true,
            ..Self::text(label, value)
        }
    }

    /// Caption placement follows the floating-label rule: select and date
    /// captions always sit apart from the value, other captions detach only
    /// once a value is present. An attached caption is rendered in the value
    /// position, placeholder-style.
    pub fn render(&self) -> String {
        let has_value = !self.value.trim().is_empty();
        if caption_detached(self.kind, self.is_select, has_value, false) {
            let shown = if has_value {
                if self.kind == FieldKind::Date {
                    normalize_date(&self.value)
                } else {
                    self.value.clone()
                }
            } else {
                "-".to_string()
            };
            format!("{:<28} {}", format!("{}:", self.label), shown)
        } else {
            format!("{:<28}", format!("({})", self.label))
        }
    }
}

/// Print the review block shown before a record is submitted.
pub fn print_review(title: &str, fields: &[ReviewField]) {
    println!();
    println!("{}", style(title).bold());
    println!("{}", style("─".repeat(60)).dim());
    for field in fields {
        println!("  {}", field.render());
    }
    println!("{}", style("─".repeat(60)).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_detach_per_field_kind() {
        // Populated text field: caption and value shown together
        let populated = ReviewField::text("First Name", "Asha");
        assert_eq!(populated.render(), format!("{:<28} Asha", "First Name:"));

        // Empty text field keeps its caption inline, placeholder-style
        let empty = ReviewField::text("Middle Name", "");
        assert!(empty.render().starts_with("(Middle Name)"));

        // Select and date captions never collapse into the value position
        let select = ReviewField::select("Gender", "");
        assert!(select.render().starts_with("Gender:"));
        let date = ReviewField::date("Date Of Birth", "");
        assert!(date.render().starts_with("Date Of Birth:"));
    }

    #[test]
    fn date_review_values_render_as_calendar_dates() {
        let field = ReviewField::date("Admission Date", "2024-03-05T00:00:00Z");
        assert!(field.render().ends_with("2024-03-05"));
    }
}
