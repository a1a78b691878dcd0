//! Declarative field validation for form input
//!
//! Every form field carries a small set of constraints (required, min/max
//! length, email shape). Validation is a pure function from a candidate value
//! to at most one human-readable message; rules are evaluated in a fixed
//! order and the first violation wins, so an empty required field reads
//! "required", never "too short".

use serde::{Deserialize, Serialize};

/// What kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Date,
}

/// Constraints attached to one form field
///
/// Callers are responsible for `min_length <= max_length` when both are set;
/// the validator does not enforce it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldConstraint {
    pub required: bool,
    pub kind: FieldKind,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldConstraint {
    pub fn required(kind: FieldKind) -> Self {
        Self {
            required: true,
            kind,
            ..Self::default()
        }
    }

    pub fn optional(kind: FieldKind) -> Self {
        Self {
            required: false,
            kind,
            ..Self::default()
        }
    }

    pub fn with_length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }
}

/// Validate a candidate value against a field's constraints
///
/// Returns the first violated rule's message, or `None` when the value
/// satisfies every constraint. Lengths are counted on the trimmed value in
/// Unicode scalar values.
pub fn check(value: &str, label: &str, constraint: &FieldConstraint) -> Option<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();

    if constraint.required && len == 0 {
        return Some(format!("{} is required.", label));
    }

    if !constraint.required
        && constraint.kind == FieldKind::Email
        && len > 0
        && !email_shape_ok(trimmed)
    {
        return Some("Please enter a valid email address.".to_string());
    }

    if constraint.required && constraint.kind == FieldKind::Email && !email_shape_ok(trimmed) {
        return Some("Please enter a valid email address.".to_string());
    }

    if let Some(min) = constraint.min_length {
        if len > 0 && len < min {
            return Some(format!("{} must be at least {} characters.", label, min));
        }
    }

    if let Some(max) = constraint.max_length {
        if len > max {
            return Some(format!("{} must be at most {} characters.", label, max));
        }
    }

    None
}

/// Minimal email shape check: no whitespace, exactly one `@` with characters
/// before it, and a dot-separated domain with non-empty segments around the
/// last dot. Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Normalize a date-ish value to its calendar date (`YYYY-MM-DD`)
///
/// The date is taken from the parsed value's own calendar fields, never by
/// converting through the local time zone, so `2024-03-05T00:00:00Z` is
/// `2024-03-05` everywhere. Idempotent for values already in plain date form.
/// Values the parser does not understand are returned unchanged; the server
/// is authoritative and this is display-only.
pub fn normalize_date(value: &str) -> String {
    let trimmed = value.trim();

    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return dt.date().format("%Y-%m-%d").to_string();
    }

    trimmed.to_string()
}

/// Whether a field's caption is rendered detached from its input area
///
/// Select and date fields always detach their caption (a caption sitting
/// inside a populated picker would overlap it); every other kind detaches
/// once the field has a value or holds focus.
pub fn caption_detached(kind: FieldKind, is_select: bool, has_value: bool, focused: bool) -> bool {
    if is_select || kind == FieldKind::Date {
        return true;
    }
    has_value || focused
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(required: bool) -> FieldConstraint {
        FieldConstraint {
            required,
            kind: FieldKind::Text,
            min_length: None,
            max_length: None,
        }
    }

    #[test]
    fn unconstrained_optional_text_accepts_anything() {
        let c = text(false);
        assert_eq!(check("", "Notes", &c), None);
        assert_eq!(check("   ", "Notes", &c), None);
        assert_eq!(check("anything at all", "Notes", &c), None);
    }

    #[test]
    fn required_wins_over_every_other_rule() {
        let c = FieldConstraint {
            required: true,
            kind: FieldKind::Text,
            min_length: Some(3),
            max_length: Some(5),
        };
        assert_eq!(check("", "ID Number", &c), Some("ID Number is required.".into()));
        // Whitespace-only trims to empty
        assert_eq!(check("  \t ", "ID Number", &c), Some("ID Number is required.".into()));
    }

    #[test]
    fn email_shape_accepts_and_rejects() {
        let required = FieldConstraint::required(FieldKind::Email);
        assert_eq!(check("a@b.c", "Email", &required), None);

        let msg = Some("Please enter a valid email address.".to_string());
        assert_eq!(check("a@b", "Email", &required), msg);
        assert_eq!(check("ab.c", "Email", &required), msg);
        assert_eq!(check("a@b@c.d", "Email", &required), msg);
        assert_eq!(check("a b@c.d", "Email", &required), msg);
    }

    #[test]
    fn required_empty_email_reads_required() {
        // Rule order: the empty case hits "required" before the shape check
        let c = FieldConstraint::required(FieldKind::Email);
        assert_eq!(check("", "Email", &c), Some("Email is required.".into()));
    }

    #[test]
    fn optional_email_skips_empty_values() {
        let c = FieldConstraint::optional(FieldKind::Email);
        assert_eq!(check("", "Email", &c), None);
        assert_eq!(
            check("not-an-email", "Email", &c),
            Some("Please enter a valid email address.".into())
        );
    }

    #[test]
    fn length_bounds() {
        let c = FieldConstraint::optional(FieldKind::Text).with_length(3, 5);
        assert_eq!(
            check("ab", "Code", &c),
            Some("Code must be at least 3 characters.".into())
        );
        assert_eq!(
            check("abcdef", "Code", &c),
            Some("Code must be at most 5 characters.".into())
        );
        assert_eq!(check("abc", "Code", &c), None);
        // Empty optional value is not "too short"
        assert_eq!(check("", "Code", &c), None);
    }

    #[test]
    fn length_counts_trimmed_value() {
        let c = FieldConstraint::optional(FieldKind::Text).with_length(3, 5);
        assert_eq!(check("  abc  ", "Code", &c), None);
        assert!(check(" abcdef ", "Code", &c).is_some());
    }

    #[test]
    fn date_normalization_is_stable_and_zone_free() {
        assert_eq!(normalize_date("2024-03-05T00:00:00Z"), "2024-03-05");
        assert_eq!(normalize_date("2024-03-05T23:59:59+05:45"), "2024-03-05");
        // Idempotent on plain dates
        assert_eq!(normalize_date("2024-03-05"), "2024-03-05");
        assert_eq!(normalize_date(&normalize_date("2024-03-05T00:00:00Z")), "2024-03-05");
        // ERP's null-date sentinel keeps its own calendar fields
        assert_eq!(normalize_date("0001-01-01T00:00:00Z"), "0001-01-01");
        // Unparseable input passes through untouched
        assert_eq!(normalize_date("yesterday"), "yesterday");
    }

    #[test]
    fn select_and_date_captions_always_detach() {
        assert!(caption_detached(FieldKind::Text, true, false, false));
        assert!(caption_detached(FieldKind::Date, false, false, false));
        assert!(!caption_detached(FieldKind::Text, false, false, false));
        assert!(caption_detached(FieldKind::Text, false, true, false));
        assert!(caption_detached(FieldKind::Email, false, false, true));
    }
}
