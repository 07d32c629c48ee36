use super::submission::FormSubmission;
use std::collections::BTreeMap;
use unicode_segmentation::UnicodeSegmentation;
use validator::validate_email;

/// A declarative validation rule set for one form: an ordered list of constraint chains, one per
/// field.
///
/// Validation is **gather-all across fields** so a visitor sees every problem in one round-trip,
/// but **first-failure-wins within a field**: once a field has violated a constraint, its later
/// constraints are not evaluated and it contributes exactly one message.
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldRules>,
}

struct FieldRules {
    field: &'static str,
    constraints: Vec<Constraint>,
}

/// One per-field rule, carrying the human-readable message surfaced on violation.
pub enum Constraint {
    /// The field must be present with a non-whitespace value.
    Required { message: &'static str },
    /// The value must have a valid email shape.
    Email { message: &'static str },
    /// Minimum length, counted in extended graphemes.
    MinLength { limit: usize, message: &'static str },
    /// Maximum length, counted in extended graphemes.
    MaxLength { limit: usize, message: &'static str },
    /// A multi-select field must carry at least this many non-empty selections.
    MinSelections { limit: usize, message: &'static str },
    /// Every submitted value must belong to the allowed set.
    OneOf {
        allowed: &'static [&'static str],
        message: &'static str,
    },
    /// The value must parse as a number.
    Numeric { message: &'static str },
    /// Lower bound on a numeric value. Unparseable values are left to `Numeric`.
    MinNumber { limit: f64, message: &'static str },
    /// Upper bound on a numeric value. Unparseable values are left to `Numeric`.
    MaxNumber { limit: f64, message: &'static str },
}

impl Constraint {
    pub fn required(message: &'static str) -> Self {
        Self::Required { message }
    }

    pub fn email(message: &'static str) -> Self {
        Self::Email { message }
    }

    pub fn min_length(limit: usize, message: &'static str) -> Self {
        Self::MinLength { limit, message }
    }

    pub fn max_length(limit: usize, message: &'static str) -> Self {
        Self::MaxLength { limit, message }
    }

    pub fn min_selections(limit: usize, message: &'static str) -> Self {
        Self::MinSelections { limit, message }
    }

    pub fn one_of(allowed: &'static [&'static str], message: &'static str) -> Self {
        Self::OneOf { allowed, message }
    }

    pub fn numeric(message: &'static str) -> Self {
        Self::Numeric { message }
    }

    pub fn min_number(limit: f64, message: &'static str) -> Self {
        Self::MinNumber { limit, message }
    }

    pub fn max_number(limit: f64, message: &'static str) -> Self {
        Self::MaxNumber { limit, message }
    }
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: &'static str, constraints: Vec<Constraint>) -> Self {
        self.fields.push(FieldRules { field, constraints });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check a submission against every field chain, collecting one message per failing field.
    pub fn validate(&self, submission: &FormSubmission) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rules in &self.fields {
            if let Some(message) = rules.first_violation(submission) {
                errors.insert(rules.field, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl FieldRules {
    fn first_violation(&self, submission: &FormSubmission) -> Option<&'static str> {
        let raw = submission.value(self.field);
        let present = raw.map_or(false, |value| !value.trim().is_empty());
        let value = raw.unwrap_or("");

        for constraint in &self.constraints {
            match constraint {
                Constraint::Required { message } => {
                    if !present {
                        return Some(message);
                    }
                }
                Constraint::MinSelections { limit, message } => {
                    let selected = submission
                        .values(self.field)
                        .iter()
                        .filter(|value| !value.trim().is_empty())
                        .count();
                    if selected < *limit {
                        return Some(message);
                    }
                }
                Constraint::OneOf { allowed, message } => {
                    if submission
                        .values(self.field)
                        .iter()
                        .any(|value| !allowed.contains(&value.as_str()))
                    {
                        return Some(message);
                    }
                }
                // The remaining constraints look at a single value; an optional field that was
                // left blank skips them. (A missing required field already returned above.)
                _ if !present => continue,
                Constraint::Email { message } => {
                    if !validate_email(value) {
                        return Some(message);
                    }
                }
                Constraint::MinLength { limit, message } => {
                    if value.graphemes(true).count() < *limit {
                        return Some(message);
                    }
                }
                Constraint::MaxLength { limit, message } => {
                    if value.graphemes(true).count() > *limit {
                        return Some(message);
                    }
                }
                Constraint::Numeric { message } => {
                    if value.trim().parse::<f64>().is_err() {
                        return Some(message);
                    }
                }
                Constraint::MinNumber { limit, message } => {
                    if value
                        .trim()
                        .parse::<f64>()
                        .map_or(false, |number| number < *limit)
                    {
                        return Some(message);
                    }
                }
                Constraint::MaxNumber { limit, message } => {
                    if value
                        .trim()
                        .parse::<f64>()
                        .map_or(false, |number| number > *limit)
                    {
                        return Some(message);
                    }
                }
            }
        }
        None
    }
}

/// Per-field error messages, keyed by the submitted field name. Serializes as a flat JSON object
/// so it can be embedded verbatim in the `{ errors, data }` failure payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// A single error attached to one field; business rule checks use this shape.
    pub fn singleton(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
