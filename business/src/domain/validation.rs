use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
}

impl Check {
    /// Returns the violation message for `value`, if any.
    ///
    /// Length and format checks skip empty values; `Required` reports those.
    fn evaluate(&self, field: &str, value: Option<&str>) -> Option<String> {
        let value = value.unwrap_or_default();
        let length = value.chars().count();
        match self {
            Check::Required if value.trim().is_empty() => Some(format!("{field} is required.")),
            Check::MinLength(min) if length > 0 && length < *min => Some(format!(
                "{field} must be at least {min} characters long."
            )),
            Check::MaxLength(max) if length > *max => Some(format!(
                "{field} must not exceed {max} characters."
            )),
            Check::Email if length > 0 && !EMAIL_PATTERN.is_match(value) => {
                Some(format!("{field} must be a valid email address."))
            }
            _ => None,
        }
    }
}

struct FieldRule<T> {
    field: &'static str,
    accessor: fn(&T) -> Option<&str>,
    checks: Vec<Check>,
}

/// Declarative per-entity constraints evaluated before create and update.
pub struct ValidationRuleSet<T> {
    rules: Vec<FieldRule<T>>,
}

impl<T> Default for ValidationRuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> ValidationRuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(
        mut self,
        field: &'static str,
        accessor: fn(&T) -> Option<&str>,
        checks: impl IntoIterator<Item = Check>,
    ) -> Self {
        self.rules.push(FieldRule {
            field,
            accessor,
            checks: checks.into_iter().collect(),
        });
        self
    }

    /// Required field bounded to `[min, max]` characters.
    pub fn length(
        self,
        field: &'static str,
        accessor: fn(&T) -> Option<&str>,
        min: usize,
        max: usize,
    ) -> Self {
        self.rule(
            field,
            accessor,
            [Check::Required, Check::MinLength(min), Check::MaxLength(max)],
        )
    }

    pub fn validate(&self, entity: &T) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            let value = (rule.accessor)(entity);
            for check in &rule.checks {
                if let Some(message) = check.evaluate(rule.field, value) {
                    violations.push(FieldViolation::new(rule.field, message));
                }
            }
        }
        violations
    }
}

/// Joins the distinct messages of `violations`, keeping their first-seen order.
pub fn join_messages(violations: &[FieldViolation]) -> String {
    let mut messages: Vec<&str> = Vec::with_capacity(violations.len());
    for violation in violations {
        if !messages.contains(&violation.message.as_str()) {
            messages.push(&violation.message);
        }
    }
    messages.join(" ")
}
