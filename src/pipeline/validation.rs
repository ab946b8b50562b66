//! Validation engine for notes requests.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`NotesRequest`] and the active [`NotesConfig`], and collects every
//! diagnostic into a [`ValidationReport`]. It never short-circuits on the
//! first error, so callers see all problems at once.
//!
//! The text length limit is not checked here: the summarizer owns that check
//! and reports it as [`NotesError::LengthExceeded`](crate::NotesError).
//!
//! ```rust
//! use note_digest::pipeline::validation::ValidationEngine;
//! use note_digest::{NotesConfig, NotesRequest};
//!
//! let request = NotesRequest::text("Some notes.").with_questions(["   "]);
//! let report = ValidationEngine::with_defaults().validate(&request, &NotesConfig::default());
//! assert!(report.is_valid());
//! assert_eq!(report.warnings().count(), 1);
//! ```

use serde::Serialize;

use super::request::NotesRequest;
use crate::errors::ErrorCode;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::NotesConfig;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Issue ──────────────────────────────────────────────────────────────────

/// One problem with a request: code, location, message, and an optional hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestIssue {
    pub code: ErrorCode,
    /// JSON-pointer-style location (e.g. `/questions/2`)
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl RequestIssue {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for RequestIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: an error or warning attached to a
/// [`RequestIssue`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub issue: RequestIssue,
}

impl ValidationDiagnostic {
    pub fn error(issue: RequestIssue) -> Self {
        Self {
            severity: Severity::Error,
            issue,
        }
    }

    pub fn warning(issue: RequestIssue) -> Self {
        Self {
            severity: Severity::Warning,
            issue,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity issues.
    pub fn errors(&self) -> impl Iterator<Item = &RequestIssue> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.issue)
    }

    /// Iterate over warning-severity issues.
    pub fn warnings(&self) -> impl Iterator<Item = &RequestIssue> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.issue)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let errors: Vec<String> = self.errors().map(ToString::to_string).collect();
        f.write_str(&errors.join("; "))
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a request and returns zero or more
/// diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so one engine can serve
/// concurrent requests.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"question_count"`).
    fn name(&self) -> &str;

    /// Inspect `request` under `cfg` and return any findings.
    fn validate(&self, request: &NotesRequest, cfg: &NotesConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s and collects all diagnostics into a
/// [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(ConfigLimitsRule));
        engine.add_rule(Box::new(QuestionCountRule));
        engine.add_rule(Box::new(QuestionLengthRule));
        engine.add_rule(Box::new(BlankQuestionRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules and return the collected report.
    pub fn validate(&self, request: &NotesRequest, cfg: &NotesConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(request, cfg));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Config limits must be usable ────────────────────────────────────────

struct ConfigLimitsRule;

impl ValidationRule for ConfigLimitsRule {
    fn name(&self) -> &str {
        "config_limits"
    }

    fn validate(&self, _request: &NotesRequest, cfg: &NotesConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let checks: &[(&str, usize)] = &[
            ("max_text_length", cfg.max_text_length),
            ("max_question_length", cfg.max_question_length),
        ];

        for &(field, value) in checks {
            if value == 0 {
                out.push(ValidationDiagnostic::error(
                    RequestIssue::new(
                        ErrorCode::InvalidConfig,
                        format!("/config/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!("Remove {field} to use the default")),
                ));
            }
        }

        let ratio = cfg.summary_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            out.push(ValidationDiagnostic::error(
                RequestIssue::new(
                    ErrorCode::InvalidConfig,
                    "/config/summary_ratio",
                    format!("summary_ratio must be in (0, 1], got {ratio}"),
                )
                .with_hint("The default is 0.3"),
            ));
        }

        if let Some(language) = cfg.stopword_language.as_deref() {
            if StopwordFilter::language(language).is_none() {
                out.push(ValidationDiagnostic::error(
                    RequestIssue::new(
                        ErrorCode::InvalidConfig,
                        "/config/stopword_language",
                        format!("unsupported stopword language \"{language}\""),
                    )
                    .with_hint("Use an ISO code such as \"en\" or \"de\", or remove the field"),
                ));
            }
        }

        out
    }
}

// ─── 2. At most max_questions questions ─────────────────────────────────────

struct QuestionCountRule;

impl ValidationRule for QuestionCountRule {
    fn name(&self) -> &str {
        "question_count"
    }

    fn validate(&self, request: &NotesRequest, cfg: &NotesConfig) -> Vec<ValidationDiagnostic> {
        let count = request.questions.len();
        if count > cfg.max_questions {
            vec![ValidationDiagnostic::error(
                RequestIssue::new(
                    ErrorCode::TooManyQuestions,
                    "/questions",
                    format!("{count} questions submitted, at most {} allowed", cfg.max_questions),
                )
                .with_hint("Remove some questions"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 3. Each question within max_question_length ────────────────────────────

struct QuestionLengthRule;

impl ValidationRule for QuestionLengthRule {
    fn name(&self) -> &str {
        "question_length"
    }

    fn validate(&self, request: &NotesRequest, cfg: &NotesConfig) -> Vec<ValidationDiagnostic> {
        request
            .questions
            .iter()
            .enumerate()
            .filter_map(|(i, q)| {
                let length = q.chars().count();
                (length > cfg.max_question_length).then(|| {
                    ValidationDiagnostic::error(
                        RequestIssue::new(
                            ErrorCode::QuestionTooLong,
                            format!("/questions/{i}"),
                            format!(
                                "question is {length} characters, at most {} allowed",
                                cfg.max_question_length
                            ),
                        )
                        .with_hint("Shorten the question"),
                    )
                })
            })
            .collect()
    }
}

// ─── 4. Blank questions are skipped (warning) ───────────────────────────────

struct BlankQuestionRule;

impl ValidationRule for BlankQuestionRule {
    fn name(&self) -> &str {
        "blank_question"
    }

    fn validate(&self, request: &NotesRequest, _cfg: &NotesConfig) -> Vec<ValidationDiagnostic> {
        request
            .questions
            .iter()
            .enumerate()
            .filter(|(_, q)| q.trim().is_empty())
            .map(|(i, _)| {
                ValidationDiagnostic::warning(RequestIssue::new(
                    ErrorCode::BlankQuestion,
                    format!("/questions/{i}"),
                    "blank question will be skipped",
                ))
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
