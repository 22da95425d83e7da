//! Issue types for locale consistency analysis results.
//!
//! Each issue is self-contained with all information needed by the reporter
//! to display it to users (text or JSON).

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::{
    MessageContext,
    utils::{MAX_VALUE_WIDTH, truncate_to_width},
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    Untranslated,
    CasingAnomaly,
    FileError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::CasingAnomaly => write!(f, "title-case"),
            Rule::FileError => write!(f, "file-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key present in the reference locale but absent from a candidate.
///
/// The context points at the key in the reference file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKeyIssue {
    pub context: MessageContext,
    /// Candidate locale the key is missing from.
    pub locale: String,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Candidate value identical to the reference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    pub reference_locale: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Candidate value written in Title Case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CasingAnomalyIssue {
    pub context: MessageContext,
}

impl CasingAnomalyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::CasingAnomaly
    }
}

/// A locale file that could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl FileErrorIssue {
    pub fn new(file_path: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            file_path: file_path.into(),
            // Include the cause chain ("Failed to read ...: No such file")
            error: format!("{:#}", error),
        }
    }

    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::FileError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A locale issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    Untranslated(UntranslatedIssue),
    CasingAnomaly(CasingAnomalyIssue),
    FileError(FileErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::CasingAnomaly(_) => CasingAnomalyIssue::severity(),
            Issue::FileError(_) => FileErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::CasingAnomaly(_) => CasingAnomalyIssue::rule(),
            Issue::FileError(_) => FileErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Locale file location with key/value context.
    Message(&'a MessageContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "missing in '{}' (reference value: \"{}\")",
            self.locale,
            truncate_to_width(&self.context.value, MAX_VALUE_WIDTH)
        ))
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "\"{}\" is identical to '{}'",
            truncate_to_width(&self.context.value, MAX_VALUE_WIDTH),
            self.reference_locale
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("add the key to 'allowList' if the value is a name shared across languages")
    }
}

impl Report for CasingAnomalyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "\"{}\" looks like Title Case",
            truncate_to_width(&self.context.value, MAX_VALUE_WIDTH)
        ))
    }
}

impl Report for FileErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MessageLocation;

    fn ctx(key: &str, value: &str) -> MessageContext {
        MessageContext::new(MessageLocation::new("./locales/en.ts", 3), key, value)
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::MissingKey.to_string(), "missing-key");
        assert_eq!(Rule::Untranslated.to_string(), "untranslated");
        assert_eq!(Rule::CasingAnomaly.to_string(), "title-case");
        assert_eq!(Rule::FileError.to_string(), "file-error");
    }

    #[test]
    fn test_issue_severity_and_rule() {
        let missing = Issue::MissingKey(MissingKeyIssue {
            context: ctx("a", "Hallo"),
            locale: "en".to_string(),
        });
        assert_eq!(missing.severity(), Severity::Warning);
        assert_eq!(missing.rule(), Rule::MissingKey);

        let err = Issue::FileError(FileErrorIssue::new(
            "./locales/de.ts",
            &anyhow::anyhow!("boom"),
        ));
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(err.report_rule(), Rule::FileError);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_report_details() {
        let issue = Issue::Untranslated(UntranslatedIssue {
            context: ctx("app.name", "Weerstation"),
            reference_locale: "nl".to_string(),
        });
        assert_eq!(
            issue.details().as_deref(),
            Some("\"Weerstation\" is identical to 'nl'")
        );
        assert!(issue.hint().is_some());

        let issue = Issue::CasingAnomaly(CasingAnomalyIssue {
            context: ctx("a", "Open The Weather Map"),
        });
        assert!(issue.hint().is_none());
        assert_eq!(issue.message(), "a");
    }

    #[test]
    fn test_file_error_keeps_cause_chain() {
        let error = anyhow::anyhow!("No such file").context("Failed to read locale file");
        let issue = FileErrorIssue::new("x.ts", &error);
        assert_eq!(issue.error, "Failed to read locale file: No such file");
    }
}
