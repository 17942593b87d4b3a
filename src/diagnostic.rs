//! Validation diagnostics.
//!
//! Problems found while checking items are collected as values instead of
//! being returned as errors, so a single pass reports every problem at once.

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fails the generation.
    Error,
    /// Reported, but generation still succeeds.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// Constant name does not match the identifier pattern.
pub const INVALID_NAME: &str = "BCG001";
/// Constant name was already used by an earlier item.
pub const DUPLICATE_NAME: &str = "BCG002";
/// Type tag is not one of the supported value types.
pub const UNSUPPORTED_TYPE: &str = "BCG003";
/// Project language is not supported.
pub const UNSUPPORTED_LANGUAGE: &str = "BCG004";

/// A single error or warning produced while validating items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Diagnostic::error(INVALID_NAME, "bad name");
        assert_eq!(d.to_string(), "error BCG001: bad name");

        let w = Diagnostic::warning(DUPLICATE_NAME, "seen before");
        assert_eq!(w.to_string(), "warning BCG002: seen before");
    }

    #[test]
    fn test_is_error() {
        assert!(Diagnostic::error(UNSUPPORTED_TYPE, "x").is_error());
        assert!(!Diagnostic::warning(DUPLICATE_NAME, "x").is_error());
    }
}
