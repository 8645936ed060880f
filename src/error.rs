//! Error types for chadcn operations.
//!
//! This module defines [`ChadcnError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation errors (missing config, unknown component names) abort a
//!   command before anything is written to disk
//! - Degradation errors (template unavailable, failed install) are reported
//!   as warnings and never abort a command
//! - Use `anyhow::Error` (via `ChadcnError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for chadcn operations.
#[derive(Debug, Error)]
pub enum ChadcnError {
    /// No usable project configuration was found.
    #[error("chadcn is not initialized in {}. Run `chadcn init` to get started.", path.display())]
    NotInitialized { path: PathBuf },

    /// One or more requested components are not in the registry.
    #[error("Invalid component(s): {}", names.join(", "))]
    InvalidComponentName { names: Vec<String> },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// A component file could not be obtained from any source.
    #[error("Template for '{component}' ({file}) unavailable: {reason}")]
    TemplateUnavailable {
        component: String,
        file: String,
        reason: String,
    },

    /// The host package manager exited unsuccessfully.
    #[error("Package install failed with exit code {code:?}: {command}")]
    PackageInstallFailed {
        command: String,
        code: Option<i32>,
        /// Tail of the package manager's captured error output.
        output: String,
    },

    /// The embedded catalog is missing or malformed.
    #[error("Registry catalog error: {message}")]
    CatalogError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for chadcn operations.
pub type Result<T> = std::result::Result<T, ChadcnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_initialized_displays_path_and_hint() {
        let err = ChadcnError::NotInitialized {
            path: PathBuf::from("/tmp/proj"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/proj"));
        assert!(msg.contains("chadcn init"));
    }

    #[test]
    fn invalid_component_name_lists_all_names() {
        let err = ChadcnError::InvalidComponentName {
            names: vec!["nope".into(), "nada".into()],
        };
        assert_eq!(err.to_string(), "Invalid component(s): nope, nada");
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ChadcnError::ConfigParseError {
            path: PathBuf::from("/proj/chadcn.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/proj/chadcn.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn template_unavailable_displays_component_and_file() {
        let err = ChadcnError::TemplateUnavailable {
            component: "tooltip".into(),
            file: "Tooltip/Tooltip.tsx".into(),
            reason: "HTTP 404".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tooltip"));
        assert!(msg.contains("Tooltip/Tooltip.tsx"));
        assert!(msg.contains("HTTP 404"));
    }

    #[test]
    fn package_install_failed_displays_command_and_code() {
        let err = ChadcnError::PackageInstallFailed {
            command: "pnpm add clsx".into(),
            code: Some(1),
            output: String::new(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pnpm add clsx"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChadcnError = io_err.into();
        assert!(matches!(err, ChadcnError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ChadcnError::CatalogError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
