//! Error adapter for converting ApiaryError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Apiary
//! errors carry no source spans, so the adapter contributes a diagnostic
//! code and, where useful, a help message.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use apiary::{ApiaryError, LayoutError};

/// Adapter wrapping an [`ApiaryError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a ApiaryError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ApiaryError::Io(_) => "apiary::io",
            ApiaryError::Data(_) => "apiary::data",
            ApiaryError::Config(_) => "apiary::config",
            ApiaryError::Layout(_) => "apiary::layout",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &str = match &self.0 {
            ApiaryError::Data(_) => {
                "the input must be a JSON object with a \"data\" array of {label, value} samples"
            }
            ApiaryError::Layout(LayoutError::InvalidSeparation { .. }) => {
                "check the configured radius and padding: 2 * radius + padding must be positive"
            }
            ApiaryError::Layout(LayoutError::NonFiniteValue { .. }) => {
                "filter NaN and infinite values out of the positions before layout"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert an [`ApiaryError`] into a list of reportable errors.
///
/// Apiary errors are always singular; the Vec shape keeps the rendering
/// loop in `main` uniform.
pub fn to_reportables(err: &ApiaryError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
