//! Error types with rich diagnostics using miette
//!
//! Every failure is fatal to the construction call in progress: no retry,
//! no partial callout. Errors propagate to the caller unchanged.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while resolving positions or assembling a callout
#[derive(Error, Diagnostic, Debug)]
pub enum CalloutError {
    /// The point specification carried values the plane cannot represent.
    #[error("invalid point specification: {reason}")]
    #[diagnostic(code(callouts::resolve::invalid_point))]
    InvalidPoint { reason: String },

    #[error("coordinate system required for domain (Q, P) coordinates")]
    #[diagnostic(
        code(callouts::resolve::coord_system_required),
        help("attach a CoordSystem to the Environment before resolving domain coordinates")
    )]
    CoordSystemRequired,

    #[error("element not found: {reference}")]
    #[diagnostic(
        code(callouts::resolve::element_not_found),
        help("the element lookup returned nothing for this reference")
    )]
    ElementNotFound { reference: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_input() {
        let err = CalloutError::ElementNotFound {
            reference: "#my-dot".to_string(),
        };
        assert_eq!(err.to_string(), "element not found: #my-dot");

        let err = CalloutError::InvalidPoint {
            reason: "value is NaN".to_string(),
        };
        assert!(err.to_string().contains("NaN"));
    }
}
