//! Exit code logic for the trnt process.
//!
//! Single responsibility: log a failed run with its category and map it to
//! the process exit outcome.

use tracing::error;
use trnt_core::{ErrorCategory, categorize};

use crate::ProcessExit;

/// Logs `error` tagged with its category and returns the exit outcome.
pub(crate) fn report_failure(error: &anyhow::Error) -> ProcessExit {
    let source: &(dyn std::error::Error + 'static) = error.as_ref();
    let category = categorize(source);
    error!(category = %category, "{error:#}");
    determine_exit_outcome(category)
}

/// Every error that reaches the top level ends the run unsuccessfully,
/// including a missing id: the requested action did not happen.
pub(crate) fn determine_exit_outcome(category: ErrorCategory) -> ProcessExit {
    match category {
        ErrorCategory::Network
        | ErrorCategory::Protocol
        | ErrorCategory::NotFound
        | ErrorCategory::Persistence
        | ErrorCategory::Downloader
        | ErrorCategory::Input
        | ErrorCategory::Config
        | ErrorCategory::App => ProcessExit::Failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use trnt_core::{ApiError, OrchestratorError, ShoppingListError};

    #[test]
    fn test_exit_outcome_failure_for_fatal_categories() {
        assert_eq!(
            determine_exit_outcome(ErrorCategory::Network),
            ProcessExit::Failure
        );
        assert_eq!(
            determine_exit_outcome(ErrorCategory::Persistence),
            ProcessExit::Failure
        );
    }

    #[test]
    fn test_report_failure_finds_category_through_context() {
        let result: Result<(), OrchestratorError> =
            Err(ShoppingListError::NotFound(9).into());
        let err = result.context("Failed to download shopping-list entry").unwrap_err();
        assert_eq!(categorize(err.as_ref()), ErrorCategory::NotFound);
        assert_eq!(report_failure(&err), ProcessExit::Failure);
    }

    #[test]
    fn test_report_failure_api_error() {
        let err = anyhow::Error::new(ApiError::Api {
            code: 20,
            message: "No results found".to_string(),
        });
        assert_eq!(categorize(err.as_ref()), ErrorCategory::Protocol);
        assert_eq!(report_failure(&err), ProcessExit::Failure);
    }
}
