//! The pagination window.

use crate::error::InvalidRequest;
use crate::params::ParameterMap;

/// A resolved `firstResult`/`maxResults` pair.
///
/// The defaults apply independently: supplying only one of the two still
/// yields a valid window. A request supplying neither is not a window at
/// all; it triggers the unpaged `list()` terminal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    /// Index of the first record to return (default 0).
    pub first_result: i32,
    /// Maximum number of records to return (default `i32::MAX`).
    pub max_results: i32,
}

impl PaginationWindow {
    /// Reads the window from the parameter map; `None` when neither
    /// parameter was supplied.
    pub fn from_params(params: &ParameterMap) -> Result<Option<PaginationWindow>, InvalidRequest> {
        let first_result = params
            .get("firstResult")
            .map(|raw| raw.i32("firstResult"))
            .transpose()?;
        let max_results = params
            .get("maxResults")
            .map(|raw| raw.i32("maxResults"))
            .transpose()?;

        match (first_result, max_results) {
            (None, None) => Ok(None),
            (first_result, max_results) => Ok(Some(PaginationWindow {
                first_result: first_result.unwrap_or(0),
                max_results: max_results.unwrap_or(i32::MAX),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_parameters_yield_no_window() {
        assert_eq!(PaginationWindow::from_params(&ParameterMap::new()).unwrap(), None);
    }

    #[test]
    fn test_both_supplied() {
        let params = ParameterMap::from_query_pairs([("firstResult", "5"), ("maxResults", "20")]);
        assert_eq!(
            PaginationWindow::from_params(&params).unwrap(),
            Some(PaginationWindow {
                first_result: 5,
                max_results: 20
            })
        );
    }

    #[test]
    fn test_missing_first_result_defaults_to_zero() {
        let params = ParameterMap::from_query_pairs([("maxResults", "10")]);
        assert_eq!(
            PaginationWindow::from_params(&params).unwrap(),
            Some(PaginationWindow {
                first_result: 0,
                max_results: 10
            })
        );
    }

    #[test]
    fn test_missing_max_results_defaults_to_max_int() {
        let params = ParameterMap::from_query_pairs([("firstResult", "10")]);
        assert_eq!(
            PaginationWindow::from_params(&params).unwrap(),
            Some(PaginationWindow {
                first_result: 10,
                max_results: i32::MAX
            })
        );
    }

    #[test]
    fn test_unparsable_bound_is_rejected() {
        let params = ParameterMap::from_query_pairs([("firstResult", "many")]);
        assert!(PaginationWindow::from_params(&params).is_err());
    }
}
