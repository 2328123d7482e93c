//! Page cursor for paginated fetches.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Reasons a cursor cannot be built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("page must be at least 1 (got {page})")]
    InvalidPage { page: u32 },

    #[error("page size must be at least 1 (got {size})")]
    InvalidSize { size: u32 },
}

/// Every violation found while validating a cursor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid query: {}", join_errors(.0))]
pub struct QueryErrors(pub Vec<QueryError>);

/// Immutable page/size cursor with an optional filter payload.
///
/// Pages are 1-based. Every change produces a new cursor; the payload
/// travels along untouched and plays no part in pagination math.
///
/// # Example
///
/// ```rust
/// use fetchstate::core::Query;
///
/// let query = Query::new(20).unwrap();
/// assert_eq!(query.page(), 1);
///
/// let next = query.clone().next_page();
/// assert_eq!(next.page(), 2);
/// assert_eq!(query.page(), 1); // Original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuery<P>")]
pub struct Query<P = ()> {
    page: u32,
    size: u32,
    params: P,
}

#[derive(Deserialize)]
struct RawQuery<P> {
    page: u32,
    size: u32,
    params: P,
}

impl<P> TryFrom<RawQuery<P>> for Query<P> {
    type Error = QueryErrors;

    fn try_from(raw: RawQuery<P>) -> Result<Self, Self::Error> {
        Query::build(raw.page, raw.size, raw.params)
    }
}

impl Query<()> {
    /// Cursor at page 1 with the given page size.
    pub fn new(size: u32) -> Result<Self, QueryErrors> {
        Self::build(1, size, ())
    }

    /// Cursor at page 1 with a size that needs no validation.
    pub fn sized(size: NonZeroU32) -> Self {
        Self {
            page: 1,
            size: size.get(),
            params: (),
        }
    }

    /// Cursor at an arbitrary page.
    pub fn at(page: u32, size: u32) -> Result<Self, QueryErrors> {
        Self::build(page, size, ())
    }
}

impl<P> Query<P> {
    /// Validate and build a cursor, reporting every violation at once.
    pub fn build(page: u32, size: u32, params: P) -> Result<Self, QueryErrors> {
        validate(page, size)?;
        Ok(Self { page, size, params })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn into_params(self) -> P {
        self.params
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// Number of records preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }

    pub fn with_page(self, page: u32) -> Result<Self, QueryErrors> {
        Self::build(page, self.size, self.params)
    }

    pub fn with_size(self, size: u32) -> Result<Self, QueryErrors> {
        Self::build(self.page, size, self.params)
    }

    /// Replace the payload, keeping page and size.
    pub fn with_params<Q>(self, params: Q) -> Query<Q> {
        Query {
            page: self.page,
            size: self.size,
            params,
        }
    }

    pub fn next_page(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    pub fn first_page(self) -> Self {
        Self { page: 1, ..self }
    }
}

impl<P: Default> Default for Query<P> {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            params: P::default(),
        }
    }
}

fn join_errors(errors: &[QueryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn validate(page: u32, size: u32) -> Result<(), QueryErrors> {
    let checks = vec![check_page(page), check_size(size)];

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(QueryErrors(errors.iter().cloned().collect())),
    }
}

fn check_page(page: u32) -> Validation<(), NonEmptyVec<QueryError>> {
    if page >= 1 {
        Validation::success(())
    } else {
        Validation::fail(QueryError::InvalidPage { page })
    }
}

fn check_size(size: u32) -> Validation<(), NonEmptyVec<QueryError>> {
    if size >= 1 {
        Validation::success(())
    } else {
        Validation::fail(QueryError::InvalidSize { size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    struct Filter {
        term: String,
    }

    #[test]
    fn new_starts_at_first_page() {
        let query = Query::new(25).unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.size(), 25);
        assert!(query.is_first_page());
    }

    #[test]
    fn default_uses_default_page_size() {
        let query: Query = Query::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn validation_reports_all_violations() {
        let err = Query::at(0, 0).unwrap_err();
        assert_eq!(
            err.0,
            vec![
                QueryError::InvalidPage { page: 0 },
                QueryError::InvalidSize { size: 0 },
            ]
        );
        assert!(err.to_string().contains("page must be at least 1"));
        assert!(err.to_string().contains("page size must be at least 1"));
    }

    #[test]
    fn with_page_rejects_zero() {
        let query = Query::new(10).unwrap();
        assert!(query.clone().with_page(0).is_err());
        assert_eq!(query.with_page(4).unwrap().page(), 4);
    }

    #[test]
    fn next_and_first_page_keep_size_and_params() {
        let filter = Filter {
            term: "rust".to_string(),
        };
        let query = Query::build(1, 5, filter.clone()).unwrap();

        let third = query.next_page().next_page();
        assert_eq!(third.page(), 3);
        assert_eq!(third.size(), 5);
        assert_eq!(third.params(), &filter);

        let reset = third.first_page();
        assert_eq!(reset.page(), 1);
        assert_eq!(reset.params(), &filter);
    }

    #[test]
    fn offset_counts_preceding_records() {
        assert_eq!(Query::at(1, 10).unwrap().offset(), 0);
        assert_eq!(Query::at(3, 10).unwrap().offset(), 20);
    }

    #[test]
    fn with_params_swaps_payload_type() {
        let query = Query::at(2, 10).unwrap().with_params(Filter {
            term: "books".to_string(),
        });
        assert_eq!(query.page(), 2);
        assert_eq!(query.params().term, "books");
    }

    #[test]
    fn deserialization_revalidates() {
        let query: Query = serde_json::from_str(r#"{"page":2,"size":10,"params":null}"#).unwrap();
        assert_eq!(query.page(), 2);

        let invalid = serde_json::from_str::<Query>(r#"{"page":0,"size":10,"params":null}"#);
        assert!(invalid.is_err());
    }
}
