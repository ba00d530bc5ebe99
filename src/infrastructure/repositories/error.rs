use crate::domain::errors::{DomainError, StoreError};

/// PostgREST code for a single-object request that did not match exactly one row.
pub const PGRST_SINGLE_OBJECT: &str = "PGRST116";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let mut store = StoreError::new(db_err.message());
            if let Some(code) = db_err.code() {
                store = store.with_code(code.into_owned());
            }
            if let Some(constraint) = db_err.constraint() {
                store = store.with_details(format!("constraint: {constraint}"));
            }
            DomainError::Store(store)
        }
        _ => DomainError::Store(StoreError::new(err.to_string())),
    }
}

pub fn map_reqwest(err: reqwest::Error) -> DomainError {
    DomainError::Store(StoreError::new(err.to_string()))
}

/// Turns a PostgREST error body into a domain error. The zero-row case of the
/// single-object contract is the only one reported as `NotFound`.
pub fn map_postgrest(err: StoreError) -> DomainError {
    let zero_rows = err.code.as_deref() == Some(PGRST_SINGLE_OBJECT)
        && err
            .details
            .as_deref()
            .is_some_and(|details| details.contains(" 0 rows"));

    if zero_rows {
        DomainError::NotFound("no article matched the request".into())
    } else {
        DomainError::Store(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_row_single_object_is_not_found() {
        let err = StoreError::new("JSON object requested, multiple (or no) rows returned")
            .with_code(PGRST_SINGLE_OBJECT)
            .with_details("The result contains 0 rows");
        assert!(matches!(map_postgrest(err), DomainError::NotFound(_)));
    }

    #[test]
    fn multiple_rows_stay_a_store_error() {
        let err = StoreError::new("JSON object requested, multiple (or no) rows returned")
            .with_code(PGRST_SINGLE_OBJECT)
            .with_details("The result contains 10 rows");
        assert!(matches!(map_postgrest(err), DomainError::Store(_)));
    }

    #[test]
    fn other_codes_pass_through_unchanged() {
        let err = StoreError::new("duplicate key value violates unique constraint \"articles_slug_key\"")
            .with_code("23505");
        match map_postgrest(err.clone()) {
            DomainError::Store(inner) => assert_eq!(inner, err),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_database_sqlx_errors_become_store_errors() {
        let err = map_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DomainError::Store(_)));
    }
}
