// Query-string access shared by both endpoints

use axum::extract::{rejection::QueryRejection, Query};

use super::response::ApiError;

/// Raw query pairs, in request order. Repeated keys are kept.
pub type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// First value of `key`, treating an empty value as absent.
///
/// A query string that cannot be decoded at all is a 400 of its own, not a
/// missing parameter.
pub fn required_param(
    pairs: QueryPairs,
    key: &str,
    missing_message: &str,
) -> Result<String, ApiError> {
    let Query(pairs) = pairs.map_err(|rejection| {
        tracing::warn!(%rejection, "unreadable query string");
        ApiError::bad_request(format!("Invalid query string: {}", rejection.body_text()))
    })?;

    pairs
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(missing_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        Ok(Query(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_first_value_wins() {
        let value = required_param(pairs(&[("url", "a"), ("url", "b")]), "url", "Missing").unwrap();
        assert_eq!(value, "a");
    }

    #[test]
    fn test_empty_first_value_is_missing() {
        let err = required_param(pairs(&[("url", ""), ("url", "b")]), "url", "Missing").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Missing");
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let err = required_param(pairs(&[("videoid", "a")]), "videoId", "Missing").unwrap_err();
        assert_eq!(err.message, "Missing");
    }
}
