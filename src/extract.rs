//! Request extractors that reject bad input with a JSON [Error].

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::Error;

/// Like [axum::Json], but a body that cannot be parsed is rejected with
/// `400 {"error": ...}` instead of a plain text response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Like [axum::extract::Query], but a key that appears more than once takes
/// its first value instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct FirstValueQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for FirstValueQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_first_values(parts.uri.query().unwrap_or_default()).map(FirstValueQuery)
    }
}

/// Deserialize `query` into `T`, keeping the first value of repeated keys.
fn parse_first_values<T: DeserializeOwned>(query: &str) -> Result<T, Error> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|error| Error::InvalidRequest(format!("Invalid query string: {error}")))?;

    let mut first_values = Map::new();
    for (key, value) in pairs {
        first_values.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(first_values))
        .map_err(|error| Error::InvalidRequest(format!("Invalid query string: {error}")))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::Error;

    use super::parse_first_values;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Params {
        category: Option<String>,
        q: Option<String>,
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let got: Params = parse_first_values("category=Food&category=Rent").unwrap();

        assert_eq!(got.category.as_deref(), Some("Food"));
    }

    #[test]
    fn decodes_percent_and_plus() {
        let got: Params = parse_first_values("q=whole+foods%21").unwrap();

        assert_eq!(got.q.as_deref(), Some("whole foods!"));
    }

    #[test]
    fn empty_query_gives_defaults() {
        let got: Params = parse_first_values("").unwrap();

        assert_eq!(got, Params::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let got: Params = parse_first_values("page=2&q=rent").unwrap();

        assert_eq!(got.q.as_deref(), Some("rent"));
    }

    #[test]
    fn wrong_shape_is_invalid_request() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Numeric {
            count: u32,
        }

        let got = parse_first_values::<Numeric>("count=many");

        assert!(matches!(got, Err(Error::InvalidRequest(_))), "got {got:?}");
    }
}
