//! Bearer Token Header Parsing
//!
//! Extracts the credential from an `Authorization: Bearer <token>` header
//! (RFC 6750 section 2.1).

use http::{HeaderMap, header};
use thiserror::Error;

/// Value for the `WWW-Authenticate` header on 401 responses
pub const BEARER_CHALLENGE: &str = "Bearer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,

    #[error("Authorization scheme is not Bearer")]
    WrongScheme,

    #[error("Malformed bearer credentials")]
    Malformed,
}

/// Extract the bearer token from request headers.
///
/// The scheme is matched case-insensitively; the token itself must be a
/// single non-empty run of visible ASCII.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let (scheme, token) = value.trim().split_once(' ').ok_or(BearerError::Malformed)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::WrongScheme);
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with("bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), Err(BearerError::Missing));
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic YWRtaW46YWRtaW4xMjM=");
        assert_eq!(extract_bearer_token(&headers), Err(BearerError::WrongScheme));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            extract_bearer_token(&headers_with("Bearer")),
            Err(BearerError::Malformed)
        );
        assert_eq!(
            extract_bearer_token(&headers_with("Bearer a b")),
            Err(BearerError::Malformed)
        );
    }
}
