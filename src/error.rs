//! Structured RPC errors.
//!
//! An [`RpcError`] carries a caller-assigned id, an HTTP-style status code,
//! a human-readable detail and the status text derived from the code. Its
//! textual form is its JSON encoding, so it can be passed across service
//! boundaries as a plain string and recovered with [`RpcError::parse`].

use crate::de::null_as_default;
use crate::format::sprintf;
use crate::status::status_text;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::debug;

/// Standard error categories with a fixed status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Timeout,
    Conflict,
    InternalServerError,
}

impl Category {
    /// Every standard category, in ascending code order.
    pub const ALL: [Category; 8] = [
        Category::BadRequest,
        Category::Unauthorized,
        Category::Forbidden,
        Category::NotFound,
        Category::MethodNotAllowed,
        Category::Timeout,
        Category::Conflict,
        Category::InternalServerError,
    ];

    /// The fixed status code for this category.
    pub fn code(self) -> i32 {
        match self {
            Category::BadRequest => 400,
            Category::Unauthorized => 401,
            Category::Forbidden => 403,
            Category::NotFound => 404,
            Category::MethodNotAllowed => 405,
            Category::Timeout => 408,
            Category::Conflict => 409,
            Category::InternalServerError => 500,
        }
    }
}

/// An RPC-level failure.
///
/// Fields are only settable at construction time, which keeps `status`
/// consistent with the `code` it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcError {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    #[serde(deserialize_with = "null_as_default")]
    code: i32,
    #[serde(deserialize_with = "null_as_default")]
    detail: String,
    #[serde(deserialize_with = "null_as_default")]
    status: String,
}

impl RpcError {
    /// Create an error with an arbitrary status code.
    ///
    /// The code is not validated; unknown codes get an empty status.
    pub fn new(id: impl Into<String>, detail: impl Into<String>, code: i32) -> Self {
        Self::with_status_resolver(id, detail, code, status_text)
    }

    /// Create an error, deriving `status` from `code` with a custom resolver.
    pub fn with_status_resolver(
        id: impl Into<String>,
        detail: impl Into<String>,
        code: i32,
        resolve: impl FnOnce(i32) -> String,
    ) -> Self {
        Self {
            id: id.into(),
            code,
            detail: detail.into(),
            status: resolve(code),
        }
    }

    /// Create an error for one of the standard categories.
    pub fn from_category(
        category: Category,
        id: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(id, detail, category.code())
    }

    /// 400 Bad Request
    pub fn bad_request(id: impl Into<String>, format: &str, args: &[&dyn Display]) -> Self {
        Self::from_category(Category::BadRequest, id, sprintf(format, args))
    }

    /// 401 Unauthorized
    pub fn unauthorized(id: impl Into<String>, format: &str, args: &[&dyn Display]) -> Self {
        Self::from_category(Category::Unauthorized, id, sprintf(format, args))
    }

    /// 403 Forbidden
    pub fn forbidden(id: impl Into<String>, format: &str, args: &[&dyn Display]) -> Self {
        Self::from_category(Category::Forbidden, id, sprintf(format, args))
    }

    /// 404 Not Found
    pub fn not_found(id: impl Into<String>, format: &str, args: &[&dyn Display]) -> Self {
        Self::from_category(Category::NotFound, id, sprintf(format, args))
    }

    /// 405 Method Not Allowed
    pub fn method_not_allowed(id: impl Into<String>, format: &str, args: &[&dyn Display]) -> Self {
        Self::from_category(Category::MethodNotAllowed, id, sprintf(format, args))
    }

    /// 408 Request Timeout
    pub fn timeout(id: impl Into<String>, format: &str, args: &[&dyn Display]) -> Self {
        Self::from_category(Category::Timeout, id, sprintf(format, args))
    }

    /// 409 Conflict
    pub fn conflict(id: impl Into<String>, format: &str, args: &[&dyn Display]) -> Self {
        Self::from_category(Category::Conflict, id, sprintf(format, args))
    }

    /// 500 Internal Server Error
    pub fn internal_server_error(
        id: impl Into<String>,
        format: &str,
        args: &[&dyn Display],
    ) -> Self {
        Self::from_category(Category::InternalServerError, id, sprintf(format, args))
    }

    /// Decode an error from its JSON encoding.
    ///
    /// Field names match case-insensitively and `null` values leave a field
    /// empty. Never fails: if `raw` is not a valid encoding, the result
    /// carries `raw` verbatim as its detail and every other field is empty/zero.
    pub fn parse(raw: &str) -> Self {
        match Self::decode(raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!("Not an encoded RPC error ({}), using raw text as detail", e);
                Self {
                    detail: raw.to_string(),
                    ..Self::default()
                }
            }
        }
    }

    /// An exact lowercase key takes precedence over other spellings of it.
    fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_str(raw)?;

        let mut normalized = Map::with_capacity(fields.len());
        for (key, value) in &fields {
            if *key == key.to_lowercase() {
                normalized.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in fields {
            normalized.entry(key.to_lowercase()).or_insert(value);
        }

        serde_json::from_value(Value::Object(normalized))
    }

    /// Return the same error with a different detail.
    ///
    /// Used to swap in a localized message; `code` and `status` are kept.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// JSON encoding of this error, or an empty string if encoding fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl std::error::Error for RpcError {}

impl FromStr for RpcError {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        // Codes outside the valid range are reported as 500 on the wire;
        // the body still carries the original code.
        let status = u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}

/// Build an [`RpcError`] for a category using a compile-time format string.
///
/// ```
/// use rpc_errors::{rpc_error, Category};
///
/// let err = rpc_error!(Category::NotFound, "users", "user {} not found", 42);
/// assert_eq!(err.code(), 404);
/// assert_eq!(err.detail(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! rpc_error {
    ($category:expr, $id:expr, $($arg:tt)+) => {
        $crate::RpcError::from_category($category, $id, format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constructor Tests ====================

    #[test]
    fn test_new_sets_status_from_code() {
        let err = RpcError::new("svc", "boom", 503);
        assert_eq!(err.id(), "svc");
        assert_eq!(err.code(), 503);
        assert_eq!(err.detail(), "boom");
        assert_eq!(err.status(), "Service Unavailable");
    }

    #[test]
    fn test_new_with_unknown_code_has_empty_status() {
        let err = RpcError::new("svc", "odd", 42);
        assert_eq!(err.code(), 42);
        assert_eq!(err.status(), "");
    }

    #[test]
    fn test_custom_status_resolver() {
        let err = RpcError::with_status_resolver("svc", "x", 404, |code| format!("code-{}", code));
        assert_eq!(err.status(), "code-404");
    }

    #[test]
    fn test_category_factories() {
        let cases: Vec<(RpcError, i32, &str)> = vec![
            (RpcError::bad_request("a", "d", &[]), 400, "Bad Request"),
            (RpcError::unauthorized("a", "d", &[]), 401, "Unauthorized"),
            (RpcError::forbidden("a", "d", &[]), 403, "Forbidden"),
            (RpcError::not_found("a", "d", &[]), 404, "Not Found"),
            (RpcError::method_not_allowed("a", "d", &[]), 405, "Method Not Allowed"),
            (RpcError::timeout("a", "d", &[]), 408, "Request Timeout"),
            (RpcError::conflict("a", "d", &[]), 409, "Conflict"),
            (RpcError::internal_server_error("a", "d", &[]), 500, "Internal Server Error"),
        ];

        for (err, code, status) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.status(), status);
            assert_eq!(err.detail(), "d");
        }
    }

    #[test]
    fn test_factory_formats_detail() {
        let err = RpcError::not_found("users", "user %s not found in %s", &[&"bob", &"eu-1"]);
        assert_eq!(err.detail(), "user bob not found in eu-1");
    }

    #[test]
    fn test_factory_keeps_mismatch_in_detail() {
        let err = RpcError::bad_request("users", "missing %s and %s", &[&"name"]);
        assert_eq!(err.detail(), "missing name and %!s(MISSING)");
        assert_eq!(err.code(), 400);
    }

    #[test]
    fn test_category_codes_match_all() {
        let codes: Vec<i32> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![400, 401, 403, 404, 405, 408, 409, 500]);
    }

    #[test]
    fn test_rpc_error_macro() {
        let err = crate::rpc_error!(Category::Conflict, "orders", "order {} already exists", 7);
        assert_eq!(err.code(), 409);
        assert_eq!(err.status(), "Conflict");
        assert_eq!(err.detail(), "order 7 already exists");
    }

    #[test]
    fn test_with_detail_keeps_code_and_status() {
        let err = RpcError::forbidden("auth", "denied", &[]).with_detail("accès refusé");
        assert_eq!(err.detail(), "accès refusé");
        assert_eq!(err.code(), 403);
        assert_eq!(err.status(), "Forbidden");
    }

    // ==================== Encoding Tests ====================

    #[test]
    fn test_display_is_json() {
        let err = RpcError::not_found("users", "no such user", &[]);
        assert_eq!(
            err.to_string(),
            r#"{"id":"users","code":404,"detail":"no such user","status":"Not Found"}"#
        );
    }

    #[test]
    fn test_empty_fields_are_always_encoded() {
        let err = RpcError::default();
        assert_eq!(err.to_json(), r#"{"id":"","code":0,"detail":"","status":""}"#);
    }

    // ==================== Parse Tests ====================

    #[test]
    fn test_parse_round_trip() {
        let err = RpcError::timeout("gateway", "upstream took %dms", &[&3000]);
        assert_eq!(RpcError::parse(&err.to_json()), err);
    }

    #[test]
    fn test_parse_does_not_rederive_status() {
        let parsed = RpcError::parse(r#"{"id":"x","code":404,"detail":"d","status":"custom"}"#);
        assert_eq!(parsed.status(), "custom");
    }

    #[test]
    fn test_parse_missing_fields_default() {
        let parsed = RpcError::parse(r#"{"detail":"only detail"}"#);
        assert_eq!(parsed.id(), "");
        assert_eq!(parsed.code(), 0);
        assert_eq!(parsed.detail(), "only detail");
        assert_eq!(parsed.status(), "");
    }

    #[test]
    fn test_parse_field_names_ignore_case() {
        let parsed = RpcError::parse(r#"{"ID":"svc","Code":404,"Detail":"gone","Status":"Not Found"}"#);
        assert_eq!(parsed.id(), "svc");
        assert_eq!(parsed.code(), 404);
        assert_eq!(parsed.detail(), "gone");
        assert_eq!(parsed.status(), "Not Found");
    }

    #[test]
    fn test_parse_exact_field_name_wins() {
        let parsed = RpcError::parse(r#"{"DETAIL":"upper","detail":"exact","Detail":"title"}"#);
        assert_eq!(parsed.detail(), "exact");
    }

    #[test]
    fn test_parse_null_fields_stay_empty() {
        let parsed = RpcError::parse(r#"{"id":null,"code":404,"detail":"d","status":null}"#);
        assert_eq!(parsed.id(), "");
        assert_eq!(parsed.code(), 404);
        assert_eq!(parsed.detail(), "d");
        assert_eq!(parsed.status(), "");
    }

    #[test]
    fn test_parse_null_code_is_zero() {
        let parsed = RpcError::parse(r#"{"id":"svc","code":null,"detail":"d"}"#);
        assert_eq!(parsed.id(), "svc");
        assert_eq!(parsed.code(), 0);
        assert_eq!(parsed.detail(), "d");
    }

    #[test]
    fn test_parse_plain_text_falls_back() {
        let parsed = RpcError::parse("connection refused");
        assert_eq!(parsed.detail(), "connection refused");
        assert_eq!(parsed.id(), "");
        assert_eq!(parsed.code(), 0);
        assert_eq!(parsed.status(), "");
    }

    #[test]
    fn test_parse_wrong_shape_falls_back() {
        let raw = r#"{"id":"x","code":"not a number"}"#;
        let parsed = RpcError::parse(raw);
        assert_eq!(parsed.detail(), raw);
        assert_eq!(parsed.id(), "");
        assert_eq!(parsed.code(), 0);
    }

    #[test]
    fn test_parse_json_array_falls_back() {
        assert_eq!(RpcError::parse("[1,2]").detail(), "[1,2]");
    }

    #[test]
    fn test_from_str_delegates_to_parse() {
        let parsed: RpcError = "oops".parse().unwrap();
        assert_eq!(parsed.detail(), "oops");
    }

    // ==================== Response Tests ====================

    #[tokio::test]
    async fn test_into_response_uses_code_and_json_body() {
        let err = RpcError::not_found("users", "no such user", &[]);
        let expected = err.to_json();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(body.to_vec()).unwrap(), expected);
    }

    #[test]
    fn test_into_response_invalid_code_is_500() {
        let response = RpcError::new("svc", "weird", 42).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
