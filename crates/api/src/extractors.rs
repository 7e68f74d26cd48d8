//! Request-scoped context extractors.

use axum::{extract::FromRequestParts, http::request::Parts};

use scholar_shared::AppError;

use crate::error::ApiError;

/// Header carrying the identity of the staff member making the request.
pub const STAFF_ID_HEADER: &str = "x-staff-id";

/// Identity of the staff member recording a ledger or academic entry.
///
/// Taken from the `x-staff-id` header of each request; nothing is kept
/// between requests.
///
/// ```ignore
/// async fn handler(staff: StaffContext) -> impl IntoResponse {
///     let recorder = staff.staff_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffContext(String);

impl StaffContext {
    /// Returns the staff identifier.
    #[must_use]
    pub fn staff_id(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for StaffContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(STAFF_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| Self(id.to_string()))
            .ok_or_else(|| {
                AppError::Validation(format!("{STAFF_ID_HEADER} header is required")).into()
            })
    }
}
