//! The admin route guard.
//!
//! Gates the `/admin` subtree behind "user present AND administrator".
//! A pure derived-state decision: while the token is absent or invalid the
//! request rejects with 401 (the client's cue to go to login), and an
//! authenticated non-admin rejects with 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use inkpot_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires administrator capability. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Administrator access required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
