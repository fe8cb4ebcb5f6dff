use axum::Json;
use contracts::system::auth::PrincipalInfo;

use crate::system::auth::extractor::CurrentUser;

/// GET /api/system/auth/me
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<PrincipalInfo> {
    Json(PrincipalInfo::from(&claims))
}
