// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{
    common::{
        error::{ApiError, AppError},
        i18n::{I18nStore, DEFAULT_LANG},
    },
    config::AppState,
    middleware::i18n::Locale,
    models::auth::User,
};

pub const TOKEN_COOKIE: &str = "token";

/// O usuário da sessão, colocado nas extensions pelo `auth_guard`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

// O token vem do cookie "token" ou, na falta dele, do header Authorization
fn extract_token(jar: &CookieJar, bearer: Option<&str>) -> Option<String> {
    jar.get(TOKEN_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .or(bearer)
        .map(str::to_string)
}

pub async fn auth_guard(
    State(app_state): State<AppState>,
    locale: Locale,
    jar: CookieJar,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let bearer_token = bearer.as_ref().map(|TypedHeader(auth)| auth.token());
    let token = extract_token(&jar, bearer_token)
        .ok_or_else(|| AppError::InvalidToken.to_api_error(&locale, &app_state.i18n_store))?;

    let user = app_state
        .auth_service
        .validate_token(&token)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                ApiError::new(
                    StatusCode::UNAUTHORIZED,
                    I18nStore::new().translate(DEFAULT_LANG, "unauthenticated"),
                )
            })
    }
}
