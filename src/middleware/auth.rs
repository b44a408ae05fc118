use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, MatchedPath, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, Method},
    middleware::Next,
    response::Response,
};

use crate::auth::{Claims, Role};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller, taken from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Option<i64>,
    pub email: String,
    /// `None` when the token carries a role this service does not know
    pub role: Option<Role>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id(),
            role: Role::parse(&claims.role),
            email: claims.email,
        }
    }
}

/// What a route demands of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Roles(&'static [Role]),
}

impl Access {
    fn admits(&self, role: Option<Role>) -> bool {
        match self {
            Access::Public | Access::Authenticated => true,
            Access::Roles(allowed) => role.is_some_and(|r| allowed.contains(&r)),
        }
    }
}

const WRITERS: &[Role] = &[Role::Admin, Role::Staff];
const ADMINS: &[Role] = &[Role::Admin];

/// Per-route requirements, keyed by method and matched route path.
/// Routes not listed here require an authenticated caller.
static ROUTE_ACCESS: &[(Method, &str, Access)] = &[
    (Method::GET, "/api/health", Access::Public),
    (Method::GET, "/api/health/info", Access::Public),
    (Method::GET, "/api/health/diagnostics", Access::Roles(ADMINS)),
    (Method::POST, "/api/auth/login", Access::Public),
    (Method::POST, "/api/admissionsdata", Access::Roles(WRITERS)),
    (Method::PUT, "/api/admissionsdata/:id", Access::Roles(WRITERS)),
    (Method::DELETE, "/api/admissionsdata/:id", Access::Roles(ADMINS)),
];

pub fn required_access(method: &Method, path: &str) -> Access {
    ROUTE_ACCESS
        .iter()
        .find(|(m, p, _)| m == method && *p == path)
        .map(|(_, _, access)| *access)
        .unwrap_or(Access::Authenticated)
}

/// Route guard. Looks up the matched route in the requirement table,
/// verifies the bearer token when one is required and checks the role.
/// The caller is stored in request extensions for `AuthUser` extraction.
pub async fn authorize(State(state): State<AppState>, mut request: Request, next: Next) -> Result<Response, ApiError> {
    let access = match request.extensions().get::<MatchedPath>() {
        Some(path) => required_access(request.method(), path.as_str()),
        None => Access::Authenticated,
    };
    if access == Access::Public {
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(request.headers()).map_err(ApiError::unauthorized)?;
    let user = AuthUser::from(state.tokens.verify(token)?);

    if !access.admits(user.role) {
        tracing::info!(
            user_id = ?user.user_id,
            email = %user.email,
            role = ?user.role,
            method = %request.method(),
            path = %request.uri().path(),
            "Role check failed"
        );
        return Err(ApiError::forbidden("Insufficient role for this operation"));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    match auth_header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err("Empty bearer token"),
        None => Err("Authorization header must use Bearer token format"),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}
