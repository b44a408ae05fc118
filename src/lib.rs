use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod types;

use config::AppConfig;
use database::{create_schema, seed, table_counts, DatabaseManager};
use handlers::{protected, public};
use state::AppState;

/// Open the store, create the schema, seed when configured and log counts.
pub async fn build_state(config: AppConfig) -> anyhow::Result<AppState> {
    let pool = DatabaseManager::connect(&config.database).await?;
    create_schema(&pool).await?;

    if config.database.seed {
        if seed(&pool).await? {
            tracing::info!("Seeded reference and sample data");
        } else {
            tracing::info!("Store already populated, skipping seed");
        }
    }

    let counts = table_counts(&pool).await?;
    tracing::info!(
        users = counts.users,
        departments = counts.departments,
        programs = counts.programs,
        terms = counts.terms,
        admission_records = counts.admission_records,
        enrollment_goals = counts.enrollment_goals,
        "Database ready"
    );

    Ok(AppState::new(pool, config)?)
}

/// The full HTTP surface. Route paths must stay literal (no `nest`) so the
/// matched path lines up with the access table in `middleware::auth`.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        // Public
        .route("/api/health", get(public::health))
        .route("/api/health/info", get(public::info))
        .route("/api/auth/login", post(public::login))
        // Authenticated
        .route("/api/auth/profile", get(protected::profile::profile))
        .merge(catalog_routes())
        .merge(admission_routes());

    if state.config.security.expose_diagnostics {
        router = router.route("/api/health/diagnostics", get(protected::diagnostics::diagnostics));
    }

    router
        .route_layer(from_fn_with_state(state.clone(), middleware::authorize))
        .with_state(state.clone())
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
}

fn catalog_routes() -> Router<AppState> {
    use protected::{departments, enrollment_goals, programs, terms};

    Router::new()
        .route("/api/departments", get(departments::list))
        .route("/api/departments/:id", get(departments::get))
        .route("/api/programs", get(programs::list))
        .route("/api/programs/department/:code", get(programs::by_department))
        .route("/api/programs/type/:type", get(programs::by_type))
        .route("/api/terms", get(terms::list))
        .route("/api/terms/:code", get(terms::get))
        .route("/api/terms/year/:year", get(terms::by_year))
        .route("/api/enrollmentgoals/term/:code", get(enrollment_goals::by_term))
}

fn admission_routes() -> Router<AppState> {
    use protected::admissions;

    Router::new()
        .route("/api/admissionsdata", get(admissions::list).post(admissions::create))
        .route("/api/admissionsdata/term/:term", get(admissions::by_term))
        .route("/api/admissionsdata/academic-year/:year", get(admissions::by_academic_year))
        .route("/api/admissionsdata/filter", get(admissions::filter))
        .route("/api/admissionsdata/summary/:term", get(admissions::summary))
        .route("/api/admissionsdata/:id", put(admissions::update).delete(admissions::delete))
}

// Credentials rule out wildcard methods and headers, so both mirror the request.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
