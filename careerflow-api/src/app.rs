/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use careerflow_api::{app::{build_router, AppState}, config::Config};
/// use careerflow_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig::new(config.database.url.clone())).await?;
/// let app = build_router(AppState::new(pool, config));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post, put},
    Router,
};
use careerflow_shared::{
    auth::{jwt::JwtKeys, middleware::jwt_auth_middleware},
    resume::{AtsExporter, PgProfileStore},
};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{config::Config, middleware::security::SecurityHeadersLayer, routes};

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Token signing keys
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        let jwt = JwtKeys::new(
            config.jwt.secret.clone(),
            chrono::Duration::minutes(config.jwt.access_token_minutes),
        );

        Self {
            db,
            config: Arc::new(config),
            jwt,
        }
    }

    /// Resume exporter over this state's pool
    pub fn exporter(&self) -> AtsExporter<PgProfileStore> {
        AtsExporter::new(PgProfileStore::new(self.db.clone()))
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /health                                  # public
/// /v1/auth/{register,login,refresh,check-email}   # public
/// /v1/users/me                             # GET, PUT, DELETE
/// /v1/profile/summary                      # GET, PUT, DELETE
/// /v1/profile/social-medias[/:id]
/// /v1/profile/resume                       # raw aggregate
/// /v1/profile/dashboard/stats
/// /v1/skills[/:id], /v1/skills/distribution
/// /v1/experiences[/:id], /v1/experiences/:id/skills/:skill_id
/// /v1/academics[/:id]
/// /v1/certificates[/:id], /v1/certificates/expiring
/// /v1/languages[/:id]
/// /v1/ats/{resume,resume/text,resume/download,resume/json,keywords,score}
/// ```
///
/// # Middleware Stack
///
/// Applied outermost first:
/// 1. Security headers
/// 2. CORS
/// 3. Logging (tower-http TraceLayer)
/// 4. Compression
/// 5. JWT authentication (everything except health and auth routes)
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/refresh", post(routes::auth::refresh))
        .route("/check-email", get(routes::auth::check_email));

    let profile_routes = Router::new()
        .route(
            "/summary",
            get(routes::profile::get_summary)
                .put(routes::profile::save_summary)
                .delete(routes::profile::delete_summary),
        )
        .route(
            "/social-medias",
            get(routes::profile::list_social_medias).post(routes::profile::create_social_media),
        )
        .route(
            "/social-medias/:id",
            put(routes::profile::update_social_media).delete(routes::profile::delete_social_media),
        )
        .route("/resume", get(routes::profile::resume_data))
        .route("/dashboard/stats", get(routes::profile::dashboard_stats));

    let skill_routes = Router::new()
        .route("/", get(routes::skills::list_skills).post(routes::skills::create_skill))
        .route("/distribution", get(routes::skills::skill_distribution))
        .route(
            "/:id",
            get(routes::skills::get_skill)
                .put(routes::skills::update_skill)
                .delete(routes::skills::delete_skill),
        );

    let experience_routes = Router::new()
        .route(
            "/",
            get(routes::experiences::list_experiences).post(routes::experiences::create_experience),
        )
        .route(
            "/:id",
            get(routes::experiences::get_experience)
                .put(routes::experiences::update_experience)
                .delete(routes::experiences::delete_experience),
        )
        .route(
            "/:id/skills/:skill_id",
            post(routes::experiences::link_skill).delete(routes::experiences::unlink_skill),
        );

    let academic_routes = Router::new()
        .route(
            "/",
            get(routes::academics::list_academics).post(routes::academics::create_academic),
        )
        .route(
            "/:id",
            get(routes::academics::get_academic)
                .put(routes::academics::update_academic)
                .delete(routes::academics::delete_academic),
        );

    let certificate_routes = Router::new()
        .route(
            "/",
            get(routes::certificates::list_certificates)
                .post(routes::certificates::create_certificate),
        )
        .route("/expiring", get(routes::certificates::expiring_certificates))
        .route(
            "/:id",
            get(routes::certificates::get_certificate)
                .put(routes::certificates::update_certificate)
                .delete(routes::certificates::delete_certificate),
        );

    let language_routes = Router::new()
        .route(
            "/",
            get(routes::languages::list_languages).post(routes::languages::create_language),
        )
        .route(
            "/:id",
            get(routes::languages::get_language)
                .put(routes::languages::update_language)
                .delete(routes::languages::delete_language),
        );

    let ats_routes = Router::new()
        .route("/resume", get(routes::ats::resume))
        .route("/resume/text", get(routes::ats::resume_text))
        .route("/resume/download", get(routes::ats::download_text))
        .route("/resume/json", get(routes::ats::download_json))
        .route("/keywords", get(routes::ats::keywords))
        .route("/score", get(routes::ats::score));

    let keys = state.jwt.clone();
    let protected_routes = Router::new()
        .route(
            "/users/me",
            get(routes::users::get_me)
                .put(routes::users::update_me)
                .delete(routes::users::delete_me),
        )
        .nest("/profile", profile_routes)
        .nest("/skills", skill_routes)
        .nest("/experiences", experience_routes)
        .nest("/academics", academic_routes)
        .nest("/certificates", certificate_routes)
        .nest("/languages", language_routes)
        .nest("/ats", ats_routes)
        .route_layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(keys.clone(), req, next)
        }));

    let v1_routes = Router::new()
        .nest("/auth", auth_routes)
        .merge(protected_routes);

    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(CompressionLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config))
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}
