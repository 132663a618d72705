//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    self, ConnectedPlatformsResponse, GenerateContentResponse, HealthResponse,
};
use crate::config::Config;
use crate::types::{
    AnalyticsOverview, Company, ConnectedPlatform, ContentRequest, GeneratedPost, PlanFeatures,
    UsageStats, UserProfile,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PostVelocity API",
        version = "1.0.0",
        description = "AI-Powered Social Media Management Platform"
    ),
    tags(
        (name = "health", description = "Health checks"),
        (name = "companies", description = "Company listings"),
        (name = "content", description = "Content generation"),
        (name = "analytics", description = "Analytics overview"),
        (name = "platforms", description = "Platform connections"),
        (name = "account", description = "User account")
    ),
    paths(
        handlers::health,
        handlers::get_companies,
        handlers::generate_content,
        handlers::get_analytics_overview,
        handlers::get_connected_platforms,
        handlers::get_user_profile,
    ),
    components(schemas(
        HealthResponse,
        Company,
        ContentRequest,
        GeneratedPost,
        GenerateContentResponse,
        AnalyticsOverview,
        ConnectedPlatform,
        ConnectedPlatformsResponse,
        UserProfile,
        UsageStats,
        PlanFeatures,
    ))
)]
pub struct ApiDoc;

/// Create the API router
///
/// The frontend build directory is mounted when present; a missing build is
/// tolerated so the API can run standalone.
pub fn create_router(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let mut router = Router::new()
        // Health
        .route("/api/health", get(handlers::health))

        // Companies
        .route("/api/companies", get(handlers::get_companies))

        // Content generation
        .route("/api/generate-content", post(handlers::generate_content))

        // Analytics
        .route("/api/analytics/overview", get(handlers::get_analytics_overview))

        // Platform connections
        .route("/api/platforms/connected", get(handlers::get_connected_platforms))

        // Account
        .route("/api/user/profile", get(handlers::get_user_profile))

        // OpenAPI spec and Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi));

    // Static files (frontend build), SPA fallback to index.html
    if config.static_dir.exists() {
        router = router
            .nest_service("/static", ServeDir::new(config.assets_path()))
            .fallback_service(
                ServeDir::new(&config.static_dir)
                    .not_found_service(ServeFile::new(config.index_path())),
            );
    } else {
        tracing::warn!(
            "Frontend build not found at {}, skipping static mount",
            config.static_dir.display()
        );
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}
