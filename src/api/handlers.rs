//! API request handlers
//!
//! Every handler is stateless and infallible: responses are built from canned
//! demo data or template expansion, so there is no failure path beyond axum's
//! own body rejection for malformed JSON.

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::content;
use crate::demo;
use crate::types::{AnalyticsOverview, Company, ConnectedPlatform, ContentRequest, GeneratedPost, UserProfile};

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Human-readable status message
    pub message: String,
    /// Current UTC timestamp (RFC 3339)
    pub timestamp: String,
    /// API version
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateContentResponse {
    /// One generated post per requested platform, in request order
    pub generated_content: Vec<GeneratedPost>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectedPlatformsResponse {
    /// Connection status for every supported network
    pub platforms: Vec<ConnectedPlatform>,
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        message: "PostVelocity API is running".into(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// List companies
#[utoipa::path(
    get,
    path = "/api/companies",
    responses(
        (status = 200, description = "List of companies", body = Vec<Company>)
    ),
    tag = "companies"
)]
pub async fn get_companies() -> Json<Vec<Company>> {
    Json(demo::companies())
}

/// Generate social media content for the requested platforms
#[utoipa::path(
    post,
    path = "/api/generate-content",
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Generated posts", body = GenerateContentResponse)
    ),
    tag = "content"
)]
pub async fn generate_content(
    Json(req): Json<ContentRequest>,
) -> Json<GenerateContentResponse> {
    let posts = content::generate(&req);
    tracing::debug!(
        platforms = req.platforms.len(),
        topic = %req.topic,
        "generated content"
    );

    Json(GenerateContentResponse {
        generated_content: posts,
    })
}

/// Analytics overview KPIs
#[utoipa::path(
    get,
    path = "/api/analytics/overview",
    responses(
        (status = 200, description = "Aggregate KPIs", body = AnalyticsOverview)
    ),
    tag = "analytics"
)]
pub async fn get_analytics_overview() -> Json<AnalyticsOverview> {
    Json(demo::analytics_overview())
}

/// Connected social media platforms
#[utoipa::path(
    get,
    path = "/api/platforms/connected",
    responses(
        (status = 200, description = "Platform connection status", body = ConnectedPlatformsResponse)
    ),
    tag = "platforms"
)]
pub async fn get_connected_platforms() -> Json<ConnectedPlatformsResponse> {
    Json(ConnectedPlatformsResponse {
        platforms: demo::connected_platforms(),
    })
}

/// Profile of the signed-in user
#[utoipa::path(
    get,
    path = "/api/user/profile",
    responses(
        (status = 200, description = "User profile", body = UserProfile)
    ),
    tag = "account"
)]
pub async fn get_user_profile() -> Json<UserProfile> {
    Json(demo::user_profile())
}
