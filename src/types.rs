//! Core types for PostVelocity

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to generate post copy for a set of target platforms.
///
/// `company_id` and `audience_level` are accepted for forward compatibility
/// with per-company voice profiles; the current templates do not use them.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContentRequest {
    /// Company the content is generated for
    pub company_id: String,
    /// Topic to embed in the generated copy
    pub topic: String,
    /// Target platforms, in the order results should be returned
    pub platforms: Vec<String>,
    /// Intended audience sophistication
    #[serde(default = "default_audience_level")]
    pub audience_level: String,
}

fn default_audience_level() -> String {
    "general".to_string()
}

/// A company managed through the platform
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single generated post for one platform
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GeneratedPost {
    /// Platform the post was generated for (echoed from the request)
    pub platform: String,
    /// Generated post body
    pub content: String,
    /// Suggested hashtags
    pub hashtags: Vec<String>,
    /// Predicted engagement score (0-100)
    pub engagement_prediction: u32,
    /// Suggested posting time
    pub optimal_time: String,
}

/// Aggregate KPIs across all connected platforms
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyticsOverview {
    pub total_posts: u64,
    pub engagement_rate: f64,
    pub total_reach: u64,
    pub conversions: u64,
    pub roi_percentage: u64,
    pub top_platform: String,
    pub growth_rate: f64,
}

/// Connection status of a social network account
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConnectedPlatform {
    pub name: String,
    pub connected: bool,
    pub followers: u64,
}

/// Profile of the signed-in user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub plan: String,
    pub usage: UsageStats,
    pub features: PlanFeatures,
}

/// Current-period usage counters against plan limits
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsageStats {
    pub posts_this_month: u64,
    pub posts_limit: u64,
    pub ai_generations: u64,
    pub ai_limit: u64,
}

/// Feature flags for the user's plan
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlanFeatures {
    pub ai_content: bool,
    pub analytics: bool,
    pub scheduling: bool,
    pub team_collaboration: bool,
}
