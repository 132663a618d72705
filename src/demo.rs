//! Canned demo data served by the fixed-data endpoints
//!
//! Every constructor is a pure function of no input so repeated calls return
//! identical values. These stand in for the company registry, analytics
//! pipeline, and account store that a production deployment would query.

use crate::types::{
    AnalyticsOverview, Company, ConnectedPlatform, PlanFeatures, UsageStats, UserProfile,
};

/// The demo company roster.
pub fn companies() -> Vec<Company> {
    vec![
        Company {
            id: "demo-company-1".to_string(),
            name: "Tech Innovators Inc".to_string(),
            industry: "Technology".to_string(),
            description: Some("Leading technology company".to_string()),
        },
        Company {
            id: "demo-company-2".to_string(),
            name: "Green Energy Solutions".to_string(),
            industry: "Energy".to_string(),
            description: Some("Sustainable energy provider".to_string()),
        },
        Company {
            id: "demo-company-3".to_string(),
            name: "Creative Marketing Agency".to_string(),
            industry: "Marketing".to_string(),
            description: Some("Full-service marketing agency".to_string()),
        },
    ]
}

/// Headline KPI figures for the analytics dashboard.
pub fn analytics_overview() -> AnalyticsOverview {
    AnalyticsOverview {
        total_posts: 1247,
        engagement_rate: 4.2,
        total_reach: 125_000,
        conversions: 234,
        roi_percentage: 340,
        top_platform: "Instagram".to_string(),
        growth_rate: 15.3,
    }
}

/// Connection status for each supported network.
pub fn connected_platforms() -> Vec<ConnectedPlatform> {
    let status = [
        ("Instagram", true, 12_500),
        ("Facebook", true, 8_900),
        ("LinkedIn", false, 0),
        ("Twitter", true, 5_600),
        ("TikTok", false, 0),
        ("YouTube", true, 15_200),
    ];

    status
        .iter()
        .map(|&(name, connected, followers)| ConnectedPlatform {
            name: name.to_string(),
            connected,
            followers,
        })
        .collect()
}

/// The demo user's account profile.
pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "Demo User".to_string(),
        email: "demo@postvelocity.com".to_string(),
        plan: "Professional".to_string(),
        usage: UsageStats {
            posts_this_month: 45,
            posts_limit: 100,
            ai_generations: 23,
            ai_limit: 50,
        },
        features: PlanFeatures {
            ai_content: true,
            analytics: true,
            scheduling: true,
            team_collaboration: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_companies_with_stable_ids() {
        let companies = companies();
        assert_eq!(companies.len(), 3);
        let ids: Vec<_> = companies.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["demo-company-1", "demo-company-2", "demo-company-3"]);
    }

    #[test]
    fn six_platforms_with_disconnected_zeroed() {
        let platforms = connected_platforms();
        assert_eq!(platforms.len(), 6);
        for platform in &platforms {
            if !platform.connected {
                assert_eq!(platform.followers, 0, "{} disconnected", platform.name);
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = serde_json::to_string(&analytics_overview()).unwrap();
        let b = serde_json::to_string(&analytics_overview()).unwrap();
        assert_eq!(a, b);

        let a = serde_json::to_string(&user_profile()).unwrap();
        let b = serde_json::to_string(&user_profile()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn profile_usage_within_limits() {
        let profile = user_profile();
        assert!(profile.usage.posts_this_month <= profile.usage.posts_limit);
        assert!(profile.usage.ai_generations <= profile.usage.ai_limit);
    }
}
