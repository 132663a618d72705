//! Per-platform content templating
//!
//! Renders one post per requested platform by embedding the topic into a
//! platform-specific template. Templates are matched case-sensitively on the
//! platform name; anything unrecognized falls back to a generic announcement.

use crate::types::{ContentRequest, GeneratedPost};

/// Hashtags attached to every generated post.
pub const DEFAULT_HASHTAGS: [&str; 4] = ["#PostVelocity", "#SocialMedia", "#AI", "#Innovation"];

/// Placeholder engagement score until real prediction lands.
pub const ENGAGEMENT_PREDICTION: u32 = 85;

/// Placeholder posting-time suggestion.
pub const OPTIMAL_TIME: &str = "2:00 PM";

/// Generate one post per platform in the request, preserving request order.
/// An empty platform list yields an empty result.
pub fn generate(request: &ContentRequest) -> Vec<GeneratedPost> {
    request
        .platforms
        .iter()
        .map(|platform| GeneratedPost {
            platform: platform.clone(),
            content: render(platform, &request.topic),
            hashtags: DEFAULT_HASHTAGS.iter().map(|t| t.to_string()).collect(),
            engagement_prediction: ENGAGEMENT_PREDICTION,
            optimal_time: OPTIMAL_TIME.to_string(),
        })
        .collect()
}

/// Render the post body for a single platform.
fn render(platform: &str, topic: &str) -> String {
    match platform {
        "instagram" => format!(
            "🚀 Exciting update about {topic}! Our team is working hard to bring you \
             the latest innovations. Stay tuned for more! #Innovation #Growth #Success"
        ),
        "facebook" => format!(
            "We're thrilled to share insights about {topic}. This represents a \
             significant step forward in our mission to provide exceptional value to \
             our community."
        ),
        "linkedin" => format!(
            "Professional insight: {topic} is shaping the future of our industry. \
             Here's what business leaders need to know about this important development."
        ),
        "twitter" => format!(
            "Breaking: {topic} is transforming how we approach business. Key insights \
             for leaders 🧵 #Leadership #Innovation"
        ),
        _ => format!(
            "Check out our latest update about {topic}! We're excited to share this \
             with our community."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(platforms: &[&str]) -> ContentRequest {
        ContentRequest {
            company_id: "demo-company-1".to_string(),
            topic: "quarterly results".to_string(),
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            audience_level: "general".to_string(),
        }
    }

    #[test]
    fn one_post_per_platform_in_order() {
        let req = request(&["instagram", "facebook", "linkedin", "twitter", "myspace"]);
        let posts = generate(&req);

        assert_eq!(posts.len(), 5);
        let platforms: Vec<_> = posts.iter().map(|p| p.platform.as_str()).collect();
        assert_eq!(
            platforms,
            vec!["instagram", "facebook", "linkedin", "twitter", "myspace"]
        );
    }

    #[test]
    fn templates_embed_topic_and_distinguishing_text() {
        let req = request(&["instagram", "facebook", "linkedin", "twitter", "myspace"]);
        let posts = generate(&req);

        for post in &posts {
            assert!(
                post.content.contains("quarterly results"),
                "topic missing from {} post",
                post.platform
            );
        }

        assert!(posts[0].content.starts_with("🚀 Exciting update"));
        assert!(posts[1].content.contains("thrilled to share insights"));
        assert!(posts[2].content.starts_with("Professional insight:"));
        assert!(posts[3].content.starts_with("Breaking:"));
        assert!(posts[3].content.contains('🧵'));
        assert!(posts[4].content.starts_with("Check out our latest update"));
    }

    #[test]
    fn empty_platform_list_yields_empty_result() {
        let posts = generate(&request(&[]));
        assert!(posts.is_empty());
    }

    #[test]
    fn constant_fields_are_identical_across_posts() {
        let req = request(&["instagram", "tiktok"]);
        for post in generate(&req) {
            assert_eq!(post.engagement_prediction, 85);
            assert_eq!(post.optimal_time, "2:00 PM");
            assert_eq!(
                post.hashtags,
                vec!["#PostVelocity", "#SocialMedia", "#AI", "#Innovation"]
            );
        }
    }

    #[test]
    fn platform_match_is_case_sensitive() {
        let posts = generate(&request(&["Instagram"]));
        // Capitalized name is not a known template, so it takes the fallback.
        assert!(posts[0].content.starts_with("Check out our latest update"));
    }
}
