//! Hashtag composition — blends keyword hashtags with a platform's default pool.

use crate::generation::platforms::PlatformProfile;

/// Hard cap on hashtags per generated post.
pub const MAX_HASHTAGS: usize = 5;

const CUSTOM_LIMIT: usize = 2;
const PLATFORM_LIMIT: usize = 3;

/// Builds the hashtag list for one post.
///
/// Up to two keyword-derived tags come first, followed by up to three tags
/// from the platform pool, capped at five in total.
pub fn compose_hashtags(keywords: &[String], profile: &PlatformProfile) -> Vec<String> {
    let custom = keywords.iter().take(CUSTOM_LIMIT).map(|keyword| {
        let compact: String = keyword.chars().filter(|c| !c.is_whitespace()).collect();
        format!("#{compact}")
    });

    let platform = profile
        .hashtags
        .iter()
        .take(PLATFORM_LIMIT)
        .map(|tag| tag.to_string());

    custom.chain(platform).take(MAX_HASHTAGS).collect()
}
