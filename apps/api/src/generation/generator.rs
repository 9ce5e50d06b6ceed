//! Post generation — orchestrates the full pipeline for one request.
//!
//! Flow: resolve_profile → extract_keywords → render_content (primary) →
//!       compose_hashtags → [twitter: render_content (variation) → compose_hashtags].
//!
//! Synchronous and side-effect free: identical input always yields identical output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::hashtags::compose_hashtags;
use crate::generation::keywords::extract_keywords;
use crate::generation::platforms::resolve_profile;
use crate::generation::renderer::{render_content, resolve_pool, Variant};

/// The only platform that receives a second, variation post.
const MULTI_VARIANT_PLATFORM: &str = "twitter";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for post generation. All four fields are open strings:
/// unknown content types, tones and platforms degrade to defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub twin_profile: String,
    pub content_type: String,
    pub tone: String,
    pub platform: String,
}

/// A single ready-to-post result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    /// The caller's platform string, even when profile data fell back.
    pub platform: String,
    pub content: String,
    pub hashtags: Vec<String>,
    pub best_time: String,
}

/// Behavioural switches for the generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationOptions {
    /// Drop the twitter variation post when the tone pool has a single
    /// template and the variation would duplicate the primary post.
    pub skip_duplicate_variation: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates posts with default options. Returns one post, or two for twitter.
///
/// HTTP handlers go through [`generate_with`] to honour configured options.
#[allow(dead_code)]
pub fn generate(
    twin_profile: &str,
    content_type: &str,
    tone: &str,
    platform: &str,
) -> Vec<GeneratedPost> {
    let request = GenerationRequest {
        twin_profile: twin_profile.to_string(),
        content_type: content_type.to_string(),
        tone: tone.to_string(),
        platform: platform.to_string(),
    };
    generate_with(&request, &GenerationOptions::default())
}

/// Runs the generation pipeline.
///
/// Steps:
/// 1. resolve_profile() → PlatformProfile (twitter on unknown id)
/// 2. extract_keywords() → 0–5 keywords
/// 3. render primary content + hashtags → record 1
/// 4. twitter only: render variation content + hashtags → record 2
pub fn generate_with(
    request: &GenerationRequest,
    options: &GenerationOptions,
) -> Vec<GeneratedPost> {
    let profile = resolve_profile(&request.platform);
    let keywords = extract_keywords(&request.twin_profile);

    let build = |variant: Variant| GeneratedPost {
        platform: request.platform.clone(),
        content: render_content(&request.content_type, &request.tone, &keywords, variant),
        hashtags: compose_hashtags(&keywords, profile),
        best_time: profile.best_time.to_string(),
    };

    let pool = resolve_pool(&request.content_type, &request.tone);
    let mut posts = vec![build(Variant::Primary)];

    if request.platform == MULTI_VARIANT_PLATFORM {
        if options.skip_duplicate_variation && pool.templates.len() < 2 {
            debug!(
                "Skipping duplicate variation for '{}.{}'",
                request.content_type, request.tone
            );
        } else {
            posts.push(build(Variant::Variation));
        }
    }

    debug!(
        "Generated {} post(s) for platform '{}' from pool '{}.{}' with {} keyword(s)",
        posts.len(),
        request.platform,
        pool.content_type,
        pool.tone,
        keywords.len()
    );

    posts
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
