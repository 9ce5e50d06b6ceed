//! Platform profiles — static per-platform metadata and default hashtag pools.
//!
//! Unknown platform ids resolve to the twitter profile for all profile data.
//! The caller's platform string is still what appears on generated records.

use serde::Serialize;
use tracing::debug;

/// Static metadata for one social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformProfile {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Advisory only. Rendered content is never truncated or validated against it.
    pub max_length: usize,
    pub best_time: &'static str,
    /// Ordered; always at least three entries.
    pub hashtags: &'static [&'static str],
}

/// Platform used when the requested id is not recognised.
pub const DEFAULT_PLATFORM: &str = "twitter";

/// All recognised profiles, in display order. The first entry is the fallback.
pub const PLATFORM_PROFILES: &[PlatformProfile] = &[
    PlatformProfile {
        id: DEFAULT_PLATFORM,
        display_name: "Twitter/X",
        max_length: 280,
        best_time: "12:00 PM - 3:00 PM EST (weekdays)",
        hashtags: &[
            "#AI",
            "#Innovation",
            "#Tech",
            "#DigitalTransformation",
            "#Leadership",
        ],
    },
    PlatformProfile {
        id: "linkedin",
        display_name: "LinkedIn",
        max_length: 1300,
        best_time: "7:00 AM - 9:00 AM EST (weekdays)",
        hashtags: &[
            "#Innovation",
            "#Leadership",
            "#ProfessionalGrowth",
            "#BusinessStrategy",
            "#FutureOfWork",
        ],
    },
    PlatformProfile {
        id: "instagram",
        display_name: "Instagram",
        max_length: 2200,
        best_time: "11:00 AM - 1:00 PM EST",
        hashtags: &[
            "#Inspiration",
            "#Growth",
            "#Success",
            "#Motivation",
            "#Innovation",
        ],
    },
    PlatformProfile {
        id: "facebook",
        display_name: "Facebook",
        max_length: 5000,
        best_time: "1:00 PM - 4:00 PM EST",
        hashtags: &[
            "#Community",
            "#Growth",
            "#Innovation",
            "#Success",
            "#Learning",
        ],
    },
];

/// Resolves a platform id to its profile, falling back to twitter.
pub fn resolve_profile(platform: &str) -> &'static PlatformProfile {
    PLATFORM_PROFILES
        .iter()
        .find(|p| p.id == platform)
        .unwrap_or_else(|| {
            debug!("Unknown platform '{platform}', using {DEFAULT_PLATFORM} profile");
            &PLATFORM_PROFILES[0]
        })
}
