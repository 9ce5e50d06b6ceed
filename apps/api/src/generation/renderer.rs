//! Template selection and rendering.
//!
//! Lookup chain: `table[content_type][tone]` → `table["post"][tone]` →
//! `post.professional`. The last step is a constant, so selection cannot fail.

use tracing::debug;

use crate::generation::templates::{
    template_table, KeywordSlots, TemplatePool, DEFAULT_CONTENT_TYPE, DEFAULT_POOL,
    DEFAULT_TONE,
};

/// Which template of the pool to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    /// Second template of the pool. Wraps back to the first for single-entry pools.
    Variation,
}

impl Variant {
    pub fn index(self, pool_len: usize) -> usize {
        match self {
            Variant::Primary => 0,
            Variant::Variation => 1 % pool_len.max(1),
        }
    }
}

/// A template pool together with the table keys it was found under.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPool {
    pub content_type: &'static str,
    pub tone: &'static str,
    pub templates: TemplatePool,
}

/// Resolves the template pool for a (content type, tone) pair, reporting
/// which entry of the table actually served it.
pub fn resolve_pool(content_type: &str, tone: &str) -> ResolvedPool {
    let table = template_table();

    let lookup = |key: &str| {
        table
            .get_key_value(key)
            .and_then(|(&found_type, tones)| {
                tones
                    .get_key_value(tone)
                    .map(|(&found_tone, &templates)| ResolvedPool {
                        content_type: found_type,
                        tone: found_tone,
                        templates,
                    })
            })
    };

    if let Some(resolved) = lookup(content_type) {
        return resolved;
    }

    if let Some(resolved) = lookup(DEFAULT_CONTENT_TYPE) {
        debug!("No '{content_type}.{tone}' templates, using '{DEFAULT_CONTENT_TYPE}.{tone}'");
        return resolved;
    }

    debug!("No templates for '{content_type}.{tone}', using default pool");
    ResolvedPool {
        content_type: DEFAULT_CONTENT_TYPE,
        tone: DEFAULT_TONE,
        templates: DEFAULT_POOL,
    }
}

/// Resolves the template pool for a (content type, tone) pair.
pub fn select_pool(content_type: &str, tone: &str) -> TemplatePool {
    resolve_pool(content_type, tone).templates
}

/// Renders one post body from the selected pool.
pub fn render_content(
    content_type: &str,
    tone: &str,
    keywords: &[String],
    variant: Variant,
) -> String {
    let pool = select_pool(content_type, tone);
    let template = pool[variant.index(pool.len())];
    template(&KeywordSlots::from_keywords(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_variant_index() {
        assert_eq!(Variant::Primary.index(2), 0);
        assert_eq!(Variant::Variation.index(2), 1);
        assert_eq!(Variant::Variation.index(3), 1);
        assert_eq!(Variant::Variation.index(1), 0);
    }

    #[test]
    fn test_exact_match() {
        let text = render_content("poll", "engaging", &[], Variant::Primary);
        assert!(text.starts_with("🗳️ Quick Poll Time!"));
        assert!(text.contains("When it comes to success"));
    }

    #[test]
    fn test_unknown_content_type_falls_back_to_post_with_same_tone() {
        let text = render_content("newsletter", "witty", &[], Variant::Primary);
        assert!(text.starts_with("Plot twist: Success"));
    }

    #[test]
    fn test_missing_tone_under_known_type_falls_back_to_post_tone() {
        let text = render_content("poll", "casual", &[], Variant::Primary);
        assert!(text.starts_with("Just thinking about cool stuff today!"));
    }

    #[test]
    fn test_unknown_tone_falls_back_to_default_pool() {
        let text = render_content("story", "sarcastic", &[], Variant::Primary);
        assert!(text.starts_with("Excited to share insights on innovation."));
        assert_eq!(select_pool("nope", "nope").len(), DEFAULT_POOL.len());
    }

    #[test]
    fn test_resolve_pool_reports_serving_entry() {
        let exact = resolve_pool("story", "casual");
        assert_eq!((exact.content_type, exact.tone), ("story", "casual"));

        let same_tone = resolve_pool("poll", "witty");
        assert_eq!((same_tone.content_type, same_tone.tone), ("post", "witty"));

        let default = resolve_pool("limerick", "grumpy");
        assert_eq!(
            (default.content_type, default.tone),
            (DEFAULT_CONTENT_TYPE, DEFAULT_TONE)
        );
        assert_eq!(default.templates.len(), DEFAULT_POOL.len());
    }

    #[test]
    fn test_poll_engaging_only_exists_under_poll() {
        let text = render_content("post", "engaging", &[], Variant::Primary);
        assert!(text.starts_with("Excited to share insights on innovation."));
    }

    #[test]
    fn test_variation_uses_second_template() {
        let kws = keywords(&["Robotics", "Automation"]);
        let primary = render_content("post", "professional", &kws, Variant::Primary);
        let variation = render_content("post", "professional", &kws, Variant::Variation);
        assert_ne!(primary, variation);
        assert!(variation.starts_with("Reflecting on the importance of Robotics in our field."));
        assert!(variation.contains("The intersection of Automation and innovation"));
    }

    #[test]
    fn test_variation_of_single_template_pool_duplicates_primary() {
        let kws = keywords(&["Robotics"]);
        let primary = render_content("announcement", "casual", &kws, Variant::Primary);
        let variation = render_content("announcement", "casual", &kws, Variant::Variation);
        assert_eq!(primary, variation);
    }

    #[test]
    fn test_empty_keywords_use_template_literals() {
        let text = render_content("post", "professional", &[], Variant::Primary);
        assert!(text.contains("innovation"));
        assert!(text.contains("Strategy drives success"));
        assert!(text.contains("Adaptation is essential"));
    }
}
