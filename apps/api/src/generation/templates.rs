//! Template table — content type → tone → ordered pool of templates.
//!
//! Each template is a plain function over three positional keyword slots.
//! Per-slot fallback literals live next to the text that uses them, so an
//! absent keyword always renders as a tone-appropriate word, never as "".
//!
//! The table is built once on first use and never mutated afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Up to three extracted keywords, addressed positionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSlots<'a>([Option<&'a str>; 3]);

impl<'a> KeywordSlots<'a> {
    pub fn from_keywords(keywords: &'a [String]) -> Self {
        let mut slots = [None; 3];
        for (slot, keyword) in slots.iter_mut().zip(keywords) {
            *slot = Some(keyword.as_str());
        }
        KeywordSlots(slots)
    }

    /// Keyword at `index`, or the template's own fallback literal.
    pub fn or(&self, index: usize, fallback: &'a str) -> &'a str {
        self.0.get(index).copied().flatten().unwrap_or(fallback)
    }
}

/// A single template: renders the final post text from keyword slots.
pub type Template = fn(&KeywordSlots) -> String;

pub type TemplatePool = &'static [Template];

type TemplateTable = HashMap<&'static str, HashMap<&'static str, TemplatePool>>;

/// Content type of the terminal fallback pool.
pub const DEFAULT_CONTENT_TYPE: &str = "post";

/// Tone of the terminal fallback pool. `post.professional` must always exist:
/// every lookup chain ends here.
pub const DEFAULT_TONE: &str = "professional";

const POST_PROFESSIONAL: &[Template] = &[
    |k| {
        format!(
            "Excited to share insights on {}. In today's rapidly evolving landscape, it's crucial to stay ahead of the curve.\n\nKey takeaways:\n• {} drives success\n• {} is essential\n• Continuous learning is paramount",
            k.or(0, "innovation"),
            k.or(1, "Strategy"),
            k.or(2, "Adaptation"),
        )
    },
    |k| {
        format!(
            "Reflecting on the importance of {} in our field. The intersection of {} and {} continues to reshape how we approach challenges.",
            k.or(0, "growth"),
            k.or(1, "technology"),
            k.or(2, "innovation"),
        )
    },
];

const POST_CASUAL: &[Template] = &[
    |k| {
        format!(
            "Just thinking about {} today! 🚀\n\nIt's amazing how {} are evolving. Can't wait to see what comes next!",
            k.or(0, "cool stuff"),
            k.or(1, "things"),
        )
    },
    |k| {
        format!(
            "Hot take: {} is moving faster than ever. Who else is excited about where {} is heading? 🔥",
            k.or(0, "Innovation"),
            k.or(1, "the future"),
        )
    },
];

const POST_WITTY: &[Template] = &[
    |k| {
        format!(
            "Plot twist: {} isn't just about working harder, it's about working smarter. And maybe drinking more coffee ☕\n\nThoughts on {}?",
            k.or(0, "Success"),
            k.or(1, "productivity"),
        )
    },
    |k| {
        format!(
            "Remember when {} used to be simple? Yeah, me neither. 😄\n\nBut seriously, {} is what keeps us growing.",
            k.or(0, "things"),
            k.or(1, "evolution"),
        )
    },
];

const POST_INSPIRING: &[Template] = &[
    |k| {
        format!(
            "Every challenge is an opportunity in disguise. 🌟\n\nWhen {} arise, remember: you're stronger than you think. Keep pushing forward.\n\n{} starts with believing in yourself.",
            k.or(0, "obstacles"),
            k.or(1, "Success"),
        )
    },
    |k| {
        format!(
            "Your journey with {} is unique. Don't compare your chapter 1 to someone else's chapter 20.\n\nKeep going. You've got this! 💪",
            k.or(0, "growth"),
        )
    },
];

const POST_EDUCATIONAL: &[Template] = &[
    |k| {
        format!(
            "📚 Let's talk about {}:\n\n1️⃣ Understanding {} is crucial\n2️⃣ Application matters more than theory\n3️⃣ Continuous improvement drives results\n\nWhat's your experience with this?",
            k.or(0, "key concepts"),
            k.or(1, "fundamentals"),
        )
    },
    |k| {
        format!(
            "Quick lesson on {}:\n\n✓ Start with {}\n✓ Build systematically\n✓ Learn from failures\n\nThe journey is just as important as the destination.",
            k.or(0, "best practices"),
            k.or(1, "basics"),
        )
    },
];

const POST_FRIENDLY: &[Template] = &[
    |k| {
        format!(
            "Hey everyone! 👋\n\nJust wanted to share some thoughts on {}. What's everyone working on this week?\n\nAlways love hearing about your {}!",
            k.or(0, "interesting topics"),
            k.or(1, "projects"),
        )
    },
    |k| {
        format!(
            "Happy to connect with all of you! Been exploring {} lately and would love to hear your perspectives.\n\nHow's everyone doing? 😊",
            k.or(0, "new ideas"),
        )
    },
];

const ANNOUNCEMENT_PROFESSIONAL: &[Template] = &[|k| {
    format!(
        "📢 Important Update\n\nExcited to announce {} in {}. This milestone represents a significant step forward.\n\nStay tuned for more details!",
        k.or(0, "new developments"),
        k.or(1, "our journey"),
    )
}];

const ANNOUNCEMENT_CASUAL: &[Template] = &[|k| {
    format!(
        "Big news, everyone! 🎉\n\nWe're launching something special around {}. Can't wait to share more!\n\nGet ready for {}!",
        k.or(0, "innovation"),
        k.or(1, "awesome things"),
    )
}];

const THOUGHT_LEADERSHIP_PROFESSIONAL: &[Template] = &[|k| {
    format!(
        "The future of {} is being shaped today. Here's what leaders need to consider:\n\n🔹 {} velocity is accelerating\n🔹 {} separates winners from losers\n🔹 Values-driven approaches create lasting impact\n\nWhat trends are you watching?",
        k.or(0, "our industry"),
        k.or(1, "Innovation"),
        k.or(2, "Adaptability"),
    )
}];

const THOUGHT_LEADERSHIP_INSPIRING: &[Template] = &[|k| {
    format!(
        "True leadership isn't about being in charge—it's about taking care of those in your charge.\n\nIn the realm of {}, the best leaders:\n✨ Empower others\n✨ Embrace {}\n✨ Lead with authenticity",
        k.or(0, "innovation"),
        k.or(1, "change"),
    )
}];

const ENGAGEMENT_FRIENDLY: &[Template] = &[|k| {
    format!(
        "Quick question for the community! 🤔\n\nWhat's your take on {}? I'm curious to hear different perspectives on {}.\n\nDrop your thoughts below! 👇",
        k.or(0, "current trends"),
        k.or(1, "this topic"),
    )
}];

const ENGAGEMENT_CASUAL: &[Template] = &[|k| {
    format!(
        "Alright, let's settle this debate: {} or {}?\n\nDrop a comment with your choice and why! 💭",
        k.or(0, "Option A"),
        k.or(1, "Option B"),
    )
}];

const STORY_INSPIRING: &[Template] = &[|k| {
    format!(
        "A year ago, I was navigating challenges with {}. Today, looking back, every obstacle was a stepping stone.\n\nThe lesson? {} pays off. Keep going, even when it's tough. Your breakthrough is closer than you think. 🌟",
        k.or(0, "my journey"),
        k.or(1, "Persistence"),
    )
}];

const STORY_CASUAL: &[Template] = &[|k| {
    format!(
        "Storytime! 📖\n\nSo there I was, dealing with {}... and you won't believe what happened next.\n\nLet's just say {} were learned! 😅",
        k.or(0, "an interesting situation"),
        k.or(1, "lessons"),
    )
}];

const POLL_ENGAGING: &[Template] = &[|k| {
    format!(
        "🗳️ Quick Poll Time!\n\nWhen it comes to {}, which matters most?\n\nA) {}\nB) Execution\nC) Timing\nD) All of the above\n\nVote and share your reasoning! 👇",
        k.or(0, "success"),
        k.or(1, "Strategy"),
    )
}];

/// The terminal fallback pool, referenced directly so it can never go missing
/// from the lookup chain.
pub const DEFAULT_POOL: TemplatePool = POST_PROFESSIONAL;

/// Returns the process-wide template table.
pub fn template_table() -> &'static TemplateTable {
    static TABLE: OnceLock<TemplateTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let entries: [(&str, &[(&str, TemplatePool)]); 6] = [
            (
                DEFAULT_CONTENT_TYPE,
                &[
                    (DEFAULT_TONE, DEFAULT_POOL),
                    ("casual", POST_CASUAL),
                    ("witty", POST_WITTY),
                    ("inspiring", POST_INSPIRING),
                    ("educational", POST_EDUCATIONAL),
                    ("friendly", POST_FRIENDLY),
                ],
            ),
            (
                "announcement",
                &[
                    ("professional", ANNOUNCEMENT_PROFESSIONAL),
                    ("casual", ANNOUNCEMENT_CASUAL),
                ],
            ),
            (
                "thought-leadership",
                &[
                    ("professional", THOUGHT_LEADERSHIP_PROFESSIONAL),
                    ("inspiring", THOUGHT_LEADERSHIP_INSPIRING),
                ],
            ),
            (
                "engagement",
                &[("friendly", ENGAGEMENT_FRIENDLY), ("casual", ENGAGEMENT_CASUAL)],
            ),
            (
                "story",
                &[("inspiring", STORY_INSPIRING), ("casual", STORY_CASUAL)],
            ),
            ("poll", &[("engaging", POLL_ENGAGING)]),
        ];

        entries
            .into_iter()
            .map(|(content_type, tones)| (content_type, tones.iter().copied().collect()))
            .collect()
    })
}
