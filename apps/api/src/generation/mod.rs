// Post generation engine.
// Implements: keyword extraction, template selection/rendering, platform profiles,
// hashtag composition, orchestration. Pure and synchronous: no I/O below handlers.

pub mod generator;
pub mod handlers;
pub mod hashtags;
pub mod keywords;
pub mod platforms;
pub mod renderer;
pub mod templates;
