//! Natural-language commentary for the report
//!
//! Commentary comes from an external text-generation service behind the
//! `TextGenerator` trait. A generator never fails: when the service cannot
//! answer, a fixed fallback sentence is returned and the report carries on.

mod dashscope;
mod offline;
mod prompts;
mod traits;

pub use dashscope::{DashScopeClient, GenerationError, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use offline::{OfflineGenerator, OFFLINE_PLACEHOLDER};
pub use prompts::{category_prompt, strip_markdown, LEARNING_OUTCOMES_PROMPT, SUGGESTIONS_PROMPT};
pub use traits::{TextGenerator, FALLBACK_ERROR, FALLBACK_UNAVAILABLE};
