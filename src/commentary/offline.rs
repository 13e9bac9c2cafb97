//! Offline generator used when no text-generation service is configured

use super::traits::TextGenerator;

/// Placeholder written in place of every commentary section
pub const OFFLINE_PLACEHOLDER: &str = "（未生成智能分析，请在此处补充。）";

/// Generator that never touches the network
pub struct OfflineGenerator;

impl OfflineGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OfflineGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGenerator for OfflineGenerator {
    fn generate(&self, prompt: &str) -> String {
        log::debug!("Offline commentary for prompt of {} chars", prompt.chars().count());
        OFFLINE_PLACEHOLDER.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_placeholder() {
        let generator = OfflineGenerator::new();
        assert_eq!(generator.generate("任意提示"), OFFLINE_PLACEHOLDER);
    }
}
