//! Text generator trait definition

/// Returned when the service answers with a non-success status
pub const FALLBACK_UNAVAILABLE: &str = "抱歉，无法完成分析。请稍后再试。";

/// Returned for any other failure (transport, undecodable reply)
pub const FALLBACK_ERROR: &str = "抱歉，处理您的请求时出错。请稍后再试。";

/// Text generator trait - allows swapping between the remote service and an
/// offline stand-in
pub trait TextGenerator {
    /// Answer a prompt; failures are replaced by a fallback string
    fn generate(&self, prompt: &str) -> String;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, prompt: &str) -> String {
        (**self).generate(prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, prompt: &str) -> String {
        (**self).generate(prompt)
    }
}
