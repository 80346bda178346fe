use crate::dictionary::signature;

pub trait Preprocessor {
    // Default query normalization: lower-case everything, filter nothing
    fn process(&self, text: &str) -> String {
        text.to_lowercase()
    }

    /// Signature a normalized query is looked up under
    fn signature(&self, text: &str) -> String {
        signature(&self.process(text))
    }
}

pub struct LowercasePreprocessor;
impl Preprocessor for LowercasePreprocessor {}
