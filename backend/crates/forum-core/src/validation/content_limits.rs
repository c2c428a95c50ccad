pub const DEFAULT_MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 5000;

/// Upper bounds for user supplied text, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLimits {
    pub max_title_length: usize,
    pub max_content_length: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}
