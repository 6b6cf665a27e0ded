// Public API - what other modules can use
pub use word_list::{ContentFilter, WordListFilter};

// Internal modules
mod word_list;
