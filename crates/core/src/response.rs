//! Interpreter responses

/// Severity/category of a response line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Info,
    Success,
    Error,
}

/// A single reply to a submitted command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub category: Category,
    pub text: String,
}

impl Response {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Category::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Category::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Category::Error, text)
    }
}
