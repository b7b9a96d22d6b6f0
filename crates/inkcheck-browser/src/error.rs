//! Browser automation error types - re-exports the unified InkcheckError
//!
//! All browser errors use the unified InkcheckError type:
//! - Browser(String) - launch, navigation, and CDP failures
//! - ElementNotFound { selector } - lookups that came up empty
//! - Screenshot(String) - capture failures
//! - Io(std::io::Error) - screenshot persistence
//!
//! Error messages should be descriptive and include context about the
//! operation that failed (URL, selector, path).

pub use inkcheck_core::{InkcheckError, Result};

// Type alias so browser code can name its own error category
pub type BrowserError = InkcheckError;
