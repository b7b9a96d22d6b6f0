//! Browser automation and visual verification for the Inkcheck modal
//! verifier
//!
//! This crate drives a headless Chrome instance over the Chrome DevTools
//! Protocol (CDP) to check the accessibility markup of the "New Novel"
//! modal: a visible label associated with the title input and a visible
//! required-field marker inside it.
//!
//! # Features
//!
//! - **Browser Management**: Launch and control Chrome/Chromium browsers
//! - **Role-based Location**: Find elements by accessible role and name
//! - **Screenshot Capture**: Viewport screenshots persisted to disk
//! - **Visual Verification**: Label association and required-marker checks
//!
//! # Example
//!
//! ```no_run
//! use inkcheck_browser::browser::{BrowserConfig, BrowserSession};
//! use inkcheck_browser::verification::run_modal_check;
//! use inkcheck_core::VerifyConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VerifyConfig::default();
//!     let session =
//!         BrowserSession::launch_with_config(BrowserConfig::from_verify(&config)).await?;
//!
//!     run_modal_check(&session, &config).await?;
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium browser installed
//! - The application under test reachable at the configured URL

pub mod browser;
pub mod error;
pub mod screenshot;
pub mod verification;

// Re-export commonly used types
pub use browser::{BrowserConfig, BrowserSession};
pub use error::{BrowserError, Result};
pub use screenshot::{capture_to_file, capture_viewport};
pub use verification::{run_modal_check, verify_label, verify_required_marker, VisualCheck};
