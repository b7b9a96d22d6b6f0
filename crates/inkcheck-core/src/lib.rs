//! # inkcheck-core
//!
//! Core types for Inkcheck, a one-shot accessibility verifier for the
//! "New Novel" modal of a locally running writing app.
//!
//! The verifier drives a headless Chrome instance, opens the modal,
//! captures a screenshot, and checks that the title input carries a
//! visible associated label and a required-field marker. This crate
//! holds the pieces shared by the browser layer and the CLI:
//!
//! - [`InkcheckError`]: the unified error type for every operation
//! - [`VerifyConfig`]: the scenario configuration with its stock defaults

mod config;
mod error;

pub use config::VerifyConfig;
pub use error::{InkcheckError, Result};
