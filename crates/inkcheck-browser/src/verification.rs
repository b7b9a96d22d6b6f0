//! Accessibility verification for the "New Novel" modal

use crate::browser::BrowserSession;
use crate::error::Result;
use crate::screenshot::capture_to_file;
use inkcheck_core::VerifyConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Id of the title input whose label association is checked
pub const TITLE_INPUT_ID: &str = "new-book-title";

/// Class the UI uses for the red required-field marker
pub const REQUIRED_MARKER_CLASS: &str = "text-red-400";

/// Accessible name of the button that opens the modal
const NEW_NOVEL_BUTTON: &str = "New Novel";

/// Heading text that signals the modal has opened
const MODAL_TITLE_TEXT: &str = "Start a New Novel";

/// Result of a visual element check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualCheck {
    /// Whether the element exists in the DOM
    pub element_exists: bool,
    /// Whether the element is rendered visibly
    pub visible: bool,
    /// Text content of the element (if found)
    pub text_content: Option<String>,
}

impl VisualCheck {
    /// Create a check result for a non-existent element
    pub fn not_found() -> Self {
        Self {
            element_exists: false,
            visible: false,
            text_content: None,
        }
    }

    /// Check if verification passed (element exists and is visible)
    pub fn passed(&self) -> bool {
        self.element_exists && self.visible
    }

    /// Check if verification failed
    pub fn failed(&self) -> bool {
        !self.passed()
    }
}

/// Verify the label associated with an input is present and visible
///
/// Queries `label[for='<input_id>']` against the current DOM.
pub async fn verify_label(session: &BrowserSession, input_id: &str) -> Result<VisualCheck> {
    let selector = format!("label[for='{}']", input_id);
    info!("Verifying label: {}", selector);

    check_selector(session, &selector).await
}

/// Verify the required-field marker inside an input's label is visible
///
/// Queries for `marker_class` within the subtree of the label associated
/// with `input_id`.
pub async fn verify_required_marker(
    session: &BrowserSession,
    input_id: &str,
    marker_class: &str,
) -> Result<VisualCheck> {
    let selector = format!("label[for='{}'] .{}", input_id, marker_class);
    info!("Verifying required marker: {}", selector);

    check_selector(session, &selector).await
}

/// Run a presence + visibility check for a selector
async fn check_selector(session: &BrowserSession, selector: &str) -> Result<VisualCheck> {
    let exists = session.element_exists(selector).await?;

    if !exists {
        debug!("Element not found: {}", selector);
        return Ok(VisualCheck::not_found());
    }

    let visible = session.element_is_visible(selector).await?;
    let text_content = session.get_text_content(selector).await.ok();

    Ok(VisualCheck {
        element_exists: true,
        visible,
        text_content,
    })
}

/// Drive the full modal accessibility check
///
/// Navigates to the app, opens the "New Novel" modal, captures the
/// verification screenshot, and reports on the label and required-marker
/// markup. The confirmation lines on stdout are the scenario's contract;
/// any failure along the way propagates to the caller unchanged.
pub async fn run_modal_check(session: &BrowserSession, config: &VerifyConfig) -> Result<()> {
    session
        .navigate(
            &config.app_url,
            Duration::from_millis(config.navigation_timeout_ms),
        )
        .await?;

    session.click_by_role("button", NEW_NOVEL_BUTTON).await?;
    session.wait_for_text(MODAL_TITLE_TEXT).await?;

    capture_to_file(session, Path::new(&config.screenshot_path)).await?;
    println!("Screenshot captured: {}", config.screenshot_path);

    let label = verify_label(session, TITLE_INPUT_ID).await?;
    if label.passed() {
        println!("Label for {} found.", TITLE_INPUT_ID);
    }

    let marker = verify_required_marker(session, TITLE_INPUT_ID, REQUIRED_MARKER_CLASS).await?;
    if marker.passed() {
        println!("Required star visible.");
    }

    Ok(())
}
