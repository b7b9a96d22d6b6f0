//! Screenshot capture using Chrome DevTools Protocol

use crate::browser::BrowserSession;
use crate::error::{BrowserError, Result};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use std::path::Path;
use tracing::{debug, info};

/// Capture a PNG of the current viewport
pub async fn capture_viewport(session: &BrowserSession) -> Result<Vec<u8>> {
    let tab = session.tab();

    debug!("Capturing viewport screenshot");

    let screenshot_data = tab
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
        .map_err(|e| BrowserError::Screenshot(format!("CDP capture failed: {}", e)))?;

    Ok(screenshot_data)
}

/// Capture a screenshot and write it to `path`, overwriting any existing
/// file
///
/// The parent directory must already exist; a missing directory surfaces
/// as an I/O error.
///
/// # Returns
/// Size of the written image in bytes
pub async fn capture_to_file(session: &BrowserSession, path: &Path) -> Result<u64> {
    let screenshot_data = capture_viewport(session).await?;

    std::fs::write(path, &screenshot_data)?;

    info!(
        "Screenshot stored: {} ({} bytes)",
        path.display(),
        screenshot_data.len()
    );

    Ok(screenshot_data.len() as u64)
}
