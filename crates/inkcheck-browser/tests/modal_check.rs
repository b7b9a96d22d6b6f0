//! Integration tests for the modal accessibility checks
//!
//! These tests launch a real headless Chrome against a static HTML
//! fixture, so they are ignored by default. Run them on a machine with
//! Chrome/Chromium installed:
//!
//!   cargo test -p inkcheck-browser -- --ignored

use inkcheck_browser::browser::{BrowserConfig, BrowserSession};
use inkcheck_browser::screenshot::capture_to_file;
use inkcheck_browser::verification::{
    verify_label, verify_required_marker, REQUIRED_MARKER_CLASS, TITLE_INPUT_ID,
};
use std::path::PathBuf;
use std::time::Duration;

/// Fixture mimicking the app's landing page and "New Novel" modal
const MODAL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <button onclick="document.getElementById('modal').style.display='block'">New Novel</button>
  <div id="modal" style="display:none">
    <h2>Start a New Novel</h2>
    <label for="new-book-title">Title <span class="text-red-400">*</span></label>
    <input id="new-book-title" type="text">
  </div>
</body>
</html>"#;

/// Fixture without the trigger button
const EMPTY_PAGE: &str = "<!DOCTYPE html><html><body><p>Nothing here</p></body></html>";

/// Write a fixture page and return its file:// URL
fn write_fixture(dir: &tempfile::TempDir, html: &str) -> String {
    let path = dir.path().join("index.html");
    std::fs::write(&path, html).expect("Failed to write fixture");
    format!("file://{}", path.display())
}

/// Short element timeout so failure paths finish quickly
fn test_config() -> BrowserConfig {
    BrowserConfig {
        element_timeout_secs: 3,
        ..BrowserConfig::default()
    }
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn modal_flow_reports_label_and_marker() {
    let dir = tempfile::tempdir().unwrap();
    let url = write_fixture(&dir, MODAL_PAGE);

    let session = BrowserSession::launch_with_config(test_config())
        .await
        .expect("Failed to launch browser");

    session
        .navigate(&url, Duration::from_millis(10_000))
        .await
        .expect("Navigation failed");

    session
        .click_by_role("button", "New Novel")
        .await
        .expect("Button click failed");
    session
        .wait_for_text("Start a New Novel")
        .await
        .expect("Modal never appeared");

    let screenshot_path: PathBuf = dir.path().join("modal.png");
    let size = capture_to_file(&session, &screenshot_path)
        .await
        .expect("Screenshot failed");
    assert!(size > 0);
    assert!(screenshot_path.exists());

    let label = verify_label(&session, TITLE_INPUT_ID).await.unwrap();
    assert!(label.passed());
    assert!(label.text_content.unwrap().contains("Title"));

    let marker = verify_required_marker(&session, TITLE_INPUT_ID, REQUIRED_MARKER_CLASS)
        .await
        .unwrap();
    assert!(marker.passed());

    session.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn missing_button_is_element_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let url = write_fixture(&dir, EMPTY_PAGE);

    let session = BrowserSession::launch_with_config(test_config())
        .await
        .expect("Failed to launch browser");

    session
        .navigate(&url, Duration::from_millis(10_000))
        .await
        .expect("Navigation failed");

    let err = session
        .click_by_role("button", "New Novel")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("New Novel"));

    // Session still closes cleanly after the failure
    session.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn checks_fail_without_modal_markup() {
    let dir = tempfile::tempdir().unwrap();
    let url = write_fixture(&dir, EMPTY_PAGE);

    let session = BrowserSession::launch_with_config(test_config())
        .await
        .expect("Failed to launch browser");

    session
        .navigate(&url, Duration::from_millis(10_000))
        .await
        .expect("Navigation failed");

    let label = verify_label(&session, TITLE_INPUT_ID).await.unwrap();
    assert!(label.failed());
    assert!(!label.element_exists);

    session.close().await.unwrap();
}
