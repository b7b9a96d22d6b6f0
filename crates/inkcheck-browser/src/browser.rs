//! Browser lifecycle management using Chrome DevTools Protocol

use crate::error::{BrowserError, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use inkcheck_core::VerifyConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Default timeout for element waits, in seconds
    pub element_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            element_timeout_secs: 30,
        }
    }
}

impl BrowserConfig {
    /// Derive launch settings from the verifier configuration
    pub fn from_verify(config: &VerifyConfig) -> Self {
        Self {
            headless: config.headless,
            window_width: config.window_width,
            window_height: config.window_height,
            element_timeout_secs: config.element_timeout_secs,
        }
    }
}

/// Active browser session with Chrome DevTools Protocol
///
/// Owns the browser process handle; dropping the session (or calling
/// [`BrowserSession::close`]) tears the process down. The handle is
/// released exactly once on every exit path.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a new headless browser with default settings
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| BrowserError::Browser(format!("Failed to launch browser: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::Browser(format!("Failed to launch browser: {}", e)))?;

        // Open the single page the scenario drives
        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::Browser(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(Duration::from_secs(config.element_timeout_secs));

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to a URL with a bounded wait for the load to settle
    ///
    /// # Arguments
    /// * `url` - URL to navigate to
    /// * `timeout` - Upper bound on the navigation wait
    pub async fn navigate(&self, url: &str, timeout: Duration) -> Result<()> {
        debug!("Navigating to {} (timeout: {:?})", url, timeout);

        self.tab
            .navigate_to(url)
            .map_err(|e| BrowserError::Browser(format!("Failed to navigate to {}: {}", url, e)))?;

        // wait_until_navigated honors the tab default timeout, so narrow
        // it for the navigation wait and restore it afterwards.
        self.tab.set_default_timeout(timeout);
        let waited = self
            .tab
            .wait_until_navigated()
            .map(|_| ())
            .map_err(|e| BrowserError::Browser(format!("Navigation timeout for {}: {}", url, e)));
        self.tab
            .set_default_timeout(Duration::from_secs(self.config.element_timeout_secs));
        waited?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Click an element located by its accessible role and exact visible name
    ///
    /// Matches native elements for the role (currently `<button>`) as well
    /// as any element carrying an explicit `role` attribute, with the
    /// element's normalized text equal to `name`.
    pub async fn click_by_role(&self, role: &str, name: &str) -> Result<()> {
        let xpath = role_xpath(role, name);
        debug!("Clicking {} \"{}\" via {}", role, name, xpath);

        let element = self
            .tab
            .wait_for_xpath(&xpath)
            .map_err(|_e| BrowserError::ElementNotFound {
                selector: format!("{} \"{}\"", role, name),
            })?;

        element
            .click()
            .map_err(|e| BrowserError::Browser(format!("Failed to click {} \"{}\": {}", role, name, e)))?;

        debug!("Clicked {} \"{}\"", role, name);
        Ok(())
    }

    /// Wait for an element containing the exact text to appear
    ///
    /// Uses the tab's default timeout.
    pub async fn wait_for_text(&self, text: &str) -> Result<()> {
        let xpath = text_xpath(text);
        debug!("Waiting for text \"{}\" via {}", text, xpath);

        self.tab
            .wait_for_xpath(&xpath)
            .map_err(|_e| BrowserError::ElementNotFound {
                selector: format!("text={}", text),
            })?;

        debug!("Text found: \"{}\"", text);
        Ok(())
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| BrowserError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Check if an element exists in the current DOM
    pub async fn element_exists(&self, selector: &str) -> Result<bool> {
        let script = format!("document.querySelector(\"{}\") !== null", selector);
        let result = self.evaluate_script(&script).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    /// Check that an element exists, takes up space in the layout, and is
    /// not hidden by computed style
    pub async fn element_is_visible(&self, selector: &str) -> Result<bool> {
        let script = format!(
            r#"(() => {{
                const el = document.querySelector("{}");
                if (!el) return false;
                const style = window.getComputedStyle(el);
                if (style.display === 'none' || style.visibility === 'hidden') return false;
                const rect = el.getBoundingClientRect();
                return rect.width > 0 && rect.height > 0;
            }})()"#,
            selector
        );

        let result = self.evaluate_script(&script).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    /// Get text content of an element
    pub async fn get_text_content(&self, selector: &str) -> Result<String> {
        let script = format!("document.querySelector(\"{}\")?.textContent", selector);
        let result = self.evaluate_script(&script).await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser is dropped here and the process cleaned up
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}

/// XPath locating an element by accessible role and exact visible name
fn role_xpath(role: &str, name: &str) -> String {
    let name_literal = xpath_literal(name);
    let native = match role {
        // Only the roles the scenario needs map to native elements here
        "button" => Some("button"),
        "link" => Some("a"),
        _ => None,
    };

    let role_clause = format!(
        "//*[@role={}][normalize-space(.)={}]",
        xpath_literal(role),
        name_literal
    );

    match native {
        Some(tag) => format!(
            "//{}[normalize-space(.)={}] | {}",
            tag, name_literal, role_clause
        ),
        None => role_clause,
    }
}

/// XPath locating an element whose own text contains `text`
fn text_xpath(text: &str) -> String {
    format!(
        "//*[text()[contains(normalize-space(.), {})]]",
        xpath_literal(text)
    )
}

/// Quote a string for embedding in an XPath expression
///
/// XPath 1.0 has no escape syntax; strings containing both quote kinds
/// need concat().
fn xpath_literal(s: &str) -> String {
    if !s.contains('\'') {
        format!("'{}'", s)
    } else if !s.contains('"') {
        format!("\"{}\"", s)
    } else {
        let parts: Vec<String> = s
            .split('\'')
            .map(|part| format!("'{}'", part))
            .collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrowserConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
        assert_eq!(config.element_timeout_secs, 30);
    }

    #[test]
    fn test_config_from_verify() {
        let mut verify = VerifyConfig::default();
        verify.headless = false;
        verify.window_width = 1024;
        verify.window_height = 768;

        let config = BrowserConfig::from_verify(&verify);
        assert!(!config.headless);
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 768);
        assert_eq!(config.element_timeout_secs, 30);
    }

    #[test]
    fn test_role_xpath_button() {
        let xpath = role_xpath("button", "New Novel");
        assert_eq!(
            xpath,
            "//button[normalize-space(.)='New Novel'] | \
             //*[@role='button'][normalize-space(.)='New Novel']"
        );
    }

    #[test]
    fn test_role_xpath_non_native_role() {
        let xpath = role_xpath("tab", "Settings");
        assert_eq!(xpath, "//*[@role='tab'][normalize-space(.)='Settings']");
    }

    #[test]
    fn test_text_xpath() {
        let xpath = text_xpath("Start a New Novel");
        assert_eq!(
            xpath,
            "//*[text()[contains(normalize-space(.), 'Start a New Novel')]]"
        );
    }

    #[test]
    fn test_xpath_literal_plain() {
        assert_eq!(xpath_literal("New Novel"), "'New Novel'");
    }

    #[test]
    fn test_xpath_literal_apostrophe() {
        assert_eq!(xpath_literal("Reader's Digest"), "\"Reader's Digest\"");
    }

    #[test]
    fn test_xpath_literal_both_quotes() {
        assert_eq!(
            xpath_literal("say \"don't\""),
            "concat('say \"don', \"'\", 't\"')"
        );
    }
}
