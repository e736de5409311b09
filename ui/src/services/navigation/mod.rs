use std::cell::RefCell;

use dioxus::prelude::Navigator;

use crate::{console_info, console_warn};

/// In-app route replacement; the router only fails for external targets it cannot open
pub fn replace_route(navigator: Navigator, target: &str) {
    if let Some(failure) = navigator.replace(target) {
        console_warn!("[Navigation] Could not replace route with {}: {:?}", target, failure);
    }
}

/// Leaves the application for an external URL
pub trait ExternalNavigator {
    fn navigate_external(&self, url: &str);
}

/// Full page navigation through `window.location`
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl ExternalNavigator for BrowserNavigator {
    fn navigate_external(&self, url: &str) {
        console_info!("[Navigation] Leaving app for {}", url);

        #[cfg(target_arch = "wasm32")]
        {
            let result = web_sys::window()
                .ok_or_else(|| "no window".to_string())
                .and_then(|w| w.location().set_href(url).map_err(|e| format!("{:?}", e)));
            if let Err(e) = result {
                crate::console_error!("[Navigation] Failed to navigate to {}: {}", url, e);
            }
        }
    }
}

/// Records navigation targets instead of leaving the page
#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl ExternalNavigator for RecordingNavigator {
    fn navigate_external(&self, url: &str) {
        self.visited.borrow_mut().push(url.to_string());
    }
}
