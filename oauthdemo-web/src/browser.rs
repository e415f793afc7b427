//! Thin wrappers over `window` used by the app shell.

use shared::view::Navigator;

/// Origin of the page the app was served from, e.g. `http://localhost:5173`.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Query string of the current page including the leading `?`, or empty.
pub fn page_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Full-page navigation through `window.location.href`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log_error("no window to navigate");
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            web_sys::console::error_2(&"navigation failed".into(), &err);
        }
    }
}
