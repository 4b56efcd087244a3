//! Recipe UI Entry Point
//!
//! One bundle for every page of the site: load configuration, install the
//! console logger, then let each page controller look for its elements.

mod api;
mod checklist;
mod components;
mod config;
mod dom;
mod error;
mod logging;
mod models;
mod pages;
mod progress;
mod share;
mod storage;
mod timer;
mod validation;

use config::AppConfig;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    // Config loading may warn, so the logger goes in first
    logging::init(LevelFilter::Info);
    let config = AppConfig::load();
    log::set_max_level(config.log_filter());

    let Some(doc) = dom::document() else {
        log::error!("[recipe-ui] no document, nothing to attach");
        return;
    };
    if is_loading(&doc.ready_state()) {
        let mut config = Some(config);
        dom_events::listen_document("DOMContentLoaded", move |_| {
            if let Some(config) = config.take() {
                start(&config);
            }
        });
    } else {
        start(&config);
    }
}

/// `document.readyState` before the DOM is parsed
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn start(config: &AppConfig) {
    let Some(doc) = dom::document() else { return };
    let pages = pages::attach_all(&doc, config);
    log::info!("[recipe-ui] {} page controller(s) active", pages.count());
    // Controllers live until navigation
    std::mem::forget(pages);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loading_state_defers_start() {
        assert!(is_loading("loading"));
        assert!(!is_loading("interactive"));
        assert!(!is_loading("complete"));
    }
}
