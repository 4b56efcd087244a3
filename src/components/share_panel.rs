//! Share Modal
//!
//! `#shareBtn` opens `#shareModal`; `.share-btn[data-platform]` buttons open a
//! share popup, `#copyLink` copies `#shareUrl` to the clipboard.

use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlMetaElement};

use crate::dom;
use crate::error::{js_error, UiError};
use crate::share::{share_url, Platform, SharedPage};

pub struct SharePanel {
    modal: HtmlElement,
    url_field: Option<HtmlInputElement>,
    copy_button: Option<HtmlElement>,
    copied_ms: i32,
}

impl SharePanel {
    pub fn attach(doc: &Document, copied_ms: u32) -> Option<Rc<Self>> {
        let opener = doc.get_element_by_id("shareBtn")?;
        let panel = Rc::new(Self {
            modal: dom::by_id(doc, "shareModal")?,
            url_field: dom::by_id(doc, "shareUrl"),
            copy_button: dom::by_id(doc, "copyLink"),
            copied_ms: copied_ms as i32,
        });

        let p = Rc::clone(&panel);
        dom_events::listen(&opener, "click", move |_| p.open());

        if let Some(close) = doc.get_element_by_id("closeModal") {
            let p = Rc::clone(&panel);
            dom_events::listen(&close, "click", move |_| p.close());
        }

        let p = Rc::clone(&panel);
        dom_events::listen(&panel.modal, "click", move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
            if target.as_ref() == Some(&*p.modal) {
                p.close();
            }
        });

        for button in dom::query_all::<Element>(doc, ".share-btn") {
            let Some(platform) = button.get_attribute("data-platform").as_deref().and_then(Platform::from_attr)
            else {
                continue;
            };
            dom_events::listen(&button, "click", move |_| open_share_window(platform));
        }

        if let Some(copy) = &panel.copy_button {
            let p = Rc::clone(&panel);
            dom_events::listen(copy, "click", move |_| Rc::clone(&p).copy_link());
        }
        Some(panel)
    }

    fn open(&self) {
        dom::set_class(&self.modal, "show", true);
        set_body_scroll(false);
    }

    fn close(&self) {
        dom::set_class(&self.modal, "show", false);
        set_body_scroll(true);
    }

    fn copy_link(self: Rc<Self>) {
        let Some(field) = self.url_field.clone() else { return };
        spawn_local(async move {
            let copied = match write_clipboard(&field.value()).await {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("[share] clipboard unavailable, selecting text: {}", e);
                    field.select();
                    exec_copy()
                }
            };
            if copied {
                self.flash_copied();
            }
        });
    }

    fn flash_copied(&self) {
        let Some(button) = self.copy_button.clone() else { return };
        button.set_text_content(Some("Copied!"));
        dom::set_style(&button, "background", "#28a745");
        dom_events::delay(self.copied_ms, move || {
            button.set_text_content(Some("Copy"));
            dom::set_style(&button, "background", "");
        });
    }
}

fn set_body_scroll(enabled: bool) {
    if let Some(body) = dom::document().and_then(|d| d.body()) {
        dom::set_style(&body, "overflow", if enabled { "" } else { "hidden" });
    }
}

async fn write_clipboard(text: &str) -> Result<(), UiError> {
    let win = web_sys::window().ok_or_else(|| UiError::Dom("no window".into()))?;
    JsFuture::from(win.navigator().clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| UiError::Dom(js_error(e)))
}

fn exec_copy() -> bool {
    dom::document()
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false)
}

fn open_share_window(platform: Platform) {
    let Some(win) = web_sys::window() else { return };
    let Some(doc) = win.document() else { return };
    let url = win.location().href().unwrap_or_default();
    let title = doc.title();
    let image = dom::query_doc::<HtmlMetaElement>(&doc, r#"meta[property="og:image"]"#)
        .map(|m| m.content())
        .unwrap_or_default();

    let target = share_url(platform, &SharedPage { url: &url, title: &title, image: &image });
    log::debug!("[share] {:?}", platform);
    if let Err(e) = win.open_with_url_and_target_and_features(&target, "_blank", "width=600,height=400") {
        log::warn!("[share] popup blocked: {}", js_error(e));
    }
}
