//! Browser helpers shared by the page and its dialogs.
//!
//! - **User Feedback**: transient toast notifications for saved checks, failed
//!   requests and transpile warnings.
//! - **Clipboard**: copying generated code.
//! - **Formatting**: thousands separators for row counts.

use common::requests::RowError;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
            ToastKind::Warning => "rgba(237, 108, 2, 0.95)",
            ToastKind::Error => "rgba(211, 47, 47, 0.95)",
        }
    }
}

pub fn show_toast(message: &str) {
    show_toast_kind(message, ToastKind::Info);
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a plain `div` appended to `body` and removed again after three
/// seconds. The message is set as text, never as markup, because it may carry
/// server-provided error details.
pub fn show_toast_kind(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("max-width", "80vw").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Writes `text` to the system clipboard and confirms with a toast.
pub fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => show_toast("Code copied to clipboard"),
            Err(err) => {
                gloo_console::error!("Clipboard write failed", err);
                show_toast_kind("Could not copy to clipboard", ToastKind::Error);
            }
        }
    });
}

/// Logs each row the backend could not transpile and summarizes them in a
/// warning toast.
pub fn warn_row_errors(errors: &[RowError]) {
    if errors.is_empty() {
        return;
    }
    for row in errors {
        gloo_console::warn!(format!("Transpile failed for check {}: {}", row.id, row.error));
    }
    show_toast_kind(
        &format!("Could not generate code for {} check(s)", errors.len()),
        ToastKind::Warning,
    );
}

/// `1520000` -> `"1,520,000"`.
pub fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}
