//! Read access to `document.cookie`.
//!
//! TRADE-OFFS
//! ==========
//! An `HttpOnly` session cookie is invisible here; the probe then relies on
//! the browser sending it with `credentials: include` and no bearer is added.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Current `document.cookie` string, or empty outside the browser.
pub fn document_cookie() -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
