//! Viewport bridge.
//!
//! The webview owns scrolling, so the few operations that need real
//! geometry (scroll offset, header height, smooth scrolling) go through
//! `document::eval`. Everything degrades to a logged no-op when the
//! target element is missing.

use dioxus::document;
use vitrine_core::SiteError;

/// Id of the scrolling page container.
pub const PAGE_ID: &str = "page";

/// Id of the site header, measured for the sticky threshold.
pub const HEADER_ID: &str = "site-header";

/// Read the page's vertical scroll offset and the header's rendered height.
///
/// Returns `None` when the webview cannot be reached; the caller skips
/// that scroll pass.
pub async fn read_scroll_metrics() -> Option<(f64, f64)> {
    let js = format!(
        r#"
        const page = document.getElementById("{PAGE_ID}");
        const header = document.getElementById("{HEADER_ID}");
        dioxus.send([page ? page.scrollTop : 0, header ? header.offsetHeight : 0]);
        "#
    );
    let mut eval = document::eval(&js);
    match eval.recv::<(f64, f64)>().await {
        Ok(metrics) => Some(metrics),
        Err(err) => {
            tracing::warn!("Failed to read scroll metrics: {:?}", err);
            None
        }
    }
}

/// Smooth-scroll the page to an in-page section.
///
/// A missing target is logged and otherwise ignored.
pub async fn scroll_to_section(id: &str) {
    let js = format!(
        r#"
        const target = document.getElementById("{id}");
        if (target) {{
            target.scrollIntoView({{ behavior: "smooth" }});
            dioxus.send(true);
        }} else {{
            dioxus.send(false);
        }}
        "#
    );
    let mut eval = document::eval(&js);
    match eval.recv::<bool>().await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!("{}", SiteError::MissingAnchor(format!("#{id}")));
        }
        Err(err) => {
            tracing::warn!("Smooth scroll failed: {:?}", err);
        }
    }
}

/// Animate the page back to the top.
pub async fn scroll_to_origin() {
    let js = format!(
        r#"
        const page = document.getElementById("{PAGE_ID}");
        if (page) {{ page.scrollTo({{ top: 0, behavior: "smooth" }}); }}
        dioxus.send(true);
        "#
    );
    let mut eval = document::eval(&js);
    if let Err(err) = eval.recv::<bool>().await {
        tracing::warn!("Scroll to origin failed: {:?}", err);
    }
}

/// Hand a validated contact form off to the system mail client.
pub async fn open_mailto(url: &str) {
    let js = format!(
        r#"
        window.location.href = {url:?};
        dioxus.send(true);
        "#
    );
    let mut eval = document::eval(&js);
    if let Err(err) = eval.recv::<bool>().await {
        tracing::warn!("Mail handoff failed: {:?}", err);
    }
}
