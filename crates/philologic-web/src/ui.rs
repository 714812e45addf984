//! Presentation primitives shared by every page: document shell, modal
//! overlay, and toast notifications.

/// Navigation HTML template shared across all pages
pub const NAV_HTML: &str = include_str!("../templates/nav.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Success => "#27ae60",
            ToastKind::Error   => "#e74c3c",
            ToastKind::Info    => "#3498db",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error   => "error",
            ToastKind::Info    => "info",
        }
    }
}

/// A transient notification. The stylesheet slides it in and fades it out
/// after three seconds; the message is escaped.
pub fn toast(message: &str, kind: ToastKind) -> String {
    format!(
        r#"<div class="toast toast-{}" role="status" style="background:{}">{}</div>"#,
        kind.as_str(),
        kind.color(),
        philologic_common::escape_html(message)
    )
}

/// Wrap already-rendered markup in an overlay. Clicking the backdrop or the
/// close control navigates back to the index, which closes the overlay.
/// `content` must already be escaped.
pub fn modal(content: &str) -> String {
    format!(r#"
<div class="modal" role="dialog" aria-modal="true">
    <a href="/" class="modal-backdrop" aria-label="Close"></a>
    <div class="modal-content">
        <a href="/" class="close" aria-label="Close">&times;</a>
        {}
    </div>
</div>"#, content)
}

/// Full HTML document with navigation, the given body, overlay and toasts.
pub fn page(title: &str, body: &str, overlay: Option<&str>, toasts: &[String]) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} | PhiloLogic</title>
    <link rel="stylesheet" href="/static/css/main.css?v=0.1.0">
</head>
<body>
{}
<main class="main-content">
{}
</main>
{}
<div class="toast-container">{}</div>
</body>
</html>"#,
        philologic_common::escape_html(title),
        NAV_HTML,
        body,
        overlay.unwrap_or(""),
        toasts.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_escapes_and_colors() {
        let html = toast("<b>saved</b>", ToastKind::Success);
        assert!(html.contains("&lt;b&gt;saved&lt;/b&gt;"));
        assert!(html.contains("#27ae60"));
        assert!(html.contains("toast-success"));
    }

    #[test]
    fn test_modal_has_backdrop_and_close() {
        let html = modal("<h2>Plato</h2>");
        assert!(html.contains("modal-backdrop"));
        assert!(html.contains("&times;"));
        assert!(html.contains("<h2>Plato</h2>"));
    }

    #[test]
    fn test_page_includes_nav_overlay_and_toasts() {
        let toasts = vec![toast("hello", ToastKind::Info)];
        let html = page("Home", "<p>body</p>", Some("<div id=\"ov\"></div>"), &toasts);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("PhiloLogic</a>"));
        assert!(html.contains("<div id=\"ov\"></div>"));
        assert!(html.contains("#3498db"));
    }

    #[test]
    fn test_page_title_is_plain_ascii() {
        let html = page("Register", "", None, &[]);
        assert!(html.contains("<title>Register | PhiloLogic</title>"));
        assert!(!html.contains('\u{2014}'));
    }
}
