//! Hyperlink wrapper around markup fragments

/// Wrap a markup fragment in an anchor
///
/// `new_window` set to true adds `target="_blank"` with a `noreferrer`
/// relation; unset or false leaves the anchor targeting the current window.
pub fn render(uri: &str, title: &str, new_window: Option<bool>, child: &str) -> String {
    let target = if new_window == Some(true) {
        r#" target="_blank" rel="noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a href="{}" title="{}"{}>{}</a>"#,
        uri, title, target, child
    )
}
