//! Page header block

use crate::config::PageSettings;
use crate::icon::{self, IconSpec, ServiceLink};
use crate::palette::Palette;

/// Title used when the configuration does not set one
pub const DEFAULT_TITLE: &str = "Homedeck";

/// Render the header: an optional icon plus the page title
///
/// A header with no icon configured simply shows no icon; it never falls
/// back to a blank placeholder the way a service row does.
pub fn render(page: &PageSettings, palette: &Palette) -> String {
    let title = page.title.as_deref().unwrap_or(DEFAULT_TITLE);

    let icon_markup = match page.icon.as_deref().filter(|i| !i.is_empty()) {
        Some(icon) => {
            let spec = IconSpec {
                icon: Some(icon.to_string()),
                ..IconSpec::default()
            };
            let link = ServiceLink {
                name: title.to_string(),
                ..ServiceLink::default()
            };
            icon::render(&spec, &link, palette)
        }
        None => String::new(),
    };

    format!(
        r#"<header class="flex items-center gap-4">{}<h1 class="text-2xl font-bold">{}</h1></header>"#,
        icon_markup, title
    )
}
