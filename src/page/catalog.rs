//! Catalog grid and service rows

use crate::anchor;
use crate::config::{Catalog, Service};
use crate::icon;
use crate::palette::Palette;
use crate::style::StyleSet;

/// Render all catalogs as a responsive grid of sections
pub fn render_catalogs(catalogs: &[Catalog], palette: &Palette) -> String {
    let sections = catalogs
        .iter()
        .map(|catalog| render_catalog(catalog, palette))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-3">
{}
</div>"#,
        sections
    )
}

fn render_catalog(catalog: &Catalog, palette: &Palette) -> String {
    let mut classes = StyleSet::new();
    if catalog.bubble == Some(true) {
        classes.add_class("rounded-2xl border border-black/5 shadow-sm p-4");
        classes.add_class(&format!(
            "bg-{}",
            catalog.bubble_bg_light.as_deref().unwrap_or("white")
        ));
        classes.add_class(&format!(
            "dark:bg-{}",
            catalog.bubble_bg_dark.as_deref().unwrap_or("gray-900")
        ));
    }

    let rows = catalog
        .services
        .iter()
        .enumerate()
        .map(|(index, service)| render_service(service, index, palette))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section{}>
<h2 class="text-lg font-semibold mb-2">{}</h2>
<ul class="flex flex-col gap-2">
{}
</ul>
</section>"#,
        classes.class_fragment(),
        catalog.name,
        rows
    )
}

/// One service row: icon (or placeholder), linked name, optional description
///
/// The index within the catalog keys the placeholder color for icon-less
/// services.
fn render_service(service: &Service, index: usize, palette: &Palette) -> String {
    let icon_markup = icon::render(&service.icon_spec(), &service.link(index), palette);

    let name_markup = match &service.uri {
        Some(uri) => anchor::render(uri, &service.name, service.new_window, &service.name),
        None => service.name.clone(),
    };

    let description = service
        .description
        .as_deref()
        .map(|text| {
            format!(
                r#"<p class="text-sm text-gray-500 dark:text-gray-400">{}</p>"#,
                text
            )
        })
        .unwrap_or_default();

    format!(
        r#"<li class="flex items-center gap-3">{}<div><span class="font-medium">{}</span>{}</div></li>"#,
        icon_markup, name_markup, description
    )
}
