//! Page and document assembly
//!
//! Straight-line template assembly around the icon engine: the page wrapper
//! arranges the header and the catalog grid, and the document shell wraps
//! the page in a complete HTML5 document. The only branching is the
//! header placement toggles from the page settings.

use crate::config::DashboardConfig;
use crate::palette::Palette;
use crate::style::StyleSet;

pub mod catalog;
pub mod header;

pub use header::DEFAULT_TITLE;

/// Render the page fragment: header block plus catalog grid
pub fn render_page(config: &DashboardConfig, palette: &Palette) -> String {
    let page = &config.page;

    let mut header_classes = StyleSet::new();
    header_classes.add_class("p-4");
    if page.header_top {
        header_classes.add_class("w-full");
    } else {
        header_classes.add_class("w-full xl:w-auto xl:max-w-xs xl:min-h-screen");
    }
    if page.header_line {
        header_classes.add_class("border-0 border-solid border-gray-300 dark:border-gray-700");
        if page.header_top {
            header_classes.add_class("border-b");
        } else {
            header_classes.add_class("border-b xl:border-r xl:border-b-0");
        }
    }

    let mut wrapper_classes = StyleSet::new();
    wrapper_classes.add_class("min-h-screen flex flex-col max-w-screen-2xl mx-auto");
    if !page.header_top {
        wrapper_classes.add_class("xl:flex-row");
    }

    let mut list_classes = StyleSet::new();
    list_classes.add_class("p-4 flex-grow");
    if !page.header_top {
        list_classes.add_class("min-h-screen");
    }

    let header_block = if page.show_header {
        format!(
            r#"<div{}>{}</div>"#,
            header_classes.class_fragment(),
            header::render(page, palette)
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="min-h-screen"><div{}>{}<div{}>{}</div></div></div>"#,
        wrapper_classes.class_fragment(),
        header_block,
        list_classes.class_fragment(),
        catalog::render_catalogs(&config.catalogs, palette)
    )
}

/// Render the complete HTML document around the page fragment
pub fn render_document(config: &DashboardConfig, palette: &Palette) -> String {
    let title = config.page.title.as_deref().unwrap_or(DEFAULT_TITLE);

    let stylesheet_link = config
        .page
        .stylesheet
        .as_deref()
        .map(|href| format!("\n<link rel=\"stylesheet\" href=\"{}\" />", href))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{}</title>{}
</head>
<body class="bg-gray-100 text-gray-900 dark:bg-gray-950 dark:text-gray-100">
{}
</body>
</html>"#,
        title,
        stylesheet_link,
        render_page(config, palette)
    )
}
