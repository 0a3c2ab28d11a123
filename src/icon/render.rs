//! Markup generation for a concrete icon reference
//!
//! Given a non-empty icon reference and its spec, classify it, accumulate
//! classes and inline declarations, and emit one markup shape per kind.
//! Nothing in here fails: a malformed reference degrades to best-effort
//! markup (at worst an image with a dead `src`) rather than taking the
//! page down with it.

use crate::icon::kind::{classify, IconKind};
use crate::icon::{IconAspect, IconSpec};
use crate::style::StyleSet;

/// PNG catalog keyed by bare icon name; referenced, never fetched
const CATALOG_CDN: &str = "https://cdn.jsdelivr.net/gh/walkxcode/dashboard-icons/png";

/// Material Design Icons SVG catalog, used as a CSS mask source
const MDI_CDN: &str = "https://cdn.jsdelivr.net/npm/@mdi/svg@latest/svg";

/// Render the markup for a non-empty icon reference
pub fn render(icon: &str, spec: &IconSpec) -> String {
    let kind = classify(icon);

    let size_classes = match spec.aspect.unwrap_or_default() {
        IconAspect::Square => "w-16 h-16",
        IconAspect::Width => "w-16",
        IconAspect::Height => "h-16",
    };

    let mut styles = StyleSet::new();
    styles.add_class("block overflow-hidden bg-contain object-contain");
    styles.add_class(size_classes);

    // Unset bubble behaves as bubbled.
    if spec.bubble != Some(false) {
        styles.add_class("rounded-2xl border border-black/5 shadow-sm");
    }

    match kind {
        IconKind::UriImage | IconKind::CatalogImage => {
            // No background configured means a transparent background.
            if let Some(bg) = &spec.background {
                add_color(&mut styles, bg);
            }
        }
        IconKind::MaterialSymbol => match &spec.background {
            None => styles.add_class("bg-slate-200 dark:bg-gray-900"),
            Some(bg) => add_color(&mut styles, bg),
        },
    }

    match kind {
        IconKind::UriImage => render_uri(icon, size_classes, &styles),
        IconKind::CatalogImage => render_catalog(icon, &styles),
        IconKind::MaterialSymbol => render_material(icon, spec, &styles),
    }
}

/// Hex values become an inline declaration, symbolic tokens a `bg-` class;
/// a single value never produces both.
fn add_color(styles: &mut StyleSet, value: &str) {
    if value.starts_with('#') {
        styles.add_style(&format!("background-color: {}", value));
    } else {
        styles.add_class(&format!("bg-{}", value));
    }
}

fn render_uri(icon: &str, size_classes: &str, styles: &StyleSet) -> String {
    format!(
        r#"<span class="flex items-center {}"><img src="{}" alt=""{}{} /></span>"#,
        size_classes,
        icon,
        styles.class_fragment(),
        styles.style_fragment()
    )
}

fn render_catalog(icon: &str, styles: &StyleSet) -> String {
    let name = strip_one_suffix(icon, &[".png", ".jpg", ".svg"]);
    format!(
        r#"<img src="{}/{}.png" alt=""{}{} />"#,
        CATALOG_CDN,
        name,
        styles.class_fragment(),
        styles.style_fragment()
    )
}

fn render_material(icon: &str, spec: &IconSpec, styles: &StyleSet) -> String {
    let name = icon.strip_prefix("mdi-").unwrap_or(icon);
    let name = strip_one_suffix(name, &[".svg"]);
    let mask_url = format!("{}/{}.svg", MDI_CDN, name);

    // The outer span carries the accumulated icon styling; the inner span is
    // the mask layer that actually shows the symbol.
    let mut mask = StyleSet::new();
    mask.add_class("absolute block");
    match &spec.color {
        None => mask.add_class("bg-black dark:bg-white"),
        Some(color) => add_color(&mut mask, color),
    }
    mask.add_class("h-full w-full overflow-hidden");
    mask.add_style(&format!("mask: url({}) no-repeat center / contain", mask_url));
    // The WebKit twin is written without the vendor dash.
    mask.add_style(&format!(
        "webkit-mask: url({}) no-repeat center / contain",
        mask_url
    ));

    format!(
        r#"<span class="relative {}"{}><span{}{}></span></span>"#,
        styles.class_attr(),
        styles.style_fragment(),
        mask.class_fragment(),
        mask.style_fragment()
    )
}

/// Strip at most one of the given suffixes
fn strip_one_suffix<'a>(name: &'a str, suffixes: &[&str]) -> &'a str {
    for suffix in suffixes {
        if let Some(stripped) = name.strip_suffix(suffix) {
            return stripped;
        }
    }
    name
}
