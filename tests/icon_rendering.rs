//! End-to-end scenarios for the icon rendering engine

use pretty_assertions::assert_eq;

use homedeck::{classify, icon, IconAspect, IconKind, IconSpec, Palette, ServiceLink};

fn link(index: usize) -> ServiceLink {
    ServiceLink {
        name: "Service".to_string(),
        index,
        ..ServiceLink::default()
    }
}

#[test]
fn material_symbol_with_hex_color() {
    let spec = IconSpec {
        icon: Some("mdi-home".to_string()),
        color: Some("#ff0000".to_string()),
        ..IconSpec::default()
    };
    let markup = icon::render(&spec, &link(0), &Palette::default());

    assert!(markup.contains("background-color: #ff0000"));
    assert!(!markup.contains("bg-red"));
    assert!(markup.contains("mask: url(https://cdn.jsdelivr.net/npm/@mdi/svg@latest/svg/home.svg) no-repeat center / contain"));
    assert!(markup.contains("webkit-mask: url("));
}

#[test]
fn uri_image_inside_sized_wrapper() {
    let spec = IconSpec {
        icon: Some("https://example.com/a.png".to_string()),
        ..IconSpec::default()
    };
    let markup = icon::render(&spec, &link(0), &Palette::default());

    assert!(markup.starts_with(r#"<span class="flex items-center w-16 h-16">"#));
    assert!(markup.contains(r#"<img src="https://example.com/a.png" alt=""#));
    assert!(markup.ends_with("</span>"));
}

#[test]
fn catalog_icon_cdn_url() {
    let spec = IconSpec {
        icon: Some("plex.png".to_string()),
        ..IconSpec::default()
    };
    let markup = icon::render(&spec, &link(0), &Palette::default());

    assert!(markup
        .contains(r#"src="https://cdn.jsdelivr.net/gh/walkxcode/dashboard-icons/png/plex.png""#));
}

#[test]
fn no_icon_with_uri_wraps_placeholder() {
    let spec = IconSpec::default();
    let service = ServiceLink {
        name: "Router".to_string(),
        uri: Some("https://x".to_string()),
        index: 3,
        ..ServiceLink::default()
    };
    let markup = icon::render(&spec, &service, &Palette::default());

    assert!(markup.starts_with(r#"<a href="https://x" title="Router">"#));
    // 15 % 3 = 0 -> first palette token
    assert!(markup.contains("bg-blue-300"));
    assert!(markup.ends_with("</a>"));
}

#[test]
fn no_icon_no_uri_index_zero_is_guarded() {
    let spec = IconSpec::default();
    let markup = icon::render(&spec, &link(0), &Palette::default());

    // index 0 has no residue under the inherited formula; clamps to the
    // first palette token instead of failing.
    assert!(markup.contains("bg-blue-300"));
    assert!(!markup.contains("<a "));
}

#[test]
fn classification_priority_order() {
    assert_eq!(classify("https://example.com/a.png"), IconKind::UriImage);
    assert_eq!(classify("/local/a.png"), IconKind::UriImage);
    assert_eq!(classify("mdi-home"), IconKind::MaterialSymbol);
    assert_eq!(classify("plex.png"), IconKind::CatalogImage);
    // mdi- names never start with http or /, so the rules cannot overlap.
    assert_eq!(classify("mdi-http"), IconKind::MaterialSymbol);
}

#[test]
fn extension_stripping_per_kind() {
    let catalog = IconSpec {
        icon: Some("home.png".to_string()),
        ..IconSpec::default()
    };
    let markup = icon::render(&catalog, &link(0), &Palette::default());
    assert!(markup.contains("dashboard-icons/png/home.png"));
    assert!(!markup.contains("home.png.png"));

    let material = IconSpec {
        icon: Some("mdi-home.svg".to_string()),
        ..IconSpec::default()
    };
    let markup = icon::render(&material, &link(0), &Palette::default());
    assert!(markup.contains("svg/home.svg"));
    assert!(!markup.contains("mdi-home"));
}

#[test]
fn hex_token_exclusivity_for_backgrounds() {
    let hex = IconSpec {
        icon: Some("plex.png".to_string()),
        background: Some("#00aaff".to_string()),
        ..IconSpec::default()
    };
    let markup = icon::render(&hex, &link(0), &Palette::default());
    assert!(markup.contains("background-color: #00aaff"));
    assert!(!markup.contains("bg-#00aaff"));

    let token = IconSpec {
        icon: Some("plex.png".to_string()),
        background: Some("sky-100".to_string()),
        ..IconSpec::default()
    };
    let markup = icon::render(&token, &link(0), &Palette::default());
    assert!(markup.contains("bg-sky-100"));
    assert!(!markup.contains("background-color"));
}

#[test]
fn bubble_and_aspect_combinations() {
    let spec = IconSpec {
        icon: Some("plex.png".to_string()),
        bubble: Some(false),
        aspect: Some(IconAspect::Width),
        ..IconSpec::default()
    };
    let markup = icon::render(&spec, &link(0), &Palette::default());
    assert!(!markup.contains("rounded-2xl"));
    assert!(markup.contains("w-16"));
    assert!(!markup.contains("h-16"));
}

#[test]
fn rendering_is_byte_identical_across_calls() {
    let spec = IconSpec {
        icon: Some("mdi-server".to_string()),
        color: Some("emerald".to_string()),
        background: Some("#111827".to_string()),
        aspect: Some(IconAspect::Height),
        ..IconSpec::default()
    };
    let palette = Palette::default();
    let first = icon::render(&spec, &link(2), &palette);
    let second = icon::render(&spec, &link(2), &palette);
    assert_eq!(first, second);
}
