//! Icon rendering engine
//!
//! The entry point is [`render`]: given a service's icon spec and link
//! descriptor it decides between three outcomes — no icon and no link (a
//! colored blank placeholder), no icon but a link (the placeholder wrapped
//! in an anchor), or an icon (delegated to the per-kind renderer). The
//! decision is made once per call; there is no state carried between calls.

use serde::Deserialize;

use crate::anchor;
use crate::palette::Palette;

pub mod kind;
pub mod render;

pub use kind::{classify, IconKind};

/// How an icon fills its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconAspect {
    /// Fixed width and height
    #[default]
    Square,
    /// Fixed width, natural height
    Width,
    /// Fixed height, natural width
    Height,
}

/// How to render one service's icon
///
/// Every field is optional; absence resolves to a default at the single
/// point where the field is consumed (aspect to square, bubble to true,
/// colors to kind-specific defaults).
#[derive(Debug, Clone, Default)]
pub struct IconSpec {
    /// Icon reference: URI, `mdi-` name, or catalog name; empty behaves as absent
    pub icon: Option<String>,
    /// Foreground color for symbol icons: token or `#`-hex
    pub color: Option<String>,
    /// Background color: token or `#`-hex
    pub background: Option<String>,
    /// Rounded/bordered/shadowed container; unset behaves as true
    pub bubble: Option<bool>,
    /// Sizing mode, defaults to [`IconAspect::Square`]
    pub aspect: Option<IconAspect>,
}

/// Link descriptor for the service the icon belongs to
#[derive(Debug, Clone, Default)]
pub struct ServiceLink {
    /// Accessible title for the anchor around a placeholder
    pub name: String,
    /// Navigation target, if any
    pub uri: Option<String>,
    /// Open in a new window; unset behaves as false
    pub new_window: Option<bool>,
    /// Position within the rendered list; keys the placeholder color
    pub index: usize,
}

/// Render a service's icon (or its placeholder) to a markup fragment
///
/// When an icon reference is present the link fields are ignored: icons are
/// never wrapped in an anchor here, that is the surrounding row's job.
pub fn render(spec: &IconSpec, link: &ServiceLink, palette: &Palette) -> String {
    match spec.icon.as_deref().filter(|icon| !icon.is_empty()) {
        Some(icon) => render::render(icon, spec),
        None => match &link.uri {
            Some(uri) => anchor::render(uri, &link.name, link.new_window, &blank(link.index, palette)),
            None => blank(link.index, palette),
        },
    }
}

/// Colored blank block for a service without an icon
fn blank(index: usize, palette: &Palette) -> String {
    format!(
        r#"<span class="block w-16 h-16 rounded-2xl border border-black/5 shadow-sm {} overflow-hidden"></span>"#,
        palette.class_token(index)
    )
}
