//! Homedeck - a static service-dashboard generator
//!
//! This library turns a TOML description of service catalogs into a single
//! HTML dashboard page. Each service shows an icon — a remote image, a
//! Material Design symbol rendered as a CSS mask, or a dashboard-icons
//! catalog entry — or a colored placeholder block when no icon is
//! configured.
//!
//! # Example
//!
//! ```rust
//! use homedeck::{render, DashboardConfig};
//!
//! let config = DashboardConfig::from_str(homedeck::config::sample()).unwrap();
//! let html = render(&config);
//! assert!(html.contains("<!DOCTYPE html>"));
//! assert!(html.contains("Plex"));
//! ```

pub mod anchor;
pub mod config;
pub mod icon;
pub mod page;
pub mod palette;
pub mod style;

pub use config::{Catalog, ConfigError, DashboardConfig, PageSettings, Service};
pub use icon::{classify, IconAspect, IconKind, IconSpec, ServiceLink};
pub use palette::Palette;
pub use style::StyleSet;

/// Configuration for a render call
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Palette for placeholder colors
    pub palette: Palette,
    /// Emit only the page fragment, without the document shell
    pub fragment: bool,
    /// Debug mode: print per-service icon decisions to stderr
    pub debug: bool,
}

impl RenderOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Emit only the page fragment
    pub fn with_fragment(mut self, fragment: bool) -> Self {
        self.fragment = fragment;
        self
    }

    /// Enable or disable debug output
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a dashboard configuration to a complete HTML document
///
/// Rendering never fails: missing optional fields resolve to defaults and
/// malformed icon references degrade to best-effort markup. Only
/// configuration loading returns a `Result`.
pub fn render(config: &DashboardConfig) -> String {
    render_with_options(config, RenderOptions::default())
}

/// Render a dashboard configuration with custom options
pub fn render_with_options(config: &DashboardConfig, options: RenderOptions) -> String {
    if options.debug {
        eprintln!("=== Icon Debug ===");
        for catalog in &config.catalogs {
            eprintln!("[{}]", catalog.name);
            for (index, service) in catalog.services.iter().enumerate() {
                match service.icon.as_deref().filter(|i| !i.is_empty()) {
                    Some(icon_ref) => {
                        eprintln!("  {} -> {:?} ({})", service.name, classify(icon_ref), icon_ref)
                    }
                    None => eprintln!(
                        "  {} -> placeholder {}",
                        service.name,
                        options.palette.class_token(index)
                    ),
                }
            }
        }
        eprintln!("==================");
    }

    if options.fragment {
        page::render_page(config, &options.palette)
    } else {
        page::render_document(config, &options.palette)
    }
}
