//! Dashboard configuration loading
//!
//! The dashboard is described by a TOML document: page settings plus a list
//! of catalogs, each with its services. Deserialization is the only
//! validation performed; every optional field resolves to a default at the
//! point of use, per the never-break-the-page policy of the render path.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::icon::{IconAspect, IconSpec, ServiceLink};

/// Errors that can occur when loading a dashboard configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Top-level dashboard configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DashboardConfig {
    /// Page-wide settings
    #[serde(default)]
    pub page: PageSettings,
    /// Service catalogs, in display order
    #[serde(default)]
    pub catalogs: Vec<Catalog>,
}

/// Page-wide settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PageSettings {
    /// Document and header title
    pub title: Option<String>,
    /// Header icon reference (same shapes as a service icon)
    pub icon: Option<String>,
    /// Stylesheet URL linked from the document head
    pub stylesheet: Option<String>,
    /// Show the header block at all
    #[serde(default = "default_true")]
    pub show_header: bool,
    /// Draw a separator line on the header block
    #[serde(default)]
    pub header_line: bool,
    /// Header across the top instead of down the side on wide screens
    #[serde(default)]
    pub header_top: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: None,
            icon: None,
            stylesheet: None,
            show_header: true,
            header_line: false,
            header_top: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A named category of services
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Catalog {
    pub name: String,
    /// Draw the catalog in a bubble panel
    pub bubble: Option<bool>,
    /// Panel background token for light mode, defaults to `white`
    pub bubble_bg_light: Option<String>,
    /// Panel background token for dark mode, defaults to `gray-900`
    pub bubble_bg_dark: Option<String>,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// One service entry within a catalog
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Service {
    pub name: String,
    pub uri: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub icon_background: Option<String>,
    pub icon_bubble: Option<bool>,
    pub icon_aspect: Option<IconAspect>,
    pub new_window: Option<bool>,
}

impl Service {
    /// Icon spec view of this service
    pub fn icon_spec(&self) -> IconSpec {
        IconSpec {
            icon: self.icon.clone(),
            color: self.icon_color.clone(),
            background: self.icon_background.clone(),
            bubble: self.icon_bubble,
            aspect: self.icon_aspect,
        }
    }

    /// Link descriptor for this service at `index` within its catalog
    pub fn link(&self, index: usize) -> ServiceLink {
        ServiceLink {
            name: self.name.clone(),
            uri: self.uri.clone(),
            new_window: self.new_window,
            index,
        }
    }
}

/// Sample configuration document, also printed by the CLI's `--sample` flag
const SAMPLE_CONFIG: &str = r##"# homedeck sample configuration

[page]
title = "Home"
icon = "mdi-home"
header-top = true

[[catalogs]]
name = "Media"
bubble = true

[[catalogs.services]]
name = "Plex"
uri = "https://plex.example.lan"
icon = "plex.png"
description = "Movies and shows"

[[catalogs.services]]
name = "Jellyfin"
uri = "https://jellyfin.example.lan"
icon = "mdi-jellyfish"
icon-color = "#9b6bc3"
new-window = true

[[catalogs]]
name = "Infrastructure"

[[catalogs.services]]
name = "Router"
uri = "https://192.168.1.1"
icon = "/icons/router.png"

[[catalogs.services]]
name = "Backups"
description = "No icon: gets a colored placeholder"
"##;

/// The embedded sample configuration
pub fn sample() -> &'static str {
    SAMPLE_CONFIG
}

impl DashboardConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
