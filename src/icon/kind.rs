//! Icon reference classification

/// Rendering strategy derived from the shape of an icon reference
///
/// Derived per render call and never stored; the renderer matches on it
/// exhaustively so a new strategy cannot be added without handling its
/// markup shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Absolute or site-relative image URI, used as `src` verbatim
    UriImage,
    /// `mdi-` prefixed Material Design Icons name, rendered as a CSS mask
    MaterialSymbol,
    /// Bare name looked up in the dashboard-icons PNG catalog
    CatalogImage,
}

/// Classify a non-empty icon reference
///
/// First match wins: `http`/`/` prefixes take priority over `mdi-`, and
/// anything else is a catalog name. Total over non-empty strings.
pub fn classify(icon: &str) -> IconKind {
    if icon.starts_with("http") || icon.starts_with('/') {
        IconKind::UriImage
    } else if icon.starts_with("mdi-") {
        IconKind::MaterialSymbol
    } else {
        IconKind::CatalogImage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_uri() {
        assert_eq!(classify("http://example.com/a.png"), IconKind::UriImage);
        assert_eq!(classify("https://example.com/a.png"), IconKind::UriImage);
    }

    #[test]
    fn test_relative_uri() {
        assert_eq!(classify("/icons/a.png"), IconKind::UriImage);
    }

    #[test]
    fn test_material_prefix() {
        assert_eq!(classify("mdi-home"), IconKind::MaterialSymbol);
        assert_eq!(classify("mdi-home.svg"), IconKind::MaterialSymbol);
    }

    #[test]
    fn test_catalog_fallthrough() {
        assert_eq!(classify("plex.png"), IconKind::CatalogImage);
        assert_eq!(classify("jellyfin"), IconKind::CatalogImage);
    }

    #[test]
    fn test_prefix_rules_do_not_overlap() {
        // An mdi- name can never also start with http or /, so the priority
        // order cannot flip a classification.
        assert_eq!(classify("mdi-http-test"), IconKind::MaterialSymbol);
        // A name merely containing mdi- is still a catalog name.
        assert_eq!(classify("httpd-mdi-thing"), IconKind::UriImage);
        assert_eq!(classify("x-mdi-thing"), IconKind::CatalogImage);
    }

    #[test]
    fn test_bare_http_prefix_word() {
        // "httpx" still matches the http prefix rule; first match wins.
        assert_eq!(classify("httpx"), IconKind::UriImage);
    }
}
