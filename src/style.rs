//! Class and inline-style accumulation for markup emission
//!
//! Markup builders collect CSS class tokens and inline declarations into a
//! `StyleSet` instead of concatenating strings in place. The set serializes
//! either to bare attribute values or to attribute fragments that disappear
//! entirely when nothing was accumulated, so empty `class=""`/`style=""`
//! attributes never reach the output.
//!
//! No escaping is performed: every value comes from the dashboard
//! configuration, which is trusted input.

/// Ordered collection of CSS class tokens and inline style declarations
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    classes: Vec<String>,
    styles: Vec<String>,
}

impl StyleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class token (or a space-separated run of tokens)
    pub fn add_class(&mut self, token: &str) {
        self.classes.push(token.to_string());
    }

    /// Append an inline `property: value` declaration
    pub fn add_style(&mut self, declaration: &str) {
        self.styles.push(declaration.to_string());
    }

    /// Accumulated classes joined with single spaces; empty set yields `""`
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Accumulated declarations joined with `;`; empty set yields `""`
    pub fn style_attr(&self) -> String {
        self.styles.join(";")
    }

    /// ` class="…"` fragment, or `""` when no classes were accumulated
    pub fn class_fragment(&self) -> String {
        if self.classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, self.class_attr())
        }
    }

    /// ` style="…"` fragment, or `""` when no declarations were accumulated
    pub fn style_fragment(&self) -> String {
        if self.styles.is_empty() {
            String::new()
        } else {
            format!(r#" style="{}""#, self.style_attr())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_yields_empty_strings() {
        let set = StyleSet::new();
        assert_eq!(set.class_attr(), "");
        assert_eq!(set.style_attr(), "");
        assert_eq!(set.class_fragment(), "");
        assert_eq!(set.style_fragment(), "");
    }

    #[test]
    fn test_classes_join_with_spaces() {
        let mut set = StyleSet::new();
        set.add_class("block");
        set.add_class("w-16 h-16");
        set.add_class("rounded-2xl");
        assert_eq!(set.class_attr(), "block w-16 h-16 rounded-2xl");
    }

    #[test]
    fn test_styles_join_with_semicolons() {
        let mut set = StyleSet::new();
        set.add_style("background-color: #ff0000");
        set.add_style("mask: url(x.svg) no-repeat center / contain");
        assert_eq!(
            set.style_attr(),
            "background-color: #ff0000;mask: url(x.svg) no-repeat center / contain"
        );
    }

    #[test]
    fn test_fragments_carry_leading_space() {
        let mut set = StyleSet::new();
        set.add_class("block");
        set.add_style("color: red");
        assert_eq!(set.class_fragment(), r#" class="block""#);
        assert_eq!(set.style_fragment(), r#" style="color: red""#);
    }

    #[test]
    fn test_ordering_is_insertion_order() {
        let mut set = StyleSet::new();
        set.add_class("b");
        set.add_class("a");
        assert_eq!(set.class_attr(), "b a");
    }
}
