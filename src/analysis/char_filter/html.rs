//! Markup stripping for page sources.
//!
//! Web pages arrive as HTML source. Tag names, attribute values, inline
//! scripts and entity names would otherwise show up as "unknown words", so
//! they are replaced by a single space before tokenization.

use super::pattern_replace::PatternReplaceCharFilter;
use super::CharFilter;
use crate::error::Result;

const MARKUP_PATTERN: &str = concat!(
    r"(?is)<script\b[^>]*>.*?</script\s*>",
    r"|<style\b[^>]*>.*?</style\s*>",
    r"|<!--.*?-->",
    r"|<[^>]+>",
    r"|&#?[a-z0-9]+;",
);

/// A char filter that blanks out HTML tags, comments, `<script>`/`<style>`
/// bodies and character entities.
#[derive(Clone, Debug)]
pub struct HtmlStripCharFilter {
    inner: PatternReplaceCharFilter,
}

impl HtmlStripCharFilter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: PatternReplaceCharFilter::new(MARKUP_PATTERN, " ")?,
        })
    }
}

impl Default for HtmlStripCharFilter {
    fn default() -> Self {
        Self::new().expect("Markup pattern should be valid")
    }
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &str) -> String {
        self.inner.filter(input)
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        let filter = HtmlStripCharFilter::new().unwrap();
        let output = filter.filter(r#"<p class="lead">Hello <b>world</b></p>"#);
        assert_eq!(output.split_whitespace().collect::<Vec<_>>(), vec!["Hello", "world"]);
    }

    #[test]
    fn test_strips_scripts_styles_and_comments() {
        let filter = HtmlStripCharFilter::new().unwrap();
        let input = "<style>body { color: red }</style>Plain<script type=\"x\">var secret = 1;</script><!-- hidden -->text";
        let output = filter.filter(input);
        assert_eq!(output.split_whitespace().collect::<Vec<_>>(), vec!["Plain", "text"]);
    }

    #[test]
    fn test_strips_entities() {
        let filter = HtmlStripCharFilter::new().unwrap();
        let output = filter.filter("fish&nbsp;&amp;&#39;chips");
        assert_eq!(output.split_whitespace().collect::<Vec<_>>(), vec!["fish", "chips"]);
    }

    #[test]
    fn test_plain_text_untouched() {
        let filter = HtmlStripCharFilter::new().unwrap();
        assert_eq!(filter.filter("no markup here"), "no markup here");
    }
}
