// Fragment handling - the bookmarkable `#slide-<N>` location suffix
//
// The fragment is the only persisted state: read once at startup, then
// rewritten in place (never pushed as a new history entry) whenever the
// current slide changes.

use anyhow::{Context, Result};
use regex::Regex;

const FRAGMENT_PATTERN: &str = r"^#slide-(\d+)$";

/// Format the 1-based fragment for a 0-based slide index
pub fn format_fragment(index: usize) -> String {
    format!("#slide-{}", index + 1)
}

/// Parser for `#slide-<N>` fragments
pub struct FragmentParser {
    pattern: Regex,
}

impl FragmentParser {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(FRAGMENT_PATTERN).context("Invalid fragment pattern")?;
        Ok(Self { pattern })
    }

    /// Parse a fragment into a 0-based slide index
    ///
    /// Returns `None` unless the fragment is `#slide-<N>` with N in
    /// `[1, total_slides]`.
    pub fn parse(&self, fragment: &str, total_slides: usize) -> Option<usize> {
        let captures = self.pattern.captures(fragment.trim())?;
        let number: usize = captures.get(1)?.as_str().parse().ok()?;
        if (1..=total_slides).contains(&number) {
            Some(number - 1)
        } else {
            None
        }
    }
}

/// Split a `path#fragment` argument into its parts
pub fn split_location(arg: &str) -> (&str, Option<&str>) {
    match arg.find('#') {
        Some(pos) => (&arg[..pos], Some(&arg[pos..])),
        None => (arg, None),
    }
}

/// Current location of the presentation: deck name plus fragment
///
/// There is a single entry. Slide changes rewrite its fragment in place.
#[derive(Debug, Clone)]
pub struct Location {
    deck: String,
    fragment: Option<String>,
}

impl Location {
    pub fn new(deck: impl Into<String>, fragment: Option<String>) -> Self {
        Self {
            deck: deck.into(),
            fragment,
        }
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn deck(&self) -> &str {
        &self.deck
    }

    /// Replace the fragment of the current history entry
    ///
    /// No-op when the fragment is already `new_fragment`.
    pub fn replace_fragment(&mut self, new_fragment: String) {
        if self.fragment.as_deref() == Some(new_fragment.as_str()) {
            return;
        }
        tracing::trace!(fragment = %new_fragment, "Replacing location fragment");
        self.fragment = Some(new_fragment);
    }

    /// Full bookmarkable location, e.g. `talk.md#slide-3`
    pub fn href(&self) -> String {
        format!("{}{}", self.deck, self.fragment.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_range_fragments() {
        let parser = FragmentParser::new().unwrap();
        assert_eq!(parser.parse("#slide-1", 9), Some(0));
        assert_eq!(parser.parse("#slide-5", 9), Some(4));
        assert_eq!(parser.parse("#slide-9", 9), Some(8));
    }

    #[test]
    fn rejects_out_of_range_and_malformed() {
        let parser = FragmentParser::new().unwrap();
        assert_eq!(parser.parse("#slide-0", 9), None);
        assert_eq!(parser.parse("#slide-99", 9), None);
        assert_eq!(parser.parse("#slide-", 9), None);
        assert_eq!(parser.parse("#intro", 9), None);
        assert_eq!(parser.parse("", 9), None);
        assert_eq!(parser.parse("#slide-99999999999999999999999", 9), None);
    }

    #[test]
    fn fragment_is_one_based() {
        assert_eq!(format_fragment(0), "#slide-1");
        assert_eq!(format_fragment(8), "#slide-9");
    }

    #[test]
    fn splits_deck_argument() {
        assert_eq!(split_location("talk.md#slide-3"), ("talk.md", Some("#slide-3")));
        assert_eq!(split_location("talk.md"), ("talk.md", None));
    }

    #[test]
    fn replace_rewrites_fragment_in_place() {
        let mut location = Location::new("talk.md", Some("#slide-99".to_string()));
        location.replace_fragment(format_fragment(2));
        location.replace_fragment(format_fragment(3));
        assert_eq!(location.fragment(), Some("#slide-4"));
        assert_eq!(location.href(), "talk.md#slide-4");
        assert_eq!(location.deck(), "talk.md");
    }
}
