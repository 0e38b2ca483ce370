//! Deck loading
//!
//! A deck is a Markdown file whose slides are separated by lines that
//! consist solely of `---`. Separators inside fenced code blocks are left
//! alone. Each slide gets its 0-based index, a title (first heading) and an
//! optional copy block (first fenced code block) that its copy button writes.

use anyhow::{bail, Context, Result};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::path::Path;

/// Built-in deck used when no file is given
const BUILTIN_DECK: &str = include_str!("../../demos/prompts.md");
const BUILTIN_NAME: &str = "prompts.md";

/// One slide of the deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub index: usize,
    pub title: String,
    /// Raw Markdown body
    pub body: String,
    /// Text written by this slide's copy button
    pub copy_text: Option<String>,
}

impl Slide {
    fn parse(index: usize, body: &str) -> Self {
        let mut title: Option<String> = None;
        let mut copy_text: Option<String> = None;
        let mut in_heading = false;
        let mut in_code = false;
        let mut heading = String::new();
        let mut code = String::new();

        for event in Parser::new(body) {
            match event {
                Event::Start(Tag::Heading { .. }) if title.is_none() => {
                    in_heading = true;
                    heading.clear();
                }
                Event::End(TagEnd::Heading(_)) if in_heading => {
                    in_heading = false;
                    title = Some(heading.trim().to_string());
                }
                Event::Start(Tag::CodeBlock(_)) if copy_text.is_none() => {
                    in_code = true;
                    code.clear();
                }
                Event::End(TagEnd::CodeBlock) if in_code => {
                    in_code = false;
                    copy_text = Some(code.clone());
                }
                Event::Text(text) | Event::Code(text) => {
                    if in_heading {
                        heading.push_str(&text);
                    } else if in_code {
                        code.push_str(&text);
                    }
                }
                _ => {}
            }
        }

        Self {
            index,
            title: title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Slide {}", index + 1)),
            body: body.to_string(),
            copy_text,
        }
    }
}

/// Ordered, immutable set of slides
#[derive(Debug, Clone)]
pub struct Deck {
    name: String,
    slides: Vec<Slide>,
}

impl Deck {
    /// Load a deck from a Markdown file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::parse(name, &source).with_context(|| format!("Invalid deck {}", path.display()))
    }

    /// The deck compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_NAME.to_string(), BUILTIN_DECK)
    }

    /// Parse deck source; fails if it contains no slides
    pub fn parse(name: String, source: &str) -> Result<Self> {
        let slides: Vec<Slide> = split_slides(source)
            .into_iter()
            .enumerate()
            .map(|(index, body)| Slide::parse(index, &body))
            .collect();

        if slides.is_empty() {
            bail!("Deck contains no slides");
        }

        tracing::debug!(deck = %name, slides = slides.len(), "Loaded deck");
        Ok(Self { name, slides })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

/// Split source into non-empty slide bodies
fn split_slides(source: &str) -> Vec<String> {
    let mut slides = Vec::new();
    let mut current = String::new();
    let mut fence: Option<&str> = None;

    for line in source.lines() {
        let trimmed = line.trim_start();
        match fence {
            Some(marker) if trimmed.starts_with(marker) => fence = None,
            Some(_) => {}
            None if trimmed.starts_with("```") => fence = Some("```"),
            None if trimmed.starts_with("~~~") => fence = Some("~~~"),
            None if line.trim() == "---" => {
                push_slide(&mut slides, &mut current);
                continue;
            }
            None => {}
        }
        current.push_str(line);
        current.push('\n');
    }
    push_slide(&mut slides, &mut current);
    slides
}

fn push_slide(slides: &mut Vec<String>, current: &mut String) {
    let body = current.trim();
    if !body.is_empty() {
        slides.push(body.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = "\
# Welcome

Intro text.

---

## Review prompt

Paste this:

```text
Review the diff.
---
Be terse.
```

---


---

No heading here.
";

    #[test]
    fn splits_on_separators_outside_fences() {
        let deck = Deck::parse("talk.md".to_string(), DECK).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.name(), "talk.md");
        for (i, slide) in deck.slides().iter().enumerate() {
            assert_eq!(slide.index, i);
        }
    }

    #[test]
    fn extracts_title_and_copy_block() {
        let deck = Deck::parse("talk.md".to_string(), DECK).unwrap();
        let slide = deck.get(1).unwrap();
        assert_eq!(slide.title, "Review prompt");
        assert_eq!(
            slide.copy_text.as_deref(),
            Some("Review the diff.\n---\nBe terse.\n")
        );

        let first = deck.get(0).unwrap();
        assert_eq!(first.title, "Welcome");
        assert_eq!(first.copy_text, None);
    }

    #[test]
    fn untitled_slide_gets_numbered_title() {
        let deck = Deck::parse("talk.md".to_string(), DECK).unwrap();
        assert_eq!(deck.get(2).unwrap().title, "Slide 3");
    }

    #[test]
    fn empty_deck_is_an_error() {
        assert!(Deck::parse("empty.md".to_string(), "\n---\n\n---\n").is_err());
    }

    #[test]
    fn builtin_deck_has_nine_prompt_slides() {
        let deck = Deck::builtin().unwrap();
        assert_eq!(deck.len(), 9);
        assert!(deck.slides().iter().all(|s| s.copy_text.is_some()));
    }
}
