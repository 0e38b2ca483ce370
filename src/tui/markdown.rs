// Markdown rendering for slide bodies
//
// Uses pulldown-cmark to walk the slide source and produce styled, word-wrapped
// ratatui Lines. Supports: headings, paragraphs, bold, italic, strikethrough,
// inline code, fenced code blocks, nested lists, blockquotes, links, rules.
// Code blocks are never wrapped; the viewport clips them.

use super::theme::Theme;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// One word of a paragraph awaiting wrapping
#[derive(Debug, Clone)]
struct Word {
    text: String,
    style: Style,
    space_before: bool,
}

/// Prefix state for the current list item
#[derive(Debug, Clone)]
struct ItemMarker {
    marker: String,
    consumed: bool,
}

struct Renderer<'t> {
    theme: &'t Theme,
    width: usize,
    lines: Vec<Line<'static>>,

    words: Vec<Word>,
    pending_space: bool,

    bold: bool,
    italic: bool,
    strike: bool,
    link: bool,
    heading: bool,

    in_code_block: bool,
    code: String,

    /// (ordered, next number) per nesting level
    lists: Vec<(bool, u64)>,
    item: Option<ItemMarker>,
    quote_depth: usize,
}

impl<'t> Renderer<'t> {
    fn new(width: usize, theme: &'t Theme) -> Self {
        Self {
            theme,
            width: width.max(1),
            lines: Vec::new(),
            words: Vec::new(),
            pending_space: false,
            bold: false,
            italic: false,
            strike: false,
            link: false,
            heading: false,
            in_code_block: false,
            code: String::new(),
            lists: Vec::new(),
            item: None,
            quote_depth: 0,
        }
    }

    fn inline_style(&self) -> Style {
        if self.heading {
            return self.theme.heading_style();
        }
        let mut style = Style::default().fg(self.theme.fg);
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strike {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if self.link {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }

    fn push_text(&mut self, text: &str, style: Style) {
        if text.starts_with(char::is_whitespace) {
            self.pending_space = true;
        }
        for word in text.split_whitespace() {
            self.words.push(Word {
                text: word.to_string(),
                style,
                space_before: self.pending_space,
            });
            self.pending_space = true;
        }
        self.pending_space = text.ends_with(char::is_whitespace);
    }

    /// Prefix for the first and following lines of the current block
    fn prefixes(&mut self) -> (String, String) {
        let mut base = "│ ".repeat(self.quote_depth);
        if !self.lists.is_empty() {
            base.push_str(&"  ".repeat(self.lists.len() - 1));
        }
        match &mut self.item {
            Some(item) => {
                let pad = " ".repeat(item.marker.width());
                let first = if item.consumed {
                    format!("{base}{pad}")
                } else {
                    item.consumed = true;
                    format!("{base}{}", item.marker)
                };
                (first, format!("{base}{pad}"))
            }
            None => (base.clone(), base),
        }
    }

    /// Wrap the buffered words into lines
    fn flush(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let words = std::mem::take(&mut self.words);
        self.pending_space = false;
        let (first, rest) = self.prefixes();
        let prefix_style = Style::default().fg(self.theme.muted);

        let mut spans = vec![Span::styled(first.clone(), prefix_style)];
        let mut line_width = first.width();
        let mut has_words = false;

        for word in words {
            let word_width = word.text.width();
            let gap = usize::from(has_words && word.space_before);
            if has_words && line_width + gap + word_width > self.width {
                self.lines.push(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::styled(rest.clone(), prefix_style));
                line_width = rest.width();
            } else if gap == 1 {
                spans.push(Span::styled(" ", word.style));
                line_width += 1;
            }
            line_width += word_width;
            spans.push(Span::styled(word.text, word.style));
            has_words = true;
        }
        self.lines.push(Line::from(spans));
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| l.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn code_block(&mut self) {
        let code = std::mem::take(&mut self.code);
        let style = self.theme.code_style();
        for line in code.trim_end_matches('\n').lines() {
            // Pad to full width so the block reads as one surface
            let padded = format!("  {line}");
            let fill = self.width.saturating_sub(padded.width());
            self.lines.push(Line::from(vec![
                Span::styled(padded, style),
                Span::styled(" ".repeat(fill), style),
            ]));
        }
        self.blank();
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                self.flush();
                self.heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush();
                self.heading = false;
                self.blank();
            }
            Event::Start(Tag::Paragraph) => self.flush(),
            Event::End(TagEnd::Paragraph) => {
                self.flush();
                if self.item.is_none() {
                    self.blank();
                }
            }

            Event::Start(Tag::CodeBlock(_)) => {
                self.flush();
                self.in_code_block = true;
                self.code.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.code_block();
            }
            Event::Text(text) if self.in_code_block => self.code.push_str(&text),

            Event::Start(Tag::List(first)) => {
                self.flush();
                self.lists.push((first.is_some(), first.unwrap_or(1)));
            }
            Event::End(TagEnd::List(_)) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.item = None;
                    self.blank();
                }
            }
            Event::Start(Tag::Item) => {
                self.flush();
                let marker = match self.lists.last_mut() {
                    Some((true, number)) => {
                        let marker = format!("{number}. ");
                        *number += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.item = Some(ItemMarker {
                    marker,
                    consumed: false,
                });
            }
            Event::End(TagEnd::Item) => {
                self.flush();
                self.item = None;
            }

            Event::Start(Tag::BlockQuote) => {
                self.flush();
                self.quote_depth += 1;
            }
            Event::End(TagEnd::BlockQuote) => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }

            Event::Start(Tag::Strong) => self.bold = true,
            Event::End(TagEnd::Strong) => self.bold = false,
            Event::Start(Tag::Emphasis) => self.italic = true,
            Event::End(TagEnd::Emphasis) => self.italic = false,
            Event::Start(Tag::Strikethrough) => self.strike = true,
            Event::End(TagEnd::Strikethrough) => self.strike = false,
            Event::Start(Tag::Link { .. }) => self.link = true,
            Event::End(TagEnd::Link) => self.link = false,

            Event::Text(text) => {
                let style = self.inline_style();
                self.push_text(&text, style);
            }
            Event::Code(code) => {
                let style = self.theme.code_style();
                let space_before = self.pending_space;
                self.words.push(Word {
                    text: code.to_string(),
                    style,
                    space_before,
                });
                self.pending_space = false;
            }
            Event::SoftBreak => self.pending_space = true,
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                self.lines.push(Line::styled(
                    "─".repeat(self.width),
                    Style::default().fg(self.theme.muted),
                ));
                self.blank();
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Render slide Markdown into lines no wider than `width` (code blocks excepted)
pub fn render_markdown(markdown: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let options = Options::ENABLE_STRIKETHROUGH;
    let mut renderer = Renderer::new(width, theme);
    for event in Parser::new_ext(markdown, options) {
        renderer.event(event);
    }
    renderer.finish()
}
