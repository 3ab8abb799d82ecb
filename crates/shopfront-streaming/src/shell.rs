//! Document shell: everything before and after the streamed sections.

use std::fmt::Write;

use crate::escape::escape_html;

/// A tag in `<head>`, rendered in insertion order after the title.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HeadTag {
    Meta { name: String, content: String },
    Canonical(String),
    /// Trusted CSS, emitted as is.
    Style(String),
}

/// `<head>` contents. Text values are escaped on render.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    title: String,
    tags: Vec<HeadTag>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Add `<meta name content>`; empty content adds nothing.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        if !content.is_empty() {
            self.tags.push(HeadTag::Meta {
                name: name.to_string(),
                content: content.to_string(),
            });
        }
        self
    }

    pub fn with_canonical(mut self, href: impl Into<String>) -> Self {
        self.tags.push(HeadTag::Canonical(href.into()));
        self
    }

    pub fn with_style(mut self, css: &str) -> Self {
        self.tags.push(HeadTag::Style(css.to_string()));
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.title));

        for tag in &self.tags {
            let _ = match tag {
                HeadTag::Meta { name, content } => writeln!(
                    html,
                    "<meta name=\"{}\" content=\"{}\">",
                    escape_html(name),
                    escape_html(content)
                ),
                HeadTag::Canonical(href) => writeln!(
                    html,
                    "<link rel=\"canonical\" href=\"{}\">",
                    escape_html(href)
                ),
                HeadTag::Style(css) => writeln!(html, "<style>{}</style>", css),
            };
        }
        html
    }
}

/// The page around the sections: doctype and head, then `body_start`
/// before the first section and `body_end` after the last.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    pub body_start: String,
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Everything up to the first section.
    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{}</head>\n{}",
            self.head.render(),
            self.body_start
        )
    }

    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}
