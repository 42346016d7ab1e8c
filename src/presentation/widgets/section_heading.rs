use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{blank, rule, TextBlock, ViewContext};
use crate::domain::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Top of a panel, underlined with a double rule
    Title,
    /// A titled block inside a panel
    Section,
}

/// Eyebrow, title and optional introduction paragraph.
#[derive(Debug, Clone)]
pub struct SectionHeading<'a> {
    pub eyebrow: Option<&'a str>,
    pub title: &'a str,
    pub intro: Option<&'a str>,
    pub level: HeadingLevel,
    pub centered: bool,
}

impl<'a> SectionHeading<'a> {
    pub fn title(title: &'a str) -> Self {
        Self {
            eyebrow: None,
            title,
            intro: None,
            level: HeadingLevel::Title,
            centered: false,
        }
    }

    pub fn section(title: &'a str) -> Self {
        Self {
            level: HeadingLevel::Section,
            ..Self::title(title)
        }
    }

    pub fn eyebrow(mut self, eyebrow: &'a str) -> Self {
        self.eyebrow = Some(eyebrow);
        self
    }

    pub fn intro(mut self, intro: &'a str) -> Self {
        self.intro = Some(intro);
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    fn block(&self, content: String, style_key: &str, ctx: &ViewContext<'_>) -> TextBlock<'static> {
        let block = TextBlock::new(content, ctx.style(style_key));
        if self.centered {
            block.centered()
        } else {
            block
        }
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = vec![];

        if let Some(eyebrow) = self.eyebrow {
            let eyebrow = eyebrow.to_uppercase();
            let content = if self.centered {
                eyebrow
            } else {
                format!("── {eyebrow}")
            };
            lines.extend(self.block(content, "eyebrow", ctx).lines(ctx));
        }

        match self.level {
            HeadingLevel::Title => {
                let title = self.block(self.title.to_string(), "heading", ctx).lines(ctx);
                let underline = self.title.width().min(ctx.width());
                lines.extend(title);
                if underline > 0 {
                    let pad = if self.centered {
                        text::center_offset(&"═".repeat(underline), ctx.width())
                    } else {
                        0
                    };
                    let mut line = rule('═', underline, ctx.style("accent"));
                    if pad > 0 {
                        line.spans.insert(0, Span::raw(" ".repeat(pad)));
                    }
                    lines.push(line);
                }
            }
            HeadingLevel::Section => {
                let content = if self.centered {
                    self.title.to_string()
                } else {
                    format!("◆ {}", self.title)
                };
                lines.extend(self.block(content, "heading", ctx).lines(ctx));
            }
        }

        if let Some(intro) = self.intro {
            lines.push(blank());
            lines.extend(self.block(intro.to_string(), "body", ctx).lines(ctx));
        }

        lines.push(blank());
        lines
    }
}
