use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{TextBlock, ViewContext};
use crate::domain::{brand::DontRule, text};

/// Rows of the dashed sample frame
const SAMPLE_HEIGHT: usize = 5;

/// A misuse example inside a dashed frame, followed by the rule it breaks.
#[derive(Debug, Clone, Copy)]
pub struct DontCard<'a> {
    pub rule: &'a DontRule,
}

impl<'a> DontCard<'a> {
    pub fn new(rule: &'a DontRule) -> Self {
        Self { rule }
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let width = ctx.width();
        if width < 4 {
            let mut lines = vec![Line::default(); SAMPLE_HEIGHT];
            lines.extend(TextBlock::new(self.rule.rule, ctx.style("label")).lines(ctx));
            return lines;
        }

        let inner = width - 2;
        let frame = ctx.style("dont");
        let sample = text::truncate_text(self.rule.sample, inner);
        let left = text::center_offset(&sample, inner);
        let right = inner - left - sample.width();

        let mut lines = vec![
            Line::styled(format!("┌{}✗┐", "╌".repeat(inner - 1)), frame),
            Line::styled(format!("╎{}╎", " ".repeat(inner)), frame),
            Line::from(vec![
                Span::styled(format!("╎{}", " ".repeat(left)), frame),
                Span::styled(sample, ctx.style("heading")),
                Span::styled(format!("{}╎", " ".repeat(right)), frame),
            ]),
            Line::styled(format!("╎{}╎", " ".repeat(inner)), frame),
            Line::styled(format!("└{}┘", "╌".repeat(inner)), frame),
        ];
        lines.extend(TextBlock::new(self.rule.rule, ctx.style("label")).lines(ctx));
        lines
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::brand::BRAND_DONTS,
        presentation::{
            config::Styles,
            widgets::test_support::{ctx, plain},
        },
    };

    #[test]
    fn test_dont_card() {
        let styles = Styles::default();
        let lines = plain(&DontCard::new(&BRAND_DONTS[2]).lines(&ctx(&styles, 20)));
        assert_eq!(
            lines,
            vec![
                format!("┌{}✗┐", "╌".repeat(17)),
                format!("╎{}╎", " ".repeat(18)),
                "╎    Bad Shadow    ╎".to_string(),
                format!("╎{}╎", " ".repeat(18)),
                format!("└{}┘", "╌".repeat(18)),
                "Do not use heavy".to_string(),
                "drop shadows on".to_string(),
                "text.".to_string(),
            ]
        );
    }

    #[test]
    fn test_dont_card_too_narrow() {
        let styles = Styles::default();
        let lines = DontCard::new(&BRAND_DONTS[0]).lines(&ctx(&styles, 3));
        assert!(lines.len() >= SAMPLE_HEIGHT);
    }
}
