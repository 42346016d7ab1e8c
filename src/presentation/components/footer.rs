use ratatui::text::{Line, Span};

use crate::{
    domain::brand,
    presentation::{
        layout::LOGO_TEXT,
        widgets::{blank, rule, TextBlock, ViewContext},
    },
};

/// Closing lines appended under every panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Footer;

impl Footer {
    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let mut lines = vec![
            blank(),
            rule('─', ctx.width(), ctx.style("muted")),
            Line::from(vec![
                Span::styled(LOGO_TEXT, ctx.style("brand")),
                Span::styled(" │ ", ctx.style("muted")),
                Span::styled(brand::FOOTER_TAGLINE.to_uppercase(), ctx.style("muted")),
            ]),
        ];
        lines.extend(TextBlock::new(brand::FOOTER_COPYRIGHT, ctx.style("body")).lines(ctx));
        lines.extend(TextBlock::new(brand::FOOTER_UPDATED, ctx.style("muted")).lines(ctx));
        lines.push(blank());
        lines
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::{
        config::Styles,
        widgets::test_support::{ctx, plain},
    };

    #[test]
    fn test_footer() {
        let styles = Styles::default();
        let lines = plain(&Footer.lines(&ctx(&styles, 60)));
        assert_eq!(
            lines,
            vec![
                String::new(),
                "─".repeat(60),
                "❖ KALAVYA.CO │ INTERNAL BRAND DOCUMENT".to_string(),
                "© 2023 Kalavya.Co. Confidential.".to_string(),
                "Last Updated: October 2023".to_string(),
                String::new(),
            ]
        );
    }
}
