use std::cmp::Reverse;

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::ViewContext;
use crate::domain::{brand::ColorSwatch, text};

/// Proportional color bar with percentage labels under each segment.
#[derive(Debug, Clone, Copy)]
pub struct UsageRatio<'a> {
    pub title: &'a str,
    pub entries: &'a [(ColorSwatch, u16)],
}

impl<'a> UsageRatio<'a> {
    pub fn new(title: &'a str, entries: &'a [(ColorSwatch, u16)]) -> Self {
        Self { title, entries }
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let shares: Vec<u16> = self.entries.iter().map(|(_, share)| *share).collect();
        let widths = segment_widths(&shares, ctx.width);

        let mut bar = vec![];
        let mut labels = vec![];
        for ((swatch, share), width) in self.entries.iter().zip(widths) {
            let width = usize::from(width);
            let fill = swatch
                .rgb()
                .map_or_else(Style::default, |color| Style::default().bg(color));
            bar.push(Span::styled(" ".repeat(width), fill));

            let label = text::truncate_text(&format!("{share}%"), width);
            let pad = width - label.width();
            labels.push(Span::styled(
                format!("{label}{}", " ".repeat(pad)),
                ctx.style("muted"),
            ));
        }

        vec![
            Line::styled(self.title.to_uppercase(), ctx.style("label")),
            Line::from(bar),
            Line::from(labels),
        ]
    }
}

/// Splits `width` columns between `shares` proportionally.
///
/// Uses the largest remainder method, so the widths always add up to `width`
/// when any share is non-zero.
pub fn segment_widths(shares: &[u16], width: u16) -> Vec<u16> {
    let total: u32 = shares.iter().map(|&s| u32::from(s)).sum();
    if total == 0 {
        return vec![0; shares.len()];
    }

    let width = u32::from(width);
    let mut widths: Vec<u32> = shares
        .iter()
        .map(|&s| u32::from(s) * width / total)
        .collect();

    let mut order: Vec<usize> = (0..shares.len()).collect();
    // larger remainder first, earlier entry wins ties
    order.sort_by_key(|&i| Reverse(u32::from(shares[i]) * width % total));

    let assigned: u32 = widths.iter().sum();
    for &i in order.iter().take((width - assigned) as usize) {
        widths[i] += 1;
    }

    widths
        .into_iter()
        .map(|w| u16::try_from(w).unwrap_or(u16::MAX))
        .collect()
}
