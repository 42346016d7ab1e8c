use std::path::Path;

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::ViewContext;
use crate::domain::{
    asset::{AssetSource, AssetStatus},
    brand::ImageAsset,
    text,
};

/// Framed stand-in for an image.
///
/// Images are never decoded; the frame shows the alt text and whether the
/// asset could be found. The height is fixed by the caller so a missing file
/// never changes the panel length.
#[derive(Debug, Clone)]
pub struct ImagePlaceholder<'a> {
    pub asset: ImageAsset,
    pub height: u16,
    /// Shown in the top-left corner of the frame
    pub label: Option<&'a str>,
    /// Shown in the top-right corner of the frame
    pub badge: Option<&'a str>,
    /// Logo composited over the image
    pub overlay: Option<AssetSource>,
}

impl<'a> ImagePlaceholder<'a> {
    pub fn new(asset: ImageAsset, height: u16) -> Self {
        Self {
            asset,
            height,
            label: None,
            badge: None,
            overlay: None,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn badge(mut self, badge: &'a str) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn overlay(mut self, overlay: Option<AssetSource>) -> Self {
        self.overlay = overlay;
        self
    }

    /// Single-line description of where the image comes from
    pub fn status_text(status: &AssetStatus) -> String {
        match status {
            AssetStatus::Available(path) => format!("▣ {}", file_name(path)),
            AssetStatus::Remote { host } => format!("⇣ remote image · {host}"),
            AssetStatus::Missing(path) => format!("✗ broken image · {}", file_name(path)),
        }
    }

    pub fn lines(&self, ctx: &ViewContext<'_>) -> Vec<Line<'static>> {
        let height = usize::from(self.height.max(2));
        let width = ctx.width();
        if width < 2 {
            return vec![Line::default(); height];
        }
        let inner = width - 2;
        let frame = ctx.style("placeholder");

        let status = self.asset.source.resolve(ctx.assets_dir);
        let status_style = if status.is_missing() {
            ctx.style("placeholder.missing")
        } else {
            frame
        };

        let mut body: Vec<(String, Style)> = vec![
            (self.asset.alt.to_string(), ctx.style("label")),
            (Self::status_text(&status), status_style),
        ];
        if let Some(overlay) = self.overlay {
            let overlay = overlay.resolve(ctx.assets_dir);
            let style = if overlay.is_missing() {
                ctx.style("placeholder.missing")
            } else {
                frame
            };
            body.push((format!("+ logo {}", Self::status_text(&overlay)), style));
        }

        let rows = height - 2;
        body.truncate(rows);
        let top_pad = (rows - body.len()) / 2;

        let mut lines = Vec::with_capacity(height);
        lines.push(self.top_border(inner, ctx));
        for i in 0..rows {
            let content = i
                .checked_sub(top_pad)
                .and_then(|j| body.get(j))
                .map(|(s, style)| (text::truncate_text(s, inner), *style));
            let line = match content {
                Some((s, style)) => {
                    let left = text::center_offset(&s, inner);
                    let right = inner - left - s.width();
                    Line::from(vec![
                        Span::styled(format!("│{}", " ".repeat(left)), frame),
                        Span::styled(s, style),
                        Span::styled(format!("{}│", " ".repeat(right)), frame),
                    ])
                }
                None => Line::styled(format!("│{}│", " ".repeat(inner)), frame),
            };
            lines.push(line);
        }
        lines.push(Line::styled(format!("└{}┘", "─".repeat(inner)), frame));
        lines
    }

    fn top_border(&self, inner: usize, ctx: &ViewContext<'_>) -> Line<'static> {
        let frame = ctx.style("placeholder");
        let label = self
            .label
            .map(|l| format!(" {} ", l.to_uppercase()))
            .unwrap_or_default();
        let badge = self.badge.map(|b| format!(" {b} ")).unwrap_or_default();

        // drop the badge first, then the label, when the frame is too narrow
        let (label, badge) = if label.width() + badge.width() <= inner {
            (label, badge)
        } else if label.width() <= inner {
            (label, String::new())
        } else {
            (String::new(), String::new())
        };
        let fill = inner - label.width() - badge.width();

        Line::from(vec![
            Span::styled("┌", frame),
            Span::styled(label, ctx.style("eyebrow")),
            Span::styled("─".repeat(fill), frame),
            Span::styled(badge, ctx.style("do")),
            Span::styled("┐", frame),
        ])
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::brand::{LOGO_PRIMARY, LOGO_SECONDARY},
        presentation::{
            config::Styles,
            widgets::{
                test_support::{ctx, plain},
                ViewContext,
            },
        },
    };

    fn local_asset() -> ImageAsset {
        ImageAsset {
            source: LOGO_PRIMARY,
            alt: "Horizontal Logo",
        }
    }

    #[test]
    fn test_missing_asset_is_reported() {
        let styles = Styles::default();
        let lines = ImagePlaceholder::new(local_asset(), 6).lines(&ctx(&styles, 30));
        assert_eq!(
            plain(&lines),
            vec![
                format!("┌{}┐", "─".repeat(28)),
                format!("│{}│", " ".repeat(28)),
                format!("│{}Horizontal Logo{}│", " ".repeat(6), " ".repeat(7)),
                "│ ✗ broken image · side.png  │".to_string(),
                format!("│{}│", " ".repeat(28)),
                format!("└{}┘", "─".repeat(28)),
            ]
        );
    }

    #[test]
    fn test_available_asset() -> std::io::Result<()> {
        let dir = std::env::temp_dir().join(format!("kalavya-placeholder-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("side.png"), b"\x89PNG")?;

        let styles = Styles::default();
        let ctx = ViewContext::new(40, &styles, &dir);
        let lines = plain(&ImagePlaceholder::new(local_asset(), 5).lines(&ctx));
        assert!(lines.iter().any(|l| l.contains("▣ side.png")));
        assert!(!lines.iter().any(|l| l.contains("broken image")));

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_height_does_not_depend_on_status() -> std::io::Result<()> {
        let dir = std::env::temp_dir().join(format!("kalavya-height-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("side.png"), b"\x89PNG")?;

        let styles = Styles::default();
        let found = ViewContext::new(40, &styles, &dir);
        let missing = ViewContext::new(40, &styles, Path::new("/nonexistent-kalavya-assets"));
        let placeholder = ImagePlaceholder::new(local_asset(), 7).overlay(Some(LOGO_SECONDARY));
        assert_eq!(placeholder.lines(&found).len(), 7);
        assert_eq!(placeholder.lines(&missing).len(), 7);

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_label_and_badge() {
        let styles = Styles::default();
        let lines = ImagePlaceholder::new(local_asset(), 3)
            .label("01. Primary")
            .badge("✓ DO")
            .lines(&ctx(&styles, 30));
        assert_eq!(
            plain(&lines)[0],
            format!("┌ 01. PRIMARY {} ✓ DO ┐", "─".repeat(9))
        );

        let lines = ImagePlaceholder::new(local_asset(), 3)
            .label("01. Primary")
            .badge("✓ DO")
            .lines(&ctx(&styles, 18));
        assert_eq!(plain(&lines)[0], "┌ 01. PRIMARY ───┐");
    }

    #[test]
    fn test_remote_status_text() {
        let status = AssetStatus::Remote {
            host: "lh3.googleusercontent.com".to_string(),
        };
        assert_eq!(
            ImagePlaceholder::status_text(&status),
            "⇣ remote image · lh3.googleusercontent.com"
        );
    }

    #[test]
    fn test_too_narrow() {
        let styles = Styles::default();
        let lines = ImagePlaceholder::new(local_asset(), 4).lines(&ctx(&styles, 1));
        assert_eq!(lines.len(), 4);
    }
}
