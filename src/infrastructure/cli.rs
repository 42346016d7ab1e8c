use std::path::PathBuf;

use clap::Parser;

use crate::core::state::Section;
use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "SECTION",
        help = "Section to open first: strategy, logo, typography or mockups"
    )]
    pub section: Option<Section>,

    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Directory holding the logo files (overrides the config)"
    )]
    pub assets_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() -> color_eyre::Result<()> {
        let cli = Cli::try_parse_from(["kalavya"])?;
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 60.0);
        assert_eq!(cli.section, None);
        assert_eq!(cli.assets_dir, None);
        Ok(())
    }

    #[test]
    fn test_section_and_assets_dir() -> color_eyre::Result<()> {
        let cli = Cli::try_parse_from(["kalavya", "--section", "Typography", "-a", "/tmp/brand"])?;
        assert_eq!(cli.section, Some(Section::Typography));
        assert_eq!(cli.assets_dir, Some(PathBuf::from("/tmp/brand")));
        Ok(())
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(Cli::try_parse_from(["kalavya", "--section", "footer"]).is_err());
    }
}
