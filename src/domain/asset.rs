use std::path::{Path, PathBuf};

/// Where an image referenced by the guide comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    /// File name relative to the configured assets directory
    Local(&'static str),
    Remote(&'static str),
}

/// Outcome of resolving an image for display.
///
/// The guide never decodes images; it only reports whether the asset can be
/// reached so the placeholder can say so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Available(PathBuf),
    Remote { host: String },
    Missing(PathBuf),
}

impl AssetStatus {
    pub fn is_missing(&self) -> bool {
        matches!(self, AssetStatus::Missing(_))
    }
}

impl AssetSource {
    pub fn resolve(&self, assets_dir: &Path) -> AssetStatus {
        match self {
            AssetSource::Local(name) => {
                let path = assets_dir.join(name);
                if path.is_file() {
                    AssetStatus::Available(path)
                } else {
                    AssetStatus::Missing(path)
                }
            }
            AssetSource::Remote(url) => AssetStatus::Remote {
                host: remote_host(url).to_string(),
            },
        }
    }
}

fn remote_host(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(without_scheme)
}
