//! The badge asset store.
//!
//! Assets are pre-rendered image files laid out on disk as
//! `<dir>/<style>/<slug>.svg` (`.png` also accepted). The full table is
//! read once at startup and is immutable afterwards; requests only ever
//! borrow from it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::status::BuildStatus;
use crate::style::BadgeStyle;

/// Distinct asset file stems. Every [`BuildStatus::badge_slug`] value
/// appears here; the in-progress statuses collapse onto `running`.
const BADGE_SLUGS: [&str; 7] = [
    "passing",
    "failing",
    "unstable",
    "aborted",
    "not-built",
    "disabled",
    "running",
];

/// Supported asset file extensions and their content types, in probe order.
const ASSET_EXTENSIONS: [(&'static str, &'static str); 2] =
    [("svg", "image/svg+xml"), ("png", "image/png")];

/// One pre-rendered badge image.
#[derive(Debug, Clone)]
pub struct BadgeAsset {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Error raised while loading the asset table at startup.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("Failed to read badge asset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The default style is missing an asset, which would leave some
    /// status unservable. The process must not start in this state.
    #[error("No '{slug}' asset for the default '{style}' style under {}", dir.display())]
    MissingAsset {
        dir: PathBuf,
        style: &'static str,
        slug: &'static str,
    },
}

/// Immutable (style, slug) → asset table, shared read-only for the
/// lifetime of the process.
#[derive(Debug)]
pub struct BadgeStore {
    assets: HashMap<(BadgeStyle, &'static str), BadgeAsset>,
}

impl BadgeStore {
    /// Load every style/slug combination from `dir`.
    ///
    /// A missing default-style asset is a load error. A missing asset in
    /// any other style is tolerated; requests for that style fall back to
    /// the default at render time.
    pub fn load_from_dir(dir: &Path) -> Result<Self, BadgeError> {
        let mut assets = HashMap::new();

        for style in BadgeStyle::ALL {
            for slug in BADGE_SLUGS {
                match read_asset(dir, style, slug)? {
                    Some(asset) => {
                        assets.insert((style, slug), asset);
                    }
                    None if style == BadgeStyle::DEFAULT => {
                        return Err(BadgeError::MissingAsset {
                            dir: dir.to_path_buf(),
                            style: style.dir_name(),
                            slug,
                        });
                    }
                    None => {
                        tracing::warn!(
                            style = style.dir_name(),
                            slug,
                            "Badge asset missing; requests will fall back to the default style",
                        );
                    }
                }
            }
        }

        Ok(BadgeStore { assets })
    }

    /// Select the asset for `(status, style)`.
    ///
    /// Falls back to the default style when the requested style has no
    /// asset for this status. `AssetMissing` is only reachable if even
    /// the default-style asset is absent, which a successful
    /// [`BadgeStore::load_from_dir`] rules out.
    pub fn image(&self, status: BuildStatus, style: BadgeStyle) -> Result<&BadgeAsset, CoreError> {
        let slug = status.badge_slug();
        self.assets
            .get(&(style, slug))
            .or_else(|| self.assets.get(&(BadgeStyle::DEFAULT, slug)))
            .ok_or(CoreError::AssetMissing { status })
    }

    /// Number of assets loaded across all styles.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Read one asset, probing extensions in order. `Ok(None)` means no file
/// exists under any supported extension.
fn read_asset(
    dir: &Path,
    style: BadgeStyle,
    slug: &'static str,
) -> Result<Option<BadgeAsset>, BadgeError> {
    for (ext, content_type) in ASSET_EXTENSIONS {
        let path = dir.join(style.dir_name()).join(format!("{slug}.{ext}"));
        match std::fs::read(&path) {
            Ok(bytes) => return Ok(Some(BadgeAsset { bytes, content_type })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => return Err(BadgeError::Io { path, source }),
        }
    }
    Ok(None)
}
