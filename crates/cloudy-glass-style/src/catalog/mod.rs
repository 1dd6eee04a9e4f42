//! The preset catalog.
//!
//! Every entry is literal data: exact colors, opacities and radii. Light and
//! dark variants that share structure are produced by a generation rule (see
//! the iOS material tiers), but no value is computed from another.
//!
//! Whether an id has a dark variant is declared per id through
//! [`DarkSupport`]. There is no implicit fallback: a dark request for an id
//! declaring [`DarkSupport::None`] is an error.

mod apple;
mod microsoft;
mod noise;

pub use noise::NOISE_TILE;

use cloudy_glass_core::StyleDescriptor;
use cloudy_glass_core::logging::targets;

use crate::error::{Error, Result};
use crate::id::{ColorMode, StyleId};

/// How an id behaves when the dark variant is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DarkSupport {
    /// The id has its own dark entry.
    Distinct,
    /// The dark entry is declared to be identical to the light one.
    AliasesLight,
    /// The id has no dark entry.
    None,
}

impl DarkSupport {
    /// Whether a dark request for this id resolves.
    pub fn has_dark(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Construction rule for one catalog id.
struct Entry {
    light: fn() -> StyleDescriptor,
    dark: Dark,
}

enum Dark {
    Distinct(fn() -> StyleDescriptor),
    AliasesLight,
    None,
}

fn entry(id: StyleId) -> Entry {
    use Dark::{AliasesLight, Distinct};

    let (light, dark): (fn() -> StyleDescriptor, Dark) = match id {
        StyleId::Ultrathin => (apple::ultrathin_light, Distinct(apple::ultrathin_dark)),
        StyleId::Thin => (apple::thin_light, Distinct(apple::thin_dark)),
        StyleId::Regular => (apple::regular_light, Distinct(apple::regular_dark)),
        StyleId::Thick => (apple::thick_light, Distinct(apple::thick_dark)),
        StyleId::Chrome => (apple::chrome_light, Distinct(apple::chrome_dark)),
        StyleId::VisionOs => (apple::vision_os, AliasesLight),
        StyleId::TvOs => (apple::tv_os_light, Distinct(apple::tv_os_dark)),
        StyleId::MacOs => (apple::mac_os_light, Distinct(apple::mac_os_dark)),
        StyleId::AcrylicThin => (microsoft::acrylic_thin, Dark::None),
        StyleId::AcrylicBase => (microsoft::acrylic_base, Dark::None),
        StyleId::Mica => (microsoft::mica, Dark::None),
        StyleId::Aero => (microsoft::aero, Dark::None),
    };

    Entry { light, dark }
}

/// Immutable table from `(StyleId, ColorMode)` to descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Build the descriptor for `id` in `mode`.
    ///
    /// Image paints in the returned descriptor are still
    /// [`ImageSource::Embedded`](cloudy_glass_core::ImageSource::Embedded);
    /// use [`PresetResolver`](crate::resolve::PresetResolver) to get a
    /// descriptor ready for application.
    pub fn descriptor(id: StyleId, mode: ColorMode) -> Result<StyleDescriptor> {
        let entry = entry(id);
        let build = match (mode, entry.dark) {
            (ColorMode::Light, _) | (ColorMode::Dark, Dark::AliasesLight) => entry.light,
            (ColorMode::Dark, Dark::Distinct(dark)) => dark,
            (ColorMode::Dark, Dark::None) => {
                tracing::debug!(target: targets::CATALOG, %id, "no dark entry");
                return Err(Error::unknown_style(id, mode));
            }
        };
        Ok(build())
    }

    /// Declared dark-mode support for `id`.
    pub fn dark_support(id: StyleId) -> DarkSupport {
        match entry(id).dark {
            Dark::Distinct(_) => DarkSupport::Distinct,
            Dark::AliasesLight => DarkSupport::AliasesLight,
            Dark::None => DarkSupport::None,
        }
    }

    /// Iterate over every `(id, mode)` pair the catalog resolves.
    pub fn entries() -> impl Iterator<Item = (StyleId, ColorMode)> {
        StyleId::ALL.into_iter().flat_map(|id| {
            let dark = Self::dark_support(id).has_dark().then_some((id, ColorMode::Dark));
            std::iter::once((id, ColorMode::Light)).chain(dark)
        })
    }
}
