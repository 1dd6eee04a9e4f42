//! Style identifiers and color modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Color mode a preset is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Map the UI's `isDarkMode` flag onto a mode.
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Check if this is the dark mode.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Identifier of a preset family in the catalog.
///
/// The set is closed: every id has a light entry, and the catalog declares
/// separately which ids have a dark one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleId {
    Ultrathin,
    Thin,
    Regular,
    Thick,
    Chrome,
    #[serde(rename = "visionOS")]
    VisionOs,
    #[serde(rename = "tvOS")]
    TvOs,
    #[serde(rename = "macOS")]
    MacOs,
    AcrylicThin,
    AcrylicBase,
    #[serde(alias = "MICA")]
    Mica,
    Aero,
}

impl StyleId {
    /// Every id in catalog order.
    pub const ALL: [StyleId; 12] = [
        Self::Ultrathin,
        Self::Thin,
        Self::Regular,
        Self::Thick,
        Self::Chrome,
        Self::VisionOs,
        Self::TvOs,
        Self::MacOs,
        Self::AcrylicThin,
        Self::AcrylicBase,
        Self::Mica,
        Self::Aero,
    ];

    /// The name the UI uses for this id.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ultrathin => "Ultrathin",
            Self::Thin => "Thin",
            Self::Regular => "Regular",
            Self::Thick => "Thick",
            Self::Chrome => "Chrome",
            Self::VisionOs => "visionOS",
            Self::TvOs => "tvOS",
            Self::MacOs => "macOS",
            Self::AcrylicThin => "AcrylicThin",
            Self::AcrylicBase => "AcrylicBase",
            Self::Mica => "Mica",
            Self::Aero => "Aero",
        }
    }

    /// Whether the catalog has an entry for this id in `mode`.
    pub fn supports(self, mode: ColorMode) -> bool {
        match mode {
            ColorMode::Light => true,
            ColorMode::Dark => crate::catalog::Catalog::dark_support(self).has_dark(),
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "MICA" {
            return Ok(Self::Mica);
        }
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| Error::UnknownStyleName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for id in StyleId::ALL {
            assert_eq!(id.name().parse::<StyleId>().ok(), Some(id));
        }
    }

    #[test]
    fn mica_accepts_upper_case_alias() {
        assert_eq!("MICA".parse::<StyleId>().ok(), Some(StyleId::Mica));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Frosted".parse::<StyleId>().unwrap_err();
        assert!(matches!(err, Error::UnknownStyleName(ref name) if name == "Frosted"));
    }

    #[test]
    fn dark_flag_maps_to_mode() {
        assert_eq!(ColorMode::from_dark_flag(true), ColorMode::Dark);
        assert_eq!(ColorMode::from_dark_flag(false), ColorMode::Light);
        assert!(!ColorMode::default().is_dark());
    }

    #[test]
    fn light_is_always_supported() {
        assert!(StyleId::ALL.iter().all(|id| id.supports(ColorMode::Light)));
        assert!(!StyleId::Aero.supports(ColorMode::Dark));
        assert!(StyleId::Thin.supports(ColorMode::Dark));
        assert!(StyleId::VisionOs.supports(ColorMode::Dark));
    }
}
