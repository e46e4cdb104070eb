//! Viewport-profile classification of the requesting device.
//!
//! The profile is derived from the `Viewport` context: shape, orientation of
//! the current pixel size, the density group of the dpi, and the size group of
//! each dimension. Profiles are checked in a fixed order and the first match
//! wins; anything else is `UnknownViewportProfile`.

use serde::{Deserialize, Serialize};

use crate::envelope::request::{RequestEnvelope, Shape, ViewportState};

/// Interface key advertised by APL-capable devices.
pub const APL_INTERFACE: &str = "Alexa.Presentation.APL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewportProfile {
    HubRoundSmall,
    HubLandscapeSmall,
    HubLandscapeMedium,
    HubLandscapeLarge,
    MobileLandscapeSmall,
    MobilePortraitSmall,
    MobileLandscapeMedium,
    MobilePortraitMedium,
    TvLandscapeXlarge,
    TvPortraitMedium,
    TvLandscapeMedium,
    UnknownViewportProfile,
}

impl ViewportProfile {
    /// Wire name, e.g. `HUB_LANDSCAPE_LARGE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HubRoundSmall => "HUB_ROUND_SMALL",
            Self::HubLandscapeSmall => "HUB_LANDSCAPE_SMALL",
            Self::HubLandscapeMedium => "HUB_LANDSCAPE_MEDIUM",
            Self::HubLandscapeLarge => "HUB_LANDSCAPE_LARGE",
            Self::MobileLandscapeSmall => "MOBILE_LANDSCAPE_SMALL",
            Self::MobilePortraitSmall => "MOBILE_PORTRAIT_SMALL",
            Self::MobileLandscapeMedium => "MOBILE_LANDSCAPE_MEDIUM",
            Self::MobilePortraitMedium => "MOBILE_PORTRAIT_MEDIUM",
            Self::TvLandscapeXlarge => "TV_LANDSCAPE_XLARGE",
            Self::TvPortraitMedium => "TV_PORTRAIT_MEDIUM",
            Self::TvLandscapeMedium => "TV_LANDSCAPE_MEDIUM",
            Self::UnknownViewportProfile => "UNKNOWN_VIEWPORT_PROFILE",
        }
    }
}

impl std::fmt::Display for ViewportProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Equal,
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Density {
    XLow,
    Low,
    Medium,
    High,
    XHigh,
    XxHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Size {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
}

pub fn orientation(width: u32, height: u32) -> Orientation {
    match width.cmp(&height) {
        std::cmp::Ordering::Greater => Orientation::Landscape,
        std::cmp::Ordering::Less => Orientation::Portrait,
        std::cmp::Ordering::Equal => Orientation::Equal,
    }
}

pub fn density(dpi: u32) -> Density {
    match dpi {
        0..=120 => Density::XLow,
        121..=160 => Density::Low,
        161..=240 => Density::Medium,
        241..=320 => Density::High,
        321..=480 => Density::XHigh,
        _ => Density::XxHigh,
    }
}

pub fn size(pixels: u32) -> Size {
    match pixels {
        0..600 => Size::XSmall,
        600..960 => Size::Small,
        960..1280 => Size::Medium,
        1280..1920 => Size::Large,
        _ => Size::XLarge,
    }
}

/// Classify a viewport state.
pub fn classify(viewport: &ViewportState) -> ViewportProfile {
    use Orientation::{Equal, Landscape, Portrait};
    use ViewportProfile::*;

    let rect = viewport.shape == Shape::Rectangle;
    let o = orientation(viewport.current_pixel_width, viewport.current_pixel_height);
    let d = density(viewport.dpi);
    let w = size(viewport.current_pixel_width);
    let h = size(viewport.current_pixel_height);

    if viewport.shape == Shape::Round
        && o == Equal
        && d == Density::Low
        && w == Size::XSmall
        && h == Size::XSmall
    {
        HubRoundSmall
    } else if rect && o == Landscape && d == Density::Low && w <= Size::Medium && h <= Size::XSmall {
        HubLandscapeSmall
    } else if rect && o == Landscape && d == Density::Low && w <= Size::Medium && h <= Size::Small {
        HubLandscapeMedium
    } else if rect && o == Landscape && d == Density::Low && w >= Size::Large && h >= Size::Small {
        HubLandscapeLarge
    } else if rect && o == Landscape && d == Density::Medium && w >= Size::Medium && h >= Size::Small
    {
        MobileLandscapeMedium
    } else if rect && o == Portrait && d == Density::Medium && w >= Size::Small && h >= Size::Medium
    {
        MobilePortraitMedium
    } else if rect && o == Landscape && d == Density::Medium && w >= Size::Small && h >= Size::XSmall
    {
        MobileLandscapeSmall
    } else if rect && o == Portrait && d == Density::Medium && w >= Size::XSmall && h >= Size::Small
    {
        MobilePortraitSmall
    } else if rect && o == Landscape && d >= Density::High && w >= Size::XLarge && h >= Size::Medium
    {
        TvLandscapeXlarge
    } else if rect && o == Portrait && d >= Density::High && w == Size::XSmall && h == Size::XLarge {
        TvPortraitMedium
    } else if rect && o == Landscape && d >= Density::High && w == Size::Medium && h == Size::Small {
        TvLandscapeMedium
    } else {
        UnknownViewportProfile
    }
}

/// Viewport profile of the device that sent `envelope`.
pub fn viewport_profile(envelope: &RequestEnvelope) -> ViewportProfile {
    envelope
        .context
        .viewport
        .as_ref()
        .map(classify)
        .unwrap_or(ViewportProfile::UnknownViewportProfile)
}

/// Whether the requesting device can render APL documents.
pub fn supports_apl(envelope: &RequestEnvelope) -> bool {
    envelope
        .context
        .system
        .as_ref()
        .and_then(|s| s.device.as_ref())
        .is_some_and(|d| d.supported_interfaces.contains_key(APL_INTERFACE))
}
