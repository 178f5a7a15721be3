//! Visual configuration.

use std::{fmt, str::FromStr};

use centerbar_unit::{Dip, Factor, Length, Px, PxSize, Rgba};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Default track color, `#CECECE`.
pub const DEFAULT_TRACK_COLOR: Rgba = Rgba::rgb(0xCE, 0xCE, 0xCE);
/// Default progress segment color, `#33B5E5`.
pub const DEFAULT_TRACK_PROGRESS_COLOR: Rgba = Rgba::rgb(0x33, 0xB5, 0xE5);
/// Default thumb color.
pub const DEFAULT_THUMB_COLOR: Rgba = DEFAULT_TRACK_PROGRESS_COLOR;
/// Default pressed thumb color.
pub const DEFAULT_THUMB_PRESSED_COLOR: Rgba = DEFAULT_TRACK_PROGRESS_COLOR;

/// Default minimum value.
pub const DEFAULT_MIN_VALUE: f64 = -100.0;
/// Default maximum value.
pub const DEFAULT_MAX_VALUE: f64 = 100.0;
/// Default initial progress.
pub const DEFAULT_PROGRESS_VALUE: f64 = 0.0;

/// Reference thumb width.
pub const DEFAULT_WIDTH: Dip = Dip(28.0);
/// Default track height.
pub const DEFAULT_TRACK_HEIGHT: Dip = Dip(2.0);
/// Default thumb radius.
pub const DEFAULT_THUMB_RADIUS: Dip = Dip(6.0);
/// Default pressed thumb radius.
pub const DEFAULT_THUMB_PRESSED_RADIUS: Dip = Dip(7.0);

/// Preferred widget width.
pub const PREFERRED_WIDTH: Px = Px(200.0);
/// Extra height added around thumb images.
pub const IMAGE_EXTRA_HEIGHT: Px = Px(12.0);

/// Opaque thumb image handle.
///
/// The widget only needs the intrinsic size, decoding and drawing pixels is the host job. Parses
/// from `"source@WxH"`, for example `"thumb.png@24x24"`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbImage {
    /// Host defined image key.
    pub source: String,
    /// Intrinsic width.
    pub width: Px,
    /// Intrinsic height.
    pub height: Px,
}
impl ThumbImage {
    /// New image handle.
    pub fn new(source: impl Into<String>, width: Px, height: Px) -> Self {
        Self {
            source: source.into(),
            width,
            height,
        }
    }

    /// Intrinsic size.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }
}
impl fmt::Debug for ThumbImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThumbImage({self})")
    }
}
impl fmt::Display for ThumbImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}x{}", self.source, self.width.0, self.height.0)
    }
}
impl FromStr for ThumbImage {
    type Err = ParseImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, size) = s.trim().rsplit_once('@').ok_or(ParseImageError::MissingSize)?;
        if source.is_empty() {
            return Err(ParseImageError::MissingSource);
        }
        let (w, h) = size.split_once(['x', 'X']).ok_or(ParseImageError::MissingSize)?;
        let w: f32 = w.trim().parse().map_err(|_| ParseImageError::InvalidSize)?;
        let h: f32 = h.trim().parse().map_err(|_| ParseImageError::InvalidSize)?;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ParseImageError::InvalidSize);
        }
        Ok(ThumbImage::new(source, Px(w), Px(h)))
    }
}

/// An error which can be returned when parsing a [`ThumbImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseImageError {
    /// No source before the `@`.
    MissingSource,
    /// No `@WxH` suffix.
    MissingSize,
    /// Size is not two positive numbers.
    InvalidSize,
}
impl fmt::Display for ParseImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseImageError::MissingSource => write!(f, "missing image source"),
            ParseImageError::MissingSize => write!(f, "missing image size, expected `source@WxH`"),
            ParseImageError::InvalidSize => write!(f, "invalid image size"),
        }
    }
}
impl std::error::Error for ParseImageError {}

/// Normal and pressed thumb images.
///
/// When set the images replace the thumb circle.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbImages {
    /// Image drawn when the thumb is not pressed.
    pub normal: ThumbImage,
    /// Image drawn while the thumb is pressed.
    pub pressed: ThumbImage,
}

/// Seek bar visual options.
///
/// Dimensions are [`Length`] values, usually in dip, resolved once at construction into a
/// [`ResolvedStyle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeekBarStyle {
    /// Track color.
    #[serde(alias = "defaultBackgroundColor")]
    pub track_color: Rgba,
    /// Progress segment color.
    #[serde(alias = "defaultBackgroundRangeColor")]
    pub track_progress_color: Rgba,
    /// Thumb circle color.
    pub thumb_color: Rgba,
    /// Thumb circle color while pressed.
    pub thumb_pressed_color: Rgba,
    /// Round the track and progress ends.
    pub track_rounded_corners: bool,
    /// Track thickness.
    pub track_height: Length,
    /// Thumb circle radius.
    pub thumb_radius: Length,
    /// Thumb circle radius while pressed.
    pub thumb_pressed_radius: Length,
    /// Thumb image, must be set together with `thumb_pressed_drawable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_drawable: Option<ThumbImage>,
    /// Pressed thumb image, must be set together with `thumb_drawable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_pressed_drawable: Option<ThumbImage>,
}
impl Default for SeekBarStyle {
    fn default() -> Self {
        Self {
            track_color: DEFAULT_TRACK_COLOR,
            track_progress_color: DEFAULT_TRACK_PROGRESS_COLOR,
            thumb_color: DEFAULT_THUMB_COLOR,
            thumb_pressed_color: DEFAULT_THUMB_PRESSED_COLOR,
            track_rounded_corners: false,
            track_height: DEFAULT_TRACK_HEIGHT.into(),
            thumb_radius: DEFAULT_THUMB_RADIUS.into(),
            thumb_pressed_radius: DEFAULT_THUMB_PRESSED_RADIUS.into(),
            thumb_drawable: None,
            thumb_pressed_drawable: None,
        }
    }
}
impl SeekBarStyle {
    /// Validate the image pair.
    pub fn thumb_images(&self) -> Result<Option<ThumbImages>, ConfigError> {
        match (&self.thumb_drawable, &self.thumb_pressed_drawable) {
            (Some(n), Some(p)) => Ok(Some(ThumbImages {
                normal: n.clone(),
                pressed: p.clone(),
            })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ConfigError::UnpairedImage { missing: "thumbPressedDrawable" }),
            (None, Some(_)) => Err(ConfigError::UnpairedImage { missing: "thumbDrawable" }),
        }
    }

    /// Resolve dimensions to layout pixels.
    pub fn resolve(&self, scale_factor: Factor) -> Result<ResolvedStyle, ConfigError> {
        let images = self.thumb_images()?;
        Ok(ResolvedStyle {
            track_color: self.track_color,
            track_progress_color: self.track_progress_color,
            thumb_color: self.thumb_color,
            thumb_pressed_color: self.thumb_pressed_color,
            track_rounded_corners: self.track_rounded_corners,
            track_height: self.track_height.to_px(scale_factor).max(Px::ZERO),
            thumb_radius: self.thumb_radius.to_px(scale_factor).max(Px::ZERO),
            thumb_pressed_radius: self.thumb_pressed_radius.to_px(scale_factor).max(Px::ZERO),
            images,
        })
    }
}

/// [`SeekBarStyle`] with every dimension in layout pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// Track color.
    pub track_color: Rgba,
    /// Progress segment color.
    pub track_progress_color: Rgba,
    /// Thumb circle color.
    pub thumb_color: Rgba,
    /// Thumb circle color while pressed.
    pub thumb_pressed_color: Rgba,
    /// Round the track and progress ends.
    pub track_rounded_corners: bool,
    /// Track thickness.
    pub track_height: Px,
    /// Thumb circle radius.
    pub thumb_radius: Px,
    /// Thumb circle radius while pressed.
    pub thumb_pressed_radius: Px,
    /// Image pair that replaces the thumb circle.
    pub images: Option<ThumbImages>,
}
impl ResolvedStyle {
    /// Inset at each end of the track, half the thumb so it is never clipped at the ends.
    pub fn padding(&self) -> Px {
        match &self.images {
            Some(i) => i.normal.width / 2.0,
            None => self.thumb_radius.max(self.thumb_pressed_radius),
        }
    }

    /// Horizontal distance from the thumb center that still presses it.
    pub fn hit_radius(&self) -> Px {
        match &self.images {
            Some(i) => i.normal.width / 2.0,
            None => self.thumb_radius,
        }
    }

    /// Size the widget wants when unconstrained.
    pub fn preferred_size(&self) -> PxSize {
        let height = match &self.images {
            Some(i) => i.normal.height.max(i.pressed.height) + IMAGE_EXTRA_HEIGHT,
            None => self.thumb_radius.max(self.thumb_pressed_radius) * 2.0 + self.padding() / 4.0,
        };
        PxSize::new(PREFERRED_WIDTH, height)
    }
}

#[cfg(test)]
mod tests {
    use centerbar_unit::FactorUnits;

    use super::*;

    #[test]
    fn defaults_resolve_with_scale() {
        let s = SeekBarStyle::default().resolve(2.fct()).unwrap();
        assert_eq!(Px(4.0), s.track_height);
        assert_eq!(Px(12.0), s.thumb_radius);
        assert_eq!(Px(14.0), s.thumb_pressed_radius);
        assert_eq!(Px(14.0), s.padding());
        assert_eq!(Px(12.0), s.hit_radius());
        assert_eq!(PxSize::new(Px(200.0), Px(31.5)), s.preferred_size());
    }

    #[test]
    fn px_lengths_are_not_scaled() {
        let style = SeekBarStyle {
            thumb_radius: Length::Px(Px(10.0)),
            ..Default::default()
        };
        let s = style.resolve(3.fct()).unwrap();
        assert_eq!(Px(10.0), s.thumb_radius);
        assert_eq!(Px(21.0), s.thumb_pressed_radius);
    }

    #[test]
    fn image_geometry() {
        let style = SeekBarStyle {
            thumb_drawable: Some(ThumbImage::new("n", Px(24.0), Px(20.0))),
            thumb_pressed_drawable: Some(ThumbImage::new("p", Px(24.0), Px(22.0))),
            ..Default::default()
        };
        let s = style.resolve(1.fct()).unwrap();
        assert_eq!(Px(12.0), s.padding());
        assert_eq!(Px(12.0), s.hit_radius());
        assert_eq!(Px(34.0), s.preferred_size().height);
    }

    #[test]
    fn unpaired_image() {
        let style = SeekBarStyle {
            thumb_drawable: Some(ThumbImage::new("n", Px(24.0), Px(24.0))),
            ..Default::default()
        };
        assert!(matches!(
            style.resolve(1.fct()),
            Err(ConfigError::UnpairedImage {
                missing: "thumbPressedDrawable"
            })
        ));
    }

    #[test]
    fn parse_image() {
        let i: ThumbImage = "res/thumb.png@24x20".parse().unwrap();
        assert_eq!(ThumbImage::new("res/thumb.png", Px(24.0), Px(20.0)), i);
        assert_eq!("res/thumb.png@24x20", i.to_string());

        assert_eq!(Err(ParseImageError::MissingSize), "thumb.png".parse::<ThumbImage>());
        assert_eq!(Err(ParseImageError::MissingSource), "@2x2".parse::<ThumbImage>());
        assert_eq!(Err(ParseImageError::InvalidSize), "a@0x2".parse::<ThumbImage>());
        assert_eq!(Err(ParseImageError::InvalidSize), "a@ax2".parse::<ThumbImage>());
    }
}
