//! Construction-time configuration.
//!
//! Configs deserialize from JSON, from TOML with the `"toml"` feature, or from a set of
//! `(key, value)` string attributes like the ones a markup layout provides. Field names are
//! camelCase in every format.

use std::{
    fmt,
    num::ParseFloatError,
    str::{FromStr, ParseBoolError},
};

use centerbar_unit::{Dip, Factor, Length, Px, ParseColorError, Rgba};
use serde::{Deserialize, Serialize};

use crate::{
    seek_bar::ProgressError,
    style::{ParseImageError, SeekBarStyle, ThumbImage, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_PROGRESS_VALUE},
};

/// Default touch slop.
pub const DEFAULT_TOUCH_SLOP: Dip = Dip(8.0);

/// Platform touch tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TouchConfig {
    /// Minimum pointer movement before a thumb press becomes a drag.
    pub touch_slop: Dip,
}
impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }
}
impl TouchConfig {
    /// Touch slop in layout pixels.
    pub fn touch_slop_px(&self, scale_factor: Factor) -> Px {
        self.touch_slop.to_px(scale_factor)
    }
}

/// Configuration of a [`CenterSeekBar`].
///
/// [`CenterSeekBar`]: crate::CenterSeekBar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeekBarConfig {
    /// Value at the left end.
    pub min_value: f64,
    /// Value at the right end.
    pub max_value: f64,
    /// Initial value, must be in `[min_value, max_value]`.
    pub progress: f64,
    /// Visuals.
    #[serde(flatten)]
    pub style: SeekBarStyle,
}
impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            progress: DEFAULT_PROGRESS_VALUE,
            style: SeekBarStyle::default(),
        }
    }
}
impl SeekBarConfig {
    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize from TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from string attributes.
    ///
    /// Unknown keys are logged and ignored.
    pub fn from_attributes<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut r = Self::default();
        for (key, value) in attributes {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "minValue" => r.min_value = parse_number(key, value)?,
                "maxValue" => r.max_value = parse_number(key, value)?,
                "progress" => r.progress = parse_number(key, value)?,
                _ => {
                    if !apply_style_attribute(&mut r.style, key, value)? {
                        tracing::warn!("unknown seek bar attribute `{key}`");
                    }
                }
            }
        }
        Ok(r)
    }
}

/// Configuration of a [`RangeSeekBar`].
///
/// [`RangeSeekBar`]: crate::RangeSeekBar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeSeekBarConfig {
    /// Value reported at the left end, usually negative.
    pub from_value: f64,
    /// Value reported at the right end.
    pub to_value: f64,
    /// Initial value left of zero, in the `from_value` scale.
    pub from_progress: f64,
    /// Initial value right of zero, in the `to_value` scale, takes precedence over `from_progress`.
    pub to_progress: f64,
    /// Visuals.
    #[serde(flatten)]
    pub style: SeekBarStyle,
}
impl Default for RangeSeekBarConfig {
    fn default() -> Self {
        Self {
            from_value: DEFAULT_MIN_VALUE,
            to_value: DEFAULT_MAX_VALUE,
            from_progress: DEFAULT_PROGRESS_VALUE,
            to_progress: DEFAULT_PROGRESS_VALUE,
            style: SeekBarStyle::default(),
        }
    }
}
impl RangeSeekBarConfig {
    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize from TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from string attributes.
    ///
    /// Unknown keys are logged and ignored.
    pub fn from_attributes<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut r = Self::default();
        for (key, value) in attributes {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "fromValue" => r.from_value = parse_number(key, value)?,
                "toValue" => r.to_value = parse_number(key, value)?,
                "fromProgress" => r.from_progress = parse_number(key, value)?,
                "toProgress" => r.to_progress = parse_number(key, value)?,
                _ => {
                    if !apply_style_attribute(&mut r.style, key, value)? {
                        tracing::warn!("unknown range seek bar attribute `{key}`");
                    }
                }
            }
        }
        Ok(r)
    }
}

/// Returns `false` if the `key` is not a style attribute.
fn apply_style_attribute(style: &mut SeekBarStyle, key: &str, value: &str) -> Result<bool, ConfigError> {
    match key {
        "thumbDrawable" => style.thumb_drawable = Some(parse_image(key, value)?),
        "thumbPressedDrawable" => style.thumb_pressed_drawable = Some(parse_image(key, value)?),
        "defaultBackgroundColor" | "trackColor" => style.track_color = parse_color(key, value)?,
        "defaultBackgroundRangeColor" | "trackProgressColor" => style.track_progress_color = parse_color(key, value)?,
        "thumbColor" => style.thumb_color = parse_color(key, value)?,
        "thumbPressedColor" => style.thumb_pressed_color = parse_color(key, value)?,
        "trackRoundedCorners" => {
            style.track_rounded_corners = bool::from_str(value.trim()).map_err(|source| ConfigError::Bool { key: key.to_owned(), source })?
        }
        "trackHeight" => style.track_height = parse_dimension(key, value)?,
        "thumbRadius" => style.thumb_radius = parse_dimension(key, value)?,
        "thumbPressedRadius" => style.thumb_pressed_radius = parse_dimension(key, value)?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse().map_err(|source| ConfigError::Number { key: key.to_owned(), source })
}

fn parse_color(key: &str, value: &str) -> Result<Rgba, ConfigError> {
    value.parse().map_err(|source| ConfigError::Color { key: key.to_owned(), source })
}

fn parse_dimension(key: &str, value: &str) -> Result<Length, ConfigError> {
    value.parse().map_err(|source| ConfigError::Dimension { key: key.to_owned(), source })
}

fn parse_image(key: &str, value: &str) -> Result<ThumbImage, ConfigError> {
    value.parse().map_err(|source| ConfigError::Image { key: key.to_owned(), source })
}

/// Error loading a seek bar configuration.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// Only one of the two thumb images is set.
    UnpairedImage {
        /// Name of the image attribute that is missing.
        missing: &'static str,
    },
    /// Attribute is not a color.
    Color {
        /// Attribute name.
        key: String,
        /// Parse error.
        source: ParseColorError,
    },
    /// Attribute is not a number.
    Number {
        /// Attribute name.
        key: String,
        /// Parse error.
        source: ParseFloatError,
    },
    /// Attribute is not a dimension.
    Dimension {
        /// Attribute name.
        key: String,
        /// Parse error.
        source: ParseFloatError,
    },
    /// Attribute is not `true` or `false`.
    Bool {
        /// Attribute name.
        key: String,
        /// Parse error.
        source: ParseBoolError,
    },
    /// Attribute is not a `source@WxH` image.
    Image {
        /// Attribute name.
        key: String,
        /// Parse error.
        source: ParseImageError,
    },
    /// JSON decode error.
    Json(serde_json::Error),
    /// TOML decode error.
    #[cfg(feature = "toml")]
    Toml(toml::de::Error),
    /// Initial progress is invalid.
    Progress(ProgressError),
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnpairedImage { missing } => write!(f, "thumb images must be set together, missing `{missing}`"),
            ConfigError::Color { key, source } => write!(f, "invalid color in `{key}`, {source}"),
            ConfigError::Number { key, source } => write!(f, "invalid number in `{key}`, {source}"),
            ConfigError::Dimension { key, source } => write!(f, "invalid dimension in `{key}`, {source}"),
            ConfigError::Bool { key, source } => write!(f, "invalid bool in `{key}`, {source}"),
            ConfigError::Image { key, source } => write!(f, "invalid image in `{key}`, {source}"),
            ConfigError::Json(e) => write!(f, "json error, {e}"),
            #[cfg(feature = "toml")]
            ConfigError::Toml(e) => write!(f, "toml error, {e}"),
            ConfigError::Progress(e) => write!(f, "invalid initial progress, {e}"),
        }
    }
}
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::UnpairedImage { .. } => None,
            ConfigError::Color { source, .. } => Some(source),
            ConfigError::Number { source, .. } => Some(source),
            ConfigError::Dimension { source, .. } => Some(source),
            ConfigError::Bool { source, .. } => Some(source),
            ConfigError::Image { source, .. } => Some(source),
            ConfigError::Json(e) => Some(e),
            #[cfg(feature = "toml")]
            ConfigError::Toml(e) => Some(e),
            ConfigError::Progress(e) => Some(e),
        }
    }
}
impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
#[cfg(feature = "toml")]
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}
impl From<ProgressError> for ConfigError {
    fn from(e: ProgressError) -> Self {
        ConfigError::Progress(e)
    }
}

#[cfg(test)]
mod tests {
    use centerbar_unit::{colors, Dip};

    use super::*;

    #[test]
    fn json_defaults() {
        let c = SeekBarConfig::from_json("{}").unwrap();
        assert_eq!(SeekBarConfig::default(), c);
    }

    #[test]
    fn json_values() {
        let c = SeekBarConfig::from_json(
            r##"{
                "minValue": -10,
                "maxValue": 30.5,
                "progress": 5,
                "trackColor": "#FFFFFF",
                "defaultBackgroundRangeColor": "#000",
                "trackRoundedCorners": true,
                "trackHeight": "3px",
                "thumbRadius": 9,
                "thumbDrawable": { "source": "n.png", "width": 24, "height": 24 },
                "thumbPressedDrawable": { "source": "p.png", "width": 26, "height": 26 }
            }"##,
        )
        .unwrap();

        assert_eq!(-10.0, c.min_value);
        assert_eq!(30.5, c.max_value);
        assert_eq!(5.0, c.progress);
        assert_eq!(colors::WHITE, c.style.track_color);
        assert_eq!(colors::BLACK, c.style.track_progress_color);
        assert!(c.style.track_rounded_corners);
        assert_eq!(Length::Px(Px(3.0)), c.style.track_height);
        assert_eq!(Length::Dip(Dip(9.0)), c.style.thumb_radius);
        assert!(c.style.thumb_images().unwrap().is_some());
    }

    #[test]
    fn json_error() {
        assert!(matches!(SeekBarConfig::from_json(r##"{"trackColor": "#12"}"##), Err(ConfigError::Json(_))));
    }

    #[test]
    fn range_json() {
        let c = RangeSeekBarConfig::from_json(r#"{"fromValue": -50, "toValue": 200, "toProgress": 100}"#).unwrap();
        assert_eq!(-50.0, c.from_value);
        assert_eq!(200.0, c.to_value);
        assert_eq!(0.0, c.from_progress);
        assert_eq!(100.0, c.to_progress);
    }

    #[test]
    fn attributes() {
        let c = SeekBarConfig::from_attributes([
            ("minValue", "0"),
            ("maxValue", "10"),
            ("progress", "2.5"),
            ("thumbColor", "#F00"),
            ("thumbPressedRadius", "9dp"),
            ("thumbDrawable", "n.png@20x20"),
            ("thumbPressedDrawable", "p.png@22x22"),
            ("somethingElse", "ignored"),
        ])
        .unwrap();

        assert_eq!(0.0, c.min_value);
        assert_eq!(10.0, c.max_value);
        assert_eq!(2.5, c.progress);
        assert_eq!(Rgba::rgb(255, 0, 0), c.style.thumb_color);
        assert_eq!(Length::Dip(Dip(9.0)), c.style.thumb_pressed_radius);
        assert_eq!(Some(ThumbImage::new("p.png", Px(22.0), Px(22.0))), c.style.thumb_pressed_drawable);
    }

    #[test]
    fn attribute_errors() {
        let e = SeekBarConfig::from_attributes([("maxValue", "ten")]).unwrap_err();
        assert!(matches!(&e, ConfigError::Number { key, .. } if key == "maxValue"));

        let e = RangeSeekBarConfig::from_attributes([("trackRoundedCorners", "yes")]).unwrap_err();
        assert!(matches!(e, ConfigError::Bool { .. }));

        let e = RangeSeekBarConfig::from_attributes([("trackColor", "#12")]).unwrap_err();
        assert!(matches!(e, ConfigError::Color { .. }));

        let e = SeekBarConfig::from_attributes([("thumbDrawable", "n.png")]).unwrap_err();
        assert!(matches!(e, ConfigError::Image { .. }));
        assert_eq!("invalid image in `thumbDrawable`, missing image size, expected `source@WxH`", e.to_string());
    }

    #[test]
    fn touch_slop() {
        let c: TouchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(Px(8.0), c.touch_slop_px(Factor(1.0)));
        assert_eq!(Px(12.0), c.touch_slop_px(Factor(1.5)));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml() {
        let c = SeekBarConfig::from_toml(
            r##"
            minValue = 0.0
            maxValue = 1.0
            progress = 0.25
            trackProgressColor = "#00FF00"
            "##,
        )
        .unwrap();
        assert_eq!(1.0, c.max_value);
        assert_eq!(Rgba::rgb(0, 255, 0), c.style.track_progress_color);
    }
}
