//!
//! Center-zero seek bar widgets.
//!
//! The [`CenterSeekBar`] maps one value range to the track and fills the track from the value zero to the
//! thumb. The [`RangeSeekBar`] fills from the track center and reports values in two independent scales,
//! one each side of the center.
//!
//! Both implement [`SeekWidget`], the host drives them with layout constraints, [`PointerEvent`]s and a
//! drawing [`Surface`](render::Surface).
//!
//! # Crate
//!
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

pub mod config;
pub mod event;
pub mod input;
pub mod notify;
pub mod render;
pub mod style;
pub mod track;
pub mod value;

mod range_seek_bar;
mod seek_bar;
mod widget;

pub use config::{ConfigError, RangeSeekBarConfig, SeekBarConfig, TouchConfig};
pub use event::{PointerAction, PointerEvent, PointerId, PointerSample};
pub use input::DragState;
pub use range_seek_bar::{RangeSeekBar, INTERNAL_RANGE};
pub use render::ThumbDirection;
pub use seek_bar::{CenterSeekBar, ProgressError};
pub use style::{SeekBarStyle, ThumbImage};
pub use value::{TrackGeometry, ValueRange};
pub use widget::{SeekWidget, UpdateFlags};
