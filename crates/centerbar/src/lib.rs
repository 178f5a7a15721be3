//!
//! Center-zero seek bar widgets.
//!
//! # Examples
//!
//! ```
//! use centerbar::prelude::*;
//!
//! let config = SeekBarConfig::from_attributes([("minValue", "-50"), ("maxValue", "50")]).unwrap();
//! let mut bar = CenterSeekBar::new(config, 1.fct(), TouchConfig::default()).unwrap();
//!
//! let size = bar.measure(PxConstraints2d::new_exact(Px(214.0), Px(20.0)));
//! bar.layout(size);
//!
//! bar.on_value_change(|v| println!("value: {v}"));
//! bar.pointer_event(&PointerEvent::single(PointerAction::Down, Px(107.0), Px(5.0)));
//! bar.pointer_event(&PointerEvent::single(PointerAction::Up, Px(157.0), Px(5.0)));
//! assert_eq!(25.0, bar.value());
//!
//! let mut frame = DisplayList::new();
//! bar.render(&mut frame);
//! assert_eq!(3, frame.len());
//! ```
//!
//! # Crate
//!
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

/// Units, colors and layout constraints.
///
/// See [`centerbar_unit`] for the full API.
pub mod unit {
    pub use centerbar_unit::*;
}

/// Widget types.
///
/// See [`centerbar_wgt`] for the full API.
pub mod wgt {
    pub use centerbar_wgt::*;
}

/// Types for common usage.
///
/// ```
/// use centerbar::prelude::*;
/// ```
pub mod prelude {
    #[doc(no_inline)]
    pub use centerbar_unit::{
        colors, Dip, Factor, FactorUnits as _, Length, Px, PxConstraints, PxConstraints2d, PxDipUnits as _, PxPoint, PxRect, PxSize,
        Rgba,
    };

    #[doc(no_inline)]
    pub use centerbar_wgt::{
        render::{DisplayItem, DisplayList, Surface},
        CenterSeekBar, ConfigError, DragState, PointerAction, PointerEvent, PointerId, PointerSample, ProgressError, RangeSeekBar,
        RangeSeekBarConfig, SeekBarConfig, SeekBarStyle, SeekWidget, ThumbDirection, ThumbImage, TouchConfig, UpdateFlags, ValueRange,
    };
}
