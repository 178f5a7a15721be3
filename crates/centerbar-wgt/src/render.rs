//! Drawing.
//!
//! The widget draws through the [`Surface`] trait, hosts implement it over their own canvas.
//! The [`DisplayList`] is a recording surface that can be replayed later.

use centerbar_unit::{Factor, Px, PxPoint, PxRect, PxSize, Rgba};

use crate::{
    style::{ResolvedStyle, ThumbImage},
    value::TrackGeometry,
};

/// Drawing target provided by the host.
pub trait Surface {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: PxRect, color: Rgba);

    /// Fill a rectangle with all corners rounded by `radius`.
    fn fill_rounded_rect(&mut self, rect: PxRect, radius: Px, color: Rgba);

    /// Fill a circle.
    fn fill_circle(&mut self, center: PxPoint, radius: Px, color: Rgba);

    /// Draw the `image` at its intrinsic size with the top-left at `origin`.
    fn draw_image(&mut self, image: &ThumbImage, origin: PxPoint);
}

/// Recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// See [`Surface::fill_rect`].
    Rect {
        /// Area.
        rect: PxRect,
        /// Fill.
        color: Rgba,
    },
    /// See [`Surface::fill_rounded_rect`].
    RoundedRect {
        /// Area.
        rect: PxRect,
        /// Corner radius.
        radius: Px,
        /// Fill.
        color: Rgba,
    },
    /// See [`Surface::fill_circle`].
    Circle {
        /// Center.
        center: PxPoint,
        /// Radius.
        radius: Px,
        /// Fill.
        color: Rgba,
    },
    /// See [`Surface::draw_image`].
    Image {
        /// Host image key.
        source: String,
        /// Area covered by the image.
        rect: PxRect,
    },
}

/// A [`Surface`] that records draw calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
}
impl DisplayList {
    /// New empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded items in draw order.
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// Number of recorded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// If nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Draw every recorded item on another surface.
    pub fn replay(&self, surface: &mut dyn Surface) {
        for item in &self.items {
            match item {
                DisplayItem::Rect { rect, color } => surface.fill_rect(*rect, *color),
                DisplayItem::RoundedRect { rect, radius, color } => surface.fill_rounded_rect(*rect, *radius, *color),
                DisplayItem::Circle { center, radius, color } => surface.fill_circle(*center, *radius, *color),
                DisplayItem::Image { source, rect } => {
                    let image = ThumbImage::new(source.clone(), rect.size.width, rect.size.height);
                    surface.draw_image(&image, rect.origin)
                }
            }
        }
    }
}
impl Surface for DisplayList {
    fn fill_rect(&mut self, rect: PxRect, color: Rgba) {
        self.items.push(DisplayItem::Rect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: PxRect, radius: Px, color: Rgba) {
        self.items.push(DisplayItem::RoundedRect { rect, radius, color });
    }

    fn fill_circle(&mut self, center: PxPoint, radius: Px, color: Rgba) {
        self.items.push(DisplayItem::Circle { center, radius, color });
    }

    fn draw_image(&mut self, image: &ThumbImage, origin: PxPoint) {
        self.items.push(DisplayItem::Image {
            source: image.source.clone(),
            rect: PxRect::new(origin, image.size()),
        });
    }
}

/// Side of the zero-point the thumb is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThumbDirection {
    /// Not laid out yet, the side is undefined.
    #[default]
    None,
    /// Thumb is at or left of the zero-point.
    Left,
    /// Thumb is right of the zero-point.
    Right,
}
impl ThumbDirection {
    /// Direction for the zero-point and thumb values on the `geometry`.
    ///
    /// Only a zero width gives `None`, narrow widgets still get the side the progress segment is drawn on.
    pub fn of(geometry: TrackGeometry, zero: Factor, thumb: Factor) -> Self {
        if geometry.width <= Px::ZERO {
            return ThumbDirection::None;
        }
        Self::of_screen(geometry.normalized_to_screen(zero), geometry.normalized_to_screen(thumb))
    }

    fn of_screen(zero_x: Px, thumb_x: Px) -> Self {
        if zero_x < thumb_x {
            ThumbDirection::Right
        } else {
            ThumbDirection::Left
        }
    }
}

/// Everything needed to draw one frame of a seek bar.
#[derive(Debug, Clone, Copy)]
pub struct TrackFrame<'a> {
    /// Resolved visuals.
    pub style: &'a ResolvedStyle,
    /// Widget size.
    pub size: PxSize,
    /// Normalized position of the user value zero.
    pub zero: Factor,
    /// Normalized thumb position.
    pub value: Factor,
    /// Thumb is pressed.
    pub thumb_pressed: bool,
}
impl TrackFrame<'_> {
    /// Track geometry for the frame size.
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(self.size.width, self.style.padding())
    }

    /// Draw the track, progress segment and thumb, returns the direction used for the progress segment.
    pub fn render(&self, surface: &mut dyn Surface) -> ThumbDirection {
        let geometry = self.geometry();
        let padding = geometry.padding;
        let track_height = self.style.track_height;
        let center_y = self.size.height / 2.0;
        let top = center_y - track_height / 2.0;

        let track = PxRect::new(
            PxPoint::new(padding, top),
            PxSize::new((self.size.width - padding * 2.0).max(Px::ZERO), track_height),
        );
        self.fill_track(surface, track, self.style.track_color);

        let zero_x = geometry.normalized_to_screen(self.zero);
        let thumb_x = geometry.normalized_to_screen(self.value);
        let (left, right) = match ThumbDirection::of_screen(zero_x, thumb_x) {
            ThumbDirection::Right => (zero_x, thumb_x),
            _ => (thumb_x, zero_x),
        };
        let direction = ThumbDirection::of(geometry, self.zero, self.value);
        let progress = PxRect::new(PxPoint::new(left, top), PxSize::new(right - left, track_height));
        self.fill_track(surface, progress, self.style.track_progress_color);

        match &self.style.images {
            Some(images) => {
                let image = if self.thumb_pressed { &images.pressed } else { &images.normal };
                let origin = PxPoint::new(thumb_x - image.width / 2.0, center_y - image.height / 2.0);
                surface.draw_image(image, origin);
            }
            None => {
                let (radius, color) = if self.thumb_pressed {
                    (self.style.thumb_pressed_radius, self.style.thumb_pressed_color)
                } else {
                    (self.style.thumb_radius, self.style.thumb_color)
                };
                surface.fill_circle(PxPoint::new(thumb_x, center_y), radius, color);
            }
        }

        tracing::trace!(?direction, value = self.value.0, "thumb rendered");
        direction
    }

    fn fill_track(&self, surface: &mut dyn Surface, rect: PxRect, color: Rgba) {
        if self.style.track_rounded_corners {
            surface.fill_rounded_rect(rect, self.style.track_height, color);
        } else {
            surface.fill_rect(rect, color);
        }
    }
}
