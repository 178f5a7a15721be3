//! Value change listeners.

use std::fmt;

use crate::{
    render::ThumbDirection,
    style::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE},
};

/// Boxed value change listener.
pub type ValueListener = Box<dyn FnMut(f64) + Send>;

/// Notifier of the single value seek bar.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: Option<ValueListener>,
}
impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier").field("listener", &self.listener.is_some()).finish()
    }
}
impl ChangeNotifier {
    /// Set the listener, replaces the previous one.
    pub fn set(&mut self, listener: impl FnMut(f64) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener.
    pub fn clear(&mut self) {
        self.listener = None;
    }

    /// Call the listener with `value`.
    pub fn notify(&mut self, value: f64) {
        if let Some(l) = &mut self.listener {
            l(value);
        }
    }
}

/// Notifier of the dual-range seek bar.
///
/// Routes each update to exactly one listener selected by the thumb direction.
#[derive(Default)]
pub struct RangeNotifier {
    from: Option<ValueListener>,
    to: Option<ValueListener>,
}
impl fmt::Debug for RangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeNotifier")
            .field("from", &self.from.is_some())
            .field("to", &self.to.is_some())
            .finish()
    }
}
impl RangeNotifier {
    /// Set the listener called when the thumb is left of zero.
    pub fn set_from(&mut self, listener: impl FnMut(f64) + Send + 'static) {
        self.from = Some(Box::new(listener));
    }

    /// Set the listener called when the thumb is right of zero.
    pub fn set_to(&mut self, listener: impl FnMut(f64) + Send + 'static) {
        self.to = Some(Box::new(listener));
    }

    /// Scale the `internal` value and call the listener for the `direction`.
    ///
    /// The `internal` value is on the `[DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE]` reference range,
    /// `from_value` and `to_value` are the user values at the left and right ends.
    pub fn notify(&mut self, direction: ThumbDirection, internal: f64, from_value: f64, to_value: f64) {
        match direction {
            ThumbDirection::Right => {
                if let Some(l) = &mut self.to {
                    l(internal / DEFAULT_MAX_VALUE * to_value);
                }
            }
            ThumbDirection::Left => {
                if let Some(l) = &mut self.from {
                    l(internal / DEFAULT_MIN_VALUE * from_value);
                }
            }
            ThumbDirection::None => {}
        }
    }
}
