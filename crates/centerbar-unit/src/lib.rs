//!
//! Base unit types.
//!
//! # Crate
//!
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

mod color;
mod constraints;
mod factor;
mod float_eq;
mod px_dip;

#[doc(no_inline)]
pub use euclid;

pub use color::*;
pub use constraints::*;
pub use factor::*;
pub use float_eq::*;
pub use px_dip::*;

pub(crate) fn parse_suffix<T: std::str::FromStr>(mut s: &str, suffixes: &[&'static str]) -> Result<T, <T as std::str::FromStr>::Err> {
    for suffix in suffixes {
        if let Some(f) = s.strip_suffix(suffix) {
            s = f;
            break;
        }
    }
    s.trim().parse()
}
