//! # floem-swatch
//!
//! The color model behind a Floem color picker: HSB conversion, a bounded
//! color wheel raster, a catalog of named colors, and a selection state that
//! keeps the current color, its channel bytes, and its matching named color
//! in step.
//!
//! ## Usage
//!
//! ```rust
//! use floem_swatch::{rasterize_wheel, Channel, SelectionState};
//!
//! let mut selection = SelectionState::new();
//! selection.subscribe(|change| println!("{change:?}"));
//!
//! selection.set_channel(Channel::Red, 255);
//! assert_eq!(selection.named_color().map(|n| n.name()), Some("Red"));
//!
//! let wheel = rasterize_wheel(200, 200);
//! let center = wheel.radius() as f64;
//! selection.pick_from_wheel(&wheel, center, center);
//! assert_eq!(selection.hex(), "FFFFFF");
//! ```
//!
//! ## Features
//!
//! - `floem`: adds `WheelRaster::to_image` for drawing the wheel with Floem.

mod color;
mod color_wheel;
mod constants;
mod error;
mod hsb;
mod math;
mod named;
mod observer;
mod selection;
mod selection_list;

pub use color::{Channel, Color};
pub use color_wheel::{rasterize_wheel, wheel_diameter, ColorWheel, WheelRaster, WheelRect};
pub use constants::MAX_DIAMETER;
pub use error::{ColorError, Result};
pub use hsb::HsbColor;
pub use named::{compare_names, NamedColor};
pub use observer::{Observers, SubscriptionId};
pub use selection::{SelectionChange, SelectionState};
pub use selection_list::{ListChange, SelectionList};
