//! Slider and range-slider value model.
//!
//! # Usage
//!
//! A [`ValueSlider`] owns the numeric state of a slider widget: one value, or
//! a `left,right` pair for range selection. It quantizes every change to the
//! configured step, keeps range handles at least one step apart, mirrors the
//! result into a [`FormValue`](value_slider_ui::FormValue) and pushes the new
//! layout through a [`RenderSurface`](value_slider_ui::RenderSurface).
//!
//! # Example
//!
//! ```
//! use value_slider::{RangeValues, SliderArgs, ValueSlider};
//! use value_slider_ui::{
//!     CursorEvent, FormValue, Handle, Px, PxPosition, PxRect, RenderSurface, TrackExtent,
//!     Visibility,
//! };
//!
//! struct Discard;
//!
//! impl RenderSurface for Discard {
//!     fn set_fill_extent(&mut self, _: TrackExtent) {}
//!     fn set_handle_position(&mut self, _: Handle, _: u8) {}
//!     fn set_buffer_extent(&mut self, _: u8) {}
//!     fn set_hover_extent(&mut self, _: u8) {}
//!     fn set_tooltip_text(&mut self, _: &str) {}
//!     fn set_tooltip_position(&mut self, _: u8, _: bool) {}
//!     fn set_visibility(&mut self, _: Visibility) {}
//! }
//!
//! let input = FormValue::default();
//! let mut slider = ValueSlider::new(
//!     SliderArgs::default()
//!         .element(input.clone())
//!         .range(RangeValues::new(20.0, 80.0))
//!         .track_bounds(PxRect::new(Px(0), Px(0), Px(100), Px(10))),
//!     Discard,
//! )?;
//! assert_eq!(input.get(), "20,80");
//!
//! // Press on the track near the right handle and drag it.
//! let press = CursorEvent::pressed(PxPosition::new(Px(70), Px(5)));
//! let target = slider.hit_test(press.position, Px(4));
//! slider.handle_cursor_event(&press, target)?;
//! let to = PxPosition::new(Px(60), Px(5));
//! slider.handle_cursor_event(&CursorEvent::moved(to, true), target)?;
//! slider.handle_cursor_event(&CursorEvent::released(to), target)?;
//! assert_eq!(input.get(), "20,60");
//! # Ok::<(), value_slider::SliderError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod error;
pub mod slider;

pub use error::{ConfigurationError, Result, SliderError};
pub use slider::{
    DragState, LabelFormatter, Orientation, PointerTarget, RangeValues, SliderArgs, SliderConfig,
    TooltipValues, ValueSlider,
};
