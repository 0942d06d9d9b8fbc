//! Foundation types for the `value-slider` widget.
//!
//! This crate holds everything a slider shares with its host:
//!
//! - [`px`]: pixel geometry for pointer positions and track bounds
//! - [`cursor`]: the pointer events a slider consumes
//! - [`surface`]: the [`RenderSurface`] trait a slider draws through
//! - [`form`]: the [`FormValue`] a slider mirrors its value into
//! - [`init_tracing`]: subscriber setup for binaries
//!
//! With the `testing` feature, [`recording::RecordingSurface`] records every
//! render call for assertions.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod cursor;
pub mod form;
mod logging;
pub mod px;
#[cfg(any(test, feature = "testing"))]
pub mod recording;
pub mod surface;

pub use cursor::{CursorEvent, CursorEventContent, PressKeyEventType};
pub use form::FormValue;
pub use logging::init_tracing;
pub use px::{Px, PxPosition, PxRect};
pub use surface::{Handle, RenderSurface, TrackExtent, Visibility};
