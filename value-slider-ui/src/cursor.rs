//! Pointer events as the slider consumes them.
//!
//! The host translates its native mouse or touch input into [`CursorEvent`]s
//! carrying a device-space position. The slider only ever looks at the
//! position relative to its track bounds and at whether the primary button is
//! held, so the event model is deliberately small.
//!
//! # Usage
//!
//! ```
//! use value_slider_ui::cursor::{CursorEvent, CursorEventContent, PressKeyEventType};
//! use value_slider_ui::px::{Px, PxPosition};
//!
//! let at = PxPosition::new(Px(40), Px(4));
//! let events = [
//!     CursorEvent::pressed(at),
//!     CursorEvent::moved(at.offset(Px(10), Px(0)), true),
//!     CursorEvent::released(at),
//! ];
//!
//! for event in &events {
//!     match event.content {
//!         CursorEventContent::Pressed(PressKeyEventType::Left) => println!("drag starts"),
//!         CursorEventContent::Moved { primary_held: true } => println!("drag continues"),
//!         CursorEventContent::Released(_) => println!("drag ends"),
//!         _ => {}
//!     }
//! }
//! ```

use crate::PxPosition;

/// A single pointer event delivered to a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorEvent {
    /// Pointer position in device coordinates.
    pub position: PxPosition,
    /// The specific type and data of this cursor event.
    pub content: CursorEventContent,
}

impl CursorEvent {
    /// A primary button press at `position`.
    pub fn pressed(position: PxPosition) -> Self {
        Self {
            position,
            content: CursorEventContent::Pressed(PressKeyEventType::Left),
        }
    }

    /// A primary button release at `position`.
    pub fn released(position: PxPosition) -> Self {
        Self {
            position,
            content: CursorEventContent::Released(PressKeyEventType::Left),
        }
    }

    /// Pointer motion to `position`.
    pub fn moved(position: PxPosition, primary_held: bool) -> Self {
        Self {
            position,
            content: CursorEventContent::Moved { primary_held },
        }
    }

    /// The pointer left the widget.
    pub fn exited(position: PxPosition) -> Self {
        Self {
            position,
            content: CursorEventContent::Exited,
        }
    }
}

/// Enumeration of the pointer event kinds a slider reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEventContent {
    /// A cursor button or touch point was pressed.
    Pressed(PressKeyEventType),
    /// A cursor button or touch point was released.
    Released(PressKeyEventType),
    /// The pointer moved.
    Moved {
        /// Whether the primary button is held during the motion.
        primary_held: bool,
    },
    /// The pointer left the widget area.
    Exited,
}

impl CursorEventContent {
    /// Returns `true` for a press of the primary button.
    pub fn is_primary_press(&self) -> bool {
        matches!(self, Self::Pressed(PressKeyEventType::Left))
    }
}

/// Represents the different types of cursor buttons or touch interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressKeyEventType {
    /// The primary mouse button (typically left button) or primary touch.
    Left,
    /// The secondary mouse button (typically right button).
    Right,
    /// The middle mouse button (typically scroll wheel click).
    Middle,
}
