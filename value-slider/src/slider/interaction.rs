use tracing::{debug, trace};
use value_slider_ui::{CursorEvent, CursorEventContent, Handle, Px, PxPosition, RenderSurface};

use super::{
    ValueSlider,
    layout::nearest_handle,
    render::{filled_fractions, render_hover},
};
use crate::error::{Result, SliderError};

/// Where a pointer event landed, as resolved by the host's hit test or by
/// [`ValueSlider::hit_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// On one of the handles.
    Handle(Handle),
    /// On the track, away from any handle.
    Track,
    /// Anywhere else in the document.
    Outside,
}

/// Which handle, if any, owns the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The left handle follows the pointer.
    DraggingLeft,
    /// The right handle follows the pointer.
    DraggingRight,
}

impl DragState {
    /// The dragged handle, if any.
    pub fn handle(self) -> Option<Handle> {
        match self {
            Self::Idle => None,
            Self::DraggingLeft => Some(Handle::Left),
            Self::DraggingRight => Some(Handle::Right),
        }
    }
}

/// A drag owned by one slider. Created on press, dropped on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    handle: Handle,
    moves: usize,
}

/// Pointer bookkeeping for a slider.
#[derive(Debug, Default)]
pub(super) struct SliderController {
    drag: Option<DragSession>,
    is_hovered: bool,
}

impl<S: RenderSurface> ValueSlider<S> {
    /// Current state of the drag state machine.
    pub fn drag_state(&self) -> DragState {
        match self.controller.drag.map(|session| session.handle) {
            None => DragState::Idle,
            Some(Handle::Left) => DragState::DraggingLeft,
            Some(Handle::Right) => DragState::DraggingRight,
        }
    }

    /// The handle owning the current drag, if any.
    pub fn active_handle(&self) -> Option<Handle> {
        self.drag_state().handle()
    }

    /// Returns `true` while the pointer is over the track.
    pub fn is_hovered(&self) -> bool {
        self.controller.is_hovered
    }

    /// Resolves what lies under `position`.
    ///
    /// A handle is hit within `handle_radius` pixels of its centre; otherwise
    /// the track is hit inside the track bounds.
    pub fn hit_test(&self, position: PxPosition, handle_radius: Px) -> PointerTarget {
        let (start, end) = filled_fractions(&self.config, &self.state);
        let mut handles = Vec::with_capacity(2);
        if self.state.left_value.is_some() {
            handles.push((Handle::Left, start));
        }
        handles.push((Handle::Right, end));

        let radius = handle_radius.to_f64();
        if let Some(handle) = self.geometry.handle_at(position, &handles, radius) {
            PointerTarget::Handle(handle)
        } else if self.geometry.contains(position) {
            PointerTarget::Track
        } else {
            PointerTarget::Outside
        }
    }

    /// Feeds one pointer event through the drag state machine.
    ///
    /// `target` only matters for presses; moves and releases are honoured
    /// wherever they happen, so a drag keeps tracking and ends correctly after
    /// the pointer has left the widget.
    pub fn handle_cursor_event(
        &mut self,
        event: &CursorEvent,
        target: PointerTarget,
    ) -> Result<()> {
        match event.content {
            CursorEventContent::Pressed(button) => {
                if !event.content.is_primary_press() {
                    trace!(?button, "ignoring non-primary press");
                    return Ok(());
                }
                match target {
                    PointerTarget::Handle(handle) => {
                        self.press_handle(handle)?;
                    }
                    PointerTarget::Track => {
                        self.press_track(event.position)?;
                    }
                    PointerTarget::Outside => {}
                }
                Ok(())
            }
            CursorEventContent::Moved { primary_held } => {
                self.pointer_moved(event.position, primary_held)
            }
            CursorEventContent::Released(_) => {
                self.release();
                Ok(())
            }
            CursorEventContent::Exited => {
                self.pointer_left();
                Ok(())
            }
        }
    }

    /// Pointer-down on a handle. Starts a drag unless one is already active.
    ///
    /// Returns whether a drag was started.
    pub fn press_handle(&mut self, handle: Handle) -> Result<bool> {
        if handle == Handle::Left && self.state.left_value.is_none() {
            return Err(SliderError::InvalidState {
                operation: "press_handle",
                reason: "the slider has no left handle",
            });
        }
        if let Some(active) = self.controller.drag {
            trace!(pressed = ?handle, active = ?active.handle, "drag already active");
            return Ok(false);
        }
        self.begin_drag(handle);
        Ok(true)
    }

    /// Pointer-down on the track.
    ///
    /// Moves the nearer handle to the pointer and starts dragging it, as if
    /// that handle had been pressed. Returns whether a drag was started.
    pub fn press_track(&mut self, position: PxPosition) -> Result<bool> {
        if self.controller.drag.is_some() {
            return Ok(false);
        }
        let Some(progress) = self.geometry.cursor_progress(position) else {
            trace!(?position, "track has no extent; press ignored");
            return Ok(false);
        };
        let handle = nearest_handle(
            progress,
            filled_fractions(&self.config, &self.state),
            self.state.left_value.is_some(),
        );
        self.set_handle_percent(handle, progress)?;
        self.begin_drag(handle);
        Ok(true)
    }

    /// Pointer motion anywhere in the document.
    ///
    /// Updates the hover indicator while over the track and, during a drag
    /// with the primary button held, moves the dragged handle.
    pub fn pointer_moved(&mut self, position: PxPosition, primary_held: bool) -> Result<()> {
        let over_track = self.geometry.contains(position);
        self.controller.is_hovered = over_track;
        if over_track && self.config.has_hover_indicator {
            if let Some(progress) = self.geometry.cursor_progress(position) {
                self.state.hover_position = Some(progress);
                render_hover(&self.state, &mut self.surface);
            }
        }

        let Some(session) = self.controller.drag else {
            return Ok(());
        };
        if !primary_held {
            trace!("primary button not held; move ignored");
            return Ok(());
        }
        let Some(progress) = self.geometry.cursor_progress(position) else {
            return Ok(());
        };
        self.set_handle_percent(session.handle, progress)?;
        if let Some(session) = self.controller.drag.as_mut() {
            session.moves += 1;
        }
        Ok(())
    }

    /// Pointer-up anywhere in the document. Ends the active drag, if any.
    pub fn release(&mut self) {
        if let Some(session) = self.controller.drag.take() {
            debug!(handle = ?session.handle, moves = session.moves, "drag ended");
        }
    }

    /// The pointer left the widget. Resets the hover indicator.
    pub fn pointer_left(&mut self) {
        self.controller.is_hovered = false;
        if self.config.has_hover_indicator {
            self.state.hover_position = Some(0.0);
            render_hover(&self.state, &mut self.surface);
        }
    }

    fn begin_drag(&mut self, handle: Handle) {
        debug!(?handle, "drag started");
        self.controller.drag = Some(DragSession { handle, moves: 0 });
    }
}
