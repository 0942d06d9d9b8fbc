//! A [`RenderSurface`] that records what it was told to draw.
//!
//! Available with the `testing` feature. It keeps both the raw call log and the
//! latest value of every channel, so tests can assert either on ordering or on
//! the final picture.

use crate::surface::{Handle, RenderSurface, TrackExtent, Visibility};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// `set_fill_extent`
    Fill(TrackExtent),
    /// `set_handle_position`
    Handle(Handle, u8),
    /// `set_buffer_extent`
    Buffer(u8),
    /// `set_hover_extent`
    Hover(u8),
    /// `set_tooltip_text`
    TooltipText(String),
    /// `set_tooltip_position`
    TooltipPosition(u8, bool),
    /// `set_visibility`
    Visibility(Visibility),
}

/// Test double for [`RenderSurface`].
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Every call received, in order.
    pub calls: Vec<SurfaceCall>,
    /// Latest filled segment.
    pub fill: Option<TrackExtent>,
    /// Latest left handle position.
    pub left_handle: Option<u8>,
    /// Latest right handle position.
    pub right_handle: Option<u8>,
    /// Latest buffer extent.
    pub buffer: Option<u8>,
    /// Latest hover extent.
    pub hover: Option<u8>,
    /// Latest tooltip text.
    pub tooltip_text: Option<String>,
    /// Latest tooltip position and inversion flag.
    pub tooltip_position: Option<(u8, bool)>,
    /// Latest visibility.
    pub visibility: Option<Visibility>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the call log while keeping the latest values.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn set_fill_extent(&mut self, extent: TrackExtent) {
        self.fill = Some(extent);
        self.calls.push(SurfaceCall::Fill(extent));
    }

    fn set_handle_position(&mut self, handle: Handle, percent: u8) {
        match handle {
            Handle::Left => self.left_handle = Some(percent),
            Handle::Right => self.right_handle = Some(percent),
        }
        self.calls.push(SurfaceCall::Handle(handle, percent));
    }

    fn set_buffer_extent(&mut self, percent: u8) {
        self.buffer = Some(percent);
        self.calls.push(SurfaceCall::Buffer(percent));
    }

    fn set_hover_extent(&mut self, percent: u8) {
        self.hover = Some(percent);
        self.calls.push(SurfaceCall::Hover(percent));
    }

    fn set_tooltip_text(&mut self, text: &str) {
        self.tooltip_text = Some(text.to_string());
        self.calls.push(SurfaceCall::TooltipText(text.to_string()));
    }

    fn set_tooltip_position(&mut self, percent: u8, inverted: bool) {
        self.tooltip_position = Some((percent, inverted));
        self.calls.push(SurfaceCall::TooltipPosition(percent, inverted));
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = Some(visibility);
        self.calls.push(SurfaceCall::Visibility(visibility));
    }
}
