//! The rendering contract between a slider and whatever draws it.
//!
//! A slider never touches a drawing API directly. After every state change it
//! pushes integer percentages into a [`RenderSurface`]; a DOM binding, a canvas,
//! a terminal or a test double can all implement the same trait.
//!
//! All percentages are in `0..=100` and measured along the track in the
//! direction of increasing value (left to right, or bottom to top for a
//! vertical slider).

/// Identifies one of the two slider handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The lower-bound handle, present only on range sliders.
    Left,
    /// The sole handle of a single slider, or the upper bound of a range.
    Right,
}

/// The filled segment of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrackExtent {
    /// Offset of the segment from the start of the track, in percent.
    pub start: u8,
    /// Length of the segment, in percent.
    pub length: u8,
}

impl TrackExtent {
    /// Creates a new extent.
    pub const fn new(start: u8, length: u8) -> Self {
        Self { start, length }
    }

    /// Percent position of the segment's far end.
    pub fn end(&self) -> u8 {
        self.start.saturating_add(self.length)
    }
}

/// Display state of the whole widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Laid out and drawn.
    #[default]
    Visible,
    /// Laid out but not drawn.
    Hidden,
    /// Removed from layout entirely.
    Removed,
}

/// Capability interface a slider renders through.
///
/// Implementations only reflect the values they are given; they never call
/// back into the slider.
pub trait RenderSurface {
    /// Resizes (and, for range sliders, repositions) the filled segment.
    fn set_fill_extent(&mut self, extent: TrackExtent);

    /// Moves a handle to `percent` along the track.
    fn set_handle_position(&mut self, handle: Handle, percent: u8);

    /// Resizes the buffered indicator.
    fn set_buffer_extent(&mut self, percent: u8);

    /// Resizes the hover indicator.
    fn set_hover_extent(&mut self, percent: u8);

    /// Replaces the tooltip text.
    fn set_tooltip_text(&mut self, text: &str);

    /// Moves the tooltip to `percent` along the track, on the opposite side of
    /// the track when `inverted` is set.
    fn set_tooltip_position(&mut self, percent: u8, inverted: bool);

    /// Shows, hides or removes the widget.
    fn set_visibility(&mut self, visibility: Visibility);
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn set_fill_extent(&mut self, extent: TrackExtent) {
        (**self).set_fill_extent(extent);
    }

    fn set_handle_position(&mut self, handle: Handle, percent: u8) {
        (**self).set_handle_position(handle, percent);
    }

    fn set_buffer_extent(&mut self, percent: u8) {
        (**self).set_buffer_extent(percent);
    }

    fn set_hover_extent(&mut self, percent: u8) {
        (**self).set_hover_extent(percent);
    }

    fn set_tooltip_text(&mut self, text: &str) {
        (**self).set_tooltip_text(text);
    }

    fn set_tooltip_position(&mut self, percent: u8, inverted: bool) {
        (**self).set_tooltip_position(percent, inverted);
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        (**self).set_visibility(visibility);
    }
}
