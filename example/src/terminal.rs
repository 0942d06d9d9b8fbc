use std::{fmt::Write as _, sync::Arc};

use parking_lot::RwLock;
use value_slider_ui::{Handle, RenderSurface, TrackExtent, Visibility};

/// Cells used to draw a 0..=100 percent track.
const TRACK_CELLS: usize = 50;

#[derive(Debug, Default)]
struct TerminalState {
    fill: TrackExtent,
    left: Option<u8>,
    right: u8,
    buffer: Option<u8>,
    hover: Option<u8>,
    tooltip: Option<(String, u8, bool)>,
    visibility: Visibility,
}

/// Draws a slider as a line of text.
///
/// Cloning shares the drawing state, so the demo keeps one handle for
/// printing while the slider owns another.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    state: Arc<RwLock<TerminalState>>,
}

fn cell(percent: u8) -> usize {
    (usize::from(percent.min(100)) * TRACK_CELLS) / 100
}

impl TerminalSurface {
    /// Renders the current state, e.g. `[====O-----]  tooltip: 40`.
    pub fn draw(&self) -> String {
        let state = self.state.read();
        match state.visibility {
            Visibility::Removed => return String::new(),
            Visibility::Hidden => return " ".repeat(TRACK_CELLS + 2),
            Visibility::Visible => {}
        }

        let mut cells = vec!['-'; TRACK_CELLS + 1];
        if let Some(buffer) = state.buffer {
            for c in cells.iter_mut().take(cell(buffer)) {
                *c = '.';
            }
        }
        for c in cells
            .iter_mut()
            .take(cell(state.fill.end()))
            .skip(cell(state.fill.start))
        {
            *c = '=';
        }
        if let Some(hover) = state.hover.filter(|hover| *hover > 0) {
            cells[cell(hover)] = '|';
        }
        if let Some(left) = state.left {
            cells[cell(left)] = 'L';
        }
        cells[cell(state.right)] = 'O';

        let mut line = String::with_capacity(TRACK_CELLS + 32);
        line.push('[');
        line.extend(cells);
        line.push(']');
        if let Some((text, percent, inverted)) = &state.tooltip {
            let side = if *inverted { "below" } else { "above" };
            let _ = write!(line, "  tooltip {side} {percent}%: {text}");
        }
        line
    }
}

impl RenderSurface for TerminalSurface {
    fn set_fill_extent(&mut self, extent: TrackExtent) {
        self.state.write().fill = extent;
    }

    fn set_handle_position(&mut self, handle: Handle, percent: u8) {
        let mut state = self.state.write();
        match handle {
            Handle::Left => state.left = Some(percent),
            Handle::Right => state.right = percent,
        }
    }

    fn set_buffer_extent(&mut self, percent: u8) {
        self.state.write().buffer = Some(percent);
    }

    fn set_hover_extent(&mut self, percent: u8) {
        self.state.write().hover = Some(percent);
    }

    fn set_tooltip_text(&mut self, text: &str) {
        let mut state = self.state.write();
        match state.tooltip.as_mut() {
            Some(tooltip) => tooltip.0 = text.to_owned(),
            None => state.tooltip = Some((text.to_owned(), 0, false)),
        }
    }

    fn set_tooltip_position(&mut self, percent: u8, inverted: bool) {
        let mut state = self.state.write();
        let tooltip = state
            .tooltip
            .get_or_insert_with(|| (String::new(), 0, false));
        tooltip.1 = percent;
        tooltip.2 = inverted;
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.state.write().visibility = visibility;
    }
}
