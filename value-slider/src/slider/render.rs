use value_slider_ui::{Handle, RenderSurface, TrackExtent};

use super::{
    SliderConfig, TooltipValues,
    value::{SliderState, fraction_to_percent, value_to_fraction},
};

/// Fractional positions of the filled segment's start and end.
pub(super) fn filled_fractions(config: &SliderConfig, state: &SliderState) -> (f64, f64) {
    let start = state
        .left_value
        .map(|left| value_to_fraction(left, config.min_value, config.max_value))
        .unwrap_or(0.0);
    let end = value_to_fraction(state.right_value, config.min_value, config.max_value);
    (start, end)
}

/// Pushes handle positions, the filled segment and the tooltip.
pub(super) fn render_value<S: RenderSurface>(
    config: &SliderConfig,
    state: &SliderState,
    surface: &mut S,
) {
    let (start, end) = filled_fractions(config, state);
    let start_percent = fraction_to_percent(start);
    let end_percent = fraction_to_percent(end);

    surface.set_fill_extent(TrackExtent::new(
        start_percent,
        end_percent.saturating_sub(start_percent),
    ));
    if state.left_value.is_some() {
        surface.set_handle_position(Handle::Left, start_percent);
    }
    surface.set_handle_position(Handle::Right, end_percent);

    if config.has_tooltip {
        render_tooltip(config, state, (start, end), surface);
    }
}

fn render_tooltip<S: RenderSurface>(
    config: &SliderConfig,
    state: &SliderState,
    (start, end): (f64, f64),
    surface: &mut S,
) {
    let (values, anchor) = match state.left_value {
        Some(left) => (
            TooltipValues::Range(left, state.right_value),
            (start + end) / 2.0,
        ),
        None => (TooltipValues::Single(state.right_value), end),
    };
    let text = config.tooltip_label.format(values);
    surface.set_tooltip_text(&text);
    surface.set_tooltip_position(fraction_to_percent(anchor), config.invert_tooltip);
}

pub(super) fn render_buffer<S: RenderSurface>(state: &SliderState, surface: &mut S) {
    if let Some(buffered) = state.buffered {
        surface.set_buffer_extent(buffered);
    }
}

pub(super) fn render_hover<S: RenderSurface>(state: &SliderState, surface: &mut S) {
    if let Some(hover) = state.hover_position {
        surface.set_hover_extent(fraction_to_percent(hover));
    }
}
