//! Terminal demo for `value-slider`.
//!
//! Replays scripted pointer sessions against a single slider and a range
//! slider and prints the track after every event. Set `RUST_LOG=debug` to see
//! drag lifecycle logs.
mod terminal;

use tracing::info;
use value_slider::{PointerTarget, RangeValues, SliderArgs, SliderError, ValueSlider};
use value_slider_ui::{CursorEvent, FormValue, Px, PxPosition, PxRect};

pub use terminal::TerminalSurface;

const TRACK: PxRect = PxRect::new(Px(0), Px(0), Px(400), Px(16));
const HANDLE_RADIUS: Px = Px(8);

fn at(x: i32) -> PxPosition {
    PxPosition::new(Px(x), Px(8))
}

/// Feeds `events` to `slider`, hit testing each one the way a host would,
/// and prints the track after every event.
fn replay(
    slider: &mut ValueSlider<TerminalSurface>,
    view: &TerminalSurface,
    events: &[CursorEvent],
) -> Result<(), SliderError> {
    for event in events {
        let target = if TRACK.contains(event.position) || slider.active_handle().is_some() {
            slider.hit_test(event.position, HANDLE_RADIUS)
        } else {
            PointerTarget::Outside
        };
        slider.handle_cursor_event(event, target)?;
        println!("{}  form={:?}", view.draw(), slider.element().get());
    }
    Ok(())
}

fn single_slider() -> Result<(), SliderError> {
    let view = TerminalSurface::default();
    let input = FormValue::new("30");
    let mut slider = ValueSlider::new(
        SliderArgs::default()
            .element(input.clone())
            .step(5.0)
            .show_tooltip(true)
            .show_buffer(true)
            .buffered(0.6)
            .show_mouse_at(true)
            .track_bounds(TRACK),
        view.clone(),
    )?;
    info!(value = slider.value(), "single slider ready");

    replay(
        &mut slider,
        &view,
        &[
            CursorEvent::moved(at(80), false),
            CursorEvent::pressed(at(122)),
            CursorEvent::moved(at(200), true),
            CursorEvent::moved(at(330), true),
            CursorEvent::moved(at(520), true),
            CursorEvent::released(at(520)),
            CursorEvent::exited(at(520)),
        ],
    )?;

    slider.set_buffer_percent(0.9)?;
    println!("{}", view.draw());
    info!(value = slider.value(), form = %input.get(), "single slider done");
    Ok(())
}

fn range_slider() -> Result<(), SliderError> {
    let view = TerminalSurface::default();
    let input = FormValue::default();
    let mut slider = ValueSlider::new(
        SliderArgs::default()
            .element(input.clone())
            .min_value(0.0)
            .max_value(200.0)
            .step(10.0)
            .range(RangeValues::new(40.0, 160.0))
            .show_tooltip(true)
            .tooltip_label(|values| match values {
                value_slider::TooltipValues::Single(v) => format!("{v}"),
                value_slider::TooltipValues::Range(l, r) => format!("{l} to {r}"),
            })
            .track_bounds(TRACK),
        view.clone(),
    )?;
    info!(form = %input.get(), "range slider ready");

    replay(
        &mut slider,
        &view,
        &[
            // Left handle sits at x = 80.
            CursorEvent::pressed(at(82)),
            CursorEvent::moved(at(300), true),
            CursorEvent::moved(at(400), true),
            CursorEvent::released(at(400)),
            // Track press right of the filled midpoint grabs the right handle.
            CursorEvent::pressed(at(380)),
            CursorEvent::moved(at(10), true),
            CursorEvent::released(at(10)),
        ],
    )?;

    slider.hide();
    println!("{}|", view.draw());
    slider.show();
    println!("{}", view.draw());
    info!(form = %input.get(), "range slider done");
    Ok(())
}

/// Runs both demos.
pub fn run() -> Result<(), SliderError> {
    single_slider()?;
    println!();
    range_slider()
}
