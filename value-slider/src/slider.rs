//! A slider holding one value, or two values for range selection.
//!
//! ## Usage
//!
//! Build a [`ValueSlider`] from [`SliderArgs`] and a [`RenderSurface`], then
//! either call the setters directly or feed it pointer events (see
//! [`ValueSlider::handle_cursor_event`]). Every change is quantized to the
//! configured step, mirrored into the bound [`FormValue`] and pushed to the
//! surface.
//!
//! ```
//! use value_slider::slider::{SliderArgs, ValueSlider};
//! use value_slider_ui::{FormValue, Handle, RenderSurface, TrackExtent, Visibility};
//!
//! #[derive(Default)]
//! struct Fill(u8);
//!
//! impl RenderSurface for Fill {
//!     fn set_fill_extent(&mut self, extent: TrackExtent) {
//!         self.0 = extent.length;
//!     }
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
//!     SliderArgs::default().element(input.clone()).step(10.0),
//!     Fill::default(),
//! )?;
//!
//! slider.set_percent(0.57)?;
//! assert_eq!(slider.value(), 60.0);
//! assert_eq!(input.get(), "60");
//! assert_eq!(slider.surface().0, 60);
//! # Ok::<(), value_slider::SliderError>(())
//! ```
use std::{fmt, sync::Arc};

use derive_setters::Setters;
use tracing::{trace, warn};
use value_slider_ui::{FormValue, Handle, PxRect, RenderSurface, Visibility};

use crate::error::{ConfigurationError, Result, SliderError, ensure_finite};

use layout::TrackGeometry;
use render::{render_buffer, render_hover, render_value};
use value::{
    SliderState, clip_and_quantize, fraction_to_percent, parse_leading_int, percent_to_value,
    step_divides,
};

pub use interaction::{DragState, PointerTarget};

mod interaction;
mod layout;
mod render;
mod value;

/// Axis the slider's values travel along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Values grow from left to right.
    #[default]
    Horizontal,
    /// Values grow from bottom to top.
    Vertical,
}

/// The value(s) a tooltip label is formatted from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipValues {
    /// A single-handle slider's value.
    Single(f64),
    /// A range slider's `(left, right)` values.
    Range(f64, f64),
}

/// Formats tooltip text from the current value(s).
#[derive(Clone)]
pub struct LabelFormatter(Arc<dyn Fn(TooltipValues) -> String + Send + Sync>);

impl LabelFormatter {
    /// Wraps a formatting function.
    pub fn new<F>(format: F) -> Self
    where
        F: Fn(TooltipValues) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(format))
    }

    /// Produces the label for `values`.
    pub fn format(&self, values: TooltipValues) -> String {
        (self.0)(values)
    }
}

impl Default for LabelFormatter {
    /// The value itself, or both values joined with a comma.
    fn default() -> Self {
        Self::new(|values| match values {
            TooltipValues::Single(value) => value.to_string(),
            TooltipValues::Range(left, right) => format!("{left},{right}"),
        })
    }
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LabelFormatter(..)")
    }
}

/// Initial values for a range slider.
///
/// A missing side falls back to the bound form value, then to `min_value`
/// (left) or `max_value` (right).
#[derive(Debug, Clone, Copy, PartialEq, Default, Setters)]
pub struct RangeValues {
    /// Initial lower bound.
    #[setters(strip_option)]
    pub left_value: Option<f64>,
    /// Initial upper bound.
    #[setters(strip_option)]
    pub right_value: Option<f64>,
}

impl RangeValues {
    /// Both initial bounds.
    pub fn new(left_value: f64, right_value: f64) -> Self {
        Self {
            left_value: Some(left_value),
            right_value: Some(right_value),
        }
    }
}

/// Arguments for constructing a [`ValueSlider`].
#[derive(Debug, Clone, Setters)]
pub struct SliderArgs {
    /// The form value the slider mirrors its state into. Required.
    #[setters(strip_option)]
    pub element: Option<FormValue>,
    /// Initial value of a single slider. When absent, the bound form value is
    /// parsed, falling back to 0.
    #[setters(strip_option)]
    pub value: Option<f64>,
    /// Smallest selectable value.
    pub min_value: f64,
    /// Largest selectable value.
    pub max_value: f64,
    /// Distance between selectable values. Must divide the range evenly.
    pub step: f64,
    /// Turns the slider into a two-handle range slider.
    #[setters(strip_option)]
    pub range: Option<RangeValues>,
    /// Lay the track out vertically.
    pub vertical: bool,
    /// Show a buffered indicator behind the fill.
    pub show_buffer: bool,
    /// Initial buffered fraction (0.0 to 1.0); only used with `show_buffer`.
    #[setters(strip_option)]
    pub buffered: Option<f64>,
    /// Track the hovering pointer with a hover indicator.
    pub show_mouse_at: bool,
    /// Show a tooltip with the current value(s).
    pub show_tooltip: bool,
    /// Place the tooltip on the other side of the track.
    pub invert_tooltip: bool,
    /// Tooltip text formatter.
    #[setters(skip)]
    pub tooltip_label: LabelFormatter,
    /// Initial track bounds in device pixels. Pointer input is ignored until
    /// bounds with a non-zero extent are known.
    #[setters(strip_option)]
    pub track_bounds: Option<PxRect>,
}

impl SliderArgs {
    /// Sets the tooltip label formatter.
    pub fn tooltip_label<F>(mut self, format: F) -> Self
    where
        F: Fn(TooltipValues) -> String + Send + Sync + 'static,
    {
        self.tooltip_label = LabelFormatter::new(format);
        self
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            element: None,
            value: None,
            min_value: 0.0,
            max_value: 100.0,
            step: 1.0,
            range: None,
            vertical: false,
            show_buffer: false,
            buffered: None,
            show_mouse_at: false,
            show_tooltip: false,
            invert_tooltip: false,
            tooltip_label: LabelFormatter::default(),
            track_bounds: None,
        }
    }
}

/// Validated, immutable slider configuration.
#[derive(Debug, Clone)]
pub struct SliderConfig {
    /// Smallest selectable value.
    pub min_value: f64,
    /// Largest selectable value.
    pub max_value: f64,
    /// Distance between selectable values.
    pub step: f64,
    /// Track axis.
    pub orientation: Orientation,
    /// Two handles instead of one.
    pub is_range: bool,
    /// Buffered indicator enabled.
    pub has_buffer: bool,
    /// Hover indicator enabled.
    pub has_hover_indicator: bool,
    /// Tooltip enabled.
    pub has_tooltip: bool,
    /// Tooltip drawn on the opposite side of the track.
    pub invert_tooltip: bool,
    /// Tooltip text formatter.
    pub tooltip_label: LabelFormatter,
}

impl SliderConfig {
    /// Validates the numeric options of `args`.
    pub fn from_args(args: &SliderArgs) -> Result<Self, ConfigurationError> {
        let (min, max, step) = (args.min_value, args.max_value, args.step);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigurationError::NonFiniteBounds { min, max });
        }
        if min >= max {
            return Err(ConfigurationError::EmptyRange { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigurationError::InvalidStep { step });
        }
        let range = max - min;
        if !step_divides(range, step) {
            return Err(ConfigurationError::StepDoesNotDivideRange { range, step });
        }

        Ok(Self {
            min_value: min,
            max_value: max,
            step,
            orientation: if args.vertical {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            },
            is_range: args.range.is_some(),
            has_buffer: args.show_buffer,
            has_hover_indicator: args.show_mouse_at,
            has_tooltip: args.show_tooltip,
            invert_tooltip: args.invert_tooltip,
            tooltip_label: args.tooltip_label.clone(),
        })
    }
}

/// A slider value model bound to a render surface and a form value.
pub struct ValueSlider<S: RenderSurface> {
    config: SliderConfig,
    state: SliderState,
    controller: interaction::SliderController,
    geometry: TrackGeometry,
    element: FormValue,
    surface: S,
}

impl<S: RenderSurface> ValueSlider<S> {
    /// Validates `args`, seeds the initial value(s) and renders the slider.
    ///
    /// The surface is told to hide the widget while it is being set up and to
    /// show it once the initial state has been rendered.
    #[tracing::instrument(level = "debug", skip(args, surface))]
    pub fn new(args: SliderArgs, surface: S) -> Result<Self> {
        let config = SliderConfig::from_args(&args)?;
        let element = args
            .element
            .clone()
            .ok_or(ConfigurationError::MissingElement)?;
        check_initial("value", args.value)?;
        check_initial("buffered", args.buffered)?;
        if let Some(range) = args.range {
            check_initial("range.left_value", range.left_value)?;
            check_initial("range.right_value", range.right_value)?;
        }

        let state = SliderState {
            right_value: if config.is_range {
                config.max_value
            } else {
                config.min_value
            },
            left_value: config.is_range.then_some(config.min_value),
            buffered: config.has_buffer.then_some(0),
            hover_position: config.has_hover_indicator.then_some(0.0),
            visibility: Visibility::Hidden,
        };
        let geometry = TrackGeometry::new(
            args.track_bounds.unwrap_or(PxRect::ZERO),
            config.orientation,
        );

        let mut slider = Self {
            config,
            state,
            controller: interaction::SliderController::default(),
            geometry,
            element,
            surface,
        };
        slider.surface.set_visibility(Visibility::Hidden);
        slider.seed(&args)?;
        render_hover(&slider.state, &mut slider.surface);
        slider.show();
        Ok(slider)
    }

    fn seed(&mut self, args: &SliderArgs) -> Result<()> {
        if let Some(range) = args.range {
            let (form_left, form_right) = self.element.with(parse_range_form);
            let right = range
                .right_value
                .or(args.value)
                .or(form_right)
                .unwrap_or(self.config.max_value);
            let left = range
                .left_value
                .or(form_left)
                .unwrap_or(self.config.min_value);
            self.set_right_value(right)?;
            self.set_left_value(left)?;
        } else {
            let value = match args.value {
                Some(value) => value,
                None => self.element.with(parse_single_form).unwrap_or(0.0),
            };
            self.set_right_value(value)?;
        }

        if let Some(buffered) = args.buffered {
            if self.config.has_buffer {
                self.set_buffer_percent(buffered)?;
            } else {
                warn!(buffered, "initial buffered value ignored: show_buffer is off");
            }
        } else {
            render_buffer(&self.state, &mut self.surface);
        }
        Ok(())
    }

    /// The validated configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface, for host-side bookkeeping.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The bound form value.
    pub fn element(&self) -> &FormValue {
        &self.element
    }

    /// Tears the slider down, handing back the surface and the form value.
    pub fn into_parts(self) -> (S, FormValue) {
        (self.surface, self.element)
    }

    /// The slider's value; the upper bound on a range slider.
    pub fn value(&self) -> f64 {
        self.right_value()
    }

    /// The right handle's value.
    pub fn right_value(&self) -> f64 {
        self.state.right_value
    }

    /// The left handle's value, on range sliders.
    pub fn left_value(&self) -> Option<f64> {
        self.state.left_value
    }

    /// Buffered integer percent, when buffering is enabled.
    pub fn buffered(&self) -> Option<u8> {
        self.state.buffered
    }

    /// Hovered fraction of the track, when the hover indicator is enabled.
    pub fn hover_position(&self) -> Option<f64> {
        self.state.hover_position
    }

    /// The string mirrored into the bound form value.
    pub fn form_value(&self) -> String {
        match self.state.left_value {
            Some(left) => format!("{left},{}", self.state.right_value),
            None => self.state.right_value.to_string(),
        }
    }

    /// Sets the value of a single slider, or the upper bound of a range.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        self.set_right_value_as("set_value", value)
    }

    /// Sets the right handle's value.
    ///
    /// The value is clipped to `[left + step, max]` on a range slider and to
    /// `[min, max]` otherwise, then snapped to the nearest step.
    pub fn set_right_value(&mut self, value: f64) -> Result<()> {
        self.set_right_value_as("set_right_value", value)
    }

    fn set_right_value_as(&mut self, operation: &'static str, value: f64) -> Result<()> {
        let value = ensure_finite(operation, value)?;
        let lower = match self.state.left_value {
            Some(left) => left + self.config.step,
            None => self.config.min_value,
        };
        self.state.right_value = clip_and_quantize(
            value,
            lower,
            self.config.max_value,
            self.config.min_value,
            self.config.step,
        );
        trace!(
            operation,
            requested = value,
            stored = self.state.right_value,
            "right value set"
        );
        self.commit();
        Ok(())
    }

    /// Sets the left handle's value, clipped to `[min, right - step]`.
    pub fn set_left_value(&mut self, value: f64) -> Result<()> {
        self.set_left_value_as("set_left_value", value)
    }

    fn set_left_value_as(&mut self, operation: &'static str, value: f64) -> Result<()> {
        if !self.config.is_range {
            return Err(SliderError::InvalidState {
                operation,
                reason: "the slider has no left handle",
            });
        }
        let value = ensure_finite(operation, value)?;
        let left = clip_and_quantize(
            value,
            self.config.min_value,
            self.state.right_value - self.config.step,
            self.config.min_value,
            self.config.step,
        );
        self.state.left_value = Some(left);
        trace!(operation, requested = value, stored = left, "left value set");
        self.commit();
        Ok(())
    }

    /// Alias of [`set_right_percent`](Self::set_right_percent).
    pub fn set_percent(&mut self, percent: f64) -> Result<()> {
        let percent = ensure_finite("set_percent", percent)?;
        let value = percent_to_value(percent, self.config.min_value, self.config.max_value);
        self.set_right_value_as("set_percent", value)
    }

    /// Sets the right handle from a fractional track position.
    ///
    /// `percent` is not clamped here; the value it maps to is clipped like any
    /// other.
    pub fn set_right_percent(&mut self, percent: f64) -> Result<()> {
        let percent = ensure_finite("set_right_percent", percent)?;
        let value = percent_to_value(percent, self.config.min_value, self.config.max_value);
        self.set_right_value_as("set_right_percent", value)
    }

    /// Sets the left handle from a fractional track position.
    pub fn set_left_percent(&mut self, percent: f64) -> Result<()> {
        let percent = ensure_finite("set_left_percent", percent)?;
        let value = percent_to_value(percent, self.config.min_value, self.config.max_value);
        self.set_left_value_as("set_left_percent", value)
    }

    /// Updates the buffered indicator. `percent` is clamped to `[0, 1]` and
    /// stored as a truncated integer percent.
    pub fn set_buffer_percent(&mut self, percent: f64) -> Result<()> {
        if !self.config.has_buffer {
            return Err(SliderError::InvalidState {
                operation: "set_buffer_percent",
                reason: "buffering was not configured",
            });
        }
        let percent = ensure_finite("set_buffer_percent", percent)?;
        self.state.buffered = Some(fraction_to_percent(percent));
        render_buffer(&self.state, &mut self.surface);
        Ok(())
    }

    /// Updates the bounds pointer positions are measured against.
    pub fn set_track_bounds(&mut self, bounds: PxRect) {
        self.geometry.bounds = bounds;
    }

    /// Current track bounds.
    pub fn track_bounds(&self) -> PxRect {
        self.geometry.bounds
    }

    /// Current display state.
    pub fn visibility(&self) -> Visibility {
        self.state.visibility
    }

    /// Makes the widget visible.
    pub fn show(&mut self) {
        self.display(Visibility::Visible);
    }

    /// Hides the widget while keeping its layout.
    pub fn hide(&mut self) {
        self.display(Visibility::Hidden);
    }

    /// Removes the widget from layout.
    pub fn remove(&mut self) {
        self.display(Visibility::Removed);
    }

    /// Sets the display state.
    pub fn display(&mut self, visibility: Visibility) {
        self.state.visibility = visibility;
        self.surface.set_visibility(visibility);
    }

    fn set_handle_percent(&mut self, handle: Handle, percent: f64) -> Result<()> {
        match handle {
            Handle::Left => self.set_left_percent(percent),
            Handle::Right => self.set_right_percent(percent),
        }
    }

    fn commit(&mut self) {
        self.element.set(self.form_value());
        render_value(&self.config, &self.state, &mut self.surface);
        if self.config.has_buffer {
            render_buffer(&self.state, &mut self.surface);
        }
    }
}

impl<S: RenderSurface> fmt::Debug for ValueSlider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueSlider")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("drag", &self.drag_state())
            .field("bounds", &self.geometry.bounds)
            .finish_non_exhaustive()
    }
}

fn check_initial(field: &'static str, value: Option<f64>) -> Result<(), ConfigurationError> {
    match value {
        Some(value) if !value.is_finite() => {
            Err(ConfigurationError::InvalidInitialValue { field, value })
        }
        _ => Ok(()),
    }
}

fn parse_single_form(text: &str) -> Option<f64> {
    let parsed = parse_leading_int(text);
    if parsed.is_none() && !text.trim().is_empty() {
        warn!(form = text, "bound form value is not a number; starting from 0");
    }
    parsed
}

fn parse_range_form(text: &str) -> (Option<f64>, Option<f64>) {
    if text.trim().is_empty() {
        return (None, None);
    }
    let parsed = match text.split_once(',') {
        Some((left, right)) => (parse_leading_int(left), parse_leading_int(right)),
        None => (None, parse_leading_int(text)),
    };
    if parsed.0.is_none() || parsed.1.is_none() {
        warn!(form = text, "bound form value is not a \"left,right\" pair");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use value_slider_ui::{
        TrackExtent,
        recording::{RecordingSurface, SurfaceCall},
    };

    use super::*;

    fn slider(args: SliderArgs) -> ValueSlider<RecordingSurface> {
        let args = if args.element.is_none() {
            args.element(FormValue::default())
        } else {
            args
        };
        ValueSlider::new(args, RecordingSurface::new()).expect("valid slider")
    }

    fn reference_quantize(value: f64, min: f64, max: f64, step: f64) -> f64 {
        let clipped = value.clamp(min, max);
        let remainder = (clipped - min) % step;
        if remainder >= step / 2.0 {
            clipped - remainder + step
        } else {
            clipped - remainder
        }
    }

    #[test]
    fn percent_rounds_down_below_half_step() {
        let mut s = slider(SliderArgs::default().step(10.0));
        s.set_percent(0.54).unwrap();
        assert_eq!(s.value(), 50.0);
    }

    #[test]
    fn percent_rounds_up_from_half_step() {
        let mut s = slider(SliderArgs::default().step(10.0));
        s.set_percent(0.57).unwrap();
        assert_eq!(s.value(), 60.0);
        s.set_value(55.0).unwrap();
        assert_eq!(s.value(), 60.0);
    }

    #[test]
    fn set_value_matches_nearest_step_across_the_range() {
        let mut s = slider(SliderArgs::default().step(5.0));
        for tenth in -200..=1200 {
            let v = tenth as f64 / 10.0;
            s.set_value(v).unwrap();
            let got = s.value();
            assert_eq!(got, reference_quantize(v, 0.0, 100.0, 5.0), "input {v}");
            assert!((0.0..=100.0).contains(&got));
        }
    }

    #[test]
    fn set_right_percent_maps_through_the_range() {
        let mut s = slider(SliderArgs::default().min_value(-50.0).max_value(50.0).step(4.0));
        for hundredth in 0..=100 {
            let p = hundredth as f64 / 100.0;
            s.set_right_percent(p).unwrap();
            let raw = p * 100.0 - 50.0;
            assert_eq!(s.value(), reference_quantize(raw, -50.0, 50.0, 4.0), "p {p}");
        }
    }

    #[test]
    fn percent_outside_unit_interval_is_clipped_by_value() {
        let mut s = slider(SliderArgs::default());
        s.set_right_percent(1.5).unwrap();
        assert_eq!(s.value(), 100.0);
        s.set_right_percent(-0.5).unwrap();
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn left_value_is_clipped_below_right_but_kept_inside_its_bound() {
        let mut s = slider(SliderArgs::default().range(RangeValues::new(10.0, 95.0)));
        s.set_left_value(99.0).unwrap();
        assert_eq!(s.left_value(), Some(94.0));
        // 90 already lies in [min, right - step] = [0, 94], so the clip leaves
        // it alone rather than pulling it up to the bound.
        s.set_left_value(90.0).unwrap();
        assert_eq!(s.left_value(), Some(90.0));
        assert_eq!(s.right_value(), 95.0);
    }

    #[test]
    fn right_value_is_clipped_above_left() {
        let mut s = slider(SliderArgs::default().step(5.0).range(RangeValues::new(40.0, 60.0)));
        s.set_right_value(10.0).unwrap();
        assert_eq!(s.right_value(), 45.0);
        s.set_right_percent(0.0).unwrap();
        assert_eq!(s.right_value(), 45.0);
    }

    #[test]
    fn range_invariant_holds_after_mixed_setters() {
        let mut s = slider(SliderArgs::default().step(2.0).range(RangeValues::default()));
        let inputs = [50.0, 3.0, 99.0, -10.0, 48.0, 51.0, 100.0, 0.0, 77.0, 77.0];
        for (i, v) in inputs.iter().copied().enumerate() {
            if i % 2 == 0 {
                s.set_left_value(v).unwrap();
            } else {
                s.set_right_value(v).unwrap();
            }
            let left = s.left_value().unwrap();
            let right = s.right_value();
            assert!(left + 2.0 <= right, "left {left} right {right}");
            assert!(left >= 0.0 && right <= 100.0);
            assert_eq!(left % 2.0, 0.0);
            assert_eq!(right % 2.0, 0.0);
        }
    }

    #[test]
    fn set_value_is_idempotent() {
        let element = FormValue::default();
        let mut s = slider(SliderArgs::default().element(element.clone()).step(4.0));
        s.set_value(43.0).unwrap();
        let first = (s.value(), element.get(), s.surface().fill);
        s.set_value(43.0).unwrap();
        assert_eq!((s.value(), element.get(), s.surface().fill), first);
        assert_eq!(element.get(), "44");
    }

    #[test]
    fn non_finite_input_is_rejected_without_change() {
        let mut s = slider(SliderArgs::default().value(30.0));
        assert!(matches!(
            s.set_value(f64::NAN),
            Err(SliderError::InvalidArgument {
                operation: "set_value",
                ..
            })
        ));
        assert!(matches!(
            s.set_right_percent(f64::INFINITY),
            Err(SliderError::InvalidArgument {
                operation: "set_right_percent",
                ..
            })
        ));
        assert_eq!(s.value(), 30.0);
        assert_eq!(s.element().get(), "30");
    }

    #[test]
    fn left_operations_need_a_range_slider() {
        let mut s = slider(SliderArgs::default());
        assert!(matches!(
            s.set_left_value(10.0),
            Err(SliderError::InvalidState {
                operation: "set_left_value",
                ..
            })
        ));
        assert!(matches!(
            s.set_left_percent(0.1),
            Err(SliderError::InvalidState { .. })
        ));
        assert_eq!(s.left_value(), None);
    }

    #[test]
    fn buffer_percent_is_truncated() {
        let mut s = slider(SliderArgs::default().show_buffer(true));
        s.set_buffer_percent(0.333).unwrap();
        assert_eq!(s.buffered(), Some(33));
        assert_eq!(s.surface().buffer, Some(33));
        s.set_buffer_percent(4.0).unwrap();
        assert_eq!(s.buffered(), Some(100));
        s.set_buffer_percent(-1.0).unwrap();
        assert_eq!(s.buffered(), Some(0));
    }

    #[test]
    fn buffer_requires_configuration() {
        let mut s = slider(SliderArgs::default());
        assert!(matches!(
            s.set_buffer_percent(0.5),
            Err(SliderError::InvalidState {
                operation: "set_buffer_percent",
                ..
            })
        ));
        assert_eq!(s.buffered(), None);
    }

    #[test]
    fn initial_buffer_is_applied() {
        let s = slider(SliderArgs::default().show_buffer(true).buffered(0.5));
        assert_eq!(s.buffered(), Some(50));
        let ignored = slider(SliderArgs::default().buffered(0.5));
        assert_eq!(ignored.buffered(), None);
    }

    #[test]
    fn configuration_is_validated() {
        let element = FormValue::default();
        let build = |args: SliderArgs| {
            ValueSlider::new(args.element(element.clone()), RecordingSurface::new()).map(|_| ())
        };

        assert_eq!(
            build(SliderArgs::default().min_value(10.0).max_value(10.0)),
            Err(SliderError::Configuration(ConfigurationError::EmptyRange {
                min: 10.0,
                max: 10.0
            }))
        );
        assert_eq!(
            build(SliderArgs::default().step(7.0)),
            Err(SliderError::Configuration(
                ConfigurationError::StepDoesNotDivideRange {
                    range: 100.0,
                    step: 7.0
                }
            ))
        );
        assert!(matches!(
            build(SliderArgs::default().step(0.0)),
            Err(SliderError::Configuration(ConfigurationError::InvalidStep { .. }))
        ));
        assert!(matches!(
            build(SliderArgs::default().max_value(f64::INFINITY)),
            Err(SliderError::Configuration(ConfigurationError::NonFiniteBounds { .. }))
        ));
        assert!(matches!(
            build(SliderArgs::default().value(f64::NAN)),
            Err(SliderError::Configuration(
                ConfigurationError::InvalidInitialValue { field: "value", .. }
            ))
        ));
        assert_eq!(
            ValueSlider::new(SliderArgs::default(), RecordingSurface::new()).map(|_| ()),
            Err(SliderError::Configuration(ConfigurationError::MissingElement))
        );
    }

    #[test]
    fn fractional_steps_are_accepted() {
        let mut s = slider(SliderArgs::default().max_value(1.0).step(0.1));
        s.set_value(0.46).unwrap();
        assert_eq!(s.value(), 0.5);
        s.set_value(1.0).unwrap();
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn fractional_steps_mirror_clean_decimals() {
        let element = FormValue::default();
        let mut s = slider(
            SliderArgs::default()
                .element(element.clone())
                .max_value(1.0)
                .step(0.1),
        );
        s.set_value(0.3).unwrap();
        assert_eq!(element.get(), "0.3");
        s.set_value(0.7).unwrap();
        assert_eq!(element.get(), "0.7");
        s.set_percent(0.33).unwrap();
        assert_eq!(element.get(), "0.3");
    }

    #[test]
    fn initial_value_is_read_from_the_form() {
        let s = slider(SliderArgs::default().element(FormValue::new("42")));
        assert_eq!(s.value(), 42.0);

        let s = slider(SliderArgs::default().element(FormValue::new("not a number")));
        assert_eq!(s.value(), 0.0);

        let s = slider(
            SliderArgs::default()
                .min_value(10.0)
                .element(FormValue::new("")),
        );
        assert_eq!(s.value(), 10.0);
    }

    #[test]
    fn explicit_value_beats_the_form() {
        let element = FormValue::new("42");
        let s = slider(SliderArgs::default().element(element.clone()).value(7.0));
        assert_eq!(s.value(), 7.0);
        assert_eq!(element.get(), "7");
    }

    #[test]
    fn range_defaults_and_form_seeding() {
        let s = slider(SliderArgs::default().range(RangeValues::default()));
        assert_eq!((s.left_value(), s.right_value()), (Some(0.0), 100.0));
        assert_eq!(s.form_value(), "0,100");

        let s = slider(
            SliderArgs::default()
                .range(RangeValues::default())
                .element(FormValue::new("20,80")),
        );
        assert_eq!((s.left_value(), s.right_value()), (Some(20.0), 80.0));

        let s = slider(
            SliderArgs::default()
                .range(RangeValues::default().left_value(30.0))
                .element(FormValue::new("20,80")),
        );
        assert_eq!((s.left_value(), s.right_value()), (Some(30.0), 80.0));
    }

    #[test]
    fn inverted_initial_range_is_repaired() {
        let s = slider(SliderArgs::default().range(RangeValues::new(70.0, 30.0)));
        assert_eq!(s.right_value(), 30.0);
        assert_eq!(s.left_value(), Some(29.0));
    }

    #[test]
    fn form_value_mirrors_every_change() {
        let element = FormValue::default();
        let mut s = slider(
            SliderArgs::default()
                .element(element.clone())
                .range(RangeValues::new(20.0, 80.0)),
        );
        assert_eq!(element.get(), "20,80");
        s.set_left_value(25.0).unwrap();
        assert_eq!(element.get(), "25,80");
        s.set_right_percent(0.5).unwrap();
        assert_eq!(element.get(), "25,50");
    }

    #[test]
    fn render_pushes_fill_and_handles() {
        let mut s = slider(SliderArgs::default().range(RangeValues::new(20.0, 80.0)));
        assert_eq!(s.surface().fill, Some(TrackExtent::new(20, 60)));
        assert_eq!(s.surface().left_handle, Some(20));
        assert_eq!(s.surface().right_handle, Some(80));

        s.surface_mut().clear_calls();
        s.set_left_value(50.0).unwrap();
        assert_eq!(
            s.surface().calls,
            vec![
                SurfaceCall::Fill(TrackExtent::new(50, 30)),
                SurfaceCall::Handle(Handle::Left, 50),
                SurfaceCall::Handle(Handle::Right, 80),
            ]
        );
    }

    #[test]
    fn render_uses_integer_percent_of_the_range() {
        let mut s = slider(SliderArgs::default().min_value(100.0).max_value(400.0));
        s.set_value(200.0).unwrap();
        assert_eq!(s.surface().fill, Some(TrackExtent::new(0, 33)));
        assert_eq!(s.surface().right_handle, Some(33));
    }

    #[test]
    fn default_tooltip_labels() {
        let mut s = slider(SliderArgs::default().show_tooltip(true).value(40.0));
        assert_eq!(s.surface().tooltip_text.as_deref(), Some("40"));
        assert_eq!(s.surface().tooltip_position, Some((40, false)));
        s.set_value(41.0).unwrap();
        assert_eq!(s.surface().tooltip_text.as_deref(), Some("41"));

        let s = slider(
            SliderArgs::default()
                .show_tooltip(true)
                .invert_tooltip(true)
                .range(RangeValues::new(20.0, 60.0)),
        );
        assert_eq!(s.surface().tooltip_text.as_deref(), Some("20,60"));
        assert_eq!(s.surface().tooltip_position, Some((40, true)));
    }

    #[test]
    fn custom_tooltip_label() {
        let s = slider(
            SliderArgs::default()
                .show_tooltip(true)
                .value(25.0)
                .tooltip_label(|values| match values {
                    TooltipValues::Single(v) => format!("{v}%"),
                    TooltipValues::Range(l, r) => format!("{l}% to {r}%"),
                }),
        );
        assert_eq!(s.surface().tooltip_text.as_deref(), Some("25%"));
    }

    #[test]
    fn tooltip_is_silent_when_disabled() {
        let s = slider(SliderArgs::default().value(10.0));
        assert_eq!(s.surface().tooltip_text, None);
        assert_eq!(s.surface().tooltip_position, None);
    }

    #[test]
    fn construction_hides_then_shows() {
        let s = slider(SliderArgs::default());
        let visibility: Vec<_> = s
            .surface()
            .calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Visibility(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(visibility, vec![Visibility::Hidden, Visibility::Visible]);
        assert_eq!(s.visibility(), Visibility::Visible);
    }

    #[test]
    fn display_controls() {
        let mut s = slider(SliderArgs::default());
        s.hide();
        assert_eq!(s.surface().visibility, Some(Visibility::Hidden));
        s.remove();
        assert_eq!(s.visibility(), Visibility::Removed);
        s.display(Visibility::Visible);
        assert_eq!(s.surface().visibility, Some(Visibility::Visible));
    }

    #[test]
    fn into_parts_returns_collaborators() {
        let element = FormValue::new("12");
        let s = slider(SliderArgs::default().element(element.clone()));
        let (surface, returned) = s.into_parts();
        assert!(returned.ptr_eq(&element));
        assert_eq!(surface.right_handle, Some(12));
    }
}
