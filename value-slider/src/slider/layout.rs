use value_slider_ui::{Handle, PxPosition, PxRect};

use super::Orientation;

/// Bounding box of the track plus the axis values travel along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TrackGeometry {
    pub bounds: PxRect,
    pub orientation: Orientation,
}

impl TrackGeometry {
    pub fn new(bounds: PxRect, orientation: Orientation) -> Self {
        Self {
            bounds,
            orientation,
        }
    }

    /// Normalized position (0.0..1.0) of the pointer along the track.
    ///
    /// Returns `None` when the track has no extent along its axis. The
    /// vertical axis is inverted so that values grow upward.
    pub fn cursor_progress(&self, position: PxPosition) -> Option<f64> {
        let fraction = match self.orientation {
            Orientation::Horizontal => {
                if self.bounds.width.0 <= 0 {
                    return None;
                }
                position.x.saturating_sub(self.bounds.x).to_f64() / self.bounds.width.to_f64()
            }
            Orientation::Vertical => {
                if self.bounds.height.0 <= 0 {
                    return None;
                }
                let offset = position.y.saturating_sub(self.bounds.y);
                1.0 - offset.to_f64() / self.bounds.height.to_f64()
            }
        };
        Some(fraction.clamp(0.0, 1.0))
    }

    /// Helper: check if a pointer position is within the track bounds.
    pub fn contains(&self, position: PxPosition) -> bool {
        self.bounds.contains(position)
    }

    /// Pixel coordinate along the value axis of a point at `fraction`.
    pub fn axis_offset(&self, fraction: f64) -> f64 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self.orientation {
            Orientation::Horizontal => {
                self.bounds.x.to_f64() + fraction * self.bounds.width.to_f64()
            }
            Orientation::Vertical => {
                self.bounds.bottom().to_f64() - fraction * self.bounds.height.to_f64()
            }
        }
    }

    /// Pixel coordinate of the pointer along the value axis.
    pub fn axis_coordinate(&self, position: PxPosition) -> f64 {
        match self.orientation {
            Orientation::Horizontal => position.x.to_f64(),
            Orientation::Vertical => position.y.to_f64(),
        }
    }

    /// Pixel coordinate of the pointer across the value axis, and the track's
    /// span on that axis.
    fn cross_axis(&self, position: PxPosition) -> (f64, f64, f64) {
        match self.orientation {
            Orientation::Horizontal => (
                position.y.to_f64(),
                self.bounds.y.to_f64(),
                self.bounds.bottom().to_f64(),
            ),
            Orientation::Vertical => (
                position.x.to_f64(),
                self.bounds.x.to_f64(),
                self.bounds.right().to_f64(),
            ),
        }
    }

    /// Finds the handle under the pointer, if any.
    ///
    /// `handles` lists each present handle with its fractional position. A
    /// handle is hit when the pointer is within `radius` pixels of its centre
    /// along the value axis and within `radius` of the track across it. When
    /// two handles overlap the closer one wins, the right one on a tie.
    pub fn handle_at(
        &self,
        position: PxPosition,
        handles: &[(Handle, f64)],
        radius: f64,
    ) -> Option<Handle> {
        let (cross, cross_start, cross_end) = self.cross_axis(position);
        if cross < cross_start - radius || cross > cross_end + radius {
            return None;
        }
        let pointer = self.axis_coordinate(position);
        let mut best: Option<(Handle, f64)> = None;
        for &(handle, fraction) in handles {
            let distance = (pointer - self.axis_offset(fraction)).abs();
            if distance > radius {
                continue;
            }
            let closer = match best {
                None => true,
                Some((best_handle, best_distance)) => {
                    let tie_to_right = distance == best_distance
                        && handle == Handle::Right
                        && best_handle != Handle::Right;
                    distance < best_distance || tie_to_right
                }
            };
            if closer {
                best = Some((handle, distance));
            }
        }
        best.map(|(handle, _)| handle)
    }
}

/// Picks the handle a track press should move.
///
/// `filled` is the filled segment as fractions `(start, end)`. A press strictly
/// past its midpoint belongs to the right handle; without a left handle the
/// right one always wins.
pub(super) fn nearest_handle(progress: f64, filled: (f64, f64), has_left: bool) -> Handle {
    if !has_left {
        return Handle::Right;
    }
    let midpoint = (filled.0 + filled.1) / 2.0;
    if progress > midpoint {
        Handle::Right
    } else {
        Handle::Left
    }
}
