//! Conversion between a continuous zoom factor and a discrete slider position.

use crate::config::ConfigError;

/// Validated zoom range with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    min: f32,
    max: f32,
}

impl ZoomBounds {
    pub fn new(min: f32, max: f32) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBound { min, max });
        }
        if min >= max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Inclusive on both ends.
    pub fn contains(&self, zoom: f32) -> bool {
        (self.min..=self.max).contains(&zoom)
    }

    pub fn clamp(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min, self.max)
    }
}

/// A relative zoom change produced by a slider movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRequest {
    /// Zoom level the slider position maps to.
    pub target: f32,
    /// `target - current`, the value handed to the host.
    pub delta: f32,
}

/// Linear mapping between `[min, max]` zoom and `[0, steps]` slider positions.
///
/// Cheap to build; construct one per frame from the current bounds instead of
/// keeping a slider value around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRangeMapper {
    bounds: ZoomBounds,
    steps: u32,
}

impl ZoomRangeMapper {
    pub fn new(bounds: ZoomBounds, steps: u32) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(Self { bounds, steps })
    }

    /// Same resolution over different bounds.
    pub fn with_bounds(self, bounds: ZoomBounds) -> Self {
        Self { bounds, ..self }
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Unclamped slider position for a zoom level.
    pub fn to_slider(&self, zoom: f32) -> f32 {
        let min = f64::from(self.bounds.min);
        let span = f64::from(self.bounds.max) - min;
        ((f64::from(zoom) - min) / span * f64::from(self.steps)) as f32
    }

    /// Unclamped zoom level for a slider position.
    ///
    /// Interpolates between the bounds so that `0` and `steps` land exactly on
    /// `min` and `max`.
    pub fn to_zoom(&self, position: f32) -> f32 {
        let t = f64::from(position) / f64::from(self.steps);
        (f64::from(self.bounds.min) * (1.0 - t) + f64::from(self.bounds.max) * t) as f32
    }

    /// Integer slider position to display for `zoom`, clamped to `[0, steps]`.
    pub fn slider_position(&self, zoom: f32) -> u32 {
        let position = self.to_slider(zoom).round();
        if position.is_nan() || position <= 0.0 {
            0
        } else {
            (position as u32).min(self.steps)
        }
    }

    /// Turns a raw slider position into a zoom request.
    ///
    /// Positions that map outside the bounds yield `None`; they are dropped,
    /// never clamped.
    pub fn request_for(&self, current_zoom: f32, position: f32) -> Option<ZoomRequest> {
        let target = self.to_zoom(position);
        if !self.bounds.contains(target) {
            log::trace!(
                "Dropping zoom request: slider {position} maps to {target}, outside [{}, {}]",
                self.bounds.min,
                self.bounds.max
            );
            return None;
        }
        Some(ZoomRequest {
            target,
            delta: target - current_zoom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-4;

    fn mapper(min: f32, max: f32) -> ZoomRangeMapper {
        ZoomRangeMapper::new(ZoomBounds::new(min, max).unwrap(), 100).unwrap()
    }

    #[test]
    fn bounds_map_to_slider_ends() {
        let m = mapper(0.15, 1.5);
        assert!(m.to_slider(0.15).abs() < EPSILON);
        assert!((m.to_slider(1.5) - 100.0).abs() < EPSILON);
        assert_eq!(m.slider_position(0.15), 0);
        assert_eq!(m.slider_position(1.5), 100);
    }

    #[test]
    fn slider_position_clamps_for_display() {
        let m = mapper(1.0, 2.0);
        assert_eq!(m.slider_position(0.5), 0);
        assert_eq!(m.slider_position(9.0), 100);
        assert_eq!(m.slider_position(f32::NAN), 0);
        assert_eq!(m.slider_position(1.504), 50);
    }

    #[test]
    fn mapping_itself_does_not_clamp() {
        let m = mapper(1.0, 2.0);
        assert!((m.to_slider(2.5) - 150.0).abs() < EPSILON);
        assert!((m.to_zoom(-50.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn in_range_position_produces_delta() {
        let m = mapper(1.0, 2.0);
        let request = m.request_for(1.5, 80.0).unwrap();
        assert!((request.target - 1.8).abs() < EPSILON);
        assert!((request.delta - 0.3).abs() < EPSILON);
    }

    #[test]
    fn out_of_range_position_is_dropped() {
        let m = mapper(1.0, 2.0);
        assert_eq!(m.request_for(1.5, 150.0), None);
        assert_eq!(m.request_for(1.5, -1.0), None);
    }

    #[test]
    fn slider_ends_hit_bounds_exactly() {
        let m = mapper(0.15, 1.5);
        assert_eq!(m.to_zoom(0.0), 0.15);
        assert_eq!(m.to_zoom(100.0), 1.5);
    }

    #[test]
    fn slider_ends_are_inclusive() {
        let m = mapper(1.0, 2.0);
        assert!(m.request_for(1.5, 0.0).is_some());
        assert!(m.request_for(1.5, 100.0).is_some());
    }

    #[test]
    fn zero_steps_rejected() {
        let bounds = ZoomBounds::new(1.0, 2.0).unwrap();
        assert!(matches!(
            ZoomRangeMapper::new(bounds, 0),
            Err(ConfigError::ZeroSteps)
        ));
    }

    #[test]
    fn non_finite_bounds_rejected() {
        assert!(matches!(
            ZoomBounds::new(f32::NAN, 2.0),
            Err(ConfigError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            ZoomBounds::new(1.0, f32::INFINITY),
            Err(ConfigError::NonFiniteBound { .. })
        ));
    }

    proptest! {
        #[test]
        fn round_trip_is_stable(
            min in 0.01f32..10.0,
            span in 0.1f32..10.0,
            steps in 1u32..500,
            fraction in 0.0f64..=1.0,
        ) {
            let bounds = ZoomBounds::new(min, min + span).unwrap();
            let m = ZoomRangeMapper::new(bounds, steps).unwrap();
            let p = (fraction * f64::from(steps)).round() as u32;
            let back = m.to_slider(m.to_zoom(p as f32));
            prop_assert!((back - p as f32).abs() < 1e-2, "p={p} back={back}");
            prop_assert_eq!(m.slider_position(m.to_zoom(p as f32)), p);
        }

        #[test]
        fn every_slider_position_maps_inside_bounds(
            min in 0.01f32..10.0,
            span in 0.1f32..10.0,
            steps in 1u32..500,
            fraction in 0.0f64..=1.0,
        ) {
            let bounds = ZoomBounds::new(min, min + span).unwrap();
            let m = ZoomRangeMapper::new(bounds, steps).unwrap();
            let p = (fraction * f64::from(steps)).round() as u32;
            let zoom = m.to_zoom(p as f32);
            prop_assert!(bounds.contains(zoom), "p={p} zoom={zoom}");
        }
    }
}
