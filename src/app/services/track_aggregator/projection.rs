//! Spherical Mercator projection onto the plot's pixel space
//!
//! Matches the usual web-map convention: `center` (degrees) lands on
//! `translate` (pixels), `scale` is pixels per radian, and y grows downward.

use crate::config::{Margin, ProjectionConfig, TrackPlotConfig};
use std::f64::consts::FRAC_PI_4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorProjection {
    scale: f64,
    translate: (f64, f64),
    /// Center in raw projected units (radians)
    center_raw: (f64, f64),
}

impl MercatorProjection {
    pub fn new(center: (f64, f64), scale: f64, translate: (f64, f64)) -> Self {
        Self {
            scale,
            translate,
            center_raw: raw_mercator(center.0, center.1),
        }
    }

    /// Projection from configuration; `None` translate means `default_translate`
    pub fn from_config(config: &ProjectionConfig, default_translate: (f64, f64)) -> Self {
        Self::new(
            config.center,
            config.scale,
            config.translate.unwrap_or(default_translate),
        )
    }

    /// Project longitude/latitude in degrees to pixel coordinates
    pub fn project(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let (x, y) = raw_mercator(longitude, latitude);
        (
            self.translate.0 + self.scale * (x - self.center_raw.0),
            self.translate.1 - self.scale * (y - self.center_raw.1),
        )
    }

    /// Pixel coordinates back to longitude/latitude in degrees
    pub fn invert(&self, x: f64, y: f64) -> (f64, f64) {
        let raw_x = (x - self.translate.0) / self.scale + self.center_raw.0;
        let raw_y = (self.translate.1 - y) / self.scale + self.center_raw.1;
        (
            raw_x.to_degrees(),
            (2.0 * raw_y.exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees(),
        )
    }
}

fn raw_mercator(longitude: f64, latitude: f64) -> (f64, f64) {
    let lambda = longitude.to_radians();
    let phi = latitude.to_radians();
    (lambda, (FRAC_PI_4 + phi / 2.0).tan().ln())
}

/// Inclusive pixel rectangle inside the plot margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlotBounds {
    pub fn from_margins(width: f64, height: f64, margin: &Margin) -> Self {
        Self {
            min_x: margin.left,
            max_x: width - margin.right,
            min_y: margin.top,
            max_y: height - margin.bottom,
        }
    }

    pub fn from_config(config: &TrackPlotConfig) -> Self {
        Self::from_margins(config.width, config.height, &config.margin)
    }

    /// Points on the boundary are inside; NaN is never inside
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
