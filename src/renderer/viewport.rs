use glam::{DVec2, Vec2};

use crate::config::ViewConfig;

/// Orthographic mapping from world metres to image pixels.
///
/// The world rectangle is [-half_width, half_width] × [-half_height,
/// half_height] with y pointing up; pixel rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub half_width: f64,
    pub half_height: f64,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(half_width: f64, half_height: f64, width: u32, height: u32) -> Self {
        Self {
            half_width,
            half_height,
            width,
            height,
        }
    }

    pub fn from_config(view: &ViewConfig) -> Self {
        Self::new(view.view_width, view.view_height, view.width, view.height)
    }

    /// Pixels per metre along x.
    pub fn scale(&self) -> f64 {
        self.width as f64 / (2.0 * self.half_width)
    }

    pub fn to_pixel(&self, world: DVec2) -> Vec2 {
        let u = (world.x + self.half_width) / (2.0 * self.half_width);
        let v = (world.y + self.half_height) / (2.0 * self.half_height);
        Vec2::new(
            (u * self.width as f64) as f32,
            ((1.0 - v) * self.height as f64) as f32,
        )
    }

    /// World distance converted to a pixel length.
    pub fn to_pixel_length(&self, meters: f64) -> f32 {
        (meters * self.scale()) as f32
    }
}
