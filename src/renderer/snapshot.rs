//! Headless frame rendering.
//!
//! Layers, back to front: star field, photon sphere, event horizon,
//! point-source marker, colour-coded trails, and a dot at each live ray's
//! head.

use std::path::Path;

use glam::DVec2;

use super::canvas::Canvas;
use super::palette::{self, BACKGROUND, EVENT_HORIZON, PHOTON_SPHERE, POINT_SOURCE_MARKER};
use super::stars::StarField;
use super::viewport::Viewport;
use crate::error::RenderError;
use crate::metrics::SchwarzschildParams;
use crate::ray::RayState;

const CIRCLE_SEGMENTS: u32 = 100;
const STAR_SIZE: f32 = 2.0;
const HEAD_SIZE: f32 = 3.0;
const MARKER_SIZE: f32 = 8.0;

/// Everything a frame needs besides the rays.
pub struct Scene<'a> {
    pub metric: &'a SchwarzschildParams,
    pub viewport: Viewport,
    pub stars: &'a StarField,
    /// Emission point of the point-source fan, if that group is present
    pub point_source: Option<DVec2>,
}

impl Scene<'_> {
    pub fn render(&self, rays: &[RayState], frame: u64) -> Canvas {
        let vp = &self.viewport;
        let mut canvas = Canvas::new(vp.width, vp.height, BACKGROUND);

        for star in self.stars.stars() {
            let b = star.brightness;
            canvas.point(vp.to_pixel(star.position), STAR_SIZE, [b, b, b]);
        }

        let centre = vp.to_pixel(DVec2::ZERO);
        canvas.dashed_circle(
            centre,
            vp.to_pixel_length(self.metric.photon_sphere_radius()),
            CIRCLE_SEGMENTS,
            PHOTON_SPHERE,
        );
        canvas.fill_circle(centre, vp.to_pixel_length(self.metric.rs), EVENT_HORIZON);

        if let Some(source) = self.point_source {
            canvas.point(vp.to_pixel(source), MARKER_SIZE, POINT_SOURCE_MARKER);
        }

        for ray in rays {
            if !ray.is_active(frame) || ray.trail().len() < 2 {
                continue;
            }
            draw_trail(&mut canvas, vp, ray);
        }

        for ray in rays {
            if !ray.is_active(frame) || ray.is_captured() {
                continue;
            }
            if let Some(&head) = ray.trail().last() {
                canvas.point(vp.to_pixel(head), HEAD_SIZE, palette::head_color(ray.scenario()));
            }
        }

        canvas
    }
}

fn draw_trail(canvas: &mut Canvas, vp: &Viewport, ray: &RayState) {
    let color = palette::trail_color(ray.scenario(), ray.deflection());
    let trail = ray.trail();
    let len = trail.len();

    for (i, pair) in trail.windows(2).enumerate() {
        canvas.line(
            vp.to_pixel(pair[0]),
            vp.to_pixel(pair[1]),
            color,
            palette::trail_alpha(i, len),
            palette::trail_alpha(i + 1, len),
        );
    }
}

/// Encode the canvas as an image file; the format follows the extension.
pub fn save(canvas: &Canvas, path: &Path) -> Result<(), RenderError> {
    canvas
        .to_image()
        .save(path)
        .map_err(|source| RenderError::Image {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Snapshot saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ray::RayScenario;

    fn scene_parts() -> (SchwarzschildParams, StarField) {
        (SchwarzschildParams::new(10.0), StarField::generate(0, 0, 100.0, 100.0))
    }

    #[test]
    fn horizon_is_drawn_black_at_centre() {
        let (metric, stars) = scene_parts();
        let scene = Scene {
            metric: &metric,
            viewport: Viewport::new(100.0, 100.0, 200, 200),
            stars: &stars,
            point_source: None,
        };
        let canvas = scene.render(&[], 0);
        assert_eq!(canvas.pixel(100, 100), Some(EVENT_HORIZON));
        assert_eq!(canvas.pixel(5, 5), Some(BACKGROUND));
    }

    #[test]
    fn pending_rays_are_not_drawn() {
        let (metric, stars) = scene_parts();
        let scene = Scene {
            metric: &metric,
            viewport: Viewport::new(100.0, 100.0, 200, 200),
            stars: &stars,
            point_source: None,
        };
        let ray = RayState::new(
            &metric,
            DVec2::new(-80.0, 60.0),
            DVec2::X,
            RayScenario::Parallel,
            10,
        )
        .unwrap();
        let head = scene.viewport.to_pixel(ray.position());

        let before = scene.render(std::slice::from_ref(&ray), 9);
        assert_eq!(
            before.pixel(head.x as u32, head.y as u32),
            Some(BACKGROUND)
        );

        let after = scene.render(std::slice::from_ref(&ray), 10);
        assert_eq!(
            after.pixel(head.x as u32, head.y as u32),
            Some(palette::head_color(RayScenario::Parallel))
        );
    }
}
