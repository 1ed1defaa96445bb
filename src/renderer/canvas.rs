use std::f32::consts::TAU;

use glam::Vec2;
use image::{Rgb, RgbImage};

use super::palette::Color;

/// Linear-RGB software framebuffer with alpha blending.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x as i64, y as i64).map(|i| self.pixels[i])
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Blend `color` over the pixel at (x, y). Off-canvas writes are dropped.
    pub fn blend(&mut self, x: i64, y: i64, color: Color, alpha: f32) {
        let Some(i) = self.index(x, y) else { return };
        let a = alpha.clamp(0.0, 1.0);
        let dst = &mut self.pixels[i];
        for c in 0..3 {
            dst[c] = dst[c] * (1.0 - a) + color[c] * a;
        }
    }

    /// Square dot of side `size` pixels centred on `center`.
    pub fn point(&mut self, center: Vec2, size: f32, color: Color) {
        let half = (size / 2.0).max(0.5);
        let x0 = (center.x - half).floor() as i64;
        let x1 = (center.x + half).ceil() as i64;
        let y0 = (center.y - half).floor() as i64;
        let y1 = (center.y + half).ceil() as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    /// Straight segment with opacity interpolated from `alpha_a` to `alpha_b`.
    pub fn line(&mut self, a: Vec2, b: Vec2, color: Color, alpha_a: f32, alpha_b: f32) {
        if !self.segment_overlaps(a, b) {
            return;
        }

        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
        // Trails are short per segment; anything this long is far off canvas
        if steps > 4.0 * (self.width + self.height) as f32 {
            return;
        }

        let steps = steps as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = a + delta * t;
            let alpha = alpha_a + (alpha_b - alpha_a) * t;
            self.blend(p.x.floor() as i64, p.y.floor() as i64, color, alpha);
        }
    }

    fn segment_overlaps(&self, a: Vec2, b: Vec2) -> bool {
        let min = a.min(b);
        let max = a.max(b);
        max.x >= 0.0 && max.y >= 0.0 && min.x < self.width as f32 && min.y < self.height as f32
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let r2 = radius * radius;
        let x0 = (center.x - radius).floor() as i64;
        let x1 = (center.x + radius).ceil() as i64;
        let y0 = (center.y - radius).floor() as i64;
        let y1 = (center.y + radius).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    /// Circle outline split into `segments` arcs, every other one drawn.
    pub fn dashed_circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        let arc = TAU / segments as f32;
        for i in (0..segments).step_by(2) {
            let a = center + Vec2::from_angle(i as f32 * arc) * radius;
            let b = center + Vec2::from_angle((i + 1) as f32 * arc) * radius;
            self.line(a, b, color, 1.0, 1.0);
        }
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixels[y as usize * self.width as usize + x as usize];
            Rgb(c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [1.0, 1.0, 1.0];
    const BLACK: Color = [0.0, 0.0, 0.0];

    #[test]
    fn blend_mixes_towards_colour() {
        let mut canvas = Canvas::new(2, 2, BLACK);
        canvas.blend(1, 1, WHITE, 0.25);
        assert_eq!(canvas.pixel(1, 1), Some([0.25, 0.25, 0.25]));
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn off_canvas_writes_are_ignored() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.blend(-1, 2, WHITE, 1.0);
        canvas.blend(4, 0, WHITE, 1.0);
        canvas.line(Vec2::new(-50.0, -50.0), Vec2::new(-10.0, -20.0), WHITE, 1.0, 1.0);
        assert!(canvas.pixels.iter().all(|p| *p == BLACK));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn horizontal_line_covers_span() {
        let mut canvas = Canvas::new(10, 3, BLACK);
        canvas.line(Vec2::new(1.0, 1.5), Vec2::new(8.0, 1.5), WHITE, 1.0, 1.0);
        for x in 1..=8 {
            assert_eq!(canvas.pixel(x, 1), Some(WHITE), "x = {}", x);
        }
        assert_eq!(canvas.pixel(0, 1), Some(BLACK));
        assert_eq!(canvas.pixel(9, 1), Some(BLACK));
    }

    #[test]
    fn filled_circle_covers_centre_not_corners() {
        let mut canvas = Canvas::new(21, 21, WHITE);
        canvas.fill_circle(Vec2::new(10.5, 10.5), 5.0, BLACK);
        assert_eq!(canvas.pixel(10, 10), Some(BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(20, 20), Some(WHITE));
    }

    #[test]
    fn dashed_circle_leaves_gaps() {
        let mut canvas = Canvas::new(101, 101, BLACK);
        canvas.dashed_circle(Vec2::new(50.5, 50.5), 40.0, 8, WHITE);
        let lit = canvas.pixels.iter().filter(|p| **p == WHITE).count();
        assert!(lit > 0);
        // Roughly half of a 2πr outline
        assert!((lit as f32) < TAU * 40.0 * 0.75);
    }

    #[test]
    fn image_conversion_quantises() {
        let mut canvas = Canvas::new(1, 1, [0.0, 0.5, 1.0]);
        canvas.blend(0, 0, [0.0, 0.5, 1.0], 1.0);
        let img = canvas.to_image();
        assert_eq!(img.get_pixel(0, 0).0, [0, 128, 255]);
    }
}
