use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ViewConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: DVec2,
    /// Grey level in [0.5, 1.0]
    pub brightness: f32,
}

/// Fixed random backdrop. The same seed always gives the same sky.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn generate(count: usize, seed: u64, half_width: f64, half_height: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                position: DVec2::new(
                    rng.gen_range(-half_width..half_width),
                    rng.gen_range(-half_height..half_height),
                ),
                brightness: rng.gen_range(0.5..=1.0),
            })
            .collect();
        Self { stars }
    }

    pub fn from_config(view: &ViewConfig) -> Self {
        Self::generate(view.num_stars, view.star_seed, view.view_width, view.view_height)
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_stay_in_view() {
        let field = StarField::generate(500, 3, 1e11, 7.5e10);
        assert_eq!(field.stars().len(), 500);
        for star in field.stars() {
            assert!(star.position.x.abs() <= 1e11);
            assert!(star.position.y.abs() <= 7.5e10);
            assert!((0.5..=1.0).contains(&star.brightness));
        }
    }

    #[test]
    fn seed_is_reproducible() {
        let a = StarField::generate(50, 42, 1.0, 1.0);
        let b = StarField::generate(50, 42, 1.0, 1.0);
        let c = StarField::generate(50, 43, 1.0, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
