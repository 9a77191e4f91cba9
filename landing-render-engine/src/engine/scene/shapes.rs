use bevy::prelude::*;
use content::tuning::PARTICLE_COUNT;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Number of target shapes; matches the number of page sections.
pub const SHAPE_COUNT: usize = 3;

/// Three precomputed target position sets, generated once at scene
/// startup and never mutated afterwards. Indexed by section index.
pub struct ShapeSet {
    targets: [Vec<Vec3>; SHAPE_COUNT],
}

impl ShapeSet {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            targets: [vortex(rng), helix(rng), sphere(rng)],
        }
    }

    /// Target positions for a section index. Out-of-range indices clamp
    /// to the last shape rather than panicking.
    pub fn target(&self, section: usize) -> &[Vec3] {
        &self.targets[section.min(SHAPE_COUNT - 1)]
    }

    pub fn point_count(&self) -> usize {
        self.targets[0].len()
    }
}

/// Spiral galaxy with three winds, spread over radius 2..7 and a flat
/// vertical band. Doubles as the initial particle layout.
fn vortex(rng: &mut impl Rng) -> Vec<Vec3> {
    (0..PARTICLE_COUNT)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU * 3.0);
            let radius = 2.0 + rng.gen_range(0.0..5.0f32);
            let spiral_offset = angle * 0.5;
            Vec3::new(
                (angle + spiral_offset).cos() * radius,
                rng.gen_range(-1.0..1.0),
                (angle + spiral_offset).sin() * radius,
            )
        })
        .collect()
}

/// Two interleaved strands winding ten turns from height -7 to 7, with a
/// little jitter so the structure reads as organic.
fn helix(rng: &mut impl Rng) -> Vec<Vec3> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let t = i as f32 / PARTICLE_COUNT as f32 * PI * 20.0;
            let strand = if i % 2 == 0 { 0.0 } else { PI };
            let radius = 2.5;
            let base = Vec3::new(
                (t + strand).cos() * radius,
                i as f32 / PARTICLE_COUNT as f32 * 14.0 - 7.0,
                (t + strand).sin() * radius,
            );
            base + Vec3::new(
                rng.gen_range(-0.1..0.1),
                rng.gen_range(-0.1..0.1),
                rng.gen_range(-0.1..0.1),
            )
        })
        .collect()
}

/// Uniform sampling on a sphere of radius 4.5 via inverse-cosine
/// latitude and uniform longitude.
fn sphere(rng: &mut impl Rng) -> Vec<Vec3> {
    (0..PARTICLE_COUNT)
        .map(|_| {
            let theta = rng.gen_range(0.0..TAU);
            let phi = (rng.gen_range(-1.0..1.0f32)).acos();
            let r = 4.5;
            Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn shapes() -> ShapeSet {
        ShapeSet::generate(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn every_shape_has_exactly_the_particle_count() {
        let set = shapes();
        for section in 0..SHAPE_COUNT {
            assert_eq!(set.target(section).len(), PARTICLE_COUNT);
        }
    }

    #[test]
    fn shapes_are_independent_buffers() {
        let mut set = shapes();
        let before: Vec<Vec3> = set.target(1).to_vec();
        // Mutating one shape must leave the others untouched.
        set.targets[0].iter_mut().for_each(|p| *p = Vec3::ZERO);
        assert_eq!(set.target(1), before.as_slice());
        assert!(set.target(2).iter().any(|p| *p != Vec3::ZERO));
    }

    #[test]
    fn out_of_range_section_clamps_to_last_shape() {
        let set = shapes();
        assert_eq!(set.target(17), set.target(SHAPE_COUNT - 1));
    }

    #[test]
    fn vortex_stays_in_its_radial_and_vertical_band() {
        let set = shapes();
        for point in set.target(0) {
            let radial = (point.x * point.x + point.z * point.z).sqrt();
            assert!((2.0..=7.0).contains(&radial), "radial {radial}");
            assert!(point.y.abs() <= 1.0);
        }
    }

    #[test]
    fn helix_spans_the_expected_height() {
        let set = shapes();
        let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);
        for point in set.target(1) {
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }
        // -7..7 plus at most 0.1 of jitter on each end.
        assert!(min_y >= -7.2 && min_y < -6.5, "min_y {min_y}");
        assert!(max_y <= 7.2 && max_y > 6.5, "max_y {max_y}");
    }

    #[test]
    fn sphere_points_sit_on_the_shell() {
        let set = shapes();
        for point in set.target(2) {
            assert!((point.length() - 4.5).abs() < 1e-3);
        }
    }
}
