use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use content::tuning::{
    COLOR_LERP_RATE, DAMPING_FACTOR, PARTICLE_COUNT, REFERENCE_FRAME_RATE,
    ROTATION_SPEED_PRIMARY, ROTATION_SPEED_SECONDARY, SECTION_PALETTE,
};

use super::shapes::{SHAPE_COUNT, ShapeSet};
use crate::engine::systems::scrolling::ActiveSection;

/// Point material opacity, matching the additive glow of the original look.
const PARTICLE_ALPHA: f32 = 0.8;

/// Marker for the morphing point cloud entity.
#[derive(Component)]
pub struct ParticleCloud;

/// The particle field: current positions plus the immutable target
/// shapes. The position buffer is allocated once and only mutated in
/// place for the lifetime of the scene.
#[derive(Resource)]
pub struct ParticleField {
    current: Vec<Vec3>,
    shapes: ShapeSet,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

impl ParticleField {
    pub fn new(shapes: ShapeSet, mesh: Handle<Mesh>, material: Handle<StandardMaterial>) -> Self {
        Self {
            current: shapes.target(0).to_vec(),
            shapes,
            mesh,
            material,
        }
    }

    /// One exponential-decay step toward the active section's target.
    /// Changing the section mid-morph just redirects the decay; current
    /// positions carry over untouched.
    pub fn morph_step(&mut self, section: usize, dt: f32) {
        let factor = damping(dt);
        let target = self.shapes.target(section);
        for (current, target) in self.current.iter_mut().zip(target) {
            *current += (*target - *current) * factor;
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Largest distance from any particle to its target in `section`.
    pub fn distance_to(&self, section: usize) -> f32 {
        self.current
            .iter()
            .zip(self.shapes.target(section))
            .map(|(current, target)| current.distance(*target))
            .fold(0.0, f32::max)
    }
}

/// Delta-time-normalised damping: applies [`DAMPING_FACTOR`] exactly once
/// per frame at the reference rate and scales consistently elsewhere.
pub fn damping(dt: f32) -> f32 {
    1.0 - (1.0 - DAMPING_FACTOR).powf(dt * REFERENCE_FRAME_RATE)
}

/// Target tint for a section index; out-of-range indices clamp.
pub fn section_color(section: usize) -> Color {
    let [r, g, b] = SECTION_PALETTE[section.min(SECTION_PALETTE.len() - 1)];
    Color::srgb(r, g, b)
}

/// Channel-wise sRGB interpolation preserving the source alpha.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let from = from.to_srgba();
    let to = to.to_srgba();
    Color::srgba(
        from.red + (to.red - from.red) * t,
        from.green + (to.green - from.green) * t,
        from.blue + (to.blue - from.blue) * t,
        from.alpha,
    )
}

/// Build a point-list mesh from particle positions.
pub fn point_mesh(points: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

pub fn setup_particles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let shapes = ShapeSet::generate(&mut rng);
    println!(
        "=== PARTICLE SCENE READY ({} points, {} shapes) ===",
        PARTICLE_COUNT, SHAPE_COUNT
    );

    let mesh = meshes.add(point_mesh(shapes.target(0)));
    let material = materials.add(StandardMaterial {
        base_color: section_color(0).with_alpha(PARTICLE_ALPHA),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(material.clone()),
        Transform::default(),
        NoFrustumCulling,
        ParticleCloud,
    ));
    commands.insert_resource(ParticleField::new(shapes, mesh, material));
}

/// Advance the morph and push the updated positions into the mesh.
pub fn morph_particles(
    mut field: ResMut<ParticleField>,
    active: Res<ActiveSection>,
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    field.morph_step(active.0, time.delta_secs());

    let handle = field.mesh.clone();
    if let Some(mesh) = meshes.get_mut(&handle) {
        let positions: Vec<[f32; 3]> = field.positions().iter().map(|p| p.to_array()).collect();
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    }
}

/// Continuous yaw: slow on the hero shape, faster on the others.
pub fn rotate_particle_cloud(
    mut clouds: Query<&mut Transform, With<ParticleCloud>>,
    active: Res<ActiveSection>,
    time: Res<Time>,
) {
    let speed = if active.0 == 0 {
        ROTATION_SPEED_PRIMARY
    } else {
        ROTATION_SPEED_SECONDARY
    };
    for mut transform in &mut clouds {
        transform.rotate_y(speed * time.delta_secs());
    }
}

/// Drift the point material toward the active section's hue.
pub fn tint_particles(
    field: Res<ParticleField>,
    active: Res<ActiveSection>,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if let Some(material) = materials.get_mut(&field.material) {
        let target = section_color(active.0);
        material.base_color = lerp_color(
            material.base_color,
            target,
            COLOR_LERP_RATE * time.delta_secs(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const STEP: f32 = 1.0 / 60.0;

    fn field() -> ParticleField {
        let shapes = ShapeSet::generate(&mut StdRng::seed_from_u64(11));
        ParticleField::new(shapes, Handle::default(), Handle::default())
    }

    #[test]
    fn damping_matches_the_fixed_fraction_at_reference_rate() {
        assert!((damping(STEP) - DAMPING_FACTOR).abs() < 1e-6);
        // Two reference frames in one step decay slightly less than twice.
        let two_frames = 1.0 - (1.0 - DAMPING_FACTOR) * (1.0 - DAMPING_FACTOR);
        assert!((damping(STEP * 2.0) - two_frames).abs() < 1e-6);
        assert!(damping(STEP * 4.0) > damping(STEP));
    }

    #[test]
    fn positions_converge_to_every_target_shape() {
        for section in 0..SHAPE_COUNT {
            let mut field = field();
            for _ in 0..600 {
                field.morph_step(section, STEP);
            }
            assert!(
                field.distance_to(section) < 1e-3,
                "section {section} residual {}",
                field.distance_to(section)
            );
        }
    }

    #[test]
    fn section_switch_mid_morph_keeps_positions_continuous() {
        let mut field = field();
        for _ in 0..20 {
            field.morph_step(1, STEP);
        }
        let before: Vec<Vec3> = field.positions().to_vec();

        field.morph_step(2, STEP);

        let factor = damping(STEP);
        for (old, new) in before.iter().zip(field.positions()) {
            let moved = old.distance(*new);
            // A single decay step never moves a particle more than the
            // damping fraction of its remaining distance.
            assert!(moved <= factor * 25.0 + 1e-4, "jump of {moved}");
        }
    }

    #[test]
    fn particle_buffer_is_never_reallocated() {
        let mut field = field();
        let ptr = field.positions().as_ptr();
        let len = field.positions().len();
        for section in [0, 1, 2, 1, 0] {
            for _ in 0..30 {
                field.morph_step(section, STEP);
            }
        }
        assert_eq!(field.positions().as_ptr(), ptr);
        assert_eq!(field.positions().len(), len);
        assert_eq!(len, PARTICLE_COUNT);
    }

    #[test]
    fn out_of_range_section_is_clamped_not_fatal() {
        let mut field = field();
        for _ in 0..600 {
            field.morph_step(usize::MAX, STEP);
        }
        assert!(field.distance_to(SHAPE_COUNT - 1) < 1e-3);
    }

    #[test]
    fn tint_interpolates_toward_the_section_hue() {
        let from = section_color(0).with_alpha(PARTICLE_ALPHA);
        let halfway = lerp_color(from, section_color(1), 0.5);
        let done = lerp_color(from, section_color(1), 1.0);
        let target = section_color(1).to_srgba();
        assert!((done.to_srgba().red - target.red).abs() < 1e-6);
        assert!((halfway.to_srgba().red - (from.to_srgba().red + target.red) / 2.0).abs() < 1e-6);
        // Alpha rides along unchanged.
        assert!((done.to_srgba().alpha - PARTICLE_ALPHA).abs() < 1e-6);
    }

    #[test]
    fn palette_clamps_out_of_range_sections() {
        assert_eq!(section_color(999), section_color(SECTION_PALETTE.len() - 1));
    }
}
