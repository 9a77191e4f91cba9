use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use content::tuning::{STARFIELD_COUNT, STARFIELD_INNER_RADIUS, STARFIELD_OUTER_RADIUS};
use rand::Rng;
use std::f32::consts::TAU;

use super::particles::point_mesh;
use crate::engine::ui::theme;

/// Continuous rotation applied to a backdrop entity, radians per second
/// around the X and Y axes.
#[derive(Component)]
pub struct BackdropSpin {
    pub x: f32,
    pub y: f32,
}

pub fn setup_backdrop(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera looks down -Z at the particle field, with fog fading the
    // deep backdrop into the page background.
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: theme::BACKGROUND,
            falloff: FogFalloff::Linear {
                start: 10.0,
                end: 30.0,
            },
            ..default()
        },
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
        ..default()
    });
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 1_500_000.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
    commands.spawn((
        PointLight {
            color: theme::ACCENT,
            intensity: 800_000.0,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -10.0),
    ));

    // Dim torus knot drifting far behind the particles.
    commands.spawn((
        Mesh3d(meshes.add(torus_knot_mesh(1.0, 0.3, 128, 16))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: theme::BORDER.with_alpha(0.1),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, -10.0).with_scale(Vec3::splat(15.0)),
        BackdropSpin { x: 0.05, y: 0.05 },
    ));

    // Starfield shell, rotating slowly around the vertical axis.
    let mut rng = rand::thread_rng();
    commands.spawn((
        Mesh3d(meshes.add(point_mesh(&starfield(&mut rng)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(0.6),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::default(),
        BackdropSpin { x: 0.0, y: 0.01 },
    ));
}

pub fn rotate_backdrop(mut spinners: Query<(&BackdropSpin, &mut Transform)>, time: Res<Time>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in &mut spinners {
        transform.rotate_x(spin.x * dt);
        transform.rotate_y(spin.y * dt);
    }
}

/// Uniformly sampled points in a spherical shell.
fn starfield(rng: &mut impl Rng) -> Vec<Vec3> {
    (0..STARFIELD_COUNT)
        .map(|_| {
            let theta = rng.gen_range(0.0..TAU);
            let phi = (rng.gen_range(-1.0..1.0f32)).acos();
            let r = rng.gen_range(STARFIELD_INNER_RADIUS..STARFIELD_OUTER_RADIUS);
            Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}

/// Point on the (2, 3) torus knot centreline at parameter `u`.
fn knot_point(u: f32, radius: f32) -> Vec3 {
    let (p, q) = (2.0, 3.0);
    let qu = q / p * u;
    Vec3::new(
        radius * (2.0 + qu.cos()) * 0.5 * u.cos(),
        radius * (2.0 + qu.cos()) * 0.5 * u.sin(),
        radius * qu.sin() * 0.5,
    )
}

/// Triangulated tube around the (2, 3) torus knot.
fn torus_knot_mesh(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32) -> Mesh {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * 2.0 * TAU;
        let center = knot_point(u, radius);
        let ahead = knot_point(u + 0.01, radius);

        // Frenet-style frame along the centreline.
        let tangent = (ahead - center).normalize();
        let normal_seed = (ahead + center).normalize();
        let bitangent = tangent.cross(normal_seed).normalize();
        let normal = bitangent.cross(tangent);

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let offset = normal * (-tube * v.cos()) + bitangent * (tube * v.sin());
            positions.push((center + offset).to_array());
            normals.push(offset.normalize().to_array());
        }
    }

    let ring = radial_segments + 1;
    for i in 0..tubular_segments {
        for j in 0..radial_segments {
            let a = i * ring + j;
            let b = (i + 1) * ring + j;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn starfield_fills_the_shell() {
        let stars = starfield(&mut StdRng::seed_from_u64(3));
        assert_eq!(stars.len(), STARFIELD_COUNT);
        for star in &stars {
            let r = star.length();
            assert!(r >= STARFIELD_INNER_RADIUS - 1e-3 && r <= STARFIELD_OUTER_RADIUS + 1e-3);
        }
    }

    #[test]
    fn torus_knot_mesh_is_a_closed_tube() {
        let mesh = torus_knot_mesh(1.0, 0.3, 32, 8);
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap().len();
        assert_eq!(positions, (32 + 1) * (8 + 1));
        let indices = mesh.indices().unwrap().len();
        assert_eq!(indices, 32 * 8 * 6);
    }
}
