use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};
use curvo_strip::prelude::*;
use nalgebra::Point3;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(PanOrbitCameraPlugin)
        .add_plugins(AppPlugin)
        .run();
}
struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut bevy::prelude::App) {
        app.add_systems(Startup, setup);
    }
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let helix = HelixCurve::try_new(Point3::origin(), 1.5, 4., 2.5).unwrap();
    let strip = StripBuilder::new()
        .with_curve(helix)
        .with_segments((120, vec![9, 3]))
        .with_radius(ScalarFn::varying(|i, n| 0.1 + 0.3 * i as f32 / n as f32))
        .with_tilt(ScalarFn::varying(|i, n| TAU * i as f32 / n as f32))
        .with_uv(UvPreset::dash(UvLayout::Along))
        .build()
        .unwrap();

    let mesh = strip.mesh().unwrap();
    commands
        .spawn((
            Mesh3d(meshes.add(Mesh::from(mesh))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.9, 0.6, 0.2),
                cull_mode: None,
                double_sided: true,
                ..Default::default()
            })),
        ))
        .insert(Name::new("strip"));

    let axes = FrameAxes::try_new(&strip, 0.2).unwrap();
    commands
        .spawn((
            Mesh3d(meshes.add(Mesh::from(&axes))),
            MeshMaterial3d(materials.add(StandardMaterial {
                unlit: true,
                ..Default::default()
            })),
        ))
        .insert(Name::new("frames"));

    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(3., 8., 5.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Transform::from_translation(Vec3::new(0., 4., 8.)),
        PanOrbitCamera::default(),
    ));
}
