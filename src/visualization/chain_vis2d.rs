use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::configuration::config::WindowConfig;
use crate::simulation::interaction::FrameInput;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Tags the anchor sprite
#[derive(Component)]
struct AnchorMarker;

/// Tags each particle sprite with its index into the chain
#[derive(Component)]
struct ParticleIndex(pub usize);

/// Screen size the simulation coordinates refer to
#[derive(Resource, Clone, Copy)]
struct Surface {
    width: f32,
    height: f32,
}

impl Surface {
    /// Simulation pixels (top-left origin, y down) -> bevy world (centre origin, y up)
    fn to_world(&self, p: NVec2) -> Vec2 {
        Vec2::new(p.x as f32 - self.width / 2.0, self.height / 2.0 - p.y as f32)
    }
}

const CHAIN_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const FEEDBACK_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const LINE_WIDTH: f32 = 3.0;

pub fn run_2d(scenario: Scenario, window: &WindowConfig) {
    info!("run_2d: starting Bevy 2D viewer with {} particles", scenario.chain.len());

    let surface = Surface {
        width: window.width as f32,
        height: window.height as f32,
    };

    App::new()
        .insert_resource(scenario)
        .insert_resource(surface)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window.title.clone(),
                resolution: WindowResolution::new(surface.width, surface.height),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_chain_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, draw_lines_system).chain())
        .run();
}

fn setup_chain_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    surface: Res<Surface>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut gizmo_store: ResMut<GizmoConfigStore>,
) {
    commands.spawn(Camera2dBundle::default());

    let (gizmo_config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.line_width = LINE_WIDTH;

    let anchor = surface.to_world(scenario.chain.anchor());
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(scenario.anchor_radius as f32))),
            material: materials.add(ColorMaterial::from(CHAIN_COLOR)),
            transform: Transform::from_xyz(anchor.x, anchor.y, 1.0),
            ..Default::default()
        },
        AnchorMarker,
    ));

    for (i, p) in scenario.chain.particles().iter().enumerate() {
        let pos = surface.to_world(p.x);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(p.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(pos.x, pos.y, 2.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    // cursor_position is already top-left origin, y down, like the simulation
    let pointer = windows
        .get_single()
        .ok()
        .and_then(|w| w.cursor_position())
        .map(|c| NVec2::new(c.x as f64, c.y as f64));

    let input = FrameInput {
        dt: time.delta_seconds() as f64,
        pointer,
        pressed: mouse.just_pressed(MouseButton::Left),
        released: mouse.just_released(MouseButton::Left),
    };

    if let Err(err) = scenario.advance(&input) {
        warn!("skipping frame: {err}");
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    surface: Res<Surface>,
    mut query: Query<(&ParticleIndex, &mut Transform)>,
) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.chain.get(*i) {
            let pos = surface.to_world(p.x);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_lines_system(scenario: Res<Scenario>, surface: Res<Surface>, mut gizmos: Gizmos) {
    let frame = scenario.frame();

    if let Some(feedback) = frame.feedback {
        gizmos.line_2d(surface.to_world(feedback.start), surface.to_world(feedback.end), FEEDBACK_COLOR);
    }

    for seg in &frame.segments {
        gizmos.line_2d(surface.to_world(seg.start), surface.to_world(seg.end), CHAIN_COLOR);
    }
}
