use bevy::{
    asset::Assets,
    color::{
        Color,
        palettes::css::{LIMEGREEN, ORANGE},
    },
    ecs::{
        component::Component,
        query::With,
        resource::Resource,
        system::{Commands, Query, Res, ResMut},
    },
    log::info,
    math::{Vec2, primitives::Circle},
    render::mesh::{Mesh, Mesh2d},
    sprite::{ColorMaterial, MeshMaterial2d},
    transform::components::Transform,
};

use crate::core::{
    constants::{FOOD, HOME_EPSILON, NEST},
    stepper::{NavigationStepper, Phase},
};

pub mod render;

// Screen pixels per simulation unit; the ±15-unit world fits the window.
pub const WORLD_SCALE: f32 = 28.0;

// --- Components ---

#[derive(Component)]
pub struct AgentDot;

#[derive(Component)]
pub struct NestMarker;

#[derive(Component)]
pub struct FoodMarker;

// --- Resources ---

#[derive(Resource)]
pub struct Navigation {
    pub stepper: NavigationStepper,
    home_announced: bool,
}

impl Navigation {
    pub fn new(seed: u64) -> Self {
        Self {
            stepper: NavigationStepper::new(seed),
            home_announced: false,
        }
    }
}

/// Remaining external ticks; once exhausted the simulation freezes while the
/// window stays open.
#[derive(Resource)]
pub struct FrameBudget {
    remaining: u32,
}

impl FrameBudget {
    pub fn new(limit: u32) -> Self {
        Self { remaining: limit }
    }

    fn take(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

// --- Systems ---

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        NestMarker,
        Mesh2d(meshes.add(Circle::new(10.0))),
        MeshMaterial2d(materials.add(Color::from(LIMEGREEN))),
        Transform::from_translation(sim_to_world(NEST).extend(1.0)),
    ));

    commands.spawn((
        FoodMarker,
        Mesh2d(meshes.add(Circle::new(10.0))),
        MeshMaterial2d(materials.add(Color::from(ORANGE))),
        Transform::from_translation(sim_to_world(FOOD).extend(1.0)),
    ));

    commands.spawn((
        AgentDot,
        Mesh2d(meshes.add(Circle::new(6.0))),
        MeshMaterial2d(materials.add(Color::BLACK)),
        Transform::from_translation(sim_to_world(NEST).extend(2.0)),
    ));
}

/// One external tick: advance the stepper and surface the two events worth
/// logging, the food capture and the first at-home tick.
pub fn navigation_tick(mut nav: ResMut<Navigation>, mut budget: ResMut<FrameBudget>) {
    if !budget.take() {
        return;
    }

    let phase_before = nav.stepper.phase();
    nav.stepper.advance();

    if phase_before == Phase::Exploring && nav.stepper.phase() == Phase::Returning {
        info!(
            outbound_steps = nav.stepper.exploration_path().len(),
            "food captured, homing by path integration"
        );
    }

    if !nav.home_announced
        && nav.stepper.phase() == Phase::Returning
        && nav.stepper.home_vector().length() <= HOME_EPSILON
    {
        nav.home_announced = true;
        info!(
            inbound_steps = nav.stepper.return_path().len(),
            "home vector consumed, agent is back at the nest"
        );
    }
}

pub fn sync_agent_dot(nav: Res<Navigation>, mut agent_query: Query<&mut Transform, With<AgentDot>>) {
    if let Ok(mut transform) = agent_query.single_mut() {
        transform.translation = sim_to_world(nav.stepper.position()).extend(2.0);
    }
}

// --- Utility Functions ---

/// Converts a simulation-space point (glam) to screen space (bevy).
pub fn sim_to_world(p: glam::Vec2) -> Vec2 {
    Vec2::new(p.x, p.y) * WORLD_SCALE
}
