use bevy::{prelude::*, time::common_conditions::on_timer};
use std::time::Duration;

use ant_homing_sim::core::constants::{MAX_STEPS, RNG_SEED, TICK_INTERVAL_MS};
use ant_homing_sim::game::{
    FrameBudget, Navigation, navigation_tick,
    render::{draw_sun_compass, draw_trails},
    setup_scene, sync_agent_dot,
};

// --- Constants ---
const SCREEN_WIDTH: f32 = 900.0;
const SCREEN_HEIGHT: f32 = 900.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ant Path Integration".into(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Navigation::new(RNG_SEED))
        .insert_resource(FrameBudget::new(MAX_STEPS))
        .add_systems(Startup, (setup_camera, setup_scene))
        .add_systems(
            Update,
            (
                navigation_tick.run_if(on_timer(Duration::from_millis(TICK_INTERVAL_MS))),
                sync_agent_dot,
                draw_trails,
                draw_sun_compass,
            ),
        )
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d::default());
}
