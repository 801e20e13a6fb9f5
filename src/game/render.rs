use bevy::{
    color::{
        Color,
        palettes::css::{BLUE, GOLD, RED},
    },
    ecs::system::Res,
    gizmos::gizmos::Gizmos,
    math::Vec2,
};

use crate::{
    core::constants::SUN_ANGLE_DEG,
    game::{Navigation, WORLD_SCALE, sim_to_world},
};

/// Redraws both trails every frame from the stepper's path histories.
/// Gizmos are immediate-mode, so this is a pure read of simulation state.
pub fn draw_trails(nav: Res<Navigation>, mut gizmos: Gizmos) {
    let exploration: Vec<Vec2> = nav
        .stepper
        .exploration_path()
        .iter()
        .map(|p| sim_to_world(*p))
        .collect();
    if exploration.len() >= 2 {
        gizmos.linestrip_2d(exploration, Color::from(BLUE));
    }

    let homing: Vec<Vec2> = nav
        .stepper
        .return_path()
        .iter()
        .map(|p| sim_to_world(*p))
        .collect();
    if homing.len() >= 2 {
        gizmos.linestrip_2d(homing, Color::from(RED));
    }
}

/// Sun-compass cue in the lower-left corner. Purely visual; the navigation
/// update never reads it.
pub fn draw_sun_compass(mut gizmos: Gizmos) {
    let start = sim_to_world(glam::Vec2::new(-12.0, -12.0));
    let heading = Vec2::from_angle(SUN_ANGLE_DEG.to_radians());
    gizmos.arrow_2d(start, start + heading * 3.0 * WORLD_SCALE, Color::from(GOLD));
}
