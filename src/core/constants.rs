use glam::Vec2;

// --- World layout ---
pub const NEST: Vec2 = Vec2::ZERO;
pub const FOOD: Vec2 = Vec2::new(9.0, 6.0);
pub const FOOD_RADIUS: f32 = 0.8;

// --- Movement ---
pub const STEP_SIZE: f32 = 0.35;
pub const RANDOM_WEIGHT: f32 = 0.7; // exploration blend: random component
pub const BIAS_WEIGHT: f32 = 0.3; // exploration blend: toward-food component
pub const HOME_EPSILON: f32 = 0.05; // home-vector norm at which homing stops

// --- Run ---
pub const RNG_SEED: u64 = 3;
pub const MAX_STEPS: u32 = 500;
pub const TICK_INTERVAL_MS: u64 = 60;

// Global reference heading, drawn as a compass cue only
pub const SUN_ANGLE_DEG: f32 = 45.0;
