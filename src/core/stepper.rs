use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::core::constants::{
    BIAS_WEIGHT, FOOD, FOOD_RADIUS, HOME_EPSILON, NEST, RANDOM_WEIGHT, STEP_SIZE,
};

/// Behavioural mode of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    Returning,
}

/// Owns the full navigation state and advances it one tick at a time.
///
/// While exploring, every displacement is also accumulated into the home
/// vector. Homing unwinds that vector step by step until its norm drops to
/// `HOME_EPSILON`, after which the agent stays put. The caller reads
/// position and trails back for display; nothing here touches the renderer.
pub struct NavigationStepper {
    position: Vec2,
    home_vector: Vec2,
    phase: Phase,
    exploration_path: Vec<Vec2>,
    return_path: Vec<Vec2>,
    rng: ChaCha12Rng,
}

impl NavigationStepper {
    pub fn new(seed: u64) -> Self {
        Self {
            position: NEST,
            home_vector: Vec2::ZERO,
            phase: Phase::Exploring,
            exploration_path: Vec::new(),
            return_path: Vec::new(),
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Advance the simulation by one tick.
    pub fn advance(&mut self) {
        match self.phase {
            Phase::Exploring => self.explore_step(),
            Phase::Returning => self.return_step(),
        }
    }

    /// Biased random walk: a random unit direction blended with the
    /// direction toward the food, renormalized, applied at fixed step size.
    fn explore_step(&mut self) {
        // Zero when standing exactly on the food point, leaving only the
        // random component in the blend.
        let to_food = (FOOD - self.position).normalize_or_zero();

        let direction =
            (RANDOM_WEIGHT * self.random_direction() + BIAS_WEIGHT * to_food).normalize_or_zero();
        if direction == Vec2::ZERO {
            // Degenerate blend, skip this tick.
            return;
        }

        let movement = STEP_SIZE * direction;
        self.position += movement;
        self.home_vector += movement;
        self.exploration_path.push(self.position);

        // Capture check runs after the move, in the tick that crosses it.
        if self.position.distance(FOOD) < FOOD_RADIUS {
            self.phase = Phase::Returning;
        }
    }

    /// Path integration: walk against the accumulated home vector, consuming
    /// it as we go. Below the epsilon the agent is home and stops moving,
    /// but the phase never changes again.
    fn return_step(&mut self) {
        if self.home_vector.length() <= HOME_EPSILON {
            return;
        }

        let movement = STEP_SIZE * -self.home_vector.normalize_or_zero();
        self.position += movement;
        self.home_vector += movement;
        self.return_path.push(self.position);
    }

    fn random_direction(&mut self) -> Vec2 {
        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        Vec2::from_angle(angle)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn home_vector(&self) -> Vec2 {
        self.home_vector
    }

    pub fn exploration_path(&self) -> &[Vec2] {
        &self.exploration_path
    }

    pub fn return_path(&self) -> &[Vec2] {
        &self.return_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homing_freezes_below_epsilon() {
        let mut stepper = NavigationStepper::new(1);
        stepper.phase = Phase::Returning;
        stepper.home_vector = Vec2::new(0.03, 0.0);
        stepper.position = NEST + stepper.home_vector;

        let before = stepper.position;
        for _ in 0..10 {
            stepper.advance();
        }

        assert_eq!(stepper.position, before);
        assert_eq!(stepper.phase, Phase::Returning);
        assert!(stepper.return_path.is_empty());
    }

    #[test]
    fn exploring_on_food_point_falls_back_to_random_direction() {
        let mut stepper = NavigationStepper::new(5);
        stepper.position = FOOD;
        stepper.advance();

        // One step cannot leave the capture radius, so the phase flips too.
        let moved = stepper.position.distance(FOOD);
        assert!((moved - STEP_SIZE).abs() < 1e-4);
        assert_eq!(stepper.phase, Phase::Returning);
    }
}
