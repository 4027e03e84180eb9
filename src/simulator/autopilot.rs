//! Scripted player used by the simulator.
//!
//! Jumps cacti, ducks birds. Each obstacle gets one roll against
//! `miss_chance`; a missed obstacle is ignored until it has passed.

use crate::runner::{Obstacle, ObstacleKind, RunnerGame, RunnerInput};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Autopilot {
    lead_frames: f64,
    miss_chance: f64,
    /// (run, obstacle index within run) of the obstacle last rolled for
    rolled_for: Option<(u32, u32)>,
    ignoring: bool,
    pub jumps: u32,
    pub ducks: u32,
}

impl Autopilot {
    pub fn new(lead_frames: f64, miss_chance: f64) -> Self {
        Self {
            lead_frames,
            miss_chance,
            rolled_for: None,
            ignoring: false,
            jumps: 0,
            ducks: 0,
        }
    }

    /// The next uncredited obstacle still in front of the actor's tail.
    fn threat(game: &RunnerGame) -> Option<&Obstacle> {
        game.obstacles
            .iter()
            .find(|o| !o.passed && o.trailing_edge() >= game.actor.x)
    }

    /// Pick an input for this frame, if any.
    pub fn decide<R: Rng>(&mut self, game: &RunnerGame, rng: &mut R) -> Option<RunnerInput> {
        let actor = &game.actor;
        let Some(threat) = Self::threat(game) else {
            return actor.is_lowered().then_some(RunnerInput::Stand);
        };

        // Obstacles are credited in order, so the score indexes the threat.
        let key = (game.runs_played, game.score);
        if self.rolled_for != Some(key) {
            self.rolled_for = Some(key);
            self.ignoring = rng.gen_bool(self.miss_chance.clamp(0.0, 1.0));
        }
        if self.ignoring || actor.is_airborne() {
            return None;
        }

        let gap = threat.x - (actor.x + actor.width());
        let window = threat.speed * self.lead_frames;

        match threat.kind {
            ObstacleKind::Bird if gap <= window => {
                if actor.is_lowered() {
                    None
                } else {
                    self.ducks += 1;
                    Some(RunnerInput::Duck)
                }
            }
            ObstacleKind::Cactus if gap <= window => {
                self.jumps += 1;
                Some(RunnerInput::Jump)
            }
            _ => actor.is_lowered().then_some(RunnerInput::Stand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{Obstacle, Stance, TimingMode};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn game_with(kind: ObstacleKind, x: f64) -> RunnerGame {
        let mut game = RunnerGame::new(TimingMode::default(), 0);
        let mut obstacle = Obstacle::new(kind, 5.0);
        obstacle.x = x;
        game.obstacles.push(obstacle);
        game
    }

    #[test]
    fn test_idle_when_nothing_close() {
        let game = game_with(ObstacleKind::Cactus, 500.0);
        let mut pilot = Autopilot::new(6.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(pilot.decide(&game, &mut rng), None);
    }

    #[test]
    fn test_jumps_close_cactus() {
        let game = game_with(ObstacleKind::Cactus, 110.0);
        let mut pilot = Autopilot::new(6.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(pilot.decide(&game, &mut rng), Some(RunnerInput::Jump));
        assert_eq!(pilot.jumps, 1);
    }

    #[test]
    fn test_ducks_close_bird_then_stands() {
        let mut game = game_with(ObstacleKind::Bird, 110.0);
        let mut pilot = Autopilot::new(6.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(pilot.decide(&game, &mut rng), Some(RunnerInput::Duck));

        game.actor.stance = Stance::Lowered;
        assert_eq!(pilot.decide(&game, &mut rng), None);

        game.obstacles.clear();
        assert_eq!(pilot.decide(&game, &mut rng), Some(RunnerInput::Stand));
    }

    #[test]
    fn test_always_missing_does_nothing() {
        let game = game_with(ObstacleKind::Cactus, 100.0);
        let mut pilot = Autopilot::new(6.0, 1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(pilot.decide(&game, &mut rng), None);
    }
}
