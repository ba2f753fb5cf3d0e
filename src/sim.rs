use std::time::Duration;

use rand::Rng;
use tracing::debug;
use tracing::info;

use crate::board::Board;
use crate::board::BoardError;
use crate::events::SimEvent;
use crate::rule_set::RuleSet;

/// Slowest allowed speed, in generations per second.
pub const MIN_TICK_RATE: u32 = 1;

/// Fastest allowed speed, in generations per second.
pub const MAX_TICK_RATE: u32 = 240;

/// The simulation context: the board, the rule set driving it, and the
/// parameters the user mutates at runtime.
pub struct Simulation {
    board: Board,
    set: RuleSet,

    /// Generations per second, always within `MIN_TICK_RATE..=MAX_TICK_RATE`.
    tick_rate: u32,

    paused: bool,
    generation: u64,
}

impl Simulation {
    /// Create an empty, running simulation of `side * side` cells.
    pub fn new(side: usize, tick_rate: u32) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(side)?,
            set: RuleSet::default(),
            tick_rate: tick_rate.clamp(MIN_TICK_RATE, MAX_TICK_RATE),
            paused: false,
            generation: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Duration of one frame at the current tick rate. Never zero, since the
    /// tick rate is clamped to a positive range.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate))
    }

    /// Reseed the board, resetting the generation counter.
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        self.board.randomize(density, rng);
        self.generation = 0;
    }

    /// Advance one generation, unless paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        self.board.step(self.set);
        self.generation += 1;
    }

    /// Apply a user event to the simulation parameters.
    pub fn apply(&mut self, event: SimEvent) {
        match event {
            SimEvent::TogglePause => {
                self.paused = !self.paused;
                info!("paused: {}", self.paused);
            }
            SimEvent::SpeedUp => self.set_tick_rate(self.tick_rate.saturating_add(1)),
            SimEvent::SlowDown => self.set_tick_rate(self.tick_rate.saturating_sub(1)),
        }
    }

    fn set_tick_rate(&mut self, tick_rate: u32) {
        self.tick_rate = tick_rate.clamp(MIN_TICK_RATE, MAX_TICK_RATE);
        debug!("tick rate: {} generations/s", self.tick_rate);
    }
}

#[cfg(test)]
mod test {
    use super::MAX_TICK_RATE;
    use super::MIN_TICK_RATE;
    use super::Simulation;
    use crate::events::SimEvent;

    fn place(sim: &mut Simulation, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            sim.board_mut().set(x, y, true);
        }
    }

    #[test]
    fn a_block_is_a_still_life() {
        let mut sim = Simulation::new(6, 60).unwrap();
        place(&mut sim, &[(2, 2), (3, 2), (2, 3), (3, 3)]);

        let before = sim.board().to_string();
        sim.tick();

        assert_eq!(sim.board().to_string(), before);
    }

    #[test]
    fn a_blinker_oscillates_with_period_two() {
        let mut sim = Simulation::new(5, 60).unwrap();
        place(&mut sim, &[(1, 2), (2, 2), (3, 2)]);

        let horizontal = sim.board().to_string();

        sim.tick();
        assert_ne!(sim.board().to_string(), horizontal);
        assert_eq!(sim.board().get(2, 1), Some(1));
        assert_eq!(sim.board().get(2, 2), Some(1));
        assert_eq!(sim.board().get(2, 3), Some(1));

        sim.tick();
        assert_eq!(sim.board().to_string(), horizontal);
    }

    #[test]
    fn pausing_skips_the_update_step() {
        let mut sim = Simulation::new(5, 60).unwrap();
        place(&mut sim, &[(1, 2), (2, 2), (3, 2)]);

        let before = sim.board().to_string();

        sim.apply(SimEvent::TogglePause);
        sim.tick();
        sim.tick();

        assert!(sim.paused());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.board().to_string(), before);

        sim.apply(SimEvent::TogglePause);
        sim.tick();

        assert!(!sim.paused());
        assert_eq!(sim.generation(), 1);
        assert_ne!(sim.board().to_string(), before);
    }

    #[test]
    fn tick_rate_clamps_at_both_ends() {
        let mut sim = Simulation::new(5, 2).unwrap();

        for _ in 0..10 {
            sim.apply(SimEvent::SlowDown);
        }

        assert_eq!(sim.tick_rate(), MIN_TICK_RATE);
        assert!(!sim.frame_time().is_zero());

        for _ in 0..2 * MAX_TICK_RATE {
            sim.apply(SimEvent::SpeedUp);
        }

        assert_eq!(sim.tick_rate(), MAX_TICK_RATE);
    }

    #[test]
    fn initial_tick_rate_is_clamped() {
        let sim = Simulation::new(5, 100_000).unwrap();

        assert_eq!(sim.tick_rate(), MAX_TICK_RATE);
    }
}
