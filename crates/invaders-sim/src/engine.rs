//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing. A renderer only ever sees snapshots.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use invaders_core::commands::PlayerCommand;
use invaders_core::config::{ConfigError, SimConfig};
use invaders_core::enums::{LossCause, RoundOutcome, RoundPhase};
use invaders_core::events::{AudioEvent, GameEvent};
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::SimTime;

use crate::contact::ContactEvent;
use crate::formation::FormationState;
use crate::score::ScoreTracker;
use crate::systems;
use crate::systems::overlap::ContactDetector;
use crate::systems::round::RoundVerdict;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all round state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: RoundPhase,
    loss_cause: Option<LossCause>,
    rng: ChaCha8Rng,
    formation: FormationState,
    score: ScoreTracker,
    steer_velocity: f64,
    command_queue: VecDeque<PlayerCommand>,
    contact_queue: VecDeque<ContactEvent>,
    detector: ContactDetector,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine and set up the first round.
    /// The config is trusted; use `try_new` for external input.
    pub fn new(config: SimConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: RoundPhase::default(),
            loss_cause: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            formation: FormationState::new(Vec::new(), config.initial_move_interval),
            score: ScoreTracker::default(),
            steer_velocity: 0.0,
            command_queue: VecDeque::new(),
            contact_queue: VecDeque::new(),
            detector: ContactDetector::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            events: Vec::new(),
            config,
        };
        debug!(seed, "simulation engine created");
        engine.setup_round();
        engine
    }

    /// Validate the config, then create the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Report a contact from an external collision source.
    /// It is applied on the next tick.
    pub fn submit_contact(&mut self, contact: ContactEvent) {
        self.contact_queue.push_back(contact);
    }

    /// Report multiple contacts.
    pub fn submit_contacts(&mut self, contacts: impl IntoIterator<Item = ContactEvent>) {
        self.contact_queue.extend(contacts);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Once the round is over, ticks change nothing and queued input is dropped.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if self.phase.is_terminal() {
            self.command_queue.clear();
            self.contact_queue.clear();
            return self.snapshot();
        }

        self.time.advance();
        self.process_commands_and_run();
        self.snapshot()
    }

    /// Tear down the current round and start a fresh one.
    /// Score returns to zero; the RNG stream continues.
    pub fn restart(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = RoundPhase::InProgress;
        self.loss_cause = None;
        self.score = ScoreTracker::default();
        self.steer_velocity = 0.0;
        self.command_queue.clear();
        self.contact_queue.clear();
        self.detector.reset();
        self.audio_events.clear();
        self.events.clear();
        self.setup_round();
    }

    /// Get the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The outcome, once the round is over.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::InProgress => None,
            RoundPhase::Won => Some(RoundOutcome::Won),
            RoundPhase::Lost => Some(RoundOutcome::Lost),
        }
    }

    pub fn loss_cause(&self) -> Option<LossCause> {
        self.loss_cause
    }

    /// Score to offer the persistence collaborator, once the round is over.
    pub fn final_score(&self) -> Option<u32> {
        self.phase.is_terminal().then(|| self.score.total())
    }

    /// Current score for the HUD.
    pub fn score(&self) -> u32 {
        self.score.total()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn formation(&self) -> &FormationState {
        &self.formation
    }

    /// Contacts waiting for the next tick.
    pub fn pending_contacts(&self) -> usize {
        self.contact_queue.len()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Destroy an entity directly, bypassing contact rules (for tests).
    #[cfg(test)]
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        crate::registry::destroy(&mut self.world, &mut self.formation, entity)
    }

    /// Mutable world access for test fixtures.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn setup_round(&mut self) {
        let (_ship, members) = world_setup::setup_round(&mut self.world, &self.config);
        info!(
            invaders = members.len(),
            width = self.config.playfield_width,
            height = self.config.playfield_height,
            "round started"
        );
        self.formation = FormationState::new(members, self.config.initial_move_interval);
    }

    fn process_commands_and_run(&mut self) {
        let mut fire_taps = 0u32;
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::Steer { velocity } => {
                    self.steer_velocity = if velocity.is_finite() {
                        velocity.clamp(-1.0, 1.0)
                    } else {
                        0.0
                    };
                }
                PlayerCommand::Fire => fire_taps += 1,
            }
        }

        // 1. Round evaluation
        if let Some(verdict) = systems::round::evaluate(&self.world, &self.config) {
            self.finish(verdict);
            return;
        }

        self.run_systems(fire_taps);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, fire_taps: u32) {
        let now = self.time.elapsed_secs;

        // 2. Formation lockstep movement
        systems::formation::advance(
            &mut self.world,
            &mut self.formation,
            &self.config,
            now,
            &mut self.events,
        );
        // 3. Ship steering
        systems::ship::steer(&mut self.world, self.steer_velocity, &self.config);
        // 4. Bullet travel and arrival
        systems::bullets::run(&mut self.world, now, &mut self.despawn_buffer);
        // 5. Ship fire, one attempt per tap
        for _ in 0..fire_taps {
            systems::bullets::spawn_ship_bullet(
                &mut self.world,
                &self.config,
                now,
                &mut self.audio_events,
            );
        }
        // 6. Invader fire
        systems::bullets::spawn_invader_bullet(
            &mut self.world,
            &self.formation,
            &mut self.rng,
            &self.config,
            now,
            &mut self.audio_events,
        );
        // 7. Contact resolution
        let stats = systems::contacts::drain(
            &mut self.world,
            &mut self.formation,
            &mut self.score,
            &mut self.contact_queue,
            &mut self.audio_events,
            &mut self.events,
        );
        if stats.stale > 0 || stats.unmatched > 0 {
            debug!(
                applied = stats.applied,
                stale = stats.stale,
                unmatched = stats.unmatched,
                tick = self.time.tick,
                "contacts dropped"
            );
        }
        // 8. Overlap detection, applied next tick
        if self.config.detect_contacts {
            let began = self.detector.detect(&self.world, self.time.tick);
            self.contact_queue.extend(began);
        }
    }

    fn finish(&mut self, verdict: RoundVerdict) {
        self.phase = verdict.outcome.into();
        self.loss_cause = verdict.cause;
        let final_score = self.score.total();
        self.events.push(GameEvent::RoundEnded {
            outcome: verdict.outcome,
            cause: verdict.cause,
            final_score,
        });
        info!(
            outcome = ?verdict.outcome,
            cause = ?verdict.cause,
            final_score,
            tick = self.time.tick,
            "round ended"
        );
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: self.time,
                phase: self.phase,
                loss_cause: self.loss_cause,
                score: &self.score,
                formation: &self.formation,
            },
            audio_events,
            events,
        )
    }
}
