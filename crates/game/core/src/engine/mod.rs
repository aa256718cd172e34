//! Encounter state machine.
//!
//! The [`CombatEncounter`] is the authoritative reducer for one player/enemy
//! exchange. It is advanced by a periodic [`CombatEncounter::tick`] plus two
//! discrete inputs ([`CombatEncounter::player_attack`] and
//! [`CombatEncounter::attempt_reaction`]). Every call returns immediately with
//! its effect fully applied; rejected calls return a [`CombatError`] and leave
//! the state untouched.
//!
//! The encounter performs no logging itself. It queues [`CombatEvent`]s that
//! the caller drains with [`CombatEncounter::drain_events`].

mod errors;
mod events;
mod phase;
mod snapshot;


pub use errors::{CombatAction, CombatError};
pub use events::CombatEvent;
pub use phase::{Outcome, Phase, ReactionState, Turn};
pub use snapshot::EncounterSnapshot;

use crate::config::{CombatConfig, ConfigError};
use crate::stats::CombatantStats;
use crate::timing::TimingWindow;

/// Result of a player attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub damage: f32,
    /// Enemy health after the hit.
    pub target_hp: f32,
    /// The hit ended the encounter.
    pub lethal: bool,
}

/// One player/enemy exchange from start to victory or defeat.
///
/// Both stat pools are owned by the encounter for its lifetime. The player's
/// pool is handed in by the caller and read back with
/// [`CombatEncounter::player`] once the encounter ends.
#[derive(Clone, Debug)]
pub struct CombatEncounter {
    config: CombatConfig,
    phase: Phase,
    player: CombatantStats,
    enemy: CombatantStats,
    /// `Some` exactly while `phase == EnemyCharging`.
    window: Option<TimingWindow>,
    reaction: ReactionState,
    /// Seconds left on the cosmetic reaction pose.
    reaction_animation: Option<f32>,
    /// Countdown for the scheduled pause phases.
    delay_remaining: f32,
    outcome: Option<Outcome>,
    events: Vec<CombatEvent>,
}

impl CombatEncounter {
    /// Builds an encounter in [`Phase::Idle`].
    ///
    /// The configuration is trusted; invalid values trip a debug assertion.
    /// Use [`CombatEncounter::try_new`] for configuration read from disk.
    pub fn new(config: CombatConfig, player: CombatantStats, enemy: CombatantStats) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid combat config");
        Self {
            config,
            phase: Phase::Idle,
            player,
            enemy,
            window: None,
            reaction: ReactionState::default(),
            reaction_animation: None,
            delay_remaining: 0.0,
            outcome: None,
            events: Vec::new(),
        }
    }

    pub fn try_new(
        config: CombatConfig,
        player: CombatantStats,
        enemy: CombatantStats,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, player, enemy))
    }

    /// Leaves `Idle`: restores the enemy to full health and hands the first
    /// turn to the player.
    pub fn begin(&mut self) -> Result<(), CombatError> {
        self.ensure_live(CombatAction::Begin)?;
        if self.phase != Phase::Idle {
            return Err(CombatError::invalid_transition(
                CombatAction::Begin,
                self.phase,
            ));
        }

        self.enemy.reset();
        self.phase = Phase::PlayerDeciding;
        self.events.push(CombatEvent::Started {
            player_hp: self.player.current_hp(),
            player_max_hp: self.player.max_hp(),
        });
        Ok(())
    }

    /// Attacks with the configured player damage.
    pub fn player_attack(&mut self) -> Result<AttackReport, CombatError> {
        self.player_attack_with(self.config.player_damage)
    }

    /// Attacks for `damage`. Only valid in [`Phase::PlayerDeciding`].
    ///
    /// A lethal hit ends the encounter immediately; the enemy never gets its
    /// turn.
    pub fn player_attack_with(&mut self, damage: f32) -> Result<AttackReport, CombatError> {
        self.ensure_live(CombatAction::PlayerAttack)?;
        if self.phase != Phase::PlayerDeciding {
            return Err(CombatError::invalid_transition(
                CombatAction::PlayerAttack,
                self.phase,
            ));
        }
        debug_assert!(damage >= 0.0, "damage must be non-negative, got {damage}");
        let damage = damage.max(0.0);

        let alive = self.enemy.take_damage(damage);
        self.events.push(CombatEvent::PlayerAttacked {
            damage,
            enemy_hp: self.enemy.current_hp(),
        });

        if !alive {
            self.finish(Outcome::Victory);
        } else if self.config.turn_delay > 0.0 {
            self.phase = Phase::PostAttackDelay;
            self.delay_remaining = self.config.turn_delay;
        } else {
            self.start_charge();
        }

        Ok(AttackReport {
            damage,
            target_hp: self.enemy.current_hp(),
            lethal: !alive,
        })
    }

    /// Registers the defender's reaction input for the current charge-up.
    ///
    /// Returns whether the reaction landed inside the reaction window. Only
    /// the first attempt per charge-up counts; later ones are rejected with
    /// [`CombatError::DuplicateReaction`] and change nothing.
    pub fn attempt_reaction(&mut self) -> Result<bool, CombatError> {
        self.ensure_live(CombatAction::AttemptReaction)?;
        if self.phase != Phase::EnemyCharging {
            return Err(CombatError::invalid_transition(
                CombatAction::AttemptReaction,
                self.phase,
            ));
        }
        if self.reaction.attempted {
            return Err(CombatError::DuplicateReaction);
        }
        let window = self.window.as_ref().ok_or(CombatError::MissingWindow)?;

        let succeeded = window.in_window(self.config.reaction_window);
        self.reaction = ReactionState {
            attempted: true,
            succeeded,
        };
        // The pose plays whether or not the timing was right.
        if self.config.reaction_animation > 0.0 {
            self.reaction_animation = Some(self.config.reaction_animation);
        }
        self.events
            .push(CombatEvent::ReactionAttempted { success: succeeded });
        Ok(succeeded)
    }

    /// Advances time by `dt` seconds and returns the phase afterwards.
    ///
    /// At most one phase transition happens per call. Damage from a landing
    /// attack is applied before the death check of the same call.
    pub fn tick(&mut self, dt: f32) -> Result<Phase, CombatError> {
        self.ensure_live(CombatAction::Tick)?;
        debug_assert!(dt >= 0.0, "dt must be non-negative, got {dt}");
        let dt = dt.max(0.0);

        self.advance_reaction_animation(dt);

        match self.phase {
            Phase::Idle | Phase::PlayerDeciding | Phase::EncounterOver => {}
            Phase::PostAttackDelay => {
                if self.count_down(dt) {
                    self.start_charge();
                }
            }
            Phase::ReactionResolved => {
                if self.count_down(dt) {
                    self.enter_player_turn();
                }
            }
            Phase::EnemyCharging => {
                let window = self.window.as_mut().ok_or(CombatError::MissingWindow)?;
                window.advance(dt);
                if window.is_complete() {
                    self.resolve_enemy_attack();
                }
            }
        }

        Ok(self.phase)
    }

    // ===== accessors =====

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn turn(&self) -> Option<Turn> {
        self.phase.turn()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn player(&self) -> CombatantStats {
        self.player
    }

    #[inline]
    pub fn enemy(&self) -> CombatantStats {
        self.enemy
    }

    #[inline]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn window(&self) -> Option<&TimingWindow> {
        self.window.as_ref()
    }

    pub fn charge_progress(&self) -> Option<f32> {
        self.window.map(|window| window.progress())
    }

    #[inline]
    pub fn reaction(&self) -> ReactionState {
        self.reaction
    }

    /// Cosmetic reaction pose is showing. Independent of the phase.
    pub fn is_reacting(&self) -> bool {
        self.reaction_animation.is_some()
    }

    /// Pending log entries, oldest first.
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Takes all pending log entries, oldest first.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> EncounterSnapshot {
        EncounterSnapshot {
            phase: self.phase,
            turn: self.turn(),
            charge_progress: self.charge_progress(),
            in_reaction_window: self
                .window
                .is_some_and(|window| window.in_window(self.config.reaction_window)),
            reacting: self.is_reacting(),
            player_hp: self.player.current_hp(),
            player_max_hp: self.player.max_hp(),
            enemy_hp: self.enemy.current_hp(),
            enemy_max_hp: self.enemy.max_hp(),
            outcome: self.outcome,
        }
    }

    // ===== transitions =====

    fn ensure_live(&self, action: CombatAction) -> Result<(), CombatError> {
        match self.outcome {
            Some(outcome) => Err(CombatError::EncounterOver { action, outcome }),
            None => Ok(()),
        }
    }

    fn start_charge(&mut self) {
        self.phase = Phase::EnemyCharging;
        self.delay_remaining = 0.0;
        self.window = Some(TimingWindow::new(
            self.config.charge_time,
            self.config.easing,
        ));
        self.reaction = ReactionState::default();
        self.events.push(CombatEvent::EnemyCharging);
    }

    fn resolve_enemy_attack(&mut self) {
        self.window = None;

        if self.reaction.negates_attack() {
            self.events.push(CombatEvent::AttackNegated);
        } else {
            self.player.take_damage(self.config.enemy_damage);
            self.events.push(CombatEvent::EnemyAttacked {
                damage: self.config.enemy_damage,
                player_hp: self.player.current_hp(),
            });
        }

        if !self.player.is_alive() {
            self.finish(Outcome::Defeat);
        } else if self.config.turn_delay > 0.0 {
            self.phase = Phase::ReactionResolved;
            self.delay_remaining = self.config.turn_delay;
        } else {
            self.enter_player_turn();
        }
    }

    fn enter_player_turn(&mut self) {
        self.phase = Phase::PlayerDeciding;
        self.delay_remaining = 0.0;
        self.events.push(CombatEvent::TurnChanged(Turn::Player));
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.phase = Phase::EncounterOver;
        self.window = None;
        self.delay_remaining = 0.0;
        self.events.push(CombatEvent::Finished(outcome));
    }

    /// Returns true once the scheduled pause has run out.
    fn count_down(&mut self, dt: f32) -> bool {
        self.delay_remaining -= dt;
        self.delay_remaining <= 0.0
    }

    fn advance_reaction_animation(&mut self, dt: f32) {
        if let Some(remaining) = self.reaction_animation.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.reaction_animation = None;
            }
        }
    }
}
