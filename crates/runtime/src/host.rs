//! Boundary adapter that owns the single active encounter.
//!
//! [`EncounterHost`] replaces a global "current encounter" pointer: it holds
//! at most one [`CombatEncounter`], suspends the external [`Mover`] while it
//! runs, forwards combat log lines to the presentation layer, and reports the
//! outcome to the actor lifecycle owner once the encounter is over.
use duel_core::{
    AttackReport, CombatConfig, CombatEncounter, CombatEvent, CombatantStats, EncounterSnapshot,
};
use tracing::{debug, info, warn};

use crate::api::{ActorId, EncounterEnd, EncounterReport, HostError, Mover, Result};
use crate::config::HostConfig;
use crate::progress::Progress;

type OutcomeCallback = Box<dyn FnOnce(EncounterReport)>;
type LogSink = Box<dyn FnMut(&str)>;

struct ActiveEncounter {
    enemy: ActorId,
    encounter: CombatEncounter,
    on_outcome: OutcomeCallback,
    /// Seconds elapsed since the outcome was decided.
    linger: f32,
}

/// Runs one encounter at a time on behalf of the trigger source.
pub struct EncounterHost<M: Mover> {
    mover: M,
    config: HostConfig,
    active: Option<ActiveEncounter>,
    log_sink: Option<LogSink>,
}

impl<M: Mover> EncounterHost<M> {
    pub fn new(mover: M, config: HostConfig) -> Self {
        Self {
            mover,
            config,
            active: None,
            log_sink: None,
        }
    }

    /// Receives every player-facing combat line, oldest first.
    pub fn with_log_sink(mut self, sink: impl FnMut(&str) + 'static) -> Self {
        self.log_sink = Some(Box::new(sink));
        self
    }

    /// Starts an encounter against `enemy`.
    ///
    /// Rejected with [`HostError::ConcurrentEncounter`] while another
    /// encounter runs; the running one is left untouched. On success the mover
    /// is suspended before the encounter is built and the player's stats are
    /// checked out of `progress`.
    pub fn start(
        &mut self,
        progress: &Progress,
        enemy: ActorId,
        enemy_stats: CombatantStats,
        combat: CombatConfig,
        on_outcome: impl FnOnce(EncounterReport) + 'static,
    ) -> Result<()> {
        if let Some(active) = &self.active {
            warn!(
                active = %active.enemy,
                requested = %enemy,
                "Encounter start rejected: another encounter is running"
            );
            return Err(HostError::ConcurrentEncounter {
                active: active.enemy,
                requested: enemy,
            });
        }
        combat.validate()?;

        self.mover.suspend();

        let mut encounter = CombatEncounter::new(combat, progress.player(), enemy_stats);
        if let Err(err) = encounter.begin() {
            self.mover.resume();
            return Err(err.into());
        }

        info!(enemy = %enemy, "Encounter started");
        self.active = Some(ActiveEncounter {
            enemy,
            encounter,
            on_outcome: Box::new(on_outcome),
            linger: 0.0,
        });
        self.flush_events();
        Ok(())
    }

    /// Forwards the player's attack to the active encounter.
    pub fn player_attack(&mut self, progress: &mut Progress) -> Result<AttackReport> {
        let active = self.active.as_mut().ok_or(HostError::NoActiveEncounter)?;
        let result = active.encounter.player_attack();
        self.flush_events();

        let report = result.inspect_err(|err| debug!(error = %err, "Player attack rejected"))?;
        self.settle(progress);
        Ok(report)
    }

    /// Forwards a reaction input to the active encounter.
    pub fn attempt_reaction(&mut self) -> Result<bool> {
        let active = self.active.as_mut().ok_or(HostError::NoActiveEncounter)?;
        let result = active.encounter.attempt_reaction();
        self.flush_events();

        Ok(result.inspect_err(|err| debug!(error = %err, "Reaction ignored"))?)
    }

    /// Advances the active encounter by `dt` seconds.
    ///
    /// Returns the report if this tick ended the encounter. Once the outcome
    /// is decided the host waits [`HostConfig::outcome_delay`] before ending.
    pub fn tick(&mut self, dt: f32, progress: &mut Progress) -> Option<EncounterReport> {
        let active = self.active.as_mut()?;

        if active.encounter.is_over() {
            active.linger += dt;
        } else if let Err(err) = active.encounter.tick(dt) {
            debug!(error = %err, "Tick rejected");
        }
        self.flush_events();
        self.settle(progress)
    }

    /// Ends a finished encounter: commits the player's stats, resumes the
    /// mover, and runs the outcome callback.
    ///
    /// Returns `None` without touching anything when there is no active
    /// encounter or it has no outcome yet (use [`EncounterHost::abort`] to
    /// cut one short).
    pub fn end(&mut self, progress: &mut Progress) -> Option<EncounterReport> {
        let outcome = self.active.as_ref()?.encounter.outcome()?;
        let active = self.active.take()?;

        let player = active.encounter.player();
        progress.commit(player);
        progress.record(outcome);
        self.mover.resume();

        let report = EncounterReport {
            enemy: active.enemy,
            outcome,
            player,
        };
        info!(
            enemy = %report.enemy,
            outcome = %outcome,
            player_hp = player.current_hp(),
            "Encounter ended"
        );
        (active.on_outcome)(report);
        Some(report)
    }

    /// Force-terminates the active encounter (e.g. host shutdown).
    ///
    /// The mover is resumed and the player's stats are committed, but the
    /// outcome callback does not run. An encounter whose outcome is already
    /// decided is ended normally instead.
    pub fn abort(&mut self, progress: &mut Progress) -> Option<EncounterEnd> {
        let active = self.active.as_ref()?;
        if active.encounter.is_over() {
            return self.end(progress).map(EncounterEnd::Finished);
        }
        let active = self.active.take()?;

        progress.commit(active.encounter.player());
        self.mover.resume();
        warn!(enemy = %active.enemy, phase = %active.encounter.phase(), "Encounter aborted");
        self.emit_line("Combat aborted.");
        Some(EncounterEnd::Aborted {
            enemy: active.enemy,
        })
    }

    pub fn current_encounter(&self) -> Option<&CombatEncounter> {
        self.active.as_ref().map(|active| &active.encounter)
    }

    pub fn active_enemy(&self) -> Option<ActorId> {
        self.active.as_ref().map(|active| active.enemy)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn snapshot(&self) -> Option<EncounterSnapshot> {
        self.current_encounter().map(CombatEncounter::snapshot)
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    fn settle(&mut self, progress: &mut Progress) -> Option<EncounterReport> {
        let active = self.active.as_ref()?;
        if active.encounter.is_over() && active.linger >= self.config.outcome_delay {
            self.end(progress)
        } else {
            None
        }
    }

    fn flush_events(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        for event in active.encounter.drain_events() {
            log_event(active.enemy, &event);
            if let Some(sink) = self.log_sink.as_mut() {
                sink(&event.to_string());
            }
        }
    }

    fn emit_line(&mut self, line: &str) {
        if let Some(sink) = self.log_sink.as_mut() {
            sink(line);
        }
    }
}

fn log_event(enemy: ActorId, event: &CombatEvent) {
    if event.is_milestone() {
        info!(enemy = %enemy, "{event}");
    } else {
        debug!(enemy = %enemy, ?event, "{event}");
    }
}
