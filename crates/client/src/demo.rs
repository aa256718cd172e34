//! Scripted encounter run.
//!
//! Stands in for the world and the input device: a [`WorldMover`] plays the
//! player's movement controller, a [`Roster`] owns the enemies, and the
//! script attacks on every player turn and reacts a fixed time into every
//! charge-up.
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use duel_core::{CombatConfig, Outcome, Phase};
use duel_runtime::{ActorId, EncounterHost, EncounterReport, HostConfig, HostError, Mover, Progress};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::ScriptConfig;

/// Movement controller of the scripted player.
#[derive(Debug, Default)]
pub struct WorldMover {
    frozen: bool,
}

impl WorldMover {
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl Mover for WorldMover {
    fn suspend(&mut self) {
        debug!("Player movement suspended");
        self.frozen = true;
    }

    fn resume(&mut self) {
        debug!("Player movement resumed");
        self.frozen = false;
    }
}

/// Enemies still standing, plus who ended the run.
#[derive(Debug, Default)]
pub struct Roster {
    alive: Vec<ActorId>,
    fallen: Vec<ActorId>,
    killed_by: Option<ActorId>,
}

impl Roster {
    pub fn with_enemies(count: u32) -> Self {
        Self {
            alive: (1..=count).map(ActorId).collect(),
            ..Self::default()
        }
    }

    fn next(&self) -> Option<ActorId> {
        self.alive.first().copied()
    }

    /// Lifecycle hook for a finished encounter.
    fn apply(&mut self, report: EncounterReport) {
        match report.outcome {
            Outcome::Victory => {
                self.alive.retain(|enemy| *enemy != report.enemy);
                self.fallen.push(report.enemy);
            }
            Outcome::Defeat => self.killed_by = Some(report.enemy),
        }
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    /// Every enemy was defeated.
    Cleared,
    /// The player died.
    Lost,
    /// The tick cap was hit.
    Stalled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub status: RunStatus,
    pub progress: Progress,
    pub fallen: Vec<ActorId>,
    pub ticks: u64,
}

pub struct Demo {
    host: EncounterHost<WorldMover>,
    combat: CombatConfig,
    progress: Progress,
    roster: Rc<RefCell<Roster>>,
    script: ScriptConfig,
    ticks: u64,
}

impl Demo {
    pub fn new(
        combat: CombatConfig,
        host: HostConfig,
        progress: Progress,
        script: ScriptConfig,
    ) -> Self {
        let host = EncounterHost::new(WorldMover::default(), host)
            .with_log_sink(|line| println!("{line}"));
        Self {
            host,
            combat,
            progress,
            roster: Rc::new(RefCell::new(Roster::with_enemies(script.encounters))),
            script,
            ticks: 0,
        }
    }

    /// Drives [`Demo::step`] on a fixed `tick_interval` until the run ends.
    pub async fn run(mut self, tick_interval: Duration) -> RunSummary {
        let dt = tick_interval.as_secs_f32();
        let mut interval = tokio::time::interval(tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let status = self.step(dt);
            if status != RunStatus::Running {
                return self.finish(status);
            }
        }
    }

    /// One driver frame: start or drive the current encounter, then advance
    /// it by `dt`.
    pub fn step(&mut self, dt: f32) -> RunStatus {
        self.ticks += 1;
        if self.ticks > self.script.max_ticks {
            warn!(ticks = self.ticks, "Tick cap reached, stopping run");
            self.host.abort(&mut self.progress);
            return RunStatus::Stalled;
        }

        if !self.host.is_active() {
            return self.start_next();
        }

        if self.host.current_encounter().map(|e| e.phase()) == Some(Phase::PlayerDeciding) {
            self.log_snapshot();
            if let Err(err) = self.host.player_attack(&mut self.progress) {
                warn!(error = %err, "Scripted attack rejected");
            }
        }

        if let Some(report) = self.host.tick(dt, &mut self.progress) {
            debug!(enemy = %report.enemy, outcome = %report.outcome, "Encounter settled");
        }

        if self.should_react() {
            match self.host.attempt_reaction() {
                Ok(success) => debug!(success, "Scripted reaction"),
                Err(err) => debug!(error = %err, "Scripted reaction ignored"),
            }
        }

        RunStatus::Running
    }

    pub fn host(&self) -> &EncounterHost<WorldMover> {
        &self.host
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    fn start_next(&mut self) -> RunStatus {
        let (killed_by, next) = {
            let roster = self.roster.borrow();
            (roster.killed_by, roster.next())
        };
        if let Some(enemy) = killed_by {
            info!(enemy = %enemy, "Run lost");
            return RunStatus::Lost;
        }
        let Some(enemy) = next else {
            info!("All enemies defeated");
            return RunStatus::Cleared;
        };

        let roster = Rc::clone(&self.roster);
        let started = self.host.start(
            &self.progress,
            enemy,
            self.combat.enemy_stats(),
            self.combat,
            move |report| roster.borrow_mut().apply(report),
        );
        match started {
            Ok(()) => RunStatus::Running,
            Err(err @ HostError::InvalidConfig(_)) => {
                warn!(error = %err, "Encounter could not start");
                RunStatus::Stalled
            }
            Err(err) => {
                warn!(error = %err, "Encounter start rejected");
                RunStatus::Running
            }
        }
    }

    fn should_react(&self) -> bool {
        let Some(encounter) = self.host.current_encounter() else {
            return false;
        };
        let Some(window) = encounter.window() else {
            return false;
        };
        !encounter.reaction().attempted && window.elapsed() >= self.script.reaction_at
    }

    fn log_snapshot(&self) {
        let Some(snapshot) = self.host.snapshot() else {
            return;
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => debug!(snapshot = %json, "Player turn"),
            Err(err) => debug!(error = %err, "Snapshot not serializable"),
        }
    }

    fn finish(self, status: RunStatus) -> RunSummary {
        let fallen = self.roster.borrow().fallen.clone();
        RunSummary {
            status,
            progress: self.progress,
            fallen,
            ticks: self.ticks,
        }
    }
}
