//! End-to-end host lifecycle: start, fight, outcome hand-off, abort.

use std::cell::RefCell;
use std::rc::Rc;

use duel_core::{CombatConfig, CombatError, CombatantStats, Outcome, Phase};
use duel_runtime::{
    ActorId, EncounterEnd, EncounterHost, EncounterReport, HostConfig, HostError, Mover, Progress,
};

#[derive(Clone, Default)]
struct RecordingMover {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl Mover for RecordingMover {
    fn suspend(&mut self) {
        self.calls.borrow_mut().push("suspend");
    }

    fn resume(&mut self) {
        self.calls.borrow_mut().push("resume");
    }
}

struct Harness {
    host: EncounterHost<RecordingMover>,
    mover_calls: Rc<RefCell<Vec<&'static str>>>,
    lines: Rc<RefCell<Vec<String>>>,
    reports: Rc<RefCell<Vec<EncounterReport>>>,
    progress: Progress,
}

impl Harness {
    fn new(config: HostConfig) -> Self {
        let mover = RecordingMover::default();
        let mover_calls = Rc::clone(&mover.calls);
        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink_lines = Rc::clone(&lines);
        let host = EncounterHost::new(mover, config)
            .with_log_sink(move |line| sink_lines.borrow_mut().push(line.to_string()));

        Self {
            host,
            mover_calls,
            lines,
            reports: Rc::new(RefCell::new(Vec::new())),
            progress: Progress::default(),
        }
    }

    fn start(&mut self, enemy: u32, combat: CombatConfig) -> Result<(), HostError> {
        let reports = Rc::clone(&self.reports);
        self.host.start(
            &self.progress,
            ActorId(enemy),
            combat.enemy_stats(),
            combat,
            move |report| reports.borrow_mut().push(report),
        )
    }

    /// Lets the enemy's charge-up run out without reacting.
    fn run_out_charge(&mut self) -> Option<EncounterReport> {
        while self.host.snapshot()?.phase == Phase::EnemyCharging {
            if let Some(report) = self.host.tick(0.05, &mut self.progress) {
                return Some(report);
            }
        }
        None
    }
}

#[test]
fn start_suspends_mover_and_begins() {
    let mut harness = Harness::new(HostConfig::default());
    harness.start(7, CombatConfig::default()).unwrap();

    assert!(harness.host.is_active());
    assert_eq!(harness.host.active_enemy(), Some(ActorId(7)));
    assert_eq!(*harness.mover_calls.borrow(), vec!["suspend"]);
    let encounter = harness.host.current_encounter().unwrap();
    assert_eq!(encounter.phase(), Phase::PlayerDeciding);
    assert_eq!(
        *harness.lines.borrow(),
        vec!["Combat started! HP: 100/100".to_string()]
    );
}

#[test]
fn second_start_is_rejected_and_changes_nothing() {
    let mut harness = Harness::new(HostConfig::default());
    harness.start(1, CombatConfig::default()).unwrap();
    harness.host.player_attack(&mut harness.progress).unwrap();
    harness.host.tick(0.5, &mut harness.progress);
    let before = harness.host.snapshot().unwrap();

    let err = harness.start(2, CombatConfig::default()).unwrap_err();

    assert_eq!(
        err,
        HostError::ConcurrentEncounter {
            active: ActorId(1),
            requested: ActorId(2)
        }
    );
    assert_eq!(harness.host.snapshot().unwrap(), before);
    assert_eq!(harness.host.active_enemy(), Some(ActorId(1)));
    assert_eq!(*harness.mover_calls.borrow(), vec!["suspend"]);
}

#[test]
fn invalid_config_is_rejected_before_suspending() {
    let mut harness = Harness::new(HostConfig::default());
    let combat = CombatConfig::new().with_turn_delay(-1.0);

    let err = harness.start(1, combat).unwrap_err();

    assert!(matches!(err, HostError::InvalidConfig(_)));
    assert!(!harness.host.is_active());
    assert!(harness.mover_calls.borrow().is_empty());
}

#[test]
fn victory_reports_outcome_and_persists_health() {
    let mut harness = Harness::new(HostConfig::default());
    harness.start(3, CombatConfig::default()).unwrap();

    for _ in 0..3 {
        harness.host.player_attack(&mut harness.progress).unwrap();
        assert!(harness.run_out_charge().is_none());
    }
    let report = harness.host.player_attack(&mut harness.progress).unwrap();
    assert!(report.lethal);

    assert!(!harness.host.is_active());
    assert_eq!(*harness.mover_calls.borrow(), vec!["suspend", "resume"]);
    let reports = harness.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].enemy, ActorId(3));
    assert_eq!(reports[0].outcome, Outcome::Victory);
    assert_eq!(harness.progress.player().current_hp(), 70.0);
    assert_eq!(harness.progress.victories(), 1);
    assert_eq!(
        harness.lines.borrow().last().map(String::as_str),
        Some("Victory! Enemy defeated!")
    );
}

#[test]
fn health_carries_into_next_encounter() {
    let mut harness = Harness::new(HostConfig::default());
    harness.start(1, CombatConfig::default()).unwrap();
    harness.host.player_attack(&mut harness.progress).unwrap();
    harness.run_out_charge();
    harness
        .host
        .player_attack(&mut harness.progress)
        .unwrap();
    harness.host.abort(&mut harness.progress);
    assert_eq!(harness.progress.player().current_hp(), 90.0);

    harness.lines.borrow_mut().clear();
    harness.start(2, CombatConfig::default()).unwrap();

    assert_eq!(
        harness.lines.borrow().first().map(String::as_str),
        Some("Combat started! HP: 90/100")
    );
}

#[test]
fn defeat_is_reported_distinctly() {
    let mut harness = Harness::new(HostConfig::default());
    harness
        .progress
        .commit(CombatantStats::with_current(100.0, 10.0));
    harness.start(4, CombatConfig::default()).unwrap();

    harness.host.player_attack(&mut harness.progress).unwrap();
    let report = harness.run_out_charge().expect("charge should end the encounter");

    assert_eq!(report.outcome, Outcome::Defeat);
    assert_eq!(report.player.current_hp(), 0.0);
    assert_eq!(harness.progress.defeats(), 1);
    assert_eq!(harness.reports.borrow().as_slice(), &[report]);
    assert!(!harness.host.is_active());
}

#[test]
fn outcome_delay_defers_end() {
    let mut harness = Harness::new(HostConfig::paced());
    let lethal = CombatConfig::default().with_damage(50.0, 10.0);
    harness.start(6, lethal).unwrap();
    harness.host.player_attack(&mut harness.progress).unwrap();

    assert!(harness.host.is_active());
    assert_eq!(
        harness.host.snapshot().unwrap().outcome,
        Some(Outcome::Victory)
    );
    assert!(harness.host.tick(1.0, &mut harness.progress).is_none());
    assert!(harness.reports.borrow().is_empty());

    let report = harness.host.tick(0.5, &mut harness.progress).unwrap();
    assert_eq!(report.enemy, ActorId(6));
    assert_eq!(harness.reports.borrow().len(), 1);
}

#[test]
fn abort_resumes_mover_without_callback() {
    let mut harness = Harness::new(HostConfig::default());
    harness.start(8, CombatConfig::default()).unwrap();
    harness.host.player_attack(&mut harness.progress).unwrap();
    harness.host.tick(0.7, &mut harness.progress);

    let end = harness.host.abort(&mut harness.progress);

    assert_eq!(end, Some(EncounterEnd::Aborted { enemy: ActorId(8) }));
    assert!(!harness.host.is_active());
    assert!(harness.reports.borrow().is_empty());
    assert_eq!(*harness.mover_calls.borrow(), vec!["suspend", "resume"]);
    assert_eq!(
        harness.lines.borrow().last().map(String::as_str),
        Some("Combat aborted.")
    );

    assert_eq!(harness.host.abort(&mut harness.progress), None);
    assert_eq!(harness.host.end(&mut harness.progress), None);
    assert_eq!(harness.mover_calls.borrow().len(), 2);
}

#[test]
fn end_waits_for_an_outcome() {
    let mut harness = Harness::new(HostConfig::default());
    harness.start(9, CombatConfig::default()).unwrap();

    assert_eq!(harness.host.end(&mut harness.progress), None);
    assert!(harness.host.is_active());
    assert_eq!(*harness.mover_calls.borrow(), vec!["suspend"]);
}

#[test]
fn inputs_without_encounter_are_rejected() {
    let mut harness = Harness::new(HostConfig::default());

    assert_eq!(
        harness.host.player_attack(&mut harness.progress),
        Err(HostError::NoActiveEncounter)
    );
    assert_eq!(
        harness.host.attempt_reaction(),
        Err(HostError::NoActiveEncounter)
    );
    assert_eq!(harness.host.tick(0.1, &mut harness.progress), None);
}

#[test]
fn reaction_inputs_are_forwarded() {
    let mut harness = Harness::new(HostConfig::default());
    harness.start(10, CombatConfig::default()).unwrap();

    assert!(matches!(
        harness.host.attempt_reaction(),
        Err(HostError::Combat(CombatError::InvalidTransition { .. }))
    ));

    harness.host.player_attack(&mut harness.progress).unwrap();
    harness.host.tick(1.45, &mut harness.progress);
    assert_eq!(harness.host.attempt_reaction(), Ok(true));
    assert_eq!(
        harness.host.attempt_reaction(),
        Err(HostError::Combat(CombatError::DuplicateReaction))
    );

    harness.host.tick(0.1, &mut harness.progress);
    let snapshot = harness.host.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::PlayerDeciding);
    assert_eq!(snapshot.player_hp, 100.0);
    assert!(
        harness
            .lines
            .borrow()
            .iter()
            .any(|line| line == "You dodged the attack!")
    );
}

#[test]
fn scripted_scenario_through_host() {
    let mut harness = Harness::new(HostConfig::default());
    harness.start(11, CombatConfig::default()).unwrap();

    let attack = harness.host.player_attack(&mut harness.progress).unwrap();
    assert_eq!(attack.target_hp, 35.0);
    assert_eq!(harness.host.snapshot().unwrap().phase, Phase::EnemyCharging);

    harness.host.tick(1.4, &mut harness.progress);
    let progress = harness.host.snapshot().unwrap().charge_progress.unwrap();
    assert!(progress < 0.9);
    assert_eq!(harness.host.attempt_reaction(), Ok(false));

    harness.host.tick(0.1, &mut harness.progress);
    let snapshot = harness.host.snapshot().unwrap();
    assert_eq!(snapshot.player_hp, 90.0);
    assert_eq!(snapshot.phase, Phase::PlayerDeciding);
    // Committed to progress only when the encounter ends.
    assert_eq!(harness.progress.player().current_hp(), 100.0);
}
