use glam::Vec2;
use tilequest_core::{
    BattleOutcome, BattleStats, Combatant, DialogueNode, DialogueSystem, DialogueTree, Element,
    GameConfig, GameSession, HeldKeys, Level, Mode, Obstacle, PcgRng, Roster, StatusCondition,
};

const SPAWN: Vec2 = Vec2::new(100.0, 100.0);

fn roster() -> Roster {
    let mut roster = Roster::new();
    roster.insert(Combatant::new("Puddle", Element::Water, BattleStats::default()));
    roster.insert(Combatant::new("Beetle", Element::Insect, BattleStats::default()));
    roster
}

fn grassland() -> Level {
    Level::new("Grassland", SPAWN).with_encounters(1_000.0, ["Beetle"])
}

fn config() -> GameConfig {
    let mut config = GameConfig::default();
    config.battle.run_success_percent = 100.0;
    config
}

#[test]
fn walls_block_exploration() {
    let level = Level::new("Cave", SPAWN)
        .with_wall(Obstacle::wall(Vec2::new(140.0, 0.0), Vec2::new(10.0, 400.0)));
    let mut roster = roster();
    let player = roster.find("Puddle").unwrap();
    let mut session =
        GameSession::new(&level, roster, player, DialogueSystem::default(), config()).unwrap();
    let mut rng = PcgRng::new(1);

    for _ in 0..10 {
        let report = session.frame(0.05, &HeldKeys::RIGHT, &mut rng);
        assert_eq!(report.mode, Mode::Exploration);
        assert_eq!(report.encounter, None);
    }
    // Actor is 32 wide, so it rests against the wall at 140.
    assert_eq!(session.actor().position.x, 108.0);
    assert_eq!(session.player_combatant().unwrap().placement.world, session.actor().position);
}

#[test]
fn encounter_switches_to_battle_and_running_returns() {
    let level = grassland();
    let mut roster = roster();
    let player = roster.find("Puddle").unwrap();
    let beetle = roster.find("Beetle").unwrap();
    let mut session =
        GameSession::new(&level, roster, player, DialogueSystem::default(), config()).unwrap();
    let mut rng = PcgRng::new(5);

    let report = session.frame(0.1, &HeldKeys::RIGHT, &mut rng);
    assert_eq!(report.encounter, Some(beetle));
    assert_eq!(session.mode(), Mode::Battle);

    // Battle frames ignore movement input.
    let before = session.actor().position;
    let report = session.frame(2.0, &HeldKeys::RIGHT, &mut rng);
    assert_eq!(report.mode, Mode::Battle);
    assert_eq!(report.collision, None);
    assert_eq!(session.actor().position, before);

    assert_eq!(session.run(&mut rng), Ok(true));
    assert_eq!(session.mode(), Mode::Exploration);
    assert!(session.player_combatant().unwrap().flags.is_empty());
    assert_eq!(session.battle().unwrap().outcome(), Some(BattleOutcome::Fled));

    // Grace period: walking on does not immediately trigger another battle.
    let report = session.frame(0.1, &HeldKeys::RIGHT, &mut rng);
    assert_eq!(report.encounter, None);
    assert!(session.grace_remaining() > 0.0);
}

#[test]
fn defeat_sends_the_player_back_to_spawn_healed() {
    let level = grassland();
    let mut roster = roster();
    let player = roster.find("Puddle").unwrap();
    {
        let puddle = roster.get_mut(player).unwrap();
        puddle.status = StatusCondition::Poison;
        puddle.stats.health = 5;
    }
    let mut session =
        GameSession::new(&level, roster, player, DialogueSystem::default(), config()).unwrap();
    let mut rng = PcgRng::new(9);

    assert!(session.frame(0.1, &HeldKeys::RIGHT, &mut rng).encounter.is_some());
    assert_ne!(session.actor().position, SPAWN);

    // Start delay, then poison knocks the player out at the start of the turn.
    session.frame(2.0, &HeldKeys::empty(), &mut rng);
    let report = session.frame(2.0, &HeldKeys::empty(), &mut rng);
    assert_eq!(report.finished, Some(BattleOutcome::Defeat));

    assert_eq!(session.mode(), Mode::Exploration);
    assert_eq!(session.actor().position, SPAWN);
    let puddle = session.player_combatant().unwrap();
    assert_eq!(puddle.stats.health, puddle.stats.max_health);
    assert_eq!(puddle.status, StatusCondition::None);
    assert!(puddle.flags.is_empty());
}

#[test]
fn open_dialogue_holds_the_player_in_place() {
    let level = Level::new("Town", SPAWN).with_interactable(Obstacle::interactable(
        "sign",
        SPAWN + Vec2::new(8.0, 24.0),
        Vec2::splat(16.0),
        Some(4),
    ));
    let mut dialogue = DialogueSystem::default();
    dialogue.insert(DialogueTree::new(4, vec![DialogueNode::end("Town square.")]));
    let mut roster = roster();
    let player = roster.find("Puddle").unwrap();
    let mut session = GameSession::new(&level, roster, player, dialogue, config()).unwrap();
    let mut rng = PcgRng::new(2);

    // Actor faces down at spawn; the sign is right below it.
    let report = session.frame(0.016, &HeldKeys::INTERACT, &mut rng);
    assert!(report.collision.unwrap().interaction.is_some());
    assert!(session.dialogue().is_active());

    session.frame(0.1, &HeldKeys::LEFT, &mut rng);
    assert_eq!(session.actor().position, SPAWN);

    session.dialogue_mut().end_dialogue();
    session.frame(0.1, &HeldKeys::LEFT, &mut rng);
    assert!(session.actor().position.x < SPAWN.x);
}

#[test]
fn unknown_wild_names_are_skipped() {
    let level = Level::new("Marsh", SPAWN).with_encounters(1.0, ["Beetle", "Ghost", "Puddle"]);
    let mut roster = roster();
    let player = roster.find("Puddle").unwrap();
    let session =
        GameSession::new(&level, roster, player, DialogueSystem::default(), config()).unwrap();
    assert_eq!(session.wild().len(), 1);
}
