use tilequest_core::{
    Battle, BattleConfig, BattleFlags, BattleOutcome, BattleState, BattleStats, Combatant, Element,
    Move, MoveSet, PcgRng, Roster, StatusCondition,
};

fn certain() -> BattleConfig {
    BattleConfig {
        critical_percent: 0.0,
        random_factor_min: 1.0,
        random_factor_max: 1.0,
        ..BattleConfig::default()
    }
}

fn moves(list: impl IntoIterator<Item = Move>) -> MoveSet {
    list.into_iter().collect()
}

#[test]
fn finishing_blow_wins_and_levels_up() {
    let mut roster = Roster::new();
    let player = roster.insert(
        Combatant::new("Puddle", Element::Water, BattleStats::new(100, 80, 40, 45))
            .with_moves(moves([Move::new("Headbutt", Element::Normal, 40, 100.0, 10)])),
    );
    let enemy = roster.insert(Combatant::new(
        "Mole",
        Element::Ground,
        BattleStats::new(50, 40, 40, 40),
    ));

    let mut rng = PcgRng::new(3);
    let mut battle = Battle::new(player, Some(enemy), certain());
    battle.start(&mut roster);
    battle.update(2.0, &mut roster, &mut rng);
    assert_eq!(battle.state(), BattleState::PlayerTurn);

    // 40 * (80 / 40) * 1.0 = 80, clamped to the remaining 50.
    let result = battle.select_move("Headbutt", &mut roster, &mut rng).unwrap();
    assert_eq!(result.damage, Some(50));
    assert_eq!(roster.get(enemy).unwrap().stats.health, 0);
    assert_eq!(battle.state(), BattleState::Win);
    assert_eq!(battle.outcome(), Some(BattleOutcome::Victory));

    let grown = roster.get(player).unwrap();
    assert_eq!(grown.level, 2);
    assert!(grown.stats.max_health >= 100 && grown.stats.max_health <= 140);
    assert_eq!(grown.stats.health, grown.stats.max_health);
    assert!(grown.flags.contains(BattleFlags::WON));

    battle.update(2.0, &mut roster, &mut rng);
    assert_eq!(battle.state(), BattleState::Finished);
    assert!(!battle.is_active());
    // The world actor is not left fainted.
    assert_eq!(roster.get(enemy).unwrap().stats.health, 50);
    assert!(roster.get(player).unwrap().flags.contains(BattleFlags::BATTLE_END));
}

#[test]
fn poison_wears_the_player_down() {
    let mut roster = Roster::new();
    let mut puddle = Combatant::new("Puddle", Element::Water, BattleStats::new(20, 50, 500, 45))
        .with_moves(moves([Move::new("Growl", Element::Normal, 0, 100.0, 40)]));
    puddle.stats.health = 20;
    let player = roster.insert(puddle);
    let enemy = roster.insert(
        Combatant::new("Beetle", Element::Insect, BattleStats::new(80, 40, 40, 40)).with_moves(
            moves([Move::new("Spores", Element::Insect, 0, 100.0, 40)
                .inflicting(StatusCondition::Poison)]),
        ),
    );

    let mut rng = PcgRng::new(11);
    let mut battle = Battle::new(player, Some(enemy), certain());
    battle.start(&mut roster);

    for _ in 0..100 {
        match battle.state() {
            BattleState::PlayerTurn => {
                battle.select_move("Growl", &mut roster, &mut rng).unwrap();
            }
            BattleState::Finished => break,
            _ => battle.update(1.0, &mut roster, &mut rng),
        }
    }

    assert_eq!(battle.state(), BattleState::Finished);
    assert_eq!(battle.outcome(), Some(BattleOutcome::Defeat));
    assert!(battle.log().contains("Puddle is hurt by poison!"));
    let puddle = roster.get(player).unwrap();
    assert_eq!(puddle.stats.health, 0);
    assert!(puddle.flags.contains(BattleFlags::LOST | BattleFlags::BATTLE_END));
}

#[test]
fn seeded_battles_always_finish_within_bounds() {
    for seed in 0..50 {
        let mut roster = Roster::new();
        let player = roster.insert(Combatant::new("Puddle", Element::Water, BattleStats::default()));
        let enemy = roster.insert(Combatant::new("Mole", Element::Ground, BattleStats::default()));
        let mut rng = PcgRng::new(seed);
        let mut battle = Battle::new(player, Some(enemy), BattleConfig::default());
        battle.start(&mut roster);

        let mut steps = 0;
        while battle.state() != BattleState::Finished {
            steps += 1;
            assert!(steps < 10_000, "seed {seed} did not finish");

            if battle.state() == BattleState::PlayerTurn {
                let name = {
                    let moves = &roster.get(player).unwrap().moves;
                    let index = moves.first_available().unwrap();
                    moves.get(index).unwrap().name.clone()
                };
                battle.select_move(&name, &mut roster, &mut rng).unwrap();
            } else {
                battle.update(0.5, &mut roster, &mut rng);
            }

            for (_, combatant) in roster.iter() {
                assert!(combatant.stats.health <= combatant.stats.max_health);
            }
            assert!(battle.log().len() <= 10);
        }
        assert!(battle.outcome().is_some());
    }
}

#[test]
fn same_seed_replays_identically() {
    let play = |seed| {
        let mut roster = Roster::new();
        let player = roster.insert(Combatant::new("Puddle", Element::Water, BattleStats::default()));
        let enemy = roster.insert(Combatant::new("Beetle", Element::Insect, BattleStats::default()));
        let mut rng = PcgRng::new(seed);
        let mut battle = Battle::new(player, Some(enemy), BattleConfig::default());
        battle.start(&mut roster);
        for _ in 0..200 {
            if battle.state() == BattleState::PlayerTurn {
                let _ = battle.select_move("Tackle", &mut roster, &mut rng);
            } else {
                battle.update(0.5, &mut roster, &mut rng);
            }
        }
        (battle.log().iter().map(str::to_owned).collect::<Vec<_>>(), battle.outcome())
    };

    assert_eq!(play(99), play(99));
}
