use draft_core::{
    DecisionType, EventContext, EventXpInput, Fight, FightCard, FightMethod, FightStats, Fighter,
    FighterClass, FighterId, FighterPenalty, PowerUpCard, Roster, RosterPowerUp, RosterValidator,
    ScoringEngine, XpCalculator, rank_leaderboard, score_rosters,
};

/// Routes engine logs to the test harness when `RUST_LOG` is set.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fighter(id: &str, class: FighterClass) -> Fighter {
    Fighter::new(id, format!("Fighter {id}"), class, 30)
}

/// Single-fighter roster whose captain is somebody else.
fn solo(f: &Fighter) -> Roster {
    Roster::new("r-solo", vec![f.clone()]).with_captain("someone-else")
}

/// Three strikers, two grapplers, one all-rounder; `captain1` captains.
fn striker_stack() -> Roster {
    Roster::new(
        "r-strikers",
        vec![
            fighter("captain1", FighterClass::Striker),
            fighter("striker2", FighterClass::Striker),
            fighter("striker3", FighterClass::Striker),
            fighter("f4", FighterClass::Grappler),
            fighter("f5", FighterClass::Grappler),
            fighter("f6", FighterClass::AllRounder),
        ],
    )
    .with_captain("captain1")
}

fn win(winner: &str, method: FightMethod, round: u8) -> Fight {
    Fight::new("bout", winner, "opponent", Some(FighterId::from(winner)), method, round)
}

fn loss(loser: &str, method: FightMethod, round: u8) -> Fight {
    Fight::new("bout", loser, "opponent", Some(FighterId::from("opponent")), method, round)
}

fn score(fighter: &Fighter, fight: &Fight, roster: &Roster) -> f64 {
    ScoringEngine::default()
        .calculate_fighter_score(fighter, fight, roster)
        .value()
}

fn with_card(roster: Roster, card: PowerUpCard, fighter_id: &str) -> Roster {
    roster.with_power_up(RosterPowerUp::from_card(&card, fighter_id))
}

// ================================================================
// Base score
// ================================================================

#[test]
fn test_base_scores_by_method() {
    init_tracing();
    let f1 = fighter("f1", FighterClass::Striker);
    let roster = solo(&f1);

    assert_eq!(score(&f1, &win("f1", FightMethod::KoTko, 2), &roster), 260.0);
    assert_eq!(score(&f1, &win("f1", FightMethod::Submission, 1), &roster), 280.0);
    assert_eq!(
        score(
            &f1,
            &win("f1", FightMethod::Decision, 3).with_decision(DecisionType::Unanimous),
            &roster
        ),
        120.0
    );
    assert_eq!(score(&f1, &loss("f1", FightMethod::KoTko, 1), &roster), 0.0);
}

#[test]
fn test_volume_counts_for_losers() {
    let f1 = fighter("f1", FighterClass::AllRounder);
    let fight = loss("f1", FightMethod::Decision, 3).with_stats("f1", FightStats::new(1, 3, 1, 90));

    // 20 + 30 + 10 + 45
    assert_eq!(score(&f1, &fight, &solo(&f1)), 105.0);
}

#[test]
fn test_missing_stats_contribute_nothing() {
    let f1 = fighter("f1", FighterClass::Striker);
    let fight = win("f1", FightMethod::KoTko, 1).with_stats("opponent", FightStats::new(3, 3, 3, 300));

    assert_eq!(score(&f1, &fight, &solo(&f1)), 300.0);
}

// ================================================================
// Synergy & captain
// ================================================================

#[test]
fn test_striker_synergy_and_captain_stack() {
    let roster = striker_stack();
    let fight = win("captain1", FightMethod::KoTko, 2).with_stats("captain1", FightStats::new(2, 0, 0, 50));

    // 200 + 25 + 40 + 60 = 325; * 1.15 = 373.75; * 1.5 = 560.625
    assert_eq!(score(&roster.fighters[0], &fight, &roster), 560.62);

    let striker2 = &roster.fighters[1];
    let fight = win("striker2", FightMethod::KoTko, 2).with_stats("striker2", FightStats::new(2, 0, 0, 50));
    assert_eq!(score(striker2, &fight, &roster), 373.75);
}

#[test]
fn test_grappler_and_all_rounder_synergies() {
    let grapplers = Roster::new(
        "r-grapplers",
        vec![
            fighter("g1", FighterClass::Grappler),
            fighter("g2", FighterClass::Grappler),
            fighter("g3", FighterClass::Grappler),
            fighter("s1", FighterClass::Striker),
            fighter("a1", FighterClass::AllRounder),
            fighter("a2", FighterClass::AllRounder),
        ],
    );
    let sub = win("g1", FightMethod::Submission, 1).with_stats("g1", FightStats::new(0, 1, 2, 20));
    // (180 + 40 + 100) * 1.15
    assert_eq!(score(&grapplers.fighters[0], &sub, &grapplers), 368.0);

    let all_rounders = Roster::new(
        "r-all-rounders",
        vec![
            fighter("a1", FighterClass::AllRounder),
            fighter("a2", FighterClass::AllRounder),
            fighter("a3", FighterClass::AllRounder),
            fighter("s1", FighterClass::Striker),
            fighter("g1", FighterClass::Grappler),
            fighter("g2", FighterClass::Grappler),
        ],
    );
    let decision = win("a1", FightMethod::Decision, 3)
        .with_decision(DecisionType::Unanimous)
        .with_stats("a1", FightStats::new(0, 0, 0, 100));
    // 120 + 50 + 10
    assert_eq!(score(&all_rounders.fighters[0], &decision, &all_rounders), 180.0);

    let knockout = win("a1", FightMethod::KoTko, 1);
    assert_eq!(score(&all_rounders.fighters[0], &knockout, &all_rounders), 300.0);
}

#[test]
fn test_synergy_threshold_boundary() {
    let two = Roster::new(
        "r-two",
        vec![
            fighter("s1", FighterClass::Striker),
            fighter("s2", FighterClass::Striker),
            fighter("g1", FighterClass::Grappler),
            fighter("g2", FighterClass::Grappler),
            fighter("a1", FighterClass::AllRounder),
            fighter("a2", FighterClass::AllRounder),
        ],
    );

    assert_eq!(score(&two.fighters[0], &win("s1", FightMethod::KoTko, 1), &two), 300.0);
}

#[test]
fn test_veterans_count_twice_without_winning_synergy() {
    // Old strikers are both Strikers and Veterans.
    let roster = Roster::new(
        "r-vets",
        vec![
            Fighter::new("v1", "Vet 1", FighterClass::Striker, 36),
            Fighter::new("v2", "Vet 2", FighterClass::Veteran, 38),
            Fighter::new("v3", "Vet 3", FighterClass::Grappler, 35),
            fighter("g1", FighterClass::Grappler),
            fighter("a1", FighterClass::AllRounder),
            fighter("a2", FighterClass::AllRounder),
        ],
    );
    let counts = roster.class_counts(35);
    // v2 counts once for its class and once for its age.
    assert_eq!(counts.get(FighterClass::Veteran), 4);
    assert_eq!(counts.get(FighterClass::Striker), 1);

    assert_eq!(score(&roster.fighters[1], &win("v2", FightMethod::KoTko, 1), &roster), 300.0);

    let split_loss = loss("v2", FightMethod::Decision, 3).with_decision(DecisionType::Split);
    assert_eq!(score(&roster.fighters[1], &split_loss, &roster), 0.0);
}

#[test]
fn test_captain_multiplies_volume_on_a_loss() {
    let captain = fighter("captain1", FighterClass::Grappler);
    let roster = Roster::new("r-cap", vec![captain.clone()]).with_captain("captain1");
    let fight = loss("captain1", FightMethod::Decision, 3).with_stats("captain1", FightStats::new(1, 2, 1, 50));

    // (20 + 20 + 10 + 25) * 1.5
    assert_eq!(score(&captain, &fight, &roster), 112.5);
}

// ================================================================
// Promotion bonuses
// ================================================================

#[test]
fn test_promotion_bonuses() {
    let f1 = fighter("f1", FighterClass::Grappler);
    let roster = solo(&f1);

    let potn = win("f1", FightMethod::KoTko, 1).with_performance_bonus("f1");
    assert_eq!(score(&f1, &potn, &roster), 400.0);

    let fotn = win("f1", FightMethod::Decision, 3)
        .with_decision(DecisionType::Split)
        .with_fight_of_the_night();
    // 100 * 1.0 + 100
    assert_eq!(score(&f1, &fotn, &roster), 200.0);

    let both = win("f1", FightMethod::Submission, 2)
        .with_stats("f1", FightStats::new(0, 1, 2, 20))
        .with_fight_of_the_night()
        .with_performance_bonus("f1");
    // 180 + 40 + 60 + 200
    assert_eq!(score(&f1, &both, &roster), 480.0);
}

#[test]
fn test_fight_of_the_night_reaches_the_loser() {
    let f1 = fighter("f1", FighterClass::Striker);
    let fight = loss("f1", FightMethod::Decision, 3)
        .with_stats("f1", FightStats::new(1, 0, 0, 50))
        .with_fight_of_the_night()
        .with_performance_bonus("opponent");

    assert_eq!(score(&f1, &fight, &solo(&f1)), 145.0);
}

#[test]
fn test_bonuses_are_multiplied_by_synergy_and_captain() {
    let roster = striker_stack();
    let fight = win("captain1", FightMethod::KoTko, 1).with_performance_bonus("captain1");

    // 400 * 1.15 * 1.5
    assert_eq!(score(&roster.fighters[0], &fight, &roster), 690.0);
}

// ================================================================
// Power-ups
// ================================================================

#[test]
fn test_hype_train_doubles_wins_and_inverts_losses() {
    let f1 = fighter("f1", FighterClass::Striker);
    let roster = with_card(solo(&f1), PowerUpCard::hype_train(), "f1");

    assert_eq!(score(&f1, &win("f1", FightMethod::KoTko, 1), &roster), 600.0);

    let fight = loss("f1", FightMethod::Decision, 3).with_stats("f1", FightStats::new(1, 0, 0, 10));
    assert_eq!(score(&f1, &fight, &roster), -50.0);
}

#[test]
fn test_resilience_converts_a_fight_of_the_night_loss() {
    let f1 = fighter("f1", FighterClass::AllRounder);
    let roster = with_card(solo(&f1), PowerUpCard::resilience(), "f1");

    let fotn_loss = loss("f1", FightMethod::Decision, 3)
        .with_decision(DecisionType::Unanimous)
        .with_stats("f1", FightStats::new(2, 1, 0, 50))
        .with_fight_of_the_night();
    // 100 * 1.2 + 75 + 100
    let breakdown = ScoringEngine::default().score_breakdown(&f1, &fotn_loss, &roster);
    assert!(breakdown.loss_converted);
    assert!(!breakdown.won);
    assert_eq!(breakdown.final_score.value(), 295.0);

    let plain_loss = loss("f1", FightMethod::KoTko, 1).with_stats("f1", FightStats::new(0, 0, 0, 20));
    assert_eq!(score(&f1, &plain_loss, &roster), 10.0);

    let bonus_win = win("f1", FightMethod::KoTko, 1)
        .with_fight_of_the_night()
        .with_performance_bonus("f1");
    assert_eq!(score(&f1, &bonus_win, &roster), 500.0);
}

#[test]
fn test_blitz_requires_a_first_round_finish() {
    let f1 = fighter("f1", FighterClass::Striker);
    let roster = with_card(solo(&f1), PowerUpCard::blitz(), "f1");

    assert_eq!(score(&f1, &win("f1", FightMethod::KoTko, 1), &roster), 900.0);
    assert_eq!(score(&f1, &win("f1", FightMethod::KoTko, 2), &roster), 260.0);

    let decision = win("f1", FightMethod::Decision, 3).with_decision(DecisionType::Unanimous);
    assert_eq!(score(&f1, &decision, &roster), 120.0);
}

#[test]
fn test_red_mist_pays_per_promotion_bonus() {
    let f1 = fighter("f1", FighterClass::Grappler);
    let roster = with_card(solo(&f1), PowerUpCard::red_mist(), "f1");

    let potn = win("f1", FightMethod::KoTko, 1).with_performance_bonus("f1");
    assert_eq!(score(&f1, &potn, &roster), 450.0);

    let both = win("f1", FightMethod::Submission, 2)
        .with_fight_of_the_night()
        .with_performance_bonus("f1");
    // 180 + 60 + 200 + 2 * 50
    assert_eq!(score(&f1, &both, &roster), 540.0);

    let none = win("f1", FightMethod::Decision, 3).with_decision(DecisionType::Unanimous);
    assert_eq!(score(&f1, &none, &roster), 120.0);
}

#[test]
fn test_power_up_applies_after_synergy_and_captain() {
    let roster = with_card(striker_stack(), PowerUpCard::blitz(), "captain1");

    // 300 * 1.15 * 1.5 * 3
    assert_eq!(
        score(&roster.fighters[0], &win("captain1", FightMethod::KoTko, 1), &roster),
        1552.5
    );
}

// ================================================================
// Penalties
// ================================================================

#[test]
fn test_penalties_are_subtracted_last() {
    let f1 = fighter("f1", FighterClass::Striker);
    let roster = solo(&f1);
    let missed_weight = FighterPenalty {
        weight_miss: true,
        point_deductions: 0,
    };

    let fight = win("f1", FightMethod::KoTko, 1).with_penalty("f1", missed_weight);
    assert_eq!(score(&f1, &fight, &roster), 250.0);

    let fight = win("f1", FightMethod::Decision, 3)
        .with_decision(DecisionType::Unanimous)
        .with_penalty(
            "f1",
            FighterPenalty {
                weight_miss: false,
                point_deductions: 2,
            },
        );
    assert_eq!(score(&f1, &fight, &roster), 70.0);

    let fight = loss("f1", FightMethod::Decision, 3)
        .with_stats("f1", FightStats::new(1, 0, 0, 30))
        .with_penalty(
            "f1",
            FighterPenalty {
                weight_miss: true,
                point_deductions: 1,
            },
        );
    assert_eq!(score(&f1, &fight, &roster), -40.0);
}

#[test]
fn test_complete_formula() {
    let roster = striker_stack();
    let fight = win("captain1", FightMethod::KoTko, 2)
        .with_stats("captain1", FightStats::new(1, 0, 0, 10))
        .with_performance_bonus("captain1")
        .with_penalty(
            "captain1",
            FighterPenalty {
                weight_miss: true,
                point_deductions: 0,
            },
        );

    // 385 * 1.15 * 1.5 - 50
    assert_eq!(score(&roster.fighters[0], &fight, &roster), 614.12);
}

#[test]
fn test_scoring_is_bit_for_bit_deterministic() {
    let roster = with_card(striker_stack(), PowerUpCard::hype_train(), "captain1");
    let fight = win("captain1", FightMethod::KoTko, 2)
        .with_stats("captain1", FightStats::new(1, 2, 1, 37))
        .with_fight_of_the_night()
        .with_penalty(
            "captain1",
            FighterPenalty {
                weight_miss: false,
                point_deductions: 1,
            },
        );
    let engine = ScoringEngine::default();

    let first = engine.calculate_fighter_score(&roster.fighters[0], &fight, &roster);
    for _ in 0..16 {
        let again = engine.calculate_fighter_score(&roster.fighters[0], &fight, &roster);
        assert_eq!(again.value().to_bits(), first.value().to_bits());
    }
}

// ================================================================
// Event flow: validate, score, rank, award XP
// ================================================================

#[test]
fn test_event_flow() {
    init_tracing();
    let fights = vec![
        win("captain1", FightMethod::KoTko, 1),
        Fight::new("b2", "striker2", "x2", Some(FighterId::from("x2")), FightMethod::Decision, 3)
            .with_decision(DecisionType::Split),
        Fight::new("b3", "f4", "x3", Some(FighterId::from("f4")), FightMethod::Submission, 2),
    ];
    let strikers = striker_stack().with_owner("user-a", "ufc-300");
    let other = Roster::new(
        "r-other",
        vec![
            fighter("x2", FighterClass::AllRounder),
            fighter("x3", FighterClass::Grappler),
            fighter("o3", FighterClass::Striker),
            fighter("o4", FighterClass::Striker),
            fighter("o5", FighterClass::Grappler),
            fighter("o6", FighterClass::Veteran),
        ],
    )
    .with_owner("user-b", "ufc-300")
    .with_captain("x2");

    let validator = RosterValidator::default();
    let context = EventContext::from_fights(&fights);
    assert!(validator.validate_with_context(&strikers, &context).is_valid);
    assert!(validator.validate_with_context(&other, &context).is_valid);

    let rosters = vec![other, strikers];
    let scores = score_rosters(&ScoringEngine::default(), &rosters, &FightCard::new(&fights));
    let board = rank_leaderboard(&scores);

    // captain1: 300 * 1.15 * 1.5 = 517.5, striker2: 0, f4: 180 + 60 = 240
    assert_eq!(board[0].roster_id, "r-strikers");
    assert_eq!(board[0].total_score.value(), 757.5);
    assert_eq!(board[0].wins, 2);
    assert_eq!(board[0].losses, 1);
    assert!(board[0].captain_won);
    assert_eq!(board[0].synergies_activated, 1);
    assert_eq!(board[0].top_scorer_name.as_deref(), Some("Fighter captain1"));

    // x2: 100 * 1.0 * 1.5 = 150, x3: 0
    assert_eq!(board[1].roster_id, "r-other");
    assert_eq!(board[1].total_score.value(), 150.0);
    assert_eq!(board[1].rank, 2);

    let xp = XpCalculator::default();
    let input = EventXpInput::for_captain(&rosters[1], &fights);
    assert_eq!(input.map(|i| xp.calculate_event_xp(&i)), Some(200));
}

// ================================================================
// Validation
// ================================================================

#[test]
fn test_validator_reports_every_violation() {
    let roster = Roster::new(
        "r-broken",
        vec![
            fighter("f1", FighterClass::Striker),
            fighter("f1", FighterClass::Striker),
            fighter("f2", FighterClass::Grappler),
        ],
    )
    .with_captain("ghost")
    .with_power_up(RosterPowerUp::from_card(&PowerUpCard::blitz(), "f2"))
    .with_power_up(RosterPowerUp::from_card(&PowerUpCard::red_mist(), "f2"))
    .with_power_up(RosterPowerUp::from_card(&PowerUpCard::hype_train(), "nobody"));

    let result = RosterValidator::default().validate(&roster);

    assert!(!result.is_valid);
    for code in [
        "INVALID_FIGHTER_COUNT",
        "CAPTAIN_NOT_IN_ROSTER",
        "TOO_MANY_POWERUPS",
        "POWERUP_INVALID_TARGET",
        "DUPLICATE_FIGHTERS",
        "STACKED_POWERUPS",
    ] {
        assert!(result.has(code), "missing {code}");
    }
    assert_eq!(result.errors.len(), 6);
}

#[test]
fn test_salary_cap_needs_event_context() {
    let roster = striker_stack();
    let context = roster
        .fighters
        .iter()
        .fold(EventContext::new(), |ctx, f| ctx.with_salary(f.id.clone(), 2000));

    let validator = RosterValidator::default();
    assert!(validator.validate(&roster).is_valid);

    let result = validator.validate_with_context(&roster, &context);
    assert!(result.has("SALARY_CAP_EXCEEDED"));
    assert_eq!(
        result.messages(),
        vec!["Total salary 12000 exceeds the salary cap of 10000".to_string()]
    );
}
