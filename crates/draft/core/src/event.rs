//! Event-level scoring: whole rosters against a fight card, and the
//! leaderboard built from the results.

use std::collections::BTreeSet;

use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::{Fight, Roster, Score};
use crate::scoring::{ScoreBreakdown, ScoringEngine, SynergyType};

// ============================================================================
// Fight Card
// ============================================================================

/// The completed bouts of one event.
#[derive(Clone, Copy, Debug)]
pub struct FightCard<'a> {
    fights: &'a [Fight],
}

impl<'a> FightCard<'a> {
    pub fn new(fights: &'a [Fight]) -> Self {
        Self { fights }
    }

    pub fn fights(&self) -> &'a [Fight] {
        self.fights
    }

    /// First bout the fighter appears in.
    pub fn fight_for(&self, fighter_id: &str) -> Option<&'a Fight> {
        self.fights.iter().find(|fight| fight.involves(fighter_id))
    }

    pub fn is_empty(&self) -> bool {
        self.fights.is_empty()
    }
}

// ============================================================================
// Roster Score
// ============================================================================

/// One roster's result for an event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RosterScore {
    pub roster_id: String,
    pub user_id: String,
    pub event_id: String,
    /// Fighters with a bout on the card, in roster order.
    pub fighters: Vec<ScoreBreakdown>,
    pub total_score: Score,
    pub wins: u32,
    /// Every bout that was not a win, draws included.
    pub losses: u32,
    pub captain_name: Option<String>,
    pub captain_won: bool,
    pub active_synergies: Vec<SynergyType>,
    /// Card ids of the roster's power-ups.
    pub power_ups_used: Vec<String>,
}

impl RosterScore {
    /// Highest-scoring fighter; the earlier one on a tie.
    pub fn top_scorer(&self) -> Option<&ScoreBreakdown> {
        self.fighters.iter().reduce(|best, next| {
            if next.final_score.value() > best.final_score.value() {
                next
            } else {
                best
            }
        })
    }
}

impl ScoringEngine {
    /// Scores every fighter on `roster` that has a bout on `card`.
    ///
    /// Fighters whose bout is missing are skipped, not scored as zero.
    pub fn score_roster(&self, roster: &Roster, card: &FightCard<'_>) -> RosterScore {
        let mut fighters = Vec::with_capacity(roster.fighters.len());
        let mut wins = 0;
        let mut losses = 0;
        let mut captain_won = false;
        let mut synergies = BTreeSet::new();

        for fighter in &roster.fighters {
            let Some(fight) = card.fight_for(fighter.id.as_str()) else {
                debug!(roster = %roster.id, fighter = %fighter.id, "no bout on card; skipped");
                continue;
            };
            let breakdown = self.score_breakdown(fighter, fight, roster);
            if breakdown.won {
                wins += 1;
                captain_won |= roster.is_captain(fighter.id.as_str());
            } else {
                losses += 1;
            }
            if let Some(kind) = breakdown.synergy.synergy_type {
                synergies.insert(kind);
            }
            fighters.push(breakdown);
        }

        let total_score = fighters.iter().map(|b| b.final_score).sum();
        let active_synergies = synergies.into_iter().collect();

        RosterScore {
            roster_id: roster.id.clone(),
            user_id: roster.user_id.clone(),
            event_id: roster.event_id.clone(),
            fighters,
            total_score,
            wins,
            losses,
            captain_name: roster.captain().map(|c| c.name.clone()),
            captain_won,
            active_synergies,
            power_ups_used: roster
                .power_ups
                .iter()
                .map(|p| p.power_up_card_id.clone())
                .collect(),
        }
    }
}

/// Scores many rosters against one card, keeping input order.
///
/// With the `parallel` feature the rosters are scored on rayon's global pool.
pub fn score_rosters(engine: &ScoringEngine, rosters: &[Roster], card: &FightCard<'_>) -> Vec<RosterScore> {
    #[cfg(feature = "parallel")]
    {
        rosters
            .par_iter()
            .map(|roster| engine.score_roster(roster, card))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        rosters
            .iter()
            .map(|roster| engine.score_roster(roster, card))
            .collect()
    }
}

// ============================================================================
// Leaderboard
// ============================================================================

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LeaderboardEntry {
    /// 1-based; tied totals share a rank.
    pub rank: u32,
    pub roster_id: String,
    pub user_id: String,
    pub total_score: Score,
    pub wins: u32,
    pub losses: u32,
    pub captain_name: Option<String>,
    pub captain_won: bool,
    pub top_scorer_name: Option<String>,
    pub top_scorer_score: Score,
    pub power_ups_used: usize,
    pub synergies_activated: usize,
}

/// Orders results by total score, highest first, with dense ranks.
///
/// Equal totals share a rank and the next distinct total takes the next rank
/// (100, 100, 90 rank 1, 1, 2). Ties are listed by roster id.
pub fn rank_leaderboard(scores: &[RosterScore]) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&RosterScore> = scores.iter().collect();
    ordered.sort_by(|left, right| {
        right
            .total_score
            .value()
            .total_cmp(&left.total_score.value())
            .then_with(|| left.roster_id.cmp(&right.roster_id))
    });

    let mut entries = Vec::with_capacity(ordered.len());
    let mut rank = 0;
    // Totals are already rounded to cents; compare them exactly so one-cent
    // gaps still separate ranks.
    let mut previous: Option<f64> = None;
    for score in ordered {
        let total = score.total_score.value();
        if previous != Some(total) {
            rank += 1;
            previous = Some(total);
        }
        let top = score.top_scorer();
        entries.push(LeaderboardEntry {
            rank,
            roster_id: score.roster_id.clone(),
            user_id: score.user_id.clone(),
            total_score: score.total_score,
            wins: score.wins,
            losses: score.losses,
            captain_name: score.captain_name.clone(),
            captain_won: score.captain_won,
            top_scorer_name: top.map(|b| b.fighter_name.clone()),
            top_scorer_score: top.map_or(Score::ZERO, |b| b.final_score),
            power_ups_used: score.power_ups_used.len(),
            synergies_activated: score.active_synergies.len(),
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FightMethod, Fighter, FighterClass, FighterId};

    fn result(roster_id: &str, total: f64) -> RosterScore {
        RosterScore {
            roster_id: roster_id.into(),
            user_id: format!("user-{roster_id}"),
            event_id: "ufc-300".into(),
            fighters: Vec::new(),
            total_score: Score::new(total),
            wins: 0,
            losses: 0,
            captain_name: None,
            captain_won: false,
            active_synergies: Vec::new(),
            power_ups_used: Vec::new(),
        }
    }

    #[test]
    fn dense_ranks_with_ties_by_roster_id() {
        let scores = vec![
            result("r-c", 90.0),
            result("r-b", 120.5),
            result("r-a", 120.5),
            result("r-d", -10.0),
        ];

        let board = rank_leaderboard(&scores);
        let rows: Vec<_> = board.iter().map(|e| (e.rank, e.roster_id.as_str())).collect();

        assert_eq!(rows, vec![(1, "r-a"), (1, "r-b"), (2, "r-c"), (3, "r-d")]);
    }

    #[test]
    fn one_cent_apart_is_a_different_rank() {
        let scores = vec![result("r-a", 0.29), result("r-b", 0.28), result("r-c", 0.27)];

        let ranks: Vec<_> = rank_leaderboard(&scores).iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        let scores = vec![result("r-a", 1000.01), result("r-b", 1000.0), result("r-c", 1000.0)];
        let ranks: Vec<_> = rank_leaderboard(&scores).iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 2]);
    }

    #[test]
    fn fighters_without_a_bout_are_skipped() {
        let roster = Roster::new(
            "r1",
            vec![
                Fighter::new("f1", "Alpha", FighterClass::Striker, 30),
                Fighter::new("f2", "Bravo", FighterClass::Grappler, 30),
            ],
        )
        .with_captain("f1");
        let fights = vec![Fight::new(
            "b1",
            "f1",
            "x",
            Some(FighterId::from("f1")),
            FightMethod::KoTko,
            1,
        )];

        let score = ScoringEngine::default().score_roster(&roster, &FightCard::new(&fights));

        assert_eq!(score.fighters.len(), 1);
        assert_eq!(score.wins, 1);
        assert_eq!(score.losses, 0);
        assert!(score.captain_won);
        // (100 * 2 + 100) * 1.5
        assert_eq!(score.total_score.value(), 450.0);
        assert_eq!(score.captain_name.as_deref(), Some("Alpha"));
        assert_eq!(score.top_scorer().map(|b| b.fighter_id.as_str()), Some("f1"));
    }

    #[test]
    fn score_rosters_keeps_input_order() {
        let rosters: Vec<_> = (0..8)
            .map(|i| Roster::new(format!("r{i}"), vec![Fighter::new("f1", "Alpha", FighterClass::Striker, 30)]))
            .collect();
        let fights = vec![Fight::new("b1", "f1", "x", None, FightMethod::Draw, 3)];

        let scores = score_rosters(&ScoringEngine::default(), &rosters, &FightCard::new(&fights));

        let ids: Vec<_> = scores.iter().map(|s| s.roster_id.as_str()).collect();
        assert_eq!(ids, vec!["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"]);
        assert!(scores.iter().all(|s| s.total_score.value() == 50.0 && s.losses == 1));
    }
}
