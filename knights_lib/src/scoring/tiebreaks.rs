use std::{cmp::Ordering, collections::HashMap, fmt::Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    identifiers::PlayerId,
    players::{Player, Roster},
    points::Points,
    scoring::{Score, Standings},
};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
/// The score type used by the Swiss standings: the running score plus
/// the four tiebreak measures, in comparison order
pub struct SectionScore {
    /// The player's running score
    pub score: Points,
    /// Sum of the opponents' current scores (byes contribute nothing)
    pub buchholz: Points,
    /// Buchholz with the best and worst opponent stripped, once the
    /// player has more than two counted opponents
    pub median: Points,
    /// Opponents' scores weighted by the result achieved against them
    pub sonneborn_berger: Points,
    /// Sum of the player's running score taken after each round
    pub cumulative: Points,
}

impl Score for SectionScore {
    fn primary_score(&self) -> Points {
        self.score
    }
}

impl Display for SectionScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (buch {}, med {}, sb {}, cum {})",
            self.score, self.buchholz, self.median, self.sonneborn_berger, self.cumulative
        )
    }
}

/// Computes the four tiebreaks for every active player and returns the
/// field in final standings order.
pub fn get_standings(roster: &Roster) -> Standings<SectionScore> {
    let digest: HashMap<PlayerId, SectionScore> = roster
        .players
        .values()
        .filter(|p| p.can_play())
        .map(|p| (p.id, score_player(roster, p)))
        .collect();
    let mut results: Vec<(PlayerId, SectionScore)> = digest.into_iter().collect();
    results.sort_by(|(a_id, a), (b_id, b)| compare_standings(roster, (*a_id, a), (*b_id, b)));
    Standings::new(results)
}

fn score_player(roster: &Roster, plyr: &Player) -> SectionScore {
    // Opponent scores that feed Buchholz and the median: played games
    // only, withdrawn opponents left out
    let opp_scores: Vec<Points> = plyr
        .results
        .iter()
        .filter(|r| !r.is_bye)
        .filter_map(|r| r.opponent)
        .filter_map(|id| roster.players.get(&id))
        .filter(|opp| opp.can_play())
        .map(|opp| opp.score)
        .collect();
    let buchholz: Points = opp_scores.iter().cloned().sum();
    let median = if opp_scores.len() > 2 {
        let max = opp_scores.iter().max().cloned().unwrap_or(Points::ZERO);
        let min = opp_scores.iter().min().cloned().unwrap_or(Points::ZERO);
        buchholz - max - min
    } else {
        buchholz
    };

    let mut sonneborn_berger = Points::ZERO;
    for rec in plyr.results.iter().filter(|r| !r.is_bye) {
        let Some(opp) = rec.opponent.and_then(|id| roster.players.get(&id)) else {
            continue;
        };
        if rec.result == Points::ONE {
            sonneborn_berger += opp.score;
        } else if rec.result == Points::HALF {
            sonneborn_berger += opp.score.halved();
        }
    }

    let mut run = Points::ZERO;
    let mut cumulative = Points::ZERO;
    for rec in plyr.results.iter().sorted_by_key(|r| r.round) {
        run += rec.result;
        cumulative += run;
    }

    SectionScore {
        score: plyr.score,
        buchholz,
        median,
        sonneborn_berger,
        cumulative,
    }
}

/// The total order on standings rows, best first. Ties fall through
/// score, Buchholz, median, Sonneborn-Berger, the head-to-head result,
/// cumulative, rating, and finally the name, which is unique within a
/// roster, so two distinct players never compare equal.
pub fn compare_standings(
    roster: &Roster,
    (a_id, a): (PlayerId, &SectionScore),
    (b_id, b): (PlayerId, &SectionScore),
) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(b.buchholz.cmp(&a.buchholz))
        .then(b.median.cmp(&a.median))
        .then(b.sonneborn_berger.cmp(&a.sonneborn_berger))
        .then_with(|| direct_encounter(roster, a_id, b_id))
        .then(b.cumulative.cmp(&a.cumulative))
        .then_with(|| {
            let (pa, pb) = (&roster.players[&a_id], &roster.players[&b_id]);
            pb.rating
                .cmp(&pa.rating)
                .then_with(|| pa.name.cmp(&pb.name))
        })
}

/// The head-to-head tiebreak: if the two players met and one of them
/// won, the winner ranks higher; draws (and no meeting) are neutral.
/// A forced rematch sums the points each took off the other.
fn direct_encounter(roster: &Roster, a_id: PlayerId, b_id: PlayerId) -> Ordering {
    let Some(pa) = roster.players.get(&a_id) else {
        return Ordering::Equal;
    };
    let taken: Points = pa
        .results
        .iter()
        .filter(|r| !r.is_bye && r.opponent == Some(b_id))
        .map(|r| r.result)
        .sum();
    let games = pa
        .results
        .iter()
        .filter(|r| !r.is_bye && r.opponent == Some(b_id))
        .count() as i64;
    if games == 0 {
        return Ordering::Equal;
    }
    // `taken` above half the stake means a beat b on balance
    let stake = Points::ONE.millis() * games;
    (stake - taken.millis()).cmp(&taken.millis())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::players::GameRecord;

    fn spoof_roster(ratings: &[u32]) -> (Roster, Vec<PlayerId>) {
        let salt = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut roster = Roster::new();
        let ids = ratings
            .iter()
            .enumerate()
            .map(|(i, r)| {
                roster
                    .register(salt, format!("player-{:02}", i), *r, None)
                    .unwrap()
            })
            .collect();
        (roster, ids)
    }

    fn record(roster: &mut Roster, round: u64, winner: PlayerId, loser: PlayerId) {
        roster.record_board(winner, loser);
        let w = roster.get_mut_player(&winner).unwrap();
        w.score += Points::ONE;
        w.results.push(GameRecord {
            round,
            opponent: Some(loser),
            result: Points::ONE,
            is_bye: false,
        });
        let l = roster.get_mut_player(&loser).unwrap();
        l.results.push(GameRecord {
            round,
            opponent: Some(winner),
            result: Points::ZERO,
            is_bye: false,
        });
    }

    #[test]
    fn two_opponents_keep_median_equal_to_buchholz() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600, 1400]);
        record(&mut roster, 1, ids[0], ids[1]);
        record(&mut roster, 2, ids[0], ids[2]);
        let standings = get_standings(&roster);
        let (leader, score) = &standings.scores[0];
        assert_eq!(*leader, ids[0]);
        assert_eq!(score.buchholz, Points::ZERO);
        assert_eq!(score.median, score.buchholz);
    }

    #[test]
    fn direct_encounter_breaks_otherwise_even_pairs() {
        let (mut roster, ids) = spoof_roster(&[1500, 1500]);
        record(&mut roster, 1, ids[1], ids[0]);
        let even = SectionScore::default();
        assert_eq!(
            compare_standings(&roster, (ids[1], &even), (ids[0], &even)),
            Ordering::Less
        );
        assert_eq!(
            compare_standings(&roster, (ids[0], &even), (ids[1], &even)),
            Ordering::Greater
        );
    }

    #[test]
    fn cumulative_rewards_early_wins() {
        let (mut roster, ids) = spoof_roster(&[1500, 1500, 1500, 1500]);
        // Same final score, different shapes: early win beats late win
        record(&mut roster, 1, ids[0], ids[2]);
        record(&mut roster, 2, ids[3], ids[0]);
        record(&mut roster, 1, ids[3], ids[1]);
        record(&mut roster, 2, ids[1], ids[2]);
        let standings = get_standings(&roster);
        let row = |id: PlayerId| {
            standings
                .scores
                .iter()
                .find(|(p, _)| *p == id)
                .map(|(_, s)| *s)
                .unwrap()
        };
        assert_eq!(row(ids[0]).cumulative, Points::from_millis(2000));
        assert_eq!(row(ids[1]).cumulative, Points::from_millis(1000));
    }

    #[test]
    fn withdrawn_opponents_leave_buchholz() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600, 1400]);
        record(&mut roster, 1, ids[0], ids[1]);
        record(&mut roster, 2, ids[1], ids[2]);
        let before = get_standings(&roster);
        let buch_before = before
            .scores
            .iter()
            .find(|(p, _)| *p == ids[0])
            .map(|(_, s)| s.buchholz)
            .unwrap();
        assert_eq!(buch_before, Points::ONE);
        roster.withdraw(&ids[1]).unwrap();
        let after = get_standings(&roster);
        let buch_after = after
            .scores
            .iter()
            .find(|(p, _)| *p == ids[0])
            .map(|(_, s)| s.buchholz)
            .unwrap();
        assert_eq!(buch_after, Points::ZERO);
    }
}
