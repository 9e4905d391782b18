use std::collections::HashSet;

use itertools::Itertools;

use crate::{
    identifiers::PlayerId,
    pairings::{colors::select_colors, ProposedPairings},
    players::Roster,
};

/// Pairs the next round over the active roster.
///
/// The policy is the pragmatic top-half-vs-bottom-half form: order the
/// field by score, split each score group, and walk the halves against
/// each other, floating whoever a group cannot absorb into the group
/// below. Rematches are avoided while an alternative partner exists
/// and accepted once none does. Histories (`opponents`/`colors`) are
/// written the moment a board is fixed, so every later board observes
/// the update.
///
/// When the active roster is odd, the bye recipient is chosen up front
/// (lowest score, then rating, then name, preferring players without a
/// prior bye) and removed from the pool; the caller emits the bye board
/// last and applies its credit.
pub fn pair_round(roster: &mut Roster) -> ProposedPairings {
    let mut pool = ordered_pool(roster);
    let mut bye = None;
    if pool.len() % 2 == 1 {
        let chosen = select_bye(roster, &pool);
        pool.retain(|p| *p != chosen);
        bye = Some(chosen);
    }

    let mut games: Vec<(PlayerId, PlayerId)> = Vec::with_capacity(pool.len() / 2);
    let mut floated: Vec<PlayerId> = Vec::new();
    for group in score_groups(roster, &pool) {
        // Floats from the group above lead the group, keeping their
        // relative order; the group itself is already in seed order
        let mut members = floated;
        floated = Vec::new();
        members.extend(group);

        let top_count = (members.len() + 1) / 2;
        let mut bottom = members.split_off(top_count);
        let top = members;
        for (i, a) in top.iter().enumerate() {
            if i >= bottom.len() {
                floated.push(*a);
                continue;
            }
            // First fresh opponent from the aligned slot onward, else
            // the first partner still free (a forced rematch)
            let pos = bottom[i..]
                .iter()
                .position(|b| !roster.have_met(a, b))
                .map(|p| p + i)
                .unwrap_or(0);
            let b = bottom.remove(pos);
            push_game(roster, &mut games, *a, b);
        }
        floated.extend(bottom);
    }

    // The last group's floats are the section leftover; anyone else
    // still unpaired queues behind them
    let paired: HashSet<PlayerId> = games.iter().flat_map(|(w, b)| [*w, *b]).collect();
    let mut queue = floated;
    for p in &pool {
        if !paired.contains(p) && !queue.contains(p) {
            queue.push(*p);
        }
    }
    while queue.len() >= 2 {
        let a = queue.remove(0);
        let pos = queue
            .iter()
            .position(|b| !roster.have_met(&a, b))
            .unwrap_or(0);
        let b = queue.remove(pos);
        push_game(roster, &mut games, a, b);
    }

    ProposedPairings { games, bye }
}

/// The active field ordered by `(score desc, rating desc, name asc)`.
/// Names are unique within a roster, so the order is total and the
/// same input always pairs the same way.
fn ordered_pool(roster: &Roster) -> Vec<PlayerId> {
    roster
        .players
        .values()
        .filter(|p| p.can_play())
        .sorted_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(b.rating.cmp(&a.rating))
                .then(a.name.cmp(&b.name))
        })
        .map(|p| p.id)
        .collect()
}

/// Splits the score-ordered pool into its contiguous score groups
fn score_groups(roster: &Roster, pool: &[PlayerId]) -> Vec<Vec<PlayerId>> {
    let groups = pool.iter().group_by(|id| roster.players[*id].score);
    let mut digest = Vec::new();
    for (_, group) in &groups {
        digest.push(group.cloned().collect());
    }
    digest
}

/// The bye recipient: minimum by `(score, rating, name)` among players
/// without a prior bye, falling back to the same minimum over the
/// whole pool once everyone has had one
fn select_bye(roster: &Roster, pool: &[PlayerId]) -> PlayerId {
    let ordered: Vec<PlayerId> = pool
        .iter()
        .sorted_by(|a, b| {
            let (pa, pb) = (&roster.players[*a], &roster.players[*b]);
            pa.score
                .cmp(&pb.score)
                .then(pa.rating.cmp(&pb.rating))
                .then(pa.name.cmp(&pb.name))
        })
        .cloned()
        .collect();
    ordered
        .iter()
        .find(|id| !roster.players[*id].had_bye)
        .unwrap_or(&ordered[0])
        .clone()
}

fn push_game(roster: &mut Roster, games: &mut Vec<(PlayerId, PlayerId)>, a: PlayerId, b: PlayerId) {
    let (white, black) = select_colors(&roster.players[&a], &roster.players[&b]);
    roster.record_board(white, black);
    games.push((white, black));
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::players::Roster;

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

    #[test]
    fn round_one_is_top_half_versus_bottom_half() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600, 1400, 1200]);
        let pairings = pair_round(&mut roster);
        assert_eq!(pairings.bye, None);
        assert_eq!(pairings.games, vec![(ids[0], ids[2]), (ids[1], ids[3])]);
    }

    #[test]
    fn odd_pool_byes_the_lowest_seed() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600, 1400, 1200, 1000]);
        let pairings = pair_round(&mut roster);
        assert_eq!(pairings.bye, Some(ids[4]));
        assert_eq!(pairings.games, vec![(ids[0], ids[2]), (ids[1], ids[3])]);
    }

    #[test]
    fn bye_prefers_players_without_one() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600, 1400]);
        roster.get_mut_player(&ids[2]).unwrap().had_bye = true;
        let pairings = pair_round(&mut roster);
        assert_eq!(pairings.bye, Some(ids[1]));
    }

    #[test]
    fn exhausted_bye_pool_falls_back_to_the_minimum() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600, 1400]);
        for id in &ids {
            roster.get_mut_player(id).unwrap().had_bye = true;
        }
        let pairings = pair_round(&mut roster);
        assert_eq!(pairings.bye, Some(ids[2]));
    }

    #[test]
    fn rematch_is_avoided_while_an_alternative_exists() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600, 1400, 1200]);
        // Pretend the top seed already played the natural partner
        roster.record_board(ids[0], ids[2]);
        roster.get_mut_player(&ids[0]).unwrap().clear_history();
        roster.get_mut_player(&ids[2]).unwrap().clear_history();
        let pairings = pair_round(&mut roster);
        assert_eq!(pairings.games, vec![(ids[0], ids[3]), (ids[1], ids[2])]);
    }

    #[test]
    fn lone_pair_accepts_a_forced_rematch() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600]);
        roster.record_board(ids[0], ids[1]);
        let pairings = pair_round(&mut roster);
        assert_eq!(pairings.games.len(), 1);
        let (w, b) = pairings.games[0];
        assert_eq!(
            {
                let mut pair = [w, b];
                pair.sort_by_key(|id| id.to_string());
                pair
            },
            {
                let mut pair = [ids[0], ids[1]];
                pair.sort_by_key(|id| id.to_string());
                pair
            }
        );
    }

    #[test]
    fn empty_pool_pairs_nothing() {
        let (mut roster, _) = spoof_roster(&[]);
        let pairings = pair_round(&mut roster);
        assert!(pairings.is_empty());
    }

    #[test]
    fn withdrawn_players_are_skipped() {
        let (mut roster, ids) = spoof_roster(&[1800, 1600, 1400]);
        roster.withdraw(&ids[1]).unwrap();
        let pairings = pair_round(&mut roster);
        assert_eq!(pairings.games, vec![(ids[0], ids[2])]);
        assert_eq!(pairings.bye, None);
    }
}
