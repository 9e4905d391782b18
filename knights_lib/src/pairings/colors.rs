use crate::{
    identifiers::PlayerId,
    players::{Color, Player},
};

/// Decides who holds White for a candidate board, returning
/// `(white, black)`. The rules are tried in order and the first match
/// wins:
///
/// 1. A player coming off two straight Whites yields White to a
///    partner who is not.
/// 2. A player coming off two straight Blacks takes White from a
///    partner who is not.
/// 3. The color-balance rule: the player whose record is not
///    White-heavy takes White from a partner whose record is. When the
///    rule reads the same both ways it is a tie and decides nothing.
/// 4. Once either player has a game on record, the higher-rated player
///    takes Black.
/// 5. Otherwise the first player (the higher seed) takes White.
///
/// Every branch depends only on roster state, so a replayed pairing
/// reproduces the same colors.
pub fn select_colors(a: &Player, b: &Player) -> (PlayerId, PlayerId) {
    // Back-to-back runs, checked for both players before anything else
    if a.last_two_were(Color::White) && !b.last_two_were(Color::White) {
        return (b.id, a.id);
    }
    if a.last_two_were(Color::Black) && !b.last_two_were(Color::Black) {
        return (a.id, b.id);
    }
    if b.last_two_were(Color::White) && !a.last_two_were(Color::White) {
        return (a.id, b.id);
    }
    if b.last_two_were(Color::Black) && !a.last_two_were(Color::Black) {
        return (b.id, a.id);
    }

    let (whites_a, blacks_a) = a.color_tally();
    let (whites_b, blacks_b) = b.color_tally();
    let a_takes_white = whites_a >= blacks_a && whites_b > blacks_b;
    let b_takes_white = whites_b >= blacks_b && whites_a > blacks_a;
    if a_takes_white != b_takes_white {
        return if a_takes_white { (a.id, b.id) } else { (b.id, a.id) };
    }

    if (a.games_played() > 0 || b.games_played() > 0) && a.rating != b.rating {
        return if a.rating > b.rating {
            (b.id, a.id)
        } else {
            (a.id, b.id)
        };
    }

    (a.id, b.id)
}
