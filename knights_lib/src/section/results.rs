use crate::{
    error::SectionError,
    identifiers::PlayerId,
    players::GameRecord,
    rounds::GameResult,
    section::Section,
};

impl Section {
    /// Records the result of a board, or corrects a previously recorded
    /// one. A correction first retracts the old credit and history rows
    /// and then applies the new token, so applying the same token twice
    /// is a no-op and a correction matches a fresh application of the
    /// new token.
    ///
    /// Everything that could fail is located and validated before the
    /// first mutation; an error leaves the section exactly as it was.
    pub fn apply_result(
        &mut self,
        round: u64,
        board: u32,
        token: &str,
    ) -> Result<(), SectionError> {
        let result: GameResult = token.parse()?;

        let pairing = self
            .get_round(round)?
            .get_pairing(board)
            .ok_or(SectionError::BoardNotFound)?
            .clone();
        let white = pairing.white;
        let black = pairing.black;
        if !self.roster.is_registered(&white) {
            return Err(SectionError::PlayerMissing);
        }
        if let Some(black) = black {
            if !self.roster.is_registered(&black) {
                return Err(SectionError::PlayerMissing);
            }
        }

        // Locate the rows a retraction will remove before touching
        // anything, so a corrupt history cannot half-apply
        let retraction = match pairing.result {
            Some(_) => Some(self.locate_rows(round, white, black, pairing.is_bye)?),
            None => None,
        };

        if let Some((white_row, black_row)) = retraction {
            let plyr = self.roster.get_mut_player(&white)?;
            let row = plyr.results.remove(white_row);
            plyr.score -= row.result;
            if let (Some(black), Some(black_row)) = (black, black_row) {
                let plyr = self.roster.get_mut_player(&black)?;
                let row = plyr.results.remove(black_row);
                plyr.score -= row.result;
            }
        }

        self.get_mut_round(round)?
            .get_mut_pairing(board)
            .ok_or(SectionError::BoardNotFound)?
            .result = Some(result);

        let (white_pts, black_pts) = result.points();
        let plyr = self.roster.get_mut_player(&white)?;
        plyr.score += white_pts;
        plyr.results.push(GameRecord {
            round,
            opponent: black,
            result: white_pts,
            is_bye: pairing.is_bye,
        });
        if pairing.is_bye {
            plyr.had_bye = true;
            return Ok(());
        }

        let black = black.ok_or(SectionError::PairingStateCorrupt)?;
        let plyr = self.roster.get_mut_player(&black)?;
        plyr.score += black_pts;
        plyr.results.push(GameRecord {
            round,
            opponent: Some(white),
            result: black_pts,
            is_bye: false,
        });
        // A TD may have seated a player the pairer never recorded;
        // make sure the opponent lists agree with the board
        self.roster.ensure_linked(white, black);
        Ok(())
    }

    /// Finds the indices of both players' history rows for the board,
    /// failing with `PairingStateCorrupt` if either cannot be found
    fn locate_rows(
        &self,
        round: u64,
        white: PlayerId,
        black: Option<PlayerId>,
        is_bye: bool,
    ) -> Result<(usize, Option<usize>), SectionError> {
        let white_row = self
            .roster
            .get_player(&white)?
            .results
            .iter()
            .position(|r| r.matches(round, black, is_bye))
            .ok_or(SectionError::PairingStateCorrupt)?;
        let black_row = match black {
            Some(black) => Some(
                self.roster
                    .get_player(&black)?
                    .results
                    .iter()
                    .position(|r| r.matches(round, Some(white), false))
                    .ok_or(SectionError::PairingStateCorrupt)?,
            ),
            None => None,
        };
        Ok((white_row, black_row))
    }
}
