use crate::{
    error::SectionError,
    identifiers::PlayerId,
    players::Color,
    section::Section,
};

/// TD overrides are thin edits on a single board. None of them touch
/// scores or history rows: `opponents`/`colors` record what was
/// actually played, and a result applied after an edit credits whoever
/// occupies the seats at that moment.
impl Section {
    /// Exchanges the two seats of a board and notes the edit
    pub fn td_swap(&mut self, round: u64, board: u32) -> Result<(), SectionError> {
        let pairing = self
            .get_mut_round(round)?
            .get_mut_pairing(board)
            .ok_or(SectionError::BoardNotFound)?;
        let black = pairing.black.ok_or(SectionError::PairingStateCorrupt)?;
        pairing.black = Some(pairing.white);
        pairing.white = black;
        pairing.push_note("td-swap");
        Ok(())
    }

    /// Puts a different player in one seat of a board and notes the edit
    pub fn td_replace(
        &mut self,
        round: u64,
        board: u32,
        side: Color,
        player: PlayerId,
    ) -> Result<(), SectionError> {
        if !self.roster.is_registered(&player) {
            return Err(SectionError::UnknownPlayerId);
        }
        let pairing = self
            .get_mut_round(round)?
            .get_mut_pairing(board)
            .ok_or(SectionError::BoardNotFound)?;
        match side {
            Color::White => pairing.white = player,
            Color::Black => {
                if pairing.is_bye {
                    return Err(SectionError::PairingStateCorrupt);
                }
                pairing.black = Some(player);
            }
        }
        pairing.push_note("td-replace");
        Ok(())
    }

    /// Ensures the given player holds White on a board, swapping the
    /// seats if they currently hold Black, and notes the edit
    pub fn td_force_color(
        &mut self,
        round: u64,
        board: u32,
        white: PlayerId,
    ) -> Result<(), SectionError> {
        let pairing = self
            .get_mut_round(round)?
            .get_mut_pairing(board)
            .ok_or(SectionError::BoardNotFound)?;
        if pairing.white == white {
            pairing.push_note("td-force-color");
            return Ok(());
        }
        if pairing.black != Some(white) {
            return Err(SectionError::UnknownPlayerId);
        }
        pairing.black = Some(pairing.white);
        pairing.white = white;
        pairing.push_note("td-force-color");
        Ok(())
    }
}
