use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{
    AsIndex, CellCount, CellState, Coord2, GameConfig, GameError, Minefield, MinefieldGenerator,
    Result,
};

/// Lifecycle of a single game.
///
/// Valid transitions: `Ongoing -> Won`, `Ongoing -> Lost`. Both end
/// states are terminal until the session starts a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Ongoing
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether this outcome warrants a re-render.
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome warrants a re-render.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One game: the minefield ground truth plus the player's view of it.
///
/// All mutation goes through [`Game::reveal`] and [`Game::toggle_flag`];
/// everything else is a read-only accessor for the front end to render
/// from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    minefield: Minefield,
    board: Array2<CellState>,
    revealed_count: CellCount,
    mines_remaining: CellCount,
    status: GameStatus,
    exploded_at: Option<Coord2>,
}

impl Game {
    pub fn new(minefield: Minefield) -> Self {
        let size = minefield.size();
        let mines_remaining = minefield.mine_count();
        Self {
            minefield,
            board: Array2::default(size.as_index()),
            revealed_count: 0,
            mines_remaining,
            status: GameStatus::Ongoing,
            exploded_at: None,
        }
    }

    pub fn generate<G: MinefieldGenerator>(config: GameConfig, generator: G) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    /// Flag-budget readout: total mines minus placed flags, never
    /// outside `[0, total_mines]`.
    pub fn mines_remaining(&self) -> CellCount {
        self.mines_remaining
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.board[coords.as_index()]
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.minefield.contains_mine(coords)
    }

    /// Where the player stepped on a mine, if the game was lost.
    pub fn exploded_at(&self) -> Option<Coord2> {
        self.exploded_at
    }

    /// Uncovers a hidden cell: a mined cell explodes and loses the game,
    /// a safe cell shows its adjacent-mine count. Flagged and already
    /// uncovered cells are left alone.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.minefield.validate_coords(coords)?;
        self.check_ongoing()?;

        match self.board[coords.as_index()] {
            CellState::Hidden => Ok(self.reveal_hidden(coords)),
            _ => Ok(RevealOutcome::NoChange),
        }
    }

    fn reveal_hidden(&mut self, coords: Coord2) -> RevealOutcome {
        if self.minefield.contains_mine(coords) {
            self.board[coords.as_index()] = CellState::Exploded;
            self.exploded_at = Some(coords);
            self.status = GameStatus::Lost;
            log::debug!("mine hit at {:?}", coords);
            return RevealOutcome::HitMine;
        }

        let count = self.minefield.adjacent_mine_count(coords);
        self.board[coords.as_index()] = CellState::Revealed(count);
        self.revealed_count += 1;
        log::debug!("revealed {:?}, adjacent mines: {}", coords, count);

        // A zero-count cell uncovers only itself; neighbors stay hidden.
        if self.revealed_count == self.minefield.safe_cell_count() {
            self.status = GameStatus::Won;
            log::debug!("all safe cells revealed, game won");
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Places or removes a flag on a covered cell, keeping the
    /// mines-remaining counter in step. Flags are a finite budget of one
    /// per mine.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;
        use MarkOutcome::*;

        let coords = self.minefield.validate_coords(coords)?;
        self.check_ongoing()?;

        Ok(match self.board[coords.as_index()] {
            Hidden if self.mines_remaining == 0 => NoChange,
            Hidden => {
                self.board[coords.as_index()] = Flagged;
                self.mines_remaining -= 1;
                Changed
            }
            Flagged => {
                self.board[coords.as_index()] = Hidden;
                self.mines_remaining = (self.mines_remaining + 1).min(self.minefield.mine_count());
                Changed
            }
            Revealed(_) | Exploded => NoChange,
        })
    }

    fn check_ongoing(&self) -> Result<()> {
        if self.status.is_over() {
            Err(GameError::AlreadyOver)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::new(Minefield::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn reveal_on_a_mine_explodes_and_loses() {
        let mut game = game((8, 8), &[(3, 3)]);
        let before: Vec<_> = (0..8)
            .flat_map(|r| (0..8).map(move |c| (r, c)))
            .filter(|&pos| pos != (3, 3))
            .map(|pos| game.cell_at(pos))
            .collect();

        assert_eq!(game.reveal((3, 3)), Ok(RevealOutcome::HitMine));
        assert_eq!(game.cell_at((3, 3)), CellState::Exploded);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.exploded_at(), Some((3, 3)));

        // no other cell changed
        let after: Vec<_> = (0..8)
            .flat_map(|r| (0..8).map(move |c| (r, c)))
            .filter(|&pos| pos != (3, 3))
            .map(|pos| game.cell_at(pos))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn reveal_on_a_safe_cell_shows_the_adjacency_count() {
        let mut game = game((8, 8), &[(3, 3)]);

        assert_eq!(game.reveal((0, 0)), Ok(RevealOutcome::Revealed));
        assert_eq!(game.cell_at((0, 0)), CellState::Revealed(0));

        assert_eq!(game.reveal((3, 2)), Ok(RevealOutcome::Revealed));
        assert_eq!(game.cell_at((3, 2)), CellState::Revealed(1));

        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn zero_count_reveal_does_not_cascade() {
        let mut game = game((8, 8), &[(7, 7)]);

        assert_eq!(game.reveal((0, 0)), Ok(RevealOutcome::Revealed));
        assert_eq!(game.cell_at((0, 0)), CellState::Revealed(0));
        for pos in [(0, 1), (1, 0), (1, 1)] {
            assert_eq!(game.cell_at(pos), CellState::Hidden);
        }
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.reveal((0, 1)), Ok(RevealOutcome::Revealed));
        assert_eq!(game.reveal((1, 0)), Ok(RevealOutcome::Revealed));
        assert_eq!(game.reveal((1, 1)), Ok(RevealOutcome::Won));
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_over());
    }

    #[test]
    fn reveal_is_a_no_op_on_flagged_and_uncovered_cells() {
        let mut game = game((3, 3), &[(2, 2)]);

        game.toggle_flag((0, 0)).unwrap();
        assert_eq!(game.reveal((0, 0)), Ok(RevealOutcome::NoChange));
        assert_eq!(game.cell_at((0, 0)), CellState::Flagged);

        game.reveal((1, 0)).unwrap();
        assert_eq!(game.reveal((1, 0)), Ok(RevealOutcome::NoChange));
    }

    #[test]
    fn flag_toggle_is_its_own_inverse() {
        let mut game = game((3, 3), &[(2, 2)]);
        assert_eq!(game.mines_remaining(), 1);

        assert_eq!(game.toggle_flag((0, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(game.cell_at((0, 0)), CellState::Flagged);
        assert_eq!(game.mines_remaining(), 0);

        assert_eq!(game.toggle_flag((0, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(game.cell_at((0, 0)), CellState::Hidden);
        assert_eq!(game.mines_remaining(), 1);
    }

    #[test]
    fn flag_placement_stops_at_zero_budget() {
        let mut game = game((3, 3), &[(2, 2)]);

        assert_eq!(game.toggle_flag((0, 0)), Ok(MarkOutcome::Changed));
        assert_eq!(game.mines_remaining(), 0);

        assert_eq!(game.toggle_flag((0, 1)), Ok(MarkOutcome::NoChange));
        assert_eq!(game.cell_at((0, 1)), CellState::Hidden);
        assert_eq!(game.mines_remaining(), 0);
    }

    #[test]
    fn mines_remaining_never_exceeds_the_total() {
        let mut game = game((3, 3), &[(2, 2)]);

        game.toggle_flag((0, 0)).unwrap();
        game.toggle_flag((0, 0)).unwrap();
        game.toggle_flag((0, 0)).unwrap();
        game.toggle_flag((0, 0)).unwrap();
        assert_eq!(game.mines_remaining(), game.total_mines());
    }

    #[test]
    fn flag_toggle_ignores_uncovered_cells() {
        let mut game = game((3, 3), &[(2, 2)]);

        game.reveal((0, 0)).unwrap();
        assert_eq!(game.toggle_flag((0, 0)), Ok(MarkOutcome::NoChange));
        assert_eq!(game.mines_remaining(), 1);
    }

    #[test]
    fn no_moves_are_accepted_after_the_game_ends() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.reveal((0, 0)).unwrap();

        let frozen = game.clone();
        assert_eq!(game.reveal((1, 1)), Err(GameError::AlreadyOver));
        assert_eq!(game.toggle_flag((1, 1)), Err(GameError::AlreadyOver));
        assert_eq!(game, frozen);
    }

    #[test]
    fn out_of_bounds_moves_are_rejected() {
        let mut game = game((2, 2), &[(0, 0)]);
        assert_eq!(game.reveal((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(game.toggle_flag((0, 2)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn snapshot_round_trip_preserves_observable_state() {
        let mut game = game((3, 3), &[(2, 2)]);
        game.reveal((0, 0)).unwrap();
        game.toggle_flag((2, 2)).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.cell_at((0, 0)), CellState::Revealed(0));
        assert_eq!(restored.mines_remaining(), 0);
    }
}
