//! Per-player view of the board.
//!
//! Two boolean planes over the 9×9 grid: plane 0 marks the viewer's pieces,
//! plane 1 the opponent's. The viewer's pieces are always plane 0, whatever
//! their absolute colour.

use crate::core::{cell_index, Board, PlayerId, CELLS, COLUMNS, ROWS};

/// Number of planes in an observation.
pub const PLANES: usize = 2;

/// Two-plane observation of one board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Observation {
    /// The player whose perspective this is.
    pub viewer: PlayerId,
    /// `planes[0]`: viewer's cells, `planes[1]`: opponent's cells.
    pub planes: [[bool; CELLS]; PLANES],
}

impl Observation {
    /// Channels-last shape, matching [`Observation::to_channels_last`].
    pub const SHAPE: [usize; 3] = [ROWS, COLUMNS, PLANES];

    /// Build the observation of `board` as seen by `viewer`.
    #[must_use]
    pub fn new(board: &Board, viewer: PlayerId) -> Self {
        let own = viewer.color();
        let other = viewer.opponent().color();
        let mut planes = [[false; CELLS]; PLANES];
        for (i, &cell) in board.cells().iter().enumerate() {
            planes[0][i] = cell == own;
            planes[1][i] = cell == other;
        }
        Self { viewer, planes }
    }

    /// Viewer's pieces.
    #[must_use]
    pub fn own(&self) -> &[bool; CELLS] {
        &self.planes[0]
    }

    /// Opponent's pieces.
    #[must_use]
    pub fn opponent(&self) -> &[bool; CELLS] {
        &self.planes[1]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, plane: usize, row: usize, col: usize) -> bool {
        self.planes[plane][cell_index(row, col)]
    }

    /// Flatten as `[row][col][plane]`.
    #[must_use]
    pub fn to_channels_last(&self) -> Vec<bool> {
        (0..CELLS)
            .flat_map(|i| [self.planes[0][i], self.planes[1][i]])
            .collect()
    }

    /// Flatten as `[plane][row][col]`.
    #[must_use]
    pub fn to_channels_first(&self) -> Vec<bool> {
        self.planes.iter().flatten().copied().collect()
    }
}
