//! Player goals.
//!
//! A goal pairs a scoring rule with a target colour. Every player in a game
//! shares one rule but chases a different colour.

use rand::seq::SliceRandom;
use rand::Rng;

use super::blob::largest_blob;
use super::perimeter::perimeter_count;
use crate::board::{Board, Colour, Grid, COLOUR_LIST};

/// What a player is trying to maximize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Largest connected blob of the colour, anywhere on the board.
    Blob { colour: Colour },
    /// Cells of the colour along the outer edge.
    Perimeter { colour: Colour },
}

impl Goal {
    pub fn blob(colour: Colour) -> Self {
        Goal::Blob { colour }
    }

    pub fn perimeter(colour: Colour) -> Self {
        Goal::Perimeter { colour }
    }

    /// The target colour.
    pub fn colour(&self) -> Colour {
        match *self {
            Goal::Blob { colour } | Goal::Perimeter { colour } => colour,
        }
    }

    /// Scores the board, rasterizing it once.
    pub fn score(&self, board: &Board) -> u32 {
        self.score_grid(&board.rasterize())
    }

    /// Scores an already rasterized board.
    pub fn score_grid(&self, grid: &Grid) -> u32 {
        match *self {
            Goal::Blob { colour } => largest_blob(grid, colour),
            Goal::Perimeter { colour } => perimeter_count(grid, colour),
        }
    }

    pub fn description(&self) -> String {
        match *self {
            Goal::Blob { colour } => {
                format!("Create the largest blob of {} possible.", colour.name())
            }
            Goal::Perimeter { colour } => {
                format!("Maximize the amount of {} on the perimeter.", colour.name())
            }
        }
    }

    /// Picks a random rule and a random palette colour.
    pub fn random(rng: &mut impl Rng) -> Self {
        let colour = COLOUR_LIST[rng.gen_range(0..COLOUR_LIST.len())];
        if rng.gen_bool(0.5) {
            Goal::blob(colour)
        } else {
            Goal::perimeter(colour)
        }
    }
}

/// Deals goals for `players` players: one shared rule, distinct colours.
///
/// At most `COLOUR_LIST.len()` goals are returned.
pub fn random_goals(players: usize, rng: &mut impl Rng) -> Vec<Goal> {
    let blob = rng.gen_bool(0.5);
    let mut colours = COLOUR_LIST;
    colours.shuffle(rng);
    colours
        .into_iter()
        .take(players)
        .map(|colour| {
            if blob {
                Goal::blob(colour)
            } else {
                Goal::perimeter(colour)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::colour::{PACIFIC_POINT, REAL_RED};
    use crate::board::Layout;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn descriptions_name_the_colour() {
        assert_eq!(
            Goal::blob(REAL_RED).description(),
            "Create the largest blob of Real Red possible."
        );
        assert_eq!(
            Goal::perimeter(PACIFIC_POINT).description(),
            "Maximize the amount of Pacific Point on the perimeter."
        );
    }

    #[test]
    fn score_rasterizes_board() {
        let layout = Layout::split([
            Layout::Leaf(REAL_RED),
            Layout::Leaf(PACIFIC_POINT),
            Layout::Leaf(PACIFIC_POINT),
            Layout::Leaf(PACIFIC_POINT),
        ]);
        let board = Board::from_layout(&layout, 2, 64.0).unwrap();
        // Red covers the 2x2 upper-right quadrant of a 4x4 grid.
        assert_eq!(Goal::blob(REAL_RED).score(&board), 4);
        assert_eq!(Goal::blob(PACIFIC_POINT).score(&board), 12);
        // Top row cells (2,0), (3,0) plus right column cells (3,0), (3,1).
        assert_eq!(Goal::perimeter(REAL_RED).score(&board), 4);
    }

    #[test]
    fn colour_accessor() {
        assert_eq!(Goal::blob(REAL_RED).colour(), REAL_RED);
        assert_eq!(Goal::perimeter(PACIFIC_POINT).colour(), PACIFIC_POINT);
    }

    #[test]
    fn random_goal_uses_palette() {
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..20 {
            assert!(COLOUR_LIST.contains(&Goal::random(&mut rng).colour()));
        }
    }

    #[test]
    fn random_goals_share_rule_with_distinct_colours() {
        let mut rng = SmallRng::seed_from_u64(5);
        for players in 0..=5 {
            let goals = random_goals(players, &mut rng);
            assert_eq!(goals.len(), players.min(COLOUR_LIST.len()));
            for (i, a) in goals.iter().enumerate() {
                assert_eq!(
                    matches!(a, Goal::Blob { .. }),
                    matches!(goals[0], Goal::Blob { .. })
                );
                for b in &goals[i + 1..] {
                    assert_ne!(a.colour(), b.colour());
                }
            }
        }
    }
}
