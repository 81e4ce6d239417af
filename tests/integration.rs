//! Integration tests for the board library.
//!
//! Drives the public API the way a game front end would: build a board,
//! select nodes, apply moves, and score goals.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use blocky::board::colour::{PACIFIC_POINT, REAL_RED};
use blocky::board::{Axis, Direction, Grid, Layout, Point};
use blocky::eval::{largest_blob, perimeter_count};
use blocky::movegen::{legal_moves, random_move, random_node, Move};
use blocky::{Board, BoardConfig, BoardError, Goal};

const RED: blocky::board::Colour = REAL_RED;
const BLUE: blocky::board::Colour = PACIFIC_POINT;

/// Depth-1 board with red on top and blue below.
fn red_over_blue() -> Board {
    let layout = Layout::split([
        Layout::Leaf(RED),
        Layout::Leaf(RED),
        Layout::Leaf(BLUE),
        Layout::Leaf(BLUE),
    ]);
    Board::from_layout(&layout, 1, 100.0).unwrap()
}

#[test]
fn two_by_two_scenario() {
    let board = red_over_blue();
    let grid = board.rasterize();

    // Columns: left column is [red, blue], right column is [red, blue].
    let expected = Grid::from_columns(vec![vec![RED, BLUE], vec![RED, BLUE]]).unwrap();
    assert_eq!(grid, expected);

    assert_eq!(Goal::blob(RED).score(&board), 2);
    // Every cell of a 2x2 grid is a corner: each red cell sits on the top
    // edge and on one side edge.
    assert_eq!(Goal::perimeter(RED).score(&board), 4);
    assert_eq!(Goal::perimeter(BLUE).score(&board), 4);
}

#[test]
fn four_by_four_uniform_scores() {
    let grid = Grid::from_fn(4, |_, _| RED);
    assert_eq!(largest_blob(&grid, RED), 16);
    assert_eq!(perimeter_count(&grid, RED), 16);
    assert_eq!(largest_blob(&grid, BLUE), 0);
}

#[test]
fn vertical_swap_moves_red_to_bottom() {
    let mut board = red_over_blue();
    board.swap(board.root(), Axis::Vertical).unwrap();
    assert_eq!(board.locate(0, 0).unwrap(), BLUE);
    assert_eq!(board.locate(1, 1).unwrap(), RED);
}

#[test]
fn rotation_turns_rows_into_columns() {
    let mut board = red_over_blue();
    board.rotate(board.root(), Direction::Clockwise).unwrap();
    // Red top row turns into the right column.
    assert_eq!(board.locate(1, 0).unwrap(), RED);
    assert_eq!(board.locate(1, 1).unwrap(), RED);
    assert_eq!(board.locate(0, 0).unwrap(), BLUE);
    assert_eq!(board.locate(0, 1).unwrap(), BLUE);
}

#[test]
fn selection_survives_rearrangement_but_not_smash() {
    let config = BoardConfig {
        max_depth: 3,
        subdivide_decay: 0.0,
        seed: 77,
        ..BoardConfig::default()
    };
    let mut rng = config.rng();
    let mut board = Board::random(&config, &mut rng).unwrap();

    let selected = board.select(Point::new(700.0, 10.0), 2);
    board.set_highlighted(selected, true).unwrap();
    assert_eq!(board.get(selected).unwrap().level(), 2);

    board.swap(board.root(), Axis::Horizontal).unwrap();
    assert!(board.is_alive(selected));
    assert!(board.get(selected).unwrap().highlighted());

    let parent = board.parent_of(selected).unwrap();
    assert!(board.smash(parent, &mut rng).unwrap());
    assert!(!board.is_alive(selected));
    assert!(matches!(
        board.set_highlighted(selected, false),
        Err(BoardError::StaleNode(_))
    ));
    board.check_invariants().unwrap();
}

#[test]
fn random_game_keeps_board_valid() {
    let config = BoardConfig {
        max_depth: 5,
        seed: 2024,
        ..BoardConfig::default()
    };
    let mut rng = config.rng();
    let mut board = Board::random(&config, &mut rng).unwrap();
    let goals = blocky::eval::random_goals(2, &mut rng);
    assert_eq!(goals.len(), 2);

    for _ in 0..200 {
        let id = random_node(&board, &mut rng);
        let mv = random_move(&mut rng, true);
        let changed = mv.apply(&mut board, id, &mut rng).unwrap();
        if changed {
            assert!(
                mv == Move::Smash || legal_moves(&board, id).contains(&mv),
                "{:?} changed a board where it was not legal",
                mv
            );
        }
        board.check_invariants().unwrap();
    }

    let grid = board.rasterize();
    for goal in &goals {
        assert_eq!(goal.score(&board), goal.score_grid(&grid));
        assert!(goal.score(&board) as usize <= 4 * grid.side() * grid.side());
    }
}

#[test]
fn draw_primitives_cover_every_leaf() {
    let mut rng = SmallRng::seed_from_u64(31);
    let board = Board::new_random_tree(4, 500.0, &mut rng).unwrap();
    let leaves = {
        let mut count = 0;
        let mut stack = vec![board.root()];
        while let Some(id) = stack.pop() {
            match board.children_of(id) {
                Some(children) => stack.extend(children),
                None => count += 1,
            }
        }
        count
    };
    let prims = board.draw_primitives();
    assert_eq!(prims.len(), 2 * leaves);
    let filled_area: f64 = prims
        .iter()
        .filter(|p| p.is_filled())
        .map(|p| p.size * p.size)
        .sum();
    assert_eq!(filled_area, 500.0 * 500.0);
}

#[test]
fn board_from_json_config() {
    let config =
        BoardConfig::from_json(r#"{"max_depth": 2, "canvas_size": 64.0, "seed": 9}"#).unwrap();
    let mut rng = config.rng();
    let board = Board::random(&config, &mut rng).unwrap();
    assert_eq!(board.rasterize().side(), 4);
    assert_eq!(board.get(board.root()).unwrap().size(), 64.0);
}
