//! Static evaluation of positions at the search horizon

use crate::{
    board::{Board, Cell, Move, Player},
    lines::{self, EMPTY_MARK, WIN_SCORE},
    COLUMNS, ROWS,
};

/// Pattern templates: `#` is a tile of the scored player, `_` an empty cell
const OPEN_THREE: &[u8] = b"_###_";
const THREES: [&[u8]; 4] = [b"###_", b"_###", b"##_#", b"#_##"];
const TWOS: [&[u8]; 6] = [b"##__", b"#_#_", b"#__#", b"_##_", b"_#_#", b"__##"];

pub const OPEN_THREE_SCORE: i32 = 30;
pub const THREE_SCORE: i32 = 20;
pub const TWO_SCORE: i32 = 10;

/// The 8 directions a tile can extend in, as (row, column) steps
const RAYS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Scores a non-terminal position reached by playing `last_move`
///
/// The result is on the same scale as [`lines::utility`]: positive values
/// favour player one.
pub fn evaluate(board: &Board, last_move: Move) -> i32 {
    // the side that moves next; the tile at `last_move` belongs to its opponent
    let to_move = match board.side_to_move() {
        Some(player) => player,
        None => return lines::utility(board),
    };

    if let Some(score) = direct_threat(board, last_move, to_move) {
        return score;
    }

    let score = pattern_score(&lines::line_buffer(board), to_move.opponent())
        + position_score(board, last_move, to_move);

    match to_move {
        Player::One => -score,
        Player::Two => score,
    }
}

/// Checks whether the side to move wins by playing on top of `last_move`
fn direct_threat(board: &Board, last_move: Move, to_move: Player) -> Option<i32> {
    if last_move.row == 0 {
        return None;
    }
    let above = board
        .apply_move(Move::new(last_move.row - 1, last_move.column))
        .ok()?;
    match lines::winner(&above) {
        Some(Player::One) if to_move == Player::One => Some(WIN_SCORE),
        Some(Player::Two) if to_move == Player::Two => Some(-WIN_SCORE),
        _ => None,
    }
}

fn matches(window: &[u8], template: &[u8], tile: u8) -> bool {
    window.iter().zip(template).all(|(&m, &t)| match t {
        b'#' => m == tile,
        _ => m == EMPTY_MARK,
    })
}

/// Counts every (possibly overlapping) occurrence of `template` in the buffer
fn count(buffer: &[u8], template: &[u8], tile: u8) -> i32 {
    buffer
        .windows(template.len())
        .filter(|window| matches(window, template, tile))
        .count() as i32
}

/// Scores open threes, threes with a gap and twos with two gaps of `player`
pub fn pattern_score(buffer: &[u8], player: Player) -> i32 {
    let tile = lines::player_mark(player);

    let mut score = count(buffer, OPEN_THREE, tile) * OPEN_THREE_SCORE;
    score += THREES
        .iter()
        .map(|template| count(buffer, template, tile) * THREE_SCORE)
        .sum::<i32>();
    score += TWOS
        .iter()
        .map(|template| count(buffer, template, tile) * TWO_SCORE)
        .sum::<i32>();
    score
}

/// Rewards room to extend from the landing cell
///
/// Every ray starts at the landing cell and runs until a tile of `blocker`
/// or the edge of the board; each cell passed adds one to a total that
/// starts at -8.
pub fn position_score(board: &Board, last_move: Move, blocker: Player) -> i32 {
    let blocker = Cell::from(blocker);

    let mut score = -(RAYS.len() as i32);
    for &(d_row, d_column) in RAYS.iter() {
        let (mut row, mut column) = (last_move.row as isize, last_move.column as isize);
        while (0..ROWS as isize).contains(&row) && (0..COLUMNS as isize).contains(&column) {
            if board.cell(row as usize, column as usize) == blocker {
                break;
            }
            row += d_row;
            column += d_column;
            score += 1;
        }
    }
    score
}
