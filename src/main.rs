use anyhow::{Context, Result};
use clap::Parser;

use connect4_minimax::{lines, solver::Solver, Board, Player, SearchOutcome};

mod terminal;

/// Pick moves for Connect 4 positions with a depth-limited minimax search
#[derive(Parser, Debug)]
#[command(name = "connect4-minimax", version)]
struct Cli {
    /// Moves played so far as 1-indexed columns, e.g. "4453"
    #[arg(default_value = "")]
    moves: String,

    /// Keep playing both sides from the position until the game is over
    #[arg(long)]
    self_play: bool,

    /// Search depth used on an empty board
    #[arg(long, default_value_t = connect4_minimax::solver::MIN_DEPTH)]
    min_depth: usize,

    /// Stop trying further moves at each node after this many nodes
    #[arg(long)]
    node_limit: Option<usize>,

    /// Log every root move the search evaluates
    #[arg(short, long)]
    verbose: bool,
}

fn player_number(player: Player) -> u8 {
    match player {
        Player::One => 1,
        Player::Two => 2,
    }
}

/// Describes an extreme score; the ply count is the length of the searched
/// line, which can end in a threat found at the horizon rather than a win
fn decisive_message(winner: Player, plies: u32) -> String {
    let move_string = if plies == 1 { "move" } else { "moves" };
    format!(
        "Player {} wins along the searched line, {} {} ahead.",
        player_number(winner),
        plies,
        move_string
    )
}

fn analyse(board: &Board, cli: &Cli) -> Result<SearchOutcome> {
    let player = board.side_to_move();

    let mut solver = Solver::new(*board).with_min_depth(cli.min_depth);
    if let Some(node_limit) = cli.node_limit {
        solver = solver.with_node_limit(node_limit);
    }
    let outcome = solver.solve()?;
    let result = outcome.result;

    if let Some(player) = player {
        println!("Player {} to move", player_number(player));
    }
    if let Some(best_move) = result.best_move {
        println!("Best move: {}", best_move.column + 1);
    }
    println!(
        "Score: {}, path cost: {}, depth: {}, positions evaluated: {}",
        result.score, result.path_cost, outcome.depth, outcome.node_count
    );
    if let Some((winner, plies)) = result.decisive() {
        println!("{}", decisive_message(winner, plies));
    }
    Ok(outcome)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut board = Board::from_moves(&cli.moves)
        .with_context(|| format!("parsing move string '{}'", cli.moves))?;
    terminal::draw(&board)?;

    loop {
        if lines::terminal(&board) {
            match lines::winner(&board) {
                Some(player) => println!("Player {} wins!", player_number(player)),
                None => println!("Draw!"),
            }
            break;
        }

        let outcome = analyse(&board, &cli)?;
        if !cli.self_play {
            break;
        }

        let best_move = outcome
            .result
            .best_move
            .context("search returned no move for a running game")?;
        board = board.apply_move(best_move)?;
        println!();
        terminal::draw(&board)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decisive_message_names_searched_line() {
        assert_eq!(
            decisive_message(Player::Two, 1),
            "Player 2 wins along the searched line, 1 move ahead."
        );
        assert!(!decisive_message(Player::One, 3).contains("at most"));
    }
}
