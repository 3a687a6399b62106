//! A depth-limited minimax agent for Connect 4

use log::{debug, info, trace};

use crate::{
    board::{Board, Move, Player},
    error::EngineError,
    heuristic,
    lines::{self, WIN_SCORE},
    CELLS,
};

/// The search depth on an empty board
pub const MIN_DEPTH: usize = 5;
/// The number of tiles played for every extra ply of search depth
pub const DEPTH_STEP: usize = 8;

/// Picks the search depth from how full the board is
///
/// The depth grows by one ply for every [`DEPTH_STEP`] tiles already played,
/// so the opening is searched shallowly and the endgame close to exhaustively.
pub fn search_depth(board: &Board, min_depth: usize) -> usize {
    (CELLS - board.empty_cells()) / DEPTH_STEP + min_depth
}

/// The value of a searched position
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    /// Positive scores favour player one, negative scores player two
    pub score: i32,
    /// The move leading to `score`, `None` at the leaves
    pub best_move: Option<Move>,
    /// The number of plies along the chosen line, used to break score ties
    pub path_cost: u32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
            path_cost: 1,
        }
    }

    /// The player the score declares as winner and the number of plies until
    /// the win, if the score is at the win magnitude
    ///
    /// Outside of the search horizon this relies on the heuristic's direct
    /// threat check, so the ply count is a lower bound in that case.
    pub fn decisive(&self) -> Option<(Player, u32)> {
        let plies = self.path_cost.saturating_sub(1);
        if self.score >= WIN_SCORE {
            Some((Player::One, plies))
        } else if self.score <= -WIN_SCORE {
            Some((Player::Two, plies))
        } else {
            None
        }
    }
}

/// Everything a single call to [`Solver::solve`] reports
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchOutcome {
    pub result: SearchResult,
    /// The search depth picked for the position
    pub depth: usize,
    /// The number of moves expanded during the search (for diagnostics only)
    pub node_count: usize,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Mode {
    Maximize,
    Minimize,
}

impl Mode {
    fn for_player(player: Player) -> Self {
        match player {
            Player::One => Mode::Maximize,
            Player::Two => Mode::Minimize,
        }
    }

    fn opposite(self) -> Self {
        match self {
            Mode::Maximize => Mode::Minimize,
            Mode::Minimize => Mode::Maximize,
        }
    }

    /// Whether `score` is strictly better than `than` for this side
    fn improves(self, score: i32, than: i32) -> bool {
        match self {
            Mode::Maximize => score > than,
            Mode::Minimize => score < than,
        }
    }

    fn sign(self) -> char {
        match self {
            Mode::Maximize => '+',
            Mode::Minimize => '-',
        }
    }
}

/// An agent to pick moves in Connect 4 positions
///
/// # Notes
/// The search alternates between maximising (player one) and minimising
/// (player two) nodes down to a depth picked by [`search_depth`]. Each node
/// passes its best score so far down to its children as a single bound; a
/// child stops expanding its moves once its own best score is strictly
/// better for it than that bound, because the parent would never pick it.
/// This prunes less than a full alpha-beta window.
///
/// # Position Scoring
/// Finished games score [`WIN_SCORE`], `-WIN_SCORE` or 0. Positions at the
/// search horizon are scored by [`heuristic::evaluate`]. Among moves with equal
/// scores the one with the shortest line to the end of the search is chosen.
#[derive(Clone)]
pub struct Solver {
    board: Board,

    /// The number of nodes expanded by the last search (for diagnostics only)
    pub node_count: usize,
    min_depth: usize,
    node_limit: Option<usize>,
}

impl Solver {
    /// Creates a new `Solver` for a position
    pub fn new(board: Board) -> Self {
        Self {
            board,
            node_count: 0,
            min_depth: MIN_DEPTH,
            node_limit: None,
        }
    }

    /// Overrides the search depth used on an empty board
    pub fn with_min_depth(mut self, min_depth: usize) -> Self {
        self.min_depth = min_depth;
        self
    }

    /// Stops trying further moves at any node once this many nodes have
    /// been expanded
    ///
    /// Every node still searches its first move, so the search always
    /// returns a legal move.
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = Some(node_limit);
        self
    }

    /// The depth a search of the current position will use
    pub fn depth(&self) -> usize {
        search_depth(&self.board, self.min_depth)
    }

    /// Searches the position and returns the best move for the player to move
    pub fn solve(&mut self) -> Result<SearchOutcome, EngineError> {
        let player = match self.board.side_to_move() {
            Some(player) if !lines::terminal(&self.board) => player,
            _ => return Err(EngineError::NoLegalMove),
        };

        self.node_count = 0;
        let depth = self.depth();
        let board = self.board;
        let result = self.search(&board, Mode::for_player(player), depth, None, None)?;

        info!(
            "Depth {}: best move {:?}, score {}, path cost {}, {} positions evaluated",
            depth, result.best_move, result.score, result.path_cost, self.node_count
        );

        Ok(SearchOutcome {
            result,
            depth,
            node_count: self.node_count,
        })
    }

    fn limit_reached(&self) -> bool {
        self.node_limit
            .map_or(false, |node_limit| self.node_count >= node_limit)
    }

    /// Performs game tree search
    ///
    /// `bound` is the best score the parent node has found so far and
    /// `last_move` the move that led to `board`; both are `None` at the root.
    fn search(
        &mut self,
        board: &Board,
        mode: Mode,
        depth: usize,
        bound: Option<i32>,
        last_move: Option<Move>,
    ) -> Result<SearchResult, EngineError> {
        if lines::terminal(board) {
            return Ok(SearchResult::leaf(lines::utility(board)));
        }
        if depth == 0 {
            let score = match last_move {
                Some(last_move) => heuristic::evaluate(board, last_move),
                // only reachable with a minimum depth of 0 on an empty board
                None => 0,
            };
            return Ok(SearchResult::leaf(score));
        }

        let mut best: Option<SearchResult> = None;
        for candidate in board.legal_moves() {
            if let Some(best) = best {
                // the parent already has a better option than this node
                if bound.map_or(false, |bound| mode.improves(best.score, bound)) {
                    break;
                }
                if self.limit_reached() {
                    trace!("Node limit reached after {} nodes", self.node_count);
                    break;
                }
            }

            self.node_count += 1;
            let next = board.apply_move(candidate)?;
            let reply = self.search(
                &next,
                mode.opposite(),
                depth - 1,
                best.map(|best| best.score),
                Some(candidate),
            )?;

            let improved = match best {
                None => true,
                Some(best) => {
                    mode.improves(reply.score, best.score)
                        || (reply.score == best.score && reply.path_cost < best.path_cost)
                }
            };
            if improved {
                best = Some(SearchResult {
                    score: reply.score,
                    best_move: Some(candidate),
                    path_cost: reply.path_cost,
                });
            }

            if last_move.is_none() {
                debug!(
                    "{}Move {:?}: score {}, path cost {}, depth {}, positions evaluated {}",
                    mode.sign(),
                    candidate,
                    reply.score,
                    reply.path_cost,
                    depth,
                    self.node_count
                );
            }
        }

        Ok(match best {
            Some(best) => SearchResult {
                path_cost: best.path_cost + 1,
                ..best
            },
            None => SearchResult::leaf(lines::utility(board)),
        })
    }
}

/// Searches `board` with the default settings
pub fn choose_move(board: &Board) -> Result<SearchOutcome, EngineError> {
    Solver::new(*board).solve()
}
