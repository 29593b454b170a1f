mod game;
mod moves;
mod position;

pub use game::{positions_from_moves, replay_moves, GameLine, IllegalMove, PlayedMove, Replay};
pub use moves::{parse_move, MoveError};
pub use position::{Position, PositionError};
