//! Chess rules: board representation, per-piece move generation, check
//! safety, castling, en passant, and promotion.

mod attacks;
mod board;
mod color;
mod coord;
mod direction;
mod engine;
mod error;
mod fen;
mod history;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod space;

pub use attacks::{is_in_check, is_threatened};
pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use coord::{BOARD_SIZE, Coord};
pub use direction::{Direction, KING_OFFSETS, KNIGHT_OFFSETS, Ray, first_occupant, leaps};
pub use engine::{Engine, EngineConfig};
pub use error::{BoardError, EngineError, FenError};
pub use fen::STARTING_PLACEMENT;
pub use history::History;
pub use movegen::{
    Candidate, CandidateList, CastleSide, MoveKind, all_legal_moves, legal_moves,
    pseudo_legal_moves,
};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use space::BoardSpace;
