//! Error types for placement parsing, board validation, and move commitment.

use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

/// Errors that occur when parsing a FEN piece-placement field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn occupies the first or eighth rank.
    #[error("pawn found on back rank at {coord}")]
    PawnOnBackRank {
        /// Where the pawn stands.
        coord: Coord,
    },
}

/// Misuse of the [`Engine`](crate::engine::Engine) commit and promotion API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The candidate was generated for a different position than the current one.
    #[error("candidate was generated at ply {generated}, but the game is at ply {current}")]
    StaleCandidate {
        /// Ply the candidate was generated for.
        generated: usize,
        /// Ply the engine is currently at.
        current: usize,
    },
    /// A pawn on the last rank still waits for its promotion choice.
    #[error("promotion pending on {coord}")]
    PromotionPending {
        /// Square of the pawn awaiting promotion.
        coord: Coord,
    },
    /// The candidate moves a piece of the side not to move.
    #[error("it is not {color}'s turn")]
    WrongTurn {
        /// Color of the piece the candidate moves.
        color: Color,
    },
    /// The candidate is not among the legal moves of the current position.
    #[error("{from}{to} is not a legal move in this position")]
    IllegalCandidate {
        /// Square the candidate moves from.
        from: Coord,
        /// Square the candidate moves to.
        to: Coord,
    },
    /// `promote` was called with no pawn awaiting promotion.
    #[error("no promotion is pending")]
    NoPendingPromotion,
    /// The requested kind is not a legal promotion target.
    #[error("cannot promote to {kind:?}")]
    InvalidPromotion {
        /// The rejected kind.
        kind: PieceKind,
    },
}
