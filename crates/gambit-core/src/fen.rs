//! FEN piece-placement parsing and serialization for [`Board`].
//!
//! Only the placement field is handled. Side to move, castling and en passant
//! are not stored on a board: they follow from the engine's turn and history.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::coord::{BOARD_SIZE, Coord};
use crate::error::FenError;
use crate::piece::Piece;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = FenError;

    /// Parse a placement such as `"4k3/8/8/8/8/8/8/4K3"` and validate it.
    fn from_str(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(FenError::WrongRankCount {
                found: ranks.len(),
            });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let rank = BOARD_SIZE - 1 - rank_index as i8;
            let mut file: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file += digit as usize;
                    continue;
                }

                let piece = Piece::from_symbol(c).ok_or(FenError::InvalidPieceChar {
                    character: c,
                })?;
                if file >= BOARD_SIZE as usize {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file + 1,
                    });
                }
                board.set_piece(Coord::new(rank, file as i8), Some(piece));
                file += 1;
            }

            if file != BOARD_SIZE as usize {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file,
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Write the FEN piece-placement field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            let mut empty_run = 0;
            for file in 0..BOARD_SIZE {
                match self.piece_at(Coord::new(rank, file)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.symbol())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::board::Board;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::error::{BoardError, FenError};
    use crate::piece::Piece;

    #[test]
    fn starting_placement_matches_starting_position() {
        let parsed: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
        assert_eq!(Board::starting_position().to_string(), STARTING_PLACEMENT);
    }

    #[test]
    fn sparse_placement() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3".parse().unwrap();
        assert_eq!(board.piece_at(Coord::new(4, 3)), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(Coord::new(4, 4)), Some(Piece::WHITE_PAWN));
        assert_eq!(board.king_position(Color::White), Coord::new(0, 4));
        assert_eq!(board.to_string(), "4k3/8/8/3pP3/8/8/8/4K3");
    }

    #[test]
    fn wrong_rank_count() {
        let err = "8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::WrongRankCount { found: 3 });
    }

    #[test]
    fn short_rank() {
        let err = "4k3/8/8/8/8/8/8/4K2".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            FenError::BadRankLength {
                rank_index: 7,
                length: 7
            }
        );
    }

    #[test]
    fn long_rank() {
        let err = "4k3/8/8/8/8/8/8/4K3R".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            FenError::BadRankLength {
                rank_index: 7,
                length: 9
            }
        );
    }

    #[test]
    fn invalid_piece_char() {
        let err = "4k3/8/8/8/8/8/8/4X3".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::InvalidPieceChar { character: 'X' });
        let err = "4k3/8/8/8/8/8/8/4K9".parse::<Board>().unwrap_err();
        assert_eq!(err, FenError::InvalidPieceChar { character: '9' });
    }

    #[test]
    fn structurally_invalid_board() {
        let err = "8/8/8/8/8/8/8/4K3".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: Color::Black,
                    count: 0
                }
            }
        );
    }
}
