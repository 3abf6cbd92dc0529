//! Errors used throughout the position builder.
//!
//! `PositionError` is the single error type returned by notation parsing,
//! move application, FEN handling and the movetext driver. Every variant that
//! stems from a move token carries the offending token so callers can report
//! it verbatim.
//!
//! A failed call never leaves a half-applied position behind: move
//! application works on a copy of the state and only hands it back on success.

/// Unified error type for the position builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A move token does not match the SAN shape.
    ///
    /// Payload: the token as it appeared in the movetext.
    #[error("malformed move token: {0}")]
    MalformedToken(String),

    /// No square holds a piece that matches the token's kind, disambiguators
    /// and movement geometry.
    ///
    /// Payload: the token as it appeared in the movetext.
    #[error("cannot resolve origin square for move: {0}")]
    UnresolvableOrigin(String),

    /// More plies were requested than the movetext contains.
    #[error("requested {requested} plies but movetext only has {available} moves")]
    PlyCountExceedsMoves { requested: usize, available: usize },

    /// A FEN string could not be decoded.
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    /// A square in algebraic notation (for example `e4`) could not be decoded.
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    /// The movetext declares `[SetUp "1"]` without a `[FEN ...]` tag pair.
    #[error("PGN SetUp=1 is present but FEN header is missing")]
    MissingSetupFen,

    /// A PGN tag pair line is malformed.
    #[error("invalid PGN header line: {0}")]
    InvalidHeader(String),
}
