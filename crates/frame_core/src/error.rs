use thiserror::Error;

/// Errors raised while addressing or composing frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// A coordinate name that the frame does not declare.
    #[error("coordinate `{0}` not found")]
    NameNotFound(String),
    /// The same coordinate name appeared twice in a frame layout.
    #[error("coordinate `{0}` declared more than once")]
    DuplicateCoordinate(String),
    /// A value list whose length differs from the number of coordinates.
    #[error("expected {expected} values, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// Input and output frames of a chain disagree on their coordinates.
    #[error(
        "frame layout mismatch: expected [{}], got [{}]",
        .expected.join(", "),
        .found.join(", ")
    )]
    LayoutMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}
