use thiserror::Error as ThisError;

/// The closed set of recoverable failure conditions an `Int` operation can
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Operation attempted on an `Int` whose buffer has been released by
    /// [`Int::clear`](crate::Int::clear).
    #[error("operand has been cleared and must be re-initialized before use")]
    InvalidArgument,

    /// Unreachable from safe Rust, since allocator failure aborts the
    /// process rather than unwinding into a `Result`. Kept in the taxonomy
    /// for completeness.
    #[error("allocation failed")]
    AllocationFailed,

    /// Requested buffer size or shift count exceeds `MAX_LIMBS` / `SHIFT_MAX`.
    #[error("requested size or shift count exceeds the implementation maximum")]
    OutOfRange,

    /// Division or remainder by zero.
    #[error("division or remainder by zero")]
    DomainError,

    /// Cast back to a machine integer would lose information.
    #[error("value does not fit in the requested machine integer width")]
    Overflow,
}
