//! Runtime-agnostic surface for cross-boundary call outcome reporting.

mod holder;
mod logger;

pub use holder::LocalReturnInfo;
pub use logger::{BridgeLogger, NullLogger, StandardLogger};

use anyhow::Result;

/// Outcome channel for one cross-runtime call sequence.
///
/// One implementor wraps one status holder: the durable record of whether
/// the last boundary crossing succeeded and, if not, why. Writers append
/// exception text and store a return code; callers poll the two getters —
/// nothing is pushed back automatically. Implementations do no internal
/// locking, so one holder must not be driven from multiple threads without
/// outside synchronization.
pub trait ReturnInfo {
    /// Append one business exception message to the holder's list.
    ///
    /// The message is data, not an error of the bridge itself; an `Err`
    /// from this method means the boundary crossing failed, not that an
    /// exception was recorded.
    fn add_exception_string(&mut self, message: &str) -> Result<()>;

    /// Whether any exception message has been recorded so far.
    fn has_exceptions(&mut self) -> Result<bool>;

    /// Store `code` verbatim. The last write wins.
    fn set_return_code(&mut self, code: i32) -> Result<()>;

    /// The stored return code, or the holder's default (zero) before any
    /// write.
    fn get_return_code(&mut self) -> Result<i32>;
}
