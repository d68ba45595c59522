//! Request ticket value object

use serde::{Deserialize, Serialize};

/// Sequence number handed out for every submission.
///
/// Tickets only ever increase within a session. A result carrying a ticket
/// older than the latest one belongs to a superseded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// The ticket in force before any request has been issued
    pub const INITIAL: RequestTicket = RequestTicket(0);

    /// The ticket following this one
    pub fn next(self) -> Self {
        RequestTicket(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
