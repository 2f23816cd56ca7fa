//! Proposal records served by the governance server.

use serde::Deserialize;

/// A governance proposal as returned by `/proposals`.
///
/// The status label set is owned by the server (e.g. "pending", "accepted",
/// "rejected"); the client treats it as an opaque short string. List order
/// is likewise server-owned and never re-sorted here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Proposal {
    /// Stable identifier, echoed back when voting.
    pub id: String,
    /// Human-readable proposal text.
    pub description: String,
    /// Lifecycle label owned by the server.
    pub status: String,
}

impl Proposal {
    /// Single-line rendering used by the proposals region.
    pub fn summary_line(&self) -> String {
        format!("{}: {} [{}]", self.id, self.description, self.status)
    }
}
