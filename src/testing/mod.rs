mod fake_governance_api;
mod recording_view;

pub use fake_governance_api::{FakeGovernanceApi, RecordedCall};
pub use recording_view::{ProposalsContent, RecordingView};
