use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::domain::{AppError, Proposal};
use crate::ports::GovernanceApi;

/// One recorded API call, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    FetchUniverse,
    FetchProposals,
    CreateUniverse { name: String },
    SubmitProposal { text: String },
    SubmitVote { id: String, vote: String },
}

/// In-memory governance API for tests.
///
/// Clones share state, so a test can keep a handle while the context owns
/// another. Reads default to an empty-but-healthy server; `fail_*` switches
/// flip individual endpoints to errors.
#[derive(Clone)]
pub struct FakeGovernanceApi {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    universe: Arc<Mutex<Option<Value>>>,
    proposals: Arc<Mutex<Option<Vec<Proposal>>>>,
    writes_fail: Arc<Mutex<bool>>,
}

impl FakeGovernanceApi {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            universe: Arc::new(Mutex::new(Some(json!({})))),
            proposals: Arc::new(Mutex::new(Some(Vec::new()))),
            writes_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_universe(&self, meta: Value) {
        *self.universe.lock().unwrap() = Some(meta);
    }

    pub fn fail_universe(&self) {
        *self.universe.lock().unwrap() = None;
    }

    pub fn set_proposals(&self, list: Vec<Proposal>) {
        *self.proposals.lock().unwrap() = Some(list);
    }

    pub fn fail_proposals(&self) {
        *self.proposals.lock().unwrap() = None;
    }

    pub fn fail_writes(&self) {
        *self.writes_fail.lock().unwrap() = true;
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self) -> Result<(), AppError> {
        if *self.writes_fail.lock().unwrap() {
            Err(AppError::Api { message: "write rejected".to_string(), status: Some(500) })
        } else {
            Ok(())
        }
    }
}

impl Default for FakeGovernanceApi {
    fn default() -> Self {
        Self::new()
    }
}

impl GovernanceApi for FakeGovernanceApi {
    fn fetch_universe(&self) -> Result<Value, AppError> {
        self.record(RecordedCall::FetchUniverse);
        self.universe.lock().unwrap().clone().ok_or_else(|| AppError::Api {
            message: "connection refused".to_string(),
            status: None,
        })
    }

    fn fetch_proposals(&self) -> Result<Vec<Proposal>, AppError> {
        self.record(RecordedCall::FetchProposals);
        self.proposals.lock().unwrap().clone().ok_or_else(|| AppError::Api {
            message: "connection refused".to_string(),
            status: None,
        })
    }

    fn create_universe(&self, name: &str) -> Result<(), AppError> {
        self.record(RecordedCall::CreateUniverse { name: name.to_string() });
        self.write_result()
    }

    fn submit_proposal(&self, text: &str) -> Result<(), AppError> {
        self.record(RecordedCall::SubmitProposal { text: text.to_string() });
        self.write_result()
    }

    fn submit_vote(&self, id: &str, vote: &str) -> Result<(), AppError> {
        self.record(RecordedCall::SubmitVote {
            id: id.to_string(),
            vote: vote.to_string(),
        });
        self.write_result()
    }
}
