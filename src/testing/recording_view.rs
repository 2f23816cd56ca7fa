use std::sync::{Arc, Mutex};

use crate::ports::DashboardView;

/// What the proposals region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalsContent {
    Lines(Vec<String>),
    Notice(String),
}

/// View that captures region content for assertions.
///
/// Clones share state, mirroring `FakeGovernanceApi`. A region is `None`
/// until something was rendered into it.
#[derive(Clone, Default)]
pub struct RecordingView {
    universe: Arc<Mutex<Option<String>>>,
    proposals: Arc<Mutex<Option<ProposalsContent>>>,
}

impl RecordingView {
    pub fn universe_text(&self) -> Option<String> {
        self.universe.lock().unwrap().clone()
    }

    pub fn proposals_content(&self) -> Option<ProposalsContent> {
        self.proposals.lock().unwrap().clone()
    }
}

impl DashboardView for RecordingView {
    fn show_universe(&mut self, text: &str) {
        *self.universe.lock().unwrap() = Some(text.to_string());
    }

    fn show_proposals(&mut self, lines: &[String]) {
        *self.proposals.lock().unwrap() = Some(ProposalsContent::Lines(lines.to_vec()));
    }

    fn show_proposals_notice(&mut self, text: &str) {
        *self.proposals.lock().unwrap() = Some(ProposalsContent::Notice(text.to_string()));
    }
}
