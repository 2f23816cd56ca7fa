mod governance_http;
mod terminal_view;

pub use governance_http::HttpGovernanceApi;
pub use terminal_view::TerminalView;
