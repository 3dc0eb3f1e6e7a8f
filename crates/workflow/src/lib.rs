//! Workflow module: threshold-based approval rules.

pub mod rule;

pub use rule::{MAX_APPROVALS, NewWorkflowRule, WorkflowRule, match_rules};
