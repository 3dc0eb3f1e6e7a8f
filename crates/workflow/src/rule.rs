use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use erpcore_core::{DomainError, DomainResult, Entity, Validate, WorkflowRuleId, require_text};

/// Upper bound on approvals a single rule may demand.
pub const MAX_APPROVALS: u32 = 10;

/// "Operations on `entity_type` worth at least `min_value` need
/// `approvals_required` approvals."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRule {
    pub id: WorkflowRuleId,
    pub name: String,
    /// Free-form, matched case-sensitively (e.g. "PurchaseOrder").
    pub entity_type: String,
    pub min_value: Decimal,
    pub approvals_required: u32,
}

impl Entity for WorkflowRule {
    type Id = WorkflowRuleId;

    fn id(&self) -> &WorkflowRuleId {
        &self.id
    }
}

impl WorkflowRule {
    pub fn applies_to(&self, entity_type: &str, value: Decimal) -> bool {
        self.entity_type == entity_type && value >= self.min_value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkflowRule {
    pub name: String,
    pub entity_type: String,
    pub min_value: Decimal,
    pub approvals_required: u32,
}

impl Validate for NewWorkflowRule {
    fn validate(&self) -> DomainResult<()> {
        require_text("workflow name", &self.name)?;
        if self.min_value < Decimal::ZERO {
            return Err(DomainError::invalid_input("min_value must not be negative"));
        }
        if !(1..=MAX_APPROVALS).contains(&self.approvals_required) {
            return Err(DomainError::invalid_input(format!(
                "approvals_required must be within 1..={MAX_APPROVALS}"
            )));
        }
        Ok(())
    }
}

impl NewWorkflowRule {
    pub fn into_record(self, id: WorkflowRuleId) -> WorkflowRule {
        WorkflowRule {
            id,
            name: self.name,
            entity_type: self.entity_type,
            min_value: self.min_value,
            approvals_required: self.approvals_required,
        }
    }
}

/// Rules triggered by an operation on `entity_type` worth `value`.
///
/// Stable filter: results keep the input order. The threshold is inclusive.
pub fn match_rules(rules: &[WorkflowRule], entity_type: &str, value: Decimal) -> Vec<WorkflowRule> {
    rules
        .iter()
        .filter(|rule| rule.applies_to(entity_type, value))
        .cloned()
        .collect()
}
