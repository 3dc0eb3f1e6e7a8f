use serde::{Deserialize, Serialize};

use erpcore_core::{CostCenterId, DomainResult, Entity, Validate, require_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenter {
    pub id: CostCenterId,
    pub code: String,
    pub name: String,
}

impl Entity for CostCenter {
    type Id = CostCenterId;

    fn id(&self) -> &CostCenterId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCostCenter {
    pub code: String,
    pub name: String,
}

impl Validate for NewCostCenter {
    fn validate(&self) -> DomainResult<()> {
        require_text("cost center code", &self.code)
    }
}

impl NewCostCenter {
    pub fn into_record(self, id: CostCenterId) -> CostCenter {
        CostCenter {
            id,
            code: self.code,
            name: self.name,
        }
    }
}
