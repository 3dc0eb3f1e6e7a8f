use serde::{Deserialize, Serialize};

use erpcore_core::{CompanyId, CustomerId, DomainResult, Entity, Validate, require_text};

/// Natural person or legal entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerKind {
    Individual,
    Business,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Tax document (CPF/CNPJ), stored as entered.
    pub doc: String,
    pub kind: CustomerKind,
    pub company_id: CompanyId,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub doc: String,
    pub kind: CustomerKind,
    pub company_id: CompanyId,
}

impl Validate for NewCustomer {
    fn validate(&self) -> DomainResult<()> {
        require_text("customer name", &self.name)
    }
}

impl NewCustomer {
    pub fn into_record(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            doc: self.doc,
            kind: self.kind,
            company_id: self.company_id,
        }
    }
}
