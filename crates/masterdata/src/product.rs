use serde::{Deserialize, Serialize};

use erpcore_core::{CompanyId, DomainResult, Entity, ProductId, Validate, require_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    /// Fiscal classification code.
    pub ncm: String,
    pub unit: String,
    pub company_id: CompanyId,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub ncm: String,
    pub unit: String,
    pub company_id: CompanyId,
}

impl Validate for NewProduct {
    fn validate(&self) -> DomainResult<()> {
        require_text("product name", &self.name)
    }
}

impl NewProduct {
    pub fn into_record(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            ncm: self.ncm,
            unit: self.unit,
            company_id: self.company_id,
        }
    }
}
