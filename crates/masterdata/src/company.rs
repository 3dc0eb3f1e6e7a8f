use serde::{Deserialize, Serialize};

use erpcore_core::{CompanyId, DomainResult, Entity, Validate, require_text};

/// Company tax regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegime {
    Simples,
    Presumido,
    Real,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// National registry number, stored as entered.
    pub cnpj: String,
    pub regime: TaxRegime,
}

impl Entity for Company {
    type Id = CompanyId;

    fn id(&self) -> &CompanyId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub cnpj: String,
    pub regime: TaxRegime,
}

impl Validate for NewCompany {
    fn validate(&self) -> DomainResult<()> {
        require_text("company name", &self.name)
    }
}

impl NewCompany {
    pub fn into_record(self, id: CompanyId) -> Company {
        Company {
            id,
            name: self.name,
            cnpj: self.cnpj,
            regime: self.regime,
        }
    }
}
