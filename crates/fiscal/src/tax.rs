use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use erpcore_core::{DomainError, DomainResult, Entity, TaxRuleId, Validate, require_text};

/// Tax the rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxType {
    Icms,
    Pis,
    Cofins,
    Iss,
}

/// A tax rate and its fiscal classification codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRule {
    pub id: TaxRuleId,
    pub name: String,
    pub tax_type: TaxType,
    /// Percentage in `[0, 100]`, checked at registration.
    pub aliquot: Decimal,
    pub cfop: String,
    pub cst: String,
}

impl Entity for TaxRule {
    type Id = TaxRuleId;

    fn id(&self) -> &TaxRuleId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaxRule {
    pub name: String,
    pub tax_type: TaxType,
    pub aliquot: Decimal,
    pub cfop: String,
    pub cst: String,
}

impl Validate for NewTaxRule {
    fn validate(&self) -> DomainResult<()> {
        require_text("tax rule name", &self.name)?;
        if self.aliquot < Decimal::ZERO || self.aliquot > Decimal::ONE_HUNDRED {
            return Err(DomainError::invalid_input(format!(
                "aliquot must be within 0..=100, got {}",
                self.aliquot
            )));
        }
        Ok(())
    }
}

impl NewTaxRule {
    pub fn into_record(self, id: TaxRuleId) -> TaxRule {
        TaxRule {
            id,
            name: self.name,
            tax_type: self.tax_type,
            aliquot: self.aliquot,
            cfop: self.cfop,
            cst: self.cst,
        }
    }
}

/// `base_value * aliquot / 100`, unrounded.
///
/// The rule's aliquot is trusted; only the base is checked here. The rate is
/// scaled down first, so any base up to `Decimal::MAX` stays representable
/// (precision beyond 28 significant digits is the only thing given up).
pub fn calculate_tax(base_value: Decimal, rule: &TaxRule) -> DomainResult<Decimal> {
    if base_value < Decimal::ZERO {
        return Err(DomainError::invalid_input(format!(
            "tax base must not be negative, got {base_value}"
        )));
    }
    rule.aliquot
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|rate| base_value.checked_mul(rate))
        .ok_or_else(|| {
            DomainError::invalid_input(format!(
                "tax on {base_value} at {}% is out of range",
                rule.aliquot
            ))
        })
}
