//! Per-session record store and the engine's call boundary.
//!
//! A [`Session`] owns every record created during one user session: master
//! data, titles, the ledger, rule sets, the audit trail and the journal that
//! numbers them. Nothing is shared between sessions.
//!
//! ## Write path
//!
//! ```text
//! request
//!   ↓
//! 1. validate (InvalidInput, before any identifier is drawn)
//!   ↓
//! 2. take the write lock, resolve references (NotFound)
//!   ↓
//! 3. stage identifiers + events in a journal transaction
//!   ↓
//! 4. mutate records (title creation also posts its ledger entry)
//!   ↓
//! 5. commit the journal transaction, release the lock
//!   ↓
//! 6. publish committed events on the bus
//! ```
//!
//! Records are pushed only after every fallible step of an operation has
//! succeeded, so an error (or a poisoned lock) never leaves partial state:
//! no title without its entry, no consumed identifier, no orphan event.
//!
//! ## Read path
//!
//! Queries clone a point-in-time snapshot under the read lock and compute on
//! the copy, so they can run alongside writers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;

use erpcore_accounting::{
    FinancialTitle, Ledger, LedgerEntry, NewTitle, PortfolioSummary, TrialBalanceRow,
    post_for_title, trial_balance,
};
use erpcore_core::{
    AccountId, AuditId, CompanyId, CostCenterId, CustomerId, DomainError, DomainResult,
    EntityKind, LedgerEntryId, ProductId, SequentialId, SessionId, TaxRuleId, TitleId, UserId,
    Validate, WorkflowRuleId, find_by_id,
};
use erpcore_events::{
    AuditRecord, EventBus, InMemoryEventBus, Journal, JournalEvent, JournalTxn, NewAudit,
    Subscription,
};
use erpcore_fiscal::{NewTaxRule, TaxRule, calculate_tax};
use erpcore_masterdata::{
    Account, Company, CostCenter, Customer, NewAccount, NewCompany, NewCostCenter, NewCustomer,
    NewProduct, NewUser, Product, User,
};
use erpcore_workflow::{NewWorkflowRule, WorkflowRule, match_rules};

use crate::config::SessionConfig;

/// Everything a session has recorded, apart from the journal.
#[derive(Debug, Default)]
struct Records {
    companies: Vec<Company>,
    cost_centers: Vec<CostCenter>,
    accounts: Vec<Account>,
    customers: Vec<Customer>,
    products: Vec<Product>,
    users: Vec<User>,
    titles: Vec<FinancialTitle>,
    ledger: Ledger,
    tax_rules: Vec<TaxRule>,
    workflow_rules: Vec<WorkflowRule>,
    audit_log: Vec<AuditRecord>,
}

impl Records {
    fn require_company(&self, id: CompanyId) -> DomainResult<()> {
        find_by_id(&self.companies, &id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::Company.as_str(), id.get()))
    }

    fn require_cost_center(&self, id: CostCenterId) -> DomainResult<()> {
        find_by_id(&self.cost_centers, &id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::CostCenter.as_str(), id.get()))
    }
}

#[derive(Debug, Default)]
struct SessionState {
    journal: Journal,
    records: Records,
}

/// Explicitly owned session store; the handle is `Send + Sync`.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    config: SessionConfig,
    state: RwLock<SessionState>,
    bus: Arc<InMemoryEventBus<JournalEvent>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let id = SessionId::new();
        tracing::debug!(session_id = %id, strict_references = config.strict_references, "session started");
        Self {
            id,
            config,
            state: RwLock::new(SessionState::default()),
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Receive every journal event committed after this call.
    pub fn subscribe(&self) -> Subscription<JournalEvent> {
        self.bus.subscribe()
    }

    // ------------------------------------------------------------------
    // Core boundary
    // ------------------------------------------------------------------

    /// Create a financial title and post its ledger entry as one unit.
    pub fn create_title(&self, request: NewTitle) -> DomainResult<TitleId> {
        request.validate()?;
        let strict = self.config.strict_references;

        self.mutate(|records, txn| {
            let account = find_by_id(&records.accounts, &request.account_id).ok_or_else(|| {
                DomainError::not_found(EntityKind::Account.as_str(), request.account_id.get())
            })?;
            if strict {
                records.require_company(request.company_id)?;
                if let Some(cost_center_id) = request.cost_center_id {
                    records.require_cost_center(cost_center_id)?;
                }
            }

            let title_id: TitleId = txn.allocate();
            let title = request.into_record(title_id);
            txn.append_event(
                format!(
                    "financial title created: {} {} - {}",
                    title.kind, title.doc_number, title.amount
                ),
                EntityKind::FinancialTitle.as_str(),
                Some(title_id.get()),
            );

            let entry_id: LedgerEntryId = txn.allocate();
            let posted = post_for_title(&title, account, entry_id)
                .and_then(|entry| records.ledger.append(entry.clone()).map(|()| entry));
            let entry = match posted {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(title_id = %title_id, error = %err, "posting rejected; title discarded");
                    return Err(err);
                }
            };
            txn.append_event(
                format!(
                    "ledger entry posted: {} D={} C={}",
                    entry.account_code, entry.debit, entry.credit
                ),
                EntityKind::LedgerEntry.as_str(),
                Some(entry.id.get()),
            );

            tracing::debug!(
                title_id = %title_id,
                entry_id = %entry.id,
                kind = %title.kind,
                amount = %title.amount,
                "title created and posted"
            );
            records.titles.push(title);
            Ok(title_id)
        })
    }

    /// Snapshot of the ledger, in posting order.
    pub fn get_ledger(&self) -> Vec<LedgerEntry> {
        self.read(|records| records.ledger.entries().to_vec())
    }

    pub fn get_trial_balance(&self) -> Vec<TrialBalanceRow> {
        trial_balance(&self.get_ledger())
    }

    /// Tax due on `base_value` under the registered rule `rule_id`.
    pub fn evaluate_tax(&self, base_value: Decimal, rule_id: TaxRuleId) -> DomainResult<Decimal> {
        let rule = self
            .read(|records| find_by_id(&records.tax_rules, &rule_id).cloned())
            .ok_or_else(|| DomainError::not_found(EntityKind::TaxRule.as_str(), rule_id.get()))?;
        calculate_tax(base_value, &rule)
    }

    pub fn find_applicable_workflows(&self, entity_type: &str, value: Decimal) -> Vec<WorkflowRule> {
        match_rules(&self.workflow_rules(), entity_type, value)
    }

    // ------------------------------------------------------------------
    // Journal
    // ------------------------------------------------------------------

    /// Journal a free-form event. Never fails.
    pub fn append_event(
        &self,
        description: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: Option<u64>,
    ) -> JournalEvent {
        let event = self
            .write()
            .journal
            .append_event(description, entity_type, entity_id);
        self.publish(vec![event.clone()]);
        event
    }

    pub fn events(&self) -> Vec<JournalEvent> {
        self.read_state(|state| state.journal.events().to_vec())
    }

    pub fn record_audit(&self, request: NewAudit) -> DomainResult<AuditId> {
        request.validate()?;
        self.mutate(|records, txn| {
            let id: AuditId = txn.allocate();
            records.audit_log.push(request.into_record(id, chrono::Utc::now()));
            Ok(id)
        })
    }

    pub fn audit_log(&self) -> Vec<AuditRecord> {
        self.read(|records| records.audit_log.clone())
    }

    // ------------------------------------------------------------------
    // Reference data
    // ------------------------------------------------------------------

    pub fn register_company(&self, request: NewCompany) -> DomainResult<CompanyId> {
        request.validate()?;
        self.mutate(|records, txn| {
            let id = allocate_logged(txn, format!("company created: {}", request.name));
            records.companies.push(request.into_record(id));
            Ok(id)
        })
    }

    pub fn register_cost_center(&self, request: NewCostCenter) -> DomainResult<CostCenterId> {
        request.validate()?;
        self.mutate(|records, txn| {
            let id = allocate_logged(
                txn,
                format!("cost center created: {} - {}", request.code, request.name),
            );
            records.cost_centers.push(request.into_record(id));
            Ok(id)
        })
    }

    /// Account codes must be unique within the session.
    pub fn register_account(&self, request: NewAccount) -> DomainResult<AccountId> {
        request.validate()?;
        self.mutate(|records, txn| {
            if records.accounts.iter().any(|a| a.code == request.code) {
                return Err(DomainError::invalid_input(format!(
                    "account code {} already exists",
                    request.code
                )));
            }
            let id = allocate_logged(
                txn,
                format!("account created: {} - {}", request.code, request.name),
            );
            records.accounts.push(request.into_record(id));
            Ok(id)
        })
    }

    pub fn register_customer(&self, request: NewCustomer) -> DomainResult<CustomerId> {
        request.validate()?;
        let strict = self.config.strict_references;
        self.mutate(|records, txn| {
            if strict {
                records.require_company(request.company_id)?;
            }
            let id = allocate_logged(txn, format!("customer created: {}", request.name));
            records.customers.push(request.into_record(id));
            Ok(id)
        })
    }

    pub fn register_product(&self, request: NewProduct) -> DomainResult<ProductId> {
        request.validate()?;
        let strict = self.config.strict_references;
        self.mutate(|records, txn| {
            if strict {
                records.require_company(request.company_id)?;
            }
            let id = allocate_logged(txn, format!("product created: {}", request.name));
            records.products.push(request.into_record(id));
            Ok(id)
        })
    }

    pub fn register_user(&self, request: NewUser) -> DomainResult<UserId> {
        request.validate()?;
        self.mutate(|records, txn| {
            let id = allocate_logged(txn, format!("user created: {}", request.name));
            records.users.push(request.into_record(id));
            Ok(id)
        })
    }

    pub fn register_tax_rule(&self, request: NewTaxRule) -> DomainResult<TaxRuleId> {
        request.validate()?;
        self.mutate(|records, txn| {
            let id = allocate_logged(txn, format!("tax rule created: {}", request.name));
            records.tax_rules.push(request.into_record(id));
            Ok(id)
        })
    }

    pub fn register_workflow_rule(&self, request: NewWorkflowRule) -> DomainResult<WorkflowRuleId> {
        request.validate()?;
        self.mutate(|records, txn| {
            let id = allocate_logged(txn, format!("workflow created: {}", request.name));
            records.workflow_rules.push(request.into_record(id));
            Ok(id)
        })
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    pub fn title(&self, id: TitleId) -> DomainResult<FinancialTitle> {
        self.read(|records| find_by_id(&records.titles, &id).cloned())
            .ok_or_else(|| DomainError::not_found(EntityKind::FinancialTitle.as_str(), id.get()))
    }

    pub fn titles(&self) -> Vec<FinancialTitle> {
        self.read(|records| records.titles.clone())
    }

    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.read(|records| PortfolioSummary::from_titles(&records.titles))
    }

    pub fn companies(&self) -> Vec<Company> {
        self.read(|records| records.companies.clone())
    }

    pub fn cost_centers(&self) -> Vec<CostCenter> {
        self.read(|records| records.cost_centers.clone())
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.read(|records| records.accounts.clone())
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.read(|records| records.customers.clone())
    }

    pub fn products(&self) -> Vec<Product> {
        self.read(|records| records.products.clone())
    }

    pub fn users(&self) -> Vec<User> {
        self.read(|records| records.users.clone())
    }

    pub fn tax_rules(&self) -> Vec<TaxRule> {
        self.read(|records| records.tax_rules.clone())
    }

    pub fn workflow_rules(&self) -> Vec<WorkflowRule> {
        self.read(|records| records.workflow_rules.clone())
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut Records, &mut JournalTxn<'_>) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let committed = {
            let mut guard = self.write();
            let SessionState { journal, records } = &mut *guard;
            let mut txn = journal.begin();
            let out = op(records, &mut txn)?;
            (out, txn.commit())
        };

        let (out, events) = committed;
        self.publish(events);
        Ok(out)
    }

    fn publish(&self, events: Vec<JournalEvent>) {
        for event in events {
            if let Err(err) = self.bus.publish(event) {
                tracing::warn!(session_id = %self.id, error = ?err, "failed to publish journal event");
            }
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Records) -> T) -> T {
        self.read_state(|state| f(&state.records))
    }

    fn read_state<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        let guard: RwLockReadGuard<'_, SessionState> =
            self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    // Committed state is always consistent (see module docs), so a poisoned
    // lock is recovered rather than surfaced.
    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Draw the next identifier of kind `I` and journal `description` for it.
fn allocate_logged<I: SequentialId>(txn: &mut JournalTxn<'_>, description: String) -> I {
    let id: I = txn.allocate();
    txn.append_event(description, I::KIND.as_str(), Some(id.get()));
    tracing::debug!(kind = %I::KIND, id = id.get(), "record registered");
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use erpcore_accounting::{MAX_TITLE_AMOUNT, TITLE_ORIGIN, TitleKind, TitleStatus};
    use erpcore_fiscal::TaxType;
    use erpcore_masterdata::{AccountKind, TaxRegime};

    struct Fixture {
        session: Session,
        company: CompanyId,
        revenue: AccountId,
        expense: AccountId,
        cost_center: CostCenterId,
    }

    fn fixture() -> Fixture {
        let session = Session::new();
        let company = session
            .register_company(NewCompany {
                name: "ACME".into(),
                cnpj: "00.000.000/0001-00".into(),
                regime: TaxRegime::Presumido,
            })
            .unwrap();
        let revenue = session
            .register_account(NewAccount {
                code: "3.1.01".into(),
                name: "Service revenue".into(),
                kind: AccountKind::Revenue,
            })
            .unwrap();
        let expense = session
            .register_account(NewAccount {
                code: "4.1.01".into(),
                name: "Supplies".into(),
                kind: AccountKind::Expense,
            })
            .unwrap();
        let cost_center = session
            .register_cost_center(NewCostCenter {
                code: "CC-01".into(),
                name: "Operations".into(),
            })
            .unwrap();

        Fixture {
            session,
            company,
            revenue,
            expense,
            cost_center,
        }
    }

    fn title_request(fx: &Fixture, kind: TitleKind, amount: i64) -> NewTitle {
        let day = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        NewTitle {
            company_id: fx.company,
            kind,
            party_name: "Globex".into(),
            doc_number: format!("NF-{amount}"),
            issue_date: day,
            due_date: day,
            amount: Decimal::from(amount),
            cost_center_id: Some(fx.cost_center),
            account_id: match kind {
                TitleKind::Receivable => fx.revenue,
                TitleKind::Payable => fx.expense,
            },
        }
    }

    #[test]
    fn create_title_posts_exactly_one_entry() {
        let fx = fixture();
        let id = fx
            .session
            .create_title(title_request(&fx, TitleKind::Receivable, 1500))
            .unwrap();

        let ledger = fx.session.get_ledger();
        assert_eq!(ledger.len(), 1);
        let entry = &ledger[0];
        assert_eq!(entry.origin_type, TITLE_ORIGIN);
        assert_eq!(entry.origin_id, Some(id.get()));
        assert_eq!(entry.credit, Decimal::from(1500));
        assert_eq!(entry.debit, Decimal::ZERO);
        assert_eq!(entry.account_code, "3.1.01");
        assert_eq!(entry.company_id, fx.company);
        assert_eq!(entry.cost_center_id, Some(fx.cost_center));

        let title = fx.session.title(id).unwrap();
        assert_eq!(title.status, TitleStatus::Open);
    }

    #[test]
    fn title_ids_are_sequential() {
        let fx = fixture();
        let ids: Vec<TitleId> = [100, 200, 300]
            .into_iter()
            .map(|amount| {
                fx.session
                    .create_title(title_request(&fx, TitleKind::Payable, amount))
                    .unwrap()
            })
            .collect();

        assert_eq!(ids, vec![TitleId::new(1), TitleId::new(2), TitleId::new(3)]);
    }

    #[test]
    fn invalid_title_consumes_no_identifier() {
        let fx = fixture();
        let events_before = fx.session.events().len();

        let err = fx
            .session
            .create_title(title_request(&fx, TitleKind::Payable, 0))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let id = fx
            .session
            .create_title(title_request(&fx, TitleKind::Payable, 10))
            .unwrap();
        assert_eq!(id, TitleId::new(1));
        assert_eq!(fx.session.events().len(), events_before + 2);
    }

    #[test]
    fn unknown_account_is_not_found_and_leaves_nothing_behind() {
        let fx = fixture();
        let mut req = title_request(&fx, TitleKind::Receivable, 10);
        req.account_id = AccountId::new(99);
        let events_before = fx.session.events().len();

        let err = fx.session.create_title(req).unwrap_err();
        assert_eq!(err, DomainError::not_found("Account", 99));
        assert!(fx.session.titles().is_empty());
        assert!(fx.session.get_ledger().is_empty());
        assert_eq!(fx.session.events().len(), events_before);
    }

    #[test]
    fn oversized_amounts_never_reach_the_ledger() {
        let fx = fixture();
        for _ in 0..2 {
            let mut req = title_request(&fx, TitleKind::Receivable, 1);
            req.amount = Decimal::MAX;
            assert!(matches!(
                fx.session.create_title(req),
                Err(DomainError::InvalidInput(_))
            ));
        }

        for _ in 0..2 {
            let mut req = title_request(&fx, TitleKind::Receivable, 1);
            req.amount = MAX_TITLE_AMOUNT;
            fx.session.create_title(req).unwrap();
        }

        let rows = fx.session.get_trial_balance();
        assert_eq!(rows[0].credit_total, MAX_TITLE_AMOUNT * Decimal::TWO);
        assert_eq!(
            fx.session.portfolio_summary().receivable_total,
            MAX_TITLE_AMOUNT * Decimal::TWO
        );
    }

    #[test]
    fn rejected_posting_rolls_back_the_title() {
        let fx = fixture();
        // An entry already claiming title 1 makes the next posting a duplicate.
        let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        fx.session
            .write()
            .records
            .ledger
            .append(LedgerEntry {
                id: LedgerEntryId::new(0),
                company_id: fx.company,
                date: day,
                account_code: "3.1.01".into(),
                cost_center_id: None,
                debit: Decimal::ZERO,
                credit: Decimal::ONE,
                history: "opening balance".into(),
                origin_type: TITLE_ORIGIN.into(),
                origin_id: Some(1),
            })
            .unwrap();
        let events_before = fx.session.events();
        let sub = fx.session.subscribe();

        let err = fx
            .session
            .create_title(title_request(&fx, TitleKind::Receivable, 250))
            .unwrap_err();

        assert!(matches!(err, DomainError::PostingFailed(_)));
        assert!(fx.session.titles().is_empty());
        assert_eq!(
            fx.session.title(TitleId::new(1)).unwrap_err(),
            DomainError::not_found("FinancialTitle", 1)
        );
        assert_eq!(fx.session.get_ledger().len(), 1);
        assert_eq!(fx.session.events(), events_before);
        assert!(sub.drain().is_empty());

        // Identifiers drawn by the failed attempt are handed out again.
        fx.session.write().records.ledger = Ledger::new();
        let id = fx
            .session
            .create_title(title_request(&fx, TitleKind::Receivable, 250))
            .unwrap();
        assert_eq!(id, TitleId::new(1));
        assert_eq!(fx.session.get_ledger()[0].id, LedgerEntryId::new(1));
        let resumed = &fx.session.events()[events_before.len()];
        assert_eq!(resumed.id.get(), events_before.len() as u64 + 1);
    }

    #[test]
    fn strict_mode_checks_company_and_cost_center() {
        let fx = fixture();

        let mut req = title_request(&fx, TitleKind::Receivable, 10);
        req.company_id = CompanyId::new(42);
        assert_eq!(
            fx.session.create_title(req).unwrap_err(),
            DomainError::not_found("Company", 42)
        );

        let mut req = title_request(&fx, TitleKind::Receivable, 10);
        req.cost_center_id = Some(CostCenterId::new(7));
        assert_eq!(
            fx.session.create_title(req).unwrap_err(),
            DomainError::not_found("CostCenter", 7)
        );
    }

    #[test]
    fn relaxed_mode_only_needs_the_account() {
        let session = Session::with_config(SessionConfig {
            strict_references: false,
        });
        let account = session
            .register_account(NewAccount {
                code: "1".into(),
                name: "Cash".into(),
                kind: AccountKind::Asset,
            })
            .unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let id = session
            .create_title(NewTitle {
                company_id: CompanyId::new(5),
                kind: TitleKind::Payable,
                party_name: String::new(),
                doc_number: "X-1".into(),
                issue_date: day,
                due_date: day,
                amount: Decimal::ONE,
                cost_center_id: None,
                account_id: account,
            })
            .unwrap();

        assert_eq!(id, TitleId::new(1));
    }

    #[test]
    fn duplicate_account_code_is_rejected() {
        let fx = fixture();
        let err = fx
            .session
            .register_account(NewAccount {
                code: "3.1.01".into(),
                name: "Duplicate".into(),
                kind: AccountKind::Revenue,
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(fx.session.accounts().len(), 2);
    }

    #[test]
    fn evaluate_tax_resolves_rule() {
        let fx = fixture();
        let rule = fx
            .session
            .register_tax_rule(NewTaxRule {
                name: "ICMS SP".into(),
                tax_type: TaxType::Icms,
                aliquot: Decimal::from(18),
                cfop: "5102".into(),
                cst: "00".into(),
            })
            .unwrap();

        assert_eq!(
            fx.session.evaluate_tax(Decimal::from(1000), rule).unwrap(),
            Decimal::from(180)
        );
        assert_eq!(
            fx.session
                .evaluate_tax(Decimal::from(1000), TaxRuleId::new(9))
                .unwrap_err(),
            DomainError::not_found("TaxRule", 9)
        );
        assert!(matches!(
            fx.session.evaluate_tax(Decimal::NEGATIVE_ONE, rule),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn applicable_workflows_follow_registration_order() {
        let fx = fixture();
        for (name, min) in [("director", 50_000), ("manager", 5000)] {
            fx.session
                .register_workflow_rule(NewWorkflowRule {
                    name: name.into(),
                    entity_type: "PurchaseOrder".into(),
                    min_value: Decimal::from(min),
                    approvals_required: 1,
                })
                .unwrap();
        }

        let names: Vec<String> = fx
            .session
            .find_applicable_workflows("PurchaseOrder", Decimal::from(60_000))
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["director", "manager"]);
        assert!(
            fx.session
                .find_applicable_workflows("PurchaseOrder", Decimal::from(4999))
                .is_empty()
        );
    }

    #[test]
    fn every_registration_is_journaled() {
        let fx = fixture();
        let labels: Vec<String> = fx
            .session
            .events()
            .into_iter()
            .map(|e| e.entity_type)
            .collect();

        assert_eq!(labels, vec!["Company", "Account", "Account", "CostCenter"]);
    }

    #[test]
    fn audit_records_are_kept_outside_the_event_journal() {
        let fx = fixture();
        let events_before = fx.session.events().len();

        let id = fx
            .session
            .record_audit(NewAudit {
                user_name: "cfo".into(),
                action: "raised credit limit".into(),
                entity_type: Some("Customer".into()),
                entity_id: Some(3),
            })
            .unwrap();

        assert_eq!(id, AuditId::new(1));
        assert_eq!(fx.session.audit_log()[0].entity_id, Some(3));
        assert_eq!(fx.session.events().len(), events_before);
    }

    #[test]
    fn unknown_title_lookup_is_not_found() {
        let fx = fixture();
        assert_eq!(
            fx.session.title(TitleId::new(1)).unwrap_err(),
            DomainError::not_found("FinancialTitle", 1)
        );
    }

    #[test]
    fn customers_need_an_existing_company() {
        let fx = fixture();
        let err = fx
            .session
            .register_customer(NewCustomer {
                name: "Initech".into(),
                doc: "123".into(),
                kind: erpcore_masterdata::CustomerKind::Business,
                company_id: CompanyId::new(8),
            })
            .unwrap_err();

        assert_eq!(err, DomainError::not_found("Company", 8));
        assert!(fx.session.customers().is_empty());
    }
}
