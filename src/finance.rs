use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::constants::*;
use crate::models::{
    Appointment, AppointmentStatus, Debt, DebtStatus, Transaction, TransactionKind, UserData,
};
use crate::storage::{SharedStore, WriteQueue};

/// Owns the signed-in user's debts, transactions and appointments.
///
/// Collections are newest-first. Every successful mutation enqueues a full
/// [`UserData`] snapshot write under the identity-scoped key; writes only
/// happen once the identity's snapshot has finished loading, so a snapshot
/// can never be clobbered with half-loaded state. With nobody signed in the
/// collections are empty and every mutation is a silent no-op.
pub struct FinanceManager {
    store: SharedStore,
    writes: WriteQueue,
    debts: Vec<Debt>,
    transactions: Vec<Transaction>,
    appointments: Vec<Appointment>,
    current_user: Option<String>,
    loaded: bool,
}

impl FinanceManager {
    pub fn new(store: SharedStore, writes: WriteQueue) -> Self {
        FinanceManager {
            store,
            writes,
            debts: Vec::new(),
            transactions: Vec::new(),
            appointments: Vec::new(),
            current_user: None,
            loaded: false,
        }
    }

    /// Identity-change protocol. `Some(id)` loads that identity's persisted
    /// snapshot, seeding the sample data when none exists; `None` (logout)
    /// clears everything without writing to storage.
    pub async fn set_current_user(&mut self, user_id: Option<&str>) {
        match user_id {
            Some(id) => {
                let data = self.load_user_data(id).await;
                self.debts = data.debts;
                self.transactions = data.transactions;
                self.appointments = data.appointments;
                self.current_user = Some(id.to_string());
                self.loaded = true;
            }
            None => {
                self.debts.clear();
                self.transactions.clear();
                self.appointments.clear();
                self.current_user = None;
                self.loaded = false;
            }
        }
    }

    async fn load_user_data(&self, user_id: &str) -> UserData {
        let key = user_data_key(user_id);
        match self.store.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(e) => {
                    log::error!("corrupt snapshot under {}: {}", key, e);
                    seed_user_data()
                }
            },
            Ok(None) => seed_user_data(),
            Err(e) => {
                log::error!("failed to load snapshot {}: {}", key, e);
                seed_user_data()
            }
        }
    }

    /// Negative amounts are clamped to zero; status starts as `Pending`.
    pub fn add_debt(&mut self, description: &str, amount: f64, due_date: Date) -> Option<Debt> {
        if !self.is_active() {
            return None;
        }

        let debt = Debt {
            id: Uuid::new_v4().to_string(),
            description: description.to_string(),
            amount: amount.max(0.0),
            due_date,
            status: DebtStatus::Pending,
        };
        self.debts.insert(0, debt.clone());
        self.persist();
        Some(debt)
    }

    /// A missing `date` defaults to today. An expense linked to an existing
    /// debt also pays that debt down, floored at zero; a link to an unknown
    /// debt id is recorded but the pay-down step is skipped.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        description: &str,
        date: Option<Date>,
        linked_debt_id: Option<String>,
    ) -> Option<Transaction> {
        if !self.is_active() {
            return None;
        }

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            kind,
            amount,
            date: date.unwrap_or_else(|| OffsetDateTime::now_utc().date()),
            description: description.to_string(),
            linked_debt_id,
        };
        self.transactions.insert(0, transaction.clone());

        if transaction.kind == TransactionKind::Expense {
            if let Some(debt_id) = transaction.linked_debt_id.as_deref() {
                if let Some(debt) = self.debts.iter_mut().find(|d| d.id == debt_id) {
                    debt.amount = (debt.amount - transaction.amount).max(0.0);
                }
            }
        }

        self.persist();
        Some(transaction)
    }

    pub fn add_appointment(
        &mut self,
        service_name: &str,
        date: OffsetDateTime,
    ) -> Option<Appointment> {
        if !self.is_active() {
            return None;
        }

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            service_name: service_name.to_string(),
            date,
            status: AppointmentStatus::Confirmed,
        };
        self.appointments.insert(0, appointment.clone());
        self.persist();
        Some(appointment)
    }

    /// Removes the matching debt, if any. Transactions that were linked to
    /// it keep their reference; the link is simply left dangling.
    pub fn delete_debt(&mut self, id: &str) -> bool {
        let before = self.debts.len();
        self.debts.retain(|d| d.id != id);
        if self.debts.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Removes the matching transaction. Any debt pay-down it caused is not
    /// reversed.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            return false;
        }
        self.persist();
        true
    }

    pub fn clear_debts(&mut self) {
        self.debts.clear();
        self.persist();
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
        self.persist();
    }

    pub fn clear_appointments(&mut self) {
        self.appointments.clear();
        self.persist();
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Sum of income and sum of expense amounts, in that order.
    pub fn totals(&self) -> (f64, f64) {
        let mut income = 0.0;
        let mut expense = 0.0;
        for transaction in &self.transactions {
            match transaction.kind {
                TransactionKind::Income => income += transaction.amount,
                TransactionKind::Expense => expense += transaction.amount,
            }
        }
        (income, expense)
    }

    pub fn balance(&self) -> f64 {
        let (income, expense) = self.totals();
        income - expense
    }

    fn is_active(&self) -> bool {
        self.loaded && self.current_user.is_some()
    }

    fn persist(&self) {
        let Some(user_id) = self.current_user.as_deref() else {
            return;
        };
        if !self.loaded {
            return;
        }

        let snapshot = UserData {
            debts: self.debts.clone(),
            transactions: self.transactions.clone(),
            appointments: self.appointments.clone(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(payload) => self.writes.enqueue(&user_data_key(user_id), payload),
            Err(e) => log::error!("failed to serialize snapshot for {}: {}", user_id, e),
        }
    }
}

pub fn user_data_key(user_id: &str) -> String {
    format!("{USER_DATA_KEY_PREFIX}{user_id}")
}

/// Fixed first-run sample data: two pending debts, a salary and a rent
/// payment (linked to the loan debt), and one confirmed appointment.
pub fn seed_user_data() -> UserData {
    UserData {
        debts: vec![
            Debt {
                id: "1".to_string(),
                description: SEED_DEBT_LOAN.to_string(),
                amount: 5000.0,
                due_date: date!(2024 - 12 - 01),
                status: DebtStatus::Pending,
            },
            Debt {
                id: "2".to_string(),
                description: SEED_DEBT_CARD.to_string(),
                amount: 1200.0,
                due_date: date!(2024 - 09 - 15),
                status: DebtStatus::Pending,
            },
        ],
        transactions: vec![
            Transaction {
                id: "1".to_string(),
                kind: TransactionKind::Income,
                amount: 3000.0,
                date: date!(2024 - 08 - 01),
                description: SEED_TRANSACTION_SALARY.to_string(),
                linked_debt_id: None,
            },
            Transaction {
                id: "2".to_string(),
                kind: TransactionKind::Expense,
                amount: 500.0,
                date: date!(2024 - 08 - 05),
                description: SEED_TRANSACTION_RENT.to_string(),
                linked_debt_id: Some("1".to_string()),
            },
        ],
        appointments: vec![Appointment {
            id: "1".to_string(),
            service_name: SEED_APPOINTMENT_SERVICE.to_string(),
            date: datetime!(2024-08-25 14:00 UTC),
            status: AppointmentStatus::Confirmed,
        }],
    }
}
