use std::sync::Arc;
use time::{Date, OffsetDateTime};

use crate::config::Config;
use crate::finance::FinanceManager;
use crate::models::{Appointment, Debt, PublicUser, Transaction, TransactionKind};
use crate::session::{AuthError, SessionManager, UserUpdate};
use crate::storage::{FileStore, SharedStore, WriteQueue};

/// Composes the session and finance managers over one shared store so the
/// identity-change protocol lives in a single place: a successful login or
/// registration loads that identity's snapshot, logout clears it.
///
/// This is the only type the presentation layer needs to talk to.
pub struct AppState {
    session: SessionManager,
    finance: FinanceManager,
    writes: WriteQueue,
}

impl AppState {
    /// Must be called from within a tokio runtime; spawns the writer task.
    pub fn new(store: SharedStore) -> Self {
        let writes = WriteQueue::start(store.clone());
        AppState {
            session: SessionManager::new(store.clone(), writes.clone()),
            finance: FinanceManager::new(store, writes.clone()),
            writes,
        }
    }

    /// Opens a file-backed store under the configured data directory.
    pub async fn open(config: &Config) -> anyhow::Result<Self> {
        let store: SharedStore = Arc::new(FileStore::open(&config.data_path).await?);
        Ok(Self::new(store))
    }

    /// Loads the identity directory. Login and registration fail with
    /// [`AuthError::NotReady`] until this completes.
    pub async fn init(&mut self) {
        self.session.init().await;
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        let user = self.session.login(email, password)?;
        self.finance.set_current_user(Some(&user.id)).await;
        Ok(user)
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PublicUser, AuthError> {
        let user = self.session.register(name, email, password)?;
        self.finance.set_current_user(Some(&user.id)).await;
        Ok(user)
    }

    pub async fn logout(&mut self) {
        self.session.logout();
        self.finance.set_current_user(None).await;
    }

    pub fn update_user(&mut self, update: UserUpdate) -> bool {
        self.session.update_user(update)
    }

    pub fn current_user(&self) -> Option<PublicUser> {
        self.session.current_user()
    }

    pub fn add_debt(&mut self, description: &str, amount: f64, due_date: Date) -> Option<Debt> {
        self.finance.add_debt(description, amount, due_date)
    }

    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        description: &str,
        date: Option<Date>,
        linked_debt_id: Option<String>,
    ) -> Option<Transaction> {
        self.finance
            .add_transaction(kind, amount, description, date, linked_debt_id)
    }

    pub fn add_appointment(
        &mut self,
        service_name: &str,
        date: OffsetDateTime,
    ) -> Option<Appointment> {
        self.finance.add_appointment(service_name, date)
    }

    pub fn delete_debt(&mut self, id: &str) -> bool {
        self.finance.delete_debt(id)
    }

    pub fn delete_transaction(&mut self, id: &str) -> bool {
        self.finance.delete_transaction(id)
    }

    pub fn clear_debts(&mut self) {
        self.finance.clear_debts();
    }

    pub fn clear_transactions(&mut self) {
        self.finance.clear_transactions();
    }

    pub fn clear_appointments(&mut self) {
        self.finance.clear_appointments();
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn finance(&self) -> &FinanceManager {
        &self.finance
    }

    /// Waits for every persistence write enqueued so far to be applied.
    /// Mainly for tests; normal operation is fire-and-forget.
    pub async fn flush(&self) {
        self.writes.flush().await;
    }
}
