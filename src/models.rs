use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// An account in the simulated identity directory. The password is kept in
/// plaintext because the whole directory is a local mock, not a real
/// credential store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password: String,
}

/// What the core hands back to callers: a [`User`] without the password.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtStatus {
    Pending,
    Paid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub due_date: Date,
    pub status: DebtStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub date: Date,
    pub description: String,
    /// Set on expenses paying down a debt. Not re-validated after the debt
    /// is deleted, so a dangling id is possible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_debt_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
    Done,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub service_name: String,
    pub date: OffsetDateTime,
    pub status: AppointmentStatus,
}

/// One identity's combined snapshot, stored as JSON under
/// `userData_<user id>` and overwritten in full after every mutation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserData {
    pub debts: Vec<Debt>,
    pub transactions: Vec<Transaction>,
    pub appointments: Vec<Appointment>,
}
