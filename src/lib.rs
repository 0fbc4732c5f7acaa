//! State-management core for a personal finance and appointment-booking
//! client. Everything is simulated locally: a mock identity directory plus
//! per-user JSON snapshots in key-value storage, no backend.
//!
//! [`AppState`] wires the two stateful services together:
//! [`session::SessionManager`] owns authentication and the identity
//! directory, [`finance::FinanceManager`] owns the signed-in user's debts,
//! transactions and appointments and re-persists the full snapshot after
//! every mutation. Persistence is fire-and-forget through a single
//! [`storage::WriteQueue`], so callers never wait on storage.

pub mod app;
pub mod config;
pub mod constants;
pub mod finance;
pub mod models;
pub mod session;
pub mod storage;
pub mod utils;

pub use app::AppState;
