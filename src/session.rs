use uuid::Uuid;

use crate::constants::*;
use crate::models::{PublicUser, User};
use crate::storage::{SharedStore, WriteQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The identity directory has not finished its initial load yet.
    NotReady,
    InvalidCredentials,
    EmailAlreadyInUse,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::NotReady => write!(f, "Identity directory is still loading"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::EmailAlreadyInUse => write!(f, "Email is already in use"),
        }
    }
}

impl std::error::Error for AuthError {}

/// A partial profile edit. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub password: Option<String>,
}

/// Owns the authenticated identity and the simulated user directory.
///
/// The directory is loaded once via [`SessionManager::init`]; until then
/// `login` and `register` fail with [`AuthError::NotReady`]. Directory
/// changes (registration, profile edits) are written back through the
/// [`WriteQueue`] without blocking the caller.
pub struct SessionManager {
    store: SharedStore,
    writes: WriteQueue,
    users: Vec<User>,
    current: Option<User>,
    loaded: bool,
}

impl SessionManager {
    pub fn new(store: SharedStore, writes: WriteQueue) -> Self {
        SessionManager {
            store,
            writes,
            users: Vec::new(),
            current: None,
            loaded: false,
        }
    }

    /// Loads the identity directory from storage. A missing key, a failed
    /// read, or a corrupt payload all fall back to the seeded default
    /// identity.
    pub async fn init(&mut self) {
        self.users = match self.store.get(USERS_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(users) => users,
                Err(e) => {
                    log::error!("corrupt identity directory, reseeding: {}", e);
                    default_users()
                }
            },
            Ok(None) => default_users(),
            Err(e) => {
                log::error!("failed to load identity directory: {}", e);
                default_users()
            }
        };
        self.loaded = true;
    }

    /// Email matching is case-insensitive; the password must match exactly.
    /// The current identity is untouched on failure. Login never persists.
    pub fn login(&mut self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        if !self.loaded {
            return Err(AuthError::NotReady);
        }

        let found = self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
            .cloned();

        match found {
            Some(user) => {
                let public = PublicUser::from(&user);
                self.current = Some(user);
                Ok(public)
            }
            None => Err(AuthError::InvalidCredentials),
        }
    }

    /// Creates a new identity with a generated id and a placeholder avatar
    /// derived from the email, persists the directory, and signs the new
    /// identity in.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PublicUser, AuthError> {
        if !self.loaded {
            return Err(AuthError::NotReady);
        }
        if self.users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(AuthError::EmailAlreadyInUse);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: format!("{}{}", AVATAR_URL_BASE, email),
            password: password.to_string(),
        };

        self.users.push(user.clone());
        self.persist_directory();

        let public = PublicUser::from(&user);
        self.current = Some(user);
        Ok(public)
    }

    /// Clears the current identity. The directory is untouched and nothing
    /// is persisted.
    pub fn logout(&mut self) {
        self.current = None;
    }

    /// Merges the provided fields into the current identity and its
    /// directory entry, then persists the directory. Returns `false` when
    /// nobody is signed in.
    pub fn update_user(&mut self, update: UserUpdate) -> bool {
        let Some(mut user) = self.current.clone() else {
            return false;
        };

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(password) = update.password {
            user.password = password;
        }

        if let Some(entry) = self.users.iter_mut().find(|u| u.id == user.id) {
            *entry = user.clone();
        }
        self.current = Some(user);
        self.persist_directory();
        true
    }

    pub fn current_user(&self) -> Option<PublicUser> {
        self.current.as_ref().map(PublicUser::from)
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.current.as_ref().map(|u| u.id.as_str())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn persist_directory(&self) {
        match serde_json::to_string(&self.users) {
            Ok(payload) => self.writes.enqueue(USERS_KEY, payload),
            Err(e) => log::error!("failed to serialize identity directory: {}", e),
        }
    }
}

fn default_users() -> Vec<User> {
    vec![User {
        id: DEFAULT_USER_ID.to_string(),
        name: DEFAULT_USER_NAME.to_string(),
        email: DEFAULT_USER_EMAIL.to_string(),
        avatar: DEFAULT_USER_AVATAR.to_string(),
        password: DEFAULT_USER_PASSWORD.to_string(),
    }]
}
