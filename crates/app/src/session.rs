use std::fs;
use std::path::PathBuf;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use slotbook_client::TokenProvider;
use slotbook_core::models::user::User;

/// The authenticated session: the bearer token and the user it belongs
/// to, persisted together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Persistence behind [`SessionService`].
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// JSON-file store, the platform's localStorage analog.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Failed to read session file {}", self.path.display()))?;
        // A corrupt session file reads as logged out, like a bad stored value.
        Ok(serde_json::from_str(&raw).ok())
    }

    fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        fs::write(&self.path, raw)
            .wrap_err_with(|| format!("Failed to write session file {}", self.path.display()))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).wrap_err_with(|| {
                format!("Failed to remove session file {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

/// Process-wide session state with an explicit lifecycle and a change
/// subscription.
///
/// Every component rendering auth-dependent state subscribes for its
/// lifetime; dropping the receiver unsubscribes. There are no ambient
/// globals: the service is constructed once and injected.
pub struct SessionService {
    store: Box<dyn SessionStore>,
    state: watch::Sender<Option<Session>>,
}

impl SessionService {
    /// Loads whatever session the store holds and starts broadcasting
    /// from there.
    pub fn init(store: Box<dyn SessionStore>) -> Result<Self> {
        let initial = store.load()?;
        let (state, _) = watch::channel(initial);
        Ok(Self { store, state })
    }

    pub fn get(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    /// Persists the session, then notifies subscribers.
    pub fn set(&self, session: Session) -> Result<()> {
        self.store.save(&session)?;
        debug!(user_id = %session.user.id, "session established");
        self.state.send_replace(Some(session));
        Ok(())
    }

    /// Drops the persisted session, then notifies subscribers.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        debug!("session cleared");
        self.state.send_replace(None);
        Ok(())
    }

    /// Change notification; the receiver sees every `set`/`clear` for as
    /// long as it is held.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().as_ref().map(|s| s.user.clone())
    }
}

impl TokenProvider for SessionService {
    fn bearer_token(&self) -> Option<String> {
        self.state.borrow().as_ref().map(|s| s.token.clone())
    }
}
