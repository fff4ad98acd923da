//! Admin session controller. It owns the in-memory credentials and the panel
//! state, and pushes every state change to an [`AdminView`]. The login probe
//! doubles as the first pending-list load. Any 401 discards the credentials and
//! returns the panel to the login form.
//!
//! Every login and every teardown starts a new session generation. A reply is
//! only applied if the generation it was requested under is still current, so a
//! late answer from an ended session never touches the next one.
//!
//! State only changes on the UI thread; `RefCell` borrows are never held
//! across an `.await`.

use crate::{
    app_lib::{AppError, HttpClient},
    features::moderation::{
        client::AdminClient,
        credentials::Credentials,
        types::Decision,
        view::ListView,
    },
};
use std::cell::{Cell, RefCell};
use tracing::{debug, error, info, warn};

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const LOGIN_LABEL: &str = "Login";
pub const LOGGING_IN_LABEL: &str = "Logging in...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggingIn,
    LoggedIn,
}

/// Everything the admin page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminPanel {
    pub state: SessionState,
    pub login_error: Option<String>,
    pub action_error: Option<String>,
    pub pending: ListView,
}

impl AdminPanel {
    pub fn login_form_visible(&self) -> bool {
        self.state != SessionState::LoggedIn
    }

    pub fn admin_visible(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    pub fn login_disabled(&self) -> bool {
        self.state == SessionState::LoggingIn
    }

    pub fn login_label(&self) -> &'static str {
        if self.login_disabled() {
            LOGGING_IN_LABEL
        } else {
            LOGIN_LABEL
        }
    }
}

/// Receives a snapshot after every panel change.
pub trait AdminView {
    fn show(&self, panel: &AdminPanel);
}

/// Credentials of one login attempt, bound to the session generation that
/// started it.
pub struct LoginAttempt {
    credentials: Credentials,
    generation: u64,
}

pub struct SessionController<C, V> {
    client: AdminClient<C>,
    view: V,
    credentials: RefCell<Option<Credentials>>,
    panel: RefCell<AdminPanel>,
    generation: Cell<u64>,
}

impl<C: HttpClient, V: AdminView> SessionController<C, V> {
    pub fn new(http: C, view: V) -> Self {
        Self {
            client: AdminClient::new(http),
            view,
            credentials: RefCell::new(None),
            panel: RefCell::new(AdminPanel::default()),
            generation: Cell::new(0),
        }
    }

    pub fn panel(&self) -> AdminPanel {
        self.panel.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.borrow().is_some()
    }

    /// Logs in and renders the pending list on success.
    pub async fn submit_login(&self, username: &str, password: &str) {
        if let Some(attempt) = self.begin_login(username, password) {
            self.finish_login(attempt).await;
        }
    }

    /// Synchronous half of the login: stores the credentials and disables the
    /// login control before any request is made. Returns `None` while another
    /// attempt is still in flight.
    pub fn begin_login(&self, username: &str, password: &str) -> Option<LoginAttempt> {
        if self.panel.borrow().state == SessionState::LoggingIn {
            debug!("login already in progress");
            return None;
        }

        let credentials = Credentials::new(username, password);
        *self.credentials.borrow_mut() = Some(credentials.clone());
        let generation = self.next_generation();
        self.update(|panel| {
            panel.state = SessionState::LoggingIn;
            panel.login_error = None;
        });
        Some(LoginAttempt {
            credentials,
            generation,
        })
    }

    /// Probes the pending endpoint with the attempt's credentials. The outcome
    /// is dropped if the attempt was superseded by a logout or another login.
    pub async fn finish_login(&self, attempt: LoginAttempt) {
        let result = self.client.list_pending(&attempt.credentials).await;
        if !self.is_current(attempt.generation) {
            debug!("login outcome dropped, session changed");
            return;
        }

        match result {
            Ok(messages) => {
                info!(pending = messages.len(), "admin login succeeded");
                self.update(|panel| {
                    panel.state = SessionState::LoggedIn;
                    panel.action_error = None;
                    panel.pending = ListView::render(&messages);
                });
            }
            Err(err) => {
                warn!(error = %err, "admin login failed");
                let message = if err.is_unauthorized() {
                    INVALID_CREDENTIALS
                } else {
                    LOGIN_FAILED
                };
                self.teardown(Some(message));
            }
        }
    }

    /// Reloads the pending list with the held credentials. Does nothing when
    /// logged out.
    pub async fn load_pending_messages(&self) {
        let Some(credentials) = self.current_credentials() else {
            debug!("refresh skipped without credentials");
            return;
        };

        let generation = self.generation.get();
        let result = self.client.list_pending(&credentials).await;
        if !self.is_current(generation) {
            debug!("pending list dropped, session changed");
            return;
        }

        match result {
            Ok(messages) => self.update(|panel| panel.pending = ListView::render(&messages)),
            Err(AppError::Unauthorized) => {
                error!("Error loading messages: credentials rejected");
                self.teardown(Some(INVALID_CREDENTIALS));
            }
            Err(err) => {
                error!(error = %err, "Error loading messages");
                self.update(|panel| panel.pending = ListView::Failed);
            }
        }
    }

    pub async fn approve_message(&self, id: i64) {
        self.decide(id, Decision::Approve).await;
    }

    pub async fn reject_message(&self, id: i64) {
        self.decide(id, Decision::Reject).await;
    }

    /// Drops the credentials and returns to the login form.
    pub fn logout(&self) {
        info!("admin logged out");
        self.teardown(None);
    }

    async fn decide(&self, id: i64, decision: Decision) {
        let Some(credentials) = self.current_credentials() else {
            debug!(id, ?decision, "decision skipped without credentials");
            return;
        };

        let generation = self.generation.get();
        self.update(|panel| panel.action_error = None);
        let result = self.client.decide(&credentials, id, decision).await;
        if !self.is_current(generation) {
            debug!(id, ?decision, "decision outcome dropped, session changed");
            return;
        }

        match result {
            Ok(()) => {
                info!(id, ?decision, "moderation decision applied");
                self.load_pending_messages().await;
            }
            Err(AppError::Unauthorized) => {
                warn!(id, ?decision, "moderation decision rejected credentials");
                self.teardown(Some(INVALID_CREDENTIALS));
            }
            Err(err) => {
                error!(id, ?decision, error = %err, "moderation decision failed");
                self.update(|panel| {
                    panel.action_error = Some(decision.failure_message().to_string());
                });
            }
        }
    }

    fn current_credentials(&self) -> Option<Credentials> {
        self.credentials.borrow().clone()
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn teardown(&self, login_error: Option<&str>) {
        self.credentials.borrow_mut().take();
        self.next_generation();
        self.update(|panel| {
            *panel = AdminPanel {
                login_error: login_error.map(str::to_string),
                ..AdminPanel::default()
            };
        });
    }

    fn update(&self, change: impl FnOnce(&mut AdminPanel)) {
        let snapshot = {
            let mut panel = self.panel.borrow_mut();
            change(&mut panel);
            panel.clone()
        };
        self.view.show(&snapshot);
    }
}
