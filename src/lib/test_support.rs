//! Test transports for controller tests. [`ScriptedClient`] answers from a
//! queue of replies; [`GatedClient`] holds every request until the test
//! releases it, so tests can choose the order in which replies land. Both
//! record every request so tests can assert on headers and paths.

use super::{
    api::{ApiRequest, ApiResponse, HttpClient},
    errors::AppError,
};
use std::{cell::RefCell, collections::VecDeque, rc::Rc};
use tokio::{sync::oneshot, task::yield_now};

/// Shared, ordered log of what happened during a test.
pub type Journal = Rc<RefCell<Vec<String>>>;

#[derive(Clone, Default)]
pub struct ScriptedClient {
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, AppError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    journal: Option<Journal>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a `send <METHOD> <path>` line to the journal on every request.
    pub fn with_journal(journal: &Journal) -> Self {
        Self {
            journal: Some(Rc::clone(journal)),
            ..Self::default()
        }
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, err: AppError) -> &Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for ScriptedClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        if let Some(journal) = &self.journal {
            journal
                .borrow_mut()
                .push(format!("send {:?} {}", request.method, request.path));
        }
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted reply".to_string())))
    }
}

type Gate = oneshot::Sender<Result<ApiResponse, AppError>>;

#[derive(Clone, Default)]
pub struct GatedClient {
    gates: Rc<RefCell<Vec<Option<Gate>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl GatedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// Waits until at least `count` requests have been sent.
    pub async fn wait_for_requests(&self, count: usize) {
        while self.requests.borrow().len() < count {
            yield_now().await;
        }
    }

    /// Answers the request with the given index (in send order), waiting for
    /// it to be sent first.
    pub async fn release(&self, index: usize, status: u16, body: &str) {
        loop {
            let slot = self.gates.borrow_mut().get_mut(index).map(Option::take);
            match slot {
                Some(Some(gate)) => {
                    let _ = gate.send(Ok(ApiResponse {
                        status,
                        body: body.to_string(),
                    }));
                    return;
                }
                Some(None) => panic!("request {index} was already released"),
                None => yield_now().await,
            }
        }
    }
}

impl HttpClient for GatedClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let (gate, reply) = oneshot::channel();
        self.requests.borrow_mut().push(request);
        self.gates.borrow_mut().push(Some(gate));
        reply
            .await
            .unwrap_or_else(|_| Err(AppError::Network("gate dropped".to_string())))
    }
}
