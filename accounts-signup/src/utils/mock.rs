use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use accounts_client::{AccountError, SignUpOptions, SignUpResponse};

use crate::{
    client::AccountClient,
    metrics::{Event, Metrics},
    router::{Route, Router},
};

/// Scripted accounts service. Responses must be mocked in the right
/// order, one per call; every call is recorded. A held client parks
/// each call on its gate until the test notifies it, which lets tests
/// observe an in-flight submission.
#[derive(Debug)]
pub struct MockAccountClient {
    responses: Mutex<Vec<Result<SignUpResponse, AccountError>>>,
    calls: Mutex<Vec<(String, String, SignUpOptions)>>,
    gate: Option<Arc<Notify>>,
}

impl MockAccountClient {
    pub fn new(responses: Vec<Result<SignUpResponse, AccountError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn held(responses: Vec<Result<SignUpResponse, AccountError>>) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let client = Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
            gate: Some(gate.clone()),
        };
        (client, gate)
    }

    /// The `(email, password, options)` of every call received so far.
    pub fn calls(&self) -> Vec<(String, String, SignUpOptions)> {
        self.calls.lock().expect("poisoned").clone()
    }
}

#[async_trait]
impl AccountClient for MockAccountClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        options: &SignUpOptions,
    ) -> Result<SignUpResponse, AccountError> {
        self.calls
            .lock()
            .expect("poisoned")
            .push((email.to_string(), password.to_string(), *options));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let mut responses = self.responses.lock().expect("poisoned");
        if responses.is_empty() {
            panic!("mock accounts service ran out of scripted responses");
        }
        responses.remove(0)
    }
}

/// Records requested navigations instead of switching screens.
#[derive(Debug, Default)]
pub struct MockRouter {
    routes: Mutex<Vec<Route>>,
}

impl MockRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.routes.lock().expect("poisoned").clone()
    }
}

impl Router for MockRouter {
    fn navigate(&self, route: Route) {
        self.routes.lock().expect("poisoned").push(route);
    }
}

/// Records emitted telemetry events.
#[derive(Debug, Default)]
pub struct MockMetrics {
    events: Mutex<Vec<Event>>,
}

impl MockMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("poisoned").clone()
    }
}

impl Metrics for MockMetrics {
    fn log_event(&self, event: Event) {
        self.events.lock().expect("poisoned").push(event);
    }
}
