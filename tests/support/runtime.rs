//! Tokio runtime and Wiremock server helpers for behavioural tests.

use std::cell::RefCell;
use std::rc::Rc;

use prinbox::{ApiBase, TriageError};
use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Path prefix the mock server stands in for, as on GitHub Enterprise.
pub const API_PREFIX: &str = "/api/v3";

/// Runtime handle that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Errors
///
/// Returns [`TriageError::Io`] if the Tokio runtime cannot be created.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, TriageError> {
    if runtime.with_ref(|_| ()).is_none() {
        let created = Runtime::new().map_err(|error| TriageError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        })?;
        runtime.set(SharedRuntime::new(created));
    }

    let shared_runtime = runtime.get().ok_or_else(|| TriageError::Io {
        message: "runtime not initialised after set".to_owned(),
    })?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Mounts `mock` on the server held in `server`.
///
/// # Errors
///
/// Returns [`TriageError::Io`] when the server slot is empty.
pub fn mount(
    runtime: &SharedRuntime,
    server: &Slot<MockServer>,
    mock: Mock,
) -> Result<(), TriageError> {
    server
        .with_ref(|active| runtime.block_on(mock.mount(active)))
        .ok_or_else(|| TriageError::Io {
            message: "mock server not initialised".to_owned(),
        })
}

/// API base pointing at the mock server.
///
/// # Errors
///
/// Returns [`TriageError::InvalidUrl`] if the server URI does not parse.
pub fn api_base_for(server: &MockServer) -> Result<ApiBase, TriageError> {
    ApiBase::parse(&format!("{}{API_PREFIX}", server.uri()))
}
