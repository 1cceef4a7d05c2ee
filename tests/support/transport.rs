//! Scripted, call-counting transport.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;

use qfpl::adapter::outbound::fpl::{CacheConfig, LeagueDataClient};
use qfpl::error::FetchError;
use qfpl::port::outbound::Transport;

pub const STUB_ROOT: &str = "http://stub.test/api/";

/// Answers by endpoint path relative to [`STUB_ROOT`]. Unscripted paths
/// answer 404.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, Result<String, FetchError>>>,
    requests: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, body: impl Into<String>) {
        self.routes.lock().insert(path.to_string(), Ok(body.into()));
    }

    pub fn fail(&self, path: &str, error: FetchError) {
        self.routes.lock().insert(path.to_string(), Err(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.requests.lock().iter().filter(|p| *p == path).count()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let path = url.strip_prefix(STUB_ROOT).unwrap_or(url).to_string();
        self.requests.lock().push(path.clone());
        self.routes
            .lock()
            .get(&path)
            .cloned()
            .unwrap_or(Err(FetchError::Status { status: 404 }))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub fn client(stub: &Arc<StubTransport>) -> LeagueDataClient<Arc<StubTransport>> {
    LeagueDataClient::new(
        Arc::clone(stub),
        Url::parse(STUB_ROOT).expect("stub root"),
        CacheConfig::default(),
    )
}
