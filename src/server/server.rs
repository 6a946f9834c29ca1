//! Server lifecycle and routing table.

use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::error::{MockError, Result};

/// Versioned API namespace all JSON routes live under.
pub const API_VERSION: &str = "v2";

/// How long shutdown waits for in-flight requests before aborting.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// Per-request deadline; a stuck handler answers 408 instead of hanging.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The mock bill.com API server.
///
/// Owns the listening socket and a guarded lifecycle: `start` and
/// `shutdown` serialize on an internal mutex, so concurrent transitions
/// cannot race. A stopped server can be started again.
pub struct MockServer {
    host: String,
    port: u16,
    state: Mutex<Lifecycle>,
}

enum Lifecycle {
    Stopped,
    Running(Running),
    ShuttingDown,
}

struct Running {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Create a server that will listen on `host:port` once started.
    ///
    /// Port 0 asks the OS for an ephemeral port; the bound address comes
    /// back from [`start`](Self::start).
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            state: Mutex::new(Lifecycle::Stopped),
        }
    }

    /// Bind the listener and start serving in a background task.
    ///
    /// Errors if the server is already running or shutting down, or if
    /// the socket cannot be bound.
    #[tracing::instrument(skip(self), fields(host = %self.host, port = self.port))]
    pub async fn start(&self) -> Result<SocketAddr> {
        let mut state = self.state.lock().await;
        if !matches!(*state, Lifecycle::Stopped) {
            return Err(MockError::AlreadyStarted);
        }

        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr).await.map_err(|source| MockError::Bind {
            addr: addr.clone(),
            source,
        })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| MockError::Bind { addr, source })?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let serve = axum::serve(listener, router()).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(err) = serve.await {
                tracing::error!(error = %err, "mock server failed");
            }
        });

        tracing::info!(addr = %local_addr, "mock server listening");
        *state = Lifecycle::Running(Running {
            addr: local_addr,
            shutdown_tx,
            handle,
        });
        Ok(local_addr)
    }

    /// Address the server is currently bound to, if running.
    pub async fn addr(&self) -> Option<SocketAddr> {
        match &*self.state.lock().await {
            Lifecycle::Running(running) => Some(running.addr),
            _ => None,
        }
    }

    /// Base URL of the running server, if any.
    pub async fn url(&self) -> Option<String> {
        self.addr().await.map(|addr| format!("http://{addr}"))
    }

    /// Gracefully shut the server down.
    ///
    /// Stops accepting connections and waits up to one second for
    /// in-flight requests; stragglers are aborted. A no-op when the
    /// server is not running; failures never abort the sequence.
    #[tracing::instrument(skip(self))]
    pub async fn shutdown(&self) {
        let mut running = {
            let mut state = self.state.lock().await;
            match std::mem::replace(&mut *state, Lifecycle::ShuttingDown) {
                Lifecycle::Running(running) => running,
                other => {
                    // nothing to stop; leave Stopped as Stopped and let a
                    // concurrent shutdown finish on its own
                    *state = other;
                    return;
                }
            }
        };

        let _ = running.shutdown_tx.send(());
        match tokio::time::timeout(SHUTDOWN_TIMEOUT, &mut running.handle).await {
            Ok(_) => tracing::info!("mock server shutdown completed"),
            Err(_) => {
                tracing::warn!("shutdown timed out, aborting in-flight requests");
                running.handle.abort();
                let _ = running.handle.await;
            }
        }

        *self.state.lock().await = Lifecycle::Stopped;
    }
}

/// Build the routing table.
fn router() -> Router {
    let api = Router::new()
        // Login & Logout
        .route("/Login.json", post(handlers::login))
        .route("/Logout.json", post(handlers::logout))
        // Actg class
        .route("/List/ActgClass.json", post(handlers::list_actg_classes))
        // Vendor
        .route("/List/Vendor.json", post(handlers::list_vendors))
        .route("/Crud/Create/Vendor.json", post(handlers::create_vendor))
        .route("/Crud/Read/Vendor.json", post(handlers::read_vendor))
        .route("/Crud/Update/Vendor.json", post(handlers::update_vendor))
        // Bill
        .route("/Crud/Read/Bill.json", post(handlers::read_bill))
        .route("/Crud/Delete/Bill.json", post(handlers::read_bill))
        .route("/Crud/Create/Bill.json", post(handlers::create_bill))
        .route("/Crud/Update/Bill.json", post(handlers::update_bill));

    Router::new()
        .nest(&format!("/api/{API_VERSION}"), api)
        .route("/ping", get(ping))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint, outside the versioned namespace.
async fn ping() -> &'static str {
    "pong"
}
