// Server loop module
// The server object and its accept loop

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::time::Instant;

use super::connection::accept_connection;
use super::listener::create_listener;
use crate::config::{AppState, Config};
use crate::error::Result;
use crate::logger;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// A bound static file server
///
/// Built once at startup; every connection gets a shared reference to the
/// same `AppState`.
pub struct StaticServer {
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
}

impl StaticServer {
    /// Resolve the root and bind the configured address
    pub fn bind(config: Config) -> Result<Self> {
        let addr = config.socket_addr()?;
        let root = config.resolve_root()?;
        Self::bind_with_state(addr, AppState::new(config, root))
    }

    pub fn bind_with_state(addr: SocketAddr, state: AppState) -> Result<Self> {
        let listener = create_listener(addr)?;
        Ok(Self {
            listener,
            state: Arc::new(state),
            active_connections: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub const fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    pub fn active_connections(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }

    /// Accept connections until `shutdown` resolves, then wait up to
    /// `performance.shutdown_grace` seconds for open connections to finish
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accept_result = self.listener.accept() => {
                    match accept_result {
                        Ok((stream, peer_addr)) => {
                            accept_connection(
                                stream,
                                peer_addr,
                                &self.state,
                                &self.active_connections,
                            );
                        }
                        Err(e) => {
                            logger::log_error(&format!("Failed to accept connection: {e}"));
                        }
                    }
                }

                () = &mut shutdown => {
                    logger::log_shutdown(self.active_connections());
                    break;
                }
            }
        }

        // Stop accepting before draining
        drop(self.listener);

        let grace = Duration::from_secs(self.state.config.performance.shutdown_grace);
        drain_connections(&self.active_connections, grace).await;
        Ok(())
    }
}

/// Wait until no connection is active or `grace` has elapsed
async fn drain_connections(active_connections: &AtomicUsize, grace: Duration) {
    let deadline = Instant::now() + grace;

    loop {
        let remaining = active_connections.load(Ordering::SeqCst);
        if remaining == 0 {
            logger::log_drain_complete();
            return;
        }
        if Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown grace of {}s elapsed with {remaining} connection(s) still open",
                grace.as_secs()
            ));
            return;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
