//! Spawns the real router on a random local port for end-to-end tests.

use std::{collections::HashMap, net::SocketAddr, path::PathBuf};

use quizrooms::{AppState, config::Config, router};
use tokio::task::JoinHandle;

pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with(HashMap::new()).await
    }

    pub async fn spawn_with(mut vars: HashMap<String, String>) -> anyhow::Result<Self> {
        vars.entry("WEB_DIR".to_string()).or_insert_with(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("web")
                .display()
                .to_string()
        });

        let config = Config::from_vars(&vars)?;
        let app = router(AppState::new(config)?);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
