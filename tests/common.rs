#![allow(dead_code, clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, missing_debug_implementations, unreachable_pub)]

use async_trait::async_trait;
use postbox_server::api::{self, AppState};
use postbox_server::services::health_service::HealthService;
use postbox_server::services::mailer::{MailError, Mailer, OutboundEmail};
use postbox_server::services::relay_service::RelayService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Once};

pub const TEST_RECIPIENT: &str = "inbox@example.com";

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("postbox_server=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// Mail provider double: records every send and can be flipped to fail.
#[derive(Debug, Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    failing: AtomicBool,
}

impl MockMailer {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailError::Transport("mock provider down".to_owned()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }

    async fn check(&self) -> Result<(), MailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailError::Transport("mock provider down".to_owned()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub mailer: Arc<MockMailer>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        setup_tracing();

        let mailer = Arc::new(MockMailer::default());
        let state = AppState {
            relay_service: RelayService::new(
                Arc::clone(&mailer) as Arc<dyn Mailer>,
                TEST_RECIPIENT.to_string(),
            ),
            health_service: HealthService::new(Arc::clone(&mailer) as Arc<dyn Mailer>),
        };
        let app = api::app_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { address: format!("http://{addr}"), client: reqwest::Client::new(), mailer }
    }
}
