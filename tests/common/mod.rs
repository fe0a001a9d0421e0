#![allow(dead_code)]

use formkit::adapters::submission_store::SubmissionStore;
use formkit::config::Settings;
use formkit_core::contact::CONTACT_US_ACTION;
use std::net::SocketAddr;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
    pub store: SubmissionStore,
    pub settings: Settings,
}

impl TestServer {
    pub async fn new() -> Self {
        Self::with_settings(Settings::default()).await
    }

    pub async fn with_settings(settings: Settings) -> Self {
        let store = SubmissionStore::new(settings.form.max_submissions);
        let app = formkit::create_app(&settings, store.clone()).unwrap();

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer {
            addr,
            base_url,
            store,
            settings,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn action_url(&self) -> String {
        self.url(CONTACT_US_ACTION)
    }
}
