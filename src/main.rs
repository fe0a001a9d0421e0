use clap::Parser;
use formkit::adapters::submission_store::SubmissionStore;
use formkit::cli::Cli;
use formkit::config::Settings;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("formkit=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    info!(
        "Starting formkit on {}:{} (form action {})",
        settings.server.host, settings.server.port, formkit_core::contact::CONTACT_US_ACTION
    );

    let store = SubmissionStore::new(settings.form.max_submissions);
    let app = formkit::create_app(&settings, store)?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
