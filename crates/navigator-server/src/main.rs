use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use navigator_llm::groq::GroqClient;
use navigator_server::config::NavigatorConfig;
use navigator_server::state::AppState;
use navigator_workflow::Workflow;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = NavigatorConfig::from_env()?;

    let client = Arc::new(GroqClient::new(config.groq.clone()));
    let workflow = Workflow::new(client.clone()).with_failure_policy(config.failure_policy);
    info!(
        addr = %config.addr,
        model = client.model(),
        failure_policy = %workflow.failure_policy(),
        transitions = workflow.transitions().len(),
        "starting navigator server"
    );

    let state = AppState::new(workflow, client);

    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, navigator_server::router(state)).await?;
    Ok(())
}
