//! Personal portfolio website - server entry point.

#[cfg(feature = "server")]
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting portfolio site v{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("PORTFOLIO_GIT_SHA")
    );

    // Load configuration
    let config = portfolio_site::config::load_config()?;
    tracing::info!("Listening on http://{}:{}", config.bind, config.port);

    // The fullstack server reads its bind address from IP/PORT
    std::env::set_var("IP", &config.bind);
    std::env::set_var("PORT", config.port.to_string());

    dioxus::launch(portfolio_site::app::App);

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(portfolio_site::app::App);
}
