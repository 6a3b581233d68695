use plainhttp::config::Config;
use plainhttp::{server, views};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    tracing::info!(
        static_root = %cfg.static_files.root.display(),
        "Starting server"
    );

    tokio::select! {
        res = server::listener::run(&cfg, views::routes()) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
