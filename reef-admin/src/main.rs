//! Reef Admin CLI
//!
//! Headless entry point for the admin console: logs in against the backend,
//! then loads and logs a dashboard snapshot, optionally refreshing on an
//! interval.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use reef_admin::views::dashboard::{self, DashboardSnapshot};
use reef_admin::Refresher;
use reef_client::{ClientConfig, SessionStore};

#[derive(Debug, Parser)]
#[command(name = "reef-admin", about = "Admin console for the Reef platform")]
struct Args {
    /// Directory holding the session file
    #[arg(long, env = "REEF_DATA_DIR", default_value = ".reef")]
    data_dir: PathBuf,

    /// Login with this phone number before loading (password read from
    /// REEF_PASSWORD or prompted on stdin)
    #[arg(long, value_name = "PHONE")]
    login: Option<String>,

    /// Forget the stored session and exit
    #[arg(long)]
    logout: bool,

    /// Keep refreshing the snapshot on an interval
    #[arg(long)]
    watch: bool,

    /// Refresh interval in seconds for --watch
    #[arg(long, default_value_t = 30)]
    interval: u64,
}

fn read_password() -> anyhow::Result<String> {
    if let Ok(password) = std::env::var("REEF_PASSWORD") {
        return Ok(password);
    }
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn log_snapshot(snapshot: &DashboardSnapshot) {
    tracing::info!(
        products = snapshot.products,
        orders = snapshot.orders,
        users = snapshot.users,
        revenue = snapshot.revenue,
        pending_role_requests = snapshot.pending_role_requests,
        "Dashboard snapshot"
    );
    for order in &snapshot.recent_activity {
        tracing::info!(
            id = order.id,
            customer = order.user_name.as_deref().unwrap_or("User"),
            status = %order.status,
            amount = order.total_amount,
            created_at = %order.created_at,
            "Recent order"
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    let mut session =
        SessionStore::load(&args.data_dir).context("Failed to load session store")?;

    if args.logout {
        session.clear()?;
        tracing::info!("Session cleared");
        return Ok(());
    }

    let config = ClientConfig::from_env();
    tracing::debug!(base_url = %config.base_url, "Resolved backend");

    if let Some(phone) = &args.login {
        let password = read_password()?;
        let client = config.clone().build_http_client();
        let response = client.login(phone, &password).await?;
        session.set_token(&response.access_token)?;
        tracing::info!("Login successful");
    }

    if !session.is_authenticated() {
        bail!("Not authenticated; run with --login <PHONE> first");
    }

    let client = Arc::new(
        config
            .build_http_client()
            .with_token(session.token().unwrap_or_default()),
    );

    let snapshot = dashboard::load(client.as_ref()).await;
    log_snapshot(&snapshot);

    if args.watch {
        let state = Arc::new(RwLock::new(snapshot));
        let period = Duration::from_secs(args.interval.max(1));

        let loader_client = Arc::clone(&client);
        let refresher = Refresher::spawn(period, Arc::clone(&state), move || {
            let client = Arc::clone(&loader_client);
            async move { Ok::<_, reef_client::ClientError>(dashboard::load(client.as_ref()).await) }
        });

        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    log_snapshot(&*state.read().await);
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutting down");
                    refresher.stop();
                    break;
                }
            }
        }
    }

    Ok(())
}
