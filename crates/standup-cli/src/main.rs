use clap::Parser;
use standup_config::StandupConfig;
use standup_core::window::ActivityWindow;

mod pipeline;

/// Post today's standup report from Jira to Slack.
#[derive(Parser)]
#[command(name = "standup", version, about)]
struct Cli {}

#[tokio::main]
async fn main() {
    // Section failures are logged, never turned into a failing exit status.
    if let Err(error) = run().await {
        eprintln!("standup error: {error:#}");
    }
}

async fn run() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing()?;

    tracing::info!("initiating standup report");

    let config = match StandupConfig::load_with_dotenv() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "configuration could not be loaded, no report sent");
            return Ok(());
        }
    };

    let services = match pipeline::Services::from_config(&config) {
        Ok(services) => services,
        Err(error) => {
            tracing::error!(%error, "report cannot be delivered, no report sent");
            return Ok(());
        }
    };
    let window = ActivityWindow::today();
    if pipeline::run(&services, &window).await {
        tracing::info!("report has been sent");
    }
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("STANDUP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
