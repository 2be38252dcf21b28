//! Line-oriented front end: reads `!command argument` lines from stdin and prints each
//! reply as the messages a chat host would deliver.
//!
//! Flags:
//! - `--config <path>` - RON config file (see [`Config::load`])
//! - `--channel <id>` - channel the lines are posted in (default: the command channel)
//! - `--user <name>` - display name of the author (default: `Trainer`)

use pokemmo_dex::config::{parse_channel_id, parse_cli_value};
use pokemmo_dex::{render_reply, Config, Dispatcher, Invocation, LookupEngine};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return Err(e.into());
        }
    };
    info!(?config, "configuration loaded");

    let args: Vec<String> = std::env::args().collect();
    let channel_id = match parse_cli_value(&args, "--channel") {
        Some(value) => parse_channel_id(&value)?,
        None => config.command_channel_id.unwrap_or_default(),
    };
    let author = parse_cli_value(&args, "--user").unwrap_or_else(|| "Trainer".to_string());

    let dispatcher = Dispatcher::new(LookupEngine::new(config.data_store()), config.gate());
    info!(channel_id, author = %author, "ready for commands");

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let invocation = Invocation {
            line: &line,
            author: &author,
            channel_id,
        };
        let Some(reply) = dispatcher.dispatch(&invocation) else {
            continue;
        };
        for message in render_reply(&reply) {
            println!("{}\n", message);
        }
    }

    info!("stdin closed, exiting");
    Ok(())
}
