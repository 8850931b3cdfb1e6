mod commands;
mod terminal;

use commands::{CommandLine, sweep};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init_logging();

    sweep::run(commands).await
}
