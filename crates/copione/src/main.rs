use crate::prelude::*;
use clap::Parser;

mod error;
mod prelude;
mod script;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Turn a theatrical-script PDF into an ordered list of speaker/utterance blocks"
)]
pub struct App {
    #[command(subcommand)]
    pub command: script::Commands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "COPIONE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    crate::script::run(app.command, app.global)
        .await
        .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
