use crate::prelude::{eprintln, *};
use clap::Parser;
use pokeretriever_core::modes::{SearchMode, DEFAULT_API_BASE};

mod error;
mod factory;
mod fetch;
mod orchestrator;
mod prelude;
mod request;
mod retrieve;
mod sink;

#[cfg(test)]
mod test_helpers;

/// Exit status for an unknown search mode
const INVALID_MODE_EXIT: i32 = 2;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Look up pokemon, abilities and moves on PokeAPI"
)]
pub struct App {
    /// Search mode: pokemon, ability or move
    #[arg(value_name = "MODE")]
    pub mode: String,

    #[clap(flatten)]
    pub options: crate::retrieve::RetrieveOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// PokeAPI root URL
    #[clap(long, env = "POKEAPI_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Whether to display additional information.
    #[clap(long, env = "POKERETRIEVER_VERBOSE", default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let mode = match app.mode.parse::<SearchMode>() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(INVALID_MODE_EXIT);
        }
    };

    let request = app.options.into_request(mode)?;

    crate::retrieve::run(request, app.global).await
}
