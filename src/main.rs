use sysident::adapters::{FixtureInfoProvider, HostInfoProvider};
use sysident::app::{run_app, App};
use sysident::cli::{parse_args, run_cli_command, CliCommand};
use sysident::config::AppConfig;
use sysident::error::SysidentError;
use sysident::input::CrosstermInput;
use sysident::logging::init_logging;
use sysident::panels;
use sysident::terminal::{setup_panic_hook, TerminalManager};
use sysident::traits::InfoProvider;
use sysident::ui::Compositor;

use color_eyre::eyre::WrapErr;
use color_eyre::{Result, Section};

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let CliCommand::RunTui(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = AppConfig::load(&options).map_err(with_hint)?;
    init_logging(&config).map_err(with_hint)?;
    let provider = info_provider(&config).map_err(with_hint)?;

    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start the async runtime")?;
    runtime.block_on(browse(config, provider))
}

fn info_provider(config: &AppConfig) -> Result<Box<dyn InfoProvider>, SysidentError> {
    match &config.facts {
        Some(path) => Ok(Box::new(FixtureInfoProvider::from_path(path)?)),
        None => {
            tracing::info!("Reading facts from this host");
            Ok(Box::new(HostInfoProvider::new()))
        }
    }
}

async fn browse(config: AppConfig, provider: Box<dyn InfoProvider>) -> Result<()> {
    let compositor = Compositor::new(provider, panels::standard());
    let mut app = App::new(compositor).with_reveal(config.reveal_on_start);
    let mut input = CrosstermInput::new(config.frame_interval);

    let mut manager = TerminalManager::new().map_err(with_hint)?;
    let result = run_app(manager.terminal(), &mut app, &mut input).await;
    manager.restore().map_err(with_hint)?;

    result
}

fn with_hint(err: SysidentError) -> color_eyre::Report {
    let hint = err.recovery_hint();
    color_eyre::Report::new(err).suggestion(hint)
}
