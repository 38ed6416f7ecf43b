mod app;
mod cli;

use clap::Parser;
use cli::{CheckArgs, Cli, Command, RunArgs};
use relay_core::config::Config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // No subcommand: parse an empty `run` so env fallbacks still apply.
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::parse_from(["run"])));

    match command {
        Command::Run(args) => cmd_run(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    // A bad config file is fatal; a missing one falls back to defaults.
    let (config, load_error) = match Config::load(&args.config) {
        Ok(config) => (config, None),
        Err(e) if is_not_found(&e) => (Config::default(), Some(e)),
        Err(e) => return Err(e.context(format!("invalid config '{}'", args.config))),
    };

    let _guard = relay_core::lifecycle::logging::init_logging(&args.log_level, &config);

    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config from '{}': {e}, using defaults",
            args.config
        );
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let application = app::Application::build(&args, config)?;
        application.serve().await
    })
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) if is_not_found(&e) => {
            println!("No config at {}, defaults apply.", args.config);
            Config::default()
        }
        Err(e) => return Err(e.context(format!("invalid config '{}'", args.config))),
    };

    println!("Route:    {}", config.route_path);
    println!(
        "Upstream: {}{}",
        config.upstream.base_url,
        relay_core::provider::MESSAGES_PATH
    );

    let env = relay_core::env::SystemEnv;
    match relay_core::env::read_secret(&env, &config.upstream.api_key_env) {
        Some(_) => println!("API key:  {} is set", config.upstream.api_key_env),
        None => anyhow::bail!("{} is not set", config.upstream.api_key_env),
    }
    Ok(())
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}
