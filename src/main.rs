// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tokio::signal;

use coffee_shop_env::{
    api::router,
    config::{env_or_default, port_from_env, DEFAULT_HOST, HOST_ENV},
    environment::{BuildVariant, ConfigError, Environment, EnvironmentLoader},
    state::AppState,
    telemetry::{self, LogFormat},
};

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "coffee-shop-env")]
#[command(about = "Resolve, check, render and serve the coffee shop front-end environment")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved environment as JSON
    Show(SourceArgs),
    /// Resolve and validate the environment without output
    Check(SourceArgs),
    /// Write the TypeScript environment module for the front-end build
    Render {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(short, long, help = "Directory to write environment(.prod).ts into")]
        out: PathBuf,
    },
    /// Serve the resolved environment over HTTP
    Serve(SourceArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    #[arg(long, help = "Build variant (development or production); defaults to APP_ENV")]
    variant: Option<BuildVariant>,

    #[arg(short, long, help = "JSON environment document; defaults to ENVIRONMENT_FILE")]
    file: Option<PathBuf>,
}

impl SourceArgs {
    fn load(self) -> Result<Environment, ConfigError> {
        EnvironmentLoader::from_env(self.variant, self.file)?.load()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(LogFormat::from_env());

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "coffee-shop-env failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Show(source) => {
            let env = source.load()?;
            println!("{}", env.to_json_pretty()?);
        }
        Command::Check(source) => {
            let env = source.load()?;
            tracing::info!(variant = %env.variant(), "Environment is valid");
        }
        Command::Render { source, out } => {
            let env = source.load()?;
            let path = env.write_to_dir(&out)?;
            println!("{}", path.display());
        }
        Command::Serve(source) => {
            let env = source.load()?;
            serve(env).await?;
        }
    }
    Ok(())
}

async fn serve(env: Environment) -> Result<(), Box<dyn std::error::Error>> {
    let host = env_or_default(HOST_ENV, DEFAULT_HOST);
    let addr: SocketAddr = format!("{host}:{}", port_from_env()).parse()?;

    let variant = env.variant();
    let app = router(AppState::new(env));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, %variant, "Environment server listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Environment server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
