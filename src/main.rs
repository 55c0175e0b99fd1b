use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use oxide_apps::apps::counter::{CounterLogic, CounterModel};
use oxide_apps::apps::tictactoe::{TicTacToeLogic, TicTacToeModel};
use oxide_apps::apps::todo::{TodoLogic, TodoModel};
use oxide_apps::apps::Example;
use oxide_apps::config::AppConfig;
use oxide_apps::{logging, shell, MarkupRenderer, MvuRuntime};

#[derive(Debug, Parser)]
#[command(name = "oxide-apps", version, about = "Run the MVU example apps in a terminal")]
struct Cli {
    /// Config file (defaults to <config dir>/oxide-apps/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// List the available examples
    List,
    /// Run an example, reading interaction commands from stdin
    Run {
        #[arg(value_enum)]
        example: Example,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init_tracing(&config.log.filter);

    match cli.command {
        CliCommand::List => {
            for example in Example::ALL {
                println!("{:<12} {}", example.name(), example.description());
            }
            Ok(())
        }
        CliCommand::Run { example } => run(example, &config),
    }
}

fn run(example: Example, config: &AppConfig) -> Result<()> {
    tracing::info!(%example, "starting example");
    eprintln!("{}", shell::HELP);

    let stdin = io::stdin().lock();
    let renderer = MarkupRenderer::new(io::stdout());

    let processed = match example {
        Example::Counter => {
            let mut driver = MvuRuntime::new(CounterModel::default(), CounterLogic, renderer)
                .with_slot(&CounterModel::COUNT, config.counter.initial)
                .run();
            shell::run_session(&mut driver, stdin, io::stderr())
        }
        Example::Todo => {
            let mut driver = MvuRuntime::new(TodoModel::default(), TodoLogic::default(), renderer)
                .with_slot(&TodoModel::TODOS, config.todo.items())
                .run();
            shell::run_session(&mut driver, stdin, io::stderr())
        }
        Example::TicTacToe => {
            let mut driver =
                MvuRuntime::new(TicTacToeModel::default(), TicTacToeLogic, renderer).run();
            shell::run_session(&mut driver, stdin, io::stderr())
        }
    }
    .context("Terminal I/O failed")?;

    tracing::info!(processed, "session ended");
    Ok(())
}
