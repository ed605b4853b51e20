use std::io::{BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use drills_core::{Bitcoin, DEFAULT_REPEAT_COUNT, Wallet};

mod config;
mod ops;
mod output;
mod session;

use config::{CONFIG_ENV_VAR, Config};
use ops::{NumberGroup, WalletOp};
use output::ColorMode;

/// Small exercises: integer sums, string repetition, a wallet, and a word dictionary
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (overrides DRILLS_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum a list of integers
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Sum each comma-separated group, e.g. `1,2 0,9`
    SumAll {
        #[arg(allow_hyphen_values = true)]
        groups: Vec<NumberGroup>,
    },
    /// Sum each group without its first element
    SumAllTails {
        #[arg(allow_hyphen_values = true)]
        groups: Vec<NumberGroup>,
    },
    /// Repeat text a number of times
    Repeat {
        text: String,

        #[arg(long, default_value_t = DEFAULT_REPEAT_COUNT)]
        count: usize,
    },
    /// Apply deposit:<n> / withdraw:<n> steps to a wallet
    Wallet { ops: Vec<WalletOp> },
    /// Run dictionary commands from stdin or a script file
    Dict {
        /// Read commands from this file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    // Resolve configuration: CLI flag > env var > per-user file > defaults
    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let config = Config::resolve(args.config, env_path)?;

    let color = ColorMode(!args.no_color && config.output.color);
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    match args.command {
        Command::Sum { numbers } => {
            writeln!(writer, "{}", drills_core::sum(&numbers)?)?;
        }
        Command::SumAll { groups } => {
            output::print_numbers(&mut writer, &drills_core::sum_all(&groups)?)?;
        }
        Command::SumAllTails { groups } => {
            output::print_numbers(&mut writer, &drills_core::sum_all_tails(&groups)?)?;
        }
        Command::Repeat { text, count } => {
            writeln!(writer, "{}", drills_core::repeat(&text, count))?;
        }
        Command::Wallet { ops } => {
            run_wallet(&mut writer, config.wallet.opening_balance, &ops, color)?;
        }
        Command::Dict { script } => {
            let mut dict = config.dictionary;
            let summary = match script {
                Some(path) => {
                    let file = std::fs::File::open(&path)
                        .with_context(|| format!("cannot open script {}", path.display()))?;
                    session::run(&mut dict, BufReader::new(file), &mut writer, color)?
                }
                None => session::run(&mut dict, std::io::stdin().lock(), &mut writer, color)?,
            };
            if summary.has_failures() {
                tracing::warn!(
                    commands = summary.commands,
                    failed = summary.failed,
                    entries = dict.len(),
                    "session finished with failed lines"
                );
            } else {
                tracing::info!(
                    commands = summary.commands,
                    entries = dict.len(),
                    "session finished"
                );
            }
        }
    }

    Ok(())
}

fn run_wallet(
    w: &mut dyn Write,
    opening_balance: u64,
    ops: &[WalletOp],
    color: ColorMode,
) -> anyhow::Result<()> {
    let mut wallet = Wallet::with_balance(Bitcoin(opening_balance));
    for op in ops {
        let (verb, result) = match *op {
            WalletOp::Deposit(amount) => (format!("deposit {amount}"), wallet.deposit(amount)),
            WalletOp::Withdraw(amount) => (format!("withdraw {amount}"), wallet.withdraw(amount)),
        };
        match result {
            Ok(()) => output::print_ok(w, &verb, color)?,
            Err(e) => output::print_error(w, &format!("{verb}: {e}"), color)?,
        }
    }
    writeln!(w, "balance: {}", wallet.balance())?;
    Ok(())
}
