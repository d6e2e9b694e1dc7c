//! Command-line interface for building and checking AES tables.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use sbox_core::{check_bijection, check_round_trip, Generator, GeneratorConfig, Tables};
use sbox_store::{
    read_tables, write_tables, StoreConfig, TablesDump, DEFAULT_DIR, DEFAULT_FILE_NAME,
};

/// AES table CLI.
#[derive(Parser)]
#[command(
    name = "sbox",
    version,
    author,
    about = "Builds the AES S-box, inverse S-box and Rcon from GF(2^8) arithmetic"
)]
struct Cli {
    /// Directory holding the table file (created if absent).
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DIR, global = true)]
    dir: PathBuf,
    /// Name of the table file inside the directory.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FILE_NAME, global = true)]
    file_name: String,
    /// First Rcon entry as 2 hex characters, optionally `0x`-prefixed (never decimal).
    #[arg(long, value_name = "HEX", default_value = "8d", global = true)]
    rcon_seed: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, write, read back, verify and print the tables (default).
    Run,
    /// Generate the tables and write them without reading back.
    Gen,
    /// Verify an existing table file against a fresh generation.
    Check,
    /// Print an existing table file as hex.
    Dump,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let store = StoreConfig {
        dir: cli.dir,
        file_name: cli.file_name,
    };
    let gen = Generator::with_config(GeneratorConfig {
        rcon_seed: parse_seed_hex(&cli.rcon_seed)?,
    });

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&store, &gen),
        Commands::Gen => cmd_gen(&store, &gen),
        Commands::Check => cmd_check(&store, &gen),
        Commands::Dump => cmd_dump(&store),
    }
}

fn cmd_run(store: &StoreConfig, gen: &Generator) -> Result<()> {
    let generated = gen.generate_tables().context("generate tables")?;
    write_tables(store, &generated).context("write tables")?;
    let loaded = read_tables(store).context("read tables back")?;

    let failures = verify(&generated, &loaded);
    print!("{}", TablesDump(&loaded));
    if failures > 0 {
        bail!("{failures} verification check(s) failed");
    }
    Ok(())
}

fn cmd_gen(store: &StoreConfig, gen: &Generator) -> Result<()> {
    let generated = gen.generate_tables().context("generate tables")?;
    let path = write_tables(store, &generated).context("write tables")?;
    println!("{}", path.display());
    Ok(())
}

fn cmd_check(store: &StoreConfig, gen: &Generator) -> Result<()> {
    let loaded = read_tables(store).context("read tables")?;
    let expected = gen.generate_tables().context("generate reference tables")?;
    let failures = verify(&expected, &loaded);
    if failures > 0 {
        bail!("{failures} verification check(s) failed");
    }
    Ok(())
}

fn cmd_dump(store: &StoreConfig) -> Result<()> {
    let loaded = read_tables(store).context("read tables")?;
    print!("{}", TablesDump(&loaded));
    Ok(())
}

/// Runs both checks on `loaded`, logging each outcome; returns the failure count.
fn verify(expected: &Tables, loaded: &Tables) -> usize {
    let mut failures = 0;

    match check_bijection(loaded.sbox(), loaded.inverse_sbox()) {
        Ok(()) => info!("S-box and inverse S-box are correct"),
        Err(err) => {
            error!("S-box check failed: {err}");
            failures += 1;
        }
    }

    match check_round_trip(expected, loaded) {
        Ok(()) => info!("stored tables match the generated tables"),
        Err(err) => {
            error!("round-trip check failed: {err}");
            failures += 1;
        }
    }

    failures
}

fn parse_seed_hex(hex_str: &str) -> Result<u8> {
    let trimmed = hex_str.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits).context("decode rcon seed hex")?;
    match bytes.as_slice() {
        [seed] => Ok(*seed),
        _ => bail!("rcon seed must be 1 byte (2 hex characters)"),
    }
}
