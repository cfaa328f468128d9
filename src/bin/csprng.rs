//! Minimal CLI for driving the hash-chain generator.
//!
//! This binary draws field elements from a hex seed, replays JSON
//! generation plans, encodes single digests and mints fresh seeds.  Set
//! `CSPRNG_LOG` (for example `CSPRNG_LOG=trace`) to see state transitions.

use std::{env, fs, io};

use hashchain_csprng::{
    encode_digest, seed_from_hex, seed_to_hex, CsprngError, FieldElement, GenerationPlan,
    Generator, HashMethod, Seed, MAX_BATCH, SEED_LEN,
};
use rand::{rngs::OsRng, RngCore};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CSPRNG_LOG";

fn fatal(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_help() {
    println!("Usage: csprng <generate|replay|encode|seed> ...");
    println!("  generate <seed_hex> <sha256|blake2s|keccak256> [count]");
    println!("  replay <plan.json>");
    println!("  encode <digest_hex>");
    println!("  seed");
}

/// Parsed arguments of `csprng generate`.
#[derive(Debug, PartialEq, Eq)]
struct GenerateArgs {
    seed: Seed,
    method: HashMethod,
    count: usize,
}

fn parse_count(raw: Option<&str>) -> Result<usize, String> {
    let count = match raw {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("Invalid count value: {raw}"))?,
        None => 1,
    };
    if count > MAX_BATCH {
        return Err(format!(
            "error: {}",
            CsprngError::CountLimit {
                requested: count,
                limit: MAX_BATCH,
            }
        ));
    }
    Ok(count)
}

fn parse_generate_args(args: &[String]) -> Result<GenerateArgs, String> {
    if args.len() < 2 {
        return Err(
            "Usage: csprng generate <seed_hex> <sha256|blake2s|keccak256> [count]".to_string(),
        );
    }
    let seed = seed_from_hex(&args[0]).map_err(|err| format!("error: {err}"))?;
    let method = args[1]
        .parse::<HashMethod>()
        .map_err(|err| format!("error: {err}"))?;
    let count = parse_count(args.get(2).map(String::as_str))?;
    Ok(GenerateArgs {
        seed,
        method,
        count,
    })
}

fn main() {
    init_logging();
    let mut args = env::args().skip(1);
    let command = args.next();
    match command.as_deref() {
        Some("generate") => cmd_generate(args.collect()),
        Some("replay") => cmd_replay(args.collect()),
        Some("encode") => cmd_encode(args.collect()),
        Some("seed") => cmd_seed(),
        Some("-h") | Some("--help") => print_help(),
        _ => {
            eprintln!("Usage: csprng <generate|replay|encode|seed> ...");
            std::process::exit(1);
        }
    }
}

fn cmd_generate(args: Vec<String>) {
    let GenerateArgs {
        seed,
        method,
        count,
    } = parse_generate_args(&args).unwrap_or_else(|message| fatal(&message));
    let mut generator = Generator::new(seed);
    let values = generator
        .generate_many(method, count)
        .unwrap_or_else(|err| fatal(&format!("error: {err}")));
    for value in values {
        println!("{value}");
    }
    println!("seed: {}", seed_to_hex(generator.seed()));
}

fn cmd_replay(args: Vec<String>) {
    if args.is_empty() {
        fatal("Usage: csprng replay <plan.json>");
    }
    let text = fs::read_to_string(&args[0])
        .unwrap_or_else(|err| fatal(&format!("error reading {}: {err}", args[0])));
    let plan =
        GenerationPlan::from_json(&text).unwrap_or_else(|err| fatal(&format!("error: {err}")));
    let output = plan
        .run::<FieldElement>()
        .unwrap_or_else(|err| fatal(&format!("replay failed: {err}")));
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(err) => fatal(&format!("failed to encode replay output: {err}")),
    }
}

fn cmd_encode(args: Vec<String>) {
    if args.is_empty() {
        fatal("Usage: csprng encode <digest_hex>");
    }
    let digest = seed_from_hex(&args[0]).unwrap_or_else(|err| fatal(&format!("error: {err}")));
    println!("{}", encode_digest::<FieldElement>(&digest));
}

fn cmd_seed() {
    let mut seed: Seed = [0u8; SEED_LEN];
    OsRng.fill_bytes(&mut seed);
    println!("{}", seed_to_hex(&seed));
}
