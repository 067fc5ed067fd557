//! Command-line front-end for the seeded generator.
//!
//! Draws numbers, shuffles items and applies or reverses the seed-sort
//! permutation.  Output goes to stdout, one value per line, or as a single
//! JSON document with `--json`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pseudo_random::dynamic::{
    parse_value, seed_sort_value, seed_unsort_value, shuffle_from_current_value, shuffle_value,
};
use pseudo_random::{GeneratorConfig, PseudoRandom, PseudoRandomError, Result, Sample};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Seeded XOR-shift generator with reversible shuffles
#[derive(Parser, Debug)]
#[command(name = "pseudorand")]
#[command(about = "Deterministic pseudo-random numbers and permutations", long_about = None)]
struct Args {
    /// Origin seed in [0, 4294967295]; the wall clock is used when omitted
    #[arg(long, global = true)]
    seed: Option<i64>,

    /// Decimal digits carried by fractional outputs (1-8)
    #[arg(long, global = true)]
    digits: Option<u32>,

    /// JSON file holding `seed` and `digits`; flags take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    /// Emit JSON and, for permutations, accept a single JSON array argument
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw fractions, or integers when both bounds are given
    Next {
        /// Inclusive lower bound
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        /// Inclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
        /// Number of values to draw
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Shuffle items starting from the origin seed
    Shuffle {
        /// Continue from the current seed instead of resetting first
        #[arg(long)]
        from_current: bool,
        items: Vec<String>,
    },
    /// Reorder items with the origin-seed permutation map
    Sort { items: Vec<String> },
    /// Undo `sort` for items of the same length
    Unsort { items: Vec<String> },
    /// Print the permutation map for `len` items
    Map { len: usize },
    /// Print the effective configuration
    Config,
}

fn fatal(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn build_generator(args: &Args) -> Result<PseudoRandom> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let mut random = match args.seed {
        Some(seed) => PseudoRandom::new(seed)?,
        None => config.build()?,
    };
    random.set_digits(args.digits.unwrap_or(config.digits))?;
    debug!(
        seed = random.origin_seed(),
        digits = random.digits(),
        "generator ready"
    );
    Ok(random)
}

/// Upper bound on `next --count` when samples are collected into one JSON array.
const MAX_JSON_COUNT: usize = 1_000_000;

fn write_line(out: &mut impl Write, line: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{line}").map_err(|err| PseudoRandomError::Io(err.to_string()))
}

fn write_items(out: &mut impl Write, items: &[String]) -> Result<()> {
    write_line(out, items.join(" "))
}

#[derive(Clone, Copy)]
enum Transform {
    Shuffle,
    ShuffleFromCurrent,
    Sort,
    Unsort,
}

fn permute(
    random: &mut PseudoRandom,
    transform: Transform,
    items: &[String],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if json {
        let value = parse_value(&items.join(" "))?;
        let permuted = match transform {
            Transform::Shuffle => shuffle_value(random, &value)?,
            Transform::ShuffleFromCurrent => shuffle_from_current_value(random, &value)?,
            Transform::Sort => seed_sort_value(random, &value)?,
            Transform::Unsort => seed_unsort_value(random, &value)?,
        };
        return write_line(out, permuted);
    }
    let permuted = match transform {
        Transform::Shuffle => random.shuffle(items),
        Transform::ShuffleFromCurrent => random.shuffle_from_current(items),
        Transform::Sort => random.seed_sort(items),
        Transform::Unsort => random.seed_unsort(items),
    };
    write_items(out, &permuted)
}

fn draw(
    random: &mut PseudoRandom,
    min: Option<i64>,
    max: Option<i64>,
    count: usize,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !json {
        for _ in 0..count {
            write_line(out, random.next_bounded(min, max)?)?;
        }
        return Ok(());
    }
    if count > MAX_JSON_COUNT {
        return Err(PseudoRandomError::InvalidArgument {
            name: "count",
            reason: format!("must not exceed {MAX_JSON_COUNT} with --json"),
        });
    }
    let samples = (0..count)
        .map(|_| random.next_bounded(min, max))
        .collect::<Result<Vec<Sample>>>()?;
    write_line(out, serde_json::json!(samples))
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let mut random = build_generator(args)?;
    match &args.command {
        Command::Next { min, max, count } => draw(&mut random, *min, *max, *count, args.json, out)?,
        Command::Shuffle {
            from_current,
            items,
        } => {
            let transform = if *from_current {
                Transform::ShuffleFromCurrent
            } else {
                Transform::Shuffle
            };
            permute(&mut random, transform, items, args.json, out)?;
        }
        Command::Sort { items } => permute(&mut random, Transform::Sort, items, args.json, out)?,
        Command::Unsort { items } => {
            permute(&mut random, Transform::Unsort, items, args.json, out)?
        }
        Command::Map { len } => {
            let map = random.permutation_map(*len);
            if args.json {
                write_line(out, serde_json::json!(map.as_slice()))?;
            } else {
                let rendered: Vec<String> = map.as_slice().iter().map(|i| i.to_string()).collect();
                write_items(out, &rendered)?;
            }
        }
        Command::Config => write_line(out, random.config().to_json_pretty()?)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {err}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&args, &mut out) {
        fatal(&err.to_string());
    }
}
