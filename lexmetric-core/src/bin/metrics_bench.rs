//! Metrics Pipeline Benchmarking Tool
//!
//! Measures throughput of the analysis pipeline on a large plain-text file
//! (an article dump, a book, a concatenated corpus).
//!
//! ## What It Benchmarks
//!
//! 1. **Clean**: URL stripping, punctuation filtering, lowercasing
//! 2. **Tokenize**: Splitting cleaned text into word tokens
//! 3. **Analyze**: The full per-document metrics computation
//!
//! ## Usage
//!
//! ```bash
//! # Empty lexicons
//! ./target/release/metrics_bench /path/to/corpus.txt
//!
//! # With stopword and sentiment directories
//! ./target/release/metrics_bench /path/to/corpus.txt stopwords/ sentiment/
//! ```
//!
//! Set `LEXMETRIC_CONFIG=/path/to/lexmetric.toml` to analyse with a custom
//! [`AnalyzerConfig`]; without it the defaults apply. Set `RUST_LOG=debug`
//! to see lexicon loading details.
//!
//! ## Tips for Accurate Results
//!
//! - Build with `--release`
//! - Use a large input file (100MB+) for stable measurements
//! - Pin to one core with `taskset` to reduce noise

use std::env;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use lexmetric_core::analyzer::cleaner::TextCleaner;
use lexmetric_core::analyzer::tokenizer::WordTokenizer;
use lexmetric_core::lexicon::loader::load_lexicons;
use lexmetric_core::lexicon::Lexicons;
use lexmetric_core::metrics::MetricsEngine;
use lexmetric_core::{config, AnalyzerConfig};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: u32 = 1;
const MEASURE_RUNS: u32 = 5;
const CONFIG_ENV: &str = "LEXMETRIC_CONFIG";

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: [{CONFIG_ENV}=config.toml] metrics_bench <path> [stopword_dir sentiment_dir]");
        std::process::exit(1);
    }

    let path = &args[1];
    let config = match env::var_os(CONFIG_ENV) {
        Some(config_path) => match config::load(Path::new(&config_path)) {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "invalid {CONFIG_ENV}");
                std::process::exit(1);
            }
        },
        None => AnalyzerConfig::default(),
    };

    let lexicons = match (args.get(2), args.get(3)) {
        (Some(stop), Some(sent)) => match load_lexicons(Path::new(stop), Path::new(sent), &config) {
            Ok((lexicons, report)) => {
                if !report.is_clean() {
                    warn!(skipped = report.len(), "some lexicon sources were skipped");
                }
                lexicons
            }
            Err(e) => {
                warn!(error = %e, "continuing with empty lexicons");
                Lexicons::empty()
            }
        },
        _ => Lexicons::empty(),
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = String::from_utf8_lossy(&bytes);

    println!("File size:  {}", fmt_size(input.len()));
    println!(
        "Lexicons:   {} stopwords, {} positive, {} negative\n",
        lexicons.stopwords.len(),
        lexicons.sentiment.positive_len(),
        lexicons.sentiment.negative_len()
    );

    bench_clean(&input);
    bench_tokenize(&input);
    bench_analyze(&input, &lexicons, config);

    Ok(())
}

fn bench_clean(input: &str) {
    let cleaner = TextCleaner::new();

    println!("=== Clean ===");

    let elapsed = time_runs(|| {
        std::hint::black_box(cleaner.clean(input));
    });

    print_perf("Clean", input.len(), elapsed, 0);
}

fn bench_tokenize(input: &str) {
    let cleaned = TextCleaner::new().clean(input);

    println!("=== Tokenize ===");

    let mut tokens = 0u64;
    let elapsed = time_runs(|| {
        let mut local = 0u64;
        WordTokenizer.tokenize(&cleaned, |_| local += 1);
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", cleaned.len(), elapsed, tokens);
}

fn bench_analyze(input: &str, lexicons: &Lexicons, config: AnalyzerConfig) {
    let engine = MetricsEngine::new(config);

    println!("=== Analyze (full pipeline) ===");

    let mut last = None;
    let elapsed = time_runs(|| {
        let record = engine.analyze(input, "bench", "", &lexicons.stopwords, &lexicons.sentiment);
        last = Some(std::hint::black_box(record));
    });

    let words = last.as_ref().map_or(0, |r| r.word_count as u64);
    print_perf("Analyze", input.len(), elapsed, words);

    if let Some(record) = last {
        println!("Record      : {record}\n");
    }
}

/// Runs `f` for the warmup rounds, then returns the mean of the timed ones.
fn time_runs<F: FnMut()>(mut f: F) -> Duration {
    (0..WARMUP_RUNS).for_each(|_| f());

    let start = Instant::now();
    (0..MEASURE_RUNS).for_each(|_| f());
    start.elapsed() / MEASURE_RUNS
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, words: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {label}");
    println!("Elapsed     : {secs:.3} s");
    println!("Throughput  : {:.2} MiB/s", mib / secs);

    if words > 0 {
        println!("Words       : {words}");
        println!("Words/sec   : {:.0}", words as f64 / secs);
    }

    println!("--------------------------------\n");
}

fn fmt_size(bytes: usize) -> String {
    match bytes {
        b if b >= 1 << 20 => format!("{:.2} MiB", b as f64 / f64::from(1u32 << 20)),
        b if b >= 1 << 10 => format!("{:.2} KiB", b as f64 / 1024.0),
        b => format!("{b} B"),
    }
}
