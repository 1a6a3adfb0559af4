mod bench;
mod config;

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::debug;

use monostack_core::{
    boundaries, checked_contribution_sum, checked_sum_of_subarray_ranges, contribution_sum_mod,
    nearest, nearest_circular, parse_sequence, sum_of_subarray_maximums,
    sum_of_subarray_minimums, sum_of_subarray_ranges, sum_of_subarray_ranges_mod, values_or,
    verify_exhaustive, Extremum, Relation, Side,
};

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(
    name = "monostack",
    version,
    about = "Subarray min/max/range sums and nearest-element queries via monotonic stacks"
)]
struct Cli {
    /// Output format (overrides config)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum of subarray minimums, maximums and ranges
    Sum {
        /// Aggregate to report
        #[arg(short, long, default_value = "all")]
        mode: CliAggregate,

        /// Also report the sums reduced by this modulus
        #[arg(long)]
        modulus: Option<u64>,

        /// Sequence values (reads stdin if omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Per-index span counts used by the contribution sums
    Boundaries {
        /// Extremum the counts are computed for
        #[arg(short, long, default_value = "min")]
        mode: CliExtremum,

        /// Sequence values (reads stdin if omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Nearest previous/next element satisfying a comparison
    Nearest {
        /// Direction to search
        #[arg(short, long, default_value = "next")]
        side: CliSide,

        /// Comparison the nearest element must satisfy
        #[arg(short, long, default_value = "gt")]
        relation: CliRelation,

        /// Treat the sequence as circular
        #[arg(long)]
        circular: bool,

        /// Sequence values (reads stdin if omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Cross-check every operation against brute force on all small inputs
    Verify {
        /// Longest sequence to enumerate
        #[arg(short = 'n', long, default_value = "8")]
        max_len: usize,

        /// Values are drawn from 0..alphabet
        #[arg(short, long, default_value = "3")]
        alphabet: i64,
    },

    /// Time stack algorithms against brute force on random input
    Bench {
        /// Sequence length (default from config)
        #[arg(short, long)]
        len: Option<usize>,

        /// Repetitions per measurement (default from config)
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Generator seed (default from config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show active configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliAggregate {
    Min,
    Max,
    Range,
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliExtremum {
    Min,
    Max,
}

impl From<CliExtremum> for Extremum {
    fn from(val: CliExtremum) -> Self {
        match val {
            CliExtremum::Min => Extremum::Min,
            CliExtremum::Max => Extremum::Max,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliSide {
    Previous,
    Next,
}

impl From<CliSide> for Side {
    fn from(val: CliSide) -> Self {
        match val {
            CliSide::Previous => Side::Previous,
            CliSide::Next => Side::Next,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliRelation {
    /// Strictly smaller
    Lt,
    /// Smaller or equal
    Le,
    /// Strictly greater
    Gt,
    /// Greater or equal
    Ge,
}

impl From<CliRelation> for Relation {
    fn from(val: CliRelation) -> Self {
        match val {
            CliRelation::Lt => Relation::Less,
            CliRelation::Le => Relation::LessOrEqual,
            CliRelation::Gt => Relation::Greater,
            CliRelation::Ge => Relation::GreaterOrEqual,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let format = cli.format.unwrap_or(cfg.output.format);
    debug!(?format, checked = cfg.compute.checked, "config resolved");

    match cli.command {
        Commands::Sum {
            mode,
            modulus,
            values,
        } => {
            let seq = read_sequence(values)?;
            cmd_sum(&cfg, format, &seq, mode, modulus.or(cfg.compute.modulus))
        }
        Commands::Boundaries { mode, values } => {
            let seq = read_sequence(values)?;
            cmd_boundaries(format, &seq, mode.into())
        }
        Commands::Nearest {
            side,
            relation,
            circular,
            values,
        } => {
            let seq = read_sequence(values)?;
            cmd_nearest(
                format,
                &seq,
                side.into(),
                relation.into(),
                circular,
                cfg.output.sentinel,
            )
        }
        Commands::Verify { max_len, alphabet } => cmd_verify(format, max_len, alphabet),
        Commands::Bench {
            len,
            iterations,
            seed,
        } => cmd_bench(
            format,
            len.unwrap_or(cfg.bench.len),
            iterations.unwrap_or(cfg.bench.iterations),
            seed.unwrap_or(cfg.bench.seed),
        ),
        Commands::Config => cmd_config(&cfg),
    }
}

/// Positional values win; otherwise the whole of stdin is parsed.
fn read_sequence(values: Vec<String>) -> Result<Vec<i64>> {
    let text = if values.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading sequence from stdin")?;
        buf
    } else {
        values.join(" ")
    };
    let seq = parse_sequence(&text).context("parsing input sequence")?;
    debug!(len = seq.len(), "sequence parsed");
    Ok(seq)
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Aggregate commands
// ---------------------------------------------------------------------------

impl CliAggregate {
    fn parts(self) -> &'static [Aggregate] {
        match self {
            Self::Min => &[Aggregate::Min],
            Self::Max => &[Aggregate::Max],
            Self::Range => &[Aggregate::Range],
            Self::All => &[Aggregate::Min, Aggregate::Max, Aggregate::Range],
        }
    }
}

#[derive(Clone, Copy)]
enum Aggregate {
    Min,
    Max,
    Range,
}

impl Aggregate {
    fn key(self) -> &'static str {
        match self {
            Self::Min => "minimums",
            Self::Max => "maximums",
            Self::Range => "ranges",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Range => "range",
        }
    }

    fn compute(self, seq: &[i64], checked: bool) -> Result<i64> {
        if !checked {
            return Ok(match self {
                Self::Min => sum_of_subarray_minimums(seq),
                Self::Max => sum_of_subarray_maximums(seq),
                Self::Range => sum_of_subarray_ranges(seq),
            });
        }
        let sum = match self {
            Self::Min => checked_contribution_sum(seq, Extremum::Min),
            Self::Max => checked_contribution_sum(seq, Extremum::Max),
            Self::Range => checked_sum_of_subarray_ranges(seq),
        };
        sum.with_context(|| format!("{} sum does not fit in 64 bits", self.name()))
    }

    fn reduce(self, seq: &[i64], modulus: u64) -> Result<u64> {
        Ok(match self {
            Self::Min => contribution_sum_mod(seq, Extremum::Min, modulus)?,
            Self::Max => contribution_sum_mod(seq, Extremum::Max, modulus)?,
            Self::Range => sum_of_subarray_ranges_mod(seq, modulus)?,
        })
    }
}

fn cmd_sum(
    cfg: &Config,
    format: OutputFormat,
    seq: &[i64],
    mode: CliAggregate,
    modulus: Option<u64>,
) -> Result<()> {
    let mut rows = Vec::new();
    for &part in mode.parts() {
        let value = part.compute(seq, cfg.compute.checked)?;
        let reduced = modulus.map(|m| part.reduce(seq, m)).transpose()?;
        rows.push((part, value, reduced));
    }

    if format == OutputFormat::Json {
        let mut out = json!({ "length": seq.len() });
        for &(part, value, _) in &rows {
            out[part.key()] = json!(value);
        }
        if let Some(m) = modulus {
            let mut r = json!({ "modulus": m });
            for &(part, _, reduced) in &rows {
                r[part.key()] = json!(reduced);
            }
            out["reduced"] = r;
        }
        return print_json(&out);
    }

    for (part, value, reduced) in rows {
        let label = format!("{}:", part.name());
        match (modulus, reduced) {
            (Some(m), Some(r)) => println!("{label:<7}{value}  (mod {m}: {r})"),
            _ => println!("{label:<7}{value}"),
        }
    }
    Ok(())
}

fn cmd_boundaries(format: OutputFormat, seq: &[i64], mode: Extremum) -> Result<()> {
    let b = boundaries(seq, mode);

    if format == OutputFormat::Json {
        return print_json(&json!({
            "mode": mode,
            "values": seq,
            "left": b.left,
            "right": b.right,
            "counts": b.counts().collect::<Vec<_>>(),
            "total": b.total_subarrays(),
        }));
    }

    if b.is_empty() {
        println!("Empty sequence.");
        return Ok(());
    }
    println!(
        "{:>5} {:>12} {:>6} {:>6} {:>8}",
        "idx", "value", "left", "right", "count"
    );
    println!("{}", "-".repeat(41));
    for (i, v) in seq.iter().enumerate() {
        println!(
            "{:>5} {:>12} {:>6} {:>6} {:>8}",
            i,
            v,
            b.left[i],
            b.right[i],
            b.count(i)
        );
    }
    println!("{}", "-".repeat(41));
    println!("{mode} owns {} subarrays in total", b.total_subarrays());
    Ok(())
}

fn cmd_nearest(
    format: OutputFormat,
    seq: &[i64],
    side: Side,
    relation: Relation,
    circular: bool,
    sentinel: i64,
) -> Result<()> {
    let found = if circular {
        nearest_circular(seq, side, relation)
    } else {
        nearest(seq, side, relation)
    };
    let values = values_or(seq, &found, sentinel);

    if format == OutputFormat::Json {
        return print_json(&json!({
            "side": side,
            "relation": relation,
            "circular": circular,
            "indices": found,
            "values": values,
        }));
    }

    println!("{side} element {relation} (circular: {circular})");
    for (i, (v, hit)) in seq.iter().zip(&values).enumerate() {
        match found[i] {
            Some(j) => println!("  [{i}] {v} -> [{j}] {hit}"),
            None => println!("  [{i}] {v} -> {hit}"),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

fn cmd_verify(format: OutputFormat, max_len: usize, alphabet: i64) -> Result<()> {
    if alphabet < 1 {
        bail!("alphabet must be at least 1");
    }
    match verify_exhaustive(max_len, alphabet) {
        Ok(report) => {
            if format == OutputFormat::Json {
                return print_json(&json!({
                    "ok": true,
                    "max_len": max_len,
                    "alphabet": alphabet,
                    "report": report,
                }));
            }
            println!(
                "Verified {} sequences ({} checks), length <= {max_len}, values in 0..{alphabet}.",
                report.sequences, report.checks
            );
            Ok(())
        }
        Err(mismatch) => {
            if format == OutputFormat::Json {
                print_json(&json!({ "ok": false, "mismatch": mismatch }))?;
            } else {
                println!("MISMATCH in {}", mismatch.check);
                println!("  sequence: {:?}", mismatch.sequence);
                println!("  expected: {}", mismatch.expected);
                println!("  actual:   {}", mismatch.actual);
            }
            bail!("verification failed: {}", mismatch.check)
        }
    }
}

fn cmd_bench(format: OutputFormat, len: usize, iterations: usize, seed: u64) -> Result<()> {
    let rows = bench::run(len, iterations, seed)?;

    if format == OutputFormat::Json {
        return print_json(&json!({ "seed": seed, "rows": rows }));
    }

    println!("monostack benchmark (n={len}, {iterations} iterations, seed={seed})");
    println!("{}", "─".repeat(70));
    for row in &rows {
        bench::print_bench_row(row);
    }
    println!("{}", "─".repeat(70));
    println!(
        "Oracle rows use the first {} values.",
        len.min(bench::ORACLE_MAX_LEN)
    );
    println!(
        "Platform: {}-{}",
        std::env::consts::ARCH,
        std::env::consts::OS
    );
    Ok(())
}

fn cmd_config(cfg: &Config) -> Result<()> {
    println!("Config: {}", config::show_config_path());
    println!();
    println!("[output]");
    let format = match cfg.output.format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    };
    println!("  format = {format}");
    println!("  sentinel = {}", cfg.output.sentinel);
    println!();
    println!("[compute]");
    match cfg.compute.modulus {
        Some(m) => println!("  modulus = {m}"),
        None => println!("  modulus = (none)"),
    }
    println!("  checked = {}", cfg.compute.checked);
    println!();
    println!("[bench]");
    println!("  len = {}", cfg.bench.len);
    println!("  iterations = {}", cfg.bench.iterations);
    println!("  seed = {}", cfg.bench.seed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_negative_values() {
        let cli = Cli::try_parse_from(["monostack", "sum", "--", "-3", "1", "-2"]).unwrap();
        match cli.command {
            Commands::Sum { values, .. } => assert_eq!(values, vec!["-3", "1", "-2"]),
            _ => panic!("expected sum"),
        }

        let cli = Cli::try_parse_from(["monostack", "sum", "-m", "min", "-3", "1"]).unwrap();
        match cli.command {
            Commands::Sum { values, .. } => assert_eq!(values, vec!["-3", "1"]),
            _ => panic!("expected sum"),
        }
    }

    #[test]
    fn test_cli_global_format() {
        let cli = Cli::try_parse_from(["monostack", "verify", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_nearest_flags() {
        let cli = Cli::try_parse_from([
            "monostack",
            "nearest",
            "--side",
            "previous",
            "--relation",
            "le",
            "--circular",
            "4",
            "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Nearest {
                side,
                relation,
                circular,
                values,
            } => {
                assert_eq!(Side::from(side), Side::Previous);
                assert_eq!(Relation::from(relation), Relation::LessOrEqual);
                assert!(circular);
                assert_eq!(values.len(), 2);
            }
            _ => panic!("expected nearest"),
        }
    }

    #[test]
    fn test_read_sequence_from_args() {
        let seq = read_sequence(vec!["1,4".into(), "3".into(), "2".into()]).unwrap();
        assert_eq!(seq, vec![1, 4, 3, 2]);
        assert!(read_sequence(vec!["x".into()]).is_err());
    }

    #[test]
    fn test_commands_run_on_worked_example() {
        let cfg = Config::default();
        let seq = [1, 4, 3, 2];
        cmd_sum(&cfg, OutputFormat::Json, &seq, CliAggregate::All, Some(7)).unwrap();
        cmd_boundaries(OutputFormat::Text, &seq, Extremum::Max).unwrap();
        cmd_nearest(
            OutputFormat::Text,
            &seq,
            Side::Next,
            Relation::Greater,
            true,
            -1,
        )
        .unwrap();
        cmd_verify(OutputFormat::Text, 4, 2).unwrap();
    }

    #[test]
    fn test_sum_reports_overflow_when_checked() {
        let cfg = Config::default();
        let seq = [i64::MAX, i64::MAX];
        let err = cmd_sum(&cfg, OutputFormat::Text, &seq, CliAggregate::Max, None).unwrap_err();
        assert_eq!(err.to_string(), "max sum does not fit in 64 bits");
    }

    #[test]
    fn test_sum_checks_only_requested_aggregate() {
        let cfg = Config::default();
        // Min sum is exactly i64::MAX; the max sum overflows.
        let seq = [i64::MAX, 0];
        assert_eq!(
            Aggregate::Min.compute(&seq, cfg.compute.checked).unwrap(),
            i64::MAX
        );
        assert!(Aggregate::Max.compute(&seq, cfg.compute.checked).is_err());
        cmd_sum(&cfg, OutputFormat::Text, &seq, CliAggregate::Min, None).unwrap();
        cmd_sum(&cfg, OutputFormat::Json, &seq, CliAggregate::Range, Some(7)).unwrap();
        assert!(cmd_sum(&cfg, OutputFormat::Text, &seq, CliAggregate::All, None).is_err());
    }
}
