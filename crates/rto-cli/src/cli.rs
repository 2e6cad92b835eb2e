//! CLI definitions and command handlers.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use rto_codec::{analyze, Codec, FileMeta, Recommendation};
use rto_core::token::Token;
use rto_core::{global_words, known_languages, type_words, CodecConfig, Tier, WordTable};

use crate::language::{language_for_path, normalize_tag};
use crate::verify::{verify_paths, VerifyOptions};

/// rto - reversible text optimizer for LLM context windows.
#[derive(Parser, Debug)]
#[command(name = "rto")]
#[command(
    author,
    version,
    about,
    long_about = r#"rto shrinks source files by replacing frequent words with short tokens,
and restores the exact original bytes on expand.

Token tiers:
- ~^N  global word list (all languages)
- ~*N  type word list (selected by --ext / file extension)
- ~N   local dictionary (stored in the header line)
- ~~   literal tilde

Examples:
    rto compress --ext py < app.py > app.py.rto
    rto expand < app.py.rto > app.py
    rto dict type rs
    rto verify src --jobs 8
"#
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// JSON file with codec settings (min_word_length, max_local_entries, min_occurrences).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress stdin to stdout.
    Compress(CompressArgs),
    /// Expand a compressed artifact from stdin to stdout.
    Expand,
    /// Print a built-in dictionary.
    Dict {
        #[command(subcommand)]
        table: DictTable,
    },
    /// Print the effective codec configuration as JSON.
    Config(LimitArgs),
    /// Report whether stdin looks like compressible text.
    Analyze,
    /// Round-trip every file under the given paths and report savings.
    Verify(VerifyArgs),
}

#[derive(Subcommand, Debug)]
pub enum DictTable {
    /// The cross-language table.
    Global,
    /// The table for one language tag.
    Type {
        /// Language tag or extension (py, js, c, rs, sh, bash).
        tag: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct LimitArgs {
    /// Minimum word length for the local dictionary.
    #[arg(long, value_name = "N")]
    pub min_len: Option<usize>,

    /// Maximum number of words kept after the frequency sort.
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,
}

#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Language tag selecting the type dictionary. Defaults to the filename's extension.
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Original filename, stored in the header and used to infer the language.
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Original modification time, stored in the header.
    #[arg(long)]
    pub mtime: Option<f64>,

    /// Original file permissions, stored in the header.
    #[arg(long)]
    pub mode: Option<u32>,

    #[command(flatten)]
    pub limits: LimitArgs,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Files or directories to check.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Worker threads (default: one per core).
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    /// Skip files larger than this many bytes.
    #[arg(long, default_value_t = 10 * 1024 * 1024, value_name = "BYTES")]
    pub max_size: u64,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Resolve the codec config: file (if any), then flag overrides.
pub fn load_config(path: Option<&PathBuf>, limits: &LimitArgs) -> Result<CodecConfig> {
    let mut config = match path {
        Some(path) => CodecConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CodecConfig::default(),
    };
    if let Some(min_len) = limits.min_len {
        config.min_word_length = min_len;
    }
    if let Some(top_n) = limits.top_n {
        config.max_local_entries = top_n;
    }
    config.validate()?;
    Ok(config)
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input).context("failed to read stdin")?;
    Ok(input)
}

fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(bytes).context("failed to write stdout")?;
    out.flush()?;
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compress(args) => {
            let config = load_config(cli.config.as_ref(), &args.limits)?;
            run_compress(Codec::new(config), args)
        }
        Command::Expand => run_expand(),
        Command::Dict { table } => run_dict(table),
        Command::Config(limits) => {
            let config = load_config(cli.config.as_ref(), &limits)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Command::Analyze => {
            let a = analyze(&read_stdin()?);
            let report = serde_json::json!({
                "kind": a.kind,
                "entropy": a.entropy,
                "whitespace_ratio": a.whitespace_ratio,
                "recommendation": a.recommendation(),
            });
            println!("{report}");
            Ok(())
        }
        Command::Verify(args) => {
            let config = load_config(cli.config.as_ref(), &args.limits)?;
            run_verify(Codec::new(config), args)
        }
    }
}

fn run_compress(codec: Codec, args: CompressArgs) -> Result<()> {
    let input = read_stdin()?;

    let language = match (&args.ext, &args.filename) {
        (Some(ext), _) => normalize_tag(ext),
        (None, Some(name)) => language_for_path(Path::new(name)),
        (None, None) => String::new(),
    };

    let analysis = analyze(&input);
    tracing::info!(
        kind = ?analysis.kind,
        entropy = analysis.entropy,
        ws_ratio = analysis.whitespace_ratio,
        "input analysis"
    );
    if analysis.recommendation() == Recommendation::Pass && !input.is_empty() {
        tracing::warn!(kind = ?analysis.kind, "input does not look like text; compressing anyway");
    }

    let meta = FileMeta { name: args.filename, mtime: args.mtime, mode: args.mode };
    let result = codec.compress_detailed(&input, &language, Some(meta));
    tracing::info!(
        original = result.original_len,
        compressed = result.compressed_len,
        reduction_pct = result.reduction_pct(),
        "done"
    );
    write_stdout(&result.output)
}

fn run_expand() -> Result<()> {
    let input = read_stdin()?;
    let (header, output) = Codec::default().expand_detailed(&input);
    if let Some(meta) = header.and_then(|h| h.meta) {
        tracing::info!(name = ?meta.name, mtime = ?meta.mtime, mode = ?meta.mode, "original file");
    }
    write_stdout(&output)
}

fn print_table(title: &str, tier: Tier, table: &WordTable) {
    println!("{title} ({} entries)", table.len());
    println!("{}", "=".repeat(60));
    for (i, word) in table.iter().enumerate() {
        let token = Token::new(tier, i).to_string();
        println!("  {token:8} -> {word}");
    }
}

fn run_dict(table: DictTable) -> Result<()> {
    match table {
        DictTable::Global => print_table("GLOBAL DICTIONARY", Tier::Global, global_words()),
        DictTable::Type { tag } => {
            let tag = normalize_tag(&tag);
            let table = type_words(&tag);
            if table.is_empty() {
                bail!(
                    "no type dictionary for `{tag}` (available: {})",
                    known_languages().join(", ")
                );
            }
            print_table(&format!("TYPE DICTIONARY for .{tag}"), Tier::Type, table);
        }
    }
    Ok(())
}

fn run_verify(codec: Codec, args: VerifyArgs) -> Result<()> {
    let options = VerifyOptions { jobs: args.jobs, max_size: args.max_size };
    let summary = verify_paths(&codec, &args.paths, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for report in summary.reports.iter().filter(|r| !r.ok) {
            let reason = report.error.as_deref().unwrap_or("mismatch");
            println!("FAIL {} ({reason})", report.path.display());
        }
        println!(
            "{} files, {} skipped, {} failed, {} -> {} bytes ({:.1}% saved)",
            summary.files,
            summary.skipped,
            summary.failures,
            summary.original_bytes,
            summary.compressed_bytes,
            summary.reduction_pct(),
        );
    }

    if summary.failures > 0 {
        bail!("{} of {} files failed to round-trip", summary.failures, summary.files);
    }
    Ok(())
}
