use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use keymix::{
    CompatibilityEngine, CompatibilityVerdict, KeySuggestion, MusicalKey, RankedTrack, Session,
    Track,
};

#[derive(Parser, Debug)]
#[clap(name = "keymix", about = "Score how well tracks mix by key and tempo")]
struct CliArgs {
    /// Log debug output to stderr (overrides KEYMIX_LOG).
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two tracks by key and tempo.
    Compare {
        key_a: String,
        tempo_a: String,
        key_b: String,
        tempo_b: String,
        #[clap(long)]
        json: bool,
    },
    /// Rank the candidates of a session file against its reference track.
    Rank {
        session: PathBuf,
        /// Overrides the session's min-score.
        #[clap(long)]
        min_score: Option<u8>,
        /// Overrides the session's limit.
        #[clap(long)]
        limit: Option<usize>,
        #[clap(long)]
        json: bool,
    },
    /// List keys that mix well with a key.
    Suggest {
        key: String,
        #[clap(long)]
        json: bool,
    },
    /// Show how a key string is understood.
    Parse { key: String },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .with_env_var("KEYMIX_LOG")
            .from_env_lossy()
    };

    // Only fails if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_verdict(verdict: &CompatibilityVerdict, indent: &str) {
    println!(
        "{}Overall: {} ({}) - {}",
        indent, verdict.overall_score, verdict.overall_label, verdict.description
    );
    println!(
        "{}  Key:   {:>3} {:<10} {}",
        indent, verdict.key.score, verdict.key.label, verdict.key.reason
    );
    println!(
        "{}  Tempo: {:>3} {:<10} {}",
        indent, verdict.tempo.score, verdict.tempo.label, verdict.tempo.reason
    );
    for tip in &verdict.advice {
        println!("{}  * {}", indent, tip);
    }
}

fn print_ranked(ranked: &[RankedTrack<Track>]) {
    if ranked.is_empty() {
        println!("No compatible tracks found.");
        return;
    }
    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {} [{} @ {}]",
            i + 1,
            entry.track.display_name(),
            entry.track.key,
            entry.track.tempo
        );
        print_verdict(&entry.compatibility, "    ");
    }
}

fn print_suggestions(reference: &str, suggestions: &[KeySuggestion]) {
    if suggestions.is_empty() {
        println!("'{}' is not a recognized key.", reference);
        return;
    }
    for s in suggestions {
        println!("{:<4} {:<4} {:>3}  {}", s.key.to_string(), s.key.camelot(), s.score, s.reason);
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let engine = CompatibilityEngine::new();

    match args.command {
        Command::Compare {
            key_a,
            tempo_a,
            key_b,
            tempo_b,
            json,
        } => {
            let verdict = engine.compare(&Track::new(key_a, tempo_a), &Track::new(key_b, tempo_b));
            if json {
                print_json(&verdict)?;
            } else {
                print_verdict(&verdict, "");
            }
        }
        Command::Rank {
            session,
            min_score,
            limit,
            json,
        } => {
            let mut loaded = Session::load(&session)
                .with_context(|| format!("loading session {}", session.display()))?;
            if min_score.is_some() {
                loaded.min_score = min_score;
            }
            if limit.is_some() {
                loaded.limit = limit;
            }
            let ranked = engine.rank_session(&loaded)?;
            if json {
                print_json(&ranked)?;
            } else {
                print_ranked(&ranked);
            }
        }
        Command::Suggest { key, json } => {
            let suggestions = engine.suggest(&key);
            if json {
                print_json(&suggestions)?;
            } else {
                print_suggestions(&key, &suggestions);
            }
        }
        Command::Parse { key } => match MusicalKey::parse(&key) {
            Some(parsed) => {
                println!("Key:      {}", parsed);
                println!("Name:     {}", parsed.long_name());
                println!("Circle:   {}", parsed.circle_position());
                println!("Camelot:  {}", parsed.camelot());
                println!("Relative: {}", parsed.relative());
            }
            None => println!("'{}' is not a recognized key.", key),
        },
    }

    Ok(())
}
