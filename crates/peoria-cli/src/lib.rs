pub mod config;
pub mod render;
pub mod storage;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use peoria_core::config::HOLE_COUNT;
use peoria_core::{
    CompetitionDocument, CompletionSummary, Player, calculate_all_results,
    generate_hidden_holes_seeded, generate_random_hidden_holes, standard_hidden_holes,
};

use config::{CliConfig, OutputFormat};

/// New Peoria handicap rankings for golf competitions.
#[derive(Debug, Parser)]
#[command(name = "peoria", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write an empty competition with the default course and settings.
    Init {
        #[arg(long, default_value = "competition.json")]
        out: PathBuf,
    },
    /// Rank every complete player in a competition.
    Rank {
        doc: PathBuf,
        /// Previous result batch, for rank-change arrows.
        #[arg(long)]
        previous: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Neither read nor update the session results file.
        #[arg(long)]
        no_session: bool,
    },
    /// Draw 12 hidden holes, 6 per half.
    HiddenHoles {
        #[arg(long)]
        seed: Option<u64>,
        /// Use the customary fixed layout instead of a random draw.
        #[arg(long, conflicts_with = "seed")]
        standard: bool,
        /// Store the selection in this competition.
        #[arg(long)]
        apply: Option<PathBuf>,
    },
    /// Check a competition file without ranking it.
    Validate {
        doc: PathBuf,
        /// Also print the course card and each player's progress.
        #[arg(long)]
        verbose: bool,
    },
    /// Append a player with a generated id.
    AddPlayer {
        doc: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: Option<u32>,
        /// Hole scores in order, comma separated. Missing holes stay blank.
        #[arg(long, value_delimiter = ',')]
        scores: Vec<u32>,
    },
}

/// Run one command, writing user-facing output to `out`.
pub fn run(cli: Cli, config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Init { out: path } => {
            storage::save_document(&path, &CompetitionDocument::default())?;
            writeln!(out, "Created {}", path.display())?;
        },
        Command::Rank {
            doc,
            previous,
            format,
            no_session,
        } => rank(config, &doc, previous, format, no_session, out)?,
        Command::HiddenHoles {
            seed,
            standard,
            apply,
        } => {
            let holes = match (standard, seed) {
                (true, _) => standard_hidden_holes(),
                (false, Some(seed)) => generate_hidden_holes_seeded(seed),
                (false, None) => generate_random_hidden_holes(),
            };
            writeln!(out, "{}", render::render_hidden_holes(&holes))?;
            if let Some(path) = apply {
                let mut doc = storage::load_document(&path)?;
                doc.config.hidden_holes = holes;
                storage::save_document(&path, &doc)?;
                writeln!(out, "Updated {}", path.display())?;
            }
        },
        Command::Validate { doc, verbose } => {
            let loaded = storage::load_document(&doc)?;
            loaded
                .config
                .validate()
                .with_context(|| format!("invalid config in {}", doc.display()))?;
            let summary = CompletionSummary::of(&loaded.players);
            writeln!(
                out,
                "OK: {} players, {} complete",
                summary.total, summary.eligible
            )?;
            if verbose {
                write!(out, "{}", render::render_course(&loaded.config))?;
                write!(out, "{}", render::render_progress(&loaded.players))?;
            }
        },
        Command::AddPlayer {
            doc,
            name,
            age,
            scores,
        } => {
            if scores.len() > HOLE_COUNT {
                bail!("expected at most {HOLE_COUNT} scores, got {}", scores.len());
            }
            let mut loaded = storage::load_document(&doc)?;
            let mut player = Player::new(name);
            player.age = age;
            player.scores[..scores.len()].copy_from_slice(&scores);
            writeln!(out, "Added {} ({})", player.name, player.id)?;
            loaded.players.push(player);
            storage::save_document(&doc, &loaded)?;
        },
    }
    Ok(())
}

fn rank(
    config: &CliConfig,
    doc: &std::path::Path,
    previous: Option<PathBuf>,
    format: Option<OutputFormat>,
    no_session: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let loaded = storage::load_document(doc)?;

    let session_path = (!no_session).then_some(&config.session.results_path);
    let previous_results = previous
        .as_deref()
        .or(session_path.map(PathBuf::as_path))
        .and_then(storage::load_results);

    let results = calculate_all_results(
        &loaded.players,
        &loaded.config,
        previous_results.as_deref(),
    )
    .with_context(|| format!("cannot rank {}", doc.display()))?;
    let completion = CompletionSummary::of(&loaded.players);
    if !completion.all_complete() {
        tracing::info!(
            incomplete = completion.incomplete(),
            "Some players have not finished entering scores"
        );
    }

    match format.unwrap_or(config.output.format) {
        OutputFormat::Table => {
            write!(out, "{}", render::render_table(&results, completion, &config.output))?;
        },
        OutputFormat::Json => writeln!(out, "{}", render::render_json(&results, completion)?)?,
    }

    if let Some(path) = session_path {
        storage::save_results(path, &results)?;
    }
    Ok(())
}
