//! `mathprep` command line: one subcommand per generate action.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use mathprep_lib::config::AppConfig;
use mathprep_lib::curriculum::{self, GradeLevel};
use mathprep_lib::document::{self, DocumentHeader};
use mathprep_lib::ContentGenerator;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mathprep", version, about = "Grade VII mathematics lessons, quizzes, worksheets and scenarios")]
struct Cli {
    /// TOML config file (defaults to $MATHPREP_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List curriculum themes
    Themes,
    /// List topics, optionally for one theme
    Topics {
        #[arg(long)]
        theme: Option<String>,
    },
    /// Generate a lesson with objectives
    Lesson(DocumentArgs),
    /// Generate a five-question quiz with an answer key
    Quiz(DocumentArgs),
    /// Generate a lesson scenario in the official preparation format
    Scenario(DocumentArgs),
    /// Generate a worksheet without solutions
    Worksheet(DocumentArgs),
    /// Generate the body of a canvas `draw(ctx, width, height, frame)` function
    Animation {
        description: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Start the desktop shell
    #[cfg(feature = "desktop")]
    Desktop,
}

#[derive(Args, Debug)]
struct DocumentArgs {
    /// Topic id or name from the curriculum
    #[arg(long)]
    topic: Option<String>,
    /// Theme id; without --topic its first topic is used
    #[arg(long)]
    theme: Option<String>,
    /// Use --topic as free text instead of looking it up
    #[arg(long, requires = "topic")]
    free: bool,
    /// Teacher name printed in the header
    #[arg(long)]
    teacher: Option<String>,
    /// School name printed in the header
    #[arg(long)]
    school: Option<String>,
    /// Print the generated record as JSON instead of a document
    #[arg(long)]
    json: bool,
    /// Write the output to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Topic name sent to the model plus the theme title for the header.
#[derive(Debug, PartialEq)]
struct Selection {
    topic: String,
    theme: Option<String>,
}

impl DocumentArgs {
    fn select(&self) -> Result<Selection> {
        let theme_title = |id: &str| curriculum::theme(id).map(|t| t.title.to_string());

        if let Some(theme) = &self.theme {
            if curriculum::theme(theme).is_none() {
                bail!("Unknown theme '{}'. Run `mathprep themes` to list them.", theme);
            }
        }

        match (&self.topic, &self.theme) {
            (Some(topic), theme) if self.free => Ok(Selection {
                topic: topic.trim().to_string(),
                theme: theme.as_deref().and_then(theme_title),
            }),
            (Some(topic), theme) => {
                let found = curriculum::find_topic(topic).with_context(|| {
                    format!("Unknown topic '{}'. Use --free for a custom topic.", topic)
                })?;
                if let Some(theme) = theme.as_deref().filter(|t| *t != found.theme_id) {
                    bail!(
                        "Topic '{}' belongs to theme '{}', not '{}'.",
                        found.name, found.theme_id, theme
                    );
                }
                Ok(Selection {
                    topic: found.name.to_string(),
                    theme: found.theme().map(|t| t.title.to_string()),
                })
            }
            (None, theme) => {
                let theme_id = theme
                    .as_deref()
                    .unwrap_or_else(|| curriculum::themes()[0].id);
                let found = curriculum::default_topic(theme_id)
                    .with_context(|| format!("Theme '{}' has no topics", theme_id))?;
                Ok(Selection {
                    topic: found.name.to_string(),
                    theme: theme_title(theme_id),
                })
            }
        }
    }

    fn header(&self, selection: &Selection, config: &AppConfig) -> DocumentHeader {
        DocumentHeader::new(selection.topic.clone())
            .with_theme(selection.theme.clone())
            .with_teacher(self.teacher.clone().or_else(|| config.document.teacher.clone()))
            .with_school(self.school.clone().or_else(|| config.document.school.clone()))
            .generated_on(chrono::Local::now().date_naive())
    }

    fn emit<T: Serialize>(&self, record: &T, render: impl FnOnce() -> String) -> Result<()> {
        let text = if self.json {
            serde_json::to_string_pretty(record)?
        } else {
            render()
        };
        write_output(self.out.as_ref(), &text)
    }
}

fn write_output(out: Option<&PathBuf>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Document written");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_themes() {
    for theme in curriculum::themes() {
        println!("{:<14} {}", theme.id, theme.title);
    }
}

fn list_topics(theme: Option<&str>) -> Result<()> {
    let themes: Vec<_> = match theme {
        Some(id) => vec![curriculum::theme(id)
            .with_context(|| format!("Unknown theme '{}'", id))?],
        None => curriculum::themes().iter().collect(),
    };
    for theme in themes {
        println!("{}", theme.title);
        for topic in curriculum::topics_for(theme.id) {
            println!("  {:<4} {}", topic.id, topic.name);
        }
    }
    Ok(())
}

async fn generate(command: Command, config: Arc<AppConfig>) -> Result<()> {
    let generator = ContentGenerator::from_config(config)?;
    let config = generator.config();

    match command {
        Command::Lesson(args) => {
            let selection = args.select()?;
            let lesson = generator
                .generate_lesson(&selection.topic, GradeLevel::VII)
                .await?;
            let header = args.header(&selection, config);
            args.emit(&lesson, || document::render_lesson(&header, &lesson))
        }
        Command::Quiz(args) => {
            let selection = args.select()?;
            let questions = generator
                .generate_quiz(&selection.topic, GradeLevel::VII)
                .await?;
            let header = args.header(&selection, config);
            args.emit(&questions, || document::render_quiz(&header, &questions))
        }
        Command::Scenario(args) => {
            let selection = args.select()?;
            let scenario = generator.generate_scenario(&selection.topic).await?;
            let header = args.header(&selection, config);
            args.emit(&scenario, || document::render_scenario(&header, &scenario))
        }
        Command::Worksheet(args) => {
            let selection = args.select()?;
            let worksheet = generator.generate_worksheet(&selection.topic).await?;
            let header = args.header(&selection, config);
            args.emit(&worksheet, || document::render_worksheet(&header, &worksheet))
        }
        Command::Animation { description, out } => {
            let code = generator.generate_canvas_animation(&description).await?;
            write_output(out.as_ref(), &code)
        }
        other => bail!("{:?} does not call the generation API", other),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref())?;
    debug!(model = %config.model, api_url = %config.api_url, "Configuration resolved");

    match cli.command {
        Command::Themes => {
            list_themes();
            Ok(())
        }
        Command::Topics { theme } => list_topics(theme.as_deref()),
        #[cfg(feature = "desktop")]
        Command::Desktop => mathprep_lib::run(config),
        command => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start the async runtime")?;
            runtime.block_on(generate(command, Arc::new(config)))
        }
    }
}

fn main() -> ExitCode {
    // Before the subscriber, so a RUST_LOG from .env takes effect.
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Грешка: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
