//! CLI entrypoint for pawtype
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser};
use pawtype_application::{
    AuthSession, HistoryUseCase, NoSummaryProgress, SubmitQuizInput, SubmitQuizUseCase,
    SummarizeTypeInput, SummarizeTypeUseCase, SummaryProgressNotifier,
};
use pawtype_domain::{HistoryOrder, OutputFormat, ResultId, SummaryContext, TypeCatalog, score};
use pawtype_infrastructure::{AppStore, ConfigLoader, FileConfig, OpenAiGateway};
use pawtype_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, QuizReport, QuizRunner,
    parse_answers,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Account the CLI signs in with to read the sample history
const DEMO_EMAIL: &str = "demo@pawtype.dev";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    let output = OutputConfig::resolve(
        cli.output,
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    if !output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    info!("Starting pawtype");

    // === Dependency Injection ===
    let store = AppStore::with_samples()?;
    let summarizer = build_summarizer(&config, cli.offline)?;

    match command {
        Command::Quiz { name, breed } => run_quiz(&store, &summarizer, output, name, breed).await,
        Command::Score {
            answers,
            name,
            breed,
        } => {
            let values = parse_answers(&answers)?;
            let outcome = score(&values)?;
            let report = QuizReport::new(
                outcome.code,
                outcome.tallies,
                TypeCatalog::get_or_default(&outcome.code),
            );
            present(report, SummaryContext::new(name, breed), &summarizer, output).await
        }
        Command::Types => {
            let profiles = TypeCatalog::all();
            match output.format {
                OutputFormat::Full => print!("{}", ConsoleFormatter::format_types(&profiles)),
                OutputFormat::Code => {
                    for profile in &profiles {
                        println!("{}", profile.code);
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profiles)?),
            }
            Ok(())
        }
        Command::History {
            oldest_first,
            delete,
        } => run_history(&store, output, oldest_first, delete).await,
    }
}

fn build_summarizer(config: &FileConfig, offline: bool) -> Result<SummarizeTypeUseCase> {
    let params = config.summary.to_params();
    if offline {
        info!("Offline mode, using built-in phrases");
        return Ok(SummarizeTypeUseCase::offline(params));
    }

    let gateway = OpenAiGateway::from_config(&config.providers.openai, &config.summary)?;
    if gateway.is_configured() {
        debug!("Remote summaries via {}", gateway.endpoint());
    } else {
        info!(
            "No API key in ${} or config; summaries will use built-in phrases",
            config.providers.openai.api_key_env
        );
    }
    Ok(SummarizeTypeUseCase::new(Arc::new(gateway), params))
}

async fn run_quiz(
    store: &AppStore,
    summarizer: &SummarizeTypeUseCase,
    output: OutputConfig,
    name: Option<String>,
    breed: Option<String>,
) -> Result<()> {
    let mut runner = QuizRunner::new()?;
    let Some(answers) = runner.run(name, breed)? else {
        println!("Bye!");
        return Ok(());
    };

    let use_case = SubmitQuizUseCase::new(store.results(), store.auth());
    let submission = use_case
        .execute(SubmitQuizInput::new(
            answers.pet_name,
            answers.breed,
            answers.answers,
        ))
        .await?;

    let context = SummaryContext::new(&submission.pet.name, &submission.pet.breed);
    let report = QuizReport::new(
        submission.score.code,
        submission.score.tallies,
        submission.result.profile.clone(),
    )
    .with_pet(submission.pet.clone())
    .with_result(&submission.result);

    present(report, context, summarizer, output).await
}

/// Print a scored quiz. In full mode the profile is shown first and the
/// letter summary follows once it settles; Ctrl-C discards it.
async fn present(
    report: QuizReport,
    context: SummaryContext,
    summarizer: &SummarizeTypeUseCase,
    output: OutputConfig,
) -> Result<()> {
    let input = SummarizeTypeInput::new(report.code, context);

    match output.format {
        OutputFormat::Code => {
            println!("{}", ConsoleFormatter::format_code_only(&report));
        }
        OutputFormat::Json => {
            let outcome = summarizer.execute(input).await;
            println!("{}", ConsoleFormatter::format_json(&report.with_summary(outcome)));
        }
        OutputFormat::Full => {
            print!("{}", ConsoleFormatter::format_profile(&report));

            let cancellation = CancellationToken::new();
            let watcher = {
                let cancellation = cancellation.clone();
                tokio::spawn(async move {
                    if tokio::signal::ctrl_c().await.is_ok() {
                        cancellation.cancel();
                    }
                })
            };

            let progress: Box<dyn SummaryProgressNotifier> = if output.show_progress {
                Box::new(ProgressReporter::new())
            } else {
                Box::new(NoSummaryProgress)
            };
            let outcome = summarizer
                .execute_cancellable(input, &cancellation, progress.as_ref())
                .await;
            watcher.abort();

            match outcome {
                Some(outcome) => print!(
                    "{}",
                    ConsoleFormatter::format_summary(
                        &outcome.summary,
                        outcome.degraded.map(|d| d.to_string()).as_deref()
                    )
                ),
                None => println!("\nLetter summary cancelled."),
            }
        }
    }

    Ok(())
}

async fn run_history(
    store: &AppStore,
    output: OutputConfig,
    oldest_first: bool,
    delete: Option<String>,
) -> Result<()> {
    let auth = store.auth();
    auth.login(DEMO_EMAIL, "demo").await?;
    let history = HistoryUseCase::new(store.results(), auth);

    if let Some(id) = delete {
        history.delete(&ResultId::new(id.as_str())).await?;
        println!("Deleted {}", id);
    }

    let order = if oldest_first {
        HistoryOrder::OldestFirst
    } else {
        HistoryOrder::NewestFirst
    };
    let results = history.list(order).await?;

    match output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Code => {
            for result in &results {
                println!("{}", result.code);
            }
        }
        OutputFormat::Full => print!("{}", ConsoleFormatter::format_history(&results)),
    }

    store.clear_session();
    Ok(())
}
