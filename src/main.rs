//! placement-prep: resume scoring, aptitude practice and job matching

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use placement_prep::backend::{queries, MemoryBackend};
use placement_prep::cli::{self, Cli, Commands, ConfigAction, QuizInput};
use placement_prep::config::{Config, OutputFormat};
use placement_prep::error::{PlacementError, Result};
use placement_prep::feedback::{Toast, ToastEvent, ToastQueue};
use placement_prep::input::{InputManager, UploadValidator};
use placement_prep::jobs::{filter_jobs, rank_jobs, JobFilter, JobPosting, JobType};
use placement_prep::matching::{calculate_match_score, parse_skill_list};
use placement_prep::output::{save_report_to_file, suggest_filename, AnalysisReport, ReportGenerator};
use placement_prep::quiz::{self, QuizCommand, QuizRunner, QuizSession, QuizUpdate, QuizView, RunOutcome};
use placement_prep::resume::ResumeAnalyzer;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        if e.is_validation() {
            error!("{}", e.user_message());
        } else {
            error!("Command failed: {}", e.user_message());
        }
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            mime,
            output,
            save,
            detailed,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let generator =
                ReportGenerator::with_options(config.output.color_output, detailed || config.output.detailed);
            let toasts = ToastQueue::new();
            let mut toast_events = toasts.subscribe();

            let outcome = analyze_resume(&resume, mime.as_deref(), &config).await;
            announce_analysis(&toasts, &outcome);
            while let Ok(event) = toast_events.try_recv() {
                if let ToastEvent::Shown(toast) = event {
                    eprintln!("{}", toast);
                }
            }

            let report = outcome?;
            let content = generator.generate_report(&report, format)?;
            println!("{}", content);

            if let Some(path) = save {
                let path = resolve_save_path(path, format, &resume);
                save_report_to_file(&content, &path)?;
                println!("💾 Report saved to {}", path.display());
            }
        }

        Commands::Quiz { list, output, save } => {
            let generator = ReportGenerator::with_options(config.output.color_output, true);

            if list {
                println!("{}", generator.console().format_catalog(quiz::questions()));
                return Ok(());
            }

            let format = resolve_format(output.as_deref(), &config)?;
            let Some(result) = run_interactive_quiz(&config, &generator).await? else {
                println!("Attempt abandoned.");
                return Ok(());
            };

            let content = generator.generate_quiz_report(&result, format)?;
            println!("{}", content);

            if let Some(path) = save {
                let path = resolve_save_path(path, format, Path::new("aptitude"));
                save_report_to_file(&content, &path)?;
                println!("💾 Result saved to {}", path.display());
            }
        }

        Commands::Match { job, candidate } => {
            let job_skills = parse_skill_list(&job);
            let candidate_skills = parse_skill_list(&candidate);
            if job_skills.is_empty() {
                warn!("No job skills given; the match score is 0 by definition");
            }
            let score = calculate_match_score(&job_skills, &candidate_skills);
            println!("🎯 Match score: {}%", score);
        }

        Commands::Jobs {
            file,
            skills,
            search,
            mode,
            job_type,
            json,
        } => {
            let job_type = job_type.as_deref().map(str::parse::<JobType>).transpose()?;
            let filter = JobFilter::new(search, JobFilter::parse_mode(&mode)?);
            let candidate_skills = parse_skill_list(&skills);

            let store = MemoryBackend::from_jobs_file(&file)?;
            let jobs = queries::active_jobs(&store, job_type).await;
            info!("Loaded {} active postings from {}", jobs.len(), file.display());

            let visible = filter_jobs(&jobs, &filter);
            let ranked = rank_jobs(visible, &candidate_skills);

            let generator = ReportGenerator::with_options(config.output.color_output, false);
            if json {
                let rows: Vec<RankedJob> = ranked
                    .iter()
                    .map(|(job, match_score)| RankedJob {
                        job,
                        match_score: *match_score,
                    })
                    .collect();
                println!("{}", generator.json().to_json(&rows)?);
            } else {
                println!("{}", generator.console().format_job_matches(&ranked));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Upload:");
                println!("  Max size: {} bytes", config.upload.max_bytes);
                println!("  Allowed extensions: {}", config.upload.allowed_extensions.join(", "));
                println!("  Caching: {}", config.upload.enable_caching);
                println!("\nQuiz:");
                println!("  Duration: {}", quiz::format_time(config.quiz.duration_secs));
                println!("  Pass line: {:.0}%", config.quiz.pass_percentage);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ {} = {}", key, value);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

#[derive(Serialize)]
struct RankedJob<'a> {
    #[serde(flatten)]
    job: &'a JobPosting,
    match_score: u8,
}

/// Toast a successful analysis. Failures are left to the error log in `main`
/// so they are reported once.
fn announce_analysis(toasts: &ToastQueue, outcome: &Result<AnalysisReport>) -> Option<Toast> {
    outcome
        .as_ref()
        .ok()
        .map(|_| toasts.success("Resume analyzed successfully!"))
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(PlacementError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// A directory given to `--save` gets a generated file name inside it.
fn resolve_save_path(path: PathBuf, format: OutputFormat, source: &Path) -> PathBuf {
    if path.is_dir() {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "report".to_string());
        path.join(suggest_filename(format, &stem, true))
    } else {
        path
    }
}

async fn analyze_resume(path: &Path, mime: Option<&str>, config: &Config) -> Result<AnalysisReport> {
    let started = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .map_err(|e| PlacementError::OutputFormatting(e.to_string()))?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Reading {}", path.display()));

    let mut input = InputManager::with_validator(UploadValidator::from_config(&config.upload))
        .with_cache(config.upload.enable_caching);
    let text = match input.extract_text(path, mime).await {
        Ok(text) => text,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.set_message("Scoring resume");
    let analyzer = ResumeAnalyzer::new()?;
    let (analysis, facts) = analyzer.analyze_with_facts(&text);
    spinner.finish_and_clear();

    info!(
        "Scored {} words: overall {}, ATS {}",
        analysis.word_count, analysis.score, analysis.ats_compliance
    );

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(AnalysisReport::new(
        analysis,
        &facts,
        file_name,
        started.elapsed().as_millis() as u64,
    ))
}

const QUIZ_HELP: &str = "Commands: 1-4 choose an option | n next | p previous | g N jump to question N | m map | s submit | r restart | h help";

/// Run attempts until one completes or the user walks away. `r` restarts.
async fn run_interactive_quiz(
    config: &Config,
    generator: &ReportGenerator,
) -> Result<Option<quiz::QuizResult>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("🧠 Aptitude test: 50 questions, {} on the clock.", quiz::format_time(config.quiz.duration_secs));
    println!("{}", QUIZ_HELP);

    loop {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let mut runner = QuizRunner::new(QuizSession::from_config(&config.quiz));

        let (outcome, restart) = tokio::join!(
            runner.run(command_rx, Some(update_tx)),
            quiz_console(command_tx, update_rx, &mut lines, generator)
        );

        match outcome? {
            RunOutcome::Completed(result) => return Ok(Some(result)),
            RunOutcome::Abandoned if restart => {
                println!("\n🔄 Starting a fresh attempt.");
            }
            RunOutcome::Abandoned => return Ok(None),
        }
    }
}

/// Feed typed lines to the runner and print what it reports. Returns true
/// when the attempt ended because the user asked for a restart.
async fn quiz_console(
    commands: mpsc::Sender<QuizCommand>,
    mut updates: mpsc::UnboundedReceiver<QuizUpdate>,
    lines: &mut Lines<BufReader<Stdin>>,
    generator: &ReportGenerator,
) -> bool {
    let console = generator.console();
    let mut commands = Some(commands);
    let mut last_view: Option<QuizView> = None;
    let mut restart = false;

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(QuizUpdate::Changed(view)) => {
                    println!("{}", console.format_question(&view));
                    last_view = Some(view);
                }
                Some(QuizUpdate::Tick { remaining }) => {
                    if remaining % 60 == 0 || remaining <= 10 {
                        println!("⏱  {} remaining", quiz::format_time(remaining));
                    }
                }
                Some(QuizUpdate::Rejected(message)) => println!("⚠️  {}", message),
                Some(QuizUpdate::Finished(_)) => println!("\n⏹  Attempt finished."),
                None => return restart,
            },
            line = lines.next_line(), if commands.is_some() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) | Err(_) => {
                        // stdin is gone; closing the channel abandons the attempt
                        commands = None;
                        continue;
                    }
                };

                match cli::parse_quiz_input(&line) {
                    Ok(QuizInput::Command(command)) => {
                        if command == QuizCommand::Reset {
                            restart = true;
                        }
                        let closed = match &commands {
                            Some(tx) => tx.send(command).await.is_err(),
                            None => false,
                        };
                        if closed {
                            commands = None;
                        }
                    }
                    Ok(QuizInput::ShowMap) => match &last_view {
                        Some(view) => println!("{}", console.format_navigator(&view.marks)),
                        None => println!("The attempt has not started yet."),
                    },
                    Ok(QuizInput::Help) => println!("{}", QUIZ_HELP),
                    Ok(QuizInput::Nothing) => {}
                    Err(message) => println!("⚠️  {}", message),
                }
            }
        }
    }
}
