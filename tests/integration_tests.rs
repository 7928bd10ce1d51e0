//! End-to-end tests through the public library API

use placement_prep::backend::{queries, MemoryBackend};
use placement_prep::config::{Config, DEFAULT_MAX_UPLOAD_BYTES};
use placement_prep::error::PlacementError;
use placement_prep::input::InputManager;
use placement_prep::jobs::{filter_jobs, rank_jobs, JobFilter, WorkMode};
use placement_prep::output::{AnalysisReport, ReportGenerator};
use placement_prep::quiz::{self, QuizCommand, QuizRunner, QuizSession, RunOutcome};
use placement_prep::resume::{analyze, ResumeAnalyzer};
use std::path::Path;
use tokio::sync::mpsc;

fn padded(base: &str, total_words: usize) -> String {
    let mut text = base.to_string();
    let filler = total_words.saturating_sub(base.split_whitespace().count());
    for _ in 0..filler {
        text.push_str(" filler");
    }
    text
}

#[tokio::test]
async fn test_sample_resume_end_to_end() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"), None)
        .await
        .unwrap();
    assert!(text.contains("Priya Sharma"));

    let analyzer = ResumeAnalyzer::new().unwrap();
    let (analysis, facts) = analyzer.analyze_with_facts(&text);
    assert_eq!(analysis, analyze(&text).unwrap());
    assert_eq!(analysis.completeness, 100);
    // every check except length (the fixture is well under 300 words)
    assert_eq!(analysis.ats_compliance, 80);
    assert!(analysis.present_keywords.contains(&"React".to_string()));
    assert!(analysis.present_keywords.contains(&"Node.js".to_string()));
    assert!(!analysis.present_keywords.contains(&"Java".to_string()));
    assert_eq!(analysis.missing_keywords.len(), 10);
    assert_eq!(analysis.missing_keywords[0], "Java");

    let generator = ReportGenerator::with_options(false, true);
    let report = AnalysisReport::new(analysis, &facts, "sample_resume.txt", 1);
    let awarded: Vec<u32> = report.ats_checks.iter().map(|c| c.awarded).collect();
    // everything but the length check
    assert_eq!(awarded, vec![10, 10, 10, 10, 20, 20, 0]);
    let json = generator
        .generate_report(&report, placement_prep::config::OutputFormat::Json)
        .unwrap();
    assert!(json.contains("\"atsCompliance\": 80"));
}

#[test]
fn test_ats_is_additive() {
    let base = "Email: a@b.com. Experience: Developed scalable APIs. \
                Increased throughput by 40%. Skills: JavaScript, Python.";
    let analysis = analyze(&padded(base, 400)).unwrap();

    assert!((300..=800).contains(&analysis.word_count));
    assert!(!analysis.sections.has_education);
    assert_eq!(analysis.ats_compliance, 90);
}

#[test]
fn test_text_without_markers_or_keywords() {
    let analysis = analyze("Hello there, nice day.").unwrap();

    assert_eq!(analysis.completeness, 0);
    assert_eq!(analysis.keywords, 0);
    assert!(analysis.present_keywords.is_empty());
    assert_eq!(
        analysis.missing_keywords,
        vec![
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Python",
            "Java",
            "C++",
            "SQL",
            "MongoDB",
            "PostgreSQL"
        ]
    );
}

#[test]
fn test_scores_stay_in_range_and_repeat() {
    let samples = [
        String::new(),
        "x".repeat(10_000),
        padded("Led a team. improved by a lot. university degree", 1200),
        "lowercase start.no space after period  and double spaces".to_string(),
    ];

    let analyzer = ResumeAnalyzer::new().unwrap();
    for text in &samples {
        let first = analyzer.analyze(text);
        for score in [
            first.score,
            first.completeness,
            first.ats_compliance,
            first.keywords,
            first.grammar,
        ] {
            assert!(score <= 100);
        }
        assert!(first.grammar >= 60);
        assert!(first.missing_keywords.len() <= 10);
        assert!(first
            .present_keywords
            .iter()
            .all(|k| !first.missing_keywords.contains(k)));
        assert_eq!(analyzer.analyze(text), first);
    }
}

#[tokio::test]
async fn test_upload_size_limit_is_inclusive() {
    let dir = tempfile::tempdir().unwrap();

    let at_limit = dir.path().join("at_limit.txt");
    std::fs::write(&at_limit, vec![b'a'; DEFAULT_MAX_UPLOAD_BYTES as usize]).unwrap();
    let over_limit = dir.path().join("over_limit.txt");
    std::fs::write(&over_limit, vec![b'a'; DEFAULT_MAX_UPLOAD_BYTES as usize + 1]).unwrap();

    let mut manager = InputManager::new().with_cache(false);
    let text = manager.extract_text(&at_limit, None).await.unwrap();
    assert_eq!(text.len(), DEFAULT_MAX_UPLOAD_BYTES as usize);

    let err = manager.extract_text(&over_limit, None).await.unwrap_err();
    assert!(matches!(err, PlacementError::FileTooLarge { .. }));
    assert_eq!(err.user_message(), "File size must be less than 5MB");
}

#[tokio::test]
async fn test_upload_type_checks() {
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("resume.exe");
    std::fs::write(&exe, b"MZ").unwrap();

    let mut manager = InputManager::new();
    assert!(matches!(
        manager.extract_text(&exe, None).await,
        Err(PlacementError::UnsupportedFileType(_))
    ));

    // a declared text/plain upload is accepted whatever the name says
    let text = manager.extract_text(&exe, Some("text/plain")).await.unwrap();
    assert_eq!(text, "MZ");

    let missing = dir.path().join("missing.txt");
    assert!(manager.extract_text(&missing, None).await.is_err());
}

#[test]
fn test_quiz_answer_survives_navigation() {
    let mut session = QuizSession::new();
    session.start().unwrap();

    session.go_to(5).unwrap();
    session.select_answer(2).unwrap();
    session.go_to(10).unwrap();
    session.go_to(5).unwrap();

    assert_eq!(session.answer(5), Some(2));
    assert_eq!(session.answered_count(), 1);
}

#[test]
fn test_quiz_submit_unanswered_and_perfect() {
    let mut blank = QuizSession::new();
    blank.start().unwrap();
    assert_eq!(blank.submit().unwrap(), 0);
    let result = blank.result().unwrap();
    assert_eq!(result.total, 50);
    assert!(!result.passed);

    let mut perfect = QuizSession::new();
    perfect.start().unwrap();
    for (i, question) in quiz::questions().iter().enumerate() {
        perfect.go_to(i).unwrap();
        perfect.select_answer(question.correct_answer as usize).unwrap();
    }
    assert_eq!(perfect.submit().unwrap(), 50);
    let result = perfect.result().unwrap();
    assert!(result.passed);
    assert_eq!(result.percentage, 100.0);
}

#[tokio::test(start_paused = true)]
async fn test_runner_submits_after_timeout_with_answers_kept() {
    let (tx, rx) = mpsc::channel(4);
    let first = quiz::questions()[0];
    tx.send(QuizCommand::Select(first.correct_answer as usize))
        .await
        .unwrap();

    let mut runner = QuizRunner::new(QuizSession::with_duration(30));
    let outcome = runner.run(rx, None).await.unwrap();

    match outcome {
        RunOutcome::Completed(result) => {
            assert_eq!(result.score, 1);
            assert_eq!(result.time_taken, 30);
        }
        RunOutcome::Abandoned => panic!("attempt should complete on timeout"),
    }
    drop(tx);
}

#[tokio::test]
async fn test_job_board_from_file() {
    let store = MemoryBackend::from_jobs_file(Path::new("tests/fixtures/jobs.json")).unwrap();

    let jobs = queries::active_jobs(&store, None).await;
    let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["job-backend", "job-frontend", "job-data"]);

    let skills = ["React", "Node.js", "PostgreSQL"];
    let everything = filter_jobs(&jobs, &JobFilter::default());
    let ranked: Vec<(&str, u8)> = rank_jobs(everything, &skills)
        .into_iter()
        .map(|(job, score)| (job.id.as_str(), score))
        .collect();
    assert_eq!(
        ranked,
        vec![("job-backend", 100), ("job-frontend", 33), ("job-data", 25)]
    );

    let remote = filter_jobs(&jobs, &JobFilter::new("", Some(WorkMode::Remote)));
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].company_name, "Globex");

    let search = filter_jobs(&jobs, &JobFilter::new("pune", None));
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].title, "Data Analyst");
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let mut changed = config.clone();
    changed.set_value("quiz.duration_secs", "1800").unwrap();
    changed.set_value("output.format", "json").unwrap();
    changed.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.quiz.duration_secs, 1800);
    assert_eq!(reloaded, changed);
    assert!(changed.set_value("quiz.colour", "red").is_err());
}
