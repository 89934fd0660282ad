use std::fs;
use std::path::Path;

use tempfile::TempDir;

use wordgap::error::{Result, WordgapError};
use wordgap::pipeline::Pipeline;
use wordgap::pipeline::config::PipelineConfig;
use wordgap::source::batch::BatchSource;
use wordgap::source::file::FileSource;
use wordgap::source::text::StringSource;
use wordgap::source::TextSource;
use wordgap::source::url::UrlSourceConfig;
use wordgap::vocabulary::{DiffMode, ReportFormat};

const ARTICLE: &str = "The Quick Brown Fox jumps over the lazy dog. The DOG barks.";

fn write_dictionary(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("knowed-words.md");
    fs::write(&path, "the\nquick\nfox\n").unwrap();
    path
}

fn config(dir: &Path, mode: DiffMode) -> PipelineConfig {
    PipelineConfig {
        dictionary_path: write_dictionary(dir),
        output_path: dir.join("unknown_words.md"),
        mode,
        ..PipelineConfig::default()
    }
}

#[test]
fn set_mode_reports_sorted_unique_words() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("article.txt");
    fs::write(&input, ARTICLE)?;

    let pipeline = Pipeline::new(config(dir.path(), DiffMode::Set))?;
    let summary = pipeline.run(&FileSource::new(&input))?;

    assert_eq!(
        summary.report.word_list(),
        vec!["barks", "brown", "dog", "jumps", "lazy", "over"]
    );
    assert_eq!(summary.report_format, ReportFormat::List);
    assert_eq!(
        fs::read_to_string(&summary.output_path)?,
        "barks\nbrown\ndog\njumps\nlazy\nover\n"
    );
    Ok(())
}

#[test]
fn frequency_mode_writes_markdown_table() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("article.txt");
    fs::write(&input, ARTICLE)?;

    let pipeline = Pipeline::new(config(dir.path(), DiffMode::Frequency))?;
    let summary = pipeline.run(&FileSource::new(&input))?;

    let words = &summary.report.words;
    assert_eq!(words[0].word, "dog");
    assert_eq!(words[0].count, 2);
    assert_eq!(
        summary.report.word_list()[1..],
        ["barks", "brown", "jumps", "lazy", "over"]
    );
    assert!(words[1..].iter().all(|w| w.count == 1));

    let table = fs::read_to_string(&summary.output_path)?;
    assert!(table.starts_with("# Unknown Words\n\n| Word | Frequency |\n|------|----------:|\n"));
    assert!(table.contains("| dog | 2 |\n"));
    Ok(())
}

#[test]
fn known_words_never_reported_regardless_of_case() -> Result<()> {
    let dir = TempDir::new()?;
    let pipeline = Pipeline::new(config(dir.path(), DiffMode::Frequency))?;

    let source = StringSource::new("shouting", "THE QUICK FOX the quick fox The Quick Fox");
    let summary = pipeline.run(&source)?;

    assert!(summary.report.is_empty());
    assert_eq!(summary.report.stats.known_tokens, 3);
    assert_eq!(summary.report.stats.total_tokens, 9);
    Ok(())
}

#[test]
fn missing_dictionary_fails_without_writing_output() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("unknown_words.md");
    let pipeline = Pipeline::new(PipelineConfig {
        dictionary_path: dir.path().join("absent.md"),
        output_path: output.clone(),
        ..PipelineConfig::default()
    })?;

    let result = pipeline.run(&StringSource::new("text", ARTICLE));

    assert!(matches!(result, Err(WordgapError::MissingFile { .. })));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn optional_dictionary_reports_every_word() -> Result<()> {
    let dir = TempDir::new()?;
    let pipeline = Pipeline::new(PipelineConfig {
        dictionary_path: dir.path().join("absent.md"),
        require_known_words: false,
        mode: DiffMode::Set,
        output_path: dir.path().join("out.txt"),
        ..PipelineConfig::default()
    })?;

    let summary = pipeline.run(&StringSource::new("text", "Hello hello world"))?;

    assert_eq!(summary.known_words, 0);
    assert_eq!(summary.report.word_list(), vec!["hello", "world"]);
    Ok(())
}

#[test]
fn batch_with_failing_unit_still_reports() -> Result<()> {
    let dir = TempDir::new()?;
    let pipeline = Pipeline::new(config(dir.path(), DiffMode::Set))?;

    let batch = BatchSource::new()
        .add_source(Box::new(StringSource::new("message 1", "The fox sleeps")))
        .add_source(Box::new(FileSource::new(dir.path().join("gone.txt"))))
        .add_source(Box::new(StringSource::new("message 3", "<p>Quick owls</p>").html()));

    let summary = pipeline.run(&batch)?;

    assert_eq!(summary.report.word_list(), vec!["owls", "sleeps"]);
    assert_eq!(summary.units_processed, 2);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.output_path.exists());
    Ok(())
}

#[test]
fn batch_skips_unit_that_is_not_utf8() -> Result<()> {
    let dir = TempDir::new()?;
    let binary = dir.path().join("attachment.txt");
    fs::write(&binary, [0xff, 0xfe, b'x'])?;
    let pipeline = Pipeline::new(config(dir.path(), DiffMode::Set))?;

    let batch = BatchSource::new()
        .add_source(Box::new(StringSource::new("message 1", "alpha")))
        .add_source(Box::new(FileSource::new(&binary)))
        .add_source(Box::new(StringSource::new("message 3", "beta")));

    let summary = pipeline.run(&batch)?;

    assert_eq!(summary.report.word_list(), vec!["alpha", "beta"]);
    assert_eq!(summary.units_processed, 2);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.output_path.exists());
    Ok(())
}

#[test]
fn batch_inputs_with_malformed_url_still_report() -> Result<()> {
    let dir = TempDir::new()?;
    let note = dir.path().join("note.txt");
    fs::write(&note, "Quick zebras")?;
    let pipeline = Pipeline::new(config(dir.path(), DiffMode::Set))?;

    let inputs = vec!["http://exa mple.com".to_string(), note.display().to_string()];
    let batch = BatchSource::from_inputs(&inputs, &UrlSourceConfig::default());

    let summary = pipeline.run(&batch)?;

    assert_eq!(summary.report.word_list(), vec!["zebras"]);
    assert_eq!(summary.units_processed, 1);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].contains("Invalid URL"));
    Ok(())
}

#[test]
fn batch_where_every_unit_fails_is_unavailable() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("unknown_words.md");
    let pipeline = Pipeline::new(config(dir.path(), DiffMode::Set))?;

    let batch: BatchSource = ["a.txt", "b.txt"]
        .iter()
        .map(|name| Box::new(FileSource::new(dir.path().join(name))) as Box<dyn TextSource>)
        .collect();

    let result = pipeline.run(&batch);

    assert!(matches!(result, Err(WordgapError::SourceUnavailable(_))));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn rerun_overwrites_previous_report() -> Result<()> {
    let dir = TempDir::new()?;
    let pipeline = Pipeline::new(config(dir.path(), DiffMode::Set))?;

    let first = pipeline.run(&StringSource::new("one", ARTICLE))?;
    let second = pipeline.run(&StringSource::new("two", "zebra"))?;

    assert_eq!(first.output_path, second.output_path);
    assert_eq!(fs::read_to_string(&second.output_path)?, "zebra\n");
    Ok(())
}
