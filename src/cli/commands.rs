//! Command implementations for the wordgap CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::source::batch::BatchSource;
use crate::source::file::FileSource;
use crate::source::url::UrlSource;
use crate::source::TextSource;
use crate::vocabulary::diff::DiffMode;
use crate::vocabulary::known_words::KnownWords;

/// Execute a CLI command.
pub fn execute_command(args: WordgapArgs) -> Result<()> {
    match &args.command {
        Command::File(file_args) => analyze_file(file_args, &args),
        Command::Url(url_args) => analyze_url(url_args, &args),
        Command::Batch(batch_args) => analyze_batch(batch_args, &args),
        Command::Dictionary(dictionary_args) => show_dictionary(dictionary_args, &args),
    }
}

fn run_pipeline(pipeline: Pipeline, source: &dyn TextSource, cli_args: &WordgapArgs) -> Result<()> {
    info!("Extracting words from {}", source.label());
    let summary = pipeline.run(source)?;
    output_run_summary(&summary, cli_args)
}

/// Diff a local text file; frequency mode by default.
fn analyze_file(args: &FileArgs, cli_args: &WordgapArgs) -> Result<()> {
    let config = args.run.to_config(DiffMode::Frequency)?;
    let source = FileSource::new(&args.text_file);
    run_pipeline(Pipeline::new(config)?, &source, cli_args)
}

/// Diff a web page; set mode by default.
fn analyze_url(args: &UrlArgs, cli_args: &WordgapArgs) -> Result<()> {
    let mut config = args.run.to_config(DiffMode::Set)?;
    if let Some(timeout) = args.timeout {
        config.http.timeout_secs = timeout;
    }
    let source = UrlSource::with_config(&args.url, config.http.clone())?;
    run_pipeline(Pipeline::new(config)?, &source, cli_args)
}

/// Diff many inputs as one run; set mode by default.
fn analyze_batch(args: &BatchArgs, cli_args: &WordgapArgs) -> Result<()> {
    let mut config = args.run.to_config(DiffMode::Set)?;
    if let Some(timeout) = args.timeout {
        config.http.timeout_secs = timeout;
    }
    if let Some(max_units) = args.max_units {
        config.max_units = max_units;
    }
    let pipeline = Pipeline::new(config)?;

    let batch = BatchSource::from_inputs(&args.inputs, &pipeline.config().http)
        .with_max_units(pipeline.config().max_units);
    if args.inputs.len() > batch.len() {
        info!(
            "Limiting batch to {} of {} inputs",
            batch.len(),
            args.inputs.len()
        );
    }

    run_pipeline(pipeline, &batch, cli_args)
}

/// Report what a dictionary file contains.
fn show_dictionary(args: &DictionaryArgs, cli_args: &WordgapArgs) -> Result<()> {
    let (known, detected_format) = KnownWords::load_with_format(&args.path, args.dictionary_format)?;

    let stats = DictionaryStats {
        path: args.path.display().to_string(),
        detected_format,
        word_count: known.len(),
        words: args
            .words
            .then(|| known.sorted_words().into_iter().map(String::from).collect()),
    };

    output_dictionary_stats(&stats, cli_args)
}
