//! Process command implementation

use crate::config::CliConfig;
use crate::input::resolve_patterns;
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use brkit_engine::{BoundaryKind, Config, DataCache, Input, Output, Segmenter};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Boundary kind: character, word, sentence or line [default: sentence]
    #[arg(short, long)]
    pub kind: Option<BoundaryKind>,

    /// Custom table definition, replaces --kind
    #[arg(short, long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Segment files on the rayon thread pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "BRKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {self:?}");

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => cli_config.format()?,
        };

        let segmenter = self.build_segmenter(&cli_config)?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Segmenting {} file(s) by {}", files.len(), segmenter.data().name());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let outputs = if self.parallel {
            files
                .par_iter()
                .map(|path| segment_file(&segmenter, path, &progress))
                .collect::<Result<Vec<_>>>()?
        } else {
            files
                .iter()
                .map(|path| segment_file(&segmenter, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, cli_config.output.pretty_json);
        for (path, output) in files.iter().zip(&outputs) {
            formatter.format_output(&path.display().to_string(), output)?;
        }
        formatter.finish()?;

        let total: usize = outputs.iter().map(|o| o.metadata.segment_count).sum();
        log::info!("Wrote {total} segments");
        Ok(())
    }

    fn build_segmenter(&self, cli_config: &CliConfig) -> Result<Segmenter> {
        let kind = match self.kind {
            Some(kind) => kind,
            None => cli_config.kind()?,
        };

        let mut builder = Config::builder().kind(kind).include_text(true);
        // An explicit --kind beats a table named only in the config file
        let table = self.table.as_ref().or(if self.kind.is_none() {
            cli_config.processing.default_table.as_ref()
        } else {
            None
        });
        if let Some(table) = table {
            builder = builder.custom_table(table);
        }

        let cache = DataCache::new();
        Ok(Segmenter::with_config(builder.build()?, &cache)?)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn segment_file(segmenter: &Segmenter, path: &Path, progress: &ProgressReporter) -> Result<Output> {
    let output = segmenter
        .process(Input::from_file(path))
        .with_context(|| format!("Failed to segment {}", path.display()))?;
    log::debug!(
        "{}: {} segments",
        path.display(),
        output.metadata.segment_count
    );
    progress.file_completed(&path.display().to_string());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> ProcessArgs {
        ProcessArgs {
            input,
            output: None,
            format: None,
            kind: None,
            table: None,
            parallel: false,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_kind_defaults_to_sentence() {
        let segmenter = args(vec![]).build_segmenter(&CliConfig::default()).unwrap();
        assert_eq!(segmenter.data().name(), "sentence");
    }

    #[test]
    fn test_flag_overrides_config_kind() {
        let mut config = CliConfig::default();
        config.processing.default_kind = "line".to_string();

        let mut process = args(vec![]);
        assert_eq!(
            process.build_segmenter(&config).unwrap().data().name(),
            "line"
        );

        process.kind = Some(BoundaryKind::Word);
        assert_eq!(
            process.build_segmenter(&config).unwrap().data().name(),
            "word"
        );
    }

    #[test]
    fn test_parallel_output_matches_sequential() {
        let dir = TempDir::new().unwrap();
        for i in 0..6 {
            fs::write(
                dir.path().join(format!("{i}.txt")),
                format!("File {i} starts. It ends here!"),
            )
            .unwrap();
        }
        let pattern = format!("{}/*.txt", dir.path().display());

        let run = |parallel: bool| {
            let out = dir.path().join(format!("out-{parallel}.json"));
            let mut process = args(vec![pattern.clone()]);
            process.parallel = parallel;
            process.format = Some(OutputFormat::Text);
            process.output = Some(out.clone());
            process.execute().unwrap();
            fs::read_to_string(out).unwrap()
        };

        let sequential = run(false);
        assert_eq!(sequential.lines().count(), 12);
        assert_eq!(run(true), sequential);
    }
}
