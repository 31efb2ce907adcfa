//! lexsieve - split a lexical database into clean word lists
//!
//! Words in one file, everything else in another. Sorted, every time the same.

mod config;
mod lexicon;
mod output;
mod pipeline;
mod source;

use anyhow::{bail, Result};
use clap::Parser;
use config::Job;
use output::FileSink;
use source::SourceSpec;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Manifest used when neither `--manifest` nor `--source` is given
const MANIFEST_ENV: &str = "LEXSIEVE_MANIFEST";

#[derive(Parser)]
#[command(
    name = "lexsieve",
    about = "Split lexical entries into a sorted word list and a sorted rejects list"
)]
struct Cli {
    /// TOML manifest listing one or more jobs (falls back to $LEXSIEVE_MANIFEST without --source)
    #[arg(long, conflicts_with_all = ["source", "words", "other"])]
    manifest: Option<PathBuf>,

    /// Entry source: PATH, text:PATH, - (stdin), sqlite:PATH[#table.column] or sqlite:
    #[arg(long)]
    source: Option<SourceSpec>,

    /// Word list destination (repeat to write identical copies)
    #[arg(long)]
    words: Vec<PathBuf>,

    /// Destination for entries that are not words
    #[arg(long)]
    other: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Build the job list. An explicit `--source` wins over the manifest
    /// named in the environment.
    fn jobs(self, env_manifest: Option<PathBuf>) -> Result<Vec<Job>> {
        if let Some(source) = self.source {
            let job = Job::new(source, self.words, self.other);
            job.validate()?;
            return Ok(vec![job]);
        }

        if !self.words.is_empty() || self.other.is_some() {
            bail!("--words and --other require --source");
        }
        match self.manifest.or(env_manifest) {
            Some(path) => Ok(config::load_manifest(&path)?),
            None => bail!("either --manifest or --source is required"),
        }
    }
}

fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let jobs = cli.jobs(std::env::var_os(MANIFEST_ENV).map(PathBuf::from))?;
    let mut sink = FileSink;

    for job in &jobs {
        let report = pipeline::run_job(job, &mut sink)?;
        println!("{}", report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ConfigError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lexsieve").chain(args.iter().copied())).unwrap()
    }

    fn write_manifest(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("jobs.toml");
        std::fs::write(
            &path,
            "[[job]]\nsource = \"a.txt\"\nwords = [\"a.out\"]\n\n\
             [[job]]\nsource = \"b.txt\"\nwords = [\"b.out\"]\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_single_job_from_flags() {
        let jobs = parse(&["--source", "words.txt", "--words", "a.txt", "--words", "b.txt"])
            .jobs(None)
            .unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].source, SourceSpec::Text(PathBuf::from("words.txt")));
        assert_eq!(jobs[0].words, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(jobs[0].other, None);
    }

    #[test]
    fn test_source_wins_over_env_manifest() {
        let jobs = parse(&["--source", "words.txt", "--words", "out.txt"])
            .jobs(Some(PathBuf::from("/nonexistent/jobs.toml")))
            .unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].words, vec![PathBuf::from("out.txt")]);
    }

    #[test]
    fn test_env_manifest_without_source() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path());

        let jobs = parse(&[]).jobs(Some(manifest)).unwrap();
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_manifest_flag_wins_over_env() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path());
        let manifest = manifest.to_str().unwrap();

        let jobs = parse(&["--manifest", manifest])
            .jobs(Some(PathBuf::from("/nonexistent/jobs.toml")))
            .unwrap();
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_manifest_flag_conflicts_with_source() {
        let result = Cli::try_parse_from([
            "lexsieve",
            "--manifest",
            "jobs.toml",
            "--source",
            "words.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_neither_manifest_nor_source() {
        let err = parse(&[]).jobs(None).unwrap_err();
        assert!(err.to_string().contains("either --manifest or --source"));
    }

    #[test]
    fn test_source_without_words() {
        let err = parse(&["--source", "words.txt"]).jobs(None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NoDestination(_))
        ));
    }

    #[test]
    fn test_words_without_source() {
        let err = parse(&["--words", "out.txt"])
            .jobs(Some(PathBuf::from("jobs.toml")))
            .unwrap_err();
        assert!(err.to_string().contains("require --source"));
    }

    #[test]
    fn test_bad_source_spec_rejected_by_parser() {
        let result = Cli::try_parse_from(["lexsieve", "--source", "sqlite:wn.db#words"]);
        assert!(result.is_err());
    }
}
