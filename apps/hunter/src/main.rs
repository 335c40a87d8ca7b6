mod cluster;
mod config;
mod enhance;
mod errors;
mod interview;
mod llm_client;
mod matching;
mod report;
mod sources;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cluster::cluster_jobs;
use crate::config::Config;
use crate::enhance::enhance_and_suggest;
use crate::interview::generate_interview_questions;
use crate::llm_client::LlmClient;
use crate::matching::{find_matching_jobs, scoring, JobPosting};
use crate::sources::{CsvJobSource, FileResumeSource, ResumeSource};

/// Resume enhancement and job matching pipeline.
#[derive(Debug, Parser)]
#[command(name = "hunter", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank job postings from a CSV by relevance to a resume (no LLM)
    Match {
        /// Resume file (.txt, .md, or .pdf)
        #[arg(long)]
        resume: PathBuf,
        /// CSV file of job postings
        #[arg(long)]
        jobs: PathBuf,
        /// Maximum number of matches to return
        #[arg(long, default_value_t = scoring::DEFAULT_MAX_RESULTS, value_parser = parse_positive)]
        max_results: usize,
        /// Print matches as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Improve a resume for a role and detect gaps against a job description
    Enhance {
        /// Resume file (.txt, .md, or .pdf)
        #[arg(long)]
        resume: PathBuf,
        /// Job description text file
        #[arg(long)]
        job: PathBuf,
        /// Target role, e.g. "Machine Learning Engineer"
        #[arg(long)]
        role: String,
        /// Directory for the generated artifacts
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
    /// Cluster the best-matching jobs and generate interview questions
    Interview {
        /// Resume file (.txt, .md, or .pdf)
        #[arg(long)]
        resume: PathBuf,
        /// CSV file of job postings
        #[arg(long)]
        jobs: PathBuf,
        /// Maximum number of matches to cluster
        #[arg(long, default_value_t = scoring::DEFAULT_MAX_RESULTS, value_parser = parse_positive)]
        max_results: usize,
        /// Number of clusters
        #[arg(long, default_value_t = 3, value_parser = parse_positive)]
        clusters: usize,
        /// Directory for the generated artifacts
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
    /// Full pipeline: enhance, match, cluster, and interview prep
    Pipeline {
        /// Resume file (.txt, .md, or .pdf)
        #[arg(long)]
        resume: PathBuf,
        /// Job description text file
        #[arg(long)]
        job: PathBuf,
        /// Target role
        #[arg(long)]
        role: String,
        /// CSV file of job postings
        #[arg(long)]
        jobs: PathBuf,
        /// Maximum number of matches to return
        #[arg(long, default_value_t = scoring::DEFAULT_MAX_RESULTS, value_parser = parse_positive)]
        max_results: usize,
        /// Number of clusters
        #[arg(long, default_value_t = 3, value_parser = parse_positive)]
        clusters: usize,
        /// Directory for the generated artifacts
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
}

fn parse_positive(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hunter v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Commands::Match {
            resume,
            jobs,
            max_results,
            json,
        } => run_match(resume, jobs, max_results, json),
        Commands::Enhance {
            resume,
            job,
            role,
            out_dir,
        } => run_enhance(&config, resume, job, role, out_dir).await,
        Commands::Interview {
            resume,
            jobs,
            max_results,
            clusters,
            out_dir,
        } => run_interview(&config, resume, jobs, max_results, clusters, out_dir).await,
        Commands::Pipeline {
            resume,
            job,
            role,
            jobs,
            max_results,
            clusters,
            out_dir,
        } => {
            run_enhance(&config, resume.clone(), job, role, out_dir.clone()).await?;
            let matches = run_match_to_files(&resume, &jobs, max_results, &out_dir)?;
            run_interview_on(&config, matches, clusters, &out_dir).await
        }
    }
}

/// Builds the LLM client, failing early when no API key is configured.
fn build_llm(config: &Config) -> Result<LlmClient> {
    let api_key = config.require_api_key()?.to_string();
    Ok(LlmClient::new(
        api_key,
        config.metis_endpoint.clone(),
        config.model_name.clone(),
        config.llm_timeout_secs,
    ))
}

fn load_matches(resume: &Path, jobs: &Path, max_results: usize) -> Vec<JobPosting> {
    let resume_source = FileResumeSource::new(resume);
    let job_source = CsvJobSource::new(jobs);
    find_matching_jobs(&resume_source, &job_source, max_results)
}

fn run_match(resume: PathBuf, jobs: PathBuf, max_results: usize, json: bool) -> Result<()> {
    let matches = load_matches(&resume, &jobs, max_results);
    if json {
        println!("{}", report::render_matches_json(&matches)?);
    } else {
        print!("{}", report::render_matches(&matches));
    }
    Ok(())
}

fn run_match_to_files(
    resume: &Path,
    jobs: &Path,
    max_results: usize,
    out_dir: &Path,
) -> Result<Vec<JobPosting>> {
    let matches = load_matches(resume, jobs, max_results);
    report::write_file(&out_dir.join("matches.txt"), &report::render_matches(&matches))?;
    report::write_file(
        &out_dir.join("matches.json"),
        &report::render_matches_json(&matches)?,
    )?;
    println!("Ranked {} matching jobs", matches.len());
    Ok(matches)
}

async fn run_enhance(
    config: &Config,
    resume: PathBuf,
    job: PathBuf,
    role: String,
    out_dir: PathBuf,
) -> Result<()> {
    let llm = build_llm(config)?;
    info!("LLM client initialized (model: {})", llm.model());

    let resume_text = FileResumeSource::new(&resume)
        .load()
        .with_context(|| format!("reading resume {}", resume.display()))?;
    let job_description = fs::read_to_string(&job)
        .with_context(|| format!("reading job description {}", job.display()))?;

    let enhancement = enhance_and_suggest(&llm, &resume_text, &job_description, &role).await?;

    report::write_file(
        &out_dir.join("improved_resume.txt"),
        &enhancement.improved_resume,
    )?;
    report::write_file(
        &out_dir.join("resume_gaps.txt"),
        &report::render_gaps(&enhancement),
    )?;
    report::write_file(
        &out_dir.join("upskill_plan.json"),
        &serde_json::to_string_pretty(&enhancement.upskill_recommendations)?,
    )?;

    println!(
        "Resume improved; {} gaps detected. Artifacts written to {}",
        enhancement.gaps.len(),
        out_dir.display()
    );
    Ok(())
}

async fn run_interview(
    config: &Config,
    resume: PathBuf,
    jobs: PathBuf,
    max_results: usize,
    clusters: usize,
    out_dir: PathBuf,
) -> Result<()> {
    let matches = load_matches(&resume, &jobs, max_results);
    run_interview_on(config, matches, clusters, &out_dir).await
}

async fn run_interview_on(
    config: &Config,
    matches: Vec<JobPosting>,
    clusters: usize,
    out_dir: &Path,
) -> Result<()> {
    if matches.is_empty() {
        println!("No matching jobs to prepare interviews for.");
        return Ok(());
    }

    let llm = build_llm(config)?;
    info!("LLM client initialized (model: {})", llm.model());

    let grouped = cluster_jobs(matches, clusters);
    let mut sections = Vec::with_capacity(grouped.len());
    for cluster in grouped {
        let questions = generate_interview_questions(&llm, &cluster).await?;
        sections.push((cluster, questions));
    }

    let prep = report::render_interview_prep(&sections);
    report::write_file(&out_dir.join("interview_prep.txt"), &prep)?;
    print!("{prep}");
    Ok(())
}
