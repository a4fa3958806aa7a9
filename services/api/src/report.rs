use crate::infra::{load_configuration, parse_as_of};
use chrono::{DateTime, Utc};
use clap::Args;
use company_scoring::config::AppConfig;
use company_scoring::directory::CompanyDirectoryImporter;
use company_scoring::error::AppError;
use company_scoring::export::RankedExportWriter;
use company_scoring::scoring::{
    RankedResult, RankedResultBuilder, ScoreAggregator, ScoringCriterionSpec,
};
use company_scoring::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Company directory CSV export to rank
    #[arg(long)]
    pub(crate) companies: PathBuf,
    /// JSON file with filter-panel options; omit to rank on signals only
    #[arg(long)]
    pub(crate) options: Option<PathBuf>,
    /// Evaluation instant (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = parse_as_of)]
    pub(crate) as_of: Option<DateTime<Utc>>,
    /// Write the ranked snapshot to this CSV path
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
    /// Only print the first N ranked companies
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let companies = CompanyDirectoryImporter::from_path(&args.companies)?;
    let configuration = load_configuration(args.options.as_deref())?;
    let as_of = args.as_of.unwrap_or_else(Utc::now);

    let builder = RankedResultBuilder::new(ScoreAggregator::default())
        .with_parallel_threshold(config.scoring.parallel_threshold);
    let result = builder.build(&companies, &configuration, as_of);

    render_ranked_table(&result, as_of, args.top);

    if let Some(path) = args.out {
        RankedExportWriter::to_path(&result, &path)?;
        println!("\nRanked export written to {}", path.display());
    }

    Ok(())
}

fn render_ranked_table(result: &RankedResult<'_>, as_of: DateTime<Utc>, top: Option<usize>) {
    println!("Company ranking as of {}", as_of.to_rfc3339());
    if let Some(notice) = &result.notice {
        println!("Notice: {} ({})", notice, notice.code());
    }

    let weights = result
        .criteria
        .criteria
        .iter()
        .map(|criterion| {
            format!(
                "{} '{}' x{}",
                criterion.key.label(),
                criterion.target,
                criterion.weight
            )
        })
        .collect::<Vec<_>>();
    if !weights.is_empty() {
        println!("Criteria: {}", weights.join(", "));
    }
    println!(
        "Active weight {} | ceiling {} | minimum score {}",
        result.criteria.total_active_weight,
        result.max_possible_score,
        result.criteria.minimum_score_threshold
    );
    println!(
        "{} of {} companies retained ({} below threshold)\n",
        result.len(),
        result.scored,
        result.filtered_out()
    );

    println!("{:>5}  {:>5}  {:>7}  {:<14}  Name", "Rank", "Score", "Raw", "Id");
    let limit = top.unwrap_or(result.entries.len());
    for entry in result.entries.iter().take(limit) {
        println!(
            "{:>5}  {:>5}  {:>7.1}  {:<14}  {}",
            entry.rank,
            entry.breakdown.normalized_score,
            entry.breakdown.raw_score,
            entry.company.id,
            entry.company.name
        );
    }
    if limit < result.entries.len() {
        println!("... {} more", result.entries.len() - limit);
    }
}

pub(crate) fn print_criteria_specs() {
    println!("{:<22}  {:<8}  {:>6}  {:>5}", "Criterion", "Kind", "Max", "Step");
    for spec in ScoringCriterionSpec::table() {
        println!(
            "{:<22}  {:<8}  {:>6}  {:>5}",
            spec.key.as_str(),
            format!("{:?}", spec.kind).to_ascii_lowercase(),
            spec.max_weight,
            spec.step
        );
    }
}
