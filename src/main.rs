use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skillcast::data;
use skillcast::data::dataset::Dataset;
use skillcast::data::schema::{AlignmentPlan, NUMERIC_FIELDS};
use skillcast::form::{
    self, EducationLevel, Gender, InputRecord, Profession, SkillCategory,
};
use skillcast::model::SkillModel;
use skillcast::report;
use skillcast::utils::{input, io as artifacts, plot};

#[derive(Debug, Parser)]
#[command(
    name = "skillcast",
    version,
    about = "Soft skills analyzer: predicts a skill level from a short form"
)]
struct Args {
    /// Serialized regression model artifact
    #[arg(long, default_value = "soft_skills_model.bin")]
    model: PathBuf,

    /// Serialized categorical encoder artifact
    #[arg(long, default_value = "encoder.bin")]
    encoder: PathBuf,

    /// Reference dataset backing the data overview
    #[arg(long, default_value = "data/soft_skills_dataset.csv")]
    dataset: PathBuf,

    /// Banner text printed at the top of the session
    #[arg(long, default_value = "static/banner.txt")]
    banner: PathBuf,

    /// Directory charts are written into
    #[arg(long, default_value = "charts")]
    charts_dir: PathBuf,

    /// Print the data overview without asking
    #[arg(long)]
    overview: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    // Startup artifacts: any failure here is fatal.
    let banner = fs::read_to_string(&args.banner)
        .with_context(|| format!("failed to read banner {}", args.banner.display()))?;
    let model = artifacts::load_model(&args.model)
        .with_context(|| format!("failed to load model {}", args.model.display()))?;
    let encoder = artifacts::load_encoder(&args.encoder)
        .with_context(|| format!("failed to load encoder {}", args.encoder.display()))?;
    let dataset = Dataset::load(&args.dataset)
        .with_context(|| format!("failed to load dataset {}", args.dataset.display()))?;
    info!(
        features = model.num_features(),
        rows = dataset.n_rows(),
        "artifacts loaded"
    );

    let plan = AlignmentPlan::new(
        model.feature_names(),
        &NUMERIC_FIELDS,
        &encoder.feature_names_out(),
    )
    .context("model and encoder artifacts do not line up")?;

    fs::create_dir_all(&args.charts_dir)
        .with_context(|| format!("failed to create {}", args.charts_dir.display()))?;

    println!("{banner}");

    if args.overview || input::confirm("Show data overview? [y/N] ")? {
        render_overview(&dataset, &args.charts_dir)?;
    }

    let record = collect_form()?;
    let features = data::build_features(&record, &encoder, &plan)?;
    let predicted = model.predict(&features)?;
    let result = report::PredictionResult::new(predicted, record.initial_skill, record.training_hours);

    report::render_metrics(&result);

    let progress_path = args.charts_dir.join("skill_progress.png");
    plot::progress_chart(record.initial_skill, result.predicted_level, &progress_path)?;
    println!("\nSkill progress chart saved to {}", progress_path.display());

    render_importance(&model, &args.charts_dir)?;

    let recommendation = report::recommendation(record.skill, result.improvement);
    report::render_recommendations(&recommendation);
    report::render_footer();

    Ok(())
}

fn render_overview(dataset: &Dataset, charts_dir: &Path) -> Result<()> {
    println!("\nDataset Statistics ({} rows)", dataset.n_rows());
    println!(
        "{:<24} {:>6} {:>9} {:>9} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for s in dataset.describe() {
        println!(
            "{:<24} {:>6} {:>9.3} {:>9.3} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            s.name, s.count, s.mean, s.std, s.min, s.q25, s.median, s.q75, s.max
        );
    }

    let heatmap_path = charts_dir.join("correlation_heatmap.png");
    plot::correlation_heatmap(dataset.numeric_columns(), &dataset.correlation()?, &heatmap_path)?;
    println!("Correlation heatmap saved to {}", heatmap_path.display());
    Ok(())
}

fn render_importance(model: &SkillModel, charts_dir: &Path) -> Result<()> {
    match model.feature_importances() {
        Some(importances) => {
            let top = report::ranked_features(model.feature_names(), importances, 5);
            let path = charts_dir.join("feature_importance.png");
            plot::importance_chart(&top, &path)?;
            println!("Key factors chart saved to {}", path.display());
        }
        None => println!("{}", report::IMPORTANCE_FALLBACK),
    }
    Ok(())
}

fn collect_form() -> Result<InputRecord> {
    println!("\nInput Your Details");

    let age = input::prompt_number(&form::AGE)?;
    let gender = prompt_variant("Gender", &Gender::ALL, Gender::as_str)?;
    let education = prompt_variant("Education Level", &EducationLevel::ALL, EducationLevel::as_str)?;
    let profession = prompt_variant("Profession", &Profession::ALL, Profession::as_str)?;
    let skill = prompt_variant("Skill Category", &SkillCategory::ALL, SkillCategory::as_str)?;
    let initial_skill = input::prompt_number(&form::INITIAL_SKILL)?;
    let training_hours = input::prompt_number(&form::TRAINING_HOURS)?;
    let confidence = input::prompt_number(&form::CONFIDENCE)?;
    let feedback = input::prompt_number(&form::FEEDBACK)?;
    let activity = input::prompt_number(&form::ACTIVITY)?;

    Ok(InputRecord::new(
        age,
        gender,
        education,
        profession,
        skill,
        initial_skill,
        training_hours,
        confidence,
        feedback,
        activity,
    ))
}

fn prompt_variant<T: Copy>(
    label: &str,
    variants: &[T],
    as_str: impl Fn(&T) -> &'static str,
) -> Result<T> {
    let options: Vec<&str> = variants.iter().map(|v| as_str(v)).collect();
    let index = input::prompt_choice(label, &options)?;
    Ok(variants[index])
}
