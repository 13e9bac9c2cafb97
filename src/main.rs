use anyhow::Result;
use clap::Parser;
use grade_report::chart::{ChartStyle, PlottersRenderer};
use grade_report::commentary::{
    DashScopeClient, OfflineGenerator, TextGenerator, DEFAULT_ENDPOINT, DEFAULT_MODEL,
};
use grade_report::validation::validate_report;
use grade_report::{ReportConfig, ReportPipeline};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "grade-report")]
#[command(about = "Generate a course reflection report from a grade sheet", long_about = None)]
struct Args {
    /// Grade sheet (.xlsx, .xls or .ods)
    #[arg(short = 'i', long, required_unless_present = "validate")]
    input: Option<String>,

    /// Output directory (default: <input dir>/<input name>)
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Class name (can be specified twice)
    #[arg(long = "class")]
    classes: Vec<String>,

    /// Instructor name
    #[arg(long)]
    instructor: Option<String>,

    /// Actual teaching hours
    #[arg(long)]
    hours: Option<u32>,

    /// Number of lab sessions held
    #[arg(long)]
    lab_sessions: Option<u32>,

    /// Logo image for the page header
    #[arg(long)]
    logo: Option<String>,

    /// Skip generated commentary (no network access)
    #[arg(long)]
    no_ai: bool,

    /// DashScope API key
    #[arg(long, env = "DASHSCOPE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Text generation model
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Text generation endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    api_url: String,

    /// Text generation request timeout in seconds
    #[arg(long, default_value = "60")]
    ai_timeout: u64,

    /// Font family for chart text; must cover CJK glyphs
    /// (default: Noto Sans CJK SC, falling back to sans-serif)
    #[arg(long)]
    chart_font: Option<String>,

    /// Don't write the JSON summary
    #[arg(long)]
    no_summary: bool,

    /// Only validate an existing report (don't generate a new one)
    #[arg(long)]
    validate: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // If validate-only mode, just validate and exit
    if let Some(report) = &args.validate {
        log::info!("Validation mode - checking existing report...");
        let check = validate_report(&expand(report))?;
        log::info!(
            "Validation passed: {} tables, {} paragraphs, {} bytes",
            check.tables,
            check.paragraphs,
            check.size_bytes
        );
        return Ok(());
    }

    let input = match &args.input {
        Some(input) => expand(input),
        None => anyhow::bail!("--input is required"),
    };

    // Create report configuration
    let mut config = ReportConfig::new()
        .with_classes(args.classes.clone())
        .with_summary(!args.no_summary);
    if let Some(output) = &args.output {
        config = config.with_output_dir(expand(output));
    }
    if let Some(instructor) = &args.instructor {
        config = config.with_instructor(instructor.clone());
    }
    if let Some(hours) = args.hours {
        config = config.with_teaching_hours(hours);
    }
    if let Some(sessions) = args.lab_sessions {
        config = config.with_lab_sessions(sessions);
    }
    if let Some(logo) = &args.logo {
        config = config.with_logo(expand(logo));
    }

    let mut style = ChartStyle::default();
    if let Some(font) = &args.chart_font {
        style.font_family = font.clone();
    }
    let charts = PlottersRenderer::new(style);

    // Use the remote generator when a key is available, offline placeholders otherwise
    let generator: Box<dyn TextGenerator> = match (&args.api_key, args.no_ai) {
        (Some(key), false) if !key.trim().is_empty() => {
            let client = DashScopeClient::new(key.trim(), Duration::from_secs(args.ai_timeout))?
                .with_endpoint(args.api_url.clone())
                .with_model(args.model.clone());
            log::info!("Commentary model: {} ({})", client.model(), args.api_url);
            Box::new(client)
        }
        (_, true) => {
            log::info!("Commentary disabled - placeholders will be written");
            Box::new(OfflineGenerator)
        }
        _ => {
            log::warn!("No API key configured (DASHSCOPE_API_KEY) - placeholders will be written");
            Box::new(OfflineGenerator)
        }
    };

    let pipeline = ReportPipeline::new(config, generator, charts);
    let outcome = pipeline.run(&input)?;

    log::info!("Report completed successfully!");
    log::info!("Report ready at: {:?}", outcome.report_path);

    Ok(())
}
