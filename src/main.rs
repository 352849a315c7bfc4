use clap::Parser;
use miette::{IntoDiagnostic, Result};
use quote_engine::application::engine::QuoteEngine;
use quote_engine::application::session::QuoteSession;
use quote_engine::config::QuoteConfig;
use quote_engine::domain::catalog::{Industry, OptionKey, OptionKind};
use quote_engine::domain::ports::QuoteRequestSinkBox;
use quote_engine::infrastructure::json_lines::JsonLinesSink;
use quote_engine::interfaces::OutputFormat;
use quote_engine::interfaces::csv::quote_writer::QuoteWriter;
use quote_engine::interfaces::json::quote_writer::JsonQuoteWriter;
use quote_engine::interfaces::summary::QuoteSummary;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Industry the site is for; decides which add-ons are offered
    #[arg(long, default_value = "healthcare")]
    industry: Industry,

    /// Design package (e.g. package_basic)
    #[arg(long)]
    package: Option<String>,

    /// Add-on to include; repeat for several
    #[arg(long = "addon")]
    addons: Vec<String>,

    /// Hosting plan (e.g. hosting_5gb)
    #[arg(long)]
    hosting: Option<String>,

    /// Domain plan (e.g. domain_com)
    #[arg(long)]
    domain: Option<String>,

    /// Discount code (e.g. FI10PT or FI1TR5TR)
    #[arg(long)]
    discount: Option<String>,

    /// Price table CSV (key,label,price). Defaults to the bundled table.
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the price table and exit
    #[arg(long)]
    list: bool,

    /// With --list, only print one kind of option (package, addon, hosting, domain)
    #[arg(long, requires = "list")]
    kind: Option<OptionKind>,

    /// Customer name for the quote request
    #[arg(long, requires_all = ["phone", "outbox"])]
    name: Option<String>,

    /// Customer phone for the quote request
    #[arg(long, requires = "name")]
    phone: Option<String>,

    /// File the quote request is appended to as a JSON line
    #[arg(long, requires = "name")]
    outbox: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = QuoteConfig::from_env();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Command-line flags win over the environment
    if let Some(prices) = cli.prices {
        config.price_table_path = Some(prices);
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    let price_table = config.load_price_table().into_diagnostic()?;
    let stdout = io::stdout();

    if cli.list {
        let mut writer = QuoteWriter::new(stdout.lock());
        writer
            .write_price_table(&price_table, cli.kind)
            .into_diagnostic()?;
        return Ok(());
    }

    let mut session = QuoteSession::new(QuoteEngine::new(price_table));
    session.set_industry(cli.industry);
    if let Some(package) = cli.package {
        session.select_package(package);
    }
    for addon in cli.addons {
        if !cli.industry.offers(&addon) {
            tracing::warn!(%addon, industry = %cli.industry, "add-on not offered for industry");
        }
        session.toggle_addon(addon, true);
    }
    session.select_hosting(cli.hosting.map(OptionKey::from));
    session.select_domain(cli.domain.map(OptionKey::from));
    if let Some(code) = cli.discount {
        let info = session.apply_discount(&code);
        eprintln!("{}", info.message);
    }

    // The breakdown is shown even when the quote cannot be finalized yet
    let finalized = session.finalize();
    let schedule = finalized.as_ref().ok().map(|quote| &quote.schedule);
    let summary = QuoteSummary::new(session.breakdown(), session.discount(), schedule);

    match config.output_format {
        OutputFormat::Csv => QuoteWriter::new(stdout.lock())
            .write_summary(&summary)
            .into_diagnostic()?,
        OutputFormat::Json => JsonQuoteWriter::new(stdout.lock())
            .write_summary(&summary)
            .into_diagnostic()?,
    }

    finalized.into_diagnostic()?;

    if let (Some(name), Some(phone), Some(outbox)) = (cli.name, cli.phone, cli.outbox) {
        let sink: QuoteRequestSinkBox = Box::new(JsonLinesSink::open(outbox).into_diagnostic()?);
        session
            .submit(&*sink, &name, &phone)
            .await
            .into_diagnostic()?;
    }

    Ok(())
}
