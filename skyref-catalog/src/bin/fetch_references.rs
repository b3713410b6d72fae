use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use skyref_catalog::{DataId, DbReferenceProvider, RefConfig, ReferenceCatalog, ReferenceProvider};
use skyref_core::angle::{DmsFmt, HmsFmt};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "fetch-references")]
#[command(about = "Fetch forced-photometry reference sources inside an exposure footprint")]
#[command(version)]
struct Cli {
    /// JSON config file with dbName and optional dbUrl
    #[arg(long, conflicts_with_all = ["db_name", "db_url"])]
    config: Option<PathBuf>,

    /// Catalog database name (required unless --config is given)
    #[arg(long, required_unless_present = "config")]
    db_name: Option<String>,

    /// Database URL without the trailing database name
    #[arg(long)]
    db_url: Option<String>,

    /// Data id entry as key=value; repeatable (needs ccdExposureId)
    #[arg(long = "id", required = true, value_name = "KEY=VALUE")]
    ids: Vec<String>,

    /// Sort output by object id instead of database order
    #[arg(long)]
    sort: bool,

    /// Print query timing
    #[arg(long)]
    timing: bool,

    /// Output decimal degrees instead of HMS/DMS
    #[arg(long)]
    raw: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let data_ref = DataId::parse_entries(&cli.ids)?;
    info!("fetching references for {} from {}", data_ref, config.full_url());

    let mut provider = DbReferenceProvider::mysql(&config);

    let start = cli.timing.then(Instant::now);
    let mut references = provider
        .get_references(&data_ref, &())
        .with_context(|| format!("Reference query failed for {}", data_ref))?;
    if let Some(start_time) = start {
        eprintln!(
            "Query completed in {:.2} ms",
            start_time.elapsed().as_secs_f64() * 1000.0
        );
    }

    if cli.sort {
        references.sort_by_id();
    }

    match cli.format {
        OutputFormat::Table => print_table(&references, cli.raw),
        OutputFormat::Json => print_json(&references)?,
        OutputFormat::Csv => print_csv(&references),
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<RefConfig> {
    if let Some(path) = &cli.config {
        return RefConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {:?}", path));
    }

    let db_name = cli
        .db_name
        .clone()
        .context("--db-name is required without --config")?;
    let config = match &cli.db_url {
        Some(url) => RefConfig::with_url(db_name, url.clone())?,
        None => RefConfig::new(db_name)?,
    };
    Ok(config)
}

fn print_table(references: &ReferenceCatalog, raw: bool) {
    let hms = HmsFmt { frac_digits: 4 };
    let dms = DmsFmt { frac_digits: 3 };

    for (i, record) in references.iter().enumerate() {
        let coord = record.coord();
        if raw {
            let (ra, dec) = coord.to_degrees();
            println!(
                "{:6}: {:>20} RA={:.8}° Dec={:+.8}°",
                i + 1,
                record.id(),
                ra,
                dec
            );
        } else {
            println!(
                "{:6}: {:>20} RA={} Dec={}",
                i + 1,
                record.id(),
                hms.fmt(coord.ra()),
                dms.fmt(coord.dec())
            );
        }
    }

    if references.is_empty() {
        println!("No catalog sources inside the exposure footprint.");
    } else {
        println!("\nTotal references: {}", references.len());
    }
}

fn print_json(references: &ReferenceCatalog) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(references.records())?);
    Ok(())
}

fn print_csv(references: &ReferenceCatalog) {
    println!("id,ra_deg,dec_deg");
    for r in references {
        let (ra, dec) = r.coord().to_degrees();
        println!("{},{},{}", r.id(), ra, dec);
    }
}
