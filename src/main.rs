use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use vehicle_configurator::application::configurator::Configurator;
use vehicle_configurator::config::Settings;
use vehicle_configurator::domain::catalog::{Catalog, ItemKind};
use vehicle_configurator::domain::selection::Customer;
use vehicle_configurator::error::ConfiguratorError;
use vehicle_configurator::infrastructure::http::HttpBackend;
use vehicle_configurator::interfaces::summary::{Summary, format_eur, progress_line};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the catalog/offer backend. Overrides CONFIGURATOR_BACKEND_URL.
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every catalog section with prices
    Catalog,
    /// Configure a vehicle and request a price quote
    Quote(QuoteArgs),
}

#[derive(Args)]
struct QuoteArgs {
    /// Vehicle id
    #[arg(long)]
    vehicle: String,
    /// Color code
    #[arg(long)]
    color: String,
    /// Upholstery code
    #[arg(long)]
    upholstery: String,
    /// Factory option code (repeatable)
    #[arg(long = "option")]
    options: Vec<String>,
    /// Accessory code (repeatable)
    #[arg(long = "accessory")]
    accessories: Vec<String>,
    /// Free-text special agreement
    #[arg(long)]
    special_agreement: Option<String>,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    /// Print the offer payload instead of submitting it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = Settings::load_env_file() {
        eprintln!("WARNING: Could not load .env file: {}", e);
    }
    let settings = Settings::from_env().with_backend_url(cli.backend_url);
    let backend = HttpBackend::new(settings.backend_url).into_diagnostic()?;

    let mut configurator = Configurator::load(&backend).await.into_diagnostic()?;

    match cli.command {
        Command::Catalog => print_catalog(configurator.catalog()).into_diagnostic()?,
        Command::Quote(args) => {
            configure(&mut configurator, &args).into_diagnostic()?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", progress_line(&configurator)).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
            write!(out, "{}", Summary::of(&configurator)).into_diagnostic()?;

            if args.dry_run {
                let payload = configurator.offer_request().into_diagnostic()?;
                let json = serde_json::to_string_pretty(&payload).into_diagnostic()?;
                writeln!(out, "{json}").into_diagnostic()?;
                return Ok(());
            }

            match configurator.submit(&backend).await {
                Ok(receipt) => {
                    writeln!(out).into_diagnostic()?;
                    writeln!(out, "Offer created. ID: {}", receipt.offer_id).into_diagnostic()?;
                    writeln!(out, "Total: {}", format_eur(receipt.total_price))
                        .into_diagnostic()?;
                }
                Err(ConfiguratorError::OfferRejected { status, detail }) => {
                    out.flush().into_diagnostic()?;
                    eprintln!(
                        "Submission failed: {} {}",
                        status,
                        detail.unwrap_or_default()
                    );
                    std::process::exit(1);
                }
                Err(e) => return Err(e).into_diagnostic(),
            }
        }
    }

    Ok(())
}

/// Walks the session through every step up to the customer details, applying the arguments.
fn configure(c: &mut Configurator, args: &QuoteArgs) -> Result<(), ConfiguratorError> {
    c.select_vehicle(&args.vehicle)?;
    c.advance()?;

    c.select_color(&args.color)?;
    c.select_upholstery(&args.upholstery)?;
    c.advance()?;

    for code in &args.options {
        if !c.selection().factory_options.contains(code) {
            c.toggle_factory_option(code)?;
        }
    }
    c.advance()?;

    for code in &args.accessories {
        if !c.selection().accessories.contains(code) {
            c.toggle_accessory(code)?;
        }
    }
    c.advance()?;

    if let Some(text) = &args.special_agreement {
        c.set_special_agreement(text.as_str())?;
    }
    c.advance()?;

    let mut customer = Customer::new(&args.first_name, &args.last_name, &args.email);
    if let Some(company) = &args.company {
        customer = customer.with_company(company.as_str());
    }
    if let Some(phone) = &args.phone {
        customer = customer.with_phone(phone.as_str());
    }
    c.set_customer(customer)
}

fn print_catalog(catalog: &Catalog) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Vehicles")?;
    for v in &catalog.vehicles {
        writeln!(out, "  {:<12} {:<32} {}", v.id, v.name, format_eur(v.base_price))?;
    }

    for (title, kind) in [
        ("Colors", ItemKind::Color),
        ("Upholsteries", ItemKind::Upholstery),
        ("Factory options", ItemKind::FactoryOption),
        ("Accessories", ItemKind::Accessory),
    ] {
        writeln!(out, "{title}")?;
        for item in catalog.items(kind) {
            writeln!(
                out,
                "  {:<12} {:<32} {}",
                item.code,
                item.name,
                format_eur(item.price)
            )?;
        }
    }
    Ok(())
}
