use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vitrine_contracts::entity::CatalogEntity;
use vitrine_core::{
    Catalog, EngineConfig, SortKey,
    estimates::{self, CoverageInputs},
    fixtures,
    query::{CatalogQuery, FilterCriteria, ScalarRange, sort_entities_by},
};
use vitrine_model::{Money, Selection};

mod output;

use output::TableRow;

const DEFAULT_LOG_FILTER: &str = "vitrinectl=info,vitrine_core=info";

#[derive(Parser)]
#[command(
    name = "vitrinectl",
    version,
    about = "Filter and sort the Vitrine demo catalogs"
)]
struct Cli {
    /// Engine config file (TOML or JSON); overrides $VITRINE_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Storefront products
    Products(QueryArgs),
    /// Real-estate listings
    Properties(QueryArgs),
    /// Life insurance policies
    Policies(QueryArgs),
    /// Catering menu
    Menu(QueryArgs),
    /// Coverage and mortgage calculators
    Estimate {
        #[command(subcommand)]
        kind: EstimateKind,
    },
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Category label or slug, e.g. "Electronics" or "main-courses"
    #[arg(long)]
    category: Option<String>,
    /// Case-insensitive substring search
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    min_price: Option<u64>,
    #[arg(long)]
    max_price: Option<u64>,
    /// Lower bound on the size measure (sqft, coverage, servings)
    #[arg(long)]
    min_size: Option<u64>,
    #[arg(long)]
    max_size: Option<u64>,
    /// Minimum bedrooms
    #[arg(long)]
    beds: Option<u32>,
    /// Minimum bathrooms
    #[arg(long)]
    baths: Option<u32>,
    #[arg(long)]
    neighborhood: Option<String>,
    /// Required tag; repeat for several
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// newest, oldest, price-low, price-high, size-large, size-small
    #[arg(long)]
    sort: Option<String>,
    /// Secondary sort key used to break ties
    #[arg(long)]
    then_by: Option<String>,
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Subcommand)]
enum EstimateKind {
    /// Recommended life insurance face amount
    Coverage {
        #[arg(long)]
        income: Option<u64>,
        #[arg(long)]
        debt: Option<u64>,
        #[arg(long)]
        dependents: Option<u32>,
        /// Annual household expenses
        #[arg(long)]
        expenses: Option<u64>,
        #[arg(long)]
        savings: Option<u64>,
    },
    /// Down payment and monthly cost for a listing price
    Mortgage {
        #[arg(long)]
        price: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn init_tracing(config: &EngineConfig) {
    let filter = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| {
            config
                .log_level
                .as_deref()
                .and_then(|level| EnvFilter::try_new(level).ok())
        })
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn range(min: Option<u64>, max: Option<u64>) -> Option<ScalarRange<u64>> {
    match (min, max) {
        (None, None) => None,
        (min, max) => Some(ScalarRange::new(min.unwrap_or(0), max.unwrap_or(u64::MAX))),
    }
}

impl QueryArgs {
    fn criteria<C>(&self) -> Result<FilterCriteria<C>>
    where
        C: FromStr,
        C::Err: std::error::Error + Send + Sync + 'static,
    {
        let category = match self.category.as_deref() {
            Some(raw) => Selection::Only(
                raw.parse::<C>()
                    .with_context(|| format!("invalid --category '{raw}'"))?,
            ),
            None => Selection::All,
        };

        Ok(FilterCriteria {
            category,
            price: range(self.min_price, self.max_price),
            size: range(self.min_size, self.max_size),
            min_bedrooms: self.beds,
            min_bathrooms: self.baths,
            neighborhood: self.neighborhood.clone().into(),
            search: self.search.clone().unwrap_or_default(),
            required_tags: self.tags.iter().cloned().collect(),
        })
    }

    fn sort_keys(&self, config: &EngineConfig) -> Result<Vec<SortKey>> {
        let mut keys = vec![config.sort_key(self.sort.as_deref())?];
        if let Some(raw) = self.then_by.as_deref() {
            keys.push(config.sort_key(Some(raw))?);
        }
        Ok(keys)
    }
}

fn run_query<E>(catalog: Catalog<E>, args: &QueryArgs, config: &EngineConfig) -> Result<()>
where
    E: CatalogEntity + TableRow + Serialize,
    <E::Category as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let keys = args.sort_keys(config)?;
    let query = CatalogQuery {
        criteria: args.criteria::<E::Category>()?,
        sort: keys[0],
    };
    debug!(catalog = catalog.name(), ?query, "running query");

    let mut results = catalog.query(&query);
    if keys.len() > 1 {
        results = sort_entities_by(&results, &keys);
    }
    info!(
        catalog = catalog.name(),
        total = catalog.len(),
        matched = results.len(),
        "query complete"
    );

    let rendered = match args.format {
        Format::Json => serde_json::to_string_pretty(&results)
            .context("failed to serialize results")?,
        Format::Table => output::render_table(&results),
    };
    println!("{rendered}");
    Ok(())
}

fn run_estimate(kind: &EstimateKind) -> Result<()> {
    match kind {
        EstimateKind::Coverage {
            income,
            debt,
            dependents,
            expenses,
            savings,
        } => {
            let defaults = CoverageInputs::default();
            let inputs = CoverageInputs {
                income: income.map(Money::dollars).unwrap_or(defaults.income),
                debt: debt.map(Money::dollars).unwrap_or(defaults.debt),
                dependents: dependents.unwrap_or(defaults.dependents),
                expenses: expenses.map(Money::dollars).unwrap_or(defaults.expenses),
                savings: savings.map(Money::dollars).unwrap_or(defaults.savings),
                ..defaults
            };
            println!("Recommended coverage: {}", estimates::coverage_needs(&inputs));
        }
        EstimateKind::Mortgage { price } => {
            let estimate = estimates::mortgage_estimate(Money::dollars(*price));
            println!("Price:           {}", estimate.price);
            println!("Down payment:    {}", estimate.down_payment);
            println!("Loan amount:     {}", estimate.loan_amount);
            println!("Monthly payment: {}", estimate.monthly_payment);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = EngineConfig::load(cli.config.as_deref())
        .context("failed to load engine configuration")?;
    init_tracing(&config);
    debug!(?source, "configuration loaded");

    match &cli.command {
        Command::Products(args) => run_query(fixtures::products(), args, &config),
        Command::Properties(args) => run_query(fixtures::properties(), args, &config),
        Command::Policies(args) => run_query(fixtures::policies(), args, &config),
        Command::Menu(args) => run_query(fixtures::menu(), args, &config),
        Command::Estimate { kind } => run_estimate(kind),
    }
}
