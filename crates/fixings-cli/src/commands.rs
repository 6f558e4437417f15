use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use fixings_core::{NormalizeOptions, NormalizeReport, OutputHeader, WriteMode};
use fixings_market::{
    BusinessCalendar, BusinessDayConvention, Fixing, HolidayCalendar, MarketConfig, load_fixings,
    load_holidays,
};

use crate::cli::{ColumnsArgs, ConventionArg, FixingsArgs, NormalizeArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeReport> {
    let options = normalize_options(args);
    debug!(?options, "normalize options");
    fixings_core::normalize(&args.raw_csv, &args.output_csv, &options).with_context(|| {
        format!(
            "normalize {} into {}",
            args.raw_csv.display(),
            args.output_csv.display()
        )
    })
}

pub fn normalize_options(args: &NormalizeArgs) -> NormalizeOptions {
    let write_mode = if args.no_atomic {
        WriteMode::Direct
    } else {
        WriteMode::Atomic
    };
    NormalizeOptions::new(args.rate_column.clone())
        .with_start(args.start_date)
        .with_end(args.end_date)
        .with_header(OutputHeader::new(&args.date_header, &args.rate_header))
        .with_write_mode(write_mode)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let columns = fixings_ingest::list_series(&args.raw_csv)
        .with_context(|| format!("read series columns from {}", args.raw_csv.display()))?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Series")]);
    apply_table_style(&mut table);
    for (index, column) in columns.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), column.clone()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_fixings(args: &FixingsArgs) -> Result<Vec<Fixing>> {
    let config = market_config(args)?;
    info!(
        calendar = config.calendar.name(),
        holidays = config.calendar.holiday_count(),
        "loading fixings"
    );
    load_fixings(&args.fixings_csv, &config)
        .with_context(|| format!("load fixings from {}", args.fixings_csv.display()))
}

fn market_config(args: &FixingsArgs) -> Result<MarketConfig> {
    let holidays = match &args.holidays {
        Some(path) => load_holidays(path)
            .with_context(|| format!("load holidays from {}", path.display()))?,
        None => Vec::new(),
    };
    let calendar = HolidayCalendar::new(args.calendar.clone(), holidays);
    Ok(MarketConfig::new(calendar).with_convention(convention(args.convention)))
}

fn convention(arg: ConventionArg) -> BusinessDayConvention {
    match arg {
        ConventionArg::Unadjusted => BusinessDayConvention::Unadjusted,
        ConventionArg::Following => BusinessDayConvention::Following,
        ConventionArg::ModifiedFollowing => BusinessDayConvention::ModifiedFollowing,
        ConventionArg::Preceding => BusinessDayConvention::Preceding,
        ConventionArg::ModifiedPreceding => BusinessDayConvention::ModifiedPreceding,
    }
}
