//! Subcommand implementations.

use std::io::Write;

use anyhow::{Context, Result};
use outlet_catalog::Catalog;

use crate::output::{OutputFormat, render_query, render_regions};

/// Whether a query named a region present in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Found,
    InvalidRegion,
}

pub fn run_regions(catalog: &Catalog, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let regions = catalog.list_regions().context("list regions")?;
    writeln!(out, "{}", render_regions(&regions, format)?)?;
    Ok(())
}

pub fn run_query(
    catalog: &Catalog,
    region: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<QueryStatus> {
    let query = catalog
        .query_region(region)
        .with_context(|| format!("query region {region}"))?;
    writeln!(out, "{}", render_query(&query, region, format)?)?;
    Ok(if query.is_invalid() {
        QueryStatus::InvalidRegion
    } else {
        QueryStatus::Found
    })
}
