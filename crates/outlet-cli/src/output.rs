//! Rendering of query results for the terminal.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use outlet_model::{OutletSummary, Region, RegionQuery};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Serialize)]
struct RegionList<'a> {
    regions: &'a [Region],
}

/// Renders the region list as a table or as `{"regions": [...]}`.
pub fn render_regions(regions: &[Region], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&RegionList { regions })?),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Code"), header_cell("Region")]);
            apply_table_style(&mut table);
            if let Some(column) = table.column_mut(0) {
                column.set_cell_alignment(CellAlignment::Right);
            }
            for region in regions {
                table.add_row(vec![Cell::new(region.code), Cell::new(&region.name)]);
            }
            Ok(table.to_string())
        }
    }
}

/// Renders the outcome of a region query. `raw` is the argument as typed,
/// echoed back when the region is invalid.
pub fn render_query(query: &RegionQuery, raw: &str, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(query)?);
    }
    Ok(match query {
        RegionQuery::Invalid { .. } => format!("Invalid region code {}", raw.trim()),
        RegionQuery::Found { region, outlets } if outlets.is_empty() => {
            format!("No outlets available in region {region}")
        }
        RegionQuery::Found { outlets, .. } => outlet_table(outlets).to_string(),
    })
}

fn outlet_table(outlets: &[OutletSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("City"),
        header_cell("Name"),
        header_cell("Address"),
        header_cell("CAP"),
    ]);
    apply_table_style(&mut table);
    for outlet in outlets {
        table.add_row(vec![
            Cell::new(&outlet.city),
            Cell::new(&outlet.name),
            Cell::new(&outlet.address),
            Cell::new(&outlet.cap),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
