#![allow(dead_code)]

use std::io::Write;

use outlet_model::{OutletRecord, RegionCode};
use tempfile::NamedTempFile;

pub const HEADER: &str =
    "CODICEREGIONE;DESCRIZIONEREGIONE;DESCRIZIONECOMUNE;DENOMINAZIONESITO;INDIRIZZO;CAP";

/// Writes a dataset with the standard header followed by `rows`.
pub fn dataset_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp dataset");
    writeln!(file, "{HEADER}").expect("write header");
    for row in rows {
        writeln!(file, "{row}").expect("write row");
    }
    file
}

pub fn record(code: i64, region: &str, city: &str, site: &str) -> OutletRecord {
    OutletRecord {
        region_code: RegionCode::new(code),
        region_name: region.to_string(),
        municipality_name: city.to_string(),
        site_name: site.to_string(),
        address: format!("Via {site}"),
        postal_code: "00100".to_string(),
    }
}
