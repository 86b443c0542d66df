//! Delimited-file reading for the outlet dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use outlet_model::OutletRecord;

use crate::error::{CatalogError, Result};

use super::columns::ColumnMap;

/// Rejects files starting with a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted and stripped from the header row.
fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| CatalogError::unavailable(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| CatalogError::unavailable(path, e))?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(CatalogError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Reads every outlet row of a dataset file, in file order.
///
/// Fails with [`CatalogError::DatasetUnavailable`] when the file cannot be
/// opened or read, and with one of the malformed-dataset variants when a
/// required column is missing, a row has the wrong number of fields, or a
/// region code is not an integer.
pub fn read_dataset(path: &Path, delimiter: u8) -> Result<Vec<OutletRecord>> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| CatalogError::unavailable(path, e))?;
    read_records(file, delimiter, path)
}

fn read_records<R: Read>(source: R, delimiter: u8, path: &Path) -> Result<Vec<OutletRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::from_csv(path, e))?
        .clone();
    let columns = ColumnMap::resolve(&headers, path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| CatalogError::from_csv(path, e))?;
        records.push(columns.to_record(&row, path)?);
    }

    tracing::debug!(
        path = %path.display(),
        rows = records.len(),
        "read outlet dataset"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "CODICEREGIONE;DESCRIZIONEREGIONE;DESCRIZIONECOMUNE;DENOMINAZIONESITO;INDIRIZZO;CAP";

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_dataset_in_file_order() {
        let content = format!(
            "{HEADER}\n120;Lazio;Roma;Sito B;Via Appia 3;00179\n90;Toscana;Pisa;Sito C;Via Roma 1;56126\n"
        );
        let file = create_temp_csv(content.as_bytes());
        let records = read_dataset(file.path(), b';').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].site_name, "Sito B");
        assert_eq!(records[0].postal_code, "00179");
        assert_eq!(records[1].region_name, "Toscana");
    }

    #[test]
    fn test_read_dataset_ignores_extra_columns() {
        let content = format!("ID;{HEADER};LATITUDINE\n7;120;Lazio;Roma;Sito;Via;00100;41.9\n");
        let file = create_temp_csv(content.as_bytes());
        let records = read_dataset(file.path(), b';').unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].region_code.value(), 120);
        assert_eq!(records[0].address, "Via");
    }

    #[test]
    fn test_read_dataset_trims_values() {
        let content = format!("{HEADER}\n 120 ; Lazio ; Roma ; Sito ; Via ; 00100 \n");
        let file = create_temp_csv(content.as_bytes());
        let records = read_dataset(file.path(), b';').unwrap();

        assert_eq!(records[0].region_name, "Lazio");
        assert_eq!(records[0].postal_code, "00100");
    }

    #[test]
    fn test_read_dataset_with_utf8_bom() {
        let content = format!("\u{feff}{HEADER}\n120;Lazio;Roma;Sito;Via;00100\n");
        let file = create_temp_csv(content.as_bytes());
        let records = read_dataset(file.path(), b';').unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_read_dataset_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'C', 0x00]);
        let result = read_dataset(file.path(), b';');

        assert!(matches!(
            result,
            Err(CatalogError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_dataset(&dir.path().join("absent.csv"), b';');

        assert!(matches!(result, Err(CatalogError::DatasetUnavailable { .. })));
    }

    #[test]
    fn test_read_dataset_missing_column() {
        let file = create_temp_csv(b"CODICEREGIONE;DESCRIZIONEREGIONE\n1;Lazio\n");
        let err = read_dataset(file.path(), b';').unwrap_err();

        assert!(err.is_malformed());
        assert!(matches!(
            err,
            CatalogError::MissingColumn { ref column, .. } if column == "DESCRIZIONECOMUNE"
        ));
    }

    #[test]
    fn test_read_dataset_empty_file_is_malformed() {
        let file = create_temp_csv(b"");
        let err = read_dataset(file.path(), b';').unwrap_err();

        assert!(matches!(err, CatalogError::MissingColumn { .. }));
    }

    #[test]
    fn test_read_dataset_short_row() {
        let content = format!("{HEADER}\n120;Lazio;Roma\n");
        let file = create_temp_csv(content.as_bytes());
        let err = read_dataset(file.path(), b';').unwrap_err();

        assert!(matches!(err, CatalogError::Csv { .. }));
    }

    #[test]
    fn test_read_dataset_reports_line_of_bad_code() {
        let content = format!("{HEADER}\n120;Lazio;Roma;Sito;Via;00100\nxx;Lazio;Roma;Sito;Via;00100\n");
        let file = create_temp_csv(content.as_bytes());
        let err = read_dataset(file.path(), b';').unwrap_err();

        assert!(matches!(err, CatalogError::InvalidValue { line: 3, .. }));
    }

    #[test]
    fn test_read_dataset_honours_delimiter() {
        let content = format!("{}\n120,Lazio,Roma,Sito,Via,00100\n", HEADER.replace(';', ","));
        let file = create_temp_csv(content.as_bytes());
        let records = read_dataset(file.path(), b',').unwrap();

        assert_eq!(records[0].municipality_name, "Roma");
    }
}
