//! End-to-end catalog behaviour over on-disk datasets.

mod common;

use outlet_catalog::{Catalog, CatalogError, CatalogState, DatasetConfig};
use outlet_model::{OutletSummary, Region, RegionCode, RegionQuery};

use common::dataset_file;

fn scenario_catalog() -> (tempfile::NamedTempFile, Catalog) {
    let file = dataset_file(&[
        "1;Lazio;Roma;Sito B;Via Appia 1;00179",
        "1;Lazio;roma;Sito A;Via Appia 2;00178",
        "2;Toscana;Pisa;Sito C;Lungarno 3;56125",
    ]);
    let catalog = Catalog::open(&DatasetConfig::new(file.path())).expect("open catalog");
    (file, catalog)
}

#[test]
fn lists_distinct_regions_by_name() {
    let (_file, catalog) = scenario_catalog();
    let regions = catalog.list_regions().unwrap();
    assert_eq!(
        regions,
        vec![
            Region {
                code: RegionCode::new(1),
                name: "Lazio".to_string(),
            },
            Region {
                code: RegionCode::new(2),
                name: "Toscana".to_string(),
            },
        ]
    );
}

#[test]
fn finds_outlets_sorted_case_insensitively() {
    let (_file, catalog) = scenario_catalog();
    let outlets = catalog.find_by_region(RegionCode::new(1)).unwrap();
    assert_eq!(
        outlets,
        vec![
            OutletSummary {
                name: "Sito A".to_string(),
                address: "Via Appia 2".to_string(),
                cap: "00178".to_string(),
                city: "roma".to_string(),
            },
            OutletSummary {
                name: "Sito B".to_string(),
                address: "Via Appia 1".to_string(),
                cap: "00179".to_string(),
                city: "Roma".to_string(),
            },
        ]
    );
}

#[test]
fn unknown_region_is_not_an_error() {
    let (_file, catalog) = scenario_catalog();
    assert!(!catalog.is_valid_region(RegionCode::new(3)).unwrap());
    assert!(catalog.find_by_region(RegionCode::new(3)).unwrap().is_empty());
    assert!(catalog.is_valid_region(RegionCode::new(2)).unwrap());
}

#[test]
fn repeated_queries_are_identical() {
    let (_file, catalog) = scenario_catalog();
    assert_eq!(catalog.list_regions().unwrap(), catalog.list_regions().unwrap());
    assert_eq!(
        catalog.find_by_region(RegionCode::new(1)).unwrap(),
        catalog.find_by_region(RegionCode::new(1)).unwrap()
    );
}

#[test]
fn region_query_serializes_like_the_http_surface() {
    let (_file, catalog) = scenario_catalog();

    let found = catalog.query_region("2").unwrap();
    insta::assert_json_snapshot!(found, @r#"
    {
      "region": 2,
      "parapharmacies": [
        {
          "name": "Sito C",
          "address": "Lungarno 3",
          "cap": "56125",
          "city": "Pisa"
        }
      ]
    }
    "#);

    let invalid = catalog.query_region("lazio").unwrap();
    assert_eq!(invalid, RegionQuery::invalid());
    insta::assert_json_snapshot!(invalid, @r#"
    {
      "error": "Invalid region"
    }
    "#);
}

#[test]
fn missing_dataset_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::from_config(&DatasetConfig::new(dir.path().join("nope.csv")));

    let err = catalog.load().unwrap_err();
    assert!(err.is_unavailable());
    assert_eq!(catalog.state(), CatalogState::Unloaded);
    assert!(matches!(catalog.list_regions(), Err(CatalogError::NotReady)));
}

#[test]
fn missing_column_is_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(
        &mut file,
        b"CODICEREGIONE;DESCRIZIONEREGIONE;DESCRIZIONECOMUNE;DENOMINAZIONESITO;INDIRIZZO\n1;Lazio;Roma;Sito;Via\n",
    )
    .unwrap();

    let err = Catalog::open(&DatasetConfig::new(file.path())).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(
        err.to_string(),
        format!("required column 'CAP' not found in {}", file.path().display())
    );
}

#[test]
fn failed_load_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late.csv");
    let catalog = Catalog::from_config(&DatasetConfig::new(&path));
    assert!(catalog.load().is_err());

    std::fs::write(
        &path,
        format!("{}\n5;Umbria;Perugia;Sito;Via;06100\n", common::HEADER),
    )
    .unwrap();
    catalog.load().unwrap();
    assert!(catalog.is_valid_region(RegionCode::new(5)).unwrap());
}

#[test]
fn header_only_dataset_loads_empty() {
    let file = dataset_file(&[]);
    let catalog = Catalog::open(&DatasetConfig::new(file.path())).unwrap();
    assert!(catalog.is_empty().unwrap());
    assert!(catalog.list_regions().unwrap().is_empty());
    assert!(!catalog.is_valid_region(RegionCode::new(1)).unwrap());
}
