//! Load-time index over the outlet table.

use std::collections::{HashMap, HashSet};

use outlet_model::{OutletRecord, Region, RegionCode};

use crate::collation::fold_key;

/// Immutable table plus the orderings every query needs.
#[derive(Debug)]
pub(crate) struct CatalogIndex {
    records: Vec<OutletRecord>,
    /// Distinct regions, ordered by raw name.
    regions: Vec<Region>,
    /// Record positions per region, ordered by folded (city, site name).
    by_region: HashMap<RegionCode, Vec<usize>>,
}

impl CatalogIndex {
    pub(crate) fn build(records: Vec<OutletRecord>) -> Self {
        let regions = distinct_regions(&records);

        let keys: Vec<(String, String)> = records
            .iter()
            .map(|r| (fold_key(&r.municipality_name), fold_key(&r.site_name)))
            .collect();

        let mut by_region: HashMap<RegionCode, Vec<usize>> = HashMap::new();
        for (pos, record) in records.iter().enumerate() {
            by_region.entry(record.region_code).or_default().push(pos);
        }
        // Positions start in table order; the stable sort keeps it for ties.
        for positions in by_region.values_mut() {
            positions.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        }

        Self {
            records,
            regions,
            by_region,
        }
    }

    pub(crate) fn records(&self) -> &[OutletRecord] {
        &self.records
    }

    pub(crate) fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub(crate) fn contains(&self, code: RegionCode) -> bool {
        self.by_region.contains_key(&code)
    }

    pub(crate) fn outlets(&self, code: RegionCode) -> impl Iterator<Item = &OutletRecord> + '_ {
        self.by_region
            .get(&code)
            .into_iter()
            .flatten()
            .map(|&pos| &self.records[pos])
    }
}

/// Deduplicates `(code, name)` pairs in first-seen order, then sorts by name.
fn distinct_regions(records: &[OutletRecord]) -> Vec<Region> {
    let mut seen = HashSet::new();
    let mut regions: Vec<Region> = records
        .iter()
        .filter(|r| seen.insert((r.region_code, r.region_name.as_str())))
        .map(OutletRecord::region)
        .collect();
    regions.sort_by(|a, b| a.name.cmp(&b.name));
    regions
}
