use serde::Serialize;
use std::collections::HashMap;

use super::record::MonthlyRecord;

/// Returned by [`Station::max_total_rainfall`] when there are no records.
pub const EMPTY_RAINFALL_MAX: f64 = -1.0;

/// Monthly rainfall records for one named station, kept in the order
/// each (year, month) was first seen.
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    name: String,
    records: Vec<MonthlyRecord>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a record, or replace the one under `key` in place.
    pub fn put(&mut self, key: String, record: MonthlyRecord) {
        match self.index.get(&key) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&MonthlyRecord> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut MonthlyRecord> {
        match self.index.get(key) {
            Some(&pos) => self.records.get_mut(pos),
            None => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &MonthlyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Years in the order they first appear, not sorted.
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years = Vec::new();
        for record in &self.records {
            if !years.contains(&record.year()) {
                years.push(record.year());
            }
        }
        years
    }

    /// Largest monthly total, or [`EMPTY_RAINFALL_MAX`] for an empty station.
    pub fn max_total_rainfall(&self) -> f64 {
        self.records
            .iter()
            .map(MonthlyRecord::total)
            .fold(EMPTY_RAINFALL_MAX, f64::max)
    }

    pub fn records_for_year(&self, year: i32) -> impl Iterator<Item = &MonthlyRecord> {
        self.records.iter().filter(move |r| r.year() == year)
    }
}
