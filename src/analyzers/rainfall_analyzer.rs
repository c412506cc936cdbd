use crate::error::{RainfallError, Result};
use crate::models::{MonthlyRecord, Station};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthExtreme {
    pub year: i32,
    pub month: i32,
    pub month_name: &'static str,
    pub value: f64,
}

impl MonthExtreme {
    fn from_record(record: &MonthlyRecord, value: f64) -> Self {
        Self {
            year: record.year(),
            month: record.month(),
            month_name: record.human_month_name(),
            value,
        }
    }
}

#[derive(Debug)]
pub struct RainfallStatistics {
    pub station_name: String,
    pub total_records: usize,
    /// First-seen year order, matching the chart's x axis.
    pub yearly_totals: Vec<(i32, f64)>,
    pub wettest_month: MonthExtreme,
    pub driest_month: MonthExtreme,
    pub wettest_day: MonthExtreme,
}

impl RainfallStatistics {
    pub fn distinct_years(&self) -> usize {
        self.yearly_totals.len()
    }

    pub fn summary(&self) -> String {
        let first = self.yearly_totals.first().map_or(0, |(y, _)| *y);
        let last = self.yearly_totals.last().map_or(0, |(y, _)| *y);

        format!(
            "Station: {}\n\
            Months: {} across {} years ({} to {})\n\
            Wettest Month: {} {} ({:.2} mm)\n\
            Driest Month: {} {} ({:.2} mm)",
            self.station_name,
            self.total_records,
            self.distinct_years(),
            first,
            last,
            self.wettest_month.month_name,
            self.wettest_month.year,
            self.wettest_month.value,
            self.driest_month.month_name,
            self.driest_month.year,
            self.driest_month.value,
        )
    }

    pub fn detailed_summary(&self) -> String {
        let mut lines = vec![
            self.summary(),
            format!(
                "Wettest Day: {:.2} mm in {} {}",
                self.wettest_day.value, self.wettest_day.month_name, self.wettest_day.year
            ),
            String::new(),
            "Yearly Totals:".to_string(),
        ];

        for (year, total) in &self.yearly_totals {
            lines.push(format!("  {}: {:.2} mm", year, total));
        }

        lines.join("\n")
    }
}

pub struct RainfallAnalyzer;

impl RainfallAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, station: &Station) -> Result<RainfallStatistics> {
        let mut records = station.values();
        let first = records.next().ok_or(RainfallError::NoDataFound)?;

        let mut wettest_month = MonthExtreme::from_record(first, first.total());
        let mut driest_month = MonthExtreme::from_record(first, first.total());
        let mut wettest_day = MonthExtreme::from_record(first, first.max());
        let mut yearly_totals: Vec<(i32, f64)> = vec![(first.year(), first.total())];

        for record in records {
            if record.total() > wettest_month.value {
                wettest_month = MonthExtreme::from_record(record, record.total());
            }
            if record.total() < driest_month.value {
                driest_month = MonthExtreme::from_record(record, record.total());
            }
            if record.max() > wettest_day.value {
                wettest_day = MonthExtreme::from_record(record, record.max());
            }

            match yearly_totals.iter_mut().find(|(y, _)| *y == record.year()) {
                Some((_, total)) => *total += record.total(),
                None => yearly_totals.push((record.year(), record.total())),
            }
        }

        Ok(RainfallStatistics {
            station_name: station.name().to_string(),
            total_records: station.len(),
            yearly_totals,
            wettest_month,
            driest_month,
            wettest_day,
        })
    }
}

impl Default for RainfallAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Height of a monthly bar, proportional to the station's largest month.
pub fn scaled_height(total: f64, max_total: f64, chart_height: f64) -> f64 {
    if max_total <= 0.0 {
        return 0.0;
    }
    (total / max_total) * chart_height
}

/// Rounded rainfall labels for a y axis running from 0 to `max_total` in
/// `step` percent increments.
pub fn axis_ticks(max_total: f64, step: usize) -> Vec<i64> {
    (0..=100)
        .step_by(step.max(1))
        .map(|percent| ((max_total / 100.0) * percent as f64).round() as i64)
        .collect()
}
