use serde::Serialize;
use std::fmt;
use validator::Validate;

/// Header row of the analysed (cached) CSV dialect.
pub const CSV_HEADER: [&str; 5] = ["year", "month", "total", "min", "max"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Key used to identify a (year, month) pair inside a station dataset.
pub fn make_key(year: i32, month: i32) -> String {
    format!("_Y:{}_M:{}", year, month)
}

/// Rainfall statistics for a single month of a single year.
///
/// `year` and `month` are fixed at construction; the statistics grow as
/// further daily observations are merged in. Ranges are checked by the
/// loader before a record is built, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct MonthlyRecord {
    #[validate(range(min = 1))]
    year: i32,

    #[validate(range(min = 1, max = 12))]
    month: i32,

    #[validate(range(min = 0.0))]
    total: f64,

    #[validate(range(min = 0.0))]
    min: f64,

    #[validate(range(min = 0.0))]
    max: f64,
}

impl MonthlyRecord {
    pub fn new(year: i32, month: i32, total: f64, min: f64, max: f64) -> Self {
        Self {
            year,
            month,
            total,
            min,
            max,
        }
    }

    /// First sighting of a month: one daily value is the total, min and max.
    pub fn seed(year: i32, month: i32, value: f64) -> Self {
        Self::new(year, month, value, value, value)
    }

    /// Fold one more daily observation into the month.
    pub fn merge_daily(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self.total += value;
    }

    pub fn key(&self) -> String {
        make_key(self.year, self.month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Fields of one analysed CSV row, statistics rounded to 2 decimals.
    pub fn cache_fields(&self) -> [String; 5] {
        [
            self.year.to_string(),
            self.month.to_string(),
            format!("{:.2}", self.total),
            format!("{:.2}", self.min),
            format!("{:.2}", self.max),
        ]
    }

    pub fn to_cache_row(&self) -> String {
        self.cache_fields().join(",")
    }

    pub fn human_month_name(&self) -> &'static str {
        usize::try_from(self.month)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|idx| MONTH_NAMES.get(idx))
            .copied()
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for MonthlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.human_month_name(), self.year)?;
        writeln!(f, "Rainfall: {:?}", self.total.floor())?;
        writeln!(f, "Rainfall min: {:?}", self.min)?;
        write!(f, "Rainfall max: {:?}", self.max)
    }
}
