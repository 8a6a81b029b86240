use ns_core::{ArticleRecord, Category, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::search::validate_year;

pub const MONTH_NAMES: [&str; 12] = [
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

/// Article counts per calendar month of one year. Always holds all twelve
/// months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyHistogram {
    pub year: i32,
    counts: [usize; 12],
}

impl MonthlyHistogram {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            counts: [0; 12],
        }
    }

    /// Count for `month` (1-12); zero for anything outside that range.
    pub fn get(&self, month: u32) -> usize {
        match month {
            1..=12 => self.counts[(month - 1) as usize],
            _ => 0,
        }
    }

    fn increment(&mut self, month: u32) {
        if let 1..=12 = month {
            self.counts[(month - 1) as usize] += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(month, count)` pairs from January to December.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().enumerate().map(|(i, count)| (i as u32 + 1, *count))
    }

    pub fn to_map(&self) -> BTreeMap<u32, usize> {
        self.iter().collect()
    }
}

/// Count fake `politics` articles from `year`, bucketed by publication month.
///
/// Articles with an unparsable date, or a year but no month, are skipped.
pub fn count_fake_political_by_month(
    articles: &[ArticleRecord],
    year: i32,
) -> Result<MonthlyHistogram> {
    validate_year(year)?;
    let mut histogram = MonthlyHistogram::new(year);
    let mut skipped = 0usize;

    for article in articles
        .iter()
        .filter(|a| a.label.is_fake() && a.in_category(Category::Politics))
    {
        match article.publication_date() {
            Some(date) if date.year == year => match date.month {
                Some(month) => histogram.increment(month),
                None => skipped += 1,
            },
            Some(_) => {}
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("⏭️ Skipped {} fake political articles without a usable date", skipped);
    }
    Ok(histogram)
}
