//! Section keys for the plan list
//!
//! A section key is the plan's date rendered as `yy.MM.dd(E)`, e.g.
//! `22.11.16(수)`. Plans whose keys match share a section.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::section::{DATE_FORMAT, ENGLISH_WEEKDAYS, KOREAN_WEEKDAYS};
use crate::model::Plan;

/// Language of the weekday abbreviation in section keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayLabels {
    #[default]
    Korean,
    English,
}

impl WeekdayLabels {
    fn table(self) -> &'static [&'static str; 7] {
        match self {
            WeekdayLabels::Korean => &KOREAN_WEEKDAYS,
            WeekdayLabels::English => &ENGLISH_WEEKDAYS,
        }
    }
}

/// Formats plan dates into section keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionDateFormatter {
    labels: WeekdayLabels,
}

impl SectionDateFormatter {
    pub fn new(labels: WeekdayLabels) -> Self {
        Self { labels }
    }

    /// Render `date` as a section key
    pub fn format(&self, date: NaiveDateTime) -> String {
        let weekday = self.labels.table()[date.weekday().num_days_from_monday() as usize];
        format!("{}({})", date.format(DATE_FORMAT), weekday)
    }

    /// Section key of a plan, `None` when it has no date
    pub fn key(&self, plan: &Plan) -> Option<String> {
        plan.date.map(|date| self.format(date))
    }
}
