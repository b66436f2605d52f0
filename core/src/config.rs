//! Client configuration: base URL and the date → program calendar.
//!
//! # Design
//! The calendar is injected into `ProgramService` rather than hardcoded, so
//! a new edition only needs a new config file. Both values are immutable
//! once loaded.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::ProgramId;

pub const DEFAULT_BASE_URL: &str = "https://seville2017.drupaldays.org";

const SEVILLE_2017: [((i32, u32, u32), ProgramId); 5] = [
    ((2017, 3, 21), 126),
    ((2017, 3, 22), 127),
    ((2017, 3, 23), 128),
    ((2017, 3, 24), 129),
    ((2017, 3, 25), 130),
];

/// Immutable mapping from conference day to program identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramCalendar {
    days: BTreeMap<NaiveDate, ProgramId>,
}

impl ProgramCalendar {
    pub fn new(days: BTreeMap<NaiveDate, ProgramId>) -> Self {
        Self { days }
    }

    pub fn program_id(&self, date: NaiveDate) -> Option<ProgramId> {
        self.days.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, ProgramId)> + '_ {
        self.days.iter().map(|(date, id)| (*date, *id))
    }
}

impl FromIterator<(NaiveDate, ProgramId)> for ProgramCalendar {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, ProgramId)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The five days of DrupalDevDays Seville 2017.
impl Default for ProgramCalendar {
    fn default() -> Self {
        SEVILLE_2017
            .iter()
            .filter_map(|&((y, m, d), id)| NaiveDate::from_ymd_opt(y, m, d).map(|date| (date, id)))
            .collect()
    }
}

/// Everything the services need to reach the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub calendar: ProgramCalendar,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            calendar: ProgramCalendar::default(),
        }
    }
}

/// On-disk shape. Program keys stay strings until validated.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClientConfig {
    base_url: Option<String>,
    program: Option<BTreeMap<String, ProgramId>>,
}

impl ClientConfig {
    /// Same calendar, different server. Handy for pointing at a mock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawClientConfig = toml::from_str(input)?;

        let base_url = match raw.base_url {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyBaseUrl),
            Some(url) => url,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let calendar = match raw.program {
            Some(days) => days
                .into_iter()
                .map(|(key, id)| {
                    NaiveDate::parse_from_str(&key, "%Y-%m-%d")
                        .map(|date| (date, id))
                        .map_err(|source| ConfigError::InvalidDate { key, source })
                })
                .collect::<Result<ProgramCalendar, _>>()?,
            None => ProgramCalendar::default(),
        };

        tracing::debug!(%base_url, days = calendar.len(), "loaded client config");
        Ok(Self { base_url, calendar })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }
}
