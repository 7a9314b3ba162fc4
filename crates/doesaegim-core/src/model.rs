//! Travel and plan records
//!
//! Records are plain values owned by the storage layer; view models hold
//! copies and never write to them directly.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trip with a name and date range, parent of plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Travel {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Input for creating a travel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDto {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TravelDto {
    /// Create a DTO with a freshly generated id
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            end_date,
        }
    }
}

/// A single scheduled activity within a travel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique, stable identifier
    pub id: Uuid,
    /// Owning travel
    pub travel_id: Uuid,
    pub name: String,
    /// Local wall-clock time; plans without one are never listed
    pub date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_complete: bool,
}

/// Input for creating a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDto {
    pub id: Uuid,
    pub travel_id: Uuid,
    pub name: String,
    pub date: Option<NaiveDateTime>,
    pub content: Option<String>,
    pub location: Option<String>,
}

impl PlanDto {
    /// Create a DTO for `travel` with a freshly generated id
    pub fn new(travel: &Travel, name: impl Into<String>, date: Option<NaiveDateTime>) -> Self {
        Self {
            id: Uuid::new_v4(),
            travel_id: travel.id,
            name: name.into(),
            date,
            content: None,
            location: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The record this DTO becomes once saved
    pub fn into_plan(self) -> Plan {
        Plan {
            id: self.id,
            travel_id: self.travel_id,
            name: self.name,
            date: self.date,
            content: self.content,
            location: self.location,
            is_complete: false,
        }
    }
}
