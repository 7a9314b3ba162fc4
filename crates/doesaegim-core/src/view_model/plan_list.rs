//! Plan list view model
//!
//! Holds one travel's plans grouped into dated sections for display:
//! - Plans arrive from the repository already sorted by date
//! - Consecutive plans with the same section key share a section
//! - Plans without a date are never listed
//! - Sections are never empty

use std::rc::Rc;

use tracing::{debug, info};
use uuid::Uuid;

use super::listeners::{Listeners, Subscription};
use super::plan::PlanViewModel;
use super::section::SectionDateFormatter;
use crate::error::{IndexError, StorageResult};
use crate::model::{Plan, Travel};
use crate::repository::PlanRepository;

/// Change notifications for the plan list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanListEvent {
    /// A fetch finished; `is_empty` describes the whole list afterwards
    Fetched { is_empty: bool },
    /// The plan with this id was deleted and removed from its section
    Deleted { id: Uuid },
}

/// Result of a successful fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Plans added to the sections by this fetch
    pub appended: usize,
    /// Whether the list has no sections afterwards
    pub is_empty: bool,
}

/// Plans of one travel, grouped by date
pub struct PlanListViewModel {
    travel: Travel,
    repository: Rc<dyn PlanRepository>,
    formatter: SectionDateFormatter,
    sections: Vec<Vec<PlanViewModel>>,
    listeners: Listeners<PlanListEvent>,
}

impl PlanListViewModel {
    pub fn new(travel: Travel, repository: Rc<dyn PlanRepository>) -> Self {
        Self::with_formatter(travel, repository, SectionDateFormatter::default())
    }

    pub fn with_formatter(
        travel: Travel,
        repository: Rc<dyn PlanRepository>,
        formatter: SectionDateFormatter,
    ) -> Self {
        Self {
            travel,
            repository,
            formatter,
            sections: Vec::new(),
            listeners: Listeners::new(),
        }
    }

    /// Screen title, the travel's name
    pub fn navigation_title(&self) -> &str {
        &self.travel.name
    }

    pub fn travel(&self) -> &Travel {
        &self.travel
    }

    pub fn sections(&self) -> &[Vec<PlanViewModel>] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Rows in `section`, `None` if the section does not exist
    pub fn row_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Register for fetch and delete notifications
    pub fn subscribe(&mut self, listener: impl FnMut(&PlanListEvent) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.listeners.unsubscribe(subscription)
    }

    /// Load the travel's plans and append them to the current sections
    ///
    /// Repeated calls extend the list rather than replace it; use
    /// [`reload`](Self::reload) to rebuild from scratch. A repository error
    /// is returned as-is and leaves the sections unchanged.
    pub fn fetch(&mut self) -> StorageResult<FetchOutcome> {
        let plans = self.repository.fetch_plans(&self.travel)?;
        let appended = self.append(plans);
        let is_empty = self.sections.is_empty();

        info!(
            "Fetched plans for travel {}: {} appended, {} sections",
            self.travel.id,
            appended,
            self.sections.len()
        );
        self.listeners.emit(&PlanListEvent::Fetched { is_empty });
        Ok(FetchOutcome { appended, is_empty })
    }

    /// Discard the current sections and fetch again
    ///
    /// The old sections survive if the repository fails.
    pub fn reload(&mut self) -> StorageResult<FetchOutcome> {
        let previous = std::mem::take(&mut self.sections);
        match self.fetch() {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.sections = previous;
                Err(e)
            }
        }
    }

    fn append(&mut self, plans: Vec<Plan>) -> usize {
        let mut last_key = self.last_section_key();
        let mut appended = 0;

        for plan in plans {
            let Some(key) = self.formatter.key(&plan) else {
                debug!("Skipping undated plan {}", plan.id);
                continue;
            };
            let item = PlanViewModel::new(plan, self.repository.clone());

            if last_key.as_deref() != Some(key.as_str()) {
                self.sections.push(Vec::new());
            }
            if let Some(section) = self.sections.last_mut() {
                section.push(item);
            }
            last_key = Some(key);
            appended += 1;
        }

        appended
    }

    /// Key of the most recently appended item
    fn last_section_key(&self) -> Option<String> {
        self.sections
            .last()
            .and_then(|section| section.last())
            .and_then(|item| self.formatter.key(item.plan()))
    }

    /// Header for `section`: the key of its first plan
    pub fn title(&self, section: usize) -> Result<Option<String>, IndexError> {
        let items = self.section(section)?;
        Ok(items
            .first()
            .and_then(|item| self.formatter.key(item.plan())))
    }

    /// The item at `section`/`row`, only if it still has `expected_id`
    ///
    /// A different id means the caller's coordinates are stale; that is
    /// `Ok(None)`, not an error.
    pub fn item(
        &self,
        section: usize,
        row: usize,
        expected_id: Uuid,
    ) -> Result<Option<&PlanViewModel>, IndexError> {
        let items = self.section(section)?;
        let item = items.get(row).ok_or(IndexError::Row {
            section,
            row,
            len: items.len(),
        })?;

        Ok((item.id() == expected_id).then_some(item))
    }

    /// Mutable access for per-item operations, with the same id check as [`item`](Self::item)
    pub fn item_mut(
        &mut self,
        section: usize,
        row: usize,
        expected_id: Uuid,
    ) -> Result<Option<&mut PlanViewModel>, IndexError> {
        let len = self.sections.len();
        let items = self
            .sections
            .get_mut(section)
            .ok_or(IndexError::Section { section, len })?;
        let row_len = items.len();
        let item = items.get_mut(row).ok_or(IndexError::Row {
            section,
            row,
            len: row_len,
        })?;

        Ok((item.id() == expected_id).then_some(item))
    }

    fn section(&self, section: usize) -> Result<&Vec<PlanViewModel>, IndexError> {
        self.sections.get(section).ok_or(IndexError::Section {
            section,
            len: self.sections.len(),
        })
    }

    /// Delete the plan at `section`/`row`
    ///
    /// Out-of-range coordinates are ignored and return `Ok(None)` without
    /// touching the repository. On a repository error the sections are left
    /// exactly as they were. Returns the deleted plan's id.
    pub fn delete_plan(&mut self, section: usize, row: usize) -> StorageResult<Option<Uuid>> {
        let Some(item) = self.sections.get(section).and_then(|items| items.get(row)) else {
            debug!("Ignoring delete at {}/{}: out of range", section, row);
            return Ok(None);
        };

        self.repository.delete_plan(item.plan())?;
        let id = item.id();

        self.sections[section].remove(row);
        if self.sections[section].is_empty() {
            self.sections.remove(section);
        }

        info!("Deleted plan {} from section {}", id, section);
        self.listeners.emit(&PlanListEvent::Deleted { id });
        Ok(Some(id))
    }
}
