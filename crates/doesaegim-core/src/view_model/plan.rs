//! Row-level view model for a single plan

use std::fmt;
use std::rc::Rc;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::StorageResult;
use crate::model::Plan;
use crate::repository::PlanRepository;

/// One plan as shown in the list
#[derive(Clone)]
pub struct PlanViewModel {
    plan: Plan,
    repository: Rc<dyn PlanRepository>,
}

impl PlanViewModel {
    pub fn new(plan: Plan, repository: Rc<dyn PlanRepository>) -> Self {
        Self { plan, repository }
    }

    pub fn id(&self) -> Uuid {
        self.plan.id
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn name(&self) -> &str {
        &self.plan.name
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        self.plan.date
    }

    pub fn is_complete(&self) -> bool {
        self.plan.is_complete
    }

    /// Persist a new completion state
    ///
    /// The wrapped plan only changes once the repository accepted the update.
    pub fn set_complete(&mut self, is_complete: bool) -> StorageResult<()> {
        self.repository.set_plan_complete(&self.plan, is_complete)?;
        self.plan.is_complete = is_complete;
        Ok(())
    }
}

impl fmt::Debug for PlanViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanViewModel")
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}
