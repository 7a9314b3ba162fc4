//! Repository contracts
//!
//! View models only talk to persistence through these traits, so the SQLite
//! store can be swapped for an in-memory fake in tests.

use uuid::Uuid;

use crate::error::StorageResult;
use crate::model::{Plan, PlanDto, Travel, TravelDto};

/// Access to the plans of a travel
pub trait PlanRepository {
    /// All plans of `travel`, ordered by date ascending with undated plans last
    fn fetch_plans(&self, travel: &Travel) -> StorageResult<Vec<Plan>>;

    /// Remove a plan permanently
    fn delete_plan(&self, plan: &Plan) -> StorageResult<()>;

    /// Persist a new plan
    fn add_plan(&self, dto: &PlanDto) -> StorageResult<Plan>;

    /// Persist the completion flag of a plan
    fn set_plan_complete(&self, plan: &Plan, is_complete: bool) -> StorageResult<()>;
}

/// Access to travel records
pub trait TravelRepository {
    /// Insert and commit a travel in one step
    ///
    /// The record is visible to later fetches only if this returns `Ok`.
    fn add_and_save(&self, dto: &TravelDto) -> StorageResult<Travel>;

    /// All travels ordered by start date
    fn fetch_travels(&self) -> StorageResult<Vec<Travel>>;

    /// Look up a single travel
    fn find_travel(&self, id: Uuid) -> StorageResult<Option<Travel>>;
}
