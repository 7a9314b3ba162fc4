//! SQLite-backed repository
//!
//! Owns the database and implements both repository traits on top of the
//! travel and plan stores.

use std::path::Path;

use uuid::Uuid;

use super::database::Database;
use super::plans::PlanStore;
use super::travels::TravelStore;
use crate::error::StorageResult;
use crate::model::{Plan, PlanDto, Travel, TravelDto};
use crate::repository::{PlanRepository, TravelRepository};

/// Repository over a local SQLite database
pub struct SqliteRepository {
    db: Database,
}

impl SqliteRepository {
    /// Create a repository with an existing database
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> StorageResult<Self> {
        Ok(Self::new(Database::new(path)?))
    }

    fn plans(&self) -> PlanStore<'_> {
        PlanStore::new(&self.db)
    }

    fn travels(&self) -> TravelStore<'_> {
        TravelStore::new(&self.db)
    }
}

impl PlanRepository for SqliteRepository {
    fn fetch_plans(&self, travel: &Travel) -> StorageResult<Vec<Plan>> {
        self.plans().list_plans(travel.id)
    }

    fn delete_plan(&self, plan: &Plan) -> StorageResult<()> {
        self.plans().delete_plan(plan.id)
    }

    fn add_plan(&self, dto: &PlanDto) -> StorageResult<Plan> {
        self.plans().add_plan(dto)
    }

    fn set_plan_complete(&self, plan: &Plan, is_complete: bool) -> StorageResult<()> {
        self.plans().set_complete(plan.id, is_complete)
    }
}

impl TravelRepository for SqliteRepository {
    fn add_and_save(&self, dto: &TravelDto) -> StorageResult<Travel> {
        self.travels().add_and_save(dto)
    }

    fn fetch_travels(&self) -> StorageResult<Vec<Travel>> {
        self.travels().list_travels()
    }

    fn find_travel(&self, id: Uuid) -> StorageResult<Option<Travel>> {
        self.travels().find_travel(id)
    }
}
