//! In-memory repository fakes for view model tests

use std::cell::{Cell, RefCell};

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};
use crate::model::{Plan, PlanDto, Travel, TravelDto};
use crate::repository::{PlanRepository, TravelRepository};

pub(crate) fn travel() -> Travel {
    Travel {
        id: Uuid::new_v4(),
        name: "Jeju".to_string(),
        start_date: NaiveDate::from_ymd_opt(2022, 11, 16).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2022, 11, 18).unwrap(),
    }
}

pub(crate) fn plan_on(travel: &Travel, name: &str, date: Option<NaiveDateTime>) -> Plan {
    PlanDto::new(travel, name, date).into_plan()
}

fn injected_failure() -> StorageError {
    StorageError::Database(rusqlite::Error::InvalidQuery)
}

/// Serves a fixed plan list and records writes
#[derive(Default)]
pub(crate) struct FakePlanRepository {
    plans: RefCell<Vec<Plan>>,
    deleted: RefCell<Vec<Uuid>>,
    completed: RefCell<Vec<(Uuid, bool)>>,
    fail_fetch: Cell<bool>,
    fail_delete: Cell<bool>,
    fail_update: Cell<bool>,
}

impl FakePlanRepository {
    pub(crate) fn with_plans(plans: Vec<Plan>) -> Self {
        Self {
            plans: RefCell::new(plans),
            ..Self::default()
        }
    }

    pub(crate) fn replace_plans(&self, plans: Vec<Plan>) {
        *self.plans.borrow_mut() = plans;
    }

    pub(crate) fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.set(fail);
    }

    pub(crate) fn fail_delete(&self, fail: bool) {
        self.fail_delete.set(fail);
    }

    pub(crate) fn fail_update(&self, fail: bool) {
        self.fail_update.set(fail);
    }

    pub(crate) fn deleted(&self) -> Vec<Uuid> {
        self.deleted.borrow().clone()
    }

    pub(crate) fn completed(&self) -> Vec<(Uuid, bool)> {
        self.completed.borrow().clone()
    }
}

impl PlanRepository for FakePlanRepository {
    fn fetch_plans(&self, _travel: &Travel) -> StorageResult<Vec<Plan>> {
        if self.fail_fetch.get() {
            return Err(injected_failure());
        }
        Ok(self.plans.borrow().clone())
    }

    fn delete_plan(&self, plan: &Plan) -> StorageResult<()> {
        if self.fail_delete.get() {
            return Err(injected_failure());
        }
        self.deleted.borrow_mut().push(plan.id);
        Ok(())
    }

    fn add_plan(&self, dto: &PlanDto) -> StorageResult<Plan> {
        let plan = dto.clone().into_plan();
        self.plans.borrow_mut().push(plan.clone());
        Ok(plan)
    }

    fn set_plan_complete(&self, plan: &Plan, is_complete: bool) -> StorageResult<()> {
        if self.fail_update.get() {
            return Err(injected_failure());
        }
        self.completed.borrow_mut().push((plan.id, is_complete));
        Ok(())
    }
}

/// Keeps travels in memory; can be told to reject saves
#[derive(Default)]
pub(crate) struct FakeTravelRepository {
    travels: RefCell<Vec<Travel>>,
    fail_save: Cell<bool>,
}

impl FakeTravelRepository {
    pub(crate) fn fail_save(&self, fail: bool) {
        self.fail_save.set(fail);
    }
}

impl TravelRepository for FakeTravelRepository {
    fn add_and_save(&self, dto: &TravelDto) -> StorageResult<Travel> {
        if self.fail_save.get() {
            return Err(injected_failure());
        }
        let travel = Travel {
            id: dto.id,
            name: dto.name.clone(),
            start_date: dto.start_date,
            end_date: dto.end_date,
        };
        self.travels.borrow_mut().push(travel.clone());
        Ok(travel)
    }

    fn fetch_travels(&self) -> StorageResult<Vec<Travel>> {
        Ok(self.travels.borrow().clone())
    }

    fn find_travel(&self, id: Uuid) -> StorageResult<Option<Travel>> {
        Ok(self.travels.borrow().iter().find(|t| t.id == id).cloned())
    }
}
