//! Doesaegim Core - trip records, plan storage, and list view models
//!
//! This crate provides everything below the presentation layer:
//! - Travel and plan records
//! - Repository contracts and their SQLite implementation
//! - View models that group a trip's plans into dated sections

pub mod constants;
pub mod error;
pub mod model;
pub mod paths;
pub mod repository;
pub mod storage;
pub mod view_model;

// Re-exports for convenience
pub use error::{IndexError, StorageError, StorageResult};
pub use model::{Plan, PlanDto, Travel, TravelDto};
pub use repository::{PlanRepository, TravelRepository};
pub use storage::{Database, SqliteRepository};
pub use view_model::{PlanListViewModel, PlanViewModel, TravelAddViewModel};
