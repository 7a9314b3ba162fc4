//! View models for the travel scenes
//!
//! Presentation-agnostic state holders: they own what a screen shows, talk
//! to persistence through the repository traits, and report changes to
//! registered listeners.

mod listeners;
mod plan;
mod plan_list;
mod section;
mod travel_add;

#[cfg(test)]
pub(crate) mod test_support;

pub use listeners::{Listeners, Subscription};
pub use plan::PlanViewModel;
pub use plan_list::{FetchOutcome, PlanListEvent, PlanListViewModel};
pub use section::{SectionDateFormatter, WeekdayLabels};
pub use travel_add::{TravelAddError, TravelAddViewModel};
