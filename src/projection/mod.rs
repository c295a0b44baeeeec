//! Growth projections for a lump sum plus monthly contributions

mod growth;
mod schedule;

pub use growth::{
    annuity_future_value, lump_sum_future_value, project_growth, ProjectionInput,
    ProjectionResult, MAX_PROJECTION_YEARS, ZERO_RATE_EPSILON,
};
pub use schedule::{simulate_monthly, yearly_schedule, ScheduleRow};
