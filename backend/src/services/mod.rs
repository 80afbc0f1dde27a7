//! Business logic services
//!
//! Handlers stay thin; the rules for planner sessions, onboarding,
//! gateway fallbacks and persisted user data live here.

pub mod coaching;
pub mod context;
pub mod library;
pub mod onboarding;
pub mod planner;
pub mod plans;
pub mod reminders;
pub mod sessions;

pub use coaching::CoachingService;
pub use context::AppContext;
pub use library::LibraryService;
pub use onboarding::OnboardingService;
pub use planner::PlannerService;
pub use plans::PlanService;
pub use reminders::ReminderService;
