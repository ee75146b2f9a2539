//! Analyze Logs UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: submission service contract and its fetch implementation
//! - state.rs: InteractionState and its transitions
//! - view_model.rs: FormController driving the submission lifecycle
//! - view.rs: Main component AnalyzeLogsPage
//! - result_view.rs: Result panel

mod model;
mod result_view;
mod state;
mod view;
mod view_model;

pub use model::{HttpSubmissionService, LogFile, SubmissionService, SubmitError};
pub use result_view::{render_result, ResultView};
pub use state::{InteractionState, Notice};
pub use view::AnalyzeLogsPage;
pub use view_model::{AlertNotifier, FormController, Notifier, SubmitOutcome};
