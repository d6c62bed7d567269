mod complaint_form;
mod error_display;
mod loading_spinner;
mod report_display;

pub use complaint_form::{ComplaintForm, ComplaintSubmission};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use report_display::ReportDisplay;
