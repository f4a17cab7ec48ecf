pub mod form_item;
pub mod grading;
pub mod loaders;
pub mod quiz;
pub mod sharing;

pub use form_item::{FormItemHandle, FormItemSpec, ItemId, ItemKind};
pub use grading::GradingEntry;
pub use loaders::load_quiz_file;
pub use quiz::{FillQuestion, McQuestion, Quiz};
pub use sharing::{AccessRole, SharingOutcome, SharingSummary};
