pub mod answer_variants;
pub mod correlator;
pub mod grading_builder;
pub mod item_sequencer;
pub mod option_dedup;
pub mod quiz_validator;
pub mod sharing_manager;

pub use answer_variants::generate_fill_variants;
pub use correlator::correlate;
pub use grading_builder::build_grading_entries;
pub use item_sequencer::sequence_items;
pub use option_dedup::dedup_options;
pub use quiz_validator::{validate_quiz, ValidationPolicy};
pub use sharing_manager::{parse_recipients, SharingManager};
