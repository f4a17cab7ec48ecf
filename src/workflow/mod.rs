pub mod form_ctx;
pub mod quiz_form_flow;

pub use form_ctx::FormCtx;
pub use quiz_form_flow::{FormBuildReport, QuizFormFlow, DEFAULT_FORM_TITLE};
