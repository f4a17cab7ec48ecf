pub mod form_service;
pub mod google_forms_client;
pub mod google_requests;

pub use form_service::FormService;
pub use google_forms_client::GoogleFormsClient;
