pub mod audio_controls;
pub mod back_to_top;
pub mod call_to_action;
pub mod contact_form;
pub mod cookie_consent;
pub mod data_request_form;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod product_showcase;
