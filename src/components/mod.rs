pub mod error_message;
pub mod header;
pub mod image_preview;
pub mod loading_indicator;
pub mod upload_form;
