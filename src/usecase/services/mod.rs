pub mod merge_service;
pub mod template_service;
