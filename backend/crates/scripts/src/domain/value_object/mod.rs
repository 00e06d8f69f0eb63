//! Value Objects

pub mod script_id;
pub mod script_text;
pub mod script_title;
