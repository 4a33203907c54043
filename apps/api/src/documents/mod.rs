// Minimal document storage: resumes and job descriptions as plain text.

pub mod extract;
pub mod handlers;
pub mod store;
