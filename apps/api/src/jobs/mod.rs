//! Job-listing search proxy over the Remotive public API.

pub mod handlers;
