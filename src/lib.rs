/// civic-complaint-lab library crate.
///
/// Exposes the dataset and client pipeline modules as a public API so that
/// integration tests in tests/ can import them via `civic_complaint_lab::`.
///
/// The binary entry point (src/main.rs) uses these same modules.
pub mod client;
pub mod composer;
pub mod dataset;
pub mod inspect;
pub mod labels;
pub mod priority;
pub mod utils;
pub mod vocab;
