pub mod core;
pub mod error;
pub mod main;
pub mod preview;
pub mod render;
pub mod result_view;
pub mod run_effect;
#[cfg(test)]
pub mod tests;
