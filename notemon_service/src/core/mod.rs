pub mod constants;
pub mod format;
pub mod prompts;
