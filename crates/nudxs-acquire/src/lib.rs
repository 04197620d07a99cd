pub mod fetch;
pub mod gudkov;
pub mod output;
