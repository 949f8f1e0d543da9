pub mod args;
pub mod commands;
pub mod startup;

pub use startup::run;
