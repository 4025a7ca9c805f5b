mod report_engine;
#[cfg(test)]
mod tests;

pub use report_engine::{ImportJob, ReportEngine};
