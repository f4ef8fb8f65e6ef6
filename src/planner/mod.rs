mod parsing;
mod platform;
mod prompt;
mod transport;
mod types;

pub use types::{Plan, PlanFile};

pub use transport::request_plan;
