pub mod client;
pub mod eligibility;
pub mod form;
pub mod metrics;
pub mod router;
pub mod session;
pub mod signup;
pub mod utils;
pub mod validation;
