pub mod config;
pub mod domain;
pub mod inbound;
pub mod metrics;
pub mod outbound;

pub use domain::task;
pub use domain::user;
pub use outbound::repositories;
