pub mod adaptors;
pub mod alerts;
pub mod auth;
pub mod decision;
pub mod email;
pub mod validate;
pub mod workflow;
