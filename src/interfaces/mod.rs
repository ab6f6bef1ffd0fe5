//! User-facing edges: routing of application URLs and page rendering.

pub mod presenter;
pub mod routes;
