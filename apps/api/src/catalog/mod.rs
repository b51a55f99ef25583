//! Static career, education, and scholarship catalog with keyword-overlap
//! search and recommendations.

pub mod handlers;
pub mod records;
pub mod search;
