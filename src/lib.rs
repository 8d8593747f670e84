//! A minimal server-rendered site: two pages and the plumbing to serve them.

mod embed;
pub mod site;
