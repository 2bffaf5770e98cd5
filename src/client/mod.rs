//! Client side of the API: HTTP calls, table filtering and sorting, and the
//! dashboard figures derived from fetched lists.

pub mod api;
pub mod dashboard;
pub mod listing;
