// ABOUTME: Multiboard client-side router
// ABOUTME: Builds the ordered route table for the six views and resolves history-mode locations

pub mod route;
pub mod router;
pub mod view;

pub use route::{build_routes, RouteEntry, BOARD_ID_PARAM};
pub use router::{create_router, History, Params, RouteMatch, Router};
pub use view::View;
