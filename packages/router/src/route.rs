// ABOUTME: Route entries and the route table builder
// ABOUTME: Pairs each configured path with exactly one view, detail views get a boardId segment

use multiboard_config::RouteSettings;
use serde::Serialize;

use crate::view::View;

/// Name of the dynamic segment on detail routes
pub const BOARD_ID_PARAM: &str = "boardId";

/// A single path → view binding. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    path: String,
    name: &'static str,
    view: View,
}

impl RouteEntry {
    fn new(path: String, view: View) -> Self {
        Self {
            path,
            name: view.identifier(),
            view,
        }
    }

    /// Path pattern, possibly containing `:boardId`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn view(&self) -> View {
        self.view
    }
}

fn detail_path(prefix: &str) -> String {
    format!("{}/:{}", prefix, BOARD_ID_PARAM)
}

/// Path configured for `view`; a prefix for views that take a board id
fn configured_path(settings: &RouteSettings, view: View) -> &str {
    match view {
        View::UserLogin => &settings.login_page,
        View::UserSignup => &settings.signup_page,
        View::BoardNoticeList => &settings.notice_list,
        View::BoardNoticeView => &settings.notice_view,
        View::BoardFreeList => &settings.free_list,
        View::BoardFreeView => &settings.free_view,
    }
}

/// Build the route table in its fixed order.
///
/// Configured values are used verbatim, nothing is validated.
pub fn build_routes(settings: &RouteSettings) -> Vec<RouteEntry> {
    View::all()
        .into_iter()
        .map(|view| {
            let configured = configured_path(settings, view);
            let path = if view.takes_board_id() {
                detail_path(configured)
            } else {
                configured.to_string()
            };
            RouteEntry::new(path, view)
        })
        .collect()
}
