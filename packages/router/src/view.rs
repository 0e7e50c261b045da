// ABOUTME: The six views the router can mount
// ABOUTME: Each view is referenced only by its identifier, which doubles as the route name

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    UserLogin,
    UserSignup,
    BoardNoticeList,
    BoardNoticeView,
    BoardFreeList,
    BoardFreeView,
}

impl View {
    /// All views in route table order
    pub fn all() -> [View; 6] {
        [
            View::UserLogin,
            View::UserSignup,
            View::BoardNoticeList,
            View::BoardNoticeView,
            View::BoardFreeList,
            View::BoardFreeView,
        ]
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            View::UserLogin => "UserLogin",
            View::UserSignup => "UserSignup",
            View::BoardNoticeList => "BoardNoticeList",
            View::BoardNoticeView => "BoardNoticeView",
            View::BoardFreeList => "BoardFreeList",
            View::BoardFreeView => "BoardFreeView",
        }
    }

    /// Detail views receive the `boardId` path parameter
    pub fn takes_board_id(&self) -> bool {
        matches!(self, View::BoardNoticeView | View::BoardFreeView)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_detail_views_take_board_id() {
        let detail: Vec<View> = View::all()
            .into_iter()
            .filter(|v| v.takes_board_id())
            .collect();
        assert_eq!(detail, vec![View::BoardNoticeView, View::BoardFreeView]);
    }

    #[test]
    fn test_display_matches_identifier() {
        for view in View::all() {
            assert_eq!(view.to_string(), view.identifier());
        }
    }
}
