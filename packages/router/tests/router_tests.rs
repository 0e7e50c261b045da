// ABOUTME: Integration tests for the route table and history resolution
// ABOUTME: Covers table shape, detail path construction, resolve and href

use multiboard_config::RouteSettings;
use multiboard_router::{create_router, Params, View, BOARD_ID_PARAM};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;

fn settings(base_url: &str) -> RouteSettings {
    RouteSettings {
        base_url: base_url.to_string(),
        login_page: "/login".to_string(),
        signup_page: "/signup".to_string(),
        notice_list: "/boards/notice".to_string(),
        notice_view: "/boards/notice/view".to_string(),
        free_list: "/boards/free".to_string(),
        free_view: "/boards/free/view".to_string(),
    }
}

fn board_params(id: &str) -> Params {
    let mut params = Params::new();
    params.insert(BOARD_ID_PARAM.to_string(), id.to_string());
    params
}

#[test]
fn test_route_table_shape() {
    let router = create_router(&settings("/"));

    let table: Vec<(&str, &str)> = router
        .routes()
        .iter()
        .map(|r| (r.path(), r.name()))
        .collect();

    assert_eq!(
        table,
        vec![
            ("/login", "UserLogin"),
            ("/signup", "UserSignup"),
            ("/boards/notice", "BoardNoticeList"),
            ("/boards/notice/view/:boardId", "BoardNoticeView"),
            ("/boards/free", "BoardFreeList"),
            ("/boards/free/view/:boardId", "BoardFreeView"),
        ]
    );
}

#[test]
fn test_one_entry_per_configured_path() {
    let router = create_router(&settings("/"));

    let paths: HashSet<&str> = router.routes().iter().map(|r| r.path()).collect();
    assert_eq!(paths.len(), 6);

    let views: HashSet<View> = router.routes().iter().map(|r| r.view()).collect();
    assert_eq!(views.len(), 6);
}

#[test]
fn test_history_registered_at_base() {
    let router = create_router(&settings("/multi-board/"));
    assert_eq!(router.history().base(), "/multi-board");
}

#[rstest]
#[case("/login", View::UserLogin, None)]
#[case("/signup/", View::UserSignup, None)]
#[case("/boards/notice?page=2", View::BoardNoticeList, None)]
#[case("/boards/notice/view/42", View::BoardNoticeView, Some("42"))]
#[case("/boards/free", View::BoardFreeList, None)]
#[case("/boards/free/view/7#comments", View::BoardFreeView, Some("7"))]
fn test_resolve(#[case] location: &str, #[case] view: View, #[case] board_id: Option<&str>) {
    let router = create_router(&settings("/"));

    let matched = router.resolve(location).expect("location should resolve");

    assert_eq!(matched.route.view(), view);
    assert_eq!(
        matched.params.get(BOARD_ID_PARAM).map(String::as_str),
        board_id
    );
}

#[test]
fn test_resolve_under_base() {
    let router = create_router(&settings("/app"));

    let matched = router.resolve("/app/boards/notice/view/42").unwrap();
    assert_eq!(matched.route.view(), View::BoardNoticeView);
    assert_eq!(matched.params, board_params("42"));

    assert!(router.resolve("/boards/notice/view/42").is_none());
}

#[test]
fn test_resolve_unknown_location() {
    let router = create_router(&settings("/"));

    assert!(router.resolve("/boards/qna").is_none());
    assert!(router.resolve("/boards/notice/view").is_none());
    assert!(router.resolve("/").is_none());
}

#[test]
fn test_unconfigured_routes_pass_through() {
    let router = create_router(&RouteSettings::default());

    assert_eq!(router.routes().len(), 6);
    assert!(router.resolve("/").is_none());

    // Both detail routes collapse to "/:boardId", the first one wins
    let matched = router.resolve("/login").unwrap();
    assert_eq!(matched.route.view(), View::BoardNoticeView);
    assert_eq!(matched.params, board_params("login"));
}

#[test]
fn test_href_round_trips_through_resolve() {
    let router = create_router(&settings("/app/"));

    let href = router
        .href(View::BoardFreeView, &board_params("13"))
        .unwrap();
    assert_eq!(href, "/app/boards/free/view/13");

    let matched = router.resolve(&href).unwrap();
    assert_eq!(matched.route.view(), View::BoardFreeView);
}

#[test]
fn test_href_requires_params() {
    let router = create_router(&settings("/"));

    assert_eq!(
        router.href(View::UserLogin, &Params::new()).as_deref(),
        Some("/login")
    );
    assert!(router.href(View::BoardNoticeView, &Params::new()).is_none());
}
