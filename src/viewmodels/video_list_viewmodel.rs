// ============================================================================
// VIDEO LIST VIEWMODEL
// ============================================================================
// Pure state derivation for the library route. The view only renders the
// branch picked here and runs the side effects it is told to run.
// ============================================================================

use crate::models::{LibraryQuery, SessionStatus, VideoSummary, Viewport};
use crate::stores::VideosStore;

pub const POPUP_VIEWPORT_WIDTH: u32 = 500;
pub const POPUP_VIEWPORT_HEIGHTS: [u32; 2] = [499, 500];

const UPGRADED: &str = "Successfully upgraded";
const CANCELLED: &str = "Purchase cancelled";
const LOGGED_IN: &str = "Successfully logged in";
const CLOSE_AND_RETRY: &str = "You can now close this window and try to upload the video again!";
const CLOSE_ONLY: &str = "You can now close this window";
const REDIRECTING: &str = "You will be redirected shortly";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Exactly one of these renders per pass
#[derive(Clone, Debug, PartialEq)]
pub enum LibraryBranch<'a> {
    Redirecting,
    Status(StatusMessage),
    Empty,
    Loading,
    Loaded(&'a [VideoSummary]),
}

/// Checkout and OAuth popups are opened at 500x500; some browsers report one
/// pixel less of inner height.
pub fn is_popup_viewport(viewport: Viewport) -> bool {
    viewport.width == POPUP_VIEWPORT_WIDTH && POPUP_VIEWPORT_HEIGHTS.contains(&viewport.height)
}

pub fn compute_close_window(viewport: Viewport, close: Option<&str>) -> bool {
    is_popup_viewport(viewport) || close == Some("true")
}

pub fn status_message(checkout_canceled: Option<&str>, close: Option<&str>) -> StatusMessage {
    let (title, detail) = match (checkout_canceled, close) {
        (Some("false"), Some("true")) => (UPGRADED, CLOSE_AND_RETRY),
        (Some("false"), _) => (UPGRADED, REDIRECTING),
        (Some("true"), Some("true")) => (CANCELLED, CLOSE_ONLY),
        (Some("true"), _) => (CANCELLED, REDIRECTING),
        _ => (LOGGED_IN, CLOSE_AND_RETRY),
    };
    StatusMessage { title, detail }
}

/// A checkout that returned into the main tab reloads the bare library once
/// the billing webhook has had time to land.
pub fn should_schedule_reload(query: &LibraryQuery) -> bool {
    query.checkout_canceled().is_some() && query.close() == Some("false")
}

/// Picks the branch in precedence order: redirect, status message, then
/// empty / loading / loaded. A failed fetch renders as loading.
pub fn select_branch<'a>(
    session: &SessionStatus,
    query: &LibraryQuery,
    close_window: bool,
    videos: &'a VideosStore,
) -> LibraryBranch<'a> {
    if session.is_unauthenticated() {
        return LibraryBranch::Redirecting;
    }

    if close_window || query.checkout_canceled().is_some() {
        return LibraryBranch::Status(status_message(query.checkout_canceled(), query.close()));
    }

    match videos.videos.as_deref() {
        Some([]) => LibraryBranch::Empty,
        Some(list) => LibraryBranch::Loaded(list),
        None => LibraryBranch::Loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, SessionUser};
    use chrono::{TimeZone, Utc};

    fn signed_in() -> SessionStatus {
        SessionStatus::Authenticated(Session {
            user: SessionUser {
                id: "u1".to_string(),
                name: Some("Ada".to_string()),
                email: None,
                image: None,
                stripe_subscription_status: Some("active".to_string()),
            },
            expires: None,
        })
    }

    fn video(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: format!("Video {}", id),
            created_at: Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap(),
            thumbnail_url: format!("https://cdn.example.com/{}.png", id),
        }
    }

    const DESKTOP: Viewport = Viewport { width: 1440, height: 900 };

    #[test]
    fn popup_viewport_edges() {
        assert!(is_popup_viewport(Viewport::new(500, 500)));
        assert!(is_popup_viewport(Viewport::new(500, 499)));
        assert!(!is_popup_viewport(Viewport::new(501, 500)));
        assert!(!is_popup_viewport(Viewport::new(499, 500)));
        assert!(!is_popup_viewport(Viewport::new(500, 498)));
        assert!(!is_popup_viewport(Viewport::new(500, 501)));
    }

    #[test]
    fn close_window_from_viewport_or_query() {
        assert!(compute_close_window(Viewport::new(500, 500), None));
        assert!(compute_close_window(DESKTOP, Some("true")));
        assert!(!compute_close_window(DESKTOP, Some("false")));
        assert!(!compute_close_window(DESKTOP, Some("TRUE")));
        assert!(!compute_close_window(Viewport::new(501, 500), None));
    }

    #[test]
    fn message_matrix() {
        let cases = [
            (Some("false"), Some("true"), UPGRADED, CLOSE_AND_RETRY),
            (Some("false"), Some("false"), UPGRADED, REDIRECTING),
            (Some("false"), None, UPGRADED, REDIRECTING),
            (Some("true"), Some("true"), CANCELLED, CLOSE_ONLY),
            (Some("true"), Some("false"), CANCELLED, REDIRECTING),
            (Some("true"), None, CANCELLED, REDIRECTING),
            (None, None, LOGGED_IN, CLOSE_AND_RETRY),
            (None, Some("true"), LOGGED_IN, CLOSE_AND_RETRY),
            (Some("maybe"), Some("true"), LOGGED_IN, CLOSE_AND_RETRY),
        ];
        for (canceled, close, title, detail) in cases {
            assert_eq!(
                status_message(canceled, close),
                StatusMessage { title, detail },
                "checkoutCanceled={:?} close={:?}",
                canceled,
                close
            );
        }
    }

    #[test]
    fn upgraded_and_closable_literal_copy() {
        let message = status_message(Some("false"), Some("true"));
        assert_eq!(message.title, "Successfully upgraded");
        assert!(message.detail.contains("close this window and try to upload the video again"));
    }

    #[test]
    fn unauthenticated_always_redirects() {
        let store = VideosStore::loaded(vec![video("a")]);
        for query in [
            LibraryQuery::default(),
            LibraryQuery::new(Some("false"), Some("true")),
        ] {
            assert_eq!(
                select_branch(&SessionStatus::Unauthenticated, &query, true, &store),
                LibraryBranch::Redirecting
            );
        }
    }

    #[test]
    fn status_branch_preempts_the_grid() {
        let store = VideosStore::loaded(vec![video("a")]);
        let query = LibraryQuery::new(Some("true"), Some("false"));
        assert_eq!(
            select_branch(&signed_in(), &query, false, &store),
            LibraryBranch::Status(status_message(Some("true"), Some("false")))
        );

        let popup = select_branch(&signed_in(), &LibraryQuery::default(), true, &store);
        assert_eq!(popup, LibraryBranch::Status(status_message(None, None)));
    }

    #[test]
    fn empty_list_shows_call_to_action() {
        let store = VideosStore::loaded(Vec::new());
        assert_eq!(
            select_branch(&signed_in(), &LibraryQuery::default(), false, &store),
            LibraryBranch::Empty
        );
    }

    #[test]
    fn pending_and_failed_fetches_render_skeletons() {
        let pending = VideosStore::default();
        assert_eq!(
            select_branch(&signed_in(), &LibraryQuery::default(), false, &pending),
            LibraryBranch::Loading
        );
        let failed = VideosStore::failed("HTTP 500: boom".to_string());
        assert_eq!(
            select_branch(&signed_in(), &LibraryQuery::default(), false, &failed),
            LibraryBranch::Loading
        );
    }

    #[test]
    fn loaded_list_keeps_server_order() {
        let store = VideosStore::loaded(vec![video("b"), video("a")]);
        match select_branch(&SessionStatus::Loading, &LibraryQuery::default(), false, &store) {
            LibraryBranch::Loaded(list) => {
                let ids: Vec<&str> = list.iter().map(|v| v.id.as_str()).collect();
                assert_eq!(ids, ["b", "a"]);
            }
            other => panic!("unexpected branch {:?}", other),
        }
    }

    #[test]
    fn empty_checkout_flag_is_ignored() {
        let query: LibraryQuery =
            serde_json::from_value(serde_json::json!({"checkoutCanceled": "", "close": "false"})).unwrap();
        assert_eq!(query.checkout_canceled(), None);
        assert!(!should_schedule_reload(&query));

        let store = VideosStore::loaded(vec![video("a")]);
        assert!(matches!(
            select_branch(&signed_in(), &query, false, &store),
            LibraryBranch::Loaded(_)
        ));
        assert_eq!(
            select_branch(&signed_in(), &query, false, &VideosStore::loaded(Vec::new())),
            LibraryBranch::Empty
        );
    }

    #[test]
    fn reload_only_for_checkout_returning_to_main_tab() {
        assert!(should_schedule_reload(&LibraryQuery::new(Some("true"), Some("false"))));
        assert!(should_schedule_reload(&LibraryQuery::new(Some("false"), Some("false"))));
        assert!(!should_schedule_reload(&LibraryQuery::new(Some("true"), Some("true"))));
        assert!(!should_schedule_reload(&LibraryQuery::new(Some("true"), None)));
        assert!(!should_schedule_reload(&LibraryQuery::new(None, Some("false"))));
    }
}
