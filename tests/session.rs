#[cfg(test)]
mod tests {
    use ergomate::libs::session::{AppView, Session};

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert!(!session.is_monitoring());
        assert_eq!(session.active_view(), AppView::Dashboard);
    }

    #[test]
    fn test_set_monitoring_reports_changes_only() {
        let mut session = Session::new();

        assert!(session.set_monitoring(true));
        assert!(session.is_monitoring());

        // Setting the same value again is not a change
        assert!(!session.set_monitoring(true));

        assert!(session.set_monitoring(false));
        assert!(!session.is_monitoring());
    }

    #[test]
    fn test_entering_posture_view_auto_starts_monitoring() {
        let mut session = Session::new();

        let auto_started = session.set_active_view(AppView::Posture);
        assert!(auto_started);
        assert!(session.is_monitoring());
        assert_eq!(session.active_view(), AppView::Posture);
    }

    #[test]
    fn test_posture_view_with_monitoring_already_on() {
        let mut session = Session::new();
        session.set_monitoring(true);

        // No side effect when monitoring is already running
        assert!(!session.set_active_view(AppView::Posture));
        assert!(session.is_monitoring());
    }

    #[test]
    fn test_leaving_posture_view_does_not_stop_monitoring() {
        let mut session = Session::new();
        session.set_active_view(AppView::Posture);

        // One-directional: switching away leaves monitoring on
        assert!(!session.set_active_view(AppView::Dashboard));
        assert!(session.is_monitoring());
        assert_eq!(session.active_view(), AppView::Dashboard);
    }

    #[test]
    fn test_other_views_have_no_monitoring_side_effect() {
        let mut session = Session::new();

        for view in [
            AppView::Dashboard,
            AppView::Exercises,
            AppView::Streamer,
            AppView::Stats,
            AppView::Assistant,
            AppView::Leaderboard,
            AppView::Feedback,
        ] {
            assert!(!session.set_active_view(view));
            assert!(!session.is_monitoring());
        }
    }
}
