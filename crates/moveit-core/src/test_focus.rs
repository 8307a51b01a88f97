#[cfg(test)]
mod tests {
    use crate::*;

    fn single() -> MockDeskOps {
        MockDeskOps::new(Rect::new(0, 0, 1000, 800))
    }

    fn west(id: u32) -> MockWindow {
        MockWindow::new(id, Rect::new(0, 0, 500, 800))
    }

    fn east(id: u32) -> MockWindow {
        MockWindow::new(id, Rect::new(500, 0, 500, 800))
    }

    fn focus(ops: &MockDeskOps, active: Option<u32>, token: &str) -> Result<Outcome> {
        focus_with(ops, active, token, FocusOptions::default())
    }

    fn focus_with(
        ops: &MockDeskOps,
        active: Option<u32>,
        token: &str,
        options: FocusOptions,
    ) -> Result<Outcome> {
        let heads = Heads::discover(ops, StrutPolicy::default())?;
        FocusSelector::new(ops, &heads, options).focus_next(
            active.map(WindowId::new),
            &Position::parse(token),
            50,
        )
    }

    fn focused(id: u32) -> Outcome {
        Outcome::Focused {
            window: WindowId::new(id),
        }
    }

    #[test]
    fn rotates_through_stacked_windows() {
        let ops = single();
        ops.set_windows(vec![west(1), west(2), west(3), east(4)]);

        assert_eq!(focus(&ops, Some(2), "W").unwrap(), focused(3));
        assert_eq!(focus(&ops, Some(3), "W").unwrap(), focused(1));
        assert_eq!(focus(&ops, Some(4), "W").unwrap(), focused(3));
        assert_eq!(focus(&ops, None, "W").unwrap(), focused(3));
        assert_eq!(
            &ops.calls()[..2],
            &["restack 0x3".to_string(), "activate 0x3".to_string()]
        );
    }

    #[test]
    fn repeated_invocations_cycle() {
        let ops = single();
        ops.set_windows(vec![west(1), west(2), west(3)]);
        let heads = Heads::discover(&ops, StrutPolicy::default()).unwrap();
        let selector = FocusSelector::new(&ops, &heads, FocusOptions::default());
        let w = Position::parse("W");

        let seen: Vec<Outcome> = (0..4)
            .map(|_| selector.focus_from_active(&w, 50).unwrap())
            .collect();
        assert_eq!(seen, vec![focused(3), focused(1), focused(2), focused(3)]);
    }

    #[test]
    fn empty_match_is_a_no_op() {
        let ops = single();
        ops.set_windows(vec![east(1), east(2)]);
        ops.set_active(Some(2));
        assert_eq!(focus(&ops, Some(2), "W").unwrap(), Outcome::Nothing);
        assert!(ops.calls().is_empty());
    }

    #[test]
    fn other_head_on_single_head_is_a_no_op() {
        let ops = single();
        ops.set_windows(vec![west(1), east(2)]);
        assert_eq!(focus(&ops, Some(1), "O").unwrap(), Outcome::Nothing);
        assert!(ops.calls().is_empty());
    }

    #[test]
    fn other_head_picks_windows_on_next_monitor() {
        let ops = MockDeskOps::new(Rect::new(0, 0, 3840, 1080));
        ops.set_monitors(vec![
            Rect::new(0, 0, 1920, 1080),
            Rect::new(1920, 0, 1920, 1080),
        ]);
        ops.set_windows(vec![
            MockWindow::new(1, Rect::new(100, 100, 800, 600)),
            MockWindow::new(2, Rect::new(2000, 100, 800, 600)),
            MockWindow::new(3, Rect::new(0, 0, 3840, 1080)),
        ]);
        assert_eq!(focus(&ops, Some(1), "O").unwrap(), focused(2));
        assert_eq!(focus(&ops, Some(2), "o").unwrap(), focused(1));
    }

    #[test]
    fn center_matches_windows_covering_the_middle() {
        let ops = single();
        ops.set_windows(vec![
            MockWindow::new(1, Rect::new(150, 120, 700, 560)),
            west(2),
            MockWindow::new(3, Rect::new(0, 0, 1000, 800)),
            MockWindow::new(4, Rect::new(800, 600, 200, 200)),
        ]);
        assert_eq!(focus(&ops, None, "C").unwrap(), focused(3));
        assert_eq!(focus(&ops, Some(3), "C").unwrap(), focused(1));
    }

    #[test]
    fn compass_accepts_window_covering_target() {
        let ops = single();
        ops.set_windows(vec![west(1), MockWindow::new(2, Rect::new(0, 0, 1000, 800))]);
        assert_eq!(focus(&ops, None, "W").unwrap(), focused(2));
        assert_eq!(focus(&ops, Some(2), "W").unwrap(), focused(1));
    }

    #[test]
    fn hidden_and_other_desktop_windows_are_skipped() {
        let ops = single();
        ops.set_current_desktop(2);
        ops.set_windows(vec![
            west(1).on_desktop(Some(Desktop::Index(2))),
            west(2).on_desktop(Some(Desktop::Pinned)),
            west(3).on_desktop(Some(Desktop::Index(2))).hidden(),
            west(4).on_desktop(Some(Desktop::Index(0))),
            west(5).on_desktop(None),
        ]);
        assert_eq!(focus(&ops, None, "W").unwrap(), focused(2));
        assert_eq!(focus(&ops, Some(2), "W").unwrap(), focused(1));
    }

    #[test]
    fn big_and_unknown_tokens_match_nothing() {
        let ops = single();
        ops.set_windows(vec![west(1), east(2)]);
        assert_eq!(focus(&ops, None, "BNW").unwrap(), Outcome::Nothing);
        assert_eq!(focus(&ops, None, "Q").unwrap(), Outcome::Nothing);
        assert!(ops.calls().is_empty());
    }

    #[test]
    fn unreadable_window_follows_scan_policy() {
        let ops = single();
        ops.set_windows(vec![west(1), west(2)]);
        ops.break_window(2);
        assert_eq!(focus(&ops, None, "W").unwrap(), focused(1));

        let abort = FocusOptions {
            scan: ScanPolicy::Abort,
            ..FocusOptions::default()
        };
        let err = focus_with(&ops, None, "W", abort).unwrap_err();
        assert!(err.is_per_window());
    }

    #[test]
    fn pointer_selects_head_without_active_window() {
        let ops = MockDeskOps::new(Rect::new(0, 0, 3840, 1080));
        ops.set_monitors(vec![
            Rect::new(0, 0, 1920, 1080),
            Rect::new(1920, 0, 1920, 1080),
        ]);
        ops.set_windows(vec![
            MockWindow::new(1, Rect::new(0, 0, 960, 1080)),
            MockWindow::new(2, Rect::new(1920, 0, 960, 1080)),
        ]);
        ops.set_pointer(Point::new(2500, 500));
        assert_eq!(focus(&ops, None, "W").unwrap(), focused(2));

        ops.set_pointer(Point::new(-50, 5000));
        assert_eq!(focus(&ops, None, "W").unwrap(), focused(1));
    }

    #[test]
    fn margin_keeps_edge_hugging_windows_out() {
        let ops = single();
        // Thin window inside the west half, hugging the split line.
        ops.set_windows(vec![MockWindow::new(1, Rect::new(440, 0, 50, 800))]);
        let bare = FocusOptions {
            margin: 0,
            ..FocusOptions::default()
        };
        assert_eq!(focus_with(&ops, None, "W", bare).unwrap(), focused(1));
        assert_eq!(focus(&ops, None, "W").unwrap(), Outcome::Nothing);
        assert_eq!(ops.calls(), vec!["restack 0x1", "activate 0x1"]);
    }

    #[test]
    fn centre_token_also_finds_big_corner_windows() {
        let ops = single();
        // BNW placement on this head: 70% in the top-left corner.
        ops.set_windows(vec![
            MockWindow::new(1, Rect::new(0, 0, 700, 560)),
            west(2),
        ]);
        assert_eq!(focus(&ops, None, "C").unwrap(), focused(1));
        assert_eq!(focus(&ops, Some(1), "C").unwrap(), focused(1));
    }

    #[test]
    fn activate_failure_is_fatal() {
        let ops = single();
        ops.set_windows(vec![west(1)]);
        ops.set_fail_activate(true);
        assert!(matches!(
            focus(&ops, None, "W"),
            Err(Error::Request { op: "activate", .. })
        ));
        assert!(ops.calls_contains("restack 0x1"));
    }
}
