#[cfg(test)]
mod tests {
    use crate::*;

    fn dual_ops() -> MockDeskOps {
        let ops = MockDeskOps::new(Rect::new(0, 0, 3840, 1080));
        ops.set_monitors(vec![
            Rect::new(0, 0, 1920, 1080),
            Rect::new(1920, 0, 1920, 1080),
        ]);
        ops
    }

    fn bottom_panel(start_x: u32, end_x: u32, height: u32) -> Strut {
        Strut {
            bottom: height,
            bottom_start_x: start_x,
            bottom_end_x: end_x,
            ..Default::default()
        }
    }

    fn place(ops: &MockDeskOps, token: &str, split: u32) -> Result<Outcome> {
        let heads = Heads::discover(ops, StrutPolicy::default())?;
        PlacementEngine::new(ops, &heads).place_active(&Position::parse(token), split)
    }

    #[test]
    fn west_half_on_second_head() {
        let ops = dual_ops();
        ops.set_windows(vec![
            MockWindow::new(1, Rect::new(0, 1050, 1920, 30)).with_strut(bottom_panel(0, 1919, 30)),
            MockWindow::new(2, Rect::new(2000, 100, 800, 600)),
        ]);
        ops.set_active(Some(2));

        let out = place(&ops, "w", 50).unwrap();
        let rect = Rect::new(1920, 0, 960, 1080);
        assert_eq!(
            out,
            Outcome::Placed {
                window: WindowId::new(2),
                rect
            }
        );
        assert_eq!(
            ops.calls(),
            vec![
                "move_resize 0x2 [x=1920 y=0 w=960 h=1080]".to_string(),
                "restack 0x2".to_string(),
            ]
        );
    }

    #[test]
    fn panel_on_same_head_shrinks_south_half() {
        let ops = dual_ops();
        ops.set_windows(vec![
            MockWindow::new(1, Rect::new(0, 1050, 1920, 30)).with_strut(bottom_panel(0, 1919, 30)),
            MockWindow::new(2, Rect::new(100, 100, 800, 600)),
        ]);
        ops.set_active(Some(2));

        place(&ops, "S", 60).unwrap();
        assert!(ops.calls_contains("move_resize 0x2 [x=0 y=525 w=1920 h=525]"));
    }

    #[test]
    fn top_panel_offsets_origin() {
        let ops = MockDeskOps::new(Rect::new(0, 0, 1000, 830));
        ops.set_windows(vec![
            MockWindow::new(1, Rect::new(0, 0, 1000, 30)).with_strut(Strut {
                top: 30,
                top_start_x: 0,
                top_end_x: 999,
                ..Default::default()
            }),
            MockWindow::new(2, Rect::new(10, 40, 300, 300)),
        ]);
        ops.set_active(Some(2));

        place(&ops, "C", 60).unwrap();
        assert!(ops.calls_contains("move_resize 0x2 [x=150 y=150 w=700 h=560]"));
    }

    #[test]
    fn decorations_are_subtracted() {
        let ops = MockDeskOps::new(Rect::new(0, 0, 1000, 800));
        ops.set_windows(vec![
            MockWindow::new(7, Rect::new(0, 0, 200, 200))
                .with_extents(FrameExtents::new(2, 2, 20, 2)),
        ]);
        ops.set_active(Some(7));

        place(&ops, "W", 50).unwrap();
        assert!(ops.calls_contains("move_resize 0x7 [x=0 y=0 w=496 h=778]"));
    }

    #[test]
    fn oversized_decorations_clamp_to_one_pixel() {
        let ops = MockDeskOps::new(Rect::new(0, 0, 100, 100));
        ops.set_windows(vec![
            MockWindow::new(3, Rect::new(0, 0, 50, 50))
                .with_extents(FrameExtents::new(40, 40, 60, 60)),
        ]);
        ops.set_active(Some(3));

        place(&ops, "NW", 50).unwrap();
        assert!(ops.calls_contains("move_resize 0x3 [x=0 y=0 w=1 h=1]"));
    }

    #[test]
    fn big_corner_and_unknown_token() {
        let ops = MockDeskOps::new(Rect::new(0, 0, 1000, 800));
        ops.set_windows(vec![MockWindow::new(4, Rect::new(0, 0, 200, 200))]);
        ops.set_active(Some(4));

        place(&ops, "BSE", 50).unwrap();
        place(&ops, "nope", 50).unwrap();
        assert!(ops.calls_contains("move_resize 0x4 [x=300 y=240 w=700 h=560]"));
        assert!(ops.calls_contains("move_resize 0x4 [x=0 y=0 w=1000 h=800]"));
    }

    #[test]
    fn explicit_window_is_placed_without_focus() {
        let ops = dual_ops();
        ops.set_windows(vec![MockWindow::new(9, Rect::new(1920, 0, 10, 10))]);
        let heads = Heads::discover(&ops, StrutPolicy::default()).unwrap();
        let out = PlacementEngine::new(&ops, &heads)
            .place_window(WindowId::new(9), &Position::parse("E"), 60)
            .unwrap();
        assert_eq!(
            out,
            Outcome::Placed {
                window: WindowId::new(9),
                rect: Rect::new(3072, 0, 768, 1080)
            }
        );
    }

    #[test]
    fn no_active_window_is_a_no_op() {
        let ops = dual_ops();
        ops.set_windows(vec![MockWindow::new(2, Rect::new(0, 0, 10, 10))]);
        assert_eq!(place(&ops, "W", 50).unwrap(), Outcome::Nothing);
        assert!(ops.calls().is_empty());
    }

    #[test]
    fn invalid_split_issues_nothing() {
        let ops = dual_ops();
        ops.set_windows(vec![MockWindow::new(2, Rect::new(0, 0, 10, 10))]);
        ops.set_active(Some(2));
        assert_eq!(place(&ops, "W", 101), Err(Error::InvalidSplit(101)));
        assert!(ops.calls().is_empty());
    }

    #[test]
    fn failed_move_resize_is_fatal() {
        let ops = dual_ops();
        ops.set_windows(vec![MockWindow::new(2, Rect::new(0, 0, 10, 10))]);
        ops.set_active(Some(2));
        ops.set_fail_move_resize(true);
        assert!(matches!(
            place(&ops, "W", 50),
            Err(Error::Request {
                op: "move_resize",
                ..
            })
        ));
        assert!(!ops.calls_contains("restack 0x2"));
    }

    #[test]
    fn discovery_failure_aborts_before_placing() {
        let ops = dual_ops();
        ops.set_windows(vec![MockWindow::new(2, Rect::new(0, 0, 10, 10))]);
        ops.set_active(Some(2));
        ops.set_fail_discovery(true);
        assert!(matches!(place(&ops, "W", 50), Err(Error::Discovery { .. })));
        assert!(ops.calls().is_empty());
    }

    #[test]
    fn unreadable_strut_is_ignored() {
        let ops = dual_ops();
        ops.set_windows(vec![
            MockWindow::new(1, Rect::new(0, 1050, 1920, 30)).with_strut(bottom_panel(0, 1919, 30)),
            MockWindow::new(2, Rect::new(0, 0, 10, 10)),
        ]);
        ops.break_window(1);
        ops.set_active(Some(2));
        place(&ops, "S", 50).unwrap();
        assert!(ops.calls_contains("move_resize 0x2 [x=0 y=540 w=1920 h=540]"));
    }
}
