use blockfall::core::{GameConfig, GameState, RenderSnapshot};
use blockfall::term::{kind_color, AnchorY, GameView, Viewport};
use blockfall::types::ShapeKind;

fn snapshot(seed: u32) -> RenderSnapshot {
    GameState::new(&GameConfig::default().with_seed(seed))
        .unwrap()
        .snapshot()
}

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot(1);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = snapshot(1);
    snap.board[19 * 10] = ShapeKind::S.color_id();
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    let cell = fb.get(x0, y0).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, kind_color(ShapeKind::S));
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = snapshot(4);
    let active = snap.active.clone().unwrap();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for &(x, y) in &active.cells {
        let px = 1 + (x as u16) * 2;
        let py = 1 + y as u16;
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, kind_color(active.kind));
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot(1);
    snap.lines_cleared = 37;

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));
    assert!(all.contains("LINES"));
    assert!(all.contains("37"));
    assert!(all.contains("quit"));

    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("LINES"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = snapshot(1);
    let running = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!running.contains("GAME OVER"));

    snap.game_over = true;
    snap.active = None;
    let all = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(all.contains("GAME OVER"));
}

#[test]
fn term_view_follows_board_size() {
    let snap = GameState::new(&GameConfig::default().with_size(6, 8))
        .unwrap()
        .snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    assert_eq!(view.frame_size(&snap), (14, 10));

    let fb = view.render(&snap, Viewport::new(14, 10));
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
}

#[test]
fn term_view_survives_board_wider_than_the_terminal_range() {
    let snap = RenderSnapshot {
        cols: 40_000,
        rows: 4,
        board: vec![0; 40_000 * 4],
        ..RenderSnapshot::default()
    };

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    // The well is clamped to the terminal range and starts at the left edge.
    // start_y = (24 - 6) / 2 = 9
    assert_eq!(fb.get(0, 9).unwrap().ch, '┌');
    assert_eq!(fb.get(0, 14).unwrap().ch, '└');
    assert_eq!(fb.get(1, 10).unwrap().ch, '·');
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = snapshot(1);

    // Board frame is 22 rows tall (20 + border).
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = snapshot(1);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
