use memory_match::core::{CardId, CardSnapshot, DeckBuilder, DeckSnapshot, MatchEngine, TOKEN_POOL};
use memory_match::term::board_view::{KEY_HINTS, RESET_LABEL, TITLE, WIN_BANNER};
use memory_match::term::{encode_diff_into, AnchorY, BoardView, FrameBuffer, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn deck(pairs: usize) -> DeckSnapshot {
    MatchEngine::with_builder(DeckBuilder::new(&TOKEN_POOL, 9), pairs, 800, 1000)
        .unwrap()
        .snapshot()
}

#[test]
fn board_shows_title_button_and_hints() {
    let view = BoardView::default();
    let fb = view.render(&deck(8), Some(0), Viewport::new(80, 24));
    let text = screen_text(&fb);

    assert!(text.contains(TITLE));
    assert!(text.contains(RESET_LABEL));
    assert!(text.contains(KEY_HINTS));
    assert!(text.contains("PAIRS 8"));
    assert!(text.contains("FOUND 0"));
    assert!(!text.contains(WIN_BANNER));
}

#[test]
fn hidden_deck_shows_no_faces() {
    let view = BoardView::default();
    let snap = deck(8);
    let text = screen_text(&view.render(&snap, None, Viewport::new(80, 24)));
    for card in snap.iter() {
        assert!(!text.contains(card.content));
    }
}

#[test]
fn four_by_four_grid_layout() {
    let view = BoardView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(80, 24);
    let (x0, y0) = view.tile_origin(16, vp, 0);
    let (x3, _) = view.tile_origin(16, vp, 3);
    let (_, y12) = view.tile_origin(16, vp, 12);
    assert_eq!(x3 - x0, 21);
    assert_eq!(y12 - y0, 9);

    let fb = view.render(&deck(8), None, vp);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '┌');
    assert_eq!(fb.get(x3 + 5, y12 + 2).unwrap().ch, '┘');
}

#[test]
fn matched_cards_leave_blank_slots_and_win_banner_shows() {
    let cards = ["🐶", "🐶"]
        .iter()
        .enumerate()
        .map(|(i, &content)| CardSnapshot {
            id: CardId(i as u32),
            content,
            face_up: true,
            matched: true,
            match_animating: false,
        })
        .collect();
    let snap = DeckSnapshot { cards };
    let view = BoardView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(40, 12);
    let fb = view.render(&snap, None, vp);

    let (x, y) = view.tile_origin(2, vp, 1);
    assert_eq!(fb.get(x, y).unwrap().ch, ' ');
    let text = screen_text(&fb);
    assert!(text.contains(WIN_BANNER));
    assert!(text.contains("FOUND 1"));
    assert!(!text.contains('🐶'));
}

#[test]
fn flipping_one_card_only_redraws_that_tile() {
    let view = BoardView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = deck(8);
    let before = view.render(&snap, None, vp);
    snap.cards[5].face_up = true;
    let after = view.render(&snap, None, vp);

    let mut unchanged = Vec::new();
    encode_diff_into(&before, &before, &mut unchanged).unwrap();
    let mut changed = Vec::new();
    encode_diff_into(&before, &after, &mut changed).unwrap();
    assert!(changed.len() > unchanged.len());

    let text = String::from_utf8(changed).unwrap();
    assert!(text.contains(snap.cards[5].content));
}
