use groupli::types::Artist;
use groupli::ui::results::*;

// Helper function to create a test artist
fn create_test_artist(id: u32, name: &str, image: &str) -> Artist {
    Artist {
        id,
        image: image.to_string(),
        name: name.to_string(),
        members: vec!["someone".to_string()],
        creation_date: 1990,
        first_album: "01-01-1992".to_string(),
        locations: Vec::new(),
    }
}

fn artists(count: u32) -> Vec<Artist> {
    (1..=count)
        .map(|id| {
            create_test_artist(
                id,
                &format!("artist {}", id),
                &format!("https://example.com/{}.jpg", id),
            )
        })
        .collect()
}

#[test]
fn test_empty_results_render_explicit_empty_state() {
    let presenter = ResultsPresenter::new(3);
    assert!(presenter.is_empty());

    let lines = presenter.render_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(EMPTY_RESULTS_MESSAGE));
}

#[test]
fn test_pending_loads_cover_viewport_plus_margin_once() {
    let mut presenter = ResultsPresenter::new(2);
    presenter.set_results(artists(6));

    // Viewport rows 0..2 plus one margin row
    let due = presenter.take_pending_loads();
    let indices: Vec<usize> = due.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(due[0].1, "https://example.com/1.jpg");

    // Requested cards are never returned again
    assert!(presenter.take_pending_loads().is_empty());
}

#[test]
fn test_scrolling_requests_only_newly_visible_cards() {
    let mut presenter = ResultsPresenter::new(2);
    presenter.set_results(artists(6));
    presenter.take_pending_loads();

    // Moving the selection down two rows scrolls the viewport by one
    presenter.select_next();
    presenter.select_next();

    let due = presenter.take_pending_loads();
    let indices: Vec<usize> = due.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![3]);
}

#[test]
fn test_cards_without_image_url_are_consumed_silently() {
    let mut presenter = ResultsPresenter::new(3);
    presenter.set_results(vec![
        create_test_artist(1, "A", ""),
        create_test_artist(2, "B", "https://example.com/2.jpg"),
    ]);

    let due = presenter.take_pending_loads();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].0, 1);

    // The url-less card does not linger as a placeholder
    assert!(presenter.take_pending_loads().is_empty());
}

#[test]
fn test_image_loaded_updates_requested_card() {
    let mut presenter = ResultsPresenter::new(2);
    presenter.set_results(artists(2));
    presenter.take_pending_loads();

    let epoch = presenter.epoch();
    presenter.image_loaded(epoch, 0, "cover.jpg (12 KB)".to_string());

    assert_eq!(
        presenter.cards()[0].image,
        ImageState::Loaded("cover.jpg (12 KB)".to_string())
    );
}

#[test]
fn test_stale_epoch_completion_is_dropped() {
    let mut presenter = ResultsPresenter::new(2);
    presenter.set_results(artists(2));
    presenter.take_pending_loads();
    let old_epoch = presenter.epoch();

    // A new result set supersedes the in-flight loads
    presenter.set_results(artists(2));
    presenter.take_pending_loads();

    presenter.image_loaded(old_epoch, 0, "stale.jpg".to_string());
    assert_eq!(presenter.cards()[0].image, ImageState::Requested);
}

#[test]
fn test_selection_stays_within_results_and_viewport() {
    let mut presenter = ResultsPresenter::new(2);
    presenter.set_results(artists(3));

    presenter.select_prev();
    assert_eq!(presenter.selected().unwrap().artist.id, 1);

    presenter.select_next();
    presenter.select_next();
    presenter.select_next();
    assert_eq!(presenter.selected().unwrap().artist.id, 3);

    // The viewport followed the selection
    assert_eq!(presenter.visible_range(), 1..3);

    presenter.select_prev();
    presenter.select_prev();
    assert_eq!(presenter.visible_range(), 0..2);
}

#[test]
fn test_set_results_resets_selection_and_scroll() {
    let mut presenter = ResultsPresenter::new(2);
    presenter.set_results(artists(5));
    presenter.select_next();
    presenter.select_next();
    presenter.select_next();

    presenter.set_results(artists(2));
    assert_eq!(presenter.selected().unwrap().artist.id, 1);
    assert_eq!(presenter.visible_range(), 0..2);
    assert_eq!(presenter.len(), 2);
}

#[test]
fn test_render_lines_show_count_footer() {
    let mut presenter = ResultsPresenter::new(2);
    presenter.set_results(artists(5));

    let lines = presenter.render_lines();
    assert!(lines.last().unwrap().contains("2 of 5 artists"));
}
