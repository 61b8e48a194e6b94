use groupli::types::Artist;
use groupli::ui::filters::*;

// Helper function to create a test artist
fn create_test_artist(
    id: u32,
    name: &str,
    creation_date: i32,
    first_album: &str,
    member_count: usize,
    locations: &[&str],
) -> Artist {
    Artist {
        id,
        image: format!("https://example.com/{}.jpg", id),
        name: name.to_string(),
        members: (0..member_count).map(|i| format!("member {}", i)).collect(),
        creation_date,
        first_album: first_album.to_string(),
        locations: locations.iter().map(|l| l.to_string()).collect(),
    }
}

#[test]
fn test_derive_year_bounds() {
    let artists = vec![
        create_test_artist(1, "A", 1990, "01-01-1992", 3, &["London-UK"]),
        create_test_artist(2, "B", 2005, "01-01-2010", 4, &["Paris-France"]),
        create_test_artist(3, "C", 1998, "01-01-2001", 2, &["london-uk"]),
    ];

    let ranges = FilterRanges::derive(&artists).unwrap();
    assert_eq!(ranges.creation_years, (1990, 2005));
    assert_eq!(ranges.first_album_years, (1992, 2010));
}

#[test]
fn test_derive_empty_dataset_yields_none() {
    assert_eq!(FilterRanges::derive(&[]), None);
}

#[test]
fn test_derive_member_counts_run_from_one() {
    let artists = vec![
        create_test_artist(1, "A", 1990, "01-01-1992", 5, &[]),
        create_test_artist(2, "B", 1991, "01-01-1993", 2, &[]),
    ];

    let ranges = FilterRanges::derive(&artists).unwrap();
    // Options cover 1 through the largest observed line-up, not just the
    // counts that actually occur
    assert_eq!(ranges.member_counts, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_derive_cities_normalized() {
    let artists = vec![
        create_test_artist(1, "A", 1990, "01-01-1992", 1, &["Paris-France", "London-UK"]),
        create_test_artist(2, "B", 1991, "01-01-1993", 1, &["london-uk", "Berlin-Germany"]),
    ];

    let ranges = FilterRanges::derive(&artists).unwrap();
    assert_eq!(
        ranges.cities,
        vec![
            "Berlin".to_string(),
            "London".to_string(),
            "Paris".to_string()
        ]
    );
}

#[test]
fn test_derive_album_years_fall_back_to_creation_bounds() {
    let artists = vec![
        create_test_artist(1, "A", 1990, "unknown", 1, &[]),
        create_test_artist(2, "B", 2000, "also unknown", 1, &[]),
    ];

    let ranges = FilterRanges::derive(&artists).unwrap();
    assert_eq!(ranges.first_album_years, (1990, 2000));
}

#[test]
fn test_default_criteria_is_unconstrained() {
    let artists = vec![
        create_test_artist(1, "A", 1990, "01-01-1992", 3, &["London-UK"]),
        create_test_artist(2, "B", 2005, "01-01-2010", 4, &["Paris-France"]),
    ];

    let ranges = FilterRanges::derive(&artists).unwrap();
    let criteria = ranges.default_criteria();

    // Full year windows, empty member and location sets
    assert_eq!(criteria.creation_year_min, 1990);
    assert_eq!(criteria.creation_year_max, 2005);
    assert_eq!(criteria.first_album_year_min, 1992);
    assert_eq!(criteria.first_album_year_max, 2010);
    assert!(criteria.members.is_empty());
    assert!(criteria.locations.is_empty());
}

#[test]
fn test_adjust_creation_min_clamps_to_bounds() {
    let artists = vec![
        create_test_artist(1, "A", 1990, "01-01-1992", 1, &[]),
        create_test_artist(2, "B", 2000, "01-01-2005", 1, &[]),
    ];
    let ranges = FilterRanges::derive(&artists).unwrap();
    let mut criteria = ranges.default_criteria();

    adjust_creation_min(&mut criteria, &ranges, 5);
    assert_eq!(criteria.creation_year_min, 1995);

    // Stepping past the upper bound clamps
    adjust_creation_min(&mut criteria, &ranges, 100);
    assert_eq!(criteria.creation_year_min, 2000);

    // Stepping below the lower bound clamps too
    adjust_creation_min(&mut criteria, &ranges, -100);
    assert_eq!(criteria.creation_year_min, 1990);
}

#[test]
fn test_adjust_creation_min_never_crosses_current_max() {
    let artists = vec![
        create_test_artist(1, "A", 1990, "01-01-1992", 1, &[]),
        create_test_artist(2, "B", 2000, "01-01-2005", 1, &[]),
    ];
    let ranges = FilterRanges::derive(&artists).unwrap();
    let mut criteria = ranges.default_criteria();
    criteria.creation_year_max = 1995;

    adjust_creation_min(&mut criteria, &ranges, 100);
    assert_eq!(criteria.creation_year_min, 1995);
}

#[test]
fn test_adjust_album_min_clamps_to_bounds() {
    let artists = vec![
        create_test_artist(1, "A", 1990, "01-01-1992", 1, &[]),
        create_test_artist(2, "B", 2000, "01-01-2005", 1, &[]),
    ];
    let ranges = FilterRanges::derive(&artists).unwrap();
    let mut criteria = ranges.default_criteria();

    adjust_album_min(&mut criteria, &ranges, 3);
    assert_eq!(criteria.first_album_year_min, 1995);

    adjust_album_min(&mut criteria, &ranges, 100);
    assert_eq!(criteria.first_album_year_min, 2005);
}

#[test]
fn test_intersect_years_overlapping_window() {
    assert_eq!(intersect_years((1990, 2005), (1995, 2010)), (1995, 2005));
    assert_eq!(intersect_years((1990, 2005), (1980, 1992)), (1990, 1992));
    assert_eq!(intersect_years((1990, 2005), (1995, 1998)), (1995, 1998));
}

#[test]
fn test_intersect_years_disjoint_window_collapses_to_nearest_bound() {
    // A window entirely above the derived range must not invert the interval
    assert_eq!(intersect_years((1990, 2005), (2010, 2020)), (2005, 2005));
    // Entirely below collapses to the lower bound
    assert_eq!(intersect_years((1990, 2005), (1970, 1980)), (1990, 1990));
}

#[test]
fn test_intersect_years_keeps_min_le_max() {
    let windows = [(2010, 2020), (1970, 1980), (1995, 1998), (1990, 2005), (2005, 2005)];
    for window in windows {
        let (min, max) = intersect_years((1990, 2005), window);
        assert!(min <= max, "inverted interval for window {:?}", window);
    }
}

#[test]
fn test_toggle_member_roundtrip() {
    let artists = vec![create_test_artist(1, "A", 1990, "01-01-1992", 4, &[])];
    let ranges = FilterRanges::derive(&artists).unwrap();
    let mut criteria = ranges.default_criteria();

    toggle_member(&mut criteria, &ranges, 3);
    assert_eq!(criteria.members, vec![3]);

    toggle_member(&mut criteria, &ranges, 3);
    assert!(criteria.members.is_empty());
}

#[test]
fn test_toggle_member_outside_option_set_is_ignored() {
    let artists = vec![create_test_artist(1, "A", 1990, "01-01-1992", 2, &[])];
    let ranges = FilterRanges::derive(&artists).unwrap();
    let mut criteria = ranges.default_criteria();

    toggle_member(&mut criteria, &ranges, 9);
    assert!(criteria.members.is_empty());
}

#[test]
fn test_toggle_location_case_insensitive() {
    let artists = vec![create_test_artist(1, "A", 1990, "01-01-1992", 1, &["London-UK"])];
    let ranges = FilterRanges::derive(&artists).unwrap();
    let mut criteria = ranges.default_criteria();

    toggle_location(&mut criteria, "London");
    assert_eq!(criteria.locations, vec!["London".to_string()]);

    // A different casing toggles the same entry off
    toggle_location(&mut criteria, "LONDON");
    assert!(criteria.locations.is_empty());

    // Blank input has no effect
    toggle_location(&mut criteria, "   ");
    assert!(criteria.locations.is_empty());
}
