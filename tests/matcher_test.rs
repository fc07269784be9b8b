mod common;

use common::{FakeCatalog, song};
use tunelift::matcher::{fallback_query, match_track, match_tracks, primary_query};

#[test]
fn primary_query_carries_all_four_filters() {
    let song = song("A", "B's Song", "C", 1999);
    assert_eq!(primary_query(&song), "artist:A track:Bs Song album:C year:1999");
}

#[test]
fn fallback_query_drops_album_and_year() {
    let song = song("A", "B's Song", "C", 1999);
    assert_eq!(fallback_query(&song), "artist:A track:Bs Song");
}

#[test]
fn apostrophes_are_stripped_from_title_only() {
    let song = song("O'Brien", "Don't Stop", "Can't Buy a Thrill", 1972);
    assert_eq!(
        primary_query(&song),
        "artist:O'Brien track:Dont Stop album:Can't Buy a Thrill year:1972"
    );
    assert_eq!(fallback_query(&song), "artist:O'Brien track:Dont Stop");
}

#[tokio::test]
async fn primary_hit_wins_without_fallback() {
    let song = song("A", "B's Song", "C", 1999);
    let mut catalog =
        FakeCatalog::new().with_hit("artist:A track:Bs Song album:C year:1999", "spotify:track:1");

    let uri = match_track(&mut catalog, &song).await.unwrap();
    assert_eq!(uri.as_deref(), Some("spotify:track:1"));
    assert_eq!(catalog.searches.len(), 1);
}

#[tokio::test]
async fn fallback_is_tried_when_primary_misses() {
    let song = song("A", "B's Song", "C", 1999);
    let mut catalog = FakeCatalog::new().with_hit("artist:A track:Bs Song", "spotify:track:2");

    let uri = match_track(&mut catalog, &song).await.unwrap();
    assert_eq!(uri.as_deref(), Some("spotify:track:2"));
    assert_eq!(
        catalog.searches,
        vec![
            "artist:A track:Bs Song album:C year:1999".to_string(),
            "artist:A track:Bs Song".to_string(),
        ]
    );
}

#[tokio::test]
async fn no_hit_on_either_tier_yields_none() {
    let song = song("A", "B's Song", "C", 1999);
    let mut catalog = FakeCatalog::new();

    let uri = match_track(&mut catalog, &song).await.unwrap();
    assert!(uri.is_none());
    assert_eq!(catalog.searches.len(), 2);
}

#[tokio::test]
async fn partition_is_total_and_order_preserving() {
    let songs = vec![
        song("One", "First", "Alpha", 2001),
        song("Two", "Second", "Beta", 2002),
        song("Three", "Third", "Gamma", 2003),
        song("Four", "Fourth", "Delta", 2004),
    ];
    let mut catalog = FakeCatalog::new()
        .with_hit("artist:One track:First album:Alpha year:2001", "uri:1")
        // Second only matches via fallback
        .with_hit("artist:Two track:Second", "uri:2")
        .with_hit("artist:Four track:Fourth album:Delta year:2004", "uri:4");

    let partition = match_tracks(&mut catalog, &songs).await.unwrap();

    assert_eq!(partition.matched.len() + partition.unmatched.len(), songs.len());
    assert_eq!(partition.matched, vec!["uri:1", "uri:2", "uri:4"]);
    assert_eq!(partition.unmatched, vec![songs[2].clone()]);
}

#[tokio::test]
async fn empty_input_yields_empty_partition() {
    let mut catalog = FakeCatalog::new();
    let partition = match_tracks(&mut catalog, &[]).await.unwrap();
    assert!(partition.matched.is_empty());
    assert!(partition.unmatched.is_empty());
    assert!(catalog.searches.is_empty());
}
