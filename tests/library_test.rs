use tunelift::library::{load_library, normalize, parse_library, playlist_tracks, read_playlist};

// A small library export: three complete tracks, one with a missing Year,
// a "Road Trip" playlist, an empty playlist, and a playlist with a dangling
// track reference.
const LIBRARY_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Tracks</key>
    <dict>
        <key>1001</key>
        <dict>
            <key>Track ID</key><integer>1001</integer>
            <key>Name</key><string>B's Song</string>
            <key>Artist</key><string>A</string>
            <key>Album</key><string>C</string>
            <key>Year</key><integer>1999</integer>
        </dict>
        <key>1002</key>
        <dict>
            <key>Track ID</key><integer>1002</integer>
            <key>Name</key><string>Second Song</string>
            <key>Artist</key><string>Artist Two</string>
            <key>Album</key><string>Album Two</string>
            <key>Year</key><integer>2005</integer>
        </dict>
        <key>1003</key>
        <dict>
            <key>Track ID</key><integer>1003</integer>
            <key>Name</key><string>Yearless</string>
            <key>Artist</key><string>Artist Three</string>
            <key>Album</key><string>Album Three</string>
        </dict>
    </dict>
    <key>Playlists</key>
    <array>
        <dict>
            <key>Name</key><string>Road Trip</string>
            <key>Playlist Items</key>
            <array>
                <dict><key>Track ID</key><integer>1002</integer></dict>
                <dict><key>Track ID</key><integer>1001</integer></dict>
            </array>
        </dict>
        <dict>
            <key>Name</key><string>Empty</string>
            <key>Playlist Items</key>
            <array></array>
        </dict>
        <dict>
            <key>Name</key><string>Broken</string>
            <key>Playlist Items</key>
            <array>
                <dict><key>Track ID</key><integer>9999</integer></dict>
            </array>
        </dict>
    </array>
</dict>
</plist>
"#;

#[test]
fn parses_playlists_and_track_table() {
    let library = parse_library(LIBRARY_XML.as_bytes()).unwrap();
    assert_eq!(library.playlists.len(), 3);
    assert_eq!(library.tracks.len(), 3);
    assert_eq!(library.playlists[0].name, "Road Trip");
    assert_eq!(library.playlists[0].items.len(), 2);
}

#[test]
fn playlist_tracks_preserves_playlist_order() {
    let library = parse_library(LIBRARY_XML.as_bytes()).unwrap();
    let tracks = playlist_tracks(&library, "Road Trip").unwrap().unwrap();
    assert_eq!(tracks.len(), 2);
    // playlist order, not track-table order
    assert_eq!(tracks[0].name.as_deref(), Some("Second Song"));
    assert_eq!(tracks[1].name.as_deref(), Some("B's Song"));
}

#[test]
fn absent_playlist_is_distinguishable_from_empty() {
    let library = parse_library(LIBRARY_XML.as_bytes()).unwrap();
    assert!(playlist_tracks(&library, "No Such Playlist").unwrap().is_none());
    let empty = playlist_tracks(&library, "Empty").unwrap().unwrap();
    assert!(empty.is_empty());
}

#[test]
fn playlist_name_match_is_exact() {
    let library = parse_library(LIBRARY_XML.as_bytes()).unwrap();
    assert!(playlist_tracks(&library, "road trip").unwrap().is_none());
    assert!(playlist_tracks(&library, "Road Trip ").unwrap().is_none());
}

#[test]
fn dangling_track_reference_is_a_data_error() {
    let library = parse_library(LIBRARY_XML.as_bytes()).unwrap();
    let err = playlist_tracks(&library, "Broken").unwrap_err();
    assert!(err.to_string().contains("9999"));
}

#[test]
fn normalize_is_a_lossless_projection() {
    let library = parse_library(LIBRARY_XML.as_bytes()).unwrap();
    let track = &library.tracks["1001"];
    let song = normalize(track).unwrap();
    assert_eq!(song.artist, "A");
    assert_eq!(song.title, "B's Song");
    assert_eq!(song.album, "C");
    assert_eq!(song.year, 1999);
}

#[test]
fn normalize_names_the_missing_field() {
    let library = parse_library(LIBRARY_XML.as_bytes()).unwrap();
    let track = &library.tracks["1003"];
    let err = normalize(track).unwrap_err();
    assert!(err.to_string().contains("Year"));
}

#[test]
fn read_playlist_normalizes_in_order() {
    let path = std::env::temp_dir().join("tunelift_library_test.xml");
    std::fs::write(&path, LIBRARY_XML).unwrap();

    let songs = read_playlist(&path, "Road Trip").unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].title, "Second Song");
    assert_eq!(songs[1].title, "B's Song");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn read_playlist_surfaces_absent_playlist() {
    let path = std::env::temp_dir().join("tunelift_library_absent_test.xml");
    std::fs::write(&path, LIBRARY_XML).unwrap();

    let err = read_playlist(&path, "No Such Playlist").unwrap_err();
    assert!(err.to_string().contains("not found"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_an_error() {
    let err = load_library("/no/such/Library.xml").unwrap_err();
    assert!(err.to_string().contains("/no/such/Library.xml"));
}
