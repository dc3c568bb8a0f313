use staticd::http::mime::content_type_for;
use std::path::Path;

#[test]
fn test_mime_table() {
    let cases = vec![
        ("index.html", "text/html"),
        ("style.css", "text/css"),
        ("app.js", "application/javascript"),
        ("data.json", "application/json"),
        ("logo.png", "image/png"),
        ("photo.jpg", "image/jpeg"),
        ("photo.jpeg", "image/jpeg"),
    ];

    for (name, expected) in cases {
        assert_eq!(content_type_for(Path::new(name)), expected, "{}", name);
    }
}

#[test]
fn test_mime_match_is_case_sensitive() {
    assert_eq!(content_type_for(Path::new("x.JPG")), "text/plain");
    assert_eq!(content_type_for(Path::new("x.Html")), "text/plain");
}

#[test]
fn test_mime_no_extension_is_plain_text() {
    assert_eq!(content_type_for(Path::new("noext")), "text/plain");
}

#[test]
fn test_mime_unknown_extension_is_plain_text() {
    assert_eq!(content_type_for(Path::new("archive.zip")), "text/plain");
}

#[test]
fn test_mime_uses_last_extension_only() {
    assert_eq!(content_type_for(Path::new("bundle.min.js")), "application/javascript");
    assert_eq!(content_type_for(Path::new("notes.html.bak")), "text/plain");
}

#[test]
fn test_mime_full_path_resolves_by_file_name() {
    assert_eq!(
        content_type_for(Path::new("/srv/www/assets/site.css")),
        "text/css"
    );
}
