use super::*;

use std::time::{SystemTime, UNIX_EPOCH};

fn temp_root(label: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    std::env::temp_dir().join(format!("flexiui_{label}_{suffix}"))
}

#[test]
fn preview_surface_creates_parent_and_replaces_document() {
    let root = temp_root("preview");
    let mut surface = FilePreviewSurface::new(root.join("cache").join("preview.html"));

    surface.load_document("<p>first</p>").expect("first load");
    surface.load_document("<p>second</p>").expect("second load");

    let written = fs::read_to_string(surface.path()).expect("read preview");
    assert_eq!(written, "<p>second</p>");

    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn download_sink_writes_named_file() {
    let root = temp_root("download");
    let mut sink = DirectoryDownloadSink::new(&root);
    let download = Download {
        filename: "flexiui-component.html".into(),
        mime_type: "text/html",
        contents: b"<!DOCTYPE html>".to_vec(),
    };

    sink.deliver(&download).expect("deliver");

    let written = fs::read(sink.path_for("flexiui-component.html")).expect("read download");
    assert_eq!(written, b"<!DOCTYPE html>");

    fs::remove_dir_all(root).expect("cleanup");
}
