use search_toolkit::diagram::{draw_in, DiagramLayout, DiagramSpec, CANVAS_SIZE};
use search_toolkit::Error;
use std::fs;
use tempfile::TempDir;

fn spec(name: &str, base_circles: usize) -> DiagramSpec {
    DiagramSpec {
        base_circle_count: base_circles,
        base_circle_color: "red".to_string(),
        top_circle_color: "green".to_string(),
        line_color: "black".to_string(),
        line_width: 3,
        output_name: name.to_string(),
    }
}

#[test]
fn writes_png_and_creates_directory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("diagrams");
    assert!(!dir.exists());

    let path = draw_in(&dir, &spec("test_structure", 5)).unwrap();

    assert_eq!(path, dir.join("test_structure.png"));
    assert!(fs::metadata(&path).unwrap().len() > 0);

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));

    let layout = DiagramLayout::compute(5);
    let top = layout.top_circle.center;
    assert_eq!(img.get_pixel(top.x as u32, top.y as u32).0, [0, 128, 0]);
    for circle in &layout.base_circles {
        let c = circle.center;
        assert_eq!(img.get_pixel(c.x as u32, c.y as u32).0, [255, 0, 0]);
    }
}

#[test]
fn redrawing_replaces_the_file() {
    let tmp = TempDir::new().unwrap();

    let first = draw_in(tmp.path(), &spec("same", 3)).unwrap();
    let second = draw_in(tmp.path(), &spec("same", 8)).unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn single_base_circle() {
    let tmp = TempDir::new().unwrap();
    let path = draw_in(tmp.path(), &spec("one", 1)).unwrap();
    assert!(path.exists());

    let layout = DiagramLayout::compute(1);
    assert_eq!(layout.base_circles.len(), 1);
    assert_eq!(layout.lines.len(), 1);
}

#[test]
fn unsupported_color_fails_without_writing() {
    let tmp = TempDir::new().unwrap();
    let mut bad = spec("bad", 4);
    bad.line_color = "not-a-colour".to_string();

    let err = draw_in(tmp.path(), &bad).unwrap_err();

    assert!(matches!(err, Error::Render(_)));
    assert!(!tmp.path().join("bad.png").exists());
}

#[test]
fn zero_base_circles_rejected() {
    let tmp = TempDir::new().unwrap();
    let err = draw_in(tmp.path(), &spec("none", 0)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn output_name_with_path_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let inner = tmp.path().join("diagrams");

    let err = draw_in(&inner, &spec("../outside", 3)).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(!tmp.path().join("outside.png").exists());
    assert!(!inner.exists());
}
