use reel::carousel::Carousel;
use reel::catalog::Catalog;
use reel::model::RawVideoEntry;
use reel::queue::{ClipQueue, QueueSink};

fn entry(url: &str, title: &str) -> RawVideoEntry {
    RawVideoEntry {
        url: String::from(url),
        title: String::from(title),
        description: String::from("desc"),
        cta: String::from("go"),
    }
}

#[test]
fn full_reel_cycle_from_raw_entries() {
    let catalog = Catalog::build(&[
        entry("https://cdn.example.com/a.mp4", "a"),
        entry("not a url at all", "dropped"),
        entry("https://cdn.example.com/b.mp4", "b"),
        entry("https://cdn.example.com/c.mp4", "c"),
    ])
    .expect("catalog");
    assert_eq!(catalog.len(), 3);

    let mut carousel = Carousel::new(catalog);
    let mut queue = ClipQueue::new();
    carousel.initialize(&mut queue);

    assert_eq!(queue.len(), 3);
    assert_eq!(carousel.current_index, 3);
    assert_eq!(carousel.current_video().expect("video").title, "a");

    // One full lap forward lands back on the first clip with a topped-up
    // queue behind it.
    carousel.advance_forward(&mut queue);
    carousel.advance_forward(&mut queue);
    carousel.advance_forward(&mut queue);
    assert_eq!(carousel.current_index, 3);
    assert_eq!(carousel.current_video().expect("video").title, "a");
    assert_eq!(queue.len(), 3);

    // Stepping back from the first clip wraps to the last.
    carousel.advance_backward(&mut queue);
    assert_eq!(carousel.current_video().expect("video").title, "c");
    assert!(queue.len() >= 1);
}

#[test]
fn config_file_drives_the_carousel() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "videos": [
                {"url": "https://cdn.example.com/one.mp4", "title": "One", "description": "d", "cta": "c"},
                {"url": "https://cdn.example.com/two.mp4", "title": "Two", "description": "d", "cta": "c"}
            ],
            "clip_seconds": 3
        }"#,
    )
    .expect("write");

    let config = reel::config::read_config(&path).expect("read");
    assert_eq!(config.clip_seconds, 3);

    let catalog = Catalog::build(&config.videos).expect("catalog");
    let mut carousel = Carousel::new(catalog);
    let mut queue = ClipQueue::new();
    carousel.initialize(&mut queue);

    assert_eq!(carousel.current_index, 2);
    assert_eq!(carousel.current_video().expect("video").title, "One");
}
