#![no_main]

use libfuzzer_sys::fuzz_target;
use reel::carousel::Carousel;
use reel::catalog::Catalog;
use reel::model::RawVideoEntry;
use reel::queue::{ClipQueue, QueueSink};

fuzz_target!(|data: &[u8]| {
    let len = (data.len() % 8).max(1);
    let raw: Vec<RawVideoEntry> = (0..len)
        .map(|idx| RawVideoEntry {
            url: format!("https://cdn.example.com/clip_{idx}.mp4"),
            title: format!("clip_{idx}"),
            description: String::from("desc"),
            cta: String::from("go"),
        })
        .collect();
    let catalog = Catalog::build(&raw).expect("catalog");

    let mut carousel = Carousel::new(catalog);
    let mut queue = ClipQueue::new();
    carousel.initialize(&mut queue);

    for byte in data {
        match byte % 3 {
            0 => carousel.advance_forward(&mut queue),
            1 => carousel.advance_backward(&mut queue),
            _ => {
                queue.advance_to_next();
                carousel.process_queue_events(&mut queue);
            }
        }

        assert!(queue.len() >= 1);
        assert!(carousel.current_index >= 1);
        assert!(carousel.current_index <= len);
    }
});
