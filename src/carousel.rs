use crate::catalog::Catalog;
use crate::model::{Theme, VideoDescriptor};
use crate::queue::{ClipItem, QueueSink};
use anyhow::Result;

/// Drives the looping clip queue. The catalog repeats cyclically: the queue
/// is topped up with a full catalog cycle whenever it runs down to its last
/// item, so it never drains. `current_index` is the count of items still in
/// the queue at the last front change; it doubles as the reverse catalog
/// lookup key and the highlighted page-indicator slot.
#[derive(Debug)]
pub struct Carousel {
    catalog: Catalog,
    pub current_index: usize,
    pub theme: Theme,
    pub dirty: bool,
    pub status: String,
    advancing: bool,
}

impl Carousel {
    pub fn new(catalog: Catalog) -> Self {
        let current_index = catalog.len();
        Self {
            catalog,
            current_index,
            theme: Theme::default(),
            dirty: true,
            status: String::from("Ready"),
            advancing: false,
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.set_status(&format!("Theme: {:?}", self.theme));
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Fills the queue with one full catalog cycle and publishes the
    /// starting index, which equals the freshly filled queue length.
    pub fn initialize(&mut self, queue: &mut dyn QueueSink) {
        self.append_full_cycle(queue);
        self.current_index = queue.len();
        self.dirty = true;
    }

    /// Skip to the next clip: drop the front item and promote its successor.
    pub fn advance_forward(&mut self, queue: &mut dyn QueueSink) {
        if self.advancing {
            return;
        }
        self.advancing = true;
        queue.advance_to_next();
        self.process_queue_events(queue);
        self.set_status("Skipped forward");
        self.advancing = false;
    }

    /// Go to the previous clip using forward-queue primitives only: drop
    /// `catalog.len() - 1` items from the front, which lands one step back
    /// in cyclic order. Before each removal the queue is topped up if it is
    /// down to its last item, so it never empties mid-walk.
    pub fn advance_backward(&mut self, queue: &mut dyn QueueSink) {
        if self.advancing {
            return;
        }
        self.advancing = true;
        let hops = self.catalog.len().saturating_sub(1);
        for _ in 0..hops {
            if queue.len() == 1 {
                self.append_full_cycle(queue);
            }
            queue.remove_first();
        }
        self.process_queue_events(queue);
        self.set_status("Went back");
        self.advancing = false;
    }

    /// Drains the queue's latched position-changed event. Returns true when
    /// the published index moved, so the caller knows to redraw.
    pub fn process_queue_events(&mut self, queue: &mut dyn QueueSink) -> bool {
        if !queue.take_position_changed() {
            return false;
        }
        self.on_position_changed(queue);
        true
    }

    // Remaining count is captured before replenishment; the published index
    // is 1 at the wrap point, not 1 + catalog length.
    fn on_position_changed(&mut self, queue: &mut dyn QueueSink) {
        let remaining = queue.len();
        if remaining <= 1 {
            self.append_full_cycle(queue);
            self.set_status("Looped back to the top");
        }
        self.current_index = remaining.max(1);
        self.dirty = true;
    }

    fn append_full_cycle(&self, queue: &mut dyn QueueSink) {
        for video in self.catalog.entries() {
            queue.append(ClipItem::for_video(video));
        }
    }

    /// The clip the overlay should describe right now.
    pub fn current_video(&self) -> Result<&VideoDescriptor> {
        self.catalog.lookup(self.current_index)
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
        self.dirty = true;
    }
}
