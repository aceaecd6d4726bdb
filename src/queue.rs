use crate::model::VideoDescriptor;
use std::collections::VecDeque;

/// Opaque playable handle, derived 1:1 from a catalog entry's URL. The
/// queue never looks inside it; the URL only resurfaces on the stage panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipItem(String);

impl ClipItem {
    pub fn for_video(video: &VideoDescriptor) -> Self {
        Self(video.url.to_string())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

/// The player-queue collaborator the carousel drives. Items are consumed
/// from the front and appended at the back; any front change latches a
/// position-changed event that the owner drains with
/// [`QueueSink::take_position_changed`].
pub trait QueueSink {
    fn append(&mut self, item: ClipItem);
    fn remove_first(&mut self) -> Option<ClipItem>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn items(&self) -> Vec<ClipItem>;
    fn advance_to_next(&mut self);
    fn take_position_changed(&mut self) -> bool;
}

/// In-process queue standing in for the platform player widget.
#[derive(Debug, Default)]
pub struct ClipQueue {
    items: VecDeque<ClipItem>,
    position_changed: bool,
}

impl ClipQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ClipItem> {
        self.items.front()
    }
}

impl QueueSink for ClipQueue {
    fn append(&mut self, item: ClipItem) {
        self.items.push_back(item);
    }

    fn remove_first(&mut self) -> Option<ClipItem> {
        let removed = self.items.pop_front();
        if removed.is_some() {
            self.position_changed = true;
        }
        removed
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn items(&self) -> Vec<ClipItem> {
        self.items.iter().cloned().collect()
    }

    // Promotion proceeds even on the last item; an empty queue is the
    // carousel's problem to repair, not ours.
    fn advance_to_next(&mut self) {
        if self.items.pop_front().is_some() {
            self.position_changed = true;
        }
    }

    fn take_position_changed(&mut self) -> bool {
        std::mem::take(&mut self.position_changed)
    }
}
