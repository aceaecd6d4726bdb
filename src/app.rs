use crate::carousel::Carousel;
use crate::catalog::Catalog;
use crate::config;
use crate::queue::{ClipQueue, QueueSink};
use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Minimum horizontal travel before a drag counts as a swipe.
const SWIPE_THRESHOLD_COLS: u16 = 6;

#[derive(Debug, Default)]
pub struct AppStartupOptions {
    pub catalog_path: Option<PathBuf>,
    pub clip_seconds: Option<u16>,
}

pub fn run_with_startup(options: AppStartupOptions) -> Result<()> {
    let config = match &options.catalog_path {
        Some(path) => config::read_config(path)?,
        None => config::load_config()?,
    };

    let raw_entries = if config.videos.is_empty() {
        Catalog::default_entries()
    } else {
        config.videos.clone()
    };
    let catalog = Catalog::build(&raw_entries)?;
    let clip_len = Duration::from_secs(u64::from(
        options.clip_seconds.unwrap_or(config.clip_seconds).max(1),
    ));

    let mut carousel = Carousel::new(catalog);
    carousel.theme = config.theme;
    let mut queue = ClipQueue::new();
    carousel.initialize(&mut queue);

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut swipe = SwipeTracker::default();
    let mut paused = false;
    let mut clip_started = Instant::now();
    let mut paused_elapsed = Duration::ZERO;
    let mut last_index = carousel.current_index;
    let mut last_tick = Instant::now();
    let mut stage = ratatui::prelude::Rect::default();

    let result: Result<()> = loop {
        if !paused && clip_started.elapsed() >= clip_len {
            queue.advance_to_next();
            carousel.process_queue_events(&mut queue);
        }

        if carousel.current_index != last_index {
            last_index = carousel.current_index;
            clip_started = Instant::now();
        }

        if carousel.dirty || last_tick.elapsed() > Duration::from_millis(250) {
            let elapsed = if paused {
                paused_elapsed
            } else {
                clip_started.elapsed()
            };
            let progress = elapsed.as_secs_f64() / clip_len.as_secs_f64();
            terminal.draw(|frame| {
                stage = crate::ui::stage_rect(frame.area());
                crate::ui::draw(frame, &carousel, progress, paused)
            })?;
            carousel.dirty = false;
            last_tick = Instant::now();
        }

        if !event::poll(Duration::from_millis(33))? {
            continue;
        }

        let event = event::read()?;
        if let Event::Mouse(mouse) = event {
            match swipe.on_mouse(mouse, stage) {
                Some(SwipeDirection::Forward) => carousel.advance_forward(&mut queue),
                Some(SwipeDirection::Backward) => carousel.advance_backward(&mut queue),
                None => {}
            }
            continue;
        }

        let Event::Key(key) = event else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break Ok(()),
            KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => {
                carousel.advance_forward(&mut queue);
            }
            KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => {
                carousel.advance_backward(&mut queue);
            }
            KeyCode::Char(' ') => {
                if paused {
                    clip_started = Instant::now().checked_sub(paused_elapsed).unwrap_or_else(Instant::now);
                    carousel.status = String::from("Resumed");
                } else {
                    paused_elapsed = clip_started.elapsed().min(clip_len);
                    carousel.status = String::from("Paused");
                }
                paused = !paused;
                carousel.dirty = true;
            }
            KeyCode::Char('t') => carousel.cycle_theme(),
            _ => {}
        }
    };

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwipeDirection {
    Forward,
    Backward,
}

/// Tracks a press-drag-release cycle and fires at most once per gesture,
/// once horizontal displacement clears the threshold. Presses outside the
/// stage never arm the tracker.
#[derive(Debug, Default)]
struct SwipeTracker {
    origin: Option<u16>,
    fired: bool,
}

impl SwipeTracker {
    fn on_mouse(
        &mut self,
        mouse: MouseEvent,
        stage: ratatui::prelude::Rect,
    ) -> Option<SwipeDirection> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if point_in_rect(mouse.column, mouse.row, stage) {
                    self.origin = Some(mouse.column);
                    self.fired = false;
                }
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let origin = self.origin?;
                if self.fired {
                    return None;
                }
                let moved = i32::from(mouse.column) - i32::from(origin);
                if moved.unsigned_abs() < u32::from(SWIPE_THRESHOLD_COLS) {
                    return None;
                }
                self.fired = true;
                // Dragging left pulls the next clip in, as on a touch screen.
                if moved < 0 {
                    Some(SwipeDirection::Forward)
                } else {
                    Some(SwipeDirection::Backward)
                }
            }
            MouseEventKind::Up(_) => {
                self.origin = None;
                self.fired = false;
                None
            }
            _ => None,
        }
    }
}

fn point_in_rect(x: u16, y: u16, rect: ratatui::prelude::Rect) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::prelude::Rect;

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn stage() -> Rect {
        Rect::new(0, 0, 80, 20)
    }

    #[test]
    fn swipe_fires_once_past_threshold() {
        let mut tracker = SwipeTracker::default();

        let down = tracker.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40), stage());
        assert_eq!(down, None);

        let short = tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 37), stage());
        assert_eq!(short, None);

        let fired = tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30), stage());
        assert_eq!(fired, Some(SwipeDirection::Forward));

        let repeat = tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10), stage());
        assert_eq!(repeat, None);
    }

    #[test]
    fn drag_right_goes_backward() {
        let mut tracker = SwipeTracker::default();
        tracker.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10), stage());
        let fired = tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20), stage());
        assert_eq!(fired, Some(SwipeDirection::Backward));
    }

    #[test]
    fn release_rearms_the_tracker() {
        let mut tracker = SwipeTracker::default();
        tracker.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40), stage());
        tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20), stage());
        tracker.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20), stage());

        tracker.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40), stage());
        let fired = tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 50), stage());
        assert_eq!(fired, Some(SwipeDirection::Backward));
    }

    #[test]
    fn press_outside_stage_never_arms() {
        let mut tracker = SwipeTracker::default();
        let narrow = Rect::new(0, 0, 20, 10);
        tracker.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40), narrow);
        let dragged = tracker.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10), narrow);
        assert_eq!(dragged, None);
    }
}
