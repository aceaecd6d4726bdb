use crate::carousel::Carousel;
use crate::model::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

const APP_TITLE: &str = "ReelTUI v0.1.0  ";

#[derive(Clone, Copy)]
struct ThemePalette {
    bg: Color,
    panel_bg: Color,
    border: Color,
    text: Color,
    muted: Color,
    accent: Color,
    cta_bg: Color,
    indicator_off: Color,
}

fn palette(theme: Theme) -> ThemePalette {
    match theme {
        Theme::Dark => ThemePalette {
            bg: Color::Rgb(10, 15, 24),
            panel_bg: Color::Rgb(19, 29, 43),
            border: Color::Rgb(69, 121, 176),
            text: Color::Rgb(214, 228, 248),
            muted: Color::Rgb(149, 173, 204),
            accent: Color::Rgb(100, 203, 184),
            cta_bg: Color::Rgb(34, 55, 82),
            indicator_off: Color::Rgb(45, 62, 88),
        },
        Theme::PitchBlack => ThemePalette {
            bg: Color::Rgb(0, 0, 0),
            panel_bg: Color::Rgb(8, 8, 8),
            border: Color::Rgb(74, 74, 74),
            text: Color::Rgb(242, 242, 242),
            muted: Color::Rgb(150, 150, 150),
            accent: Color::Rgb(212, 212, 212),
            cta_bg: Color::Rgb(26, 26, 26),
            indicator_off: Color::Rgb(52, 52, 52),
        },
        Theme::Sunset => ThemePalette {
            bg: Color::Rgb(28, 14, 24),
            panel_bg: Color::Rgb(45, 22, 36),
            border: Color::Rgb(222, 120, 97),
            text: Color::Rgb(252, 229, 216),
            muted: Color::Rgb(199, 148, 146),
            accent: Color::Rgb(255, 170, 96),
            cta_bg: Color::Rgb(74, 34, 50),
            indicator_off: Color::Rgb(84, 48, 62),
        },
    }
}

/// Region the swipe gestures apply to, for mouse hit testing.
pub fn stage_rect(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    vertical[1]
}

pub fn draw(frame: &mut Frame, carousel: &Carousel, clip_progress: f64, paused: bool) {
    let colors = palette(carousel.theme);
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg)),
        frame.area(),
    );

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, vertical[0], carousel, colors);
    draw_stage(frame, vertical[1], carousel, colors);
    draw_progress(frame, vertical[2], clip_progress, paused, colors);
    draw_footer(frame, vertical[3], carousel, colors);
}

fn draw_header(frame: &mut Frame, area: Rect, carousel: &Carousel, colors: ThemePalette) {
    let position = format!(
        "clip {} of {}",
        carousel.catalog().len() + 1 - carousel.current_index,
        carousel.catalog().len()
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default().fg(colors.accent).bold(),
        ),
        Span::styled(position, Style::default().fg(colors.muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.panel_bg)),
    );
    frame.render_widget(header, area);
}

fn draw_stage(frame: &mut Frame, area: Rect, carousel: &Carousel, colors: ThemePalette) {
    let stage = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.panel_bg))
        .title(Span::styled(" Now Playing ", Style::default().fg(colors.muted)));
    let inner = stage.inner(area);
    frame.render_widget(stage, area);

    let Ok(video) = carousel.current_video() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    // Stand-in for the player surface; the real frames are platform-owned.
    let surface = Paragraph::new(Line::from(Span::styled(
        video.url.as_str(),
        Style::default().fg(colors.muted).italic(),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(surface, rows[0]);

    let title = Paragraph::new(Span::styled(
        video.title.clone(),
        Style::default().fg(colors.text).bold(),
    ));
    frame.render_widget(title, rows[1]);

    let description = Paragraph::new(Span::styled(
        video.description.clone(),
        Style::default().fg(colors.muted),
    ));
    frame.render_widget(description, rows[2]);

    draw_cta(frame, rows[3], &video.cta, colors);
    frame.render_widget(
        indicator_line(
            carousel.catalog().len(),
            carousel.current_index,
            colors,
        ),
        rows[4],
    );
}

fn draw_cta(frame: &mut Frame, area: Rect, cta: &str, colors: ThemePalette) {
    let width = (cta.chars().count() as u16 + 4).min(area.width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width), Constraint::Min(0)])
        .split(area);

    let button = Paragraph::new(Span::styled(
        cta.to_string(),
        Style::default().fg(colors.text).bold(),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.accent))
            .style(Style::default().bg(colors.cta_bg)),
    );
    frame.render_widget(button, columns[0]);
}

/// The page indicator: one segment per catalog entry, highlighting segment
/// `len - current_index + 1` so the bar fills left to right as the reel
/// plays through.
fn indicator_line(catalog_len: usize, current_index: usize, colors: ThemePalette) -> Paragraph<'static> {
    let highlighted = catalog_len + 1 - current_index.clamp(1, catalog_len);
    let mut spans = Vec::with_capacity(catalog_len * 2);
    for segment in 1..=catalog_len {
        let color = if segment == highlighted {
            colors.accent
        } else {
            colors.indicator_off
        };
        spans.push(Span::styled("▰▰▰▰▰", Style::default().fg(color)));
        if segment != catalog_len {
            spans.push(Span::raw(" "));
        }
    }
    Paragraph::new(Line::from(spans))
}

fn draw_progress(frame: &mut Frame, area: Rect, clip_progress: f64, paused: bool, colors: ThemePalette) {
    let label = if paused { "paused" } else { "playing" };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.panel_bg)),
        )
        .gauge_style(Style::default().fg(colors.accent).bg(colors.cta_bg))
        .ratio(clip_progress.clamp(0.0, 1.0))
        .label(Span::styled(label.to_string(), Style::default().fg(colors.text)));
    frame.render_widget(gauge, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, carousel: &Carousel, colors: ThemePalette) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            "←/→ or drag: navigate  space: pause  t: theme  q: quit   ",
            Style::default().fg(colors.muted),
        ),
        Span::styled(carousel.status.clone(), Style::default().fg(colors.accent)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.panel_bg)),
    );
    frame.render_widget(footer, area);
}
