use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: u32 = 2;

/// Largest rectangle with the `width:height` proportions of a preferred size
/// that fits in `area`, centered. Degenerate sizes return `area` unchanged.
pub(crate) fn fit_preferred_size(area: Rect, width: u16, height: u16) -> Rect {
    if width == 0 || height == 0 || area.width == 0 || area.height == 0 {
        return area;
    }

    let (pref_w, pref_h) = (u32::from(width) * CELL_ASPECT, u32::from(height));
    let (area_w, area_h) = (u32::from(area.width), u32::from(area.height));

    let (fit_w, fit_h) = if area_w * pref_h <= area_h * pref_w {
        (area_w, area_w * pref_h / pref_w)
    } else {
        (area_h * pref_w / pref_h, area_h)
    };
    let fit_w = fit_w.clamp(1, area_w) as u16;
    let fit_h = fit_h.clamp(1, area_h) as u16;

    Rect {
        x: area.x + (area.width - fit_w) / 2,
        y: area.y + (area.height - fit_h) / 2,
        width: fit_w,
        height: fit_h,
    }
}

/// Split off a square (in screen terms) region on the left for a round chart,
/// leaving the rest for a legend.
pub(crate) fn split_disc_and_legend(area: Rect) -> (Rect, Rect) {
    let disc_width = area
        .height
        .saturating_mul(CELL_ASPECT as u16)
        .min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(disc_width), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render a command button label, highlighted when it targets the view that is
/// already showing.
pub(crate) fn button(label: &str, key: char, active: bool) -> Span<'static> {
    let text = format!("[ {label} ({key}) ]");
    if active {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(Color::Gray))
    }
}
