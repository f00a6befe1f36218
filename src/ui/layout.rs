use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥90 cols: cards side by side, summary below
    Narrow, // <90 cols: cards stacked
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }
}

pub struct BoardLayout {
    pub header: Rect,
    pub cards: [Rect; 3],
    pub summary: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl BoardLayout {
    pub const SUMMARY_HEIGHT: u16 = 5;
    pub const MIN_CARDS_HEIGHT: u16 = 6;

    /// `footer_height` is the number of hint or status rows wanted. It is
    /// capped so the header, cards and summary keep their minimum rows.
    pub fn new(area: Rect, footer_height: u16) -> Self {
        let tier = LayoutTier::from_area(area);
        let footer_room = area
            .height
            .saturating_sub(1 + Self::MIN_CARDS_HEIGHT + Self::SUMMARY_HEIGHT);
        let footer_height = footer_height.min(footer_room).max(1);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(Self::MIN_CARDS_HEIGHT),
                Constraint::Length(Self::SUMMARY_HEIGHT),
                Constraint::Length(footer_height),
            ])
            .split(area);

        let direction = match tier {
            LayoutTier::Wide => Direction::Horizontal,
            LayoutTier::Narrow => Direction::Vertical,
        };
        let cards = Layout::default()
            .direction(direction)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            cards: [cards[0], cards[1], cards[2]],
            summary: vertical[2],
            footer: vertical[3],
            tier,
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
        }
        has_hint = true;
    }

    if has_hint {
        out.push(current);
    }
    out
}

/// Popup rectangle centered in `area`, at least `min_w` x `min_h` when
/// the area allows it.
pub fn centered_rect(percent_x: u16, percent_y: u16, min_w: u16, min_h: u16, area: Rect) -> Rect {
    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(min_w).min(area.width);
    let target_h = requested_h.max(min_h).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
