use pokedeck_core::{
    card::Card,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Frame, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Grid cell size, including one column/row of spacing.
pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 7;

pub fn columns_for(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// Number of card rows needed for `count` cards at this width.
pub fn rows_for(count: usize, width: u16) -> usize {
    count.div_ceil(columns_for(width))
}

pub fn render_cards(frame: &mut Frame, area: Rect, theme: &Theme, cards: &[Card], scroll: usize) {
    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    if visible_rows == 0 || area.width == 0 {
        return;
    }
    let columns = columns_for(area.width);

    for (index, card) in cards.iter().enumerate().skip(scroll * columns) {
        let row = index / columns - scroll;
        if row >= visible_rows {
            break;
        }
        let col = index % columns;

        let cell = Rect::new(
            area.x + col as u16 * CARD_WIDTH,
            area.y + row as u16 * CARD_HEIGHT,
            CARD_WIDTH - 2,
            CARD_HEIGHT - 1,
        )
        .intersection(area);
        if cell.area() > 0 {
            render_card(frame, cell, theme, card);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, theme: &Theme, card: &Card) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} ", card.title),
            theme.ratatui_style(Element::Title),
        ))
        .style(theme.ratatui_style(Element::Border));

    let inner = block.inner(area);

    let mut badges = Vec::with_capacity(card.badges.len() * 2);
    for badge in &card.badges {
        badges.push(Span::styled(
            format!(" {} ", badge.label),
            theme.badge_style(badge.color),
        ));
        badges.push(Span::styled(" ", theme.card_style()));
    }

    let lines = vec![
        Line::from(Span::styled(
            format!("#{:03}", card.id),
            theme.card_style(),
        )),
        Line::from(Span::styled(
            fit_tail(&card.image_url, inner.width as usize),
            theme.ratatui_style(Element::Inactive),
        )),
        Line::default(),
        Line::from(badges),
    ];

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines).style(theme.card_style()), inner);
}

/// Keep the end of `text` (the file name of a sprite URL is what differs).
fn fit_tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{}", tail)
}
