use pokedeck_core::{
    deck::LoadStatus,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, status: &LoadStatus) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.text_style());

    let inner_area = footer_block.inner(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner_area);

    let keys = Line::from(vec![
        Span::styled("[R]", theme.ratatui_style(Element::Accent)),
        Span::styled("eload", theme.text_style()),
        Span::raw(" | "),
        Span::styled("[T]", theme.ratatui_style(Element::Accent)),
        Span::styled("heme", theme.text_style()),
        Span::raw(" | "),
        Span::styled("[↑↓]", theme.ratatui_style(Element::Accent)),
        Span::styled(" scroll", theme.text_style()),
        Span::raw(" | "),
        Span::styled("[Q]", theme.ratatui_style(Element::Accent)),
        Span::styled("uit", theme.text_style()),
    ]);

    frame.render_widget(footer_block, area);
    frame.render_widget(
        Paragraph::new(keys).style(theme.text_style()),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(status_line(theme, status))
            .style(theme.text_style())
            .alignment(Alignment::Right),
        columns[1],
    );
}

fn status_line(theme: &Theme, status: &LoadStatus) -> Line<'static> {
    match status {
        LoadStatus::Idle => Line::default(),
        LoadStatus::Loading => Line::from(Span::styled(
            "Loading creatures...",
            theme.ratatui_style(Element::Warning),
        )),
        LoadStatus::Loaded => Line::from(Span::styled("Ready", theme.ratatui_style(Element::Info))),
        LoadStatus::Failed(_) => Line::from(Span::styled(
            "Load failed, press R to retry",
            theme.ratatui_style(Element::Error),
        )),
    }
}
