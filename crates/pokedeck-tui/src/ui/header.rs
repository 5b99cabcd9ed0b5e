use pokedeck_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, card_count: usize, source: &str) {
    let title = Title::from(" Pokedeck v0.1.0 ").alignment(Alignment::Left);

    let line = Line::from(vec![
        Span::styled(format!("{} cards", card_count), theme.ratatui_style(Element::Info)),
        Span::styled(" from ", theme.text_style()),
        Span::styled(source.to_string(), theme.ratatui_style(Element::Accent)),
    ]);

    let header_paragraph = Paragraph::new(line)
        .style(theme.text_style())
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.text_style()),
        );

    frame.render_widget(header_paragraph, area);
}
