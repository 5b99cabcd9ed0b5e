use super::{
    cards::{render_cards, rows_for},
    footer::render_footer,
    header::render_header,
};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pokedeck_core::{
    client::EntitySource,
    deck::Deck,
    error::LoadError,
    loader::load_entities,
    models::EntityRecord,
    settings::Settings,
    theme::{Element, Theme},
};
use ratatui::{
    backend::Backend,
    prelude::{Constraint, Direction, Frame, Layout, Terminal},
    widgets::{Block, Borders},
};
use std::cell::Cell;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

type LoadOutcome = Result<Vec<EntityRecord>, LoadError>;

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    /// Where the `t` key writes the chosen theme.
    config_path: PathBuf,
    source: Arc<dyn EntitySource>,
    deck: Deck,
    scroll: usize,
    /// Width of the card grid at the last draw, for scroll clamping.
    grid_width: Cell<u16>,
    cancel: CancellationToken,
    load_tx: mpsc::Sender<LoadOutcome>,
    load_rx: mpsc::Receiver<LoadOutcome>,
}

impl App {
    pub fn new(
        settings: Settings,
        config_path: impl Into<PathBuf>,
        source: Arc<dyn EntitySource>,
    ) -> Self {
        let theme = Theme::new(settings.theme);
        let (load_tx, load_rx) = mpsc::channel(1);
        Self {
            should_quit: false,
            theme,
            settings,
            config_path: config_path.into(),
            source,
            deck: Deck::new(),
            scroll: 0,
            grid_width: Cell::new(80),
            cancel: CancellationToken::new(),
            load_tx,
            load_rx,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.start_load();
        while !self.should_quit {
            self.drain_loads();
            self.draw(terminal)?;
            self.handle_events()?;
        }
        self.shutdown();
        Ok(())
    }

    /// Spawn the loader unless one is already running.
    fn start_load(&mut self) {
        if self.deck.is_loading() {
            debug!("load already in flight, ignoring");
            return;
        }
        self.deck.begin_load();

        let source = Arc::clone(&self.source);
        let cancel = self.cancel.child_token();
        let tx = self.load_tx.clone();
        tokio::spawn(async move {
            let outcome = load_entities(source.as_ref(), &cancel).await;
            if tx.send(outcome).await.is_err() {
                debug!("app gone before load finished");
            }
        });
    }

    fn drain_loads(&mut self) {
        while let Ok(outcome) = self.load_rx.try_recv() {
            self.deck.apply(outcome);
            self.clamp_scroll();
        }
    }

    fn shutdown(&mut self) {
        self.cancel.cancel();
        info!("cancelled outstanding loads");
    }

    fn clamp_scroll(&mut self) {
        let rows = rows_for(self.deck.records().len(), self.grid_width.get());
        self.scroll = self.scroll.min(rows.saturating_sub(1));
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.size();
        frame.render_widget(
            Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background)),
            area,
        );

        let app_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        self.grid_width.set(app_chunks[1].width);
        let cards = self.deck.cards();
        render_header(
            frame,
            app_chunks[0],
            &self.theme,
            cards.len(),
            &self.settings.api_base_url,
        );
        render_cards(frame, app_chunks[1], &self.theme, &cards, self.scroll);
        render_footer(frame, app_chunks[2], &self.theme, self.deck.status());
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char('r') => self.start_load(),
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.settings.theme = self.theme.variant();
                if let Err(e) = self.settings.persist_theme(&self.config_path) {
                    warn!(error = %e, "failed to persist theme");
                }
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => {
                self.scroll += 1;
                self.clamp_scroll();
            }
            _ => {}
        }
    }
}
