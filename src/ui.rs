use anyhow::Result;
use creditwise::{
    bank_options, category_options, format, project, resolve_reference, state, update, Card,
    CardId, CatalogEvent, CatalogState, CatalogView, Comparison, IncomeRange, SelectionPolicy,
    ToggleOutcome, MAX_SELECTED,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;

/// Fee ceilings offered on the Filters page; `None` = no ceiling
const FEE_CEILINGS: [Option<u64>; 5] = [None, Some(500), Some(1000), Some(5000), Some(12000)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Filters,
    Compare,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Catalog => Page::Filters,
            Page::Filters => Page::Compare,
            Page::Compare => Page::Catalog,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Catalog => Page::Compare,
            Page::Filters => Page::Catalog,
            Page::Compare => Page::Filters,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Catalog => "Cards",
            Page::Filters => "Filters",
            Page::Compare => "Compare",
        }
    }
}

/// One toggleable line on the Filters page
#[derive(Debug, Clone, PartialEq)]
pub enum FilterRow {
    Bank(String),
    Category(String),
    Income(IncomeRange),
    FeeCeiling(Option<u64>),
}

pub struct App {
    pub catalog: CatalogState,
    pub view: CatalogView,
    pub state: TableState,
    pub filter_rows: Vec<FilterRow>,
    pub filter_state: TableState,
    pub current_page: Page,
    pub show_detail: bool,
    pub search_mode: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(cards: Vec<Card>, policy: SelectionPolicy) -> Self {
        let filter_rows = build_filter_rows(&cards);
        let catalog = CatalogState::new(cards, policy);
        let view = project(&catalog);

        let mut state = TableState::default();
        if !view.filtered.is_empty() {
            state.select(Some(0));
        }

        let mut filter_state = TableState::default();
        filter_state.select(Some(0));

        Self {
            catalog,
            view,
            state,
            filter_rows,
            filter_state,
            current_page: Page::Catalog,
            show_detail: false,
            search_mode: false,
            status_message: None,
        }
    }

    /// Run one event through the update cycle and re-project
    pub fn dispatch(&mut self, event: CatalogEvent) {
        self.catalog = update(&self.catalog, event);
        self.status_message = None;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = project(&self.catalog);

        let len = self.view.filtered.len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            _ => {}
        }
    }

    pub fn highlighted_card(&self) -> Option<&Card> {
        self.state.selected().and_then(|i| self.view.filtered.get(i))
    }

    pub fn toggle_highlighted(&mut self) {
        let Some(id) = self.highlighted_card().map(|c| c.id) else {
            return;
        };
        self.toggle_card(id);
    }

    pub fn toggle_card(&mut self, id: CardId) {
        let (next, outcome) = state::toggle(&self.catalog, id);
        self.catalog = next;
        self.status_message = match outcome {
            ToggleOutcome::Evicted { evicted } => self
                .catalog
                .card(evicted)
                .map(|c| format!("Replaced {} {} (max {} cards)", c.bank, c.name, MAX_SELECTED)),
            _ => None,
        };
        self.refresh();
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn start_search(&mut self) {
        self.search_mode = true;
        self.current_page = Page::Catalog;
    }

    pub fn search_input(&mut self, key: KeyCode) {
        let mut text = self.catalog.criteria.search_text.clone();
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                self.search_mode = false;
                return;
            }
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => text.push(c),
            _ => return,
        }
        self.dispatch(CatalogEvent::SetSearch { text });
    }

    /// Space on the Filters page
    pub fn toggle_filter_row(&mut self) {
        let Some(row) = self.filter_state.selected().and_then(|i| self.filter_rows.get(i)).cloned() else {
            return;
        };

        let event = match row {
            FilterRow::Bank(bank) => CatalogEvent::ToggleBank { bank },
            FilterRow::Category(category) => CatalogEvent::ToggleCategory { category },
            FilterRow::Income(range) => CatalogEvent::SetIncomeRange { range },
            FilterRow::FeeCeiling(ceiling) => CatalogEvent::SetFeeRange {
                low: self.catalog.criteria.fee_range.low,
                high: ceiling.unwrap_or(u64::MAX),
            },
        };
        self.dispatch(event);
    }

    pub fn is_filter_row_active(&self, row: &FilterRow) -> bool {
        let criteria = &self.catalog.criteria;
        match row {
            FilterRow::Bank(bank) => criteria.banks.contains(bank),
            FilterRow::Category(category) => criteria.categories.contains(category),
            FilterRow::Income(range) => criteria.income_range == *range,
            FilterRow::FeeCeiling(ceiling) => criteria.fee_range.high == ceiling.unwrap_or(u64::MAX),
        }
    }

    /// Cards for the Compare page, resolved through the share link
    pub fn comparison(&self) -> Comparison {
        match &self.view.compare_link {
            Some(link) => resolve_reference(link.split('?').nth(1).unwrap_or(""), &self.catalog.cards),
            None => Comparison::NothingSelected,
        }
    }

    pub fn next(&mut self) {
        match self.current_page {
            Page::Filters => step(&mut self.filter_state, self.filter_rows.len(), 1),
            _ => step(&mut self.state, self.view.filtered.len(), 1),
        }
    }

    pub fn previous(&mut self) {
        match self.current_page {
            Page::Filters => step(&mut self.filter_state, self.filter_rows.len(), -1),
            _ => step(&mut self.state, self.view.filtered.len(), -1),
        }
    }

    pub fn first(&mut self) {
        match self.current_page {
            Page::Filters => jump(&mut self.filter_state, self.filter_rows.len(), false),
            _ => jump(&mut self.state, self.view.filtered.len(), false),
        }
    }

    pub fn last(&mut self) {
        match self.current_page {
            Page::Filters => jump(&mut self.filter_state, self.filter_rows.len(), true),
            _ => jump(&mut self.state, self.view.filtered.len(), true),
        }
    }
}

fn build_filter_rows(cards: &[Card]) -> Vec<FilterRow> {
    let mut rows: Vec<FilterRow> = bank_options(cards).into_iter().map(FilterRow::Bank).collect();
    rows.extend(category_options(cards).into_iter().map(FilterRow::Category));
    rows.extend(IncomeRange::ALL_OPTIONS.iter().copied().map(FilterRow::Income));
    rows.extend(FEE_CEILINGS.iter().copied().map(FilterRow::FeeCeiling));
    rows
}

/// Move a table cursor by `delta`, wrapping
fn step(state: &mut TableState, len: usize, delta: isize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    };
    state.select(Some(i));
}

fn jump(state: &mut TableState, len: usize, to_end: bool) {
    if len == 0 {
        return;
    }
    state.select(Some(if to_end { len - 1 } else { 0 }));
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.search_mode {
            app.search_input(key.code);
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Enter => app.toggle_detail(),
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    app.previous_page();
                } else {
                    app.next_page();
                }
            }
            KeyCode::BackTab => app.previous_page(),
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Char(' ') => match app.current_page {
                Page::Catalog => app.toggle_highlighted(),
                Page::Filters => app.toggle_filter_row(),
                Page::Compare => {}
            },
            KeyCode::Char('c') => {
                app.dispatch(CatalogEvent::ClearFilters);
                app.current_page = Page::Catalog;
            }
            KeyCode::Char('x') => app.dispatch(CatalogEvent::ClearSelection),
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.previous(),
            KeyCode::Home => app.first(),
            KeyCode::End => app.last(),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    if app.show_detail && app.current_page == Page::Catalog {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_cards(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        match app.current_page {
            Page::Catalog => render_cards(f, chunks[1], app),
            Page::Filters => render_filters(f, chunks[1], app),
            Page::Compare => render_compare(f, chunks[1], app),
        }
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "CreditWise  ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    for (i, page) in [Page::Catalog, Page::Filters, Page::Compare].iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(page.title().to_string(), style));
    }

    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("Showing {}/{}", app.view.filtered.len(), app.view.total),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("Selected {}/{}", app.view.selected.len(), MAX_SELECTED),
        Style::default().fg(Color::Green),
    ));

    let search = &app.catalog.criteria.search_text;
    if app.search_mode || !search.is_empty() {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("/{}{}", search, if app.search_mode { "▏" } else { "" }),
            Style::default().fg(Color::Magenta),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn header_row(titles: &[&str]) -> Row<'static> {
    let cells: Vec<Cell> = titles
        .iter()
        .map(|h| {
            Cell::from(h.to_string()).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        })
        .collect();
    Row::new(cells).style(Style::default().bg(Color::DarkGray)).height(1)
}

fn render_cards(f: &mut Frame, area: Rect, app: &mut App) {
    let header = header_row(&["", "Bank", "Card", "Annual Fee", "Min Income", "Categories"]);

    let rows = app.view.filtered.iter().map(|card| {
        let (mark, color) = if card.selected {
            ("[x]", Color::Green)
        } else {
            ("[ ]", Color::White)
        };

        Row::new(vec![
            Cell::from(mark).style(Style::default().fg(color)),
            Cell::from(card.bank.clone()),
            Cell::from(truncate(&card.name, 24)),
            Cell::from(format::annual_fee(card.annual_fee)),
            Cell::from(format::lakhs(card.income_requirement)),
            Cell::from(truncate(&card.category.join(", "), 32)),
        ])
        .height(1)
    });

    let title = if app.view.filtered.is_empty() {
        " No cards found - press c to clear filters ".to_string()
    } else {
        format!(" Available Cards ({}) ", app.view.filtered.len())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(18),
            Constraint::Length(26),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_filters(f: &mut Frame, area: Rect, app: &mut App) {
    let header = header_row(&["", "Group", "Option"]);

    let rows: Vec<Row> = app
        .filter_rows
        .iter()
        .map(|row| {
            let active = app.is_filter_row_active(row);
            let (group, label) = match row {
                FilterRow::Bank(bank) => ("Bank", bank.clone()),
                FilterRow::Category(category) => ("Category", category.clone()),
                FilterRow::Income(range) => ("Income", range.label().to_string()),
                FilterRow::FeeCeiling(None) => ("Annual Fee", "Any".to_string()),
                FilterRow::FeeCeiling(Some(max)) => ("Annual Fee", format!("Up to {}", format::rupees(*max))),
            };
            let radio = matches!(row, FilterRow::Income(_) | FilterRow::FeeCeiling(_));
            let mark = match (radio, active) {
                (true, true) => "(•)",
                (true, false) => "( )",
                (false, true) => "[x]",
                (false, false) => "[ ]",
            };
            let color = if active { Color::Green } else { Color::White };

            Row::new(vec![
                Cell::from(mark).style(Style::default().fg(color)),
                Cell::from(group).style(Style::default().fg(Color::Cyan)),
                Cell::from(label).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(4), Constraint::Length(12), Constraint::Min(20)],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" Filters - {} ", app.catalog.criteria.summary())),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.filter_state);
}

fn render_compare(f: &mut Frame, area: Rect, app: &App) {
    let comparison = app.comparison();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(match &app.view.compare_link {
            Some(link) => format!(" Compare - {} ", link),
            None => " Compare ".to_string(),
        });

    let cards = comparison.cards();
    if cards.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("  No cards selected for comparison."),
            Line::from(""),
            Line::from(Span::styled(
                "  Select up to 3 cards with Space on the Cards page.",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut titles = vec![String::new()];
    titles.extend(cards.iter().map(|c| c.name.clone()));
    let header = Row::new(
        titles
            .into_iter()
            .map(|t| Cell::from(t).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().bg(Color::DarkGray));

    let rows = comparison.rows().into_iter().map(|row| {
        let height = if row.label == "Key Benefits" { 4 } else { 1 };
        let mut cells = vec![Cell::from(row.label).style(Style::default().fg(Color::Cyan))];
        cells.extend(row.values.into_iter().map(|v| Cell::from(v.replace("; ", "\n"))));
        Row::new(cells).height(height)
    });

    let mut widths = vec![Constraint::Length(14)];
    widths.extend(cards.iter().map(|_| Constraint::Ratio(1, cards.len() as u32)));

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    if let Some(notice) = &app.view.notice {
        spans.push(Span::styled(
            format!(" ⚠ {} ", notice),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" | "));
    } else if let Some(message) = &app.status_message {
        spans.push(Span::styled(format!(" {} ", message), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" | "));
    }

    if app.search_mode {
        spans.push(Span::styled("Type", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" to search | "));
        spans.push(Span::styled("Enter/Esc", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Done"));
    } else {
        if !app.catalog.criteria.is_default() {
            spans.push(Span::styled(
                format!("Filter: {}", app.catalog.criteria.summary()),
                Style::default().fg(Color::Green),
            ));
            spans.push(Span::raw(" ("));
            spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" clear) | "));
        }
        for (key, label) in [
            ("Space", " Select | "),
            ("/", " Search | "),
            ("Tab", " Page | "),
            ("x", " Clear selection | "),
            ("Enter", " Details | "),
        ] {
            spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(label));
        }
        spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" Quit"));
    }

    let status_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Card Details ");

    let Some(card) = app.highlighted_card() else {
        f.render_widget(Paragraph::new("No card highlighted").block(block), area);
        return;
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let mut content = vec![
        Line::from(""),
        Line::from(vec![label("  Card: "), Span::raw(card.name.clone())]),
        Line::from(vec![label("  Bank: "), Span::raw(card.bank.clone())]),
        Line::from(vec![label("  Annual Fee: "), Span::raw(format::annual_fee(card.annual_fee))]),
        Line::from(vec![label("  Min Income: "), Span::raw(format::rupees(card.income_requirement))]),
        Line::from(vec![label("  Categories: "), Span::raw(card.category.join(", "))]),
        Line::from(""),
        Line::from(Span::styled(
            "  BENEFITS",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
    ];
    content.extend(card.benefits.iter().map(|b| Line::from(format!("  ✓ {}", b))));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        format!("  {}", card.image_prompt),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        if card.selected { "  Selected for comparison (Space to remove)" } else { "  Press Space to compare" },
        Style::default().fg(Color::Green),
    )));

    let detail_panel = Paragraph::new(content).block(block).wrap(Wrap { trim: false });
    f.render_widget(detail_panel, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditwise::seed_cards;

    #[test]
    fn test_space_on_catalog_selects_highlighted() {
        let mut app = App::new(seed_cards(), SelectionPolicy::EvictOldest);
        app.next();
        app.toggle_highlighted();

        assert_eq!(app.view.selected.len(), 1);
        assert_eq!(app.view.selected[0].id, 2);
    }

    #[test]
    fn test_eviction_sets_status_message() {
        let mut app = App::new(seed_cards(), SelectionPolicy::EvictOldest);
        for id in [1, 2, 3, 4] {
            app.toggle_card(id);
        }

        assert_eq!(app.view.selected.len(), MAX_SELECTED);
        assert!(app.status_message.as_deref().unwrap().contains("Regalia First"));
    }

    #[test]
    fn test_search_input_filters_and_clamps_cursor() {
        let mut app = App::new(seed_cards(), SelectionPolicy::EvictOldest);
        app.state.select(Some(14));
        app.start_search();
        for c in "atlas".chars() {
            app.search_input(KeyCode::Char(c));
        }

        assert_eq!(app.view.filtered.len(), 1);
        assert_eq!(app.state.selected(), Some(0));

        app.search_input(KeyCode::Enter);
        assert!(!app.search_mode);
    }

    #[test]
    fn test_filter_rows_toggle_criteria() {
        let mut app = App::new(seed_cards(), SelectionPolicy::EvictOldest);
        // First row is the first bank option
        app.toggle_filter_row();
        assert!(app.catalog.criteria.banks.contains("HDFC Bank"));
        assert!(app.view.filtered.iter().all(|c| c.bank == "HDFC Bank"));

        app.toggle_filter_row();
        assert!(app.catalog.criteria.banks.is_empty());
    }

    #[test]
    fn test_compare_page_follows_selection() {
        let mut app = App::new(seed_cards(), SelectionPolicy::EvictOldest);
        assert!(app.comparison().is_empty());

        app.toggle_card(7);
        app.toggle_card(3);
        let ids: Vec<CardId> = app.comparison().cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn test_filter_edit_clears_eviction_message() {
        let mut app = App::new(seed_cards(), SelectionPolicy::EvictOldest);
        for id in [1, 2, 3, 4] {
            app.toggle_card(id);
        }
        assert!(app.status_message.is_some());

        app.dispatch(CatalogEvent::SetSearch { text: "hdfc".to_string() });
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_home_end_follow_current_page() {
        let mut app = App::new(seed_cards(), SelectionPolicy::EvictOldest);
        app.state.select(Some(4));
        app.current_page = Page::Filters;

        app.last();
        assert_eq!(app.filter_state.selected(), Some(app.filter_rows.len() - 1));
        assert_eq!(app.state.selected(), Some(4));

        app.first();
        assert_eq!(app.filter_state.selected(), Some(0));

        app.current_page = Page::Catalog;
        app.last();
        assert_eq!(app.state.selected(), Some(14));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
        assert_eq!(truncate("short", 10), "short");
    }
}
