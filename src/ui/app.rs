use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Points};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::models::ImmigrationRecord;

use super::chart::{PieChartProjection, PREFERRED_HEIGHT, PREFERRED_WIDTH};
use super::helpers::{button, fit_preferred_size, split_disc_and_legend};
use super::table::{TableProjection, COUNT_HEADER, YEAR_HEADER};
use super::view::ActiveView;

pub const APP_TITLE: &str = "Immigration Statistics in Canada";

/// Title bar plus the two view buttons.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for the record summary and key help.
const FOOTER_HEIGHT: u16 = 3;

/// Central application state: both projections are built once at startup and
/// only the active view changes afterwards.
pub struct App {
    table: TableProjection,
    chart: PieChartProjection,
    view: ActiveView,
    table_state: TableState,
}

impl App {
    pub fn new(records: &[ImmigrationRecord]) -> Self {
        let table = TableProjection::from_records(records);
        let chart = PieChartProjection::from_records(records);
        let mut table_state = TableState::default();
        if !table.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            table,
            chart,
            view: ActiveView::default(),
            table_state,
        }
    }

    pub fn view(&self) -> ActiveView {
        self.view
    }

    pub fn table(&self) -> &TableProjection {
        &self.table
    }

    pub fn chart(&self) -> &PieChartProjection {
        &self.chart
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn switch_to_chart(&mut self) {
        self.view.show_chart();
    }

    pub fn switch_to_table(&mut self) {
        self.view.show_table();
    }

    /// Apply one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') => self.switch_to_chart(),
            KeyCode::Char('t') => self.switch_to_table(),
            KeyCode::Up if self.view.is_table_visible() => self.move_selection(-1),
            KeyCode::Down if self.view.is_table_visible() => self.move_selection(1),
            KeyCode::Home if self.view.is_table_visible() => self.select_edge(false),
            KeyCode::End if self.view.is_table_visible() => self.select_edge(true),
            _ => {}
        }
        false
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT.min(area.height)),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        match self.view {
            ActiveView::Table => self.draw_table(frame, chunks[1]),
            ActiveView::Chart => self.draw_chart(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::BOTTOM);
        let buttons = Line::from(vec![
            button("Table", 't', self.view.is_table_visible()),
            Span::raw(" "),
            button("Chart", 'c', self.view.is_chart_visible()),
        ]);
        let title = Line::from(Span::styled(
            APP_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let paragraph = Paragraph::new(vec![title, buttons])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(vec![Cell::from(YEAR_HEADER), Cell::from(COUNT_HEADER)]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        let rows = self
            .table
            .rows()
            .iter()
            .map(|row| Row::new(row.cells().map(Cell::from)));

        let table = Table::new(rows, TableProjection::column_constraints())
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Records"))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_chart(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(self.chart.title());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let chart_area = fit_preferred_size(inner, PREFERRED_WIDTH, PREFERRED_HEIGHT);
        let (disc_area, legend_area) = split_disc_and_legend(chart_area);

        // Braille packs a 2x4 dot grid into every cell.
        let buckets = self.chart.rasterize(
            usize::from(disc_area.width) * 2,
            usize::from(disc_area.height) * 4,
        );
        let colors: Vec<Color> = self
            .chart
            .slices()
            .iter()
            .map(|slice| slice.color.to_color())
            .collect();
        let nothing_to_draw = buckets.iter().all(Vec::is_empty);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                if nothing_to_draw {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: 1.0,
                        color: Color::DarkGray,
                    });
                    return;
                }
                for (coords, color) in buckets.iter().zip(&colors) {
                    ctx.draw(&Points {
                        coords,
                        color: *color,
                    });
                }
            });
        frame.render_widget(canvas, disc_area);

        frame.render_widget(self.legend(), legend_area);
    }

    fn legend(&self) -> List<'static> {
        if self.chart.is_empty() {
            return List::new(vec![ListItem::new("No records")])
                .block(Block::default().borders(Borders::LEFT));
        }

        let items: Vec<ListItem> = self
            .chart
            .slices()
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                let percent = self.chart.fraction(index) * 100.0;
                ListItem::new(Line::from(vec![
                    Span::styled("■ ", Style::default().fg(slice.color.to_color())),
                    Span::raw(format!("{}  {} ({percent:.1}%)", slice.label, slice.value)),
                ]))
            })
            .collect();

        List::new(items).block(Block::default().borders(Borders::LEFT))
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let summary = Line::from(Span::styled(
            format!("{} records", self.table.len()),
            Style::default().fg(Color::Green),
        ));
        let instructions = match self.view {
            ActiveView::Table => Line::from("c: chart  Up/Down: scroll  q: quit"),
            ActiveView::Chart => Line::from("t: table  q: quit"),
        };

        frame.render_widget(Paragraph::new(vec![summary, instructions]), inner);
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.table.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    fn select_edge(&mut self, last: bool) {
        let len = self.table.len();
        if len == 0 {
            return;
        }
        self.table_state
            .select(Some(if last { len - 1 } else { 0 }));
    }
}
