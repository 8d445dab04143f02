use crossterm::event::KeyCode;
use immigration_stats::db::try_load_records;
use immigration_stats::ui::chart::PALETTE;
use immigration_stats::ui::view::ActiveView;
use immigration_stats::{load_records, App, Config, ImmigrationRecord};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::Terminal;
use rusqlite::{params, Connection};
use tempfile::TempDir;

const ROWS: &[(&str, i64)] = &[
    ("2015", 271_845),
    ("2016", 296_346),
    ("2017", 286_479),
    ("2018", 321_035),
    ("2019", 341_180),
    ("2020", 184_595),
    ("2021", 406_025),
    ("2022", 437_180),
    ("2023", 471_550),
    ("2024", 483_640),
    ("2025", 395_000),
    ("2026", 380_000),
];

fn seed_database(rows: &[(&str, i64)]) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("immigration_db.sqlite");
    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "CREATE TABLE immigration_stats (year TEXT NOT NULL, number INTEGER NOT NULL)",
        [],
    )
    .unwrap();
    for (year, number) in rows {
        conn.execute(
            "INSERT INTO immigration_stats (year, number) VALUES (?1, ?2)",
            params![year, number],
        )
        .unwrap();
    }
    drop(conn);

    let config = Config {
        database: path,
        ..Config::default()
    };
    (dir, config)
}

fn render(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn table_matches_fetched_rows_in_order() {
    let (_dir, config) = seed_database(ROWS);
    let records = load_records(&config);
    assert_eq!(records.len(), ROWS.len());

    let app = App::new(&records);
    let rows = app.table().rows();
    assert_eq!(rows.len(), ROWS.len());
    for (row, (year, number)) in rows.iter().zip(ROWS) {
        assert_eq!(row.year, *year);
        assert_eq!(row.count, *number as u64);
    }
}

#[test]
fn chart_has_one_slice_per_row_with_cycled_palette() {
    let (_dir, config) = seed_database(ROWS);
    let app = App::new(&load_records(&config));

    let slices = app.chart().slices();
    assert_eq!(slices.len(), ROWS.len());
    for (i, slice) in slices.iter().enumerate() {
        assert_eq!(slice.color, PALETTE[i % 10]);
        assert_eq!(slice.label, ROWS[i].0);
    }
}

#[test]
fn table_view_renders_rows() {
    let (_dir, config) = seed_database(&ROWS[..3]);
    let mut app = App::new(&load_records(&config));

    let text = screen_text(&render(&mut app));
    assert!(text.contains("Immigration Statistics in Canada"));
    assert!(text.contains("Number of Immigrants"));
    assert!(text.contains("2016"));
    assert!(text.contains("296346"));
    assert!(!text.contains("Pie Chart"));
}

#[test]
fn chart_view_renders_colored_slices() {
    let (_dir, config) = seed_database(&ROWS[..2]);
    let mut app = App::new(&load_records(&config));
    app.handle_key(KeyCode::Char('c'));

    let buffer = render(&mut app);
    let text = screen_text(&buffer);
    assert!(text.contains("Immigration Statistics in Canada Pie Chart"));
    assert!(!text.contains("Number of Immigrants"));

    for color in [PALETTE[0], PALETTE[1]] {
        assert!(
            buffer
                .content()
                .iter()
                .any(|cell| cell.fg == color.to_color()),
            "no cell painted {}",
            color.name
        );
    }
    assert!(!buffer
        .content()
        .iter()
        .any(|cell| cell.fg == Color::Rgb(0, 0, 255)));
}

#[test]
fn empty_table_renders_empty_views() {
    let (_dir, config) = seed_database(&[]);
    let records = try_load_records(&config).unwrap();
    assert!(records.is_empty());

    let mut app = App::new(&records);
    let text = screen_text(&render(&mut app));
    assert!(text.contains("0 records"));

    app.handle_key(KeyCode::Char('c'));
    let text = screen_text(&render(&mut app));
    assert!(text.contains("No records"));
}

#[test]
fn unreachable_store_still_brings_up_the_ui() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database: dir.path().join("not-there.sqlite"),
        ..Config::default()
    };

    let err = try_load_records(&config).unwrap_err();
    assert!(format!("{err:#}").contains("not-there.sqlite"));

    let records = load_records(&config);
    assert!(records.is_empty());

    let mut app = App::new(&records);
    assert!(app.table().is_empty());
    assert!(app.chart().is_empty());
    let text = screen_text(&render(&mut app));
    assert!(text.contains("Immigration Statistics in Canada"));
}

#[test]
fn toggles_keep_exactly_one_view_and_never_reload() {
    let records = vec![
        ImmigrationRecord::new("2019", 341_180),
        ImmigrationRecord::new("2020", 184_595),
    ];
    let mut app = App::new(&records);
    let keys = ['c', 'c', 't', 't', 'c', 't', 'c'];

    for key in keys {
        app.handle_key(KeyCode::Char(key));
        let view = app.view();
        assert!(view.is_table_visible() ^ view.is_chart_visible());
        assert_eq!(app.table().len(), 2);
    }
    assert_eq!(app.view(), ActiveView::Chart);
}
