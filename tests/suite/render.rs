//! Full-screen rendering against an in-memory backend

use std::sync::Arc;

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use cyberelement_engine::cyberelement_providers::{ApiConfig, GeminiClient};
use cyberelement_engine::{
    App, DetailRecord, FetchError, ModelName, UiOptions, element_by_number,
};
use cyberelement_tui::{ScreenLayout, draw};

const WIDTH: u16 = 140;
const HEIGHT: u16 = 44;

fn still_app() -> App<GeminiClient> {
    let client = GeminiClient::new(ApiConfig::new(None)).unwrap();
    App::new(
        Arc::new(client),
        UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ModelName::default(),
    )
}

fn render(app: &App<GeminiClient>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..height {
        for x in 0..width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

#[test]
fn idle_screen_shows_header_grid_and_status() {
    let app = still_app();
    let screen = render(&app, WIDTH, HEIGHT);

    assert!(screen.contains("CYBERELEMENT"));
    assert!(screen.contains("INTERACTIVE PERIODIC DATA VISUALIZATION"));
    assert!(screen.contains("SYSTEM STATUS"));
    assert!(screen.contains("AI NODE: ONLINE"));
    assert!(screen.contains("DB: 118 ENTRIES"));
    assert!(screen.contains("Fe"));
    assert!(screen.contains("Og"));
    assert!(screen.contains("POWERED BY GOOGLE GEMINI (gemini-2.5-flash)"));
    assert!(!screen.contains("ANALYSIS_LOG"));
}

#[test]
fn loading_panel_shows_identity_and_progress() {
    let mut app = still_app();
    app.begin_selection(element_by_number(6).unwrap());
    let screen = render(&app, WIDTH, HEIGHT);

    assert!(screen.contains("ID:006 // CARBON"));
    assert!(screen.contains("DECRYPTING DATA PACKETS..."));
    assert!(screen.contains("P2 / G14"));
    assert!(screen.contains("NONMETAL"));
}

#[test]
fn loaded_panel_shows_all_sections() {
    let mut app = still_app();
    let token = app.begin_selection(element_by_number(6).unwrap());
    assert!(app.complete_fetch(
        token,
        Ok(DetailRecord::new(
            "Backbone of life",
            "Diamond lattice",
            "Steel alloys",
            "Graphene is one atom thick",
        )),
    ));
    let screen = render(&app, WIDTH, HEIGHT);

    for heading in ["ANALYSIS_LOG", "MATERIAL_FORM", "APPLICATIONS", "TRIVIA_MODULE"] {
        assert!(screen.contains(heading), "missing {heading}");
    }
    assert!(screen.contains("Backbone of life"));
    assert!(screen.contains("Diamond lattice"));
    assert!(screen.contains("Steel alloys"));
    assert!(screen.contains("Graphene is one atom thick"));
    assert!(!screen.contains("DECRYPTING"));
    assert!(!screen.contains("DEGRADED"));
}

#[test]
fn failed_fetch_shows_fallback_and_degraded_status() {
    let mut app = still_app();
    let token = app.begin_selection(element_by_number(79).unwrap());
    app.complete_fetch(
        token,
        Err(FetchError::Http {
            status: 429,
            body: String::new(),
        }),
    );
    let screen = render(&app, WIDTH, HEIGHT);

    assert!(screen.contains("DATA STREAM DEGRADED // QUOTA EXHAUSTED"));
    assert!(screen.contains("ERROR: Database connection unstable."));
    assert!(screen.contains("System requires maintenance."));
    assert!(screen.contains("AI NODE: DEGRADED"));
}

#[test]
fn tiny_terminal_explains_missing_grid() {
    let app = still_app();
    let screen = render(&app, 40, 15);
    assert!(screen.contains("TERMINAL TOO SMALL"));
}

/// Text inside `area`, one line per row with trailing blanks removed.
fn render_region(app: &App<GeminiClient>, width: u16, height: u16, area: Rect) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut rows = Vec::with_capacity(usize::from(area.height));
    for y in area.y..area.y + area.height {
        let row: String = (area.x..area.x + area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n")
}

#[test]
fn carbon_panel_snapshot() {
    let client = GeminiClient::new(ApiConfig::new(None)).unwrap();
    let mut app = App::new(
        Arc::new(client),
        UiOptions {
            ascii_only: true,
            reduced_motion: true,
            ..UiOptions::default()
        },
        ModelName::default(),
    );
    let token = app.begin_selection(element_by_number(6).unwrap());
    app.complete_fetch(
        token,
        Ok(DetailRecord::new(
            "Backbone of life",
            "Diamond lattice",
            "Steel alloys",
            "Graphene is one atom thick",
        )),
    );

    let panel = ScreenLayout::new(Rect::new(0, 0, 100, 30)).panel;
    assert_eq!(panel, Rect::new(2, 2, 96, 26));

    assert_snapshot!(render_region(&app, 100, 30, panel), @r"
        ┌ ID:006 // CARBON ────────────────────────────────────────────────────────────────────────────┐
        │                                                                                              │
        │ C                         > ANALYSIS_LOG                                                     │
        │ Carbon                    Backbone of life                                                   │
        │ NONMETAL                                                                                     │
        │                           > MATERIAL_FORM                                                    │
        │ NO.   006                 Diamond lattice                                                    │
        │ MASS  12.011                                                                                 │
        │ POS   P2 / G14            > APPLICATIONS                                                     │
        │                           Steel alloys                                                       │
        │                                                                                              │
        │                           > TRIVIA_MODULE                                                    │
        │                           Graphene is one atom thick                                         │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        │                                                                                              │
        └ [ESC] CLOSE ─────────────────────────────────────────────────────────────────────────────────┘
    ");
}
