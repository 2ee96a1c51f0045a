mod data;
mod error;
mod paths;

use std::env;
use std::fs::{self, File};
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;
use simplelog::{Config, LevelFilter, WriteLogger};
use sortable_table::prelude::*;
use termgrid::{Color, DefaultTheme, Event, Key, Style, Terminal, dispatch, translate_events};

use data::Row;
use error::Result;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging()?;

    let (columns, rows) = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => data::load(&path)?,
        None => data::story(),
    };

    let status = Arc::new(Mutex::new(String::from("Click a ▲/▼ glyph to sort")));
    let table = SortableTable::new(
        TableProps::new(columns, rows)
            .on_sort({
                let status = status.clone();
                move |column: &Column<Row>| {
                    set_status(
                        &status,
                        format!("Sorted by {} ({})", column.label, column.sort_direction),
                    );
                }
            })
            .on_click({
                let status = status.clone();
                move |row: &Row| {
                    set_status(&status, format!("Clicked {}", Value::Object(row.clone())));
                }
            }),
    )?
    .id("people");

    let stylesheet = default_stylesheet();
    let theme = DefaultTheme::new();
    let registry = HandlerRegistry::new();
    let mut term = Terminal::new()?;

    let mut redraw = true;
    let mut root = Element::col();
    loop {
        if redraw || table.state().is_dirty() {
            table.state().clear_dirty();
            registry.clear();
            root = ui(&table, &registry, &status);
            term.render(&root, &stylesheet, &theme)?;
            redraw = false;
        }

        let raw = term.poll(Some(POLL_INTERVAL))?;
        for event in translate_events(&raw, &root, term.layout()) {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => {
                    log::info!("quit");
                    return Ok(());
                }
                Event::Resize { .. } => redraw = true,
                event => redraw |= dispatch(&registry, &event),
            }
        }
    }
}

fn init_logging() -> Result<()> {
    let path = paths::log_file();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn set_status(status: &Mutex<String>, text: String) {
    log::debug!("{text}");
    match status.lock() {
        Ok(mut guard) => *guard = text,
        Err(poisoned) => *poisoned.into_inner() = text,
    }
}

fn ui(table: &SortableTable<Row>, registry: &HandlerRegistry, status: &Mutex<String>) -> Element {
    let status = match status.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };

    Element::col()
        .gap(1)
        .child(
            Element::text("Sortable table")
                .style(Style::new().foreground(Color::var("primary")).bold()),
        )
        .child(table.build(registry))
        .child(Element::text(status).style(Style::new().foreground(Color::var("muted"))))
        .child(
            Element::text("Press 'q' to quit").style(Style::new().foreground(Color::var("muted"))),
        )
}
