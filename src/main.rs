//! tsguide: a terminal guide to TypeScript's type system.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tsguide::formats::markdown::MarkdownFormat;
use tsguide::{app_state, config, export, guide, highlight, parse, render, ui};

#[derive(Parser)]
#[command(name = "tsguide")]
#[command(about = "A terminal guide to TypeScript's type system", long_about = None)]
struct Args {
    /// Start with the given section id selected
    #[arg(long, short = 's', value_name = "ID")]
    section: Option<String>,

    /// Print the section catalogue and exit
    #[arg(long)]
    list: bool,

    /// Write the guide as JSON to a file and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Override the configured syntax highlighting theme
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(theme) = args.theme {
        cfg.theme = theme;
    }

    let sections = guide::load()?;

    if args.list {
        print_catalogue()?;
        return Ok(());
    }

    if let Some(path) = args.export {
        export::write_json(&path, &sections)?;
        println!("Exported {} sections to {}", sections.len(), path.display());
        return Ok(());
    }

    let mut state = app_state::AppState::new(sections, cfg.wrap_width);

    // An unknown id starts on the empty projection; selection never validates.
    if let Some(id) = args.section {
        state.select(&id);
    }

    run_tui(state, &cfg)
}

fn print_catalogue() -> io::Result<()> {
    let format = MarkdownFormat;
    println!("Available sections:");
    println!("*Hint - run `tsguide --section intro`\n");
    for src in guide::SOURCES {
        println!("- {id:<10} {title}", id = src.id, title = src.title);
        for entry in parse::outline(src.source, &format)? {
            if entry.level == 2 {
                println!("    · {}", entry.title);
            }
        }
        println!();
    }
    Ok(())
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    let highlighter = highlight::Highlighter::new(&cfg.theme);
    let cache = render::ContentCache::build(&app.sections, &highlighter, app.wrap_width);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg, &cache);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
    cache: &render::ContentCache,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cache, cfg))?;

        if let Event::Key(key) = event::read()? {
            match app.current_view {
                app_state::View::Browse => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up => app.cursor_up(),
                    KeyCode::Down => app.cursor_down(),
                    KeyCode::Home => app.cursor_first(),
                    KeyCode::End => app.cursor_last(),
                    KeyCode::Enter => app.select_cursor(),
                    KeyCode::Char('k') | KeyCode::PageUp => app.scroll_up(),
                    KeyCode::Char('j') | KeyCode::PageDown => {
                        let max = cache.height(&app.active_id).saturating_sub(1);
                        app.scroll_down(max);
                    }
                    KeyCode::Char(':') => {
                        app.current_view = app_state::View::Command;
                        app.command_buffer.clear();
                        app.message = None;
                    }
                    _ => {}
                },
                app_state::View::Command => match key.code {
                    KeyCode::Enter => {
                        let cmd = app.command_buffer.clone();
                        app.current_view = app_state::View::Browse;
                        app.command_buffer.clear();
                        if run_command(app, cmd.trim()) {
                            return Ok(());
                        }
                    }
                    KeyCode::Esc => {
                        app.current_view = app_state::View::Browse;
                        app.command_buffer.clear();
                    }
                    KeyCode::Char(c) => {
                        app.command_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.command_buffer.pop();
                    }
                    _ => {}
                },
            }
        }
    }
}

/// Dispatch a completed command; returns true when it quits the app.
fn run_command(app: &mut app_state::AppState, cmd: &str) -> bool {
    match cmd {
        "q" | "q!" => true,
        "n" => {
            if let Some(next) = app.find_next_section() {
                app.cursor = next;
                app.select_cursor();
            } else {
                app.message = Some("No more sections".to_string());
            }
            false
        }
        "p" => {
            if let Some(prev) = app.find_prev_section() {
                app.cursor = prev;
                app.select_cursor();
            } else {
                app.message = Some("No previous sections".to_string());
            }
            false
        }
        "" => false,
        other => {
            if let Some(id) = other.strip_prefix("g ") {
                // Selection takes any string; unknown ids project to nothing.
                app.select(id.trim());
            } else {
                app.message = Some(format!("Unknown command: {other}"));
            }
            false
        }
    }
}
