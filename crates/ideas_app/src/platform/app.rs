use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use ideas_core::{update, ListState, Msg};
use ideas_gateway::EngineEvent;
use ideas_logging::{ideas_debug, ideas_error, ideas_info};

use super::config::AppConfig;
use super::effects::{completion_msg, EffectRunner};
use super::history::{History, Location};
use super::ui::dropdown::Dropdowns;
use super::ui::input::{parse_command, Command};
use super::{logging, persistence, ui};

pub enum AppEvent {
    Input(String),
    InputClosed,
    Engine(EngineEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    logging::initialize(config.log, &config.state_dir);
    ideas_info!(
        "Starting against {}{}",
        config.base_url,
        config.endpoint
    );

    let (tx, rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(config.gateway_settings(), tx.clone())
        .context("failed to start the content engine")?;

    let restored = if config.location.is_none() && !config.no_restore {
        persistence::load_location(&config.state_dir)
    } else {
        None
    };
    let mut app = App::new(runner, config.initial_location(restored));

    spawn_input_reader(tx);
    app.enter_current_location();

    while let Ok(event) = rx.recv() {
        let flow = match event {
            AppEvent::Input(line) => app.handle_line(&line),
            AppEvent::InputClosed => Flow::Quit,
            AppEvent::Engine(event) => {
                app.dispatch(completion_msg(event));
                Flow::Continue
            }
        };
        if flow == Flow::Quit {
            break;
        }
    }

    app.save_session(&config.state_dir);
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

/// The mounted listing view; dropped when navigating away.
struct Listing {
    state: ListState,
    menus: Dropdowns,
}

struct App {
    runner: EffectRunner,
    history: History,
    listing: Option<Listing>,
    /// Last request id issued by any mount of the listing.
    last_request: u64,
}

impl App {
    fn new(runner: EffectRunner, initial: Location) -> Self {
        Self {
            runner,
            history: History::new(initial),
            listing: None,
            last_request: 0,
        }
    }

    /// Mounts, reconciles or unmounts the listing for the current location.
    fn enter_current_location(&mut self) {
        let location = self.history.current().clone();
        ideas_debug!(
            "Entering {} ({} history entries)",
            location,
            self.history.len()
        );
        if location.is_listing() {
            if self.listing.is_some() {
                self.dispatch(Msg::UrlChanged(location.query));
            } else {
                self.listing = Some(Listing {
                    state: ListState::resume_after(self.last_request),
                    menus: Dropdowns::default(),
                });
                self.dispatch(Msg::Mounted(location.query));
            }
        } else {
            if let Some(listing) = self.listing.take() {
                self.last_request = listing.state.latest_request();
                ideas_info!("Listing unmounted");
            }
            present(ui::render::render_location(&location));
        }
    }

    /// Runs one message through the listing. Returns whether anything was rendered.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let Some(listing) = self.listing.as_mut() else {
            ideas_debug!("No listing mounted; dropping {:?}", msg);
            return false;
        };
        let state = std::mem::take(&mut listing.state);
        let (mut state, effects) = update(state, msg);
        let dirty = state.consume_dirty();
        listing.state = state;

        if self.runner.run(effects, &mut self.history) {
            self.enter_current_location();
            return true;
        }
        if dirty {
            self.render_listing();
        }
        dirty
    }

    fn render_listing(&self) {
        if let Some(listing) = &self.listing {
            present(ui::render::render(&listing.state.view(), &listing.menus));
        }
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let Some(command) = parse_command(line) else {
            return Flow::Continue;
        };

        match command {
            Command::Quit => return Flow::Quit,
            Command::Help => present(ui::render::help()),
            Command::Back => {
                if self.history.back() {
                    self.enter_current_location();
                } else {
                    present(vec!["Nothing to go back to.".to_string()]);
                }
            }
            Command::Forward => {
                if self.history.forward() {
                    self.enter_current_location();
                } else {
                    present(vec!["Nothing to go forward to.".to_string()]);
                }
            }
            Command::Go(raw) => {
                self.history.push(Location::parse(&raw));
                self.enter_current_location();
            }
            Command::Unknown(text) => {
                present(vec![format!("Unknown command `{text}`. Type `help`.")]);
            }
            listing_command => self.handle_listing_command(listing_command),
        }
        Flow::Continue
    }

    fn handle_listing_command(&mut self, command: Command) {
        let Some(listing) = self.listing.as_mut() else {
            if let Some(lines) = listing_closed_notice(&command) {
                present(lines);
            }
            return;
        };

        let menus_changed = match command {
            Command::PageSize(None) => {
                listing.menus.toggle_page_size();
                true
            }
            Command::Sort(None) => {
                listing.menus.toggle_sort();
                true
            }
            // Anything else counts as interacting outside an open menu.
            _ => listing.menus.close_all(),
        };

        let msg = match command {
            Command::Page(target) => Some(Msg::PageRequested(target)),
            Command::PageSize(Some(size)) => Some(Msg::PageSizeSelected(size)),
            Command::Sort(Some(sort)) => Some(Msg::SortSelected(sort)),
            Command::Retry => Some(Msg::RetryClicked),
            Command::Open(position) => match listing.state.items().get(position - 1) {
                Some(item) => Some(Msg::ItemActivated(item.id.clone())),
                None => {
                    present(vec![format!("No item {position} on this page.")]);
                    None
                }
            },
            _ => None,
        };

        let rendered = msg.is_some_and(|msg| self.dispatch(msg));
        if menus_changed && !rendered {
            self.render_listing();
        }
    }

    fn save_session(&self, state_dir: &std::path::Path) {
        let location = self.history.current();
        if !location.is_listing() {
            return;
        }
        match persistence::save_location(state_dir, location) {
            Ok(path) => ideas_info!("Saved session to {:?}", path),
            Err(err) => ideas_error!("Failed to save session: {}", err),
        }
    }
}

/// Reply to a listing command typed while no listing is mounted.
fn listing_closed_notice(command: &Command) -> Option<Vec<String>> {
    match command {
        Command::Escape => None,
        _ => Some(vec![format!(
            "The listing is not open. Type `back` or `go {}`.",
            ideas_core::RESOURCE_PATH
        )]),
    }
}

fn present(lines: Vec<String>) {
    let mut out = io::stdout().lock();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = write!(out, "{}", ui::constants::PROMPT);
    let _ = out.flush();
}
