//! Interactive runtime for RegexHub.
//!
//! Reads one command per line from stdin, maps it to window events, feeds them to
//! the handlers and executes the returned actions. Windows are printed after each
//! command that asks for a redraw.
//!
//! # Commands
//!
//! | Command                     | Event                                  |
//! |-----------------------------|----------------------------------------|
//! | `search <text>`             | `SetInput` + `Search`                  |
//! | `create <text>`             | `SetInput` + `Create`                  |
//! | `refresh`                   | `Refresh`                              |
//! | `back`                      | `ReturnToBrowse`                       |
//! | `open <n>` / `history <n>`  | `SelectRow` on the listing / history   |
//! | `focus listing\|history`    | `FocusList`                            |
//! | `j` / `k` / `enter`         | `KeyDown` / `KeyUp` / `Activate`       |
//! | `profile`                   | `OpenProfile`                          |
//! | `profile-open posts\|history <n>` | `ProfileEvent::SelectRow`        |
//! | `close`                     | closes the profile window              |
//! | `logout`                    | `Logout`                               |
//! | `quit`                      | exits                                  |

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use regexhub::app::{
    handle_event, Action, AppState, DetailState, Event, ListKind, ProfileEvent, ProfileListKind, ProfileState,
    RefreshPolicy,
};
use regexhub::domain::Notice;
use regexhub::infrastructure::find_config_file;
use regexhub::observability::init_tracing;
use regexhub::ui::ListViewModel;
use regexhub::{initialize, Config, Result};

/// Open windows of one interactive session.
struct Runtime {
    app: AppState,
    policy: RefreshPolicy,
    profile: Option<ProfileState>,
    details: Vec<DetailState>,
    running: bool,
}

/// One parsed input line.
enum Command {
    Main(Vec<Event>),
    Profile(ProfileEvent),
    CloseProfile,
    Quit,
    Help,
}

fn parse_index(arg: &str) -> Option<usize> {
    arg.trim().parse::<usize>().ok()?.checked_sub(1)
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb {
        "search" => Command::Main(vec![Event::SetInput(rest.to_string()), Event::Search]),
        "create" => Command::Main(vec![Event::SetInput(rest.to_string()), Event::Create]),
        "refresh" => Command::Main(vec![Event::Refresh]),
        "back" => Command::Main(vec![Event::ReturnToBrowse]),
        "logout" => Command::Main(vec![Event::Logout]),
        "profile" => Command::Main(vec![Event::OpenProfile]),
        "open" => Command::Main(vec![Event::SelectRow {
            list: ListKind::Listing,
            index: parse_index(rest)?,
        }]),
        "history" => Command::Main(vec![Event::SelectRow {
            list: ListKind::History,
            index: parse_index(rest)?,
        }]),
        "focus" => match rest {
            "listing" => Command::Main(vec![Event::FocusList(ListKind::Listing)]),
            "history" => Command::Main(vec![Event::FocusList(ListKind::History)]),
            _ => return None,
        },
        "j" => Command::Main(vec![Event::KeyDown]),
        "k" => Command::Main(vec![Event::KeyUp]),
        "enter" => Command::Main(vec![Event::Activate]),
        "profile-open" => {
            let (list, index) = rest.split_once(' ')?;
            let list = match list {
                "posts" => ProfileListKind::Posts,
                "history" => ProfileListKind::History,
                _ => return None,
            };
            Command::Profile(ProfileEvent::SelectRow {
                list,
                index: parse_index(index)?,
            })
        }
        "close" => Command::CloseProfile,
        "quit" | "exit" => Command::Quit,
        "help" | "?" => Command::Help,
        _ => return None,
    };
    Some(command)
}

fn print_list(out: &mut impl Write, list: &ListViewModel) -> io::Result<()> {
    writeln!(out, "── {} ──", list.label())?;
    if list.is_empty() {
        writeln!(out, "   (empty)")?;
    }
    for (i, row) in list.rows().iter().enumerate() {
        let marker = if list.selected() == Some(i) { '>' } else { ' ' };
        writeln!(out, "{marker}{:>3}. {}", i + 1, row.text)?;
    }
    Ok(())
}

fn print_notice(notice: &Notice) {
    println!("[{}] {}", notice.title, notice.message);
}

impl Runtime {
    fn new(app: AppState, policy: RefreshPolicy) -> Self {
        Self {
            app,
            policy,
            profile: None,
            details: Vec::new(),
            running: true,
        }
    }

    fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (redraw, actions) = handle_event(&mut self.app, event)?;
        for action in &actions {
            self.execute_action(action);
        }
        Ok(redraw)
    }

    fn dispatch_profile(&mut self, event: &ProfileEvent) -> Result<bool> {
        let Some(profile) = self.profile.as_mut() else {
            println!("No profile window open.");
            return Ok(false);
        };
        let (redraw, actions) = profile.handle_event(event)?;
        for action in &actions {
            self.execute_action(action);
        }
        Ok(redraw)
    }

    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::ShowNotice(notice) => {
                tracing::debug!(title = %notice.title, "showing notice");
                print_notice(notice);
            }
            Action::OpenDetail(detail) => {
                tracing::debug!(record_id = detail.request().record_id, origin = ?detail.request().origin, "showing detail window");
                println!("═══ {} ═══", detail.title());
                if let Some(summary) = detail.summary() {
                    println!("{summary}");
                }
                self.details.push(detail.clone());
            }
            Action::OpenProfile { username } => {
                tracing::debug!(username = %username, "opening profile window");
                self.profile = Some(ProfileState::new(self.app.api().clone(), self.policy));
                if let Err(e) = self.dispatch_profile(&ProfileEvent::Load) {
                    tracing::error!(error = %e, "profile load failed");
                }
            }
            Action::OpenWelcome => {
                println!("Signed out. Welcome to RegexHub, sign in to continue.");
            }
            Action::CloseWindow => {
                tracing::debug!("main window closed");
                self.profile = None;
                self.details.clear();
                self.running = false;
            }
        }
    }

    fn render(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let identity = self.app.identity();
        writeln!(out, "\n{} <{}>", identity.username, identity.email)?;
        if !self.app.session.is_browsing() {
            writeln!(out, "Search: {:?}  (type `back` to return)", self.app.session.active_query())?;
        }
        print_list(&mut out, self.app.list(ListKind::Listing))?;
        print_list(&mut out, self.app.list(ListKind::History))?;

        if let Some(profile) = &self.profile {
            writeln!(out, "\n═══ Profile: {} <{}> ═══", profile.username(), profile.email())?;
            print_list(&mut out, profile.list(ProfileListKind::Posts))?;
            print_list(&mut out, profile.list(ProfileListKind::History))?;
        }
        out.flush()
    }

    fn run_command(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Main(events) => {
                let mut redraw = false;
                for event in &events {
                    redraw |= self.dispatch(event)?;
                }
                Ok(redraw)
            }
            Command::Profile(event) => self.dispatch_profile(&event),
            Command::CloseProfile => Ok(self.profile.take().is_some()),
            Command::Quit => {
                self.running = false;
                Ok(false)
            }
            Command::Help => {
                println!("{}", HELP);
                Ok(false)
            }
        }
    }
}

const HELP: &str = "commands: search <text> | create <text> | refresh | back | open <n> | history <n> \
| focus listing|history | j | k | enter | profile | profile-open posts|history <n> | close | logout | quit";

fn load_config() -> Config {
    let Some(path) = find_config_file() else {
        return Config::default();
    };
    Config::load(&path).unwrap_or_else(|e| {
        eprintln!("regexhub: ignoring config {}: {e}", path.display());
        Config::default()
    })
}

fn run(config: &Config) -> Result<()> {
    let state = initialize(config)?;
    let mut runtime = Runtime::new(state, config.refresh_policy);

    if runtime.dispatch(&Event::Load)? {
        runtime.render()?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            println!("unrecognised command, type `help`");
            continue;
        };

        if runtime.run_command(command)? && runtime.running {
            runtime.render()?;
        }
        if !runtime.running {
            break;
        }
    }

    tracing::debug!(details_opened = runtime.details.len(), "session ended");
    Ok(())
}

fn main() -> ExitCode {
    let config = load_config();
    init_tracing(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "regexhub starting");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "regexhub exited with error");
            eprintln!("regexhub: {e}");
            ExitCode::FAILURE
        }
    }
}
