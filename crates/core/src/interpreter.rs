//! Command Interpreter
//!
//! Maps a submitted console line to a `Response` plus the `Mutation`s the
//! caller should apply. The interpreter is a pure function of the current
//! `ShellState` and the input; it never fails, every input yields an outcome.
//!
//! # Dispatch
//!
//! Commands live in a static route table. Each route has a scope (a focused
//! module, or global) and a matcher over the trimmed, lowercased input.
//! Routes scoped to the current focus are consulted first, then the global
//! ones; the first match wins. Anything else is "Command not found".
//!
//! | scope    | command                                   |
//! |----------|-------------------------------------------|
//! | projects | `ls`, `open <n>`                          |
//! | skills   | `analyze`, `graph`                        |
//! | global   | `help`, `clear`, `whoami`, `modules`, `scan`, `credits`, `session`, `recruiter --summary`, `recruiter --off`, `home`, `root`, module names |

use crate::content::{PROJECTS, project_by_index};
use crate::module::Module;
use crate::response::Response;
use crate::state::{Mutation, ShellState};

pub const NOT_FOUND: &str = "Command not found";
pub const UNKNOWN_PROJECT_INDEX: &str = "Unknown project index";

/// Number of history entries summarized by `session`
pub const SESSION_SUMMARY_LEN: usize = 6;

const HELP_TEXT: &str = "Available: help, home, clear, about, projects, skills, experience, \
                         contact, whoami, modules, scan, credits, session, recruiter --summary, \
                         recruiter --off";

/// Result of interpreting one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Reply for the display log (None for empty input and `clear`)
    pub response: Option<Response>,
    /// State changes, to be applied in order
    pub mutations: Vec<Mutation>,
}

impl Outcome {
    pub fn has(&self, mutation: &Mutation) -> bool {
        self.mutations.contains(mutation)
    }
}

/// Where a route is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only while this module is focused
    Focused(Module),
    /// Always
    Global,
}

/// How a route recognizes its command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// The whole command equals this text
    Exact(&'static str),
    /// The first word equals this verb and a non-empty argument follows
    WithArgument(&'static str),
}

impl Matcher {
    /// On match, returns the argument (None for exact matches)
    fn matches<'a>(&self, command: &'a str) -> Option<Option<&'a str>> {
        match *self {
            Matcher::Exact(word) => (command == word).then_some(None),
            Matcher::WithArgument(verb) => {
                let (head, rest) = command.split_once(char::is_whitespace)?;
                let rest = rest.trim();
                (head == verb && !rest.is_empty()).then_some(Some(rest))
            }
        }
    }

    /// Command text as shown in listings
    pub fn label(&self) -> String {
        match self {
            Matcher::Exact(word) => (*word).to_string(),
            Matcher::WithArgument(verb) => format!("{} <n>", verb),
        }
    }
}

/// What a handler sees
pub struct Invocation<'a> {
    pub state: &'a ShellState,
    /// Trimmed, lowercased input
    pub command: &'a str,
    /// Argument for `WithArgument` routes
    pub argument: Option<&'a str>,
}

/// What a handler produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub response: Option<Response>,
    pub mutations: Vec<Mutation>,
    /// Whether the submitted line goes into history
    pub record: bool,
}

impl Reply {
    fn respond(response: Response) -> Self {
        Self {
            response: Some(response),
            mutations: Vec::new(),
            record: true,
        }
    }

    fn with(mut self, mutation: Mutation) -> Self {
        self.mutations.push(mutation);
        self
    }
}

pub type Handler = fn(&Invocation<'_>) -> Reply;

/// One entry of the dispatch table
pub struct Route {
    pub scope: Scope,
    pub matcher: Matcher,
    handler: Handler,
}

impl Route {
    const fn new(scope: Scope, matcher: Matcher, handler: Handler) -> Self {
        Self {
            scope,
            matcher,
            handler,
        }
    }

    pub fn run(&self, invocation: &Invocation<'_>) -> Reply {
        (self.handler)(invocation)
    }
}

use Matcher::{Exact, WithArgument};
use Scope::{Focused, Global};

static ROUTES: &[Route] = &[
    // Projects module
    Route::new(Focused(Module::Projects), Exact("ls"), list_projects),
    Route::new(Focused(Module::Projects), WithArgument("open"), open_project),
    // Skills module
    Route::new(Focused(Module::Skills), Exact("analyze"), analyze_skills),
    Route::new(Focused(Module::Skills), Exact("graph"), skills_graph),
    // Global
    Route::new(Global, Exact("help"), help),
    Route::new(Global, Exact("clear"), clear),
    Route::new(Global, Exact("whoami"), whoami),
    Route::new(Global, Exact("modules"), modules),
    Route::new(Global, Exact("scan"), scan),
    Route::new(Global, Exact("credits"), credits),
    Route::new(Global, Exact("session"), session),
    Route::new(Global, Exact("recruiter --summary"), recruiter_on),
    Route::new(Global, Exact("recruiter --off"), recruiter_off),
    Route::new(Global, Exact("home"), home),
    Route::new(Global, Exact("root"), home),
    Route::new(Global, Exact("about"), open_module),
    Route::new(Global, Exact("projects"), open_module),
    Route::new(Global, Exact("skills"), open_module),
    Route::new(Global, Exact("experience"), open_module),
    Route::new(Global, Exact("contact"), open_module),
];

/// The full dispatch table
pub fn routes() -> &'static [Route] {
    ROUTES
}

/// Find the route for a normalized command under the given focus
pub fn resolve<'c>(
    focus: Option<Module>,
    command: &'c str,
) -> Option<(&'static Route, Option<&'c str>)> {
    let scoped = focus.into_iter().flat_map(|module| {
        ROUTES
            .iter()
            .filter(move |route| route.scope == Focused(module))
    });
    let global = ROUTES.iter().filter(|route| route.scope == Global);

    scoped
        .chain(global)
        .find_map(|route| route.matcher.matches(command).map(|arg| (route, arg)))
}

/// Interpret one submitted line against the current state
pub fn interpret(state: &ShellState, line: &str) -> Outcome {
    let command = line.trim().to_lowercase();
    if command.is_empty() {
        return Outcome::default();
    }

    let reply = match resolve(state.focus, &command) {
        Some((route, argument)) => route.run(&Invocation {
            state,
            command: &command,
            argument,
        }),
        None => Reply::respond(Response::error(NOT_FOUND)),
    };

    tracing::debug!(
        command = %command,
        focus = ?state.focus,
        category = ?reply.response.as_ref().map(|r| r.category),
        "interpreted"
    );

    let mut mutations = reply.mutations;
    if reply.record {
        mutations.push(Mutation::AppendHistory(line.to_string()));
    }
    Outcome {
        response: reply.response,
        mutations,
    }
}

fn list_projects(_: &Invocation<'_>) -> Reply {
    let listing = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {} [{}]", i + 1, p.name, p.status))
        .collect::<Vec<_>>()
        .join("  |  ");
    Reply::respond(Response::info(listing))
}

fn open_project(inv: &Invocation<'_>) -> Reply {
    let project = inv
        .argument
        // Digits only: usize parsing would also take a leading '+'
        .filter(|arg| !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|arg| arg.parse::<usize>().ok())
        .and_then(project_by_index);
    match project {
        Some(p) => Reply::respond(Response::success(format!("Focusing project: {}", p.name))),
        None => Reply::respond(Response::error(UNKNOWN_PROJECT_INDEX)),
    }
}

fn analyze_skills(_: &Invocation<'_>) -> Reply {
    Reply::respond(Response::info(
        "Profile analysis: strongest areas → Frontend UI, Backend APIs, AI integrations.",
    ))
}

fn skills_graph(_: &Invocation<'_>) -> Reply {
    Reply::respond(Response::success("Activating skills graph overlay…"))
        .with(Mutation::TriggerGraphOverlay)
}

fn help(_: &Invocation<'_>) -> Reply {
    // Back to home so the console is in view
    Reply {
        response: Some(Response::info(HELP_TEXT)),
        mutations: vec![Mutation::ClearFocus],
        record: true,
    }
}

fn clear(_: &Invocation<'_>) -> Reply {
    Reply {
        response: None,
        mutations: vec![Mutation::ClearHistory, Mutation::ClearConsole],
        record: false,
    }
}

fn whoami(_: &Invocation<'_>) -> Reply {
    Reply::respond(Response::success(
        "Full Stack Developer | AI Enthusiast | Problem Solver",
    ))
}

fn modules(_: &Invocation<'_>) -> Reply {
    let listing = Module::ALL
        .iter()
        .map(|m| format!("{}/", m.id()))
        .collect::<Vec<_>>()
        .join(", ");
    Reply::respond(Response::info(format!("Modules: {}", listing)))
}

fn scan(_: &Invocation<'_>) -> Reply {
    Reply::respond(Response::info(
        "Running full system scan... all modules responsive, latency stable, visual core at 120 FPS.",
    ))
}

fn credits(_: &Invocation<'_>) -> Reply {
    Reply::respond(Response::info(
        "Interface crafted by you. Powered by Rust, ratatui, and a custom QUANTUM_PORTFOLIO_OS shell.",
    ))
}

fn session(inv: &Invocation<'_>) -> Reply {
    let recent = inv.state.history.recent(SESSION_SUMMARY_LEN);
    let text = if recent.is_empty() {
        "Session is empty. Start exploring modules and typing commands.".to_string()
    } else {
        format!("Session: {}", recent.join(" ▪ "))
    };
    Reply::respond(Response::info(text))
}

fn recruiter_on(_: &Invocation<'_>) -> Reply {
    Reply::respond(Response::success(
        "Optimized view for fast evaluation. Highlighting key projects and core stack.",
    ))
    .with(Mutation::SetRecruiterMode(true))
}

fn recruiter_off(_: &Invocation<'_>) -> Reply {
    Reply::respond(Response::success(
        "Recruiter mode disabled. Restoring full interface.",
    ))
    .with(Mutation::SetRecruiterMode(false))
}

fn home(_: &Invocation<'_>) -> Reply {
    Reply::respond(Response::success("Returning to system home view..."))
        .with(Mutation::ClearFocus)
}

fn open_module(inv: &Invocation<'_>) -> Reply {
    match Module::parse(inv.command) {
        Some(module) => Reply::respond(Response::success(format!("Opening {}...", module.id())))
            .with(Mutation::SetFocus(module)),
        None => Reply::respond(Response::error(NOT_FOUND)),
    }
}
