//! Interactive REPL (Read-Eval-Print Loop) for Keepsake.
//!
//! Each line is parsed into a [`ReplCommand`], applied to the session and
//! answered with the re-rendered view.

use std::fs;
use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper, Result as RlResult};
use tracing::debug;

use keepsake_core::result_summary;
use keepsake_core::views::group_by_year;

use crate::render;
use crate::session::{FilterField, Session, ViewMode};

/// Help information for a command.
pub struct CommandHelp {
    /// Command name (e.g., "open").
    pub name: &'static str,
    /// Command aliases (e.g., ["o"]).
    pub aliases: &'static [&'static str],
    /// Brief one-line description.
    pub brief: &'static str,
    /// Usage syntax.
    pub usage: &'static str,
    /// Examples with descriptions.
    pub examples: &'static [(&'static str, &'static str)],
}

/// Static help entries for all commands.
static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "demo",
        aliases: &[],
        brief: "Load the demo memories",
        usage: "/demo",
        examples: &[("/demo", "Replace the gallery with five sample memories")],
    },
    CommandHelp {
        name: "upload",
        aliases: &["u"],
        brief: "Upload photos, JSON or text files",
        usage: "/upload <file> [file...]",
        examples: &[("/upload beach.jpg notes.txt", "Upload two files")],
    },
    CommandHelp {
        name: "view",
        aliases: &["v"],
        brief: "Switch view (memories, timeline, map, people, stats)",
        usage: "/view <memories|timeline|map|people|stats>",
        examples: &[
            ("/view timeline", "Show memories grouped by year"),
            ("/v stats", "Show statistics"),
        ],
    },
    CommandHelp {
        name: "list",
        aliases: &["ls", "l"],
        brief: "Show the current view again",
        usage: "/list",
        examples: &[("/ls", "Same as /list")],
    },
    CommandHelp {
        name: "search",
        aliases: &["find"],
        brief: "Search title, story, place, people and notes",
        usage: "/search [text]",
        examples: &[
            ("/search beach", "Memories mentioning the beach"),
            ("/search", "Remove the search"),
        ],
    },
    CommandHelp {
        name: "year",
        aliases: &[],
        brief: "Filter by year",
        usage: "/year <year|all>",
        examples: &[("/year 2018", "Only 2018"), ("/year all", "Any year")],
    },
    CommandHelp {
        name: "location",
        aliases: &["place"],
        brief: "Filter by location",
        usage: "/location <place|all>",
        examples: &[("/location Home", "Only memories at Home")],
    },
    CommandHelp {
        name: "people",
        aliases: &[],
        brief: "Show everyone tagged, or the memories of one person",
        usage: "/people [name]",
        examples: &[
            ("/people", "Switch to the people view"),
            ("/people Emma Smith", "Memories Emma appears in"),
        ],
    },
    CommandHelp {
        name: "person",
        aliases: &[],
        brief: "Filter by tagged person",
        usage: "/person <name|all>",
        examples: &[("/person Emma Smith", "Memories with Emma")],
    },
    CommandHelp {
        name: "emotion",
        aliases: &["feeling"],
        brief: "Filter by emotion",
        usage: "/emotion <emotion|all>",
        examples: &[("/emotion joyful", "Joyful memories")],
    },
    CommandHelp {
        name: "category",
        aliases: &[],
        brief: "Filter by category",
        usage: "/category <category|all>",
        examples: &[("/category Holiday", "Holiday memories")],
    },
    CommandHelp {
        name: "clear",
        aliases: &[],
        brief: "Remove all filters",
        usage: "/clear",
        examples: &[],
    },
    CommandHelp {
        name: "facets",
        aliases: &["options"],
        brief: "Show the values each filter accepts",
        usage: "/facets",
        examples: &[],
    },
    CommandHelp {
        name: "open",
        aliases: &["o"],
        brief: "Open a memory",
        usage: "/open <id>",
        examples: &[("/open 3", "Open memory 3")],
    },
    CommandHelp {
        name: "next",
        aliases: &["n"],
        brief: "Next memory in the current results",
        usage: "/next",
        examples: &[],
    },
    CommandHelp {
        name: "prev",
        aliases: &["previous", "p"],
        brief: "Previous memory in the current results",
        usage: "/prev",
        examples: &[],
    },
    CommandHelp {
        name: "close",
        aliases: &[],
        brief: "Close the open memory",
        usage: "/close",
        examples: &[],
    },
    CommandHelp {
        name: "notes",
        aliases: &[],
        brief: "Show or replace the notes of the open memory",
        usage: "/notes [text]",
        examples: &[("/notes She loved the sea", "Save notes")],
    },
    CommandHelp {
        name: "tag",
        aliases: &[],
        brief: "Tag a person on the open memory",
        usage: "/tag <name>",
        examples: &[("/tag Sarah Johnson", "Tag Sarah")],
    },
    CommandHelp {
        name: "untag",
        aliases: &[],
        brief: "Remove a person from the open memory",
        usage: "/untag <name>",
        examples: &[],
    },
    CommandHelp {
        name: "narrate",
        aliases: &["read"],
        brief: "Show the read-aloud text of the open memory",
        usage: "/narrate",
        examples: &[],
    },
    CommandHelp {
        name: "ambient",
        aliases: &["slideshow"],
        brief: "Ambient slideshow of all memories",
        usage: "/ambient [next|prev|pause|play|toggle|stop]",
        examples: &[
            ("/ambient", "Start from the first memory"),
            ("/ambient next", "Show the next slide"),
            ("/ambient toggle", "Pause or resume"),
            ("/ambient stop", "Leave ambient mode"),
        ],
    },
    CommandHelp {
        name: "map-token",
        aliases: &[],
        brief: "Set the map provider token for this session",
        usage: "/map-token <token>",
        examples: &[],
    },
    CommandHelp {
        name: "help",
        aliases: &["h", "?"],
        brief: "Show help",
        usage: "/help [command]",
        examples: &[("/help ambient", "Detailed help for /ambient")],
    },
    CommandHelp {
        name: "quit",
        aliases: &["q", "exit"],
        brief: "Exit the REPL",
        usage: "/quit",
        examples: &[],
    },
];

/// Tab completion for slash commands.
struct CommandCompleter;

impl CommandCompleter {
    const COMMANDS: &'static [&'static str] = &[
        "/ambient", "/category", "/clear", "/close", "/demo", "/emotion", "/facets", "/help",
        "/list", "/location", "/map-token", "/narrate", "/next", "/notes", "/open", "/people", "/person",
        "/prev", "/quit", "/search", "/tag", "/untag", "/upload", "/view", "/year",
    ];
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let prefix = &line[..pos];
        let matches: Vec<Pair> = Self::COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// Ambient slideshow actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientAction {
    Start,
    Next,
    Previous,
    Pause,
    Play,
    Toggle,
    Stop,
}

/// Slash commands available in the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Load the demo dataset
    Demo,
    /// Upload files by name
    Upload(Vec<String>),
    /// Switch view, or show the current one
    View(Option<String>),
    /// Re-render the current view
    List,
    /// Set or remove the free-text query
    Search(Option<String>),
    /// Set one filter dimension
    Filter(FilterField, String),
    /// Remove all filters
    Clear,
    /// Show filter options
    Facets,
    /// Open a memory in the viewer
    Open(String),
    Next,
    Previous,
    Close,
    /// Show (None) or replace the notes of the open memory
    Notes(Option<String>),
    Tag(String),
    Untag(String),
    Narrate,
    Ambient(AmbientAction),
    MapToken(String),
    /// People view, or one person's memories
    People(Option<String>),
    /// Show help (optionally for a specific command)
    Help(Option<String>),
    Quit,
    /// Unknown command or bad arguments
    Unknown(String),
    /// Plain text (searched for)
    Text(String),
}

impl ReplCommand {
    /// Parses input into a REPL command.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        let Some(stripped) = input.strip_prefix('/') else {
            return ReplCommand::Text(input.to_string());
        };

        let parts: Vec<&str> = stripped.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let arg = parts
            .get(1)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let required = |name: &str, arg: Option<String>, make: fn(String) -> ReplCommand| {
            arg.map(make)
                .unwrap_or_else(|| ReplCommand::Unknown(format!("{} requires an argument", name)))
        };

        match cmd.as_str() {
            "demo" => ReplCommand::Demo,
            "upload" | "u" => match arg {
                Some(files) => {
                    ReplCommand::Upload(files.split_whitespace().map(String::from).collect())
                }
                None => ReplCommand::Unknown("upload requires at least one file".to_string()),
            },
            "view" | "v" => ReplCommand::View(arg),
            "list" | "ls" | "l" => ReplCommand::List,
            "search" | "find" => ReplCommand::Search(arg),
            "year" => Self::filter(FilterField::Year, arg),
            "location" | "place" => Self::filter(FilterField::Location, arg),
            "people" => ReplCommand::People(arg),
            "person" => Self::filter(FilterField::Person, arg),
            "emotion" | "feeling" => Self::filter(FilterField::Emotion, arg),
            "category" => Self::filter(FilterField::Category, arg),
            "clear" => ReplCommand::Clear,
            "facets" | "options" => ReplCommand::Facets,
            "open" | "o" => required("open", arg, ReplCommand::Open),
            "next" | "n" => ReplCommand::Next,
            "prev" | "previous" | "p" => ReplCommand::Previous,
            "close" => ReplCommand::Close,
            "notes" => ReplCommand::Notes(arg),
            "tag" => required("tag", arg, ReplCommand::Tag),
            "untag" => required("untag", arg, ReplCommand::Untag),
            "narrate" | "read" => ReplCommand::Narrate,
            "ambient" | "slideshow" => Self::parse_ambient(arg.as_deref()),
            "map-token" => required("map-token", arg, ReplCommand::MapToken),
            "help" | "h" | "?" => ReplCommand::Help(arg),
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(cmd),
        }
    }

    fn filter(field: FilterField, arg: Option<String>) -> Self {
        // A bare filter command resets that dimension.
        ReplCommand::Filter(field, arg.unwrap_or_default())
    }

    fn parse_ambient(arg: Option<&str>) -> Self {
        let action = match arg.map(str::to_lowercase).as_deref() {
            None | Some("start") => AmbientAction::Start,
            Some("next") => AmbientAction::Next,
            Some("prev") | Some("previous") => AmbientAction::Previous,
            Some("pause") => AmbientAction::Pause,
            Some("play") | Some("resume") => AmbientAction::Play,
            Some("toggle") => AmbientAction::Toggle,
            Some("stop") | Some("exit") => AmbientAction::Stop,
            Some(other) => return ReplCommand::Unknown(format!("ambient {}", other)),
        };
        ReplCommand::Ambient(action)
    }
}

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Print(String),
    Quit,
}

/// Applies a command to the session.
pub fn dispatch(
    session: &mut Session,
    cmd: ReplCommand,
) -> Result<Reply, Box<dyn std::error::Error>> {
    let text = match cmd {
        ReplCommand::Demo => {
            session.enter_demo();
            format!("Demo memories loaded.\n\n{}", render_view(session))
        }
        ReplCommand::Upload(files) => {
            let accepted = session.upload(&files)?;
            format!(
                "{} file(s) received. Photo analysis is not available yet, showing demo memories.\n\n{}",
                accepted,
                render_view(session)
            )
        }
        ReplCommand::View(None) => format!("Current view: {}", session.view()),
        ReplCommand::View(Some(name)) => {
            let view: ViewMode = name.parse()?;
            session.set_view(view);
            render_view(session)
        }
        ReplCommand::List => render_view(session),
        ReplCommand::Search(query) => {
            session.set_query(query.as_deref().unwrap_or(""));
            render_view(session)
        }
        ReplCommand::Text(text) => {
            if text.is_empty() {
                return Ok(Reply::Print(String::new()));
            }
            session.set_query(&text);
            render_view(session)
        }
        ReplCommand::Filter(field, value) => {
            session.set_filter(field, &value)?;
            render_view(session)
        }
        ReplCommand::Clear => {
            session.clear_filters();
            render_view(session)
        }
        ReplCommand::Facets => render::facets(&session.facets()),
        ReplCommand::Open(id) => {
            session.open(&id)?;
            render_selected(session)?
        }
        ReplCommand::Next => {
            if !session.next() {
                return Ok(Reply::Print("Already at the last memory.".to_string()));
            }
            render_selected(session)?
        }
        ReplCommand::Previous => {
            if !session.previous() {
                return Ok(Reply::Print("Already at the first memory.".to_string()));
            }
            render_selected(session)?
        }
        ReplCommand::Close => {
            session.close();
            render_view(session)
        }
        ReplCommand::Notes(None) => {
            let memory = session.selected().ok_or("No memory open. Use /open <id> first.")?;
            match memory.user_notes.as_deref().filter(|n| !n.is_empty()) {
                Some(notes) => notes.to_string(),
                None => "No notes yet.".to_string(),
            }
        }
        ReplCommand::Notes(Some(notes)) => {
            session.save_notes(&notes)?;
            "Notes saved.".to_string()
        }
        ReplCommand::Tag(name) => {
            if session.tag(&name)? {
                "People updated.".to_string()
            } else {
                format!("'{}' is already tagged.", name.trim())
            }
        }
        ReplCommand::Untag(name) => {
            if session.untag(&name)? {
                "People updated.".to_string()
            } else {
                format!("'{}' is not tagged.", name)
            }
        }
        ReplCommand::Narrate => {
            let memory = session.selected().ok_or("No memory open. Use /open <id> first.")?;
            render::narration(memory, &session.config().narration)
        }
        ReplCommand::Ambient(action) => return dispatch_ambient(session, action),
        ReplCommand::MapToken(token) => {
            session.set_map_token(&token)?;
            "Map token saved for this session.".to_string()
        }
        ReplCommand::People(None) => {
            session.set_view(ViewMode::People);
            render_view(session)
        }
        ReplCommand::People(Some(name)) => render::person_memories(
            name.trim(),
            &session.person_memories(&name),
            session.engine().offset(),
        ),
        ReplCommand::Help(topic) => help_text(topic.as_deref()),
        ReplCommand::Quit => return Ok(Reply::Quit),
        ReplCommand::Unknown(what) => format!(
            "Unknown command: {}. Type /help for available commands.",
            what
        ),
    };

    Ok(Reply::Print(text))
}

fn dispatch_ambient(
    session: &mut Session,
    action: AmbientAction,
) -> Result<Reply, Box<dyn std::error::Error>> {
    match action {
        AmbientAction::Start => session.start_ambient()?,
        AmbientAction::Next => session.with_ambient(|c, len| c.advance(len))?,
        AmbientAction::Previous => session.with_ambient(|c, len| c.back(len))?,
        AmbientAction::Pause => session.with_ambient(|c, _| c.pause())?,
        AmbientAction::Play => session.with_ambient(|c, _| c.resume())?,
        AmbientAction::Toggle => session.with_ambient(|c, _| c.toggle())?,
        AmbientAction::Stop => {
            session.stop_ambient();
            return Ok(Reply::Print("Left ambient mode.".to_string()));
        }
    }

    let len = session.collection().len();
    let slide = match (session.ambient_memory(), session.ambient()) {
        (Some(memory), Some(cursor)) => {
            render::ambient(memory, cursor, len, session.engine().offset())
        }
        _ => "Nothing to show.".to_string(),
    };
    Ok(Reply::Print(slide))
}

/// Renders whatever the current view shows.
pub fn render_view(session: &Session) -> String {
    let offset = session.engine().offset();
    match session.view() {
        ViewMode::Upload => {
            "No memories loaded. Use /demo or /upload <files> to begin.".to_string()
        }
        ViewMode::Memories => {
            let visible = session.visible();
            let mut text = render::memory_table(&visible, offset);
            if session.filter().is_active() {
                text.push_str("\n\n");
                text.push_str(&result_summary(visible.len(), session.collection().len()));
            }
            text
        }
        ViewMode::Timeline => render::timeline(&group_by_year(session.visible(), offset), offset),
        ViewMode::Map => render::map(&session.map_view()),
        ViewMode::People => render::people(&session.people_directory()),
        ViewMode::Stats => render::stats(&session.stats()),
    }
}

fn render_selected(session: &Session) -> Result<String, Box<dyn std::error::Error>> {
    let memory = session.selected().ok_or("No memory open.")?;
    Ok(render::memory_detail(
        memory,
        session.engine().offset(),
        session.position().as_ref(),
    ))
}

/// REPL state
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    session: Session,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL instance around a session.
    pub fn new(session: Session) -> RlResult<Self> {
        let config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CommandCompleter));

        let history_path = session.config().history_file();
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        Ok(Self {
            editor,
            session,
            history_path: Some(history_path),
        })
    }

    /// Runs the REPL loop.
    pub fn run(&mut self) -> RlResult<()> {
        println!("Keepsake REPL v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Type /help for commands, /quit to exit ({} theme)",
            self.session.config().theme
        );
        println!();
        println!("{}", render_view(&self.session));
        println!();

        loop {
            let prompt = self.prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    self.editor.add_history_entry(&line)?;

                    let cmd = ReplCommand::parse(&line);
                    debug!(?cmd, "Parsed command");

                    match dispatch(&mut self.session, cmd) {
                        Ok(Reply::Quit) => break,
                        Ok(Reply::Print(text)) => {
                            if !text.is_empty() {
                                println!("{}", text);
                            }
                        }
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.history_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = self.editor.save_history(path);
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Returns the prompt string.
    fn prompt(&self) -> String {
        if self.session.ambient().is_some() {
            return "keepsake [ambient]> ".to_string();
        }
        match self.session.selected() {
            Some(memory) => format!("keepsake [{}:{}]> ", self.session.view(), memory.id),
            None => format!("keepsake [{}]> ", self.session.view()),
        }
    }
}

/// Finds help for a command by name or alias.
fn find_command_help(name: &str) -> Option<&'static CommandHelp> {
    let name_lower = name.trim_start_matches('/').to_lowercase();
    COMMAND_HELP
        .iter()
        .find(|h| h.name == name_lower || h.aliases.contains(&name_lower.as_str()))
}

/// Help for one command, or the command overview.
fn help_text(topic: Option<&str>) -> String {
    let mut lines = Vec::new();
    match topic {
        Some(cmd) => match find_command_help(cmd) {
            Some(help) => {
                lines.push(format!("/{} - {}", help.name, help.brief));
                if !help.aliases.is_empty() {
                    lines.push(format!("Aliases: {}", help.aliases.join(", ")));
                }
                lines.push(String::new());
                lines.push("Usage:".to_string());
                lines.push(format!("  {}", help.usage));
                if !help.examples.is_empty() {
                    lines.push(String::new());
                    lines.push("Examples:".to_string());
                    for (example, desc) in help.examples {
                        lines.push(format!("  {}  # {}", example, desc));
                    }
                }
            }
            None => lines.push(format!(
                "Unknown command: {}. Type /help for available commands.",
                cmd
            )),
        },
        None => {
            lines.push("Keepsake REPL - your memories, narrated".to_string());
            lines.push(String::new());
            lines.push("COMMANDS:".to_string());
            for help in COMMAND_HELP {
                lines.push(format!("  {:<42} {}", help.usage, help.brief));
            }
            lines.push(String::new());
            lines.push("Plain text without a slash searches your memories.".to_string());
            lines.push("Type /help <command> for detailed help on a specific command.".to_string());
        }
    }
    lines.join("\n")
}
