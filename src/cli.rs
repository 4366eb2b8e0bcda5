// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! Drives the command-line program.

pub use crate::github::client::Error;
use crate::conf;
use crate::filter::EventFilter;
use crate::github::Activity;
use crate::view::{ViewOptions, Viewable};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use colored::Colorize;
use indoc::indoc;
use log::{debug, warn};
use std::collections::HashSet;
use std::io::{self, IsTerminal};
use std::num::NonZeroUsize;
use std::process::ExitCode;
use thiserror::Error;

const EXAMPLES: &str = indoc! {"
    Examples:
      github-activity octocat
      github-activity torvalds --type=PushEvent --limit=5
      github-activity octocat --json
"};

/// Program configuration.
#[derive(Debug, Parser)]
#[command(name = "github-activity", version)]
#[command(about = "Fetch and display a GitHub user's recent public activity", long_about = None)]
#[command(disable_help_flag = true, after_help = EXAMPLES)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// GitHub username
    username: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,

    /// Only show events of this exact type, such as PushEvent
    #[arg(long = "type", value_name = "EVENT_TYPE")]
    event_type: Option<String>,

    /// Only show the first N events
    #[arg(long, value_name = "N", value_parser = parse_limit)]
    limit: Option<NonZeroUsize>,

    /// Print the raw JSON response; --type and --limit do not apply
    #[arg(long, default_value_t = false)]
    json: bool,

    /// When to colorize output
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Print help
    #[arg(short, long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    #[arg(skip)]
    ignored_flags: Vec<String>,
}

/// Determines when output is colorized.
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum ColorChoice {
    /// Colorize output when writing to a terminal.
    #[default]
    Auto,

    /// Always colorize output.
    Always,

    /// Never colorize output.
    Never,
}

/// The outcome of resolving command-line arguments.
#[derive(Debug)]
pub enum Resolution {
    /// Usage information was requested.
    Help,

    /// Activity should be fetched and displayed with the given configuration.
    Run(Config),
}

/// Indicates the command-line arguments cannot be used.
#[derive(Debug, Error)]
pub enum UsageError {
    /// No username was given.
    #[error("Please provide a GitHub username.")]
    MissingUsername,

    /// An argument was given an invalid value.
    #[error(transparent)]
    Invalid(#[from] clap::Error),
}

fn parse_limit(value: &str) -> Result<NonZeroUsize, String> {
    value
        .parse::<NonZeroUsize>()
        .map_err(|_| format!("'{value}' is not a positive integer"))
}

/// True if `arg` is a group of one or more declared short flags, like `-vv`.
fn is_short_cluster(arg: &str, shorts: &HashSet<char>) -> bool {
    arg.strip_prefix('-')
        .is_some_and(|cluster| !cluster.is_empty() && cluster.chars().all(|c| shorts.contains(&c)))
}

impl Config {
    /// Resolves command-line arguments, not including the program name,
    /// into a configuration.
    ///
    /// Help is requested when there are no arguments at all or when `-h` or
    /// `--help` appears anywhere. Long flags that are not understood are
    /// ignored. Any other argument that is not a declared flag, including
    /// `-` and unknown single-dash words, is positional, and the first
    /// positional argument is the username.
    pub fn resolve<I, T>(args: I) -> Result<Resolution, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if args.is_empty() || args.iter().any(|arg| arg == "--help" || arg == "-h") {
            return Ok(Resolution::Help);
        }

        let (known, ignored) = Self::partition_flags(args);
        let bin = env!("CARGO_PKG_NAME").to_string();
        let mut config = Config::try_parse_from(std::iter::once(bin).chain(known))?;
        config.ignored_flags = ignored;

        if config.username.is_none() {
            return Err(UsageError::MissingUsername);
        }
        Ok(Resolution::Run(config))
    }

    /// Splits arguments into those that clap should parse and long flags
    /// that should be ignored.
    ///
    /// Positional arguments are passed after `--` so that clap never reads
    /// a username such as `-foo` as a flag.
    fn partition_flags(args: Vec<String>) -> (Vec<String>, Vec<String>) {
        let mut command = Config::command();
        command.build();
        let shorts: HashSet<char> = command
            .get_arguments()
            .filter_map(|arg| arg.get_short())
            .collect();

        let mut flags = Vec::new();
        let mut positionals = Vec::new();
        let mut ignored = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if let Some(flag) = arg.strip_prefix("--") {
                let (name, inline_value) = match flag.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (flag, None),
                };
                let declared = command
                    .get_arguments()
                    .find(|def| !name.is_empty() && def.get_long() == Some(name));
                match declared {
                    Some(def) => {
                        let takes_next =
                            inline_value.is_none() && def.get_action().takes_values();
                        flags.push(arg);
                        if takes_next {
                            flags.extend(args.next());
                        }
                    }
                    None => ignored.push(arg),
                }
            } else if is_short_cluster(&arg, &shorts) {
                flags.push(arg);
            } else {
                positionals.push(arg);
            }
        }

        flags.push(String::from("--"));
        flags.extend(positionals);
        (flags, ignored)
    }

    /// Log verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// The GitHub user whose activity is displayed.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// Only events with exactly this type tag are displayed.
    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    /// At most this many events are displayed.
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// True if the raw JSON response should be printed.
    pub fn json(&self) -> bool {
        self.json
    }

    /// When output is colorized.
    pub fn color(&self) -> ColorChoice {
        self.color
    }

    /// Flags that were not understood and were ignored.
    pub fn ignored_flags(&self) -> &[String] {
        &self.ignored_flags
    }

    /// Positional arguments following the username, which are ignored.
    pub fn extra_args(&self) -> &[String] {
        &self.extra
    }
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the configured user's activity and returns the lines to print.
    ///
    /// Returns an error with a helpful message if the activity cannot be
    /// retrieved.
    pub async fn run(&self) -> Result<Vec<String>, Error> {
        let activity = Activity::fetch(self.config.username()).await?;
        self.render(&activity)
    }

    /// Renders `activity` into the lines to print.
    ///
    /// JSON output is the response as it was received, so only the line
    /// output fails if an event cannot be parsed.
    pub fn render(&self, activity: &Activity) -> Result<Vec<String>, Error> {
        let opts = ViewOptions::build()
            .color(self.config.color() != ColorChoice::Never)
            .locale(conf::locale())
            .build();

        if self.config.json() {
            if self.config.event_type().is_some() || self.config.limit().is_some() {
                warn!("--type and --limit are ignored when printing JSON");
            }
            return Ok(activity.raw().view(&opts).into_iter().collect());
        }

        if activity.is_empty() {
            return Ok(vec![format!(
                "No recent activity found for user: {}",
                activity.username()
            )]);
        }

        let all_events = activity.events()?;
        let filtered = EventFilter::new(&all_events)
            .event_type(self.config.event_type())
            .collect();
        if let (true, Some(event_type)) = (filtered.is_empty(), self.config.event_type()) {
            return Ok(vec![format!(
                "No {event_type} events found for user: {}",
                activity.username()
            )]);
        }

        let events = EventFilter::new(filtered).limit(self.config.limit()).collect();
        debug!("displaying {} of {} events", events.len(), all_events.len());
        Ok(events.iter().filter_map(|event| event.view(&opts)).collect())
    }
}

fn init_logging(config: &Config) {
    let _ = env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .try_init();
}

fn init_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto if !io::stdout().is_terminal() => {
            colored::control::set_override(false)
        }
        ColorChoice::Auto => {}
    }
}

fn print_help() -> ExitCode {
    match Config::command().print_help() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn usage_hint() -> String {
    Config::command().render_usage().to_string()
}

/// Runs the command-line program with the given arguments, not including
/// the program name, and returns the process exit code.
pub async fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let config = match Config::resolve(args) {
        Ok(Resolution::Help) => return print_help(),
        Ok(Resolution::Run(config)) => config,
        Err(UsageError::Invalid(err))
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(UsageError::Invalid(err)) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("{}", format!("❌ {err}").red());
            eprintln!("{}", usage_hint().blue());
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);
    init_color(config.color());
    for flag in config.ignored_flags() {
        debug!("ignoring unrecognized flag {flag}");
    }
    if !config.extra_args().is_empty() {
        debug!("ignoring extra arguments: {}", config.extra_args().join(" "));
    }

    match Runner::new(config).run().await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", format!("❌ {err}").red());
            ExitCode::FAILURE
        }
    }
}
