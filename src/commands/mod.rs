//! CLI command handlers
//!
//! Each command is one variant of [`CommandKind`], which also carries the
//! metadata `cpm help` prints and the checks `run` applies before dispatch.

pub mod check;
pub mod config;
pub mod create;
pub mod fpair;
pub mod help;
pub mod types;

use crate::error::CpmError;
use crate::flags::ParsedArgs;
use crate::logger::Logger;
use crate::store::{ProjectStore, STORE_FILE};
use crate::toolchain::Shell;
use crate::ui::Prompter;
use anyhow::Result;
use std::path::PathBuf;

/// Everything a handler may touch. Built once in `main`.
pub struct Context<'a> {
    pub root: PathBuf,
    pub logger: &'a Logger,
    pub store: &'a mut ProjectStore,
    pub prompter: &'a mut dyn Prompter,
    pub shell: &'a dyn Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Create,
    Fpair,
    Class,
    Struct,
    Config,
    Help,
    Version,
    Test,
}

impl CommandKind {
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Create,
        CommandKind::Fpair,
        CommandKind::Class,
        CommandKind::Struct,
        CommandKind::Config,
        CommandKind::Help,
        CommandKind::Version,
        CommandKind::Test,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Create => "create",
            CommandKind::Fpair => "fpair",
            CommandKind::Class => "class",
            CommandKind::Struct => "struct",
            CommandKind::Config => "config",
            CommandKind::Help => "help",
            CommandKind::Version => "version",
            CommandKind::Test => "test",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CpmError> {
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| CpmError::InvalidCommand(name.to_string()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommandKind::Create => "Creates a new project in the working directory",
            CommandKind::Fpair => "Creates or removes header/source file pairs",
            CommandKind::Class => "Creates a class header/source pair",
            CommandKind::Struct => "Creates a struct header/source pair",
            CommandKind::Config => "Sets or removes a value in cpm.toml",
            CommandKind::Help => "Lists commands or describes one command",
            CommandKind::Version => "Logs the installed version of cpm",
            CommandKind::Test => "Checks the project state and tooling",
        }
    }

    pub fn arguments(&self) -> &'static str {
        match self {
            CommandKind::Create => "<c|cpp>",
            CommandKind::Fpair => "<create|remove> <name>...",
            CommandKind::Class => "<name>... | <name> <method>... (with -interface)",
            CommandKind::Struct => "<name>...",
            CommandKind::Config => "<set|remove> <key> [value]",
            CommandKind::Help => "[command]",
            CommandKind::Version | CommandKind::Test => "None",
        }
    }

    pub fn flags(&self) -> &'static str {
        match self {
            CommandKind::Create => "-std=<n> -name=<s> -structure=<executable|simple> -git -no-git",
            CommandKind::Fpair => "-hpp",
            CommandKind::Class => "-hpp -singleton -interface -p=<parent> -protected -private",
            CommandKind::Struct => "-hpp -p=<parent> -protected -private",
            CommandKind::Config | CommandKind::Help | CommandKind::Version | CommandKind::Test => {
                "None"
            }
        }
    }

    pub fn min_args(&self) -> usize {
        match self {
            CommandKind::Fpair | CommandKind::Config => 2,
            CommandKind::Create | CommandKind::Class | CommandKind::Struct => 1,
            CommandKind::Help | CommandKind::Version | CommandKind::Test => 0,
        }
    }

    /// Commands that need an initialised project (`cpm.toml` with a language).
    pub fn requires_project(&self) -> bool {
        matches!(
            self,
            CommandKind::Fpair | CommandKind::Class | CommandKind::Struct | CommandKind::Test
        )
    }

    /// Pure queries leave `cpm.toml` alone.
    pub fn persists_state(&self) -> bool {
        !matches!(self, CommandKind::Help | CommandKind::Version)
    }
}

/// Validates argument count and project state, then runs the handler.
pub fn run(kind: CommandKind, args: &ParsedArgs, ctx: &mut Context) -> Result<()> {
    let given = args.positionals.len();
    if given < kind.min_args() {
        return Err(CpmError::NotEnoughArguments {
            command: kind.name().to_string(),
            required: kind.min_args(),
            given,
        }
        .into());
    }

    if kind.requires_project() {
        if !ctx.store.exists_on_disk() {
            return Err(CpmError::MissingProjectState(STORE_FILE.to_string()).into());
        }
        if !ctx.store.has_key(crate::config::KEY_LANGUAGE) {
            return Err(CpmError::MissingProjectState(crate::config::KEY_LANGUAGE.to_string()).into());
        }
    }

    match kind {
        CommandKind::Create => create::create_project(args, ctx),
        CommandKind::Fpair => fpair::file_pair(args, ctx),
        CommandKind::Class => types::class_pair(args, ctx),
        CommandKind::Struct => types::struct_pair(args, ctx),
        CommandKind::Config => config::config(args, ctx),
        CommandKind::Help => help::help(args, ctx),
        CommandKind::Version => help::version(ctx),
        CommandKind::Test => check::self_test(ctx),
    }
}
