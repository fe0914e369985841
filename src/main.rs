//! # cpm CLI Entry Point
//!
//! Parses `cpm <command> [args...] [-flags...]`, runs the command against the
//! `cpm.toml` store of the working directory and writes the store back when a
//! mutating command succeeds.
//!
//! Flags use a single dash (`-hpp`, `-p=base`), so clap only captures the
//! command name and hands the remaining tokens to [`ParsedArgs`].

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use cpm::commands::{self, CommandKind, Context};
use cpm::flags::ParsedArgs;
use cpm::logger::Logger;
use cpm::store::ProjectStore;
use cpm::toolchain::{self, SystemShell};
use cpm::ui::InquirePrompter;

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
}

/// Box-drawing characters in `cpm help` need a UTF-8 console.
#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

#[derive(Parser)]
#[command(name = "cpm")]
#[command(about = "Scaffolds C/C++ projects, file pairs and classes")]
#[command(disable_help_subcommand = true)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Command to run (see `cpm help`)
    command: Option<String>,

    /// Positional arguments and `-flags` for the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    enable_windows_utf8_console();

    let cli = Cli::parse();
    let started = Instant::now();
    let logger = Logger::new();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            logger.error(&format!("cannot read working directory: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let outcome = dispatch(&cli, &root, &logger);
    toolchain::cleanup_scratch(&root);

    let code = match outcome {
        Ok(()) => 0,
        Err(e) => {
            logger.error(&format!("{e:#}"));
            1
        }
    };

    logger.custom(
        &format!(
            "command '{}' with exit code {code} in {} ms",
            cli.command.as_deref().unwrap_or("none"),
            started.elapsed().as_millis()
        ),
        "finished",
        "blue",
    );

    if code == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn dispatch(cli: &Cli, root: &Path, logger: &Logger) -> Result<()> {
    let mut store = ProjectStore::read(root)?;

    let Some(name) = cli.command.as_deref() else {
        anyhow::bail!("no command provided (run 'cpm help')");
    };
    let kind = CommandKind::from_name(name)?;
    let args = ParsedArgs::parse(&cli.args);
    logger.success_q("parsed command", kind.name());

    let mut prompter = InquirePrompter::new(logger);
    let shell = SystemShell;
    let mut ctx = Context {
        root: root.to_path_buf(),
        logger,
        store: &mut store,
        prompter: &mut prompter,
        shell: &shell,
    };
    commands::run(kind, &args, &mut ctx)?;

    if kind.persists_state() {
        store.write()?;
    }
    Ok(())
}
