//! `cpm help [command]` and `cpm version`

use super::{CommandKind, Context};
use crate::flags::ParsedArgs;
use crate::ui::Table;
use anyhow::Result;
use colored::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn help(args: &ParsedArgs, ctx: &mut Context) -> Result<()> {
    if let Some(name) = args.positional(0) {
        let kind = CommandKind::from_name(name)?;
        ctx.logger.custom(kind.description(), kind.name(), "cyan");
        let table = detail_table(kind);
        if ctx.logger.is_enabled() {
            table.print();
        }
        return Ok(());
    }

    ctx.logger.custom(
        &format!("{} v{VERSION}, the C/C++ project scaffolder", "cpm".bold().cyan()),
        "help",
        "cyan",
    );
    ctx.logger
        .custom("usage: cpm <command> [args...] [-flags...]", "help", "cyan");

    if ctx.logger.is_enabled() {
        command_table().print();
    }
    Ok(())
}

pub fn version(ctx: &mut Context) -> Result<()> {
    ctx.logger.custom(&format!("cpm version {VERSION}"), "version", "red");
    Ok(())
}

fn command_table() -> Table {
    let mut table = Table::new(&["Command", "Arguments", "Description"]);
    for kind in CommandKind::ALL {
        table.add_row(vec![
            kind.name().to_string(),
            kind.arguments().to_string(),
            kind.description().to_string(),
        ]);
    }
    table
}

fn detail_table(kind: CommandKind) -> Table {
    let mut table = Table::new(&["Arguments", "Flags", "Project"]);
    let project = if kind.requires_project() {
        "required"
    } else {
        "not required"
    };
    table.add_row(vec![
        kind.arguments().to_string(),
        kind.flags().to_string(),
        project.to_string(),
    ]);
    table
}
