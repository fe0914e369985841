//! `cpm fpair <create|remove> <name>... [-hpp]`

use super::Context;
use crate::config::ProjectConfig;
use crate::error::CpmError;
use crate::flags::ParsedArgs;
use crate::paths;
use crate::scaffold;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairOp {
    Create,
    Remove,
}

pub fn file_pair(args: &ParsedArgs, ctx: &mut Context) -> Result<()> {
    let op = match args.positional(0) {
        Some("create") => PairOp::Create,
        Some("remove") => PairOp::Remove,
        other => {
            return Err(CpmError::InvalidSubcommand {
                command: "fpair".to_string(),
                sub: other.unwrap_or_default().to_string(),
            }
            .into());
        }
    };

    let config = ProjectConfig::from_store(ctx.store)?;
    let use_hpp = args.has_flag("hpp");

    let names = &args.positionals[1..];
    for name in names {
        paths::validate_name("name", name)?;
    }

    for name in names {
        match op {
            PairOp::Create => {
                let paths = scaffold::create_pair(&ctx.root, &config, name, use_hpp)?;
                ctx.logger.success_q(
                    &format!(
                        "created ({}, {})",
                        paths.header.display(),
                        paths.source.display()
                    ),
                    name,
                );
            }
            PairOp::Remove => {
                let removed = scaffold::remove_pair(&ctx.root, name)?;
                if removed.is_empty() {
                    ctx.logger.warn_q("has no files to remove", name);
                } else {
                    ctx.logger
                        .success_q(&format!("removed {} file(s)", removed.len()), name);
                }
            }
        }
    }

    Ok(())
}
