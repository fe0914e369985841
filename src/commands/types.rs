//! `cpm class` and `cpm struct`

use super::Context;
use crate::config::ProjectConfig;
use crate::flags::ParsedArgs;
use crate::header::Access;
use crate::paths;
use crate::scaffold::{self, ClassVariant, GeneratedPair, ParentSpec};
use anyhow::Result;

const PARENT_FLAGS: [&str; 2] = ["p", "parent"];

/// Inheritance access from `-protected` / `-private`, public otherwise.
fn inherit_access(args: &ParsedArgs) -> Access {
    if args.has_flag("protected") {
        Access::Protected
    } else if args.has_flag("private") {
        Access::Private
    } else {
        Access::Public
    }
}

fn parent_spec(args: &ParsedArgs) -> Option<ParentSpec> {
    args.flag_value_any(&PARENT_FLAGS).map(|token| ParentSpec {
        token: token.to_string(),
        access: inherit_access(args),
    })
}

/// Picks the class variant. Priority: singleton, interface, inherit, plain.
fn class_variant(args: &ParsedArgs) -> ClassVariant {
    if args.has_flag("singleton") {
        ClassVariant::Singleton
    } else if args.has_flag("interface") {
        ClassVariant::Interface(args.positionals[1..].to_vec())
    } else if let Some(spec) = parent_spec(args) {
        ClassVariant::Inherit(spec)
    } else {
        ClassVariant::Plain
    }
}

/// Rejects the whole batch before anything is written.
fn check_names(names: &[String], parent: Option<&ParentSpec>) -> Result<()> {
    for name in names {
        paths::validate_name("name", name)?;
    }
    if let Some(parent) = parent {
        paths::validate_name("parent", &parent.token)?;
    }
    Ok(())
}

fn report(ctx: &Context, name: &str, generated: &GeneratedPair) {
    if let Some(parent) = &generated.promoted_parent {
        ctx.logger.warn_q(
            "had its first private section changed to protected",
            &parent.display().to_string(),
        );
    }
    ctx.logger.success_q(
        &format!(
            "created ({}, {})",
            generated.paths.header.display(),
            generated.paths.source.display()
        ),
        name,
    );
}

pub fn class_pair(args: &ParsedArgs, ctx: &mut Context) -> Result<()> {
    let config = ProjectConfig::from_store(ctx.store)?;
    let use_hpp = args.has_flag("hpp");
    let variant = class_variant(args);

    // An interface's extra positionals are its methods, not more classes.
    let names = match variant {
        ClassVariant::Interface(_) => &args.positionals[..1],
        _ => &args.positionals[..],
    };
    check_names(names, parent_spec(args).as_ref())?;

    for name in names {
        let generated = scaffold::generate_class(&ctx.root, &config, name, use_hpp, &variant)?;
        report(ctx, name, &generated);
    }

    Ok(())
}

pub fn struct_pair(args: &ParsedArgs, ctx: &mut Context) -> Result<()> {
    let config = ProjectConfig::from_store(ctx.store)?;
    let use_hpp = args.has_flag("hpp");
    let parent = parent_spec(args);
    check_names(&args.positionals, parent.as_ref())?;

    for name in &args.positionals {
        let generated =
            scaffold::generate_struct(&ctx.root, &config, name, use_hpp, parent.as_ref())?;
        report(ctx, name, &generated);
    }

    Ok(())
}
