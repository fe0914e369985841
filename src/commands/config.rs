//! `cpm config <set|remove> <key> [value]`

use super::Context;
use crate::config::validate_entry;
use crate::error::CpmError;
use crate::flags::ParsedArgs;
use anyhow::Result;

pub fn config(args: &ParsedArgs, ctx: &mut Context) -> Result<()> {
    let key = args.positional(1).unwrap_or_default();

    match args.positional(0) {
        Some("set") => {
            let Some(value) = args.positional(2) else {
                return Err(CpmError::NotEnoughArguments {
                    command: "config set".to_string(),
                    required: 3,
                    given: args.positionals.len(),
                }
                .into());
            };
            validate_entry(key, value)?;
            ctx.store.set(key, value);
            ctx.logger.success_q(&format!("set to '{value}'"), key);
        }
        Some("remove") => {
            if ctx.store.erase(key) {
                ctx.logger.success_q("removed", key);
            } else {
                ctx.logger.warn_q("is not set", key);
            }
        }
        other => {
            return Err(CpmError::InvalidSubcommand {
                command: "config".to_string(),
                sub: other.unwrap_or_default().to_string(),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::Harness;
    use crate::error::CpmError;

    #[test]
    fn test_set_and_remove() {
        let mut h = Harness::empty();
        h.run("config", &["set", "default_structure", "simple"])
            .unwrap();
        assert_eq!(h.store.get("default_structure"), Some("simple"));

        h.run("config", &["remove", "default_structure"]).unwrap();
        assert!(!h.store.has_key("default_structure"));

        // Removing an absent key only warns.
        h.run("config", &["remove", "default_structure"]).unwrap();
    }

    #[test]
    fn test_set_free_form_key() {
        let mut h = Harness::empty();
        h.run("config", &["set", "editor", "vim"]).unwrap();
        assert_eq!(h.store.get("editor"), Some("vim"));
    }

    #[test]
    fn test_set_validates_reserved_keys() {
        let mut h = Harness::empty();
        let err = h.run("config", &["set", "language", "go"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CpmError>(),
            Some(CpmError::InvalidLanguage(_))
        ));
        assert!(!h.store.has_key("language"));
    }

    #[test]
    fn test_set_requires_value() {
        let mut h = Harness::empty();
        let err = h.run("config", &["set", "editor"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CpmError>(),
            Some(CpmError::NotEnoughArguments { required: 3, given: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_subcommand() {
        let mut h = Harness::empty();
        let err = h.run("config", &["get", "editor"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CpmError>(),
            Some(CpmError::InvalidSubcommand { .. })
        ));
    }
}
