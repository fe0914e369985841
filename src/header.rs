//! Structural view of a C++ header's access sections.
//!
//! A header is split into a preamble (everything before the first access
//! marker) followed by an ordered list of blocks, each opened by a
//! `public:`, `protected:` or `private:` line. Rendering the model reproduces
//! the original text byte for byte, so edits touch only the marker they target.
//!
//! ```text
//! #pragma once            <- preamble
//! class Animal {          <- preamble
//! private:                <- block 0 (Private)
//!     int legs;
//! public:                 <- block 1 (Public)
//!     Animal();
//! };
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<indent>\s*)(?P<access>public|protected|private)(?P<rest>\s*:(?:[^:].*)?)$")
        .expect("access marker pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
    Private,
}

impl Access {
    pub fn keyword(&self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Protected => "protected",
            Access::Private => "private",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Access::Public),
            "protected" => Some(Access::Protected),
            "private" => Some(Access::Private),
            _ => None,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessBlock {
    pub access: Access,
    indent: String,
    rest: String,
    pub body: Vec<String>,
}

impl AccessBlock {
    fn marker_line(&self) -> String {
        format!("{}{}{}", self.indent, self.access.keyword(), self.rest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSections {
    pub preamble: Vec<String>,
    pub blocks: Vec<AccessBlock>,
    trailing_newline: bool,
}

impl HeaderSections {
    pub fn parse(text: &str) -> Self {
        let mut sections = HeaderSections {
            preamble: Vec::new(),
            blocks: Vec::new(),
            trailing_newline: text.ends_with('\n'),
        };

        for line in text.lines() {
            if let Some(caps) = MARKER.captures(line)
                && let Some(access) = Access::from_keyword(&caps["access"])
            {
                sections.blocks.push(AccessBlock {
                    access,
                    indent: caps["indent"].to_string(),
                    rest: caps["rest"].to_string(),
                    body: Vec::new(),
                });
                continue;
            }

            match sections.blocks.last_mut() {
                Some(block) => block.body.push(line.to_string()),
                None => sections.preamble.push(line.to_string()),
            }
        }

        sections
    }

    pub fn has_section(&self, access: Access) -> bool {
        self.blocks.iter().any(|b| b.access == access)
    }

    /// Turns the first `private` section into `protected` so derived types can
    /// reach its members. Does nothing when a `protected` section already
    /// exists or there is no `private` section. Returns whether it changed.
    pub fn promote_private(&mut self) -> bool {
        if self.has_section(Access::Protected) {
            return false;
        }

        match self.blocks.iter_mut().find(|b| b.access == Access::Private) {
            Some(block) => {
                block.access = Access::Protected;
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self.preamble.clone();
        for block in &self.blocks {
            lines.push(block.marker_line());
            lines.extend(block.body.iter().cloned());
        }

        let mut out = lines.join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIMAL: &str = "#pragma once\n\nclass Animal {\nprivate:\n\tint legs;\n\npublic:\n\tAnimal();\n\t~Animal();\n};\n";

    #[test]
    fn test_parse_blocks_in_order() {
        let sections = HeaderSections::parse(ANIMAL);
        assert_eq!(sections.preamble.len(), 3);
        let kinds: Vec<Access> = sections.blocks.iter().map(|b| b.access).collect();
        assert_eq!(kinds, vec![Access::Private, Access::Public]);
        assert_eq!(sections.blocks[0].body, vec!["\tint legs;", ""]);
    }

    #[test]
    fn test_render_is_lossless() {
        assert_eq!(HeaderSections::parse(ANIMAL).render(), ANIMAL);

        let no_newline = "class A {\n  public :\n  A();\n};";
        assert_eq!(HeaderSections::parse(no_newline).render(), no_newline);
    }

    #[test]
    fn test_promote_first_private_only() {
        let text = "class A {\nprivate:\n\tint a;\npublic:\n\tA();\nprivate:\n\tint b;\n};\n";
        let mut sections = HeaderSections::parse(text);
        assert!(sections.promote_private());
        assert_eq!(
            sections.render(),
            "class A {\nprotected:\n\tint a;\npublic:\n\tA();\nprivate:\n\tint b;\n};\n"
        );

        // A second pass sees the protected section and leaves the rest alone.
        assert!(!sections.promote_private());
    }

    #[test]
    fn test_existing_protected_is_untouched() {
        let text = "class A {\nprotected:\n\tint a;\nprivate:\n\tint b;\n};\n";
        let mut sections = HeaderSections::parse(text);
        assert!(!sections.promote_private());
        assert_eq!(sections.render(), text);
    }

    #[test]
    fn test_inheritance_specifier_is_not_a_marker() {
        let text = "class Dog : private Animal {\npublic:\n\tDog();\n};\n";
        let mut sections = HeaderSections::parse(text);
        assert_eq!(sections.blocks.len(), 1);
        assert!(!sections.promote_private());
        assert_eq!(sections.render(), text);
    }

    #[test]
    fn test_marker_with_trailing_comment() {
        let text = "struct S {\n    private: // state\n    int x;\n};\n";
        let mut sections = HeaderSections::parse(text);
        assert!(sections.promote_private());
        assert_eq!(
            sections.render(),
            "struct S {\n    protected: // state\n    int x;\n};\n"
        );
    }

    #[test]
    fn test_scope_resolution_is_not_a_marker() {
        let sections = HeaderSections::parse("public::thing();\n");
        assert!(sections.blocks.is_empty());
    }
}
