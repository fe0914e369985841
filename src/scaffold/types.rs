//! Class and struct pairs.
//!
//! Every generator first settles on all paths (including the parent header
//! for inheritance) and only then touches the filesystem, so a missing parent
//! leaves the project untouched.

use super::pair::{INCLUDE_GUARD, PairContent, include_line, write_pair};
use super::type_name;
use crate::config::{Language, ProjectConfig};
use crate::error::{CpmError, Result};
use crate::header::{Access, HeaderSections};
use crate::paths::{self, ResolvedPaths};
use std::fs;
use std::path::{Path, PathBuf};

/// A parent reference as given on the command line (`-p=shapes/shape`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentSpec {
    pub token: String,
    pub access: Access,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassVariant {
    Plain,
    Singleton,
    /// Pure-virtual methods, one per name, written as `virtual name() = 0;`.
    Interface(Vec<String>),
    Inherit(ParentSpec),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPair {
    pub paths: ResolvedPaths,
    /// Parent header rewritten to expose its private section, if any.
    pub promoted_parent: Option<PathBuf>,
}

struct ResolvedParent {
    header: PathBuf,
    include: String,
    type_name: String,
}

fn resolve_parent(
    root: &Path,
    config: &ProjectConfig,
    child: &ResolvedPaths,
    token: &str,
) -> Result<ResolvedParent> {
    let header = paths::resolve_parent(root, token, config.layout)?;
    let child_header = paths::normalize(&root.join(&child.header));
    if header == child_header {
        return Err(CpmError::InvalidValue {
            key: "parent".to_string(),
            value: token.to_string(),
        });
    }

    Ok(ResolvedParent {
        include: paths::relative_include(&child_header, &header),
        type_name: type_name(token),
        header,
    })
}

/// Rewrites the parent's first `private` section to `protected` unless it
/// already has a `protected` one.
fn promote_parent(header: &Path) -> Result<bool> {
    let text = fs::read_to_string(header).map_err(|e| CpmError::io("read", header, e))?;
    let mut sections = HeaderSections::parse(&text);
    if !sections.promote_private() {
        return Ok(false);
    }
    fs::write(header, sections.render()).map_err(|e| CpmError::io("write", header, e))?;
    Ok(true)
}

pub fn generate_class(
    root: &Path,
    config: &ProjectConfig,
    name: &str,
    use_hpp: bool,
    variant: &ClassVariant,
) -> Result<GeneratedPair> {
    if config.language == Language::C {
        return Err(CpmError::ClassesUnsupportedInC);
    }
    paths::validate_name("name", name)?;

    let resolved = paths::resolve(name, use_hpp, config);
    let own_include = paths::source_include(&resolved, name, use_hpp);
    let class = type_name(name);

    let parent = match variant {
        ClassVariant::Inherit(spec) => Some((
            resolve_parent(root, config, &resolved, &spec.token)?,
            spec.access,
        )),
        _ => None,
    };

    let content = match (variant, &parent) {
        (ClassVariant::Singleton, _) => singleton_content(&class, &own_include),
        (ClassVariant::Interface(methods), _) => interface_content(&class, methods),
        (ClassVariant::Inherit(_), Some((parent, access))) => class_content(
            &class,
            &own_include,
            Some((parent.include.as_str(), parent.type_name.as_str(), *access)),
        ),
        _ => class_content(&class, &own_include, None),
    };

    write_pair(root, &resolved, &content)?;

    // The parent is only rewritten once the child exists.
    let mut promoted_parent = None;
    if let Some((parent, _)) = &parent
        && promote_parent(&parent.header)?
    {
        promoted_parent = Some(parent.header.clone());
    }

    Ok(GeneratedPair {
        paths: resolved,
        promoted_parent,
    })
}

pub fn generate_struct(
    root: &Path,
    config: &ProjectConfig,
    name: &str,
    use_hpp: bool,
    parent: Option<&ParentSpec>,
) -> Result<GeneratedPair> {
    paths::validate_name("name", name)?;
    let resolved = paths::resolve(name, use_hpp, config);
    let own_include = paths::source_include(&resolved, name, use_hpp);
    let record = type_name(name);

    let parent = parent
        .map(|spec| resolve_parent(root, config, &resolved, &spec.token).map(|p| (p, spec.access)))
        .transpose()?;

    let content = match config.language {
        Language::C => c_struct_content(
            &record,
            &own_include,
            parent.as_ref().map(|(p, _)| (p.include.as_str(), p.type_name.as_str())),
        ),
        Language::Cpp => struct_content(
            &record,
            &own_include,
            parent
                .as_ref()
                .map(|(p, access)| (p.include.as_str(), p.type_name.as_str(), *access)),
        ),
    };

    write_pair(root, &resolved, &content)?;

    Ok(GeneratedPair {
        paths: resolved,
        promoted_parent: None,
    })
}

/// Opening lines of every generated header: guard, then the parent include.
fn header_prologue(parent_include: Option<&str>) -> Vec<String> {
    let mut lines = vec![INCLUDE_GUARD.to_string(), String::new()];
    if let Some(include) = parent_include {
        lines.push(include_line(include));
        lines.push(String::new());
    }
    lines
}

fn source_prologue(own_include: &str) -> Vec<String> {
    vec![include_line(own_include), String::new()]
}

fn declaration(keyword: &str, name: &str, parent: Option<(&str, Access)>) -> String {
    match parent {
        Some((parent, access)) => format!("{keyword} {name} : {access} {parent} {{"),
        None => format!("{keyword} {name} {{"),
    }
}

fn ctor_dtor_definitions(name: &str) -> Vec<String> {
    vec![format!("{name}::{name}() {{}}"), format!("{name}::~{name}() {{}}")]
}

fn class_content(name: &str, own_include: &str, parent: Option<(&str, &str, Access)>) -> PairContent {
    let mut header = header_prologue(parent.map(|(include, _, _)| include));
    header.extend([
        declaration("class", name, parent.map(|(_, ty, access)| (ty, access))),
        "private:".to_string(),
        String::new(),
        "public:".to_string(),
        format!("\t{name}();"),
        format!("\t~{name}();"),
        "};".to_string(),
    ]);

    let mut source = source_prologue(own_include);
    source.extend(ctor_dtor_definitions(name));

    PairContent {
        header,
        source: Some(source),
    }
}

fn singleton_content(name: &str, own_include: &str) -> PairContent {
    let mut header = header_prologue(None);
    header.extend([
        declaration("class", name, None),
        "private:".to_string(),
        format!("\t{name}();"),
        String::new(),
        "public:".to_string(),
        format!("\t{name}(const {name} &obj) = delete;"),
        String::new(),
        format!("\tstatic {name} &get();"),
        "};".to_string(),
    ]);

    let mut source = source_prologue(own_include);
    source.extend([
        format!("{name}::{name}() {{}}"),
        String::new(),
        format!("{name} &{name}::get() {{"),
        format!("\tstatic {name} obj;"),
        "\treturn obj;".to_string(),
        "}".to_string(),
    ]);

    PairContent {
        header,
        source: Some(source),
    }
}

fn interface_content(name: &str, methods: &[String]) -> PairContent {
    let mut header = header_prologue(None);
    header.extend([
        declaration("class", name, None),
        "private:".to_string(),
        String::new(),
        "public:".to_string(),
    ]);
    header.extend(methods.iter().map(|m| format!("\tvirtual {m}() = 0;")));
    header.push("};".to_string());

    PairContent {
        header,
        source: None,
    }
}

fn struct_content(name: &str, own_include: &str, parent: Option<(&str, &str, Access)>) -> PairContent {
    let mut header = header_prologue(parent.map(|(include, _, _)| include));
    header.extend([
        declaration("struct", name, parent.map(|(_, ty, access)| (ty, access))),
        format!("\t{name}();"),
        format!("\t~{name}();"),
        "};".to_string(),
    ]);

    let mut source = source_prologue(own_include);
    source.extend(ctor_dtor_definitions(name));

    PairContent {
        header,
        source: Some(source),
    }
}

/// C has no constructors or inheritance: the parent becomes the first member.
fn c_struct_content(name: &str, own_include: &str, parent: Option<(&str, &str)>) -> PairContent {
    let mut header = header_prologue(parent.map(|(include, _)| include));
    header.push(format!("typedef struct {name} {{"));
    if let Some((_, parent_type)) = parent {
        header.push(format!("\t{parent_type} base;"));
    }
    header.push(format!("}} {name};"));

    PairContent {
        header,
        source: Some(vec![include_line(own_include)]),
    }
}
