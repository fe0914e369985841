//! Project templates for `cpm create`.
//!
//! ## Available Structures
//!
//! - `executable` - CMake tree with `src/`, `include/`, `build/` and `tests/`
//! - `simple` - a single `main` file at the project root

use crate::config::{Language, Structure};
use crate::scaffold::TemplateArtifact;
use std::path::PathBuf;

pub const EXECUTABLE_DIRS: [&str; 4] = ["src", "include", "build", "tests"];

/// Inputs collected by `cpm create` before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub language: Language,
    pub structure: Structure,
    pub standard: String,
    pub cmake_version: String,
    pub git: bool,
}

pub fn main_path(structure: Structure, language: Language) -> PathBuf {
    let file = format!("main.{}", language.source_extension());
    match structure {
        Structure::Executable => PathBuf::from("src").join(file),
        Structure::Simple => PathBuf::from(file),
    }
}

pub fn main_source(language: Language) -> Vec<String> {
    let lines: &[&str] = match language {
        Language::Cpp => &[
            "#include <iostream>",
            "",
            "int main(int argc, char *argv[]) {",
            "\tstd::cout << \"Hello World!\" << std::endl;",
            "\treturn 0;",
            "}",
        ],
        Language::C => &[
            "#include <stdio.h>",
            "",
            "int main(int argc, char *argv[]) {",
            "\tprintf(\"Hello World!\\n\");",
            "\treturn 0;",
            "}",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

pub fn cmake_lists(spec: &ProjectSpec) -> Vec<String> {
    let lang = spec.language.cmake_name();
    let ext = spec.language.source_extension();

    vec![
        format!("cmake_minimum_required(VERSION {})", spec.cmake_version),
        String::new(),
        "project(".to_string(),
        format!("\t{}", spec.name),
        format!("\tLANGUAGES {lang}"),
        ")".to_string(),
        String::new(),
        format!("set(CMAKE_{lang}_STANDARD {})", spec.standard),
        format!("set(CMAKE_{lang}_STANDARD_REQUIRED ON)"),
        "set(SOURCE_DIR ${CMAKE_CURRENT_SOURCE_DIR}/src)".to_string(),
        String::new(),
        format!("file(GLOB_RECURSE SOURCES \"${{SOURCE_DIR}}/*.{ext}\")"),
        String::new(),
        "add_executable(".to_string(),
        "\t${PROJECT_NAME}".to_string(),
        "\t${SOURCES}".to_string(),
        ")".to_string(),
        String::new(),
        "target_include_directories(".to_string(),
        "\t${PROJECT_NAME} PRIVATE".to_string(),
        "\t${CMAKE_CURRENT_SOURCE_DIR}/include".to_string(),
        ")".to_string(),
        String::new(),
        "target_link_libraries(".to_string(),
        "\t${PROJECT_NAME} PRIVATE".to_string(),
        ")".to_string(),
        String::new(),
        "if (CMAKE_SYSTEM_NAME MATCHES \"Darwin\" OR CMAKE_SYSTEM_NAME MATCHES \"Linux\")"
            .to_string(),
        "\tinstall(TARGETS ${PROJECT_NAME} DESTINATION /usr/local/bin) # sudo required"
            .to_string(),
        "elseif (CMAKE_SYSTEM_NAME MATCHES \"Windows\")".to_string(),
        "\tinstall(TARGETS ${PROJECT_NAME} DESTINATION $ENV{ProgramFiles})".to_string(),
        "endif()".to_string(),
    ]
}

pub fn gitignore() -> Vec<String> {
    [
        "# CMake artifacts",
        "build/",
        "CMakeFiles/",
        "CMakeCache.txt",
        "CMakeScripts/",
        "cmake_install.cmake",
        "Makefile",
        "",
        "# cpm",
        "cpm.tmp",
        "",
        "# Others",
        "*.exe",
        ".vscode/",
        ".DS_Store",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Every file `cpm create` writes, in order. Directories are implied by paths
/// except for the empty ones of the executable layout, which the caller creates.
pub fn project_artifacts(spec: &ProjectSpec) -> Vec<TemplateArtifact> {
    let mut artifacts = Vec::new();

    if spec.structure == Structure::Executable {
        artifacts.push(TemplateArtifact::write("CMakeLists.txt", cmake_lists(spec)));
    }

    artifacts.push(TemplateArtifact::write(
        main_path(spec.structure, spec.language),
        main_source(spec.language),
    ));

    if spec.git {
        artifacts.push(TemplateArtifact::write(".gitignore", gitignore()));
        artifacts.push(TemplateArtifact::write(
            "README.md",
            [format!("# {}", spec.name)],
        ));
        artifacts.push(TemplateArtifact::write("LICENSE", Vec::<String>::new()));
    }

    artifacts
}
