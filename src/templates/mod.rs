pub mod conda;
pub mod docs;
pub mod git;
pub mod project_config;
pub mod python;

use crate::Result;
use crate::layout;
use crate::models::{ProjectName, RenderContext};

pub use project_config::ProjectConfigDocument;

/// Named values substituted into `{{KEY}}` placeholders.
///
/// Insertion order is kept so the variables can be listed predictably in
/// diagnostics; lookups are linear, the set never holds more than a handful
/// of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateVars {
    entries: Vec<(&'static str, String)>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous value.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Variables needed to resolve folder templates.
    pub fn for_layout(name: &ProjectName, year: Option<i32>) -> Self {
        let mut vars = Self::new();
        vars.insert("PROJECT_NAME", name.as_str());
        if let Some(year) = year {
            vars.insert("YEAR", year.to_string());
        }
        vars
    }

    /// Full variable set for rendering the starter files.
    pub fn from_context(ctx: &RenderContext) -> Self {
        let name = &ctx.project_name;
        let mut vars = Self::for_layout(name, Some(ctx.year()));
        vars.insert("PROJECT_NAME_PY", python_literal(name.as_str()))
            .insert("PROJECT_NAME_UPPER_PY", python_literal(&name.upper()))
            .insert("CREATED_AT", ctx.created_at())
            .insert("CONDA_ENV_NAME", yaml_scalar(&name.lower()))
            .insert("CRITICAL_PATHS", python_path_list(name));
        vars
    }
}

/// Substitutes every known `{{KEY}}` in one pass.
///
/// Substituted values are never rescanned, so a project name that happens
/// to contain `{{YEAR}}` is written out literally. Unknown keys are left in
/// place.
pub fn render(template: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        match after_open.find("}}") {
            Some(end) => {
                let key = &after_open[..end];
                match vars.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after_open[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Placeholder keys still present in `content`.
pub fn unresolved_placeholders(content: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut rest = content;
    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            break;
        };
        let key = &after_open[..end];
        if !key.is_empty() && key.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
            keys.push(key.to_string());
        }
        rest = &after_open[end + 2..];
    }
    keys
}

#[derive(Debug, Clone, Copy)]
pub enum TemplateBody {
    Text(&'static str),
    /// Serialized from [`ProjectConfigDocument`] instead of string substitution.
    ProjectConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct FileTemplate {
    pub path: &'static str,
    pub body: TemplateBody,
}

impl FileTemplate {
    /// Renders the file content, trimmed of surrounding whitespace.
    pub fn render(&self, ctx: &RenderContext, vars: &TemplateVars) -> Result<String> {
        let content = match self.body {
            TemplateBody::Text(template) => render(template, vars),
            TemplateBody::ProjectConfig => ProjectConfigDocument::for_context(ctx).to_json()?,
        };
        Ok(content.trim().to_string())
    }
}

pub static FILE_TEMPLATES: &[FileTemplate] = &[
    FileTemplate {
        path: "README.md",
        body: TemplateBody::Text(docs::README),
    },
    FileTemplate {
        path: "main.py",
        body: TemplateBody::Text(python::MAIN_SCRIPT),
    },
    FileTemplate {
        path: "requirements.txt",
        body: TemplateBody::Text(python::REQUIREMENTS),
    },
    FileTemplate {
        path: ".gitignore",
        body: TemplateBody::Text(git::GITIGNORE),
    },
    FileTemplate {
        path: ".gitattributes",
        body: TemplateBody::Text(git::GITATTRIBUTES),
    },
    FileTemplate {
        path: layout::CONFIG_FILE,
        body: TemplateBody::ProjectConfig,
    },
    FileTemplate {
        path: "environments/environment.yml",
        body: TemplateBody::Text(conda::ENVIRONMENT),
    },
];

/// `value` as a YAML scalar, quoted only when plain style would misparse.
fn yaml_scalar(value: &str) -> String {
    match serde_yaml::to_string(value) {
        Ok(encoded) => encoded.trim_end().to_string(),
        Err(_) => value.to_string(),
    }
}

/// `value` escaped for the body of a Python string literal, single, double
/// or triple quoted.
fn python_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn python_path_list(name: &ProjectName) -> String {
    layout::critical_paths(name)
        .iter()
        .map(|path| format!("        \"{}\"", python_literal(&path.to_string_lossy())))
        .collect::<Vec<_>>()
        .join(",\n")
}
