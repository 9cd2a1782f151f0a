use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitError {
    #[error("{field} {reason}")]
    InputValidation {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Failed to clone {url}: {source}")]
    Clone {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to rename {from} to {to}: {reason}")]
    Rename {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to render {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: Box<InitError>,
    },

    #[error("Template parse error on line {line}: {message}")]
    TemplateParse { line: usize, message: String },

    #[error("Template references undefined field \".{field}\" on line {line}. Available fields: .Owner, .Repo, .CliName")]
    TemplateExec { field: String, line: usize },

    #[error("File contains template markers but is not valid UTF-8")]
    NotText,

    #[error("Directory traversal failed: {0}")]
    Traverse(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InitError {
    /// Wrap an error raised while processing `path` during the tree walk.
    pub fn walk(path: &std::path::Path, source: InitError) -> Self {
        InitError::Walk {
            path: path.display().to_string(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, InitError>;
