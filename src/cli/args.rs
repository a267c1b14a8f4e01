use super::parse::parse_tag;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Document to scan
    pub file: PathBuf,

    /// Restrict to the section enclosing this byte offset
    #[arg(long)]
    pub section: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Document to scan
    pub file: PathBuf,

    /// Required hashtag (repeatable; all must match)
    #[arg(long, short, required = true, action = clap::ArgAction::Append, value_parser = parse_tag)]
    pub tag: Vec<String>,

    /// Also match tags inherited from enclosing headings
    #[arg(long)]
    pub inherit: bool,

    /// Match whole hashtag tokens instead of substrings
    #[arg(long)]
    pub exact: bool,

    /// Restrict to the section enclosing this byte offset
    #[arg(long)]
    pub section: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct TagsArgs {
    /// Documents or directories (directories are searched for .org files)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Include tags inherited from enclosing headings
    #[arg(long)]
    pub inherit: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Document to annotate
    pub file: PathBuf,

    /// Byte offset where the annotated span starts
    #[arg(long)]
    pub at: usize,

    /// Length in bytes of the annotated span (0 inserts a bare marker)
    #[arg(long, default_value_t = 0)]
    pub len: usize,

    /// Annotation text; may contain #hashtags
    #[arg(long, short)]
    pub note: String,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Document to edit
    pub file: PathBuf,

    /// Byte offset where the annotation link starts
    #[arg(long)]
    pub at: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Document to render
    pub file: PathBuf,

    /// Target format identifier (html, latex, odt, ...)
    #[arg(long, short)]
    pub to: String,
}
