//! `marginalia list` command - list annotations
//!
//! - Whole document by default, `--section` narrows to one subtree
//! - Source order
//! - Empty result prints "No notes found"

pub mod format;

use std::path::Path;

use crate::cli::Cli;
use crate::commands::document;
use marginalia_core::error::Result;
use marginalia_core::outline::OrgOutline;
use marginalia_core::query::list_all;
use marginalia_core::scan::ScanScope;

use self::format::{output, Listing};

/// Execute the list command
pub fn execute(cli: &Cli, file: &Path, scope: ScanScope) -> Result<()> {
    let mut doc = document::load(file)?;
    let occurrences = list_all(&mut doc, &OrgOutline, scope);

    output(
        cli,
        &Listing {
            file,
            mode: "list",
            query: None,
            empty_message: "No notes found",
        },
        &occurrences,
    )
}
