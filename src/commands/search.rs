//! `marginalia search` command - conjunctive hashtag search
//!
//! - Every `--tag` must be present (AND)
//! - `--inherit` also matches tags inherited from enclosing headings
//! - `--exact` matches whole hashtag tokens; default is substring matching
//! - Empty result prints "No notes found for hashtag"

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::document;
use crate::commands::list::format::{output, Listing};
use marginalia_core::error::Result;
use marginalia_core::outline::OrgOutline;
use marginalia_core::query::{list_by_hashtags, TagFilter, TagMatch};
use marginalia_core::scan::ScanScope;

/// Execute the search command
pub fn execute(
    cli: &Cli,
    file: &Path,
    tags: &[String],
    mode: TagMatch,
    inherit: bool,
    scope: ScanScope,
) -> Result<()> {
    let start = Instant::now();
    let mut doc = document::load(file)?;

    let filter = TagFilter::new(tags)
        .with_mode(mode)
        .with_ambient(inherit);
    let occurrences = list_by_hashtags(&mut doc, &OrgOutline, scope, &filter)?;

    if cli.verbose {
        debug!(?tags, %mode, inherit, results = occurrences.len(), elapsed = ?start.elapsed(), "search");
    }

    output(
        cli,
        &Listing {
            file,
            mode: "search",
            query: Some(tags),
            empty_message: "No notes found for hashtag",
        },
        &occurrences,
    )
}
