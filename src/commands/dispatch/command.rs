//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use super::macros::trace_command;
use crate::cli::{Cli, Commands};
use crate::commands;
use marginalia_core::config::Config;
use marginalia_core::error::Result;
use marginalia_core::query::TagMatch;
use marginalia_core::scan::ScanScope;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = Config::discover(cli.config.as_deref())?;
        debug!(?config, "config");
        trace_command!(cli, start, "load_config");
        Ok(Self { cli, config, start })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("marginalia {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Inline annotations and hashtags for outline documents.");
        println!();
        println!("Run `marginalia --help` for usage information.");
        Ok(())
    }
}

fn scope_for(section: Option<usize>) -> ScanScope {
    match section {
        Some(anchor) => ScanScope::Subtree { anchor },
        None => ScanScope::Whole,
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::List(args) => {
                commands::list::execute(ctx.cli, &args.file, scope_for(args.section))
            }
            Commands::Search(args) => {
                let mode = if args.exact {
                    TagMatch::Token
                } else {
                    ctx.config.search.tag_match
                };
                commands::search::execute(
                    ctx.cli,
                    &args.file,
                    &args.tag,
                    mode,
                    args.inherit || ctx.config.search.include_ambient_tags,
                    scope_for(args.section),
                )
            }
            Commands::Tags(args) => commands::tags::execute(ctx.cli, &args.paths, args.inherit),
            Commands::Add(args) => {
                commands::add::execute(ctx.cli, &args.file, args.at, args.len, &args.note)
            }
            Commands::Delete(args) => commands::delete::execute(ctx.cli, &args.file, args.at),
            Commands::Export(args) => {
                commands::export::execute(ctx.cli, &ctx.config, &args.file, &args.to)
            }
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
