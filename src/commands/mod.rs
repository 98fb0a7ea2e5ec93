//! Command handlers

mod build_root;
mod catalog;
mod check;
mod modules;
mod resolve;

use anyhow::Result;

use linthold::presentation::{Cli, Commands, TextRenderer};

pub use build_root::Invocation;

pub fn dispatch(cli: Cli) -> Result<()> {
    let invocation = Invocation::from_cli(cli.root.as_deref())?;

    match cli.command {
        Commands::Resolve {
            modules,
            thresholds,
        } => resolve::cmd_resolve(&invocation, &modules, &thresholds, cli.json, cli.verbose),
        Commands::Check {
            report,
            module,
            thresholds,
        } => check::cmd_check(
            &invocation,
            &report,
            module.as_deref(),
            &thresholds,
            cli.json,
            cli.verbose,
        ),
        Commands::Catalog { key, list } => {
            catalog::cmd_catalog(&invocation, key.as_deref(), list, cli.json, cli.verbose)
        }
        Commands::Modules => modules::cmd_modules(&invocation, cli.json, cli.verbose),
    }
}

fn text_renderer(verbose: u8) -> TextRenderer {
    use is_terminal::IsTerminal;

    TextRenderer {
        unicode: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        verbose,
    }
}
