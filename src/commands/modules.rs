//! Modules command handler

use anyhow::Result;

use linthold::application::Workspace;
use linthold::infrastructure::LocalFs;
use linthold::presentation::output::module_json;

use super::{text_renderer, Invocation};

pub fn cmd_modules(invocation: &Invocation, json: bool, verbose: u8) -> Result<()> {
    let workspace = Workspace::open(&invocation.root)?;
    let modules = workspace.module_ids(&LocalFs::new())?;

    if json {
        for module in &modules {
            println!("{}", module_json(module));
        }
    } else {
        print!("{}", text_renderer(verbose).render_modules(&modules));
    }
    Ok(())
}
