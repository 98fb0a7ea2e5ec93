//! Catalog command handler

use anyhow::Result;

use linthold::application::Workspace;
use linthold::presentation::factory;
use linthold::presentation::output::catalog_entry_json;

use super::{text_renderer, Invocation};

pub fn cmd_catalog(
    invocation: &Invocation,
    key: Option<&str>,
    list: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let workspace = Workspace::open(&invocation.root)?;
    let query = factory::create_catalog_query(&workspace);

    let entries = match key {
        Some(key) if !list => vec![query.lookup(key)?],
        _ => query.list()?,
    };

    if json {
        for entry in &entries {
            println!("{}", catalog_entry_json(entry));
        }
    } else if list {
        print!("{}", text_renderer(verbose).render_catalog(&entries));
    } else {
        for entry in &entries {
            println!("{}", entry.version);
        }
    }
    Ok(())
}
