//! Resolve command handler

use std::path::PathBuf;

use anyhow::Result;

use linthold::application::{AnalysisOverrides, ResolveOptions, Workspace};
use linthold::presentation::factory;
use linthold::presentation::ThresholdArgs;

use super::{text_renderer, Invocation};

pub fn cmd_resolve(
    invocation: &Invocation,
    modules: &[PathBuf],
    thresholds: &ThresholdArgs,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let workspace =
        Workspace::open(&invocation.root)?.with_overrides(&AnalysisOverrides::from(thresholds));

    let explicit: Vec<PathBuf> = modules.iter().map(|m| invocation.path(m)).collect();
    let options = ResolveOptions::from_workspace(&workspace, workspace.modules(&explicit)?);

    let use_case = factory::create_resolve_use_case(&workspace);
    let events = factory::create_event_sink(json, "resolve");
    let result = use_case.execute_with_events(&options, events)?;

    if !json {
        print!("{}", text_renderer(verbose).render_resolve(&result));
    }
    Ok(())
}
