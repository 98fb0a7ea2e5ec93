//! Check command handler

use std::path::Path;

use anyhow::Result;

use linthold::application::{AnalysisOverrides, CheckOptions, Workspace};
use linthold::infrastructure::LocalFs;
use linthold::presentation::factory;
use linthold::presentation::ThresholdArgs;

use super::{text_renderer, Invocation};

/// Exits non-zero (via the returned error) when the thresholds are exceeded.
pub fn cmd_check(
    invocation: &Invocation,
    report: &Path,
    module: Option<&Path>,
    thresholds: &ThresholdArgs,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let workspace =
        Workspace::open(&invocation.root)?.with_overrides(&AnalysisOverrides::from(thresholds));

    let module = match module {
        Some(dir) => invocation.path(dir),
        None => workspace.enclosing_module(&invocation.base, &LocalFs::new())?,
    };
    let options = CheckOptions::from_workspace(&workspace, module);

    let use_case = factory::create_check_use_case(&workspace, invocation.path(report));
    let events = factory::create_event_sink(json, "check");
    let result = use_case.execute_with_events(&options, events)?;

    if !json {
        print!("{}", text_renderer(verbose).render_check(&result));
    }

    result.enforce()?;
    Ok(())
}
