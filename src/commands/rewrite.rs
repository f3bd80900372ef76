//! The rewrite command — applies the compiled-in path rewrite to the
//! project file.

use serde::Serialize;
use std::path::Path;

use repath::defaults;
use repath::rewrite::{self, RewriteSpec};

use super::CmdResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteOutput {
    pub file: String,
    pub from: String,
    pub to: String,
    pub occurrences: usize,
    pub applied: bool,
}

pub fn run() -> CmdResult<RewriteOutput> {
    let target = Path::new(defaults::PROJECT_FILE);

    // Existence precheck happens before any read; read/write failures past
    // this point surface as internal I/O errors.
    if !target.exists() {
        return Err(repath::Error::target_file_not_found(defaults::PROJECT_FILE));
    }

    let spec = RewriteSpec::new(defaults::OLD_PATH, defaults::NEW_PATH)?;
    let outcome = rewrite::rewrite_file(target, &spec)?;

    Ok((
        RewriteOutput {
            file: outcome.file,
            from: spec.from,
            to: spec.to,
            occurrences: outcome.occurrences,
            applied: outcome.applied,
        },
        0,
    ))
}
