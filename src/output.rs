//! CLI output rendering and exit code mapping.
//!
//! The rewrite contract is fixed human-readable status lines on stdout.
//! Hints render to stderr, and only when stderr is a terminal.

use repath::error::Hint;
use repath::{Error, ErrorCode};

use crate::commands::rewrite::RewriteOutput;

pub fn print_output(output: &RewriteOutput) {
    println!("Found {} occurrences of '{}'", output.occurrences, output.from);

    if output.applied {
        println!(
            "Successfully updated all {} occurrences to '{}'",
            output.occurrences, output.to
        );
    } else {
        println!("No occurrences found to update");
    }
}

pub fn print_error(err: &Error) {
    println!("Error: {}", err.message);
    print_hints(&err.hints);
}

fn print_hints(hints: &[Hint]) {
    use std::io::IsTerminal;

    if !std::io::stderr().is_terminal() {
        return;
    }
    for hint in hints {
        eprintln!("  hint: {}", hint.message);
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::TargetNotFound | ErrorCode::InternalIoError => 1,
    }
}
