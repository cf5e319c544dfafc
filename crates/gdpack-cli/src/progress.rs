//! Terminal rendering of storage progress events.

use std::io::{self, Write};

use colored::Colorize;

use gdpack_core::{Progress, ProgressSink};

/// Renders progress counters in place on stderr.
///
/// Events without a known total are not rendered; a phase that reaches its
/// total ends the line.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl ProgressSink for TerminalSink {
    fn emit(&mut self, progress: &Progress) {
        let Some(total) = progress.total else {
            return;
        };

        eprint!(
            "\r  {} {}/{}",
            progress.phase.dimmed(),
            progress.loaded,
            total
        );
        if total > 0 && progress.loaded >= total {
            eprintln!();
        } else {
            let _ = io::stderr().flush();
        }
    }
}
