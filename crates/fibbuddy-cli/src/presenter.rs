//! Heap state presenter.

use std::fmt::Display;

use console::style;

use fibbuddy_core::{BlockDescriptor, BlockHandle, HeapStats};

use crate::output::{format_block, format_number, layout_json};

/// Renders heap state and operation results to stdout/stderr.
pub struct HeapPresenter {
    quiet: bool,
    json: bool,
}

impl HeapPresenter {
    #[must_use]
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Print the startup banner.
    pub fn banner(&self, capacity: u64, total: u64) {
        if self.quiet {
            return;
        }
        println!(
            "FibBuddy heap simulator: capacity bound {}, tracked {}",
            format_number(capacity),
            format_number(total),
        );
    }

    /// Print the current heap layout.
    pub fn present_layout(&self, blocks: &[BlockDescriptor]) {
        if self.json {
            println!("{}", layout_json(blocks));
            return;
        }

        println!("Heap state:");
        for desc in blocks {
            let status = if desc.is_free {
                style("free").green()
            } else {
                style("used").red()
            };
            println!("  {} {}", status, format_block(desc));
        }
        if blocks.is_empty() {
            println!("  (no blocks)");
        }
    }

    /// Print a successful allocation.
    pub fn present_alloc(&self, handle: &BlockHandle) {
        if self.quiet {
            return;
        }
        println!(
            "Allocated '{}' -> block of size {}",
            handle.name(),
            format_number(handle.size()),
        );
    }

    /// Print a successful free.
    pub fn present_free(&self, name: &str) {
        if self.quiet {
            return;
        }
        println!("Freed '{name}'");
    }

    /// Print heap counters.
    pub fn present_stats(&self, stats: &HeapStats) {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(stats).unwrap_or_else(|_| "{}".to_string())
            );
            return;
        }
        println!("Heap statistics:");
        println!("  allocations:        {}", stats.allocations);
        println!("  failed allocations: {}", stats.failed_allocations);
        println!("  frees:              {}", stats.frees);
        println!("  split peels:        {}", stats.split_peels);
        println!("  merge fusions:      {}", stats.merge_fusions);
    }

    /// Print a recoverable operation error.
    pub fn present_error(&self, error: &dyn Display) {
        eprintln!("Error: {error}");
    }
}
