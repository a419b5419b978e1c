//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use fibbuddy_cli::output::{format_block, layout_json, write_to_file};
use fibbuddy_cli::HeapPresenter;
use fibbuddy_core::FibHeap;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibbuddy_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let mut heap = FibHeap::with_capacity(config.capacity);
    let presenter = HeapPresenter::new(config.quiet, config.json);

    let stdin = io::stdin().lock();
    if config.batch {
        run_batch(&mut heap, &presenter, stdin)?;
    } else {
        run_menu(&mut heap, &presenter, stdin, config.quiet)?;
    }

    if let Some(path) = &config.output {
        write_to_file(path, &render_layout(&heap, config.json))?;
    }

    Ok(())
}

/// Interactive menu loop.
fn run_menu<R: BufRead>(
    heap: &mut FibHeap,
    presenter: &HeapPresenter,
    input: R,
    quiet: bool,
) -> Result<()> {
    presenter.banner(heap.capacity(), heap.total_size());
    let mut lines = input.lines();

    loop {
        if !quiet {
            println!();
            println!("===== Heap Manager =====");
            println!("1. Allocate");
            println!("2. Free");
            println!("3. Show layout");
            println!("0. Quit");
            print!("Choice: ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let Ok(choice) = line.trim().parse::<u32>() else {
            presenter.present_error(&"invalid input");
            break;
        };

        match choice {
            1 => {
                let Some(name) = prompt(&mut lines, "Name: ", quiet)? else {
                    break;
                };
                let Some(size_text) = prompt(&mut lines, "Size: ", quiet)? else {
                    break;
                };
                match size_text.trim().parse::<u64>() {
                    Ok(size) => match heap.allocate(name.trim(), size) {
                        Ok(handle) => presenter.present_alloc(&handle),
                        Err(err) => presenter.present_error(&err),
                    },
                    Err(_) => presenter.present_error(&"size must be a non-negative integer"),
                }
            }
            2 => {
                presenter.present_layout(&heap.list());
                let Some(name) = prompt(&mut lines, "Name to free: ", quiet)? else {
                    break;
                };
                match heap.free(name.trim()) {
                    Ok(()) => presenter.present_free(name.trim()),
                    Err(err) => presenter.present_error(&err),
                }
            }
            3 => presenter.present_layout(&heap.list()),
            0 => break,
            _ => presenter.present_error(&"invalid choice, try again"),
        }
    }

    Ok(())
}

/// Non-interactive command loop: one command per line.
fn run_batch<R: BufRead>(heap: &mut FibHeap, presenter: &HeapPresenter, input: R) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next().unwrap_or_default() {
            "alloc" => {
                let args = (parts.next(), parts.next().and_then(|s| s.parse::<u64>().ok()));
                let (Some(name), Some(size)) = args else {
                    presenter.present_error(&"usage: alloc NAME SIZE");
                    continue;
                };
                match heap.allocate(name, size) {
                    Ok(handle) => presenter.present_alloc(&handle),
                    Err(err) => presenter.present_error(&err),
                }
            }
            "free" => {
                let Some(name) = parts.next() else {
                    presenter.present_error(&"usage: free NAME");
                    continue;
                };
                match heap.free(name) {
                    Ok(()) => presenter.present_free(name),
                    Err(err) => presenter.present_error(&err),
                }
            }
            "list" => presenter.present_layout(&heap.list()),
            "stats" => presenter.present_stats(&heap.stats()),
            "quit" | "exit" => break,
            other => presenter.present_error(&format!("unknown command '{other}'")),
        }
    }

    Ok(())
}

/// Render the current layout for file output.
fn render_layout(heap: &FibHeap, json: bool) -> String {
    let blocks = heap.list();
    if json {
        layout_json(&blocks)
    } else {
        blocks
            .iter()
            .map(format_block)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Prompt for one line of input.
fn prompt<R: BufRead>(
    lines: &mut io::Lines<R>,
    text: &str,
    quiet: bool,
) -> Result<Option<String>> {
    if !quiet {
        print!("{text}");
        io::stdout().flush()?;
    }
    Ok(lines.next().transpose()?)
}
