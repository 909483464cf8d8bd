//! CLI example that builds a small drive, prints it, and resolves paths
//!
//! Usage:
//!   cargo run --example print_tree [path ...]
//!
//! Each path is a `/`-separated list of child indices, e.g. `/0/0`.
//! If no paths are provided, a default set is resolved.

use anyhow::{Context, Result};
use drive_tree::prelude::*;
use log::info;
use std::env;

fn sample_drive() -> Node {
    Node::drive(
        'a',
        [Node::directory("Animals", [Node::file("Aardvark")])],
    )
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let paths = if args.is_empty() {
        vec!["/0".to_string(), "/0/0".to_string(), "/1".to_string(), "/0/1".to_string()]
    } else {
        args
    };

    let mut drive = sample_drive();
    info!("Built drive with {} nodes", drive.node_count());

    println!("Drive Structure:");
    println!("═══════════════════════════════");
    print!("{}", drive);
    println!();

    println!("Lookups:");
    for text in &paths {
        let path: Path = match text.parse() {
            Ok(path) => path,
            Err(e) => {
                println!("  {:<8} error: {}", text, e);
                continue;
            }
        };
        match drive.resolve(&path) {
            Ok(node) => println!("  {:<8} {} ({})", text, node.name(), node.kind()),
            Err(e) => println!("  {:<8} error: {}", text, e),
        }
    }
    println!();

    let target = Path::from([0, 0]);
    drive
        .resolve_mut(&target)
        .and_then(|node| node.rename("Antelope"))
        .with_context(|| format!("Failed to rename node at {}", target))?;

    if let Err(e) = drive.rename("b") {
        println!("Renaming the drive: {}", e);
    }
    println!();

    println!("After rename:");
    let options = RenderOptions::default()
        .with_indent("  ")
        .with_kind(true)
        .with_paths(true);
    print!("{}", render(&drive, &options));

    Ok(())
}
