use colored::Colorize;
use std::path::Path;

use svcgen_core::{ClassDescriptor, MethodDescriptor};

use super::{generate_classes, Settings};

pub fn run(manifest: &Path, profile: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(profile)?;
    let classes = generate_classes(manifest, &settings.naming)?;

    if classes.is_empty() {
        println!("{}", "No entities declared.".dimmed());
        return Ok(());
    }

    for class in &classes {
        print_class(class);
    }
    println!("  {} services total", classes.len());
    Ok(())
}

fn print_class(class: &ClassDescriptor) {
    println!(
        "{} {}",
        class.name.bold(),
        format!("(repository: {})", class.repository.ty.rust_type()).dimmed()
    );
    println!(
        "  {:<45} {}",
        "SIGNATURE".dimmed(),
        "FAILS".dimmed()
    );
    println!("  {}", "-".repeat(60).dimmed());

    for method in &class.methods {
        let fails: Vec<&str> = method.failures.iter().map(|k| k.as_str()).collect();
        println!("  {:<45} {}", signature(method).green(), fails.join(", ").red());
    }
    println!();
}

/// `name(param: Type, ...)` as the descriptor declares it.
pub fn signature(method: &MethodDescriptor) -> String {
    let params: Vec<String> = method
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty.rust_type()))
        .collect();
    format!("{}({})", method.name, params.join(", "))
}
