use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{generate_classes, Settings};

pub struct GenerateArgs {
    pub manifest: PathBuf,
    pub out: PathBuf,
    pub profile: Option<String>,
    pub dry_run: bool,
    pub force: bool,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(args.profile.as_deref())?;
    let classes = generate_classes(&args.manifest, &settings.naming)?;

    let mut files = Vec::with_capacity(classes.len());
    for class in &classes {
        let code = svcgen_render::render_class(class, &settings.render)?;
        files.push((svcgen_render::module_name(class), svcgen_render::file_name(class), code));
    }

    if args.dry_run {
        for (_, file_name, code) in &files {
            println!("{}", format!("// ── {file_name} ──").dimmed());
            println!("{code}");
        }
        return Ok(());
    }

    // Refuse before writing anything, so a conflict leaves the tree untouched.
    if !args.force {
        if let Some((_, file_name, _)) = files.iter().find(|(_, f, _)| args.out.join(f).exists()) {
            return Err(format!(
                "Service file '{}' already exists (use --force to overwrite)",
                args.out.join(file_name).display()
            )
            .into());
        }
    }

    if !args.out.exists() {
        fs::create_dir_all(&args.out)?;
    }

    for (module, file_name, code) in &files {
        let path = args.out.join(file_name);
        fs::write(&path, code)?;
        println!(
            "{} Generated service: {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
        register_module(&args.out, module)?;
    }

    tracing::info!(services = files.len(), out = %args.out.display(), "Generation complete");
    Ok(())
}

/// Append `pub mod <module>;` to an existing `mod.rs` in `dir`.
fn register_module(dir: &Path, module: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mod_path = dir.join("mod.rs");
    if !mod_path.exists() {
        return Ok(());
    }
    let existing = fs::read_to_string(&mod_path)?;
    let mod_line = format!("pub mod {module};\n");
    if existing.lines().any(|line| line.trim() == mod_line.trim()) {
        return Ok(());
    }

    let separator = if existing.is_empty() || existing.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    fs::write(&mod_path, format!("{existing}{separator}{mod_line}"))?;
    println!("{} Updated {}", "✓".green(), mod_path.display());
    Ok(())
}
