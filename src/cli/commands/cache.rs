//! Cache commands - clear and list the package cache

use crate::cache::{clear_cache, list_cached, CachedPackage};
use crate::config::Config;
use crate::error::GhpxResult;
use crate::ui;
use console::style;

/// Remove the entire cache root
pub async fn clear(config: &Config) -> GhpxResult<()> {
    let root = config.cache_root();

    if clear_cache(&root).await? {
        ui::step_ok(&format!("Cache cleared: {}", root.display()));
    } else {
        ui::step_warn(&format!("Cache already empty: {}", root.display()));
    }
    Ok(())
}

/// Print every cached package
pub async fn list(config: &Config) -> GhpxResult<()> {
    let root = config.cache_root();
    let packages = list_cached(&root).await?;

    if packages.is_empty() {
        println!("No cached packages.");
        return Ok(());
    }

    println!("{:<40} {:<20}", "PACKAGE", "INSTALLED");
    println!("{}", "-".repeat(60));
    for package in &packages {
        println!("{:<40} {:<20}", package.package_name(), installed_label(package));
    }

    println!();
    println!(
        "Total: {} package(s) in {}",
        packages.len(),
        style(root.display()).dim()
    );
    Ok(())
}

fn installed_label(package: &CachedPackage) -> String {
    package
        .installed_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
