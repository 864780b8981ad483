//! Build script that rebuilds the crate when embedded migrations change.
//!
//! `embed_migrations!` reads `migrations/` at compile time, so each migration
//! directory and its SQL files are registered with `rerun-if-changed`.

use std::fs;
use std::io;
use std::path::Path;

const MIGRATIONS_DIR: &str = "migrations";

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed={MIGRATIONS_DIR}");

    let mut entries = fs::read_dir(MIGRATIONS_DIR)?
        .map(|entry| entry.map(|dir_entry| dir_entry.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    for migration in entries.iter().filter(|path| path.is_dir()) {
        for script in ["up.sql", "down.sql"] {
            emit_rerun(&migration.join(script));
        }
    }
    Ok(())
}

fn emit_rerun(path: &Path) {
    if path.exists() {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}
