use clap::Parser;
use dorm_alloc::config::Command;
use dorm_alloc::utils::{logger, validation::Validate};
use dorm_alloc::{
    default_dorms, AllocationDesk, Candidate, CliConfig, DormsConfig, FileStateStore, IdentityKey,
    TextRoster,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dorm-alloc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config) {
        tracing::error!("Operation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(config: CliConfig) -> dorm_alloc::Result<()> {
    let defaults = load_dorm_defaults(&config.data_dir)?;

    let state = FileStateStore::new(config.data_dir.clone());
    let mut desk = AllocationDesk::open(state, TextRoster::new(), defaults)?;

    match config.command {
        Command::Add {
            name,
            roll,
            course,
            year,
            gender,
            dorm,
        } => {
            let candidate = Candidate {
                name,
                roll,
                course,
                year,
                gender,
            };
            let student = desk.submit(candidate, &dorm)?;
            let dorm_name = desk
                .store()
                .dorm(&dorm)
                .map(|d| d.name.clone())
                .unwrap_or(dorm);
            println!(
                "✅ Allocated {} (Roll: {}) to {}",
                student.name, student.roll, dorm_name
            );
        }

        Command::Remove {
            roll,
            year,
            gender,
            dorm,
        } => {
            let key = IdentityKey::new(roll, year, gender);
            let removed = desk.withdraw(&key, &dorm)?;
            println!("✅ Removed {} (Roll: {})", removed.name, removed.roll);
        }

        Command::List { search } => {
            desk.search(search.as_deref().unwrap_or(""));
            let mut shown = 0;
            for row in desk.view().visible_rows() {
                println!("{}", row.text);
                shown += 1;
            }
            if shown == 0 {
                println!("No matching allocations.");
            }
            tracing::debug!("Listed {} of {} rows", shown, desk.view().rows().len());
        }

        Command::Dorms => {
            for (id, dorm) in desk.store().dorms() {
                println!(
                    "{} — {}: {}/{} occupied ({}-only)",
                    id,
                    dorm.name,
                    dorm.students.len(),
                    dorm.capacity,
                    dorm.gender
                );
            }
        }
    }

    Ok(())
}

/// Dormitory definitions come from `dorms.toml` in the data directory when
/// present, otherwise from the built-in set. Persisted allocation state
/// overrides both.
fn load_dorm_defaults(data_dir: &str) -> dorm_alloc::Result<dorm_alloc::core::DormMap> {
    let path = Path::new(data_dir).join("dorms.toml");
    if path.exists() {
        tracing::info!("Loading dormitory configuration from {}", path.display());
        let config = DormsConfig::from_file(&path)?;
        config.validate()?;
        Ok(config.into_dorms())
    } else {
        Ok(default_dorms())
    }
}
