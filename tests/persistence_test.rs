use dorm_alloc::config::cli::STATE_FILE;
use dorm_alloc::core::StateStore;
use dorm_alloc::{
    default_dorms, AllocationDesk, AllocError, AllocationStore, Candidate, FileStateStore, Gender,
    TextRoster,
};
use tempfile::TempDir;

fn store_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join(STATE_FILE)
}

#[test]
fn test_round_trip_is_lossless_for_populated_state() {
    let temp_dir = TempDir::new().unwrap();
    let file_store = FileStateStore::new(temp_dir.path().to_str().unwrap().to_string());

    let mut store = AllocationStore::from_dorms(default_dorms());
    for (roll, gender, dorm) in [
        ("101", Gender::Female, "B"),
        ("102", Gender::Male, "A"),
        ("103", Gender::Male, "C"),
    ] {
        store
            .add_student(
                Candidate {
                    name: format!("Student {}", roll),
                    roll: roll.to_string(),
                    course: "CS".to_string(),
                    year: "1".to_string(),
                    gender,
                },
                dorm,
            )
            .unwrap();
    }

    file_store.save(store.dorms()).unwrap();
    let loaded = file_store.load().unwrap().unwrap();

    assert_eq!(&loaded, store.dorms());
}

#[test]
fn test_every_mutation_rewrites_the_blob() {
    let temp_dir = TempDir::new().unwrap();
    let state = FileStateStore::new(temp_dir.path().to_str().unwrap().to_string());
    let mut desk = AllocationDesk::open(state, TextRoster::new(), default_dorms()).unwrap();

    assert!(!store_path(&temp_dir).exists());

    desk.submit(
        Candidate {
            name: "Asha".to_string(),
            roll: "101".to_string(),
            course: "CS".to_string(),
            year: "1".to_string(),
            gender: Gender::Female,
        },
        "B",
    )
    .unwrap();

    let blob = std::fs::read_to_string(store_path(&temp_dir)).unwrap();
    assert!(blob.contains("Asha"));
    assert!(blob.contains("Hostel B"));
}

#[test]
fn test_corrupt_state_file_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(store_path(&temp_dir), "definitely not json").unwrap();

    let state = FileStateStore::new(temp_dir.path().to_str().unwrap().to_string());
    let result = AllocationDesk::open(state, TextRoster::new(), default_dorms());

    assert!(matches!(result, Err(AllocError::SerializationError(_))));
}

#[test]
fn test_absent_state_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let state = FileStateStore::new(temp_dir.path().to_str().unwrap().to_string());

    let desk = AllocationDesk::open(state, TextRoster::new(), default_dorms()).unwrap();

    assert_eq!(desk.store().dorms().len(), 3);
    assert_eq!(desk.store().student_count(), 0);
}
