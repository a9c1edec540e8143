use pretty_assertions::assert_eq;
use tests::{assert_contains, fixtures, str::count, HostProject};

#[test]
fn candidate_scenario() {
    let project = HostProject::new();
    project.generate("candidate");

    assert_eq!(
        project.files_in("candidate"),
        [
            "candidate.controller.rs",
            "candidate.entity.rs",
            "candidate.module.rs",
            "candidate.repository.rs",
            "candidate.service.rs",
        ]
    );

    let entity = project.read("candidate/candidate.entity.rs");
    assert_contains!(entity, "pub struct Candidate {");

    let root = project.composition_root();
    assert_contains!(
        root,
        "#[path = \"candidate/candidate.module.rs\"]\npub mod candidate;\nuse candidate::CandidateModule;"
    );
    assert_contains!(root, "&[&StoreModule, &CandidateModule];");
}

#[test]
fn output_matches_checked_in_fixtures() {
    let project = HostProject::new();
    project.generate("candidate");

    for (file, expected) in fixtures::CANDIDATE {
        assert_eq!(project.read(format!("candidate/{file}")), expected, "{file}");
    }
    assert_eq!(project.composition_root(), fixtures::APP_MODULE);
}

#[test]
fn several_features_share_one_root() {
    let project = HostProject::new();
    for name in ["candidate", "job-role", "talent pool", "job-role"] {
        project.generate(name);
    }

    let root = project.composition_root();
    assert_contains!(
        root,
        "= &[&StoreModule, &CandidateModule, &JobRoleModule, &TalentPoolModule];"
    );
    assert_eq!(count(&root, "use job_role::JobRoleModule;"), 1);
    assert_contains!(root, "#[path = \"talent pool/talent pool.module.rs\"]\npub mod talent_pool;");

    assert_eq!(project.files_in("talent pool").len(), 5);
    assert_contains!(
        project.read("talent pool/talent pool.repository.rs"),
        "pub const TABLE: &'static str = \"talent pool\";"
    );
}

#[test]
fn repeat_generation_leaves_tree_unchanged() {
    let project = HostProject::new();
    project.generate("candidate");
    let root = project.composition_root();
    let entity = project.read("candidate/candidate.entity.rs");

    let report = project.generate("Candidate");

    assert!(report.is_noop());
    assert_eq!(project.composition_root(), root);
    assert_eq!(project.read("candidate/candidate.entity.rs"), entity);
}

#[test]
fn report_describes_the_run() {
    let project = HostProject::new();
    let report = project.generate("job-role");

    assert_eq!(report.feature.type_name(), "JobRole");
    assert_eq!(report.dir, project.src().join("job-role"));
    assert_eq!(report.written().count(), 5);
    assert!(report.registration.import_added);
    assert!(report.registration.entry_added);
}
