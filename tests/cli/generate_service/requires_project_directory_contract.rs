use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn generate_service_requires_project_directory() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.work_dir().join("custom_plugins")).unwrap();
    let before = ctx.snapshot();

    ctx.cli()
        .args(["generate-service", "mailer"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'custom_services' directory does not exist"));

    assert_eq!(ctx.snapshot(), before);
}
