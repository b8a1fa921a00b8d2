use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_plugin_requires_project_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate-plugin", "auth"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'custom_plugins' directory does not exist"))
        .stderr(predicate::str::contains("inside your project directory"));

    assert!(ctx.snapshot().is_empty());
}
