use assert_cmd::Command;
use predicates::prelude::*;

// Nothing listens on the discard port
const DEAD_SERVER: &str = "http://127.0.0.1:9";

fn blog_cli() -> Command {
    let mut cmd = Command::cargo_bin("blog-cli").unwrap();
    cmd.env_remove("BLOG_SERVER").env("RUST_LOG", "off");
    cmd
}

#[test]
fn help_lists_commands() {
    blog_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("create"));
}

#[test]
fn list_reports_unavailable_store() {
    blog_cli()
        .args(["--server", DEAD_SERVER, "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Store unavailable"));
}

#[test]
fn create_with_empty_title_is_refused_locally() {
    blog_cli()
        .args([
            "--server", DEAD_SERVER, "create", "--title", "", "--body", "x", "--author", "y",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing required fields: title"));
}

#[test]
fn create_against_dead_server_fails() {
    blog_cli()
        .args([
            "--server", DEAD_SERVER, "create", "--title", "C", "--body", "x", "--author", "y",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create post: Store unavailable"));
}
