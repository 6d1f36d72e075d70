//! CLI shell tests: argument handling and the distinguished exit statuses.
//!
//! Diagnostics (no GitHub remote, missing credentials, file never existed)
//! exit with status 200 and a message on stderr; unexpected failures exit 1.
//! Every scenario here is decided before any network call would happen.

mod common;

use assert_cmd::Command;
use common::repo::RepoFixture;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use rstest::{fixture, rstest};

const DIAGNOSTIC_EXIT_CODE: i32 = 200;

#[fixture]
fn repository_dir() -> assert_fs::TempDir {
    assert_fs::TempDir::new().expect("Failed to create temp dir")
}

/// Command pinned to the fixture repository, with HOME isolated so the
/// host's ~/.gitconfig cannot leak credentials or remotes into the test.
fn staredown_command(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("staredown").expect("Failed to find staredown binary");
    cmd.env("HOME", dir.path());
    cmd.arg("-r").arg(dir.path());
    cmd
}

/// A repository with one commit touching only `present.txt`.
fn repository_with_one_commit(dir: &assert_fs::TempDir) -> RepoFixture {
    let fixture = RepoFixture::init(dir.path());

    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    let blob = fixture.store_blob(&content);
    let tree = fixture.store_tree(&[("100644", "present.txt", &blob)]);
    let commit = fixture.store_commit(&tree, &[], "initial");
    fixture.set_head_to(&commit);

    fixture
}

#[test]
fn help_describes_the_tool() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("staredown")?;

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Find which GitHub pull requests have touched a file",
        ));

    Ok(())
}

#[test]
fn missing_filename_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("staredown")?;

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("FILENAME"));

    Ok(())
}

#[rstest]
fn not_a_repository_is_a_plain_error(
    repository_dir: assert_fs::TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    staredown_command(&repository_dir)
        .arg("README")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));

    Ok(())
}

#[rstest]
fn no_github_remote_exits_with_diagnostic(
    repository_dir: assert_fs::TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = repository_with_one_commit(&repository_dir);
    fixture.write_config(
        "[remote \"origin\"]\n\
         \turl = git@example.com:octo/widgets.git\n",
    );

    staredown_command(&repository_dir)
        .arg("present.txt")
        .assert()
        .failure()
        .code(DIAGNOSTIC_EXIT_CODE)
        .stderr(predicate::str::contains("No GitHub remotes"));

    Ok(())
}

#[rstest]
fn missing_credentials_exit_with_diagnostic(
    repository_dir: assert_fs::TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = repository_with_one_commit(&repository_dir);
    fixture.write_config(
        "[remote \"origin\"]\n\
         \turl = git@github.com:octo/widgets.git\n",
    );

    staredown_command(&repository_dir)
        .arg("present.txt")
        .assert()
        .failure()
        .code(DIAGNOSTIC_EXIT_CODE)
        .stderr(predicate::str::contains(
            "Please add GitHub username+token to Git config!",
        ));

    Ok(())
}

#[rstest]
fn failing_password_command_exits_with_diagnostic(
    repository_dir: assert_fs::TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = repository_with_one_commit(&repository_dir);
    fixture.write_config(
        "[remote \"origin\"]\n\
         \turl = git@github.com:octo/widgets.git\n\
         [staredown]\n\
         \tgithubusername = octocat\n\
         \tgithubpasswordcmd = exit 3\n",
    );

    staredown_command(&repository_dir)
        .arg("present.txt")
        .assert()
        .failure()
        .code(DIAGNOSTIC_EXIT_CODE)
        .stderr(predicate::str::contains("githubpasswordcmd"));

    Ok(())
}

#[rstest]
fn file_never_existed_exits_with_diagnostic(
    repository_dir: assert_fs::TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = repository_with_one_commit(&repository_dir);
    fixture.write_config(
        "[remote \"origin\"]\n\
         \turl = git@github.com:octo/widgets.git\n\
         [staredown]\n\
         \tgithubusername = octocat\n\
         \tgithubpassword = token123\n",
    );

    // Trace runs before any API request, so no network is touched here
    staredown_command(&repository_dir)
        .arg("absent.txt")
        .assert()
        .failure()
        .code(DIAGNOSTIC_EXIT_CODE)
        .stderr(predicate::str::contains("has never existed"));

    Ok(())
}

#[rstest]
fn unborn_branch_counts_as_never_existed(
    repository_dir: assert_fs::TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = RepoFixture::init(repository_dir.path());
    fixture.write_config(
        "[remote \"origin\"]\n\
         \turl = git@github.com:octo/widgets.git\n\
         [staredown]\n\
         \tgithubusername = octocat\n\
         \tgithubpassword = token123\n",
    );

    staredown_command(&repository_dir)
        .arg("anything.txt")
        .assert()
        .failure()
        .code(DIAGNOSTIC_EXIT_CODE)
        .stderr(predicate::str::contains("has never existed"));

    Ok(())
}
