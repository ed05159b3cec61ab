mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

use common::{serve_once, temp_base};

fn script(home: &std::path::Path, server_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("career_wizard_cli").unwrap();
    cmd.env("CAREER_WIZARD_CLI_SCRIPT", "1")
        .env("CAREER_WIZARD_HOME", home)
        .env("CAREER_WIZARD_SERVER_URL", server_url)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_walks_the_survey_and_prints_results() {
    let home = temp_base();
    let (url, server) = serve_once(200, r#"[{"career":"Engineer","score":95}]"#);
    let input = "\
next
set mbti INTJ
next
check subjects Math
next
check strengths Logic
next
check interests Science
next
pick family_has_industry yes
next
set family_industry_select \"Information Technology\"
submit
exit
";

    script(&home, &url)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Answer the required questions on this step first."))
        .stdout(contains("Step 5 of 5: Family"))
        .stdout(contains("Please choose your family's industry."))
        .stdout(contains("Profile saved and suggestions generated."))
        .stdout(contains("Results\n1. Engineer  95"));

    let request = server.join().unwrap();
    assert!(request.contains(r#""family_industry_select":"Information Technology""#));
}

#[test]
fn answers_are_restored_on_the_next_run() {
    let home = temp_base();
    let unused = "http://127.0.0.1:9";

    script(&home, unused)
        .write_stdin("set mbti ENTP\nexit\n")
        .assert()
        .success();

    script(&home, unused)
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(contains("Restored your saved answers."))
        .stdout(contains("(mbti) *: ENTP"));
}

#[test]
fn typos_get_suggestions() {
    let home = temp_base();
    script(&home, "http://127.0.0.1:9")
        .write_stdin("nxt\nset mbit INTJ\nset mbti INTX\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `nxt`"))
        .stdout(contains("Did you mean `next`?"))
        .stdout(contains("Unknown field `mbit`. Did you mean `mbti`?"))
        .stdout(contains("`INTX` is not an option for `mbti`. Did you mean `INTJ`?"));
}

#[test]
fn guided_answers_need_a_terminal() {
    let home = temp_base();
    script(&home, "http://127.0.0.1:9")
        .write_stdin("answer\nquit\n")
        .assert()
        .success()
        .stdout(contains("`answer` needs an interactive terminal"));
}

#[test]
fn version_flag_prints_build_metadata() {
    Command::cargo_bin("career_wizard_cli")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "career_wizard {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn script_lines_are_echoed_and_defaults_written() {
    let home = temp_base();
    script(&home, "http://127.0.0.1:9")
        .write_stdin("# fill in the first step\nset mbti INTJ\nexit\n")
        .assert()
        .success()
        .stdout(contains("> set mbti INTJ"))
        .stdout(contains("> exit"))
        .stdout(contains("fill in the first step").not());

    let config = std::fs::read_to_string(home.join("config").join("config.json")).unwrap();
    assert!(config.contains(r#""status_clear_secs": 3"#));
}
