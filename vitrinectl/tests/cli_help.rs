use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn top_level_help_lists_catalogs() {
    let mut cmd = cargo_bin_cmd!("vitrinectl");
    let output = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    for sub in ["products", "properties", "policies", "menu", "estimate"] {
        assert!(text.contains(sub), "help missing '{sub}'");
    }
}

#[test]
fn query_help_mentions_filters() {
    let mut cmd = cargo_bin_cmd!("vitrinectl");
    let output = cmd
        .arg("properties")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for flag in ["--category", "--min-price", "--beds", "--tag", "--sort", "--format"] {
        assert!(text.contains(flag), "properties help missing {flag}");
    }
}
