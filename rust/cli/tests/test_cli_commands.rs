use blackjack_cli::run;

fn run_cmd(args: &[&str]) -> (i32, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["blackjack"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn cfg_prints_values_with_sources() {
    let (code, out) = run_cmd(&["cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    for key in ["decks", "starting_money", "seed"] {
        let source = json[key]["source"].as_str().unwrap();
        assert!(
            ["default", "file", "env"].contains(&source),
            "{} has source {}",
            key,
            source
        );
    }
}

#[test]
fn deal_is_deterministic_and_shows_both_sides() {
    let (code, a) = run_cmd(&["deal", "--seed", "2024"]);
    let (_, b) = run_cmd(&["deal", "--seed", "2024"]);
    assert_eq!(code, 0);
    assert_eq!(a, b);
    assert!(a.starts_with("Seed: 2024\n"));
    assert!(a.contains("Player: ["));
    assert!(a.contains("Dealer: ["));
}

#[test]
fn deal_without_seed_reports_the_one_used() {
    let (code, out) = run_cmd(&["deal"]);
    assert_eq!(code, 0);
    let seed_line = out.lines().next().unwrap();
    assert!(seed_line.starts_with("Seed: "));
    assert!(seed_line["Seed: ".len()..].parse::<u64>().is_ok());
}

#[test]
fn verbose_flag_is_accepted_everywhere() {
    assert_eq!(run_cmd(&["--verbose", "deal", "--seed", "1"]).0, 0);
    assert_eq!(run_cmd(&["deal", "-v", "--seed", "1"]).0, 0);
}
