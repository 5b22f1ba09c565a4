use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["--seed", "1", "--hunt-a"]);
    assert!(v["winner"].is_string());
    assert_eq!(v["player_a"]["targeting"], "Hunt");
    assert_eq!(v["player_b"]["targeting"], "Random");
}

#[test]
fn sim_binary_is_reproducible() {
    let a = run_sim(&["--seed", "42", "--buffered", "--hunt-b"]);
    let b = run_sim(&["--seed", "42", "--buffered", "--hunt-b"]);
    assert_eq!(a, b);
}
