use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_exhaustive_spaced() {
    // trailing spaces are part of the output format
    let output = "Solving puzzles/one-step.txt using exhaustive...
States created: 3
States expanded: 2
Re-expanded duplicates: 0
Successors skipped: 0
Largest frontier: 2

Solution:
A - \n- - \n
- A \n- - \n
Number of states expanded: 2
";

    Command::main_binary()
        .unwrap()
        .arg("--method")
        .arg("1")
        .arg("puzzles/one-step.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_dfs_compact() {
    let output = r"Solving puzzles/one-step.txt using exhaustive...
States created: 3
States expanded: 2
Re-expanded duplicates: 0
Successors skipped: 0
Largest frontier: 2

Solution:
A-
--

-A
--

Number of states expanded: 2
";

    Command::main_binary()
        .unwrap()
        .arg("-m")
        .arg("dfs")
        .arg("--compact")
        .arg("puzzles/one-step.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_greedy_no_solution() {
    let output = r"Solving puzzles/no-moves.txt using greedy...
States created: 1
States expanded: 1
Re-expanded duplicates: 0
Successors skipped: 0
Largest frontier: 1

No solution found.
";

    Command::main_binary()
        .unwrap()
        .arg("--method")
        .arg("2")
        .arg("puzzles/no-moves.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_expansion_limit() {
    let output = r"Solving puzzles/four-pieces.txt using exhaustive...
States created: 1
States expanded: 1
Re-expanded duplicates: 0
Successors skipped: 0
Largest frontier: 1

Expansion limit reached after 1 states.
";

    Command::main_binary()
        .unwrap()
        .arg("--method")
        .arg("exhaustive")
        .arg("--max-expansions")
        .arg("1")
        .arg("puzzles/four-pieces.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_four_pieces() {
    for method in &["1", "2"] {
        for strict in &[false, true] {
            let mut cmd = Command::main_binary().unwrap();
            cmd.arg("--method").arg(method);
            if *strict {
                cmd.arg("--strict-frontier");
            }
            let output = cmd.arg("puzzles/four-pieces.txt").output().unwrap();
            assert!(output.status.success());

            let stdout = String::from_utf8(output.stdout).unwrap();
            assert!(stdout.contains("Solution:\nA - - - \n- - - - \n- - D - \n- B C - \n\n"));
            // the goal is the last board printed
            assert!(stdout.contains("- - - - \nA - D - \n- B C - \n- - - - \n\nNumber of states expanded: "));
        }
    }
}

#[test]
fn run_invalid_choice() {
    Command::main_binary()
        .unwrap()
        .arg("--method")
        .arg("3")
        .arg("puzzles/one-step.txt")
        .assert()
        .failure()
        .stdout("Invalid choice\n");
}

#[test]
fn run_menu_without_input() {
    // stdin is closed so the menu reads nothing
    let output = "Choose algorithm:\n1. Depth-First Search\n2. Best-First Search\nEnter choice: Invalid choice\n";

    Command::main_binary()
        .unwrap()
        .arg("puzzles/one-step.txt")
        .assert()
        .failure()
        .stdout(output);
}

#[test]
fn run_malformed_input() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--method")
        .arg("1")
        .arg("puzzles/invalid-cell.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Can't load puzzle puzzles/invalid-cell.txt"));
    assert!(stdout.ends_with("Invalid cell at pos: [1, 1]\n"));
    assert!(!stdout.contains("Solving"));
}

#[test]
fn run_bad_formatting_args() {
    // doesn't check stderr - clap may complain about either flag
    Command::main_binary()
        .unwrap()
        .arg("--spaced")
        .arg("--compact")
        .arg("puzzles/one-step.txt")
        .assert()
        .failure()
        .stdout("");
}
