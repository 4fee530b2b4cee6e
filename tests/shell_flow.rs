use dnazap::app::{OutputLine, Step};
use dnazap::App;

fn transcript_text(app: &App) -> Vec<String> {
    app.transcript.iter().map(OutputLine::plain_text).collect()
}

fn has_line(app: &App, expected: &str) -> bool {
    transcript_text(app).iter().any(|line| line == expected)
}

fn has_line_starting(app: &App, prefix: &str) -> bool {
    transcript_text(app).iter().any(|line| line.starts_with(prefix))
}

fn submit_all(app: &mut App, lines: &[&str]) {
    for line in lines {
        app.submit_line(line);
    }
}

#[test]
fn test_full_analysis_with_default_mutation() {
    let mut app = App::with_seed(42);
    submit_all(&mut app, &["1", "  gaattcgc ", "n"]);

    assert_eq!(app.step, Step::ReturnToMenu);
    assert_eq!(app.current_sequence.as_deref(), Some("GAATTCGC"));
    assert!(has_line(&app, "Original DNA: GAATTCGC"));
    assert!(has_line(&app, "GC Content: 50%"));
    assert!(has_line(&app, "Complementary: CTTAAGCG"));
    assert!(has_line(&app, "RNA Transcript: GAAUUCGC"));
    assert!(has_line(&app, "--- Mutation (10% probability per base) ---"));
    assert!(has_line(&app, "Sequence Length: 8 nucleotides"));
    assert!(has_line(&app, "Classification: Balanced"));
    assert!(has_line(&app, "AT/GC Ratio: 1"));
    assert!(has_line(&app, "  A: 2 bases (25%)"));
    assert!(has_line(&app, "Pattern 'CG': 1 occurrences at positions [5]"));
    assert!(!has_line_starting(&app, "Pattern 'TA'"));
    assert!(has_line(&app, "Palindrome 1: 'AATT' at position 1"));
}

#[test]
fn test_analysis_with_full_percentage_mutation() {
    let mut app = App::with_seed(7);
    submit_all(&mut app, &["1", "ATCGATCG", "Y", "100"]);

    assert!(has_line(&app, "--- Mutation (100% of bases mutated) ---"));
    assert!(has_line(&app, "Mutations occurred: 8 bases (100.0%)"));
    assert!(has_line(&app, "Mutation details:"));
    assert_eq!(app.step, Step::ReturnToMenu);
}

#[test]
fn test_analysis_percentage_falls_back_to_default() {
    let mut app = App::with_seed(7);
    submit_all(&mut app, &["1", "ATCGATCG", "y", "150"]);
    assert!(has_line(&app, "Invalid percentage! Using default mutation rate."));
    assert!(has_line(&app, "--- Mutation (10% probability per base) ---"));

    let mut app = App::with_seed(7);
    submit_all(&mut app, &["1", "ATCGATCG", "y", "lots"]);
    assert!(has_line(&app, "Invalid input! Using default mutation rate."));
    assert_eq!(app.step, Step::ReturnToMenu);
}

#[test]
fn test_analysis_rejects_bad_sequences() {
    let mut app = App::with_seed(1);
    submit_all(&mut app, &["1", "ATXG"]);
    assert!(has_line(
        &app,
        "ERROR: Invalid DNA sequence! Only A, T, C, G characters are allowed."
    ));
    assert_eq!(app.step, Step::MainMenu);
    assert!(app.current_sequence.is_none());

    submit_all(&mut app, &["1", "ATG"]);
    assert!(has_line(&app, "ERROR: Sequence too short! Minimum 4 nucleotides required."));
    assert_eq!(app.step, Step::MainMenu);
}

#[test]
fn test_pattern_search() {
    let mut app = App::with_seed(1);
    submit_all(&mut app, &["2", "aaaa", "aa"]);
    assert!(has_line(&app, "Pattern 'AA' found 3 times at positions: [0, 1, 2]"));

    submit_all(&mut app, &["y", "2", "ATCG", "GG"]);
    assert!(has_line(&app, "Pattern 'GG' not found in the sequence."));

    submit_all(&mut app, &["y", "2", "ATCG", "XY"]);
    assert!(has_line(&app, "ERROR: Invalid DNA sequence or pattern!"));
    assert_eq!(app.step, Step::MainMenu);
}

#[test]
fn test_mutation_simulator_session() {
    let mut app = App::with_seed(3);
    submit_all(&mut app, &["3", "ATCGATCGAT"]);
    assert!(matches!(app.step, Step::MutationMenu { .. }));
    assert!(has_line(&app, "Sequence length: 10 bases"));

    submit_all(&mut app, &["1", "50"]);
    assert!(has_line(&app, "Total mutations: 5 bases"));
    assert!(has_line(&app, "Requested: 50% | Actual: 50.00%"));
    assert!(matches!(app.step, Step::MutationAgain { .. }));

    submit_all(&mut app, &["y", "2", "1.0"]);
    assert!(has_line(&app, "Total mutations: 10 bases (100.00%)"));

    submit_all(&mut app, &["y", "3"]);
    assert_eq!(app.step, Step::ReturnToMenu);
}

#[test]
fn test_mutation_simulator_reprompts_on_bad_numbers() {
    let mut app = App::with_seed(3);
    submit_all(&mut app, &["3", "ATCG", "1", "101"]);
    assert!(has_line(&app, "Error: Percentage must be between 0 and 100"));
    assert!(matches!(app.step, Step::MutationMenu { .. }));

    submit_all(&mut app, &["2", "-0.5"]);
    assert!(has_line(&app, "Error: Probability must be between 0.0 and 1.0"));
    assert!(matches!(app.step, Step::MutationMenu { .. }));

    submit_all(&mut app, &["1", "abc"]);
    assert!(has_line(&app, "Please enter a valid number!"));
    assert!(matches!(app.step, Step::MutationMenu { .. }));

    submit_all(&mut app, &["7"]);
    assert!(has_line(&app, "Invalid choice! Please enter 1-3."));
    assert!(matches!(app.step, Step::MutationAgain { .. }));

    submit_all(&mut app, &["n"]);
    assert_eq!(app.step, Step::ReturnToMenu);
}

#[test]
fn test_palindrome_finder() {
    let mut app = App::with_seed(1);
    submit_all(&mut app, &["4", "GAATTC"]);
    assert!(has_line(&app, "Found 2 palindromic sequences:"));
    assert!(has_line(&app, "1. 'AATT' at position 1 (length: 4)"));
    assert!(has_line(&app, "2. 'GAATTC' at position 0 (length: 6)"));

    submit_all(&mut app, &["y", "4", "AAAA"]);
    assert!(has_line(&app, "No palindromic sequences found."));
}

#[test]
fn test_return_prompt_only_accepts_y() {
    let mut app = App::with_seed(1);
    submit_all(&mut app, &["4", "GAATTC", "yes"]);
    assert!(!app.is_running());
    assert!(has_line(&app, "Thank you for using DNA Sequence Analyzer!"));
}

#[test]
fn test_invalid_menu_choice_then_exit() {
    let mut app = App::with_seed(1);
    submit_all(&mut app, &["9"]);
    assert!(has_line(&app, "Invalid choice! Please enter 1-5."));
    assert_eq!(app.step, Step::ReturnToMenu);

    submit_all(&mut app, &["Y", "5"]);
    assert_eq!(app.step, Step::Exited);
}

#[test]
fn test_same_seed_gives_same_session() {
    let mut first = App::with_seed(99);
    let mut second = App::with_seed(99);
    submit_all(&mut first, &["1", "GATTACAGATTACA", "y", "30"]);
    submit_all(&mut second, &["1", "GATTACAGATTACA", "y", "30"]);
    assert_eq!(first.transcript, second.transcript);
}
