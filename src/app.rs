use rand::rngs::StdRng;
use rand::SeedableRng;
use log::{info, warn, debug, trace};

use crate::config::Config;
use crate::mutation::{
    mutate_by_percentage, mutate_by_probability, MutationOutcome, DEFAULT_MUTATION_PROBABILITY,
};
use crate::sequence::{
    complement, find_palindromes, find_pattern_occurrences, gc_content, is_valid_dna,
    normalize_sequence, sequence_statistics, transcribe_to_rna, DEFAULT_PALINDROME_MIN_LENGTH,
};

const MIN_ANALYSIS_LENGTH: usize = 4;
const ANALYSIS_PATTERNS: [&str; 4] = ["CG", "AT", "GC", "TA"];
const ANALYSIS_PALINDROME_PREVIEW: usize = 3;
const ANALYSIS_MUTATION_PREVIEW: usize = 10;
const PERCENTAGE_MUTATION_PREVIEW: usize = 10;
const PROBABILITY_MUTATION_PREVIEW: usize = 15;
const MAX_TRANSCRIPT_LINES: usize = 1000;
const FAREWELL: &str = "Thank you for using DNA Sequence Analyzer!";

/// One line of the session transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Heading(String),
    Text(String),
    Sequence { label: String, sequence: String },
    Error(String),
    Echo { prompt: String, input: String },
}

impl OutputLine {
    pub fn plain_text(&self) -> String {
        match self {
            OutputLine::Heading(text) | OutputLine::Text(text) | OutputLine::Error(text) => text.clone(),
            OutputLine::Sequence { label, sequence } => format!("{label}: {sequence}"),
            OutputLine::Echo { prompt, input } => format!("{prompt}: {input}"),
        }
    }
}

/// Where the shell is waiting for input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    MainMenu,
    AnalyzeSequence,
    AnalyzeUsePercentage { sequence: String },
    AnalyzePercentage { sequence: String },
    PatternSequence,
    PatternQuery { sequence: String },
    MutationSequence,
    MutationMenu { sequence: String },
    MutationPercentage { sequence: String },
    MutationProbability { sequence: String },
    MutationAgain { sequence: String },
    PalindromeSequence,
    ReturnToMenu,
    Exited,
}

impl Step {
    pub fn prompt(&self) -> &'static str {
        match self {
            Step::MainMenu => "Enter your choice (1-5)",
            Step::AnalyzeSequence => "Enter DNA sequence (A, T, C, G only)",
            Step::AnalyzeUsePercentage { .. } => "Use mutation percentage? (y/n)",
            Step::AnalyzePercentage { .. } => "Enter mutation percentage (0-100)",
            Step::PatternSequence => "Enter DNA sequence to search in",
            Step::PatternQuery { .. } => "Enter pattern to search for",
            Step::MutationSequence | Step::PalindromeSequence => "Enter DNA sequence",
            Step::MutationMenu { .. } => "Enter your choice (1-3)",
            Step::MutationPercentage { .. } => "Enter percentage of bases to mutate (0-100)",
            Step::MutationProbability { .. } => "Enter mutation probability per base (0.0-1.0)",
            Step::MutationAgain { .. } => "Perform another mutation simulation? (y/n)",
            Step::ReturnToMenu => "Return to main menu? (y/n)",
            Step::Exited => "",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::MainMenu | Step::ReturnToMenu | Step::Exited => "Main Menu",
            Step::AnalyzeSequence
            | Step::AnalyzeUsePercentage { .. }
            | Step::AnalyzePercentage { .. } => "DNA Sequence Analysis",
            Step::PatternSequence | Step::PatternQuery { .. } => "Pattern Search Tool",
            Step::MutationSequence
            | Step::MutationMenu { .. }
            | Step::MutationPercentage { .. }
            | Step::MutationProbability { .. }
            | Step::MutationAgain { .. } => "Mutation Percentage Simulator",
            Step::PalindromeSequence => "Palindromic Sequence Finder",
        }
    }
}

/// Only a case-insensitive `y` counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

pub struct App {
    pub input: String,
    pub step: Step,
    pub transcript: Vec<OutputLine>,
    /// Last sequence that passed validation, shown in the side panel.
    pub current_sequence: Option<String>,
    rng: StdRng,
}

impl App {
    pub fn new(config: &Config) -> App {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        App::with_rng(rng)
    }

    pub fn with_seed(seed: u64) -> App {
        App::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> App {
        debug!("Creating new App instance");
        let mut app = App {
            input: String::new(),
            step: Step::MainMenu,
            transcript: Vec::new(),
            current_sequence: None,
            rng,
        };
        app.heading("Welcome!! Play with DNA Sequence Analyzer");
        app.enter_main_menu();
        app
    }

    pub fn is_running(&self) -> bool {
        self.step != Step::Exited
    }

    pub fn on_key(&mut self, c: char) {
        trace!("Input key '{c}' at {:?}", self.step);
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit whatever has been typed so far.
    pub fn on_enter(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.submit_line(&line);
    }

    /// Abandon the current tool, or quit from the main menu.
    pub fn on_escape(&mut self) {
        self.input.clear();
        match self.step {
            Step::MainMenu | Step::Exited => self.exit(),
            _ => {
                debug!("Escape from {:?}", self.step);
                self.enter_main_menu();
            }
        }
    }

    pub fn exit(&mut self) {
        if self.is_running() {
            info!("Session ended from {:?}", self.step);
            self.text(FAREWELL);
            self.step = Step::Exited;
        }
    }

    /// Feed one line of user input to the state machine.
    pub fn submit_line(&mut self, line: &str) {
        if !self.is_running() {
            return;
        }

        self.push(OutputLine::Echo {
            prompt: self.step.prompt().to_string(),
            input: line.to_string(),
        });

        let step = std::mem::replace(&mut self.step, Step::Exited);
        self.step = match step {
            Step::MainMenu => self.on_menu_choice(line),
            Step::AnalyzeSequence => self.on_analyze_sequence(line),
            Step::AnalyzeUsePercentage { sequence } => {
                if is_affirmative(line) {
                    Step::AnalyzePercentage { sequence }
                } else {
                    self.show_analysis(&sequence, None);
                    Step::ReturnToMenu
                }
            }
            Step::AnalyzePercentage { sequence } => {
                let percentage = match line.trim().parse::<f64>() {
                    Ok(p) if (0.0..=100.0).contains(&p) => Some(p),
                    Ok(p) => {
                        warn!("Analysis percentage {p} out of range");
                        self.error("Invalid percentage! Using default mutation rate.");
                        None
                    }
                    Err(e) => {
                        warn!("Unparsable analysis percentage {line:?}: {e}");
                        self.error("Invalid input! Using default mutation rate.");
                        None
                    }
                };
                self.show_analysis(&sequence, percentage);
                Step::ReturnToMenu
            }
            Step::PatternSequence => Step::PatternQuery {
                sequence: normalize_sequence(line),
            },
            Step::PatternQuery { sequence } => self.on_pattern_query(&sequence, line),
            Step::MutationSequence => self.on_mutation_sequence(line),
            Step::MutationMenu { sequence } => match line.trim() {
                "1" => Step::MutationPercentage { sequence },
                "2" => Step::MutationProbability { sequence },
                "3" => Step::ReturnToMenu,
                _ => {
                    self.error("Invalid choice! Please enter 1-3.");
                    Step::MutationAgain { sequence }
                }
            },
            Step::MutationPercentage { sequence } => self.on_mutation_percentage(sequence, line),
            Step::MutationProbability { sequence } => self.on_mutation_probability(sequence, line),
            Step::MutationAgain { sequence } => {
                if is_affirmative(line) {
                    self.show_mutation_options();
                    Step::MutationMenu { sequence }
                } else {
                    Step::ReturnToMenu
                }
            }
            Step::PalindromeSequence => self.on_palindrome_sequence(line),
            Step::ReturnToMenu => {
                if is_affirmative(line) {
                    self.show_main_menu();
                    Step::MainMenu
                } else {
                    self.text(FAREWELL);
                    Step::Exited
                }
            }
            Step::Exited => Step::Exited,
        };

        debug!("Shell step is now {:?}", self.step);
    }

    fn on_menu_choice(&mut self, line: &str) -> Step {
        match line.trim() {
            "1" => {
                self.heading("--- DNA SEQUENCE ANALYSIS ---");
                Step::AnalyzeSequence
            }
            "2" => {
                self.heading("--- PATTERN SEARCH TOOL ---");
                Step::PatternSequence
            }
            "3" => {
                self.heading("--- MUTATION PERCENTAGE SIMULATOR ---");
                Step::MutationSequence
            }
            "4" => {
                self.heading("--- PALINDROMIC SEQUENCE FINDER ---");
                Step::PalindromeSequence
            }
            "5" => {
                info!("Exit chosen from main menu");
                self.text(FAREWELL);
                Step::Exited
            }
            other => {
                warn!("Invalid menu choice {other:?}");
                self.error("Invalid choice! Please enter 1-5.");
                Step::ReturnToMenu
            }
        }
    }

    /// Validate a freshly entered sequence and remember it for the side panel.
    fn accept_sequence(&mut self, line: &str, error: &str) -> Option<String> {
        let sequence = normalize_sequence(line);
        if !is_valid_dna(&sequence) {
            warn!("Rejected sequence input of length {}", line.len());
            self.error(error);
            return None;
        }
        self.current_sequence = Some(sequence.clone());
        Some(sequence)
    }

    fn on_analyze_sequence(&mut self, line: &str) -> Step {
        let error = "ERROR: Invalid DNA sequence! Only A, T, C, G characters are allowed.";
        let Some(sequence) = self.accept_sequence(line, error) else {
            return self.back_to_menu();
        };

        if sequence.len() < MIN_ANALYSIS_LENGTH {
            self.error("ERROR: Sequence too short! Minimum 4 nucleotides required.");
            return self.back_to_menu();
        }

        Step::AnalyzeUsePercentage { sequence }
    }

    fn on_pattern_query(&mut self, sequence: &str, line: &str) -> Step {
        let pattern = normalize_sequence(line);
        if !is_valid_dna(sequence) || !is_valid_dna(&pattern) {
            warn!("Rejected pattern search input");
            self.error("ERROR: Invalid DNA sequence or pattern!");
            return self.back_to_menu();
        }
        self.current_sequence = Some(sequence.to_string());

        let positions = find_pattern_occurrences(sequence, &pattern);
        debug!("Pattern {pattern} matched {} times", positions.len());
        if positions.is_empty() {
            self.text(format!("Pattern '{pattern}' not found in the sequence."));
        } else {
            self.text(format!(
                "Pattern '{pattern}' found {} times at positions: {positions:?}",
                positions.len()
            ));
        }
        Step::ReturnToMenu
    }

    fn on_mutation_sequence(&mut self, line: &str) -> Step {
        let Some(sequence) = self.accept_sequence(line, "ERROR: Invalid DNA sequence!") else {
            return self.back_to_menu();
        };

        self.sequence_line("Current sequence", &sequence);
        self.text(format!("Sequence length: {} bases", sequence.len()));
        self.show_mutation_options();
        Step::MutationMenu { sequence }
    }

    fn on_mutation_percentage(&mut self, sequence: String, line: &str) -> Step {
        let percentage = match line.trim().parse::<f64>() {
            Ok(p) if (0.0..=100.0).contains(&p) => p,
            Ok(_) => {
                self.error("Error: Percentage must be between 0 and 100");
                self.show_mutation_options();
                return Step::MutationMenu { sequence };
            }
            Err(_) => {
                self.error("Please enter a valid number!");
                self.show_mutation_options();
                return Step::MutationMenu { sequence };
            }
        };

        let outcome = mutate_by_percentage(&sequence, percentage, &mut self.rng);
        info!("Percentage mutation at {percentage}%: {} changes", outcome.mutations.len());

        self.heading(format!("--- MUTATION RESULTS ({percentage}% mutation) ---"));
        self.sequence_line("Original", &sequence);
        self.sequence_line("Mutated", &outcome.sequence);
        self.text(format!("Total mutations: {} bases", outcome.mutations.len()));
        self.show_mutation_log(&outcome, PERCENTAGE_MUTATION_PREVIEW);
        self.text(format!(
            "Requested: {percentage}% | Actual: {:.2}%",
            outcome.actual_percentage()
        ));
        Step::MutationAgain { sequence }
    }

    fn on_mutation_probability(&mut self, sequence: String, line: &str) -> Step {
        let probability = match line.trim().parse::<f64>() {
            Ok(p) if (0.0..=1.0).contains(&p) => p,
            Ok(_) => {
                self.error("Error: Probability must be between 0.0 and 1.0");
                self.show_mutation_options();
                return Step::MutationMenu { sequence };
            }
            Err(_) => {
                self.error("Please enter a valid number!");
                self.show_mutation_options();
                return Step::MutationMenu { sequence };
            }
        };

        let outcome = mutate_by_probability(&sequence, probability, &mut self.rng);
        info!("Probability mutation at {probability}: {} changes", outcome.mutations.len());

        self.heading(format!("--- MUTATION RESULTS ({}% probability) ---", probability * 100.0));
        self.sequence_line("Original", &sequence);
        self.sequence_line("Mutated", &outcome.sequence);
        self.text(format!(
            "Total mutations: {} bases ({:.2}%)",
            outcome.mutations.len(),
            outcome.actual_percentage()
        ));
        self.show_mutation_log(&outcome, PROBABILITY_MUTATION_PREVIEW);
        Step::MutationAgain { sequence }
    }

    fn on_palindrome_sequence(&mut self, line: &str) -> Step {
        let Some(sequence) = self.accept_sequence(line, "ERROR: Invalid DNA sequence!") else {
            return self.back_to_menu();
        };

        let palindromes = find_palindromes(&sequence, DEFAULT_PALINDROME_MIN_LENGTH);
        if palindromes.is_empty() {
            self.text("No palindromic sequences found.");
        } else {
            self.text(format!("Found {} palindromic sequences:", palindromes.len()));
            for (i, palindrome) in palindromes.iter().enumerate() {
                self.text(format!(
                    "{}. '{}' at position {} (length: {})",
                    i + 1,
                    palindrome.sequence,
                    palindrome.position,
                    palindrome.length
                ));
            }
        }
        Step::ReturnToMenu
    }

    /// Full report for one sequence, with a mutation run.
    fn show_analysis(&mut self, sequence: &str, mutation_percentage: Option<f64>) {
        debug!("Analysing sequence of length {}", sequence.len());

        self.sequence_line("Original DNA", sequence);
        self.text(format!("GC Content: {}%", gc_content(sequence)));
        self.sequence_line("Complementary", &complement(sequence));
        self.sequence_line("RNA Transcript", &transcribe_to_rna(sequence));

        let outcome = match mutation_percentage {
            Some(percentage) => {
                self.heading(format!("--- Mutation ({percentage}% of bases mutated) ---"));
                mutate_by_percentage(sequence, percentage, &mut self.rng)
            }
            None => {
                self.heading(format!(
                    "--- Mutation ({}% probability per base) ---",
                    DEFAULT_MUTATION_PROBABILITY * 100.0
                ));
                mutate_by_probability(sequence, DEFAULT_MUTATION_PROBABILITY, &mut self.rng)
            }
        };

        self.sequence_line("Mutated DNA", &outcome.sequence);
        if outcome.mutations.is_empty() {
            self.text("No mutations occurred in this simulation.");
        } else {
            self.text(format!(
                "Mutations occurred: {} bases ({:.1}%)",
                outcome.mutations.len(),
                outcome.actual_percentage()
            ));
            self.show_mutation_log(&outcome, ANALYSIS_MUTATION_PREVIEW);
        }

        let stats = sequence_statistics(sequence);
        self.heading("--- DETAILED STATISTICS ---");
        self.text(format!("Sequence Length: {} nucleotides", stats.length));
        self.text(format!("Classification: {}", stats.classification));
        self.text(format!("AT/GC Ratio: {}", stats.at_gc_ratio));
        self.text("Base Composition:");
        for base in &stats.base_composition {
            self.text(format!("  {}: {} bases ({}%)", base.base, base.count, base.percentage));
        }

        self.heading("--- PATTERN ANALYSIS ---");
        for pattern in ANALYSIS_PATTERNS {
            let positions = find_pattern_occurrences(sequence, pattern);
            if !positions.is_empty() {
                self.text(format!(
                    "Pattern '{pattern}': {} occurrences at positions {positions:?}",
                    positions.len()
                ));
            }
        }

        self.heading("--- PALINDROMIC SEQUENCES ---");
        let palindromes = find_palindromes(sequence, DEFAULT_PALINDROME_MIN_LENGTH);
        if palindromes.is_empty() {
            self.text("No palindromic sequences found");
        } else {
            for (i, palindrome) in palindromes.iter().take(ANALYSIS_PALINDROME_PREVIEW).enumerate() {
                self.text(format!(
                    "Palindrome {}: '{}' at position {}",
                    i + 1,
                    palindrome.sequence,
                    palindrome.position
                ));
            }
        }
    }

    fn show_mutation_log(&mut self, outcome: &MutationOutcome, limit: usize) {
        if outcome.mutations.is_empty() {
            return;
        }
        self.text("Mutation details:");
        for record in outcome.mutations.iter().take(limit) {
            self.text(format!("  - {record}"));
        }
        if outcome.mutations.len() > limit {
            self.text(format!("  ... and {} more mutations", outcome.mutations.len() - limit));
        }
    }

    fn show_mutation_options(&mut self) {
        self.text("Mutation Options:");
        self.text("1. Specify exact percentage of bases to mutate");
        self.text("2. Use probability-based mutation (classic method)");
        self.text("3. Return to main menu");
    }

    fn show_main_menu(&mut self) {
        self.heading("MAIN MENU");
        self.text("1. Analyze your DNA Sequence");
        self.text("2. Pattern Search Tool");
        self.text("3. Mutation Percentage");
        self.text("4. Palindromic Sequence Finder");
        self.text("5. Exit");
    }

    fn back_to_menu(&mut self) -> Step {
        self.show_main_menu();
        Step::MainMenu
    }

    fn enter_main_menu(&mut self) {
        self.step = self.back_to_menu();
    }

    fn push(&mut self, line: OutputLine) {
        self.transcript.push(line);
        if self.transcript.len() > MAX_TRANSCRIPT_LINES {
            let overflow = self.transcript.len() - MAX_TRANSCRIPT_LINES;
            self.transcript.drain(..overflow);
        }
    }

    fn heading(&mut self, text: impl Into<String>) {
        self.push(OutputLine::Heading(text.into()));
    }

    fn text(&mut self, text: impl Into<String>) {
        self.push(OutputLine::Text(text.into()));
    }

    fn error(&mut self, text: impl Into<String>) {
        self.push(OutputLine::Error(text.into()));
    }

    fn sequence_line(&mut self, label: &str, sequence: &str) {
        self.push(OutputLine::Sequence {
            label: label.to_string(),
            sequence: sequence.to_string(),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript_text(app: &App) -> Vec<String> {
        app.transcript.iter().map(OutputLine::plain_text).collect()
    }

    #[test]
    fn test_starts_at_main_menu() {
        let app = App::with_seed(1);
        assert_eq!(app.step, Step::MainMenu);
        assert!(app.is_running());
        assert!(transcript_text(&app).iter().any(|l| l == "5. Exit"));
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" Y "));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_typed_keys_are_submitted_on_enter() {
        let mut app = App::with_seed(1);
        app.on_key('4');
        app.on_key('x');
        app.on_backspace();
        app.on_enter();
        assert!(app.input.is_empty());
        assert_eq!(app.step, Step::PalindromeSequence);
    }

    #[test]
    fn test_escape_returns_to_menu_then_quits() {
        let mut app = App::with_seed(1);
        app.submit_line("2");
        assert_eq!(app.step, Step::PatternSequence);
        app.on_escape();
        assert_eq!(app.step, Step::MainMenu);
        app.on_escape();
        assert!(!app.is_running());
    }

    #[test]
    fn test_input_after_exit_is_ignored() {
        let mut app = App::with_seed(1);
        app.submit_line("5");
        let len = app.transcript.len();
        app.submit_line("1");
        assert_eq!(app.step, Step::Exited);
        assert_eq!(app.transcript.len(), len);
    }

    #[test]
    fn test_transcript_is_bounded() {
        let mut app = App::with_seed(1);
        for _ in 0..(MAX_TRANSCRIPT_LINES / 2) {
            app.submit_line("9");
            app.submit_line("y");
        }
        assert!(app.transcript.len() <= MAX_TRANSCRIPT_LINES);
    }

    #[test]
    fn test_step_prompts() {
        assert_eq!(Step::MainMenu.prompt(), "Enter your choice (1-5)");
        assert_eq!(Step::ReturnToMenu.prompt(), "Return to main menu? (y/n)");
        assert_eq!(Step::PalindromeSequence.title(), "Palindromic Sequence Finder");
    }
}
