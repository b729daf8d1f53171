#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use battleships::{
        run_session, GameConfig, SessionSummary, ShipKind, CHEAT_CODE, ROW_ALPHABET,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn every_cell_script(rows: usize, cols: usize) -> String {
        let mut script = String::new();
        for letter in ROW_ALPHABET.chars().take(rows) {
            for col in 1..=cols {
                script.push_str(&format!("{}{}\n", letter, col));
            }
        }
        script
    }

    fn run_with(script: &str, seed: u64, config: GameConfig) -> (SessionSummary, String) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut out = Vec::new();
        let summary =
            run_session(Cursor::new(script.to_string()), &mut out, &mut rng, config).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    fn run(script: &str, seed: u64) -> (SessionSummary, String) {
        run_with(script, seed, GameConfig::default())
    }

    #[test]
    fn test_firing_everywhere_wins_the_round() {
        let (summary, output) = run(&every_cell_script(10, 10), 12345);
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.rounds_won, 1);
        assert!(summary.shots >= 13);
        assert!(output.contains("you sank the Battleship!"));
        assert_eq!(output.matches("you sank the Destroyer!").count(), 2);
        assert!(output.contains(&format!("All ships sunk in {} shots!", summary.shots)));
        assert!(output.contains("Play again? (y/n):"));
    }

    #[test]
    fn test_replay_starts_a_fresh_round() {
        // a lone battleship filling a 1x5 board is sunk by exactly A1..A5
        let config = GameConfig {
            rows: 1,
            cols: 5,
            fleet: vec![ShipKind::Battleship],
            ..GameConfig::default()
        };
        let round = every_cell_script(1, 5);
        let script = format!("{round}y\n{round}n\n");
        let (summary, output) = run_with(&script, 7, config);
        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.rounds_won, 2);
        assert_eq!(summary.shots, 10);
        assert_eq!(output.matches("All ships sunk in 5 shots!").count(), 2);
        assert_eq!(output.matches("A5: you sank the Battleship!").count(), 2);
    }

    #[test]
    fn test_quit_cheat_and_bad_input() {
        let script = format!("Q1\nA0\nK1\nA1\nA1\n{}\nquit\n", CHEAT_CODE);
        let (summary, output) = run(&script, 99);
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.rounds_won, 0);
        assert_eq!(summary.shots, 1);
        assert!(output.contains("Q1 is off the grid."));
        assert!(output.contains("K1 is off the grid."));
        assert!(output.contains("Invalid column number '0'"));
        assert!(output.contains("A1: already fired there."));
        assert!(output.contains("Ship positions:"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (summary, output) = run("", 1);
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.shots, 0);
        assert!(output.contains("3 ships are hidden on a 10x10 grid."));
    }
}
