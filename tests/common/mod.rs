use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
    sync::Once
};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Rows chosen to hit band edges, a single-puzzle band, a missing play count,
/// an out-of-range rating and a missing rating.
pub const FIXTURE_CSV: &str = "\
PuzzleId,FEN,Moves,Rating,RatingDeviation,Popularity,NbPlays,Themes
00001,8/8/8/8/8/8/8/K6k w - - 0 1,a1a2,800,75,90,100,endgame
00002,8/8/8/8/8/8/8/K6k w - - 0 1,a1a2,900,75,90,300,endgame
00003,8/8/8/8/8/8/8/K6k w - - 0 1,a1a2,1000,75,90,,endgame
00004,8/8/8/8/8/8/8/K6k w - - 0 1,a1a2,1500,75,90,50,mate
00005,8/8/8/8/8/8/8/K6k w - - 0 1,a1a2,2500,75,90,10,mate
00006,8/8/8/8/8/8/8/K6k w - - 0 1,a1a2,3000,75,90,20,mate
00007,8/8/8/8/8/8/8/K6k w - - 0 1,a1a2,3100,75,90,5,mate
00008,8/8/8/8/8/8/8/K6k w - - 0 1,a1a2,,75,90,7,mate
";

/// Scratch directory unique to one test
pub fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("puzzle_stats_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

pub fn write_csv(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("puzzles.csv");
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Runs the compiled binary from `dir` with a controlled environment
pub fn run_cli(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_puzzle-stats"));
    cmd.current_dir(dir).env_remove("PUZZLES_CSV").env("RUST_LOG", "warn").args(args);

    for (key, value) in envs {
        cmd.env(key, value);
    }

    cmd.output().expect("Failed to execute puzzle-stats")
}
