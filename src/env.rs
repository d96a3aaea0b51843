use std::path::PathBuf;

use dotenv::dotenv;

/// Loads variables from a `.env` file in the working directory (or any parent),
/// so `PUZZLES_CSV` and `RUST_LOG` can be configured without exporting them.
///
/// Returns the path of the file that was loaded, if one was found.
/// Variables already present in the process environment win.
pub fn load_env() -> Option<PathBuf> {
    dotenv().ok()
}
