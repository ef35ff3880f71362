//! # Command-Line Interface
//!
//! The interactive shell around the task tracker.
//!
//! ## Commands
//!
//! | Command | Example |
//! |---------|---------|
//! | `todo` | `todo read book` |
//! | `deadline` | `deadline return book /by 2/12/2019 1800` |
//! | `event` | `event meeting /from 2/12/2019 1400 /to 2/12/2019 1600` |
//! | `list` | `list` |
//! | `find` | `find book` |
//! | `mark` / `unmark` | `mark 2` |
//! | `delete` | `delete 3` |
//! | `bye` | `bye` (also `exit`, `close`) |
//!
//! ## Output Formats
//!
//! `--format text` (default) frames each reply with divider lines;
//! `--format json` prints one JSON object per command.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! cow --verbose --file tasks.txt
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session.

mod app;
mod output;
mod session;

pub use app::{run, Cli};
pub use output::{Output, OutputFormat};
pub use session::Session;
