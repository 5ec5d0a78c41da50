//! One-shot generation driven by command-line flags.

mod context;
mod flags;
mod parse;
pub mod prompts;
mod quiet;

pub use context::{Context, Done, EXIT_USAGE};
pub use flags::CliFlags;
pub use parse::{MAX_COUNT, ParseError, parse};

/// Run CLI mode and return the process exit status.
pub fn run(args: &[String]) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            return EXIT_USAGE;
        }
    };

    match ctx.run() {
        Ok(()) => 0,
        Err(Done(code)) => code,
    }
}
