//! Terminal output formatting.
//!
//! Command results go to stdout untouched so they can be piped; status
//! messages go to stderr.

pub mod colors;
pub mod errors;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print command output followed by a newline
    pub fn print(&self, text: &str) {
        println!("{}", text);
    }

    /// Print command output exactly as given
    pub fn print_raw(&self, text: &str) {
        print!("{}", text);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", self.colors.green("✓"), message);
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
