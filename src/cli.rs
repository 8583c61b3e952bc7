//! Command-line interface definition for anagram-builder

use clap::Parser;

/// Group dictionary words into anagram families
///
/// Every word in the dictionary is filed under its letters in sorted order;
/// the families whose sorted key has exactly LENGTH characters are printed.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "anagram-builder",
    version,
    about = "Group dictionary words into anagram families",
    long_about = r#"
Group dictionary words into anagram families and print the families of a
given length.

The dictionary is split on any whitespace. Words are compared exactly as
written: case and punctuation are significant.

EXAMPLES:
    # dictionary.txt, families of 5-letter words
    anagram-builder

    # families of 7-letter words from a custom list
    anagram-builder /usr/share/dict/words 7

    # empty arguments fall back to the defaults
    anagram-builder "" 4
"#
)]
pub struct Args {
    /// Dictionary file (default: dictionary.txt)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: Option<String>,

    /// Length of the anagram keys to print (default: 5)
    #[arg(value_name = "LENGTH", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Show statistics after the groups
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - only groups and errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
