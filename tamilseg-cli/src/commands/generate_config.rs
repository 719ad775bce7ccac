//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = generate_template();

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;

                eprintln!("✓ Configuration template written to {}", path.display());
                eprintln!(
                    "  Use it with: tamilseg --config {} tokenize -i input.txt",
                    path.display()
                );
            }
            None => print!("{}", template),
        }

        Ok(())
    }
}

/// Template configuration content, holding the default values
pub fn generate_template() -> String {
    r#"# tamilseg configuration

[processing]
# Method used by `tokenize` when --method is not given
# One of: words, sentences, characters, graphemes, syllables
default_method = "words"

# Strip characters that are neither Tamil nor whitespace
# when running `clean`
strip_punctuation = false

[output]
# Format used when --format is not given: text, json or markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#
    .to_string()
}
