use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zipmeta")]
#[command(version)]
#[command(about = "Extract plugin and theme metadata from ZIP archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipmeta my-plugin.zip          show package headers and readme overview\n  \
  zipmeta -m -s my-plugin.zip    flattened summary, markup-processed sections\n  \
  zipmeta -qq my-theme.zip       header fields only")]
pub struct Cli {
    /// Package archive path
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rewrite readme section headings for rich-text output
    #[arg(short = 'm', long)]
    pub markup: bool,

    /// Print the flattened legacy summary record
    #[arg(short = 's', long)]
    pub summary: bool,

    /// Quiet mode (-q => no section bodies, -qq => no readme)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn show_sections(&self) -> bool {
        self.quiet == 0
    }

    pub fn show_readme(&self) -> bool {
        self.quiet < 2
    }
}
