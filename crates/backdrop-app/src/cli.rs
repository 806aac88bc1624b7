use std::path::PathBuf;

use backdrop_common::{parse_color, AnimationDirection, Color};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Backdrop: CSS background generator for patterns, gradients and hybrids.
#[derive(Parser, Debug)]
#[command(name = "backdrop", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `backdrop=debug`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Load catalogs from this directory instead of the configured source.
    #[arg(long, global = true, conflicts_with = "catalog_url")]
    pub catalog_dir: Option<PathBuf>,

    /// Load catalogs from this base URL instead of the configured source.
    #[arg(long, global = true)]
    pub catalog_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a pattern background.
    Pattern(PatternArgs),
    /// Generate a gradient background.
    Gradient(GradientArgs),
    /// Generate a pattern layered over a gradient.
    Hybrid(HybridArgs),
    /// List the templates in a catalog.
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },
    /// Show or toggle the persisted light/dark preference.
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Patterns,
    Gradients,
}

/// Output options shared by the generator subcommands.
#[derive(ClapArgs, Debug, Default)]
pub struct OutputArgs {
    /// Draw a random parameter set before applying explicit flags.
    #[arg(long)]
    pub random: bool,

    /// Seed for `--random`.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Print the style object and CSS as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also print the contrast theming record as JSON.
    #[arg(long)]
    pub theming: bool,

    /// Copy the CSS to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Class selector for the rule block.
    #[arg(long)]
    pub selector: Option<String>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct AnimationArgs {
    /// Enable animation.
    #[arg(long)]
    pub animated: bool,

    /// Animation speed, 1 (slowest) to 20 (fastest).
    #[arg(long)]
    pub speed: Option<u8>,

    /// normal, reverse, alternate or alternate-reverse.
    #[arg(long)]
    pub direction: Option<AnimationDirection>,
}

#[derive(ClapArgs, Debug)]
pub struct PatternArgs {
    /// Pattern template id.
    #[arg(long)]
    pub template: Option<String>,

    #[arg(long, value_parser = color_arg)]
    pub fg: Option<Color>,

    #[arg(long, value_parser = color_arg)]
    pub bg: Option<Color>,

    /// Percent, 0-100.
    #[arg(long)]
    pub opacity: Option<u8>,

    /// Pixels, 5-100.
    #[arg(long)]
    pub spacing: Option<u32>,

    #[command(flatten)]
    pub animation: AnimationArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
pub struct GradientArgs {
    /// Gradient template id.
    #[arg(long)]
    pub template: Option<String>,

    /// Up to four stop colors, in order.
    #[arg(long = "color", value_parser = color_arg, num_args = 1..=4, value_delimiter = ',')]
    pub colors: Vec<Color>,

    /// Percent, 0-100.
    #[arg(long)]
    pub opacity: Option<u8>,

    /// Degrees, 0-360. Linear templates only.
    #[arg(long)]
    pub angle: Option<u16>,

    #[command(flatten)]
    pub animation: AnimationArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
pub struct HybridArgs {
    /// Pattern template id.
    #[arg(long)]
    pub pattern: Option<String>,

    /// Gradient template id.
    #[arg(long)]
    pub gradient: Option<String>,

    #[arg(long, value_parser = color_arg)]
    pub pattern_color: Option<Color>,

    /// Up to four gradient stop colors, in order.
    #[arg(long = "color", value_parser = color_arg, num_args = 1..=4, value_delimiter = ',')]
    pub colors: Vec<Color>,

    /// Pattern layer opacity, baked into the pattern color.
    #[arg(long)]
    pub pattern_opacity: Option<u8>,

    /// Opacity of the whole element.
    #[arg(long)]
    pub gradient_opacity: Option<u8>,

    #[arg(long)]
    pub spacing: Option<u32>,

    #[arg(long)]
    pub angle: Option<u16>,

    #[command(flatten)]
    pub animation: AnimationArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn color_arg(s: &str) -> Result<Color, String> {
    parse_color(s).map_err(|e| e.to_string())
}

pub fn parse() -> Args {
    Args::parse()
}
