//! Subcommand handlers.

use backdrop_catalog::{load, load_both, CatalogKind, CatalogSource};
use backdrop_common::{BackdropError, ConfigError, GeneratorMode};
use backdrop_config::validation::is_valid_selector;
use backdrop_config::{BackdropConfig, FileThemeStore, OutputConfig, ThemeService};
use backdrop_generator::{Generator, GradientGenerator, HybridGenerator, PatternGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

use crate::cli::{Args, Command, GradientArgs, HybridArgs, ListKind, OutputArgs, PatternArgs};
use crate::clipboard;
use crate::sources;

pub async fn run(args: &Args, config: &BackdropConfig) -> Result<(), BackdropError> {
    let source = sources::select(args, &config.catalog);
    debug!(source = %source.describe(), "catalog source selected");

    match &args.command {
        Command::Pattern(cmd) => pattern(cmd, source.as_ref(), &config.output).await,
        Command::Gradient(cmd) => gradient(cmd, source.as_ref(), &config.output).await,
        Command::Hybrid(cmd) => hybrid(cmd, source.as_ref(), &config.output).await,
        Command::List { kind } => list(*kind, source.as_ref()).await,
        Command::Theme { toggle } => theme(*toggle),
    }
}

// -----------------------------------------------------------------------------
// Generators
// -----------------------------------------------------------------------------

async fn pattern(
    cmd: &PatternArgs,
    source: &dyn CatalogSource,
    output: &OutputConfig,
) -> Result<(), BackdropError> {
    let selector = selector(&cmd.output, output, GeneratorMode::Pattern)?;
    let catalog = load(CatalogKind::Patterns, source).await;
    let mut gen = PatternGenerator::new(catalog).with_selector(selector);
    randomize(&mut gen, &cmd.output);

    if let Some(id) = &cmd.template {
        gen.set_template(id.clone());
    }
    if let Some(color) = cmd.fg {
        gen.set_foreground(color);
    }
    if let Some(color) = cmd.bg {
        gen.set_background(color);
    }
    if let Some(opacity) = cmd.opacity {
        gen.set_opacity(opacity);
    }
    if let Some(spacing) = cmd.spacing {
        gen.set_spacing(spacing);
    }
    if cmd.animation.animated {
        gen.set_animated(true);
    }
    if let Some(speed) = cmd.animation.speed {
        gen.set_speed(speed);
    }
    if let Some(direction) = cmd.animation.direction {
        gen.set_direction(direction);
    }

    emit(&mut gen, &cmd.output)
}

async fn gradient(
    cmd: &GradientArgs,
    source: &dyn CatalogSource,
    output: &OutputConfig,
) -> Result<(), BackdropError> {
    let selector = selector(&cmd.output, output, GeneratorMode::Gradient)?;
    let catalog = load(CatalogKind::Gradients, source).await;
    let mut gen = GradientGenerator::new(catalog).with_selector(selector);
    randomize(&mut gen, &cmd.output);

    if let Some(id) = &cmd.template {
        gen.set_template(id.clone());
    }
    for (i, color) in cmd.colors.iter().enumerate() {
        gen.set_color(i, *color);
    }
    if let Some(opacity) = cmd.opacity {
        gen.set_opacity(opacity);
    }
    if let Some(angle) = cmd.angle {
        gen.set_angle(angle);
    }
    if cmd.animation.animated {
        gen.set_animated(true);
    }
    if let Some(speed) = cmd.animation.speed {
        gen.set_speed(speed);
    }
    if let Some(direction) = cmd.animation.direction {
        gen.set_direction(direction);
    }

    emit(&mut gen, &cmd.output)
}

async fn hybrid(
    cmd: &HybridArgs,
    source: &dyn CatalogSource,
    output: &OutputConfig,
) -> Result<(), BackdropError> {
    let selector = selector(&cmd.output, output, GeneratorMode::Hybrid)?;
    let (patterns, gradients) = load_both(source).await;
    let mut gen = HybridGenerator::new(patterns, gradients).with_selector(selector);
    randomize(&mut gen, &cmd.output);

    if let Some(id) = &cmd.pattern {
        gen.set_pattern(id.clone());
    }
    if let Some(id) = &cmd.gradient {
        gen.set_gradient(id.clone());
    }
    if let Some(color) = cmd.pattern_color {
        gen.set_pattern_color(color);
    }
    for (i, color) in cmd.colors.iter().enumerate() {
        gen.set_gradient_color(i, *color);
    }
    if let Some(opacity) = cmd.pattern_opacity {
        gen.set_pattern_opacity(opacity);
    }
    if let Some(opacity) = cmd.gradient_opacity {
        gen.set_gradient_opacity(opacity);
    }
    if let Some(spacing) = cmd.spacing {
        gen.set_spacing(spacing);
    }
    if let Some(angle) = cmd.angle {
        gen.set_angle(angle);
    }
    if cmd.animation.animated {
        gen.set_animated(true);
    }
    if let Some(speed) = cmd.animation.speed {
        gen.set_speed(speed);
    }
    if let Some(direction) = cmd.animation.direction {
        gen.set_direction(direction);
    }

    emit(&mut gen, &cmd.output)
}

fn selector(
    args: &OutputArgs,
    config: &OutputConfig,
    mode: GeneratorMode,
) -> Result<String, BackdropError> {
    match &args.selector {
        Some(selector) if !is_valid_selector(selector) => Err(ConfigError::ValidationError(
            format!("--selector {selector:?} is not a class selector"),
        )
        .into()),
        Some(selector) => Ok(selector.clone()),
        None => Ok(config.selector(mode).to_string()),
    }
}

fn randomize(gen: &mut dyn Generator, args: &OutputArgs) {
    if !args.random {
        return;
    }
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    gen.randomize(&mut rng);
}

fn emit(gen: &mut dyn Generator, args: &OutputArgs) -> Result<(), BackdropError> {
    let compiled = gen.output().clone();

    if args.json {
        println!("{}", to_json(&compiled)?);
    } else {
        println!("{}", compiled.css);
    }

    if args.theming {
        println!("{}", to_json(&gen.theming())?);
    }

    if args.copy {
        clipboard::copy_or_warn(&compiled.css);
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, BackdropError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| BackdropError::Other(format!("failed to serialize output: {e}")))
}

// -----------------------------------------------------------------------------
// Catalog listing and theme
// -----------------------------------------------------------------------------

async fn list(kind: ListKind, source: &dyn CatalogSource) -> Result<(), BackdropError> {
    let kind = match kind {
        ListKind::Patterns => CatalogKind::Patterns,
        ListKind::Gradients => CatalogKind::Gradients,
    };
    let catalog = load(kind, source).await;

    for template in catalog.templates() {
        println!(
            "{:<20} {:<24} {:<16} {}",
            template.id,
            template.name,
            template.kind.as_css(),
            template.description
        );
    }
    Ok(())
}

fn theme(toggle: bool) -> Result<(), BackdropError> {
    let store = FileThemeStore::new(FileThemeStore::default_path()?);
    let mut service = ThemeService::init(store);

    if toggle {
        service.toggle()?;
    }

    println!("{}", service.preference());
    Ok(())
}
