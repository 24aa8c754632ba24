use clap::{Parser, Subcommand};
use cssunit::config::Config;
use cssunit::convert;
use cssunit::suggest;
use cssunit::units::{self, UnitKind};

/// Config file picked up from the working directory when --config is absent
const DEFAULT_CONFIG_FILE: &str = "cssunit.toml";

#[derive(Parser)]
#[command(name = "cssunit")]
#[command(about = "CSS length unit converter and advisor", long_about = None)]
struct Cli {
    /// Viewport width in px (overrides config)
    #[arg(long, global = true)]
    width: Option<f64>,

    /// Viewport height in px (overrides config)
    #[arg(long, global = true)]
    height: Option<f64>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all supported units
    List,

    /// Show metadata for a unit
    Describe {
        /// Unit suffix (e.g. "rem", "%")
        unit: String,
    },

    /// Convert a value to another unit
    Convert {
        /// Value with unit (e.g. "16px"); a bare number uses --from
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Target unit
        to: String,

        /// Unit for a bare number
        #[arg(short, long, default_value = "px")]
        from: String,
    },

    /// Format a number the way it is displayed for a unit
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        unit: String,
    },

    /// Suggest a unit for a value in a usage context
    Suggest {
        /// Value with unit (e.g. "24px"); a bare number is taken as px
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Usage context: typography, layout, spacing, borders, or any tag
        #[arg(long)]
        context: Option<String>,
    },

    /// Explain how the current and suggested units fit a usage context
    Recommend {
        /// Value with unit (e.g. "24px"); a bare number is taken as px
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[arg(long)]
        context: Option<String>,
    },

    /// Print a conversion matrix
    Matrix {
        /// Comma-separated units (default from config)
        #[arg(long, value_delimiter = ',')]
        units: Option<Vec<String>>,

        /// Amount of each row unit to convert
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        value: f64,
    },

    /// Print common reference sizes and physical unit equivalents
    Reference,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::List => list_units(cli.json),
        Commands::Describe { unit } => describe_unit(unit, cli.json),
        Commands::Convert { value, to, from } => {
            let ctx = config.context(cli.width, cli.height)?;
            convert_value(value, to, from, &ctx, cli.json)
        }
        Commands::Format { value, unit } => {
            let unit = unit.parse::<UnitKind>()?;
            println!("{}", units::format(*value, unit));
            Ok(())
        }
        Commands::Suggest { value, context } => {
            let context = usage_context(context.as_deref(), &config);
            suggest_unit(value, &context, cli.json)
        }
        Commands::Recommend { value, context } => {
            let ctx = config.context(cli.width, cli.height)?;
            let context = usage_context(context.as_deref(), &config);
            recommend_unit(value, &context, &ctx, cli.json)
        }
        Commands::Matrix { units, value } => {
            let ctx = config.context(cli.width, cli.height)?;
            let unit_set = match units {
                Some(list) => list
                    .iter()
                    .map(|u| u.parse::<UnitKind>())
                    .collect::<Result<Vec<_>, _>>()?,
                None => config.matrix.units.clone(),
            };
            print_matrix(&unit_set, *value, &ctx, cli.json)
        }
        Commands::Reference => print_references(cli.json),
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => {
            let default_path = std::path::Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Ok(Config::load_from_file(default_path)?)
            } else {
                log::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                Ok(Config::empty())
            }
        }
    }
}

fn usage_context(flag: Option<&str>, config: &Config) -> suggest::UsageContext {
    flag.map(suggest::UsageContext::from)
        .unwrap_or_else(|| config.suggest.context.clone())
}

fn list_units(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(units::descriptors())?);
        return Ok(());
    }

    println!("Units ({}):", units::list_units().len());
    for unit in units::list_units() {
        let descriptor = units::describe(*unit);
        println!(
            "  - {:<5} {} (responsive: {}/5, support: {}/5)",
            unit.suffix(),
            descriptor.name,
            descriptor.responsive_rating,
            descriptor.browser_support_rating
        );
    }

    Ok(())
}

fn describe_unit(unit: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let unit = unit.parse::<UnitKind>()?;
    let descriptor = units::describe(unit);

    if json {
        println!("{}", serde_json::to_string_pretty(descriptor)?);
        return Ok(());
    }

    println!("{} ({})", descriptor.name, unit);
    println!("{}", descriptor.description);
    println!("\nBest for:");
    for tag in descriptor.best_for {
        println!("  - {}", tag);
    }
    println!("\nAvoid:");
    for tag in descriptor.avoid {
        println!("  - {}", tag);
    }
    println!("\nResponsive: {}/5", descriptor.responsive_rating);
    println!("Browser support: {}/5", descriptor.browser_support_rating);

    Ok(())
}

fn convert_value(
    input: &str,
    to: &str,
    from: &str,
    ctx: &convert::ConversionContext,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = units::parse_css_value_or(input, from.parse::<UnitKind>()?)?;
    let to = to.parse::<UnitKind>()?;

    let result = convert::convert(source.value, source.unit, to, ctx);
    log::debug!(
        "{} -> {} {} in {}x{} viewport",
        source,
        result,
        to,
        ctx.viewport_width_px,
        ctx.viewport_height_px
    );
    if !result.is_finite() {
        log::warn!("Conversion of {} to {} produced {}", source, to, result);
    }

    if json {
        let output = serde_json::json!({
            "from": source,
            "to": units::CssValue::new(result, to),
            "formatted": units::format(result, to),
            "viewport": ctx,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} = {}", source, units::format(result, to));
    }

    Ok(())
}

fn suggest_unit(
    input: &str,
    context: &suggest::UsageContext,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = units::parse_css_value_or(input, UnitKind::Px)?;
    let unit = suggest::suggest(context, source.value, source.unit);

    if json {
        let output = serde_json::json!({
            "context": context,
            "input": source,
            "suggested": unit,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", unit);
    }

    Ok(())
}

fn recommend_unit(
    input: &str,
    context: &suggest::UsageContext,
    ctx: &convert::ConversionContext,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = units::parse_css_value_or(input, UnitKind::Px)?;
    let recommendation = suggest::recommend(context, source.value, source.unit, ctx);

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    println!("{}", recommendation.title);
    if recommendation.suggests_change() {
        println!(
            "\nSuggestion: use {} instead of {} ({})",
            recommendation.suggested.unit,
            recommendation.current.unit,
            units::format(recommendation.suggested_value, recommendation.suggested.unit)
        );
        println!("  {}", recommendation.suggested.reason);
    }
    println!(
        "\n{} for {}: {} ({}/5)",
        recommendation.current.unit,
        context,
        recommendation.current.verdict.label(),
        recommendation.current.rating
    );
    println!("  {}", recommendation.current.reason);

    let descriptor = units::describe(recommendation.suggested.unit);
    println!(
        "\nBrowser support: {}/5  Responsiveness: {}/5",
        descriptor.browser_support_rating, descriptor.responsive_rating
    );

    Ok(())
}

fn print_matrix(
    unit_set: &[UnitKind],
    value: f64,
    ctx: &convert::ConversionContext,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = convert::conversion_matrix(unit_set, value, ctx);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print!("{:>8}", "from\\to");
    for unit in unit_set {
        print!("{:>14}", unit.suffix());
    }
    println!();
    for row in &rows {
        print!("{:>8}", row.from.suffix());
        for cell in &row.cells {
            let marker = if cell.approximate { "~" } else { "" };
            print!("{:>14}", format!("{}{:.4}", marker, cell.value));
        }
        println!();
    }
    println!("\n~ depends on the parent element; shown relative to the root font and viewport width");

    Ok(())
}

fn print_references(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let common = convert::common_references();
    let physical = convert::physical_equivalents();

    if json {
        let output = serde_json::json!({ "common": common, "physical": physical });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Common references:");
    for reference in &common {
        println!(
            "  - {:<22} {:>6} {:>10} {:>10}",
            reference.name,
            units::format(reference.px, UnitKind::Px),
            format!("{}rem", reference.rem),
            format!("{}em", reference.em)
        );
    }

    println!("\nPhysical equivalents (96 DPI):");
    for equivalent in &physical {
        let values: Vec<String> = equivalent
            .values
            .iter()
            .map(|(unit, value)| units::format(*value, *unit))
            .collect();
        println!("  - 1{:<3} {}", equivalent.unit, values.join("  "));
    }

    Ok(())
}
