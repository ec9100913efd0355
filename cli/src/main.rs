//! labelgen CLI - address label PDF generator

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use labelgen::output::write_temp_pdf;
use labelgen::{
    load_file, render, GeneratedFile, JsonFormat, LabelDocument, LabelGenerator,
    NormalizeOptions, RenderOptions, Table, Variant, OUTPUT_FILE_NAME,
};

#[derive(Parser)]
#[command(name = "labelgen")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Generate address label PDFs from Excel spreadsheets", long_about = None)]
struct Cli {
    /// Input spreadsheet (.xlsx, .xlsm, .xls)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file or directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Label layout
    #[arg(long, value_enum, default_value = "auto")]
    variant: VariantArg,

    /// Replace characters outside printable ASCII with spaces
    #[arg(long)]
    sanitize: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the label PDF
    #[command(alias = "gen")]
    Generate {
        /// Input spreadsheet
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file or directory (default: ./Address_Labels.pdf)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Label layout
        #[arg(long, value_enum, default_value = "auto")]
        variant: VariantArg,

        /// Replace characters outside printable ASCII with spaces
        #[arg(long)]
        sanitize: bool,

        /// Document title stored in the PDF
        #[arg(long)]
        title: Option<String>,

        /// Document author stored in the PDF
        #[arg(long)]
        author: Option<String>,

        /// Write uncompressed page streams
        #[arg(long)]
        no_compress: bool,
    },

    /// Show the uploaded rows, then check them against a layout
    Preview {
        /// Input spreadsheet
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Label layout
        #[arg(long, value_enum, default_value = "auto")]
        variant: VariantArg,

        /// Number of rows to show
        #[arg(long, default_value = "10")]
        rows: usize,

        /// Print the whole table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the labels as plain text
    Text {
        /// Input spreadsheet
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Label layout
        #[arg(long, value_enum, default_value = "auto")]
        variant: VariantArg,

        /// Replace characters outside printable ASCII with spaces
        #[arg(long)]
        sanitize: bool,
    },

    /// Show spreadsheet information
    Info {
        /// Input spreadsheet
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    /// Pick the first layout whose columns are present
    Auto,
    /// Name, school, coordinator, address, contact (centered)
    Contact,
    /// Principal, school, coordinator, address, contact, participants (left aligned)
    Principal,
}

impl VariantArg {
    fn resolve(self, table: &Table) -> Variant {
        match self {
            VariantArg::Contact => Variant::Contact,
            VariantArg::Principal => Variant::Principal,
            VariantArg::Auto => {
                let variant = Variant::detect(table).unwrap_or_default();
                log::debug!("auto-selected {} layout", variant);
                variant
            }
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            input,
            output,
            variant,
            sanitize,
            title,
            author,
            no_compress,
        }) => {
            let mut render_options = RenderOptions::new().with_compression(!no_compress);
            if let Some(title) = title {
                render_options = render_options.with_title(title);
            }
            if let Some(author) = author {
                render_options = render_options.with_author(author);
            }
            cmd_generate(&input, output.as_deref(), variant, sanitize, render_options)
        }
        Some(Commands::Preview {
            input,
            variant,
            rows,
            json,
        }) => cmd_preview(&input, variant, rows, json),
        Some(Commands::Text {
            input,
            output,
            variant,
            sanitize,
        }) => cmd_text(&input, output.as_deref(), variant, sanitize),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: generate if input is provided
            if let Some(input) = cli.input {
                cmd_generate(
                    &input,
                    cli.output.as_deref(),
                    cli.variant,
                    cli.sanitize,
                    RenderOptions::default(),
                )
            } else {
                println!("{}", "Usage: labelgen <FILE> [OUTPUT]".yellow());
                println!("       labelgen --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn generator_for(table: &Table, variant: VariantArg, sanitize: bool) -> LabelGenerator {
    LabelGenerator::new(variant.resolve(table))
        .with_normalize_options(NormalizeOptions::new().with_sanitize(sanitize))
}

fn cmd_generate(
    input: &Path,
    output: Option<&Path>,
    variant: VariantArg,
    sanitize: bool,
    render_options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let steps = || -> labelgen::Result<(LabelDocument, GeneratedFile)> {
        pb.set_message("Reading spreadsheet...");
        let table = load_file(input)?;
        pb.inc(1);

        pb.set_message("Checking columns...");
        let generator =
            generator_for(&table, variant, sanitize).with_render_options(render_options);
        let normalized = generator.normalize(&table)?;
        pb.inc(1);

        pb.set_message("Laying out labels...");
        let doc = generator.paginate(&normalized);
        pb.inc(1);

        pb.set_message("Writing PDF...");
        let pdf = generator.render(&doc)?;
        let path = write_temp_pdf(&pdf.bytes)?;
        let file = GeneratedFile::new(path, doc.page_count(), pdf.sheet_count, doc.block_count());
        pb.inc(1);

        Ok((doc, file))
    };

    let (doc, file) = match steps() {
        Ok(result) => result,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    pb.finish_with_message("Done!");

    let dest = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(OUTPUT_FILE_NAME));
    let sheets = file.sheet_count;
    let saved = file.deliver_to(&dest)?;

    println!(
        "\n{} {}",
        "PDF generated successfully:".green().bold(),
        saved.display()
    );
    println!("  {} {} labels", "├─".dimmed(), doc.block_count());
    println!("  {} {} pages", "├─".dimmed(), doc.page_count());
    println!("  {} {} PDF sheets", "└─".dimmed(), sheets);

    Ok(())
}

fn cmd_preview(
    input: &Path,
    variant: VariantArg,
    rows: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_file(input)?;

    if json {
        println!("{}", render::to_json(&table, JsonFormat::Pretty)?);
    } else {
        print_table(&table, rows);
    }

    // Validate only after the upload has been shown
    let generator = generator_for(&table, variant, false);
    let normalized = generator.normalize(&table)?;

    if !json {
        println!(
            "\n{} {} layout, {} label(s)",
            "Ready:".green().bold(),
            generator_variant_name(&generator),
            normalized.row_count()
        );
    }

    Ok(())
}

fn print_table(table: &Table, rows: usize) {
    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            table
                .records()
                .take(rows)
                .map(|record| record.get_at(index).unwrap_or("").chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
                .min(40)
        })
        .collect();

    println!("{}", "Preview of Uploaded Data".cyan().bold());
    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(column, width)| {
            let column: String = column.chars().take(*width).collect();
            format!("{:<width$}", column, width = width)
        })
        .collect();
    println!("{}", header.join(" │ ").bold());
    println!("{}", "─".repeat(widths.iter().sum::<usize>() + 3 * widths.len()).dimmed());

    for record in table.records().take(rows) {
        let cells: Vec<String> = record
            .values()
            .iter()
            .zip(&widths)
            .map(|(value, width)| {
                let value: String = value.chars().take(*width).collect();
                format!("{:<width$}", value, width = width)
            })
            .collect();
        println!("{}", cells.join(" │ "));
    }

    if table.row_count() > rows {
        println!(
            "{}",
            format!("… {} more row(s)", table.row_count() - rows).dimmed()
        );
    }
}

fn generator_variant_name(generator: &LabelGenerator) -> &'static str {
    Variant::ALL
        .into_iter()
        .find(|variant| variant.template() == *generator.template())
        .map(|variant| variant.name())
        .unwrap_or("custom")
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    variant: VariantArg,
    sanitize: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_file(input)?;
    let generator = generator_for(&table, variant, sanitize);
    let normalized = generator.normalize(&table)?;
    let text = render::to_text(&generator.paginate(&normalized));

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = labelgen::detect_format_from_path(input)?;
    let loader = labelgen::SheetLoader::open(input)?;
    let table = loader.load()?;

    let matching: Vec<&str> = Variant::ALL
        .into_iter()
        .filter(|variant| variant.template().matches(&table))
        .map(|variant| variant.name())
        .collect();

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "format": format.to_string(),
            "sheet": loader.sheet_name(),
            "columns": table.columns(),
            "rows": table.row_count(),
            "variants": matching,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Spreadsheet Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Sheet".bold(), loader.sheet_name());
    println!("{}: {}", "Rows".bold(), table.row_count());
    println!("{}: {}", "Columns".bold(), table.columns().join(", "));

    println!();
    println!("{}", "Label Layouts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for variant in Variant::ALL {
        let template = variant.template();
        if template.matches(&table) {
            println!("{}: {}", variant.name().bold(), "ready".green());
        } else {
            let missing: Vec<&str> = template
                .required_columns()
                .into_iter()
                .filter(|column| !table.has_column(column))
                .collect();
            println!(
                "{}: {} {}",
                variant.name().bold(),
                "missing".yellow(),
                missing.join(", ")
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "labelgen".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Address label PDF generator");
    println!();
    println!("License: MIT");
}
