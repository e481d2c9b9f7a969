//! sheetpack CLI - build XLSX packages from CSV and inspect emitted parts

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sheetpack::prelude::*;
use sheetpack::StyleRegistry;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetpack")]
#[command(author, version, about = "Build and inspect XLSX packages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV file to an XLSX package
    FromCsv {
        /// Input CSV file
        input: PathBuf,

        /// Output XLSX file
        #[arg(short, long)]
        output: PathBuf,

        /// Worksheet title
        #[arg(long, default_value = "Sheet1")]
        sheet_name: String,

        /// Freeze the header row
        #[arg(long)]
        freeze_header: bool,

        /// Add an auto-filter over the imported data
        #[arg(long)]
        auto_filter: bool,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Print one emitted XML part to stdout
    Part {
        /// Which part to print
        #[arg(value_enum)]
        name: PartName,

        /// Build the workbook from this CSV file instead of an empty one
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PartName {
    Theme,
    ContentTypes,
    RootRels,
    Workbook,
    WorkbookRels,
    Sheet,
    SheetRels,
    SharedStrings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::FromCsv {
            input,
            output,
            sheet_name,
            freeze_header,
            auto_filter,
            delimiter,
        } => from_csv(
            &input,
            &output,
            &sheet_name,
            freeze_header,
            auto_filter,
            delimiter,
        ),
        Commands::Part { name, input } => print_part(name, input.as_deref()),
    }
}

fn load_csv(input: &Path, sheet_name: &str, delimiter: char) -> Result<Workbook> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }

    let options = CsvReadOptions {
        delimiter: delimiter as u8,
        sheet_name: sheet_name.to_string(),
        ..Default::default()
    };
    let worksheet = CsvReader::read_file(input, &options)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let mut workbook = Workbook::empty();
    workbook
        .add_existing_worksheet(worksheet)
        .with_context(|| format!("Invalid sheet name '{}'", sheet_name))?;
    Ok(workbook)
}

fn from_csv(
    input: &Path,
    output: &Path,
    sheet_name: &str,
    freeze_header: bool,
    auto_filter: bool,
    delimiter: char,
) -> Result<()> {
    let mut workbook = load_csv(input, sheet_name, delimiter)?;

    let sheet = workbook
        .worksheet_mut(0)
        .context("Workbook has no worksheet")?;
    if freeze_header {
        sheet.set_freeze_panes(1, 0);
    }
    if auto_filter {
        if let Some(range) = sheet.used_range() {
            sheet.set_auto_filter(range);
        }
    }
    let cells = sheet.cell_count();

    XlsxWriter::write_file(&workbook, output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    eprintln!("Wrote {} cells to '{}'", cells, output.display());

    Ok(())
}

fn print_part(name: PartName, input: Option<&Path>) -> Result<()> {
    let workbook = match input {
        Some(path) => load_csv(path, "Sheet1", ',')?,
        None => Workbook::new(),
    };
    let sheet = workbook.worksheet(0).context("Workbook has no worksheet")?;

    let xml = match name {
        PartName::Theme => sheetpack::write_theme(),
        PartName::ContentTypes => sheetpack::write_content_types(&workbook.content_types()),
        PartName::RootRels => sheetpack::write_root_rels(),
        PartName::Workbook => sheetpack::write_workbook(&workbook),
        PartName::WorkbookRels => sheetpack::write_workbook_rels(&workbook),
        PartName::Sheet => sheetpack::write_worksheet(
            sheet,
            &workbook.shared_strings(),
            &StyleRegistry::build(&workbook),
        )
        .context("Failed to serialize worksheet")?,
        PartName::SheetRels => sheetpack::write_worksheet_rels(sheet),
        PartName::SharedStrings => sheetpack::write_shared_strings(&workbook.shared_strings()),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", xml).context("Failed to write to stdout")?;
    Ok(())
}
