use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use log::{info, warn};
use thousands::Separable;

use sheetfit::calc::{CandidateKey, compute};
use sheetfit::entities::Orientation;
use sheetfit::io::export::export_report;
use sheetfit::io::store::{self, Store};
use sheetfit::io::svg::{SvgDrawOptions, report_row_to_svg};
use sheetfit::io::theme::Theme;
use sheetfit_cli::config::SheetfitConfig;
use sheetfit_cli::io;
use sheetfit_cli::io::cli::{Cli, Command, ProductArgs};
use sheetfit_cli::io::output::CalcOutput;
use sheetfit_cli::io::table::render_table;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SheetfitConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("[MAIN] Successfully parsed SheetfitConfig: {config:?}");

    let store_dir = args.store_dir.unwrap_or_else(|| config.store_dir.clone());
    let store = Store::open(&store_dir)
        .with_context(|| format!("could not open store: {}", store_dir.display()))?;
    info!("[MAIN] using store at {}", store.root().display());

    match args.command {
        Command::Compute {
            product,
            show_duplicates,
            output_folder,
        } => main_compute(&product, show_duplicates, output_folder, &config, &store),
        Command::Preview {
            product,
            format,
            orientation,
            output_file,
            theme,
        } => main_preview(&product, format, orientation, &output_file, theme, &config, &store),
        Command::Formats => main_formats(&store),
        Command::AddFormat { a, b } => {
            let mut catalog = store::load_catalog(&store);
            let format = store::add_custom_format(&store, &mut catalog, &a, &b)?;
            println!("added format {}: {}", catalog.len(), format.name());
            Ok(())
        }
        Command::Theme { action } => {
            let current = store::load_theme(&store);
            match action {
                None => println!("{current}"),
                Some(action) => {
                    let theme = action.apply(current);
                    store::save_theme(&store, theme)?;
                    println!("{theme}");
                }
            }
            Ok(())
        }
    }
}

fn main_compute(
    product_args: &ProductArgs,
    show_duplicates: bool,
    output_folder: Option<PathBuf>,
    config: &SheetfitConfig,
    store: &Store,
) -> Result<()> {
    let Some(product) = product_args.product()? else {
        warn!("[MAIN] no product dimensions entered, nothing to compute");
        return Ok(());
    };
    let margins = product_args.margins(config);
    let quantity = product_args.quantity();
    let catalog = store::load_catalog(store);

    let report = compute(&product, catalog.formats(), &margins, quantity);
    let ext_report = export_report(&report, catalog.formats());

    print!("{}", render_table(&ext_report, show_duplicates));

    let Some(output_folder) = output_folder else {
        return Ok(());
    };

    fs::create_dir_all(&output_folder).with_context(|| {
        format!("could not create output folder: {}", output_folder.display())
    })?;

    {
        let output = CalcOutput {
            report: ext_report,
            config: config.clone(),
            created: jiff::Timestamp::now().to_string(),
        };
        io::write_json(&output, &output_folder.join("report.json"))?;
    }

    {
        let options = draw_options(config, store, None);
        for &key in &report.recommended {
            let svg = report_row_to_svg(&report, catalog.formats(), key, options)?;
            let svg_path = output_folder.join(format!(
                "layout_{}_{}.svg",
                key.format_index + 1,
                key.orientation
            ));
            io::write_svg(&svg, &svg_path)?;
        }
    }

    Ok(())
}

fn main_preview(
    product_args: &ProductArgs,
    format_number: usize,
    orientation: Orientation,
    output_file: &Path,
    theme: Option<Theme>,
    config: &SheetfitConfig,
    store: &Store,
) -> Result<()> {
    let Some(product) = product_args.product()? else {
        bail!("enter valid product dimensions before drawing a preview");
    };
    let margins = product_args.margins(config);
    let catalog = store::load_catalog(store);

    let Some((format_index, format)) = format_number
        .checked_sub(1)
        .and_then(|i| catalog.get(i).map(|f| (i, f)))
    else {
        bail!(
            "no format {format_number}, expected a number between 1 and {}",
            catalog.len()
        );
    };

    let report = compute(&product, catalog.formats(), &margins, product_args.quantity());
    let key = CandidateKey {
        format_index,
        orientation,
    };

    let svg = report_row_to_svg(
        &report,
        catalog.formats(),
        key,
        draw_options(config, store, theme),
    )
    .context("no usable area left on this format with the current margins")?;

    info!(
        "[MAIN] preview: {} – {}",
        format.name(),
        orientation.label()
    );
    io::write_svg(&svg, output_file)
}

fn main_formats(store: &Store) -> Result<()> {
    let catalog = store::load_catalog(store);
    for (i, format) in catalog.formats().iter().enumerate() {
        let area = (format.width() * format.height()).round() as u64;
        let origin = match catalog.is_custom(i) {
            true => "custom",
            false => "built-in",
        };
        println!(
            "{:>3}  {:<28}{:>12} mm²  {origin}",
            i + 1,
            format.name(),
            area.separate_with_dots()
        );
    }
    Ok(())
}

/// Drawing options from the config, themed as stored unless `theme` overrides it
fn draw_options(config: &SheetfitConfig, store: &Store, theme: Option<Theme>) -> SvgDrawOptions {
    SvgDrawOptions {
        theme: theme.unwrap_or_else(|| store::load_theme(store)),
        ..config.svg_draw_options
    }
}
