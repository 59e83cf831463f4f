use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, warn};

use sheetfit::CalcResult;
use sheetfit::entities::{GripperSide, MarginConfig, Orientation, Product};
use sheetfit::io::import;
use sheetfit::io::theme::Theme;

use crate::config::SheetfitConfig;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    /// Directory holding the custom formats and the theme, overrides the config file
    #[arg(long, value_name = "FOLDER", global = true)]
    pub store_dir: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn",
        global = true
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate every sheet format in both orientations and print the table
    Compute {
        #[command(flatten)]
        product: ProductArgs,
        /// Also list rotated layouts that are identical to the normal ones
        #[arg(long)]
        show_duplicates: bool,
        /// Write report.json and an SVG per recommended layout to this folder
        #[arg(short, long, value_name = "FOLDER")]
        output_folder: Option<PathBuf>,
    },
    /// Draw a single layout as SVG
    Preview {
        #[command(flatten)]
        product: ProductArgs,
        /// Number of the format, as listed by `formats`
        #[arg(short, long, value_name = "N")]
        format: usize,
        /// normal (n) or rotated (r)
        #[arg(long, default_value = "normal")]
        orientation: Orientation,
        #[arg(short, long, value_name = "FILE")]
        output_file: PathBuf,
        /// Overrides the stored theme for this drawing
        #[arg(long)]
        theme: Option<Theme>,
    },
    /// List all sheet formats, built-in and custom
    Formats,
    /// Add a custom sheet format. The larger side becomes the width.
    AddFormat {
        /// First side in mm
        a: String,
        /// Second side in mm
        b: String,
    },
    /// Show or change the display theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl ThemeAction {
    pub fn apply(self, current: Theme) -> Theme {
        match self {
            ThemeAction::Light => Theme::Light,
            ThemeAction::Dark => Theme::Dark,
            ThemeAction::Toggle => current.toggled(),
        }
    }
}

/// Product and margins as typed by the user. Decimal commas are accepted.
#[derive(Args, Debug, Clone)]
pub struct ProductArgs {
    /// Product width in mm
    pub width: String,
    /// Product height in mm
    pub height: String,
    /// Number of pieces to produce
    #[arg(short, long)]
    pub quantity: Option<String>,
    /// Registration margin in mm, reserved on all four edges
    #[arg(short, long)]
    pub registration: Option<String>,
    /// Gripper margin in mm
    #[arg(short, long)]
    pub gripper_width: Option<String>,
    /// none, top, bottom, left or right
    #[arg(short = 's', long)]
    pub gripper_side: Option<GripperSide>,
}

impl ProductArgs {
    /// `None` if no product dimensions were entered
    pub fn product(&self) -> CalcResult<Option<Product>> {
        import::import_product(&self.width, &self.height)
    }

    /// Margins from the arguments, missing ones taken from `config`
    pub fn margins(&self, config: &SheetfitConfig) -> MarginConfig {
        let registration = self
            .registration
            .clone()
            .unwrap_or_else(|| config.registration.to_string());
        let gripper_width = self
            .gripper_width
            .clone()
            .unwrap_or_else(|| config.gripper_width.to_string());
        let gripper_side = self.gripper_side.unwrap_or(config.gripper_side);
        import::import_margins(&registration, &gripper_width, gripper_side)
    }

    pub fn quantity(&self) -> Option<u64> {
        let raw = self.quantity.as_deref()?;
        let quantity = import::parse_quantity(raw);
        if quantity.is_none() {
            warn!("[CLI] ignoring quantity '{raw}', expected a number of at least 1");
        }
        quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sheetfit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn compute_arguments() {
        let cli = parse(&[
            "compute", "100", "70", "-q", "500", "-r", "5", "-g", "10", "-s", "left", "-l", "debug",
        ]);
        assert_eq!(cli.log_level, LevelFilter::Debug);
        let Command::Compute { product, .. } = cli.command else {
            panic!("expected compute");
        };
        let margins = product.margins(&SheetfitConfig::default());
        assert_eq!(margins, MarginConfig::new(5.0, 10.0, GripperSide::Left));
        assert_eq!(product.quantity(), Some(500));
        assert_eq!(product.product().unwrap(), Some(Product::try_new(100.0, 70.0).unwrap()));
    }

    #[test]
    fn missing_margins_come_from_config() {
        let cli = parse(&["compute", "85,5", "55", "-r", "2,5"]);
        let Command::Compute { product, .. } = cli.command else {
            panic!("expected compute");
        };
        let config = SheetfitConfig {
            registration: 9.0,
            gripper_width: 12.0,
            gripper_side: GripperSide::Top,
            ..SheetfitConfig::default()
        };
        assert_eq!(
            product.margins(&config),
            MarginConfig::new(2.5, 12.0, GripperSide::Top)
        );
        assert_eq!(product.product().unwrap().unwrap().width(), 85.5);
    }

    #[test]
    fn invalid_quantity_is_dropped() {
        let cli = parse(&["compute", "10", "10", "-q", "0,5"]);
        let Command::Compute { product, .. } = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(product.quantity(), None);
    }

    #[test]
    fn preview_arguments() {
        let cli = parse(&[
            "preview", "100", "70", "-f", "3", "--orientation", "r", "-o", "out.svg", "--theme", "dark",
        ]);
        let Command::Preview {
            format,
            orientation,
            theme,
            ..
        } = cli.command
        else {
            panic!("expected preview");
        };
        assert_eq!(format, 3);
        assert_eq!(orientation, Orientation::Rotated);
        assert_eq!(theme, Some(Theme::Dark));
    }

    #[test_case(ThemeAction::Toggle, Theme::Light, Theme::Dark; "toggle light")]
    #[test_case(ThemeAction::Toggle, Theme::Dark, Theme::Light; "toggle dark")]
    #[test_case(ThemeAction::Light, Theme::Dark, Theme::Light; "set light")]
    #[test_case(ThemeAction::Dark, Theme::Dark, Theme::Dark; "set dark again")]
    fn theme_actions(action: ThemeAction, current: Theme, expected: Theme) {
        assert_eq!(action.apply(current), expected);
    }

    #[test]
    fn theme_toggle_parses() {
        let cli = parse(&["theme", "toggle"]);
        assert!(matches!(
            cli.command,
            Command::Theme {
                action: Some(ThemeAction::Toggle)
            }
        ));
    }

    #[test_case("none", GripperSide::None; "none")]
    #[test_case("top", GripperSide::Top; "top")]
    #[test_case("Bottom", GripperSide::Bottom; "mixed case")]
    #[test_case("left", GripperSide::Left; "left")]
    #[test_case("right", GripperSide::Right; "right")]
    fn gripper_side_parses(raw: &str, expected: GripperSide) {
        let cli = parse(&["compute", "10", "10", "-g", "5", "-s", raw]);
        let Command::Compute { product, .. } = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(product.gripper_side, Some(expected));
    }

    #[test]
    fn unknown_gripper_side_is_rejected() {
        let args = ["sheetfit", "compute", "10", "10", "-s", "middle"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
