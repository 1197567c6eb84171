use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tinge_core::Format;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tinge",
    version,
    about = "Build accessible color shade palettes from your terminal.",
    after_help = "Examples:\n  tinge                      Show the current palette table\n  tinge color add '#0ea5e9'\n  tinge shade add 37.5\n  tinge format lch\n  tinge export | xclip -selection clipboard"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Render the palette table (default command)
    Show,
    /// Manage the base color list
    #[command(subcommand)]
    Color(ColorCommand),
    /// Manage the shade percentage list
    #[command(subcommand)]
    Shade(ShadeCommand),
    /// Set the background color
    Background(BackgroundArgs),
    /// Cycle the render format, or select one directly
    Format(FormatArgs),
    /// Toggle the swapped text/background presentation
    Swap,
    /// Print the palette as CSS custom properties
    Export,
    /// Score the WCAG 2.1 contrast ratio between two colors
    Contrast(ContrastArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ColorCommand {
    /// Append a color to the palette
    Add(ColorAddArgs),
    /// Replace the color at an index
    Set(ColorSetArgs),
    /// Remove the color at an index
    Rm(IndexArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ShadeCommand {
    /// Append a shade percentage
    Add(ShadeAddArgs),
    /// Replace the shade at an index
    Set(ShadeSetArgs),
    /// Remove the shade at an index
    Rm(IndexArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ColorAddArgs {
    /// Color literal: hex, rgb(), hsl(), lch(), or a CSS name
    #[arg(value_name = "COLOR")]
    pub value: String,
}

#[derive(Args, Debug, Clone)]
pub struct ColorSetArgs {
    /// Zero-based column index
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Color literal: hex, rgb(), hsl(), lch(), or a CSS name
    #[arg(value_name = "COLOR")]
    pub value: String,
}

#[derive(Args, Debug, Clone)]
pub struct ShadeAddArgs {
    /// Shade percentage; values outside 0-100 extrapolate
    #[arg(value_name = "PERCENT", allow_hyphen_values = true)]
    pub percent: f64,
}

#[derive(Args, Debug, Clone)]
pub struct ShadeSetArgs {
    /// Zero-based row index
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Shade percentage; values outside 0-100 extrapolate
    #[arg(value_name = "PERCENT", allow_hyphen_values = true)]
    pub percent: f64,
}

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Zero-based index into the list
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

#[derive(Args, Debug, Clone)]
pub struct BackgroundArgs {
    /// Color literal: hex, rgb(), hsl(), lch(), or a CSS name
    #[arg(value_name = "COLOR")]
    pub value: String,
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Target format; omit to advance to the next one in the cycle
    #[arg(value_enum, value_name = "KIND")]
    pub kind: Option<Format>,
}

#[derive(Args, Debug, Clone)]
pub struct ContrastArgs {
    /// First color literal
    #[arg(value_name = "COLOR")]
    pub first: String,

    /// Second color literal
    #[arg(value_name = "COLOR")]
    pub second: String,
}
