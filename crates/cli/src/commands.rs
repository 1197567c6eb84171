use std::io::Write;

use anyhow::Result;

use tinge_core::palette::PaletteSnapshot;
use tinge_core::{contrast, format, AppConfig, ColorValue, PaletteService};

use crate::cli::{CliCommand, ColorCommand, ShadeCommand};
use crate::export;

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    let service = PaletteService::new(config.clone())?;
    match command {
        CliCommand::Show => show(&service, &mut writer),
        CliCommand::Color(ColorCommand::Add(args)) => {
            let state = service.add_color(&args.value)?;
            writeln!(
                writer,
                "Added {} as column {}",
                args.value.trim(),
                state.colors.len() - 1
            )?;
            Ok(())
        }
        CliCommand::Color(ColorCommand::Set(args)) => {
            service.replace_color(args.index, &args.value)?;
            writeln!(writer, "Column {} is now {}", args.index, args.value.trim())?;
            Ok(())
        }
        CliCommand::Color(ColorCommand::Rm(args)) => {
            let state = service.remove_color(args.index)?;
            writeln!(
                writer,
                "Removed column {} ({} remaining)",
                args.index,
                state.colors.len()
            )?;
            Ok(())
        }
        CliCommand::Shade(ShadeCommand::Add(args)) => {
            let state = service.add_shade(args.percent)?;
            writeln!(
                writer,
                "Added shade {}% as row {}",
                args.percent,
                state.shades.len() - 1
            )?;
            Ok(())
        }
        CliCommand::Shade(ShadeCommand::Set(args)) => {
            service.replace_shade(args.index, args.percent)?;
            writeln!(writer, "Row {} is now {}%", args.index, args.percent)?;
            Ok(())
        }
        CliCommand::Shade(ShadeCommand::Rm(args)) => {
            let state = service.remove_shade(args.index)?;
            writeln!(
                writer,
                "Removed row {} ({} remaining)",
                args.index,
                state.shades.len()
            )?;
            Ok(())
        }
        CliCommand::Background(args) => {
            let state = service.set_background(&args.value)?;
            writeln!(writer, "Background is now {}", state.background)?;
            Ok(())
        }
        CliCommand::Format(args) => {
            let state = match args.kind {
                Some(kind) => service.set_format(kind)?,
                None => service.cycle_format()?,
            };
            writeln!(writer, "Format: {}", state.format)?;
            Ok(())
        }
        CliCommand::Swap => {
            let state = service.toggle_swap()?;
            writeln!(
                writer,
                "Swap colors: {}",
                if state.swap_colors { "on" } else { "off" }
            )?;
            Ok(())
        }
        CliCommand::Export => {
            let snapshot = service.snapshot()?;
            write!(writer, "{}", export::css_block(&snapshot))?;
            Ok(())
        }
        CliCommand::Contrast(args) => {
            let first = ColorValue::parse(&args.first)?;
            let second = ColorValue::parse(&args.second)?;
            writeln!(writer, "{:.2}", contrast::contrast_ratio(&first, &second))?;
            Ok(())
        }
    }
}

fn show<W: Write>(service: &PaletteService, mut writer: W) -> Result<()> {
    let snapshot = service.snapshot()?;
    let kind = snapshot.state.format;

    writeln!(
        writer,
        "Background: {} (text: {})",
        format::render(&snapshot.background, kind),
        contrast::foreground_for(&snapshot.background)
    )?;
    writeln!(writer, "Format: {}", kind)?;

    if snapshot.table.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No colors yet. Try `tinge color add '#0ea5e9'`.")?;
        return Ok(());
    }

    for (col, column) in snapshot.table.columns().iter().enumerate() {
        writeln!(writer)?;
        let literal = snapshot
            .state
            .colors
            .get(col)
            .map(String::as_str)
            .unwrap_or_default();
        writeln!(writer, "[{col}] {literal}")?;
        for (row, cell) in column.cells.iter().enumerate() {
            let percent = snapshot.state.shades.get(row).copied().unwrap_or_default();
            writeln!(
                writer,
                "  {:>6}  {}  {}",
                format_percent(percent),
                format::render(cell, kind),
                legibility(&snapshot, cell)
            )?;
        }
    }
    Ok(())
}

/// With swap off each cell is a background and the note names the legible
/// text color; with swap on the cell itself is the text, scored against
/// the shared background.
fn legibility(snapshot: &PaletteSnapshot, cell: &ColorValue) -> String {
    if snapshot.state.swap_colors {
        format!(
            "(on background: {:.2})",
            contrast::contrast_ratio(cell, &snapshot.background)
        )
    } else {
        format!("(text: {})", contrast::foreground_for(cell))
    }
}

fn format_percent(percent: f64) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::cli::{BackgroundArgs, ColorAddArgs, ContrastArgs, FormatArgs, IndexArgs};

    fn temp_config() -> (AppConfig, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf()).expect("config");
        (config, dir)
    }

    fn run(config: &AppConfig, command: CliCommand) -> String {
        let mut output = Vec::new();
        execute(config, command, &mut output).expect("execute");
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn show_renders_defaults_on_a_fresh_store() {
        let (config, _dir) = temp_config();
        let output = run(&config, CliCommand::Show);

        assert!(output.contains("Background: #ffffff (text: black)"));
        assert!(output.contains("Format: hex"));
        assert!(output.contains("[0] #0ea5e9"));
        assert!(output.contains("5%"));
        assert!(output.contains("95%"));
    }

    #[test]
    fn color_add_reports_the_new_column() {
        let (config, _dir) = temp_config();
        let output = run(
            &config,
            CliCommand::Color(ColorCommand::Add(ColorAddArgs {
                value: "teal".into(),
            })),
        );
        assert_eq!(output, "Added teal as column 3\n");
    }

    #[test]
    fn invalid_color_add_fails_without_output() {
        let (config, _dir) = temp_config();
        let mut output = Vec::new();
        let err = execute(
            &config,
            CliCommand::Color(ColorCommand::Add(ColorAddArgs {
                value: "notacolor".into(),
            })),
            &mut output,
        )
        .unwrap_err();
        assert!(err.to_string().contains("notacolor"));
        assert!(output.is_empty());
    }

    #[test]
    fn color_rm_reports_remaining_columns() {
        let (config, _dir) = temp_config();
        let output = run(
            &config,
            CliCommand::Color(ColorCommand::Rm(IndexArgs { index: 0 })),
        );
        assert_eq!(output, "Removed column 0 (2 remaining)\n");
    }

    #[test]
    fn format_with_no_argument_cycles() {
        let (config, _dir) = temp_config();
        let output = run(&config, CliCommand::Format(FormatArgs { kind: None }));
        assert_eq!(output, "Format: rgb\n");
        let output = run(&config, CliCommand::Format(FormatArgs { kind: None }));
        assert_eq!(output, "Format: hsl\n");
    }

    #[test]
    fn background_change_shows_up_in_show() {
        let (config, _dir) = temp_config();
        run(
            &config,
            CliCommand::Background(BackgroundArgs {
                value: "black".into(),
            }),
        );
        let output = run(&config, CliCommand::Show);
        assert!(output.contains("Background: #000000 (text: white)"));
    }

    #[test]
    fn swap_changes_the_legibility_note() {
        let (config, _dir) = temp_config();
        let output = run(&config, CliCommand::Swap);
        assert_eq!(output, "Swap colors: on\n");
        let output = run(&config, CliCommand::Show);
        assert!(output.contains("(on background:"));
    }

    #[test]
    fn contrast_prints_the_wcag_ratio() {
        let (config, _dir) = temp_config();
        let output = run(
            &config,
            CliCommand::Contrast(ContrastArgs {
                first: "#ffffff".into(),
                second: "#000000".into(),
            }),
        );
        assert_eq!(output, "21.00\n");
    }

    #[test]
    fn export_writes_the_css_block() {
        let (config, _dir) = temp_config();
        let output = run(&config, CliCommand::Export);
        assert!(output.contains("--color-1-1:"));
        assert!(output.ends_with("--background: #ffffff;\n"));
    }
}
