use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct DeviceOutput<'a> {
    addr: &'a str,
    canvas_width: u32,
    canvas_height: u32,
    strip_leds: usize,
}

pub fn print_device(addr: &str, width: u32, height: u32, strip_leds: usize, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = DeviceOutput {
                addr,
                canvas_width: width,
                canvas_height: height,
                strip_leds,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ADDR", "CANVAS", "STRIP LEDS"]);
            table.add_row(vec![
                addr.to_string(),
                format!("{width}x{height}"),
                strip_leds.to_string(),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("server:     {addr}");
            println!("canvas:     {width}x{height} px (RGBA)");
            println!("strip leds: {strip_leds}");
        }
    }
}
