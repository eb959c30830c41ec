use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::config::load_config;
use crate::geom::ViewMode;
use crate::model::{parse_model, ModelError};
use crate::render::{render_svg, write_output_svg};
use crate::scale::sheet_by_label;
use crate::view::{compute_view, render, DiagramKind};
use crate::Canvas;

#[derive(Parser, Debug)]
#[command(
    name = "spooldraft",
    version,
    about = "Render PFD / P&ID / isometric spool drawings from a 3D piping model"
)]
pub struct Args {
    /// Input model (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output SVG file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// View: plane, iso-nw, iso-ne, iso-se or iso-sw
    #[arg(short = 'v', long = "view", default_value = "plane")]
    pub view: String,

    /// Diagram kind: pfd, pid or iso
    #[arg(short = 'd', long = "diagram", default_value = "pfd")]
    pub diagram: String,

    /// Sheet size label (A4/A3/A2, plus A1/A0 for isometric views)
    #[arg(short = 's', long = "sheet", default_value = "A3")]
    pub sheet: String,

    /// Config JSON file (theme and layout constants)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let view = ViewMode::from_token(&args.view)
        .ok_or_else(|| ModelError::UnknownView(args.view.clone()))?;
    let diagram = DiagramKind::from_token(&args.diagram)
        .unwrap_or(if view.is_isometric() { DiagramKind::IsoSpool } else { DiagramKind::Pfd });
    let sheet = sheet_by_label(&args.sheet, view.is_isometric())?;

    let input = read_input(args.input.as_deref())?;
    let model = parse_model(&input)?;

    let Some(data) = compute_view(&model, view) else {
        eprintln!("model has no elements: nothing to draw");
        return Ok(());
    };

    let mut canvas = Canvas::new();
    render(&mut canvas, data.scale, sheet, &data, diagram, &model, &config);
    let svg = render_svg(&canvas, sheet, &config.theme);
    write_output_svg(&svg, args.output.as_deref())?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_parse() {
        Args::command().debug_assert();
    }

    #[test]
    fn unknown_view_token_is_an_error() {
        assert!(ViewMode::from_token("sideways").is_none());
    }
}
