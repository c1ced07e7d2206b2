// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives an Isoview grid through a scripted drag and wheel zoom, then writes
//! the visible tiles to stdout as an SVG document.
//!
//! ```text
//! isoview_demo --pan 40,-20 --zoom-steps 3 --pick 400,300 > grid.svg
//! ```
//!
//! Set `RUST_LOG=debug` to see gesture and zoom transitions on stderr.

mod svg;

use std::error::Error;
use std::io::Write as _;

use clap::Parser;
use isoview_camera::Camera;
use isoview_controller::{ViewportController, ViewportEvent};
use isoview_grid::GridTransform;
use kurbo::{Point, Vec2};
use log::info;

use crate::svg::SvgRenderer;

const PICK_HIGHLIGHT: &str = "#f2c14e";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Tile diamond width in world units.
    #[arg(long, default_value_t = 64.0)]
    tile_width: f64,
    /// Tile diamond height in world units.
    #[arg(long, default_value_t = 32.0)]
    tile_height: f64,
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Drag the grid by a viewport delta, as `DX,DY`.
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    pan: Option<Point>,
    /// Wheel notches at the viewport centre; positive zooms in.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    zoom_steps: i32,
    /// Viewport pixel whose cell is reported and outlined, as `X,Y`.
    #[arg(long, value_parser = parse_pair)]
    pick: Option<Point>,
}

fn parse_pair(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("`{v}` is not a number: {e}"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let grid = GridTransform::new(cli.tile_width, cli.tile_height)?;
    let camera = Camera::new(cli.width, cli.height)?;
    let mut view = ViewportController::new(grid, camera);
    let center = Point::new(cli.width / 2.0, cli.height / 2.0);

    if let Some(delta) = cli.pan {
        let script = [
            ViewportEvent::PointerDown(center),
            ViewportEvent::PointerMove(center + Vec2::new(delta.x, delta.y)),
            ViewportEvent::PointerUp,
        ];
        for event in script {
            view.handle_event(event)?;
        }
    }

    // Wheel deltas are positive when zooming out.
    let delta_y = if cli.zoom_steps > 0 { -1.0 } else { 1.0 };
    for _ in 0..cli.zoom_steps.unsigned_abs() {
        view.handle_event(ViewportEvent::Wheel {
            delta_y,
            position: center,
        })?;
    }

    let camera = view.camera();
    info!(
        "camera at {:?}, zoom {:.3}, {} visible cells",
        camera.position(),
        camera.zoom(),
        view.visible_cells().cell_count()
    );

    let mut renderer = SvgRenderer::new();
    view.render(&mut renderer);

    if let Some(p) = cli.pick {
        let cell = view.grid_cell_at(p.x, p.y);
        info!("cell under ({}, {}) is ({}, {})", p.x, p.y, cell.x, cell.y);
        renderer.highlight(view.cell_viewport_corners(cell), PICK_HIGHLIGHT);
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(renderer.finish().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
