// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG [`TileRenderer`] used by the demo.

use std::fmt::Write as _;

use isoview_controller::{FrameInfo, TileRenderer};
use kurbo::{Affine, Point, Size};

const GRID_STROKE: &str = "#2f4a1f";
const BACKGROUND: &str = "#1b1b1b";

/// Accumulates draw calls as SVG elements.
#[derive(Debug)]
pub(crate) struct SvgRenderer {
    viewport: Size,
    tile: Size,
    grid_to_viewport: Affine,
    body: String,
}

impl SvgRenderer {
    pub(crate) fn new() -> Self {
        Self {
            viewport: Size::ZERO,
            tile: Size::ZERO,
            grid_to_viewport: Affine::IDENTITY,
            body: String::new(),
        }
    }

    /// Outline a diamond given in viewport space.
    pub(crate) fn highlight(&mut self, corners: [Point; 4], color: &str) {
        let points = points_attr(&corners);
        let _ = write!(
            self.body,
            "<polygon points=\"{points}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\"/>"
        );
    }

    /// Wraps the accumulated elements in an `<svg>` document.
    pub(crate) fn finish(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = fmt_num(self.viewport.width),
            h = fmt_num(self.viewport.height),
        );
        let _ = write!(
            svg,
            "<rect width=\"100%\" height=\"100%\" fill=\"{BACKGROUND}\"/>"
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl TileRenderer for SvgRenderer {
    fn begin_frame(&mut self, frame: &FrameInfo) {
        self.viewport = frame.viewport;
        self.tile = frame.tile_size;
        self.grid_to_viewport = frame.grid_to_viewport;
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw_tile(&mut self, origin: Point, style: &str) {
        let (hw, hh) = (self.tile.width / 2.0, self.tile.height / 2.0);
        let corners = [
            origin,
            Point::new(origin.x + hw, origin.y + hh),
            Point::new(origin.x, origin.y + self.tile.height),
            Point::new(origin.x - hw, origin.y + hh),
        ];
        let points = points_attr(&corners);
        let _ = write!(self.body, "<polygon points=\"{points}\" fill=\"{style}\"/>");
    }

    fn draw_grid_lines(&mut self, start_x: i64, start_y: i64, end_x: i64, end_y: i64) {
        let _ = write!(self.body, "<g stroke=\"{GRID_STROKE}\" stroke-width=\"1\">");
        let (y0, y1) = (start_y as f64, end_y as f64 + 1.0);
        for x in start_x..=end_x.saturating_add(1) {
            self.grid_line(Point::new(x as f64, y0), Point::new(x as f64, y1));
        }
        let (x0, x1) = (start_x as f64, end_x as f64 + 1.0);
        for y in start_y..=end_y.saturating_add(1) {
            self.grid_line(Point::new(x0, y as f64), Point::new(x1, y as f64));
        }
        self.body.push_str("</g>");
    }
}

impl SvgRenderer {
    fn grid_line(&mut self, from: Point, to: Point) {
        let a = self.grid_to_viewport * from;
        let b = self.grid_to_viewport * to;
        let _ = write!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            fmt_num(a.x),
            fmt_num(a.y),
            fmt_num(b.x),
            fmt_num(b.y)
        );
    }
}

fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", fmt_num(p.x), fmt_num(p.y));
    }
    out
}

fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}
