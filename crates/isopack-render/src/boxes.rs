//! Whole-box isometric rendering
//!
//! Draws each placed item as one filled and outlined hexagonal
//! silhouette (the isometric projection of its cuboid) straight from the
//! placement record, without voxelization. Occlusion is painter's
//! algorithm over a fixed item ordering.

use isopack_core::{iso_project, Container, PackedItem, RgbCanvas};
use isopack_palette::Palette;

/// Fixed margin around the projected container, in pixels
pub const DEFAULT_BORDER: f32 = 18.0;

/// Canvas dimensions plus the translation that centers the projected
/// container inside the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Screen-space translation applied to every projected point
    pub origin: (f32, f32),
}

/// Size a canvas to tightly bound the projected container.
///
/// The extreme projected x values come from the corners `(L,0,0)` and
/// `(0,W,0)`, the extreme y from `(L,W,H)`.
pub fn canvas_layout(container: &Container, border: f32) -> CanvasLayout {
    let length = container.length as f32;
    let width = container.width as f32;
    let height = container.height as f32;

    let (max_x, _) = iso_project(length, 0.0, 0.0);
    let (min_x, _) = iso_project(0.0, width, 0.0);
    let (_, max_y) = iso_project(length, width, height);

    CanvasLayout {
        width: (2.0 * border + max_x - min_x).ceil() as u32,
        height: (2.0 * border + max_y).ceil() as u32,
        origin: (border - min_x, border),
    }
}

/// Painter's-algorithm item ordering.
///
/// Stable resort: render-x ascending, then depth ascending, then height
/// descending, so nearer and lower boxes are drawn last and occlude the
/// boxes behind and above them.
pub fn paint_order(items: &[PackedItem]) -> Vec<PackedItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        a.coord_x
            .total_cmp(&b.coord_x)
            .then(a.coord_z.total_cmp(&b.coord_z))
            .then(b.coord_y.total_cmp(&a.coord_y))
    });
    sorted
}

/// Draw one placed item as a filled, outlined isometric cuboid.
///
/// The height axis is flipped against the container here (screen y grows
/// downward), measured from the item's top so the box grows upward from
/// its resting position. Ids clamp to the solid palette's `[1, 192]`.
pub fn draw_box(
    canvas: &mut RgbCanvas,
    layout: &CanvasLayout,
    container: &Container,
    item: &PackedItem,
    palette: &Palette,
    solid: bool,
) {
    let (ox, oy, oz) = item.render_origin();
    let (l, w, h) = item.render_extent();

    let x = ox as f32;
    let y = oy as f32;
    let z = (container.height - (oz + h)) as f32;
    let (l, w, h) = (l as f32, w as f32, h as f32);

    let project = |px: f32, py: f32, pz: f32| -> (f32, f32) {
        let (sx, sy) = iso_project(px, py, pz);
        (sx + layout.origin.0, sy + layout.origin.1)
    };

    let p0 = project(x, y, z);
    let p2 = project(x, y + w, z + h);
    let p3 = project(x, y + w, z);
    let p4 = project(x + l, y, z);
    let p5 = project(x + l, y, z + h);
    let p6 = project(x + l, y + w, z + h);
    let p7 = project(x + l, y + w, z);

    if solid {
        fill_polygon(canvas, &[p0, p4, p5, p6, p2, p3], palette.solid_fill(item.id));
    }

    // The 9 visible edges of the cuboid, darker than the fill.
    let edge = palette.edge_shade(item.id);
    for (a, b) in [
        (p2, p3),
        (p3, p0),
        (p0, p4),
        (p3, p7),
        (p2, p6),
        (p4, p5),
        (p5, p6),
        (p6, p7),
        (p7, p4),
    ] {
        draw_line(canvas, a, b, edge);
    }
}

/// Scanline fill of a closed polygon (even-odd rule).
fn fill_polygon(canvas: &mut RgbCanvas, points: &[(f32, f32)], color: [u8; 3]) {
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
    if !min_y.is_finite() || !max_y.is_finite() {
        return;
    }

    let mut crossings = Vec::with_capacity(points.len());

    for row in min_y.floor() as i32..=max_y.ceil() as i32 {
        let scan_y = row as f32 + 0.5;
        crossings.clear();

        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];

            // Half-open edge interval avoids double-counting vertices.
            if (y0 <= scan_y && scan_y < y1) || (y1 <= scan_y && scan_y < y0) {
                crossings.push(x0 + (scan_y - y0) / (y1 - y0) * (x1 - x0));
            }
        }

        crossings.sort_by(f32::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let start = pair[0].round() as i32;
            let end = pair[1].round() as i32;
            for x in start..=end {
                canvas.put_pixel(x, row, color);
            }
        }
    }
}

/// Bresenham line between two projected points.
fn draw_line(canvas: &mut RgbCanvas, start: (f32, f32), end: (f32, f32), color: [u8; 3]) {
    let (mut x, mut y) = (start.0.round() as i32, start.1.round() as i32);
    let (end_x, end_y) = (end.0.round() as i32, end.1.round() as i32);

    let dx = (end_x - x).abs();
    let dy = -(end_y - y).abs();
    let sx = if x < end_x { 1 } else { -1 };
    let sy = if y < end_y { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        canvas.put_pixel(x, y, color);

        if x == end_x && y == end_y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
