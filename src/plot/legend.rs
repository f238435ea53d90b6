use peniko::Color;
use vello::kurbo::{Affine, Line, Point, Rect, RoundedRect, Size, Stroke};
use vello::peniko::Fill;
use vello::Scene;

use super::axes::Axes;
use super::figure::Artist;
use super::style::{Style, FONT_SIZE};
use super::text::{HAlign, Label, TextRenderer, VAlign};
use crate::components::shapes::DrawOrder;

// in font-size units
const BORDER_PAD: f64 = 0.4;
const BORDER_AXES_PAD: f64 = 0.5;
const HANDLE_LENGTH: f64 = 2.0;
const HANDLE_TEXT_PAD: f64 = 0.8;
const LABEL_SPACING: f64 = 0.5;
const CORNER_RADIUS: f64 = 0.2;

const FACE_COLOR: Color = Color::rgba8(255, 255, 255, 204);
const EDGE_COLOR: Color = Color::rgba8(204, 204, 204, 204);

/// Labeled artists in the order they were added.
pub fn legend_entries(artists: &[(DrawOrder, Artist)]) -> Vec<(&str, &Artist)> {
    let mut entries: Vec<_> = artists
        .iter()
        .filter_map(|(order, artist)| artist.label().map(|label| (*order, label, artist)))
        .collect();
    entries.sort_by_key(|(order, _, _)| *order);
    entries.into_iter().map(|(_, label, artist)| (label, artist)).collect()
}

/// Placement of the legend box and of each row's vertical center.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub frame: Rect,
    pub rows: Vec<f64>,
    pub handle_x: f64,
    pub text_x: f64,
}

/// Lays out a legend in the upper left corner of `viewport` for labels of the given sizes.
pub fn layout_legend(viewport: Rect, labels: &[Size], font_px: f64) -> LegendLayout {
    let pad = BORDER_PAD * font_px;
    let row_height = labels.iter().map(|s| s.height).fold(font_px, f64::max);
    let text_width = labels.iter().map(|s| s.width).fold(0.0, f64::max);
    let spacing = LABEL_SPACING * font_px;

    let origin = Point::new(
        viewport.x0 + BORDER_AXES_PAD * font_px,
        viewport.y0 + BORDER_AXES_PAD * font_px,
    );
    let n = labels.len() as f64;
    let width = 2.0 * pad + (HANDLE_LENGTH + HANDLE_TEXT_PAD) * font_px + text_width;
    let height = 2.0 * pad + n * row_height + (n - 1.0).max(0.0) * spacing;

    let rows = (0..labels.len())
        .map(|i| origin.y + pad + i as f64 * (row_height + spacing) + row_height / 2.0)
        .collect();

    LegendLayout {
        frame: Rect::from_origin_size(origin, Size::new(width, height)),
        rows,
        handle_x: origin.x + pad,
        text_x: origin.x + pad + (HANDLE_LENGTH + HANDLE_TEXT_PAD) * font_px,
    }
}

pub fn draw_legend(
    scene: &mut Scene,
    text: &mut TextRenderer,
    axes: &Axes,
    artists: &[(DrawOrder, Artist)],
    style: &Style,
) {
    let entries = legend_entries(artists);
    if entries.is_empty() {
        return;
    }

    let font = style.font_px(FONT_SIZE);
    let font_px = font as f64;
    let sizes: Vec<Size> = entries.iter().map(|(label, _)| text.measure(label, font)).collect();
    let layout = layout_legend(axes.viewport, &sizes, font_px);

    let frame = RoundedRect::from_rect(layout.frame, CORNER_RADIUS * font_px);
    scene.fill(Fill::NonZero, Affine::IDENTITY, &FACE_COLOR, None, &frame);
    scene.stroke(&Stroke::new(style.px(0.8)), Affine::IDENTITY, &EDGE_COLOR, None, &frame);

    let handle_length = HANDLE_LENGTH * font_px;
    for ((label, artist), y) in entries.iter().zip(&layout.rows) {
        match artist {
            Artist::Line(series) => {
                let line = Line::new((layout.handle_x, *y), (layout.handle_x + handle_length, *y));
                scene.stroke(&style.line_stroke(series.style), Affine::IDENTITY, &series.color, None, &line);
            }
            Artist::Point(marker) => {
                let circle = style.marker(Point::new(layout.handle_x + handle_length / 2.0, *y));
                scene.fill(Fill::NonZero, Affine::IDENTITY, &marker.color, None, &circle);
            }
        }

        let label = Label::new(label, font, Point::new(layout.text_x, *y)).align(HAlign::Left, VAlign::Middle);
        text.draw(scene, &label);
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2 as Vec2;

    use super::*;
    use crate::components::shapes::marker::Marker;
    use crate::components::shapes::series::{LineStyle, Series};

    #[test]
    fn entries_skip_unlabeled_artists_and_keep_order() {
        let line = |label: Option<&str>| {
            Artist::Line(Series {
                points: Vec::new(),
                color: Color::BLACK,
                style: LineStyle::Dashed,
                label: label.map(str::to_string),
            })
        };
        let artists = vec![
            (DrawOrder(3), line(Some("spline"))),
            (DrawOrder(0), line(Some("triangle"))),
            (DrawOrder(1), line(None)),
            (
                DrawOrder(2),
                Artist::Point(Marker { at: Vec2::new(0.0, 0.0), color: Color::BLACK, label: Some("start".into()) }),
            ),
        ];

        let labels: Vec<_> = legend_entries(&artists).into_iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["triangle", "start", "spline"]);
    }

    #[test]
    fn layout_sits_in_the_upper_left_corner() {
        let viewport = Rect::new(100.0, 50.0, 900.0, 700.0);
        let labels = [Size::new(60.0, 10.0), Size::new(80.0, 12.0)];
        let layout = layout_legend(viewport, &labels, 10.0);

        assert_eq!(layout.frame.origin(), Point::new(105.0, 55.0));
        // 2 * 4 pad + 28 handle + 80 text
        assert!((layout.frame.width() - 116.0).abs() < 1e-9);
        // 2 * 4 pad + 2 * 12 rows + 5 spacing
        assert!((layout.frame.height() - 37.0).abs() < 1e-9);
        assert_eq!(layout.rows.len(), 2);
        assert!((layout.rows[0] - 65.0).abs() < 1e-9);
        assert!((layout.rows[1] - 82.0).abs() < 1e-9);
        assert!((layout.handle_x - 109.0).abs() < 1e-9);
        assert!((layout.text_x - 137.0).abs() < 1e-9);
    }
}
