use std::f64::consts::FRAC_PI_2;

use bevy_ecs::world::World;
use nalgebra::Vector2 as Vec2;
use peniko::Color;
use vello::kurbo::{Affine, BezPath, Line, Point, Rect, Size};
use vello::peniko::{Fill, Mix};
use vello::Scene;

use super::axes::{format_tick, Axes};
use super::legend::draw_legend;
use super::style::*;
use super::text::{HAlign, Label, TextRenderer, VAlign};
use crate::components::figure::Figure;
use crate::components::shapes::marker::Marker;
use crate::components::shapes::series::Series;
use crate::components::shapes::DrawOrder;

// subplot box as fractions of the figure
const LEFT: f64 = 0.125;
const RIGHT: f64 = 0.9;
const BOTTOM: f64 = 0.11;
const TOP: f64 = 0.88;

#[derive(Clone, Debug)]
pub enum Artist {
    Line(Series),
    Point(Marker),
}

impl Artist {
    /// Markers sit below lines; ties keep insertion order.
    pub fn z_order(&self) -> u8 {
        match self {
            Artist::Point(_) => 1,
            Artist::Line(_) => 2,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Artist::Line(series) => series.label.as_deref(),
            Artist::Point(marker) => marker.label.as_deref(),
        }
    }

    pub fn data_points(&self) -> Vec<Vec2<f64>> {
        match self {
            Artist::Line(series) => series.points.clone(),
            Artist::Point(marker) => vec![marker.at],
        }
    }
}

/// Every series and marker in the world, in the order they were added.
pub fn collect_artists(world: &mut World) -> Vec<(DrawOrder, Artist)> {
    let mut lines = world.query::<(&DrawOrder, &Series)>();
    let mut artists: Vec<_> = lines
        .iter(world)
        .map(|(order, series)| (*order, Artist::Line(series.clone())))
        .collect();

    let mut points = world.query::<(&DrawOrder, &Marker)>();
    artists.extend(
        points
            .iter(world)
            .map(|(order, marker)| (*order, Artist::Point(marker.clone()))),
    );

    artists.sort_by_key(|(order, _)| *order);
    artists
}

pub fn axes_viewport(size: Size) -> Rect {
    Rect::new(
        size.width * LEFT,
        size.height * (1.0 - TOP),
        size.width * RIGHT,
        size.height * (1.0 - BOTTOM),
    )
}

struct TickExtents {
    x_label_height: f64,
    y_label_width: f64,
}

/// Rebuilds the whole figure for a surface of `size` device pixels.
pub fn draw_figure(scene: &mut Scene, text: &mut TextRenderer, world: &mut World, size: Size, scale_factor: f64) {
    let figure = world.get_resource::<Figure>().cloned().unwrap_or_default();
    let artists = collect_artists(world);
    let style = Style::new(scale_factor);

    let data: Vec<Vec2<f64>> = artists.iter().flat_map(|(_, a)| a.data_points()).collect();
    let axes = Axes::autoscale(&data, axes_viewport(size));

    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        &Color::WHITE,
        None,
        &Rect::from_origin_size(Point::ORIGIN, size),
    );

    if figure.grid {
        draw_grid(scene, &axes, &style);
    }
    draw_artists(scene, &axes, &artists, &style);
    let extents = draw_spines_and_ticks(scene, text, &axes, &style);
    if figure.legend {
        draw_legend(scene, text, &axes, &artists, &style);
    }
    draw_labels(scene, text, &figure, &axes, &style, &extents);
}

fn draw_grid(scene: &mut Scene, axes: &Axes, style: &Style) {
    let stroke = vello::kurbo::Stroke::new(style.px(GRID_WIDTH));
    let vp = axes.viewport;

    for x in axes.x.ticks() {
        let sx = axes.screen_x(x);
        let line = Line::new((sx, vp.y0), (sx, vp.y1));
        scene.stroke(&stroke, Affine::IDENTITY, &GRID_COLOR, None, &line);
    }
    for y in axes.y.ticks() {
        let sy = axes.screen_y(y);
        let line = Line::new((vp.x0, sy), (vp.x1, sy));
        scene.stroke(&stroke, Affine::IDENTITY, &GRID_COLOR, None, &line);
    }
}

fn draw_artists(scene: &mut Scene, axes: &Axes, artists: &[(DrawOrder, Artist)], style: &Style) {
    let mut layered: Vec<_> = artists.iter().collect();
    layered.sort_by_key(|(order, artist)| (artist.z_order(), *order));

    scene.push_layer(Mix::Clip, 1.0, Affine::IDENTITY, &axes.viewport);
    for (_, artist) in layered {
        match artist {
            Artist::Line(series) => {
                let Some(path) = polyline(axes, &series.points) else {
                    continue;
                };
                scene.stroke(&style.line_stroke(series.style), Affine::IDENTITY, &series.color, None, &path);
            }
            Artist::Point(marker) => {
                let circle = style.marker(axes.to_screen(marker.at));
                scene.fill(Fill::NonZero, Affine::IDENTITY, &marker.color, None, &circle);
            }
        }
    }
    scene.pop_layer();
}

fn polyline(axes: &Axes, points: &[Vec2<f64>]) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut path = BezPath::new();
    path.move_to(axes.to_screen(*first));
    for p in rest {
        path.line_to(axes.to_screen(*p));
    }
    Some(path)
}

fn draw_spines_and_ticks(scene: &mut Scene, text: &mut TextRenderer, axes: &Axes, style: &Style) -> TickExtents {
    let vp = axes.viewport;
    let stroke = vello::kurbo::Stroke::new(style.px(SPINE_WIDTH));
    scene.stroke(&stroke, Affine::IDENTITY, &SPINE_COLOR, None, &vp);

    let tick = style.px(TICK_LENGTH);
    let pad = style.px(TICK_PAD);
    let font = style.font_px(FONT_SIZE);
    let mut extents = TickExtents {
        x_label_height: 0.0,
        y_label_width: 0.0,
    };

    let step = axes.x.tick_step();
    for x in axes.x.ticks() {
        let sx = axes.screen_x(x);
        scene.stroke(&stroke, Affine::IDENTITY, &SPINE_COLOR, None, &Line::new((sx, vp.y1), (sx, vp.y1 + tick)));

        let value = format_tick(x, step);
        extents.x_label_height = extents.x_label_height.max(text.measure(&value, font).height);
        let label = Label::new(&value, font, Point::new(sx, vp.y1 + tick + pad)).align(HAlign::Center, VAlign::Top);
        text.draw(scene, &label);
    }

    let step = axes.y.tick_step();
    for y in axes.y.ticks() {
        let sy = axes.screen_y(y);
        scene.stroke(&stroke, Affine::IDENTITY, &SPINE_COLOR, None, &Line::new((vp.x0 - tick, sy), (vp.x0, sy)));

        let value = format_tick(y, step);
        extents.y_label_width = extents.y_label_width.max(text.measure(&value, font).width);
        let label = Label::new(&value, font, Point::new(vp.x0 - tick - pad, sy)).align(HAlign::Right, VAlign::Middle);
        text.draw(scene, &label);
    }

    extents
}

fn draw_labels(
    scene: &mut Scene,
    text: &mut TextRenderer,
    figure: &Figure,
    axes: &Axes,
    style: &Style,
    extents: &TickExtents,
) {
    let vp = axes.viewport;
    let center = vp.center();
    let font = style.font_px(FONT_SIZE);
    let offset = style.px(TICK_LENGTH) + style.px(TICK_PAD) + style.px(LABEL_PAD);

    if let Some(x_label) = &figure.x_label {
        let anchor = Point::new(center.x, vp.y1 + offset + extents.x_label_height);
        text.draw(scene, &Label::new(x_label, font, anchor).align(HAlign::Center, VAlign::Top));
    }

    if let Some(y_label) = &figure.y_label {
        // rotated a quarter turn counterclockwise, so the text bottom faces the axes
        let anchor = Point::new(vp.x0 - offset - extents.y_label_width, center.y);
        let label = Label::new(y_label, font, anchor)
            .align(HAlign::Center, VAlign::Bottom)
            .rotated(-FRAC_PI_2);
        text.draw(scene, &label);
    }

    if let Some(title) = &figure.title {
        let anchor = Point::new(center.x, vp.y0 - style.px(TITLE_PAD));
        let label = Label::new(title, style.font_px(TITLE_SIZE), anchor).align(HAlign::Center, VAlign::Bottom);
        text.draw(scene, &label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::shapes::series::LineStyle;

    fn series(label: &str) -> Series {
        Series {
            points: vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)],
            color: Color::BLACK,
            style: LineStyle::Solid,
            label: Some(label.to_string()),
        }
    }

    fn marker(label: &str, at: Vec2<f64>) -> Marker {
        Marker {
            at,
            color: Color::BLACK,
            label: Some(label.to_string()),
        }
    }

    #[test]
    fn viewport_matches_subplot_fractions() {
        let vp = axes_viewport(Size::new(1000.0, 800.0));
        assert!((vp.x0 - 125.0).abs() < 1e-9);
        assert!((vp.x1 - 900.0).abs() < 1e-9);
        assert!((vp.y0 - 96.0).abs() < 1e-9);
        assert!((vp.y1 - 712.0).abs() < 1e-9);
    }

    #[test]
    fn artists_come_back_in_insertion_order() {
        let mut world = World::default();
        world.spawn((marker("b", Vec2::new(2.0, 3.0)), DrawOrder(1)));
        world.spawn((series("c"), DrawOrder(2)));
        world.spawn((series("a"), DrawOrder(0)));

        let artists = collect_artists(&mut world);
        let labels: Vec<_> = artists.iter().filter_map(|(_, a)| a.label()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(artists[1].1.z_order(), 1);
        assert_eq!(artists[1].1.data_points(), vec![Vec2::new(2.0, 3.0)]);
    }

    #[test]
    fn polyline_needs_two_points() {
        let axes = Axes::autoscale(&[], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(polyline(&axes, &[]).is_none());
        assert!(polyline(&axes, &[Vec2::new(0.5, 0.5)]).is_none());

        let path = polyline(&axes, &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0)]).unwrap();
        assert_eq!(path.elements().len(), 3);
    }

    #[test]
    fn draws_the_full_figure_into_a_scene() {
        let mut scene = Scene::new();
        let mut text = TextRenderer::new();
        let mut world = crate::build_world();

        draw_figure(&mut scene, &mut text, &mut world, Size::new(1000.0, 800.0), 1.0);
        assert!(!scene.encoding().is_empty());

        // HiDPI surfaces go through the same path
        let mut hidpi = Scene::new();
        draw_figure(&mut hidpi, &mut text, &mut world, Size::new(2000.0, 1600.0), 2.0);
        assert!(!hidpi.encoding().is_empty());
    }

    #[test]
    fn empty_world_still_draws_the_axes() {
        let mut scene = Scene::new();
        let mut world = World::default();
        draw_figure(&mut scene, &mut TextRenderer::new(), &mut world, Size::new(400.0, 300.0), 1.0);
        assert!(!scene.encoding().is_empty());
    }
}
