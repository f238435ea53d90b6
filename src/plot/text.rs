use parley::layout::{Alignment, Layout, PositionedLayoutItem};
use parley::style::{FontStack, StyleProperty};
use parley::{FontContext, LayoutContext};
use peniko::Color;
use vello::kurbo::{Affine, Point, Size, Vec2};
use vello::peniko::Fill;
use vello::{Glyph, Scene};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

impl HAlign {
    fn factor(self) -> f64 {
        match self {
            HAlign::Left => 0.0,
            HAlign::Center => 0.5,
            HAlign::Right => 1.0,
        }
    }
}

impl VAlign {
    fn factor(self) -> f64 {
        match self {
            VAlign::Top => 0.0,
            VAlign::Middle => 0.5,
            VAlign::Bottom => 1.0,
        }
    }
}

/// A single line of text pinned to `anchor` by the given alignment,
/// then rotated about the anchor by `angle` radians.
#[derive(Clone, Debug)]
pub struct Label<'a> {
    pub text: &'a str,
    pub size: f32,
    pub color: Color,
    pub anchor: Point,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub angle: f64,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, size: f32, anchor: Point) -> Self {
        Label {
            text,
            size,
            color: Color::BLACK,
            anchor,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            angle: 0.0,
        }
    }

    pub fn align(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn rotated(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

/// Offset from the anchor to the top left corner of a box of `size`.
pub fn align_offset(size: Size, h_align: HAlign, v_align: VAlign) -> Vec2 {
    Vec2::new(-size.width * h_align.factor(), -size.height * v_align.factor())
}

pub struct TextRenderer {
    font_cx: FontContext,
    layout_cx: LayoutContext<Color>,
}

impl TextRenderer {
    pub fn new() -> Self {
        TextRenderer {
            font_cx: FontContext::default(),
            layout_cx: LayoutContext::new(),
        }
    }

    fn layout(&mut self, text: &str, size: f32, color: Color) -> Layout<Color> {
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0);
        builder.push_default(StyleProperty::FontStack(FontStack::Source("sans-serif".into())));
        builder.push_default(StyleProperty::FontSize(size));
        builder.push_default(StyleProperty::Brush(color));

        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start);
        layout
    }

    pub fn measure(&mut self, text: &str, size: f32) -> Size {
        let layout = self.layout(text, size, Color::BLACK);
        Size::new(layout.width() as f64, layout.height() as f64)
    }

    pub fn draw(&mut self, scene: &mut Scene, label: &Label) {
        let layout = self.layout(label.text, label.size, label.color);
        let size = Size::new(layout.width() as f64, layout.height() as f64);
        let transform = Affine::translate(label.anchor.to_vec2())
            * Affine::rotate(label.angle)
            * Affine::translate(align_offset(size, label.h_align, label.v_align));

        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let glyphs = glyph_run.glyphs().map(|glyph| {
                    let gx = x + glyph.x;
                    let gy = y - glyph.y;
                    x += glyph.advance;
                    Glyph {
                        id: glyph.id as _,
                        x: gx,
                        y: gy,
                    }
                });

                scene
                    .draw_glyphs(run.font())
                    .font_size(run.font_size())
                    .transform(transform)
                    .brush(&label.color)
                    .draw(Fill::NonZero, glyphs);
            }
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
