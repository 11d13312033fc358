//! SVG emission for a [`DrawList`].
//!
//! One element per draw item, written in paint order. The draw list works in
//! view units with +Y up; when the viewport asks for it the whole group is
//! mirrored so the file displays the same way up.

use std::fmt::Write as _;

use vantage_engine::coords::{Rect, Viewport};
use vantage_engine::paint::Color;
use vantage_engine::scene::{DrawCmd, DrawList};

/// Serializes `draw_list` as a standalone SVG document framed by `viewport`.
pub fn write_svg(draw_list: &mut DrawList, viewport: &Viewport) -> String {
    let view = viewport.view.normalized();
    // Mirrored content occupies y in [-(y + h), -y].
    let top = if viewport.flip_y { -(view.origin.y + view.size.y) } else { view.origin.y };

    let mut out = String::with_capacity(64 + draw_list.len() * 80);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        num(view.origin.x),
        num(top),
        num(view.size.x),
        num(view.size.y)
    );
    if viewport.flip_y {
        out.push_str("<g transform=\"scale(1,-1)\">\n");
    } else {
        out.push_str("<g>\n");
    }

    for item in draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Rect(cmd) => write_rect(&mut out, cmd.rect, cmd.fill),
            DrawCmd::Circle(cmd) => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    num(cmd.center.x),
                    num(cmd.center.y),
                    num(cmd.radius)
                );
                write_fill(&mut out, cmd.fill);
            }
        }
    }

    out.push_str("</g>\n</svg>\n");
    log::debug!("svg: {} elements, {} bytes", draw_list.len(), out.len());
    out
}

fn write_rect(out: &mut String, rect: Rect, fill: Color) {
    let rect = rect.normalized();
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        num(rect.origin.x),
        num(rect.origin.y),
        num(rect.size.x),
        num(rect.size.y)
    );
    write_fill(out, fill);
}

fn write_fill(out: &mut String, fill: Color) {
    let [r, g, b, _] = fill.to_srgb_u8();
    let _ = write!(out, r##" fill="#{r:02x}{g:02x}{b:02x}""##);
    if !fill.is_opaque() {
        let _ = write!(out, r#" fill-opacity="{}""#, num(fill.a.clamp(0.0, 1.0)));
    }
    out.push_str("/>\n");
}

/// Up to six decimals, trailing zeros dropped, no negative zero.
fn num(v: f64) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_engine::coords::Vec2;
    use vantage_engine::scene::Layer;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(-0.5), "-0.5");
        assert_eq!(num(0.1234567), "0.123457");
        assert_eq!(num(-0.0000001), "0");
        assert_eq!(num(120.25), "120.25");
    }

    #[test]
    fn unit_viewport_flips_content() {
        let mut draw_list = DrawList::new();
        draw_list.push_solid_circle(Layer(0), Vec2::new(0.25, -0.5), 0.1, Color::black());

        let svg = write_svg(&mut draw_list, &Viewport::unit());
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-1 -1 2 2">"#));
        assert!(svg.contains(r#"<g transform="scale(1,-1)">"#));
        assert!(svg.contains(r##"<circle cx="0.25" cy="-0.5" r="0.1" fill="#000000"/>"##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn flipped_view_box_covers_mirrored_range() {
        let viewport = Viewport::new(Rect::new(0.0, 1.0, 4.0, 2.0), true);
        let svg = write_svg(&mut DrawList::new(), &viewport);
        assert!(svg.contains(r#"viewBox="0 -3 4 2""#));

        let upright = Viewport::new(Rect::new(0.0, 1.0, 4.0, 2.0), false);
        let svg = write_svg(&mut DrawList::new(), &upright);
        assert!(svg.contains(r#"viewBox="0 1 4 2""#));
        assert!(svg.contains("<g>\n"));
    }

    #[test]
    fn elements_follow_paint_order_and_alpha() {
        let mut draw_list = DrawList::new();
        draw_list.push_solid_circle(Layer(1), Vec2::zero(), 0.5, Color::from_srgb_u8(255, 0, 0, 128));
        draw_list.push_solid_rect(Layer::BACKGROUND, Viewport::unit().view, Color::white());

        let svg = write_svg(&mut draw_list, &Viewport::unit());
        let rect_at = svg.find("<rect").unwrap();
        let circle_at = svg.find("<circle").unwrap();
        assert!(rect_at < circle_at);
        assert!(svg.contains(r##"<rect x="-1" y="-1" width="2" height="2" fill="#ffffff"/>"##));
        assert!(svg.contains(r##"fill="#ff0000" fill-opacity="0.501961"/>"##));
    }
}
