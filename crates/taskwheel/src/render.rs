use crate::theme::ThemeColors;
use cairo::{Context, Format, ImageSurface};
use palette::Srgba;
use petals::{Element, Node, Page, Placement, Point, RADIUS, Selectors, Size};
use std::f64::consts::PI;
use std::path::Path;
use thiserror::Error;

const MARGIN: f64 = 16.0;
const LABEL_FONT_SIZE: f64 = 12.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No wheel element matches `.{0}`")]
    MissingWheel(petals::ClassName),
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Axis-aligned box in wheel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    fn of(placement: Placement, size: Size) -> Self {
        Self {
            min: Point::new(placement.left, placement.top),
            max: Point::new(placement.left + size.width, placement.top + size.height),
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct PetalRenderer<'a> {
    node: &'a Node,
    placement: Placement,
}

impl PetalRenderer<'_> {
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let size = self.node.size();
        cr.rectangle(self.placement.left, self.placement.top, size.width, size.height);
        set_source(cr, colors.petal);
        cr.fill_preserve()?;
        set_source(cr, colors.outline);
        cr.set_line_width(1.5);
        cr.stroke()?;

        match self.node.name() {
            Some(name) => self.draw_label(cr, colors, name),
            None => Ok(()),
        }
    }

    fn draw_label(
        &self,
        cr: &Context,
        colors: &ThemeColors,
        text: &str,
    ) -> Result<(), cairo::Error> {
        let center = self.placement.center_of(self.node.size());
        set_source(cr, colors.text);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(LABEL_FONT_SIZE);
        let ext = cr.text_extents(text)?;
        cr.move_to(
            center.x - ext.width() / 2.0 - ext.x_bearing(),
            center.y - ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(text)
    }
}

fn draw_wheel(cr: &Context, wheel: Size, colors: &ThemeColors) -> Result<(), cairo::Error> {
    cr.rectangle(0.0, 0.0, wheel.width, wheel.height);
    set_source(cr, colors.wheel);
    cr.fill()?;

    let center = wheel.center();
    cr.new_path();
    cr.arc(center.x, center.y, RADIUS, 0.0, 2.0 * PI);
    set_source(cr, colors.guide);
    cr.set_line_width(1.0);
    cr.set_dash(&[4.0, 4.0], 0.0);
    cr.stroke()?;
    cr.set_dash(&[], 0.0);
    Ok(())
}

/// Draws the wheel and every placed petal of `page` into a PNG at `path`. The canvas
/// grows to fit petals that overhang the wheel.
pub fn render_png(
    page: &Page,
    selectors: &Selectors,
    colors: &ThemeColors,
    path: &Path,
) -> Result<(), RenderError> {
    let wheel = page
        .query_selector(&selectors.wheel)
        .ok_or_else(|| RenderError::MissingWheel(selectors.wheel.clone()))?
        .size();

    let petals: Vec<PetalRenderer> = page
        .query_selector_all(&selectors.petal)
        .filter_map(|node| node.placement.map(|placement| PetalRenderer { node, placement }))
        .collect();

    let bounds = petals.iter().fold(
        Bounds::of(Placement::default(), wheel),
        |acc, p| acc.union(Bounds::of(p.placement, p.node.size())),
    );

    let surface = ImageSurface::create(
        Format::ARgb32,
        (bounds.width() + 2.0 * MARGIN).ceil() as i32,
        (bounds.height() + 2.0 * MARGIN).ceil() as i32,
    )?;

    {
        let cr = Context::new(&surface)?;
        cr.translate(MARGIN - bounds.min.x, MARGIN - bounds.min.y);
        draw_wheel(&cr, wheel, colors)?;
        for petal in &petals {
            petal.draw(&cr, colors)?;
        }
    }

    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::debug!("Rendered {} petals to {}", petals.len(), path.display());
    Ok(())
}
