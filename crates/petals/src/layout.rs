use crate::element::{Element, Positioning};
use crate::geom::{Placement, Point, Size};
use std::f64::consts::PI;
use std::iter::zip;

/// Distance from the wheel center to every petal center.
pub const RADIUS: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalGeometry {
    pub angle: f64,
    pub center: Point,
    pub placement: Placement,
}

impl PetalGeometry {
    /// Angle of the `index`-th of `count` petals, starting at 0 and going clockwise
    /// in screen coordinates. `count` must be non-zero.
    pub fn angle(index: usize, count: usize) -> f64 {
        2.0 * PI * index as f64 / count as f64
    }

    pub fn calculate(index: usize, count: usize, wheel_center: Point, size: Size) -> Self {
        let angle = Self::angle(index, count);
        let center = Point::new(
            wheel_center.x + RADIUS * angle.cos(),
            wheel_center.y + RADIUS * angle.sin(),
        );

        Self {
            angle,
            center,
            placement: Placement::centered_on(center, size),
        }
    }
}

/// Positions of every petal around a wheel, computed from measured sizes only.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub center: Point,
    pub petals: Vec<PetalGeometry>,
}

impl WheelLayout {
    pub fn new(wheel: Size, petals: &[Size]) -> Self {
        let center = wheel.center();
        let count = petals.len();

        Self {
            center,
            petals: petals
                .iter()
                .enumerate()
                .map(|(i, &size)| PetalGeometry::calculate(i, count, center, size))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.petals.is_empty()
    }

    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.petals.iter().map(|p| p.placement)
    }
}

/// Lays `petals` out on a circle of [`RADIUS`] around the center of `wheel`, in the
/// order given, and returns how many were placed.
///
/// The wheel becomes the positioning context of the petals: a `static` wheel is made
/// `relative` and every petal is made `absolute`. With no petals nothing is touched.
pub fn initialize_task_wheel<W, P>(wheel: &mut W, petals: &mut [P]) -> usize
where
    W: Element + ?Sized,
    P: Element,
{
    if petals.is_empty() {
        log::debug!("No petals to place");
        return 0;
    }

    if !wheel.positioning().establishes_context() {
        wheel.set_positioning(Positioning::Relative);
    }

    let sizes: Vec<Size> = petals.iter().map(Element::size).collect();
    let layout = WheelLayout::new(wheel.size(), &sizes);

    for (petal, geometry) in zip(petals.iter_mut(), &layout.petals) {
        petal.set_positioning(Positioning::Absolute);
        petal.set_placement(geometry.placement);
    }

    log::debug!(
        "Placed {} petals around ({}, {})",
        layout.petals.len(),
        layout.center.x,
        layout.center.y
    );

    layout.petals.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeElement {
        size: Size,
        positioning: Positioning,
        placement: Option<Placement>,
    }

    impl FakeElement {
        fn sized(width: f64, height: f64) -> Self {
            Self {
                size: Size::new(width, height),
                positioning: Positioning::Static,
                placement: None,
            }
        }
    }

    impl Element for FakeElement {
        fn size(&self) -> Size {
            self.size
        }

        fn positioning(&self) -> Positioning {
            self.positioning
        }

        fn set_positioning(&mut self, positioning: Positioning) {
            self.positioning = positioning;
        }

        fn set_placement(&mut self, placement: Placement) {
            self.placement = Some(placement);
        }
    }

    fn placed(petal: &FakeElement) -> Placement {
        petal.placement.expect("petal was not placed")
    }

    #[test]
    fn test_four_petals_on_square_wheel() {
        let mut wheel = FakeElement::sized(400.0, 400.0);
        let mut petals = vec![FakeElement::sized(50.0, 50.0); 4];

        assert_eq!(initialize_task_wheel(&mut wheel, &mut petals), 4);

        let offsets: Vec<_> = petals.iter().map(|p| placed(p).rounded()).collect();
        assert_eq!(offsets, vec![(375, 175), (175, 375), (-25, 175), (175, -25)]);
    }

    #[test]
    fn test_angles_are_evenly_spaced_in_order() {
        for count in 1..=12 {
            let sizes = vec![Size::new(10.0, 10.0); count];
            let layout = WheelLayout::new(Size::new(300.0, 300.0), &sizes);
            let step = 2.0 * PI / count as f64;

            for (i, petal) in layout.petals.iter().enumerate() {
                assert!((petal.angle - step * i as f64).abs() < EPSILON);
            }
            for pair in layout.petals.windows(2) {
                assert!((pair[1].angle - pair[0].angle - step).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_every_petal_center_is_on_the_radius() {
        let mut wheel = FakeElement::sized(640.0, 480.0);
        let mut petals: Vec<_> = (0..7)
            .map(|i| FakeElement::sized(20.0 + i as f64 * 7.0, 90.0 - i as f64 * 5.0))
            .collect();

        initialize_task_wheel(&mut wheel, &mut petals);

        let center = Point::new(320.0, 240.0);
        for petal in &petals {
            let petal_center = placed(petal).center_of(petal.size);
            assert!((petal_center.distance(center) - RADIUS).abs() < EPSILON);
        }
    }

    #[test]
    fn test_single_petal_sits_at_angle_zero() {
        let mut wheel = FakeElement::sized(400.0, 300.0);
        let mut petals = vec![FakeElement::sized(40.0, 20.0)];

        initialize_task_wheel(&mut wheel, &mut petals);

        assert_eq!(placed(&petals[0]), Placement::new(200.0 + RADIUS - 20.0, 140.0));
    }

    #[test]
    fn test_no_petals_is_a_no_op() {
        let mut wheel = FakeElement::sized(400.0, 400.0);
        let mut petals: Vec<FakeElement> = Vec::new();

        assert_eq!(initialize_task_wheel(&mut wheel, &mut petals), 0);
        assert_eq!(wheel, FakeElement::sized(400.0, 400.0));
        assert!(WheelLayout::new(wheel.size, &[]).is_empty());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let mut wheel = FakeElement::sized(500.0, 500.0);
        let mut petals = vec![FakeElement::sized(60.0, 40.0); 5];

        initialize_task_wheel(&mut wheel, &mut petals);
        let first = petals.clone();
        initialize_task_wheel(&mut wheel, &mut petals);

        assert_eq!(petals, first);
    }

    #[test]
    fn test_wheel_becomes_positioning_context() {
        let mut wheel = FakeElement::sized(400.0, 400.0);
        let mut petals = vec![FakeElement::sized(50.0, 50.0); 2];

        initialize_task_wheel(&mut wheel, &mut petals);

        assert_eq!(wheel.positioning, Positioning::Relative);
        assert!(petals.iter().all(|p| p.positioning == Positioning::Absolute));
    }

    #[test]
    fn test_existing_context_is_kept() {
        let mut wheel = FakeElement::sized(400.0, 400.0);
        wheel.positioning = Positioning::Fixed;
        let mut petals = vec![FakeElement::sized(50.0, 50.0)];

        initialize_task_wheel(&mut wheel, &mut petals);

        assert_eq!(wheel.positioning, Positioning::Fixed);
    }
}
