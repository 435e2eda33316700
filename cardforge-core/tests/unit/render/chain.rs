use super::*;
use crate::foundation::core::Canvas;
use crate::foundation::rng::Rng64;

struct Always(bool);

impl CoinFlip for Always {
    fn next_bool(&mut self) -> bool {
        self.0
    }
}

struct Alternate(bool);

impl CoinFlip for Alternate {
    fn next_bool(&mut self) -> bool {
        self.0 = !self.0;
        self.0
    }
}

fn params() -> ChainParams {
    ChainParams {
        start: Point::new(200.0, 100.0),
        count: 4,
        size_increment: 2.0,
        z_angle: 30.0,
        size: 15.0,
        phase_shift: 5.0,
        gap: 5.0,
        ..ChainParams::default()
    }
}

/// Build the surface an always-drawing chain must produce, advancing the
/// state by hand: size += increment, x += 5, z += 50, insert -= (size*1.5, 0).
fn expected_chain(p: &ChainParams, cubes: usize) -> Surface {
    let mut expected = Surface::new(Canvas::business_card());
    let mut insert = p.start;
    let mut size = p.size;
    let mut x_angle = p.x_angle;
    let mut z_angle = p.z_angle;
    for n in 0..cubes {
        assert_eq!(size, p.size + n as f64 * p.size_increment);
        assert_eq!(z_angle + p.phase_shift, p.z_angle + p.phase_shift + n as f64 * 50.0);
        let spec = CubeSpec {
            insert,
            size,
            fill_color: CHAIN_FILL.to_string(),
            fill_opacity: 1.0,
            stroke_opacity: 1.0,
            x_angle,
            y_angle: p.y_angle,
            z_angle: z_angle + p.phase_shift,
            gap: p.gap,
            ..CubeSpec::default()
        };
        render_cube(&mut expected, &spec).unwrap();
        insert += Vec2::new(-size * 1.5, 0.0);
        size += p.size_increment;
        x_angle += 5.0;
        z_angle += 50.0;
    }
    expected
}

#[test]
fn always_true_source_draws_exactly_count_cubes() {
    let p = params();
    let mut surface = Surface::new(Canvas::business_card());
    render_chain(&mut surface, &mut Always(true), &p).unwrap();

    assert_eq!(surface.len(), p.count * 6);
    assert_eq!(surface.shapes(), expected_chain(&p, p.count).shapes());
}

#[test]
fn always_false_source_draws_nothing() {
    let mut surface = Surface::new(Canvas::business_card());
    render_chain(
        &mut surface,
        &mut Always(false),
        &ChainParams {
            count: 100,
            ..params()
        },
    )
    .unwrap();
    assert!(surface.is_empty());
}

#[test]
fn zero_count_draws_nothing() {
    let mut surface = Surface::new(Canvas::business_card());
    render_chain(
        &mut surface,
        &mut Rng64::new(9),
        &ChainParams {
            count: 0,
            ..params()
        },
    )
    .unwrap();
    assert!(surface.is_empty());
}

#[test]
fn skipped_steps_freeze_the_chain_state() {
    // Alternating flips over 8 steps draw 4 cubes whose states advance only
    // on the drawn steps, so the result equals an always-true 4-cube chain.
    let mut alternating = Surface::new(Canvas::business_card());
    render_chain(
        &mut alternating,
        &mut Alternate(false),
        &ChainParams {
            count: 8,
            ..params()
        },
    )
    .unwrap();

    let p = params();
    assert_eq!(alternating.shapes(), expected_chain(&p, 4).shapes());
}

#[test]
fn identical_seeds_render_identical_chains() {
    let p = ChainParams {
        count: 24,
        ..params()
    };
    let mut a = Surface::new(Canvas::business_card());
    let mut b = Surface::new(Canvas::business_card());
    render_chain(&mut a, &mut Rng64::new(77), &p).unwrap();
    render_chain(&mut b, &mut Rng64::new(77), &p).unwrap();
    assert_eq!(a.shapes(), b.shapes());
}
