//! Tests for golden-ratio subdivision steps and planning

#[cfg(test)]
mod tests {
    use super::super::assert_valid_directive;
    use imagecollage::layout::geometry::{LayoutOptions, Rect, Size};
    use imagecollage::layout::golden::{
        GOLDEN_RATIO, GoldenState, HorizontalSide, VerticalSide, plan_golden_ratio,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn options(padding: u32, randomize: bool) -> LayoutOptions {
        LayoutOptions {
            padding,
            randomize,
            centered: false,
        }
    }

    // Tests the constant matches (1 + sqrt 5) / 2
    #[test]
    fn test_golden_ratio_value() {
        let expected = (1.0 + 5f64.sqrt()) / 2.0;
        assert!((GOLDEN_RATIO - expected).abs() < 1e-12);
    }

    // Tests the first steps spiral inward on a wide canvas
    #[test]
    fn test_step_sequence() {
        let state = GoldenState::new(
            Size::new(1000, 600),
            HorizontalSide::Left,
            VerticalSide::Top,
        );

        let (first, state) = state.step(0).unwrap();
        assert_eq!(first, Rect::new(0, 0, 618, 600));
        assert_eq!(state.horizontal, HorizontalSide::Right);

        let (second, state) = state.step(0).unwrap();
        assert_eq!(second, Rect::new(618, 0, 382, 370));
        assert_eq!(state.vertical, VerticalSide::Bottom);

        let (third, state) = state.step(0).unwrap();
        assert_eq!(third, Rect::new(764, 370, 236, 230));
        assert_eq!(state.area.x, 618);
        assert_eq!(state.area.width, 146);
    }

    // Tests starting on the opposite sides mirrors the first slices
    #[test]
    fn test_step_from_right_and_bottom() {
        let state = GoldenState::new(
            Size::new(1000, 600),
            HorizontalSide::Right,
            VerticalSide::Bottom,
        );

        let (first, state) = state.step(0).unwrap();
        assert_eq!(first, Rect::new(382, 0, 618, 600));
        assert_eq!(state.area.x, 0);
        assert_eq!(state.area.width, 382);

        let (second, _) = state.step(0).unwrap();
        assert_eq!(second, Rect::new(0, 230, 382, 370));
    }

    // Tests padding shrinks the working area beyond the carved slice
    #[test]
    fn test_step_with_padding() {
        let state = GoldenState::new(Size::new(1000, 600), HorizontalSide::Left, VerticalSide::Top);

        let (first, state) = state.step(10).unwrap();
        assert_eq!(first, Rect::new(0, 0, 618, 600));
        assert_eq!(state.area.x, 628);
        assert_eq!(state.area.width, 1000 - 628);
    }

    // Tests an exhausted area produces no further slices
    #[test]
    fn test_step_exhausted() {
        let mut state = GoldenState::new(Size::new(3, 2), HorizontalSide::Left, VerticalSide::Top);
        let mut steps = 0;
        while let Some((_, next)) = state.step(0) {
            state = next;
            steps += 1;
            assert!(steps < 10, "subdivision never terminates");
        }

        assert_eq!(steps, 3);
        assert!(GoldenState::new(Size::new(0, 5), HorizontalSide::Left, VerticalSide::Top)
            .is_exhausted());
    }

    // Tests planning drops images once the area is used up
    #[test]
    fn test_plan_truncates() {
        let mut rng = StdRng::seed_from_u64(0);
        let canvas = Size::new(3, 2);
        let placements = plan_golden_ratio(10, canvas, &options(0, false), &mut rng);

        assert_eq!(placements.len(), 3);
        assert_valid_directive(&placements, 10, canvas);
    }

    // Tests golden directives stay inside the canvas and never overlap
    #[test]
    fn test_plan_invariants() {
        let mut rng = StdRng::seed_from_u64(5);
        let canvases = [Size::new(1754, 1240), Size::new(1240, 1754), Size::new(500, 500)];

        for canvas in canvases {
            for count in 0..=30 {
                for opts in [options(0, false), options(6, true)] {
                    let placements = plan_golden_ratio(count, canvas, &opts, &mut rng);
                    assert_valid_directive(&placements, count, canvas);
                }
            }
        }
    }

    // Tests the same seed yields the same randomized arrangement
    #[test]
    fn test_plan_seeded_randomization() {
        let canvas = Size::new(1754, 1240);
        let first = plan_golden_ratio(8, canvas, &options(4, true), &mut StdRng::seed_from_u64(42));
        let second = plan_golden_ratio(8, canvas, &options(4, true), &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }
}
