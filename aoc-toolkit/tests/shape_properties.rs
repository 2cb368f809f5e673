//! Property tests for shape normalization and variants

use aoc_toolkit::packing::{Shape, pack_region};
use proptest::prelude::*;

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (1usize..5, 1usize..5).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<bool>(), w * h).prop_map(move |cells| Shape::new(w, h, cells))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn normalize_is_idempotent(shape in shape_strategy()) {
        let once = shape.normalize();
        prop_assert_eq!(once.normalize(), once.clone());
        prop_assert_eq!(once.cell_count(), shape.cell_count());
    }

    #[test]
    fn variants_are_closed_under_symmetry(shape in shape_strategy()) {
        let variants = shape.variants();
        prop_assert!(!variants.is_empty() && variants.len() <= 8);
        prop_assert_eq!(&variants[0], &shape.normalize());
        for v in &variants {
            prop_assert!(variants.contains(&v.rotate()));
            prop_assert!(variants.contains(&v.flip()));
            prop_assert_eq!(v.cell_count(), shape.cell_count());
        }
    }

    #[test]
    fn shape_packs_its_own_bounding_box(shape in shape_strategy()) {
        // a solid rectangle covers its own box; a sparse shape cannot
        let normal = shape.normalize();
        prop_assume!(normal.cell_count() > 0);
        let solid = normal.cell_count() == normal.width() * normal.height();
        let packed = pack_region(normal.width(), normal.height(), &[normal.variants()], &[1]);
        prop_assert_eq!(packed, solid);
    }
}
