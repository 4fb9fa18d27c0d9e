//! Stock axis-configuration templates.
//!
//! Three Roboto Flex variation looks and the pool assembling them.
//! Useful as demo data and as realistic fixtures in tests; nothing in
//! the engine depends on them.

use crate::axes::AxisConfig;
use crate::cycle::StatePool;

/// Heavy, dark, upright.
pub fn heavy() -> AxisConfig {
    [
        ("wght", 800.0),
        ("GRAD", -60.0),
        ("slnt", 0.0),
        ("wdth", 25.0),
        ("XOPQ", 100.0),
        ("YOPQ", 25.0),
        ("XTRA", 480.0),
        ("YTUC", 712.0),
        ("YTLC", 514.0),
        ("YTAS", 750.0),
        ("YTDE", -203.0),
        ("YTFI", 738.0),
    ]
    .into_iter()
    .collect()
}

/// Light, slanted, narrow strokes.
pub fn slanted() -> AxisConfig {
    [
        ("wght", 500.0),
        ("GRAD", 0.0),
        ("slnt", -5.0),
        ("wdth", 25.0),
        ("XOPQ", 70.0),
        ("YOPQ", 25.0),
        ("XTRA", 540.0),
        ("YTUC", 712.0),
        ("YTLC", 514.0),
        ("YTAS", 750.0),
        ("YTDE", -300.0),
        ("YTFI", 738.0),
    ]
    .into_iter()
    .collect()
}

/// Wide with inverted stroke contrast.
pub fn wide() -> AxisConfig {
    [
        ("wght", 500.0),
        ("GRAD", 0.0),
        ("slnt", -5.0),
        ("wdth", 50.0),
        ("XOPQ", 27.0),
        ("YOPQ", 135.0),
        ("XTRA", 540.0),
        ("YTUC", 712.0),
        ("YTLC", 514.0),
        ("YTAS", 750.0),
        ("YTDE", -300.0),
        ("YTFI", 738.0),
    ]
    .into_iter()
    .collect()
}

/// The stock state pool, in template order.
pub fn pool() -> StatePool {
    StatePool::new(vec![heavy(), slanted(), wide()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_share_one_axis_set() {
        let pool = pool();
        assert_eq!(pool.len(), 3);
        for state in pool.states() {
            assert_eq!(state.len(), 12);
            heavy().check_compatible(state).unwrap();
        }
    }
}
