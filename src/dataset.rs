//! The built-in demo dataset: seven eight-point series in an 800x400
//! chart-pixel extent. Terminal Y values in input order are 239, 323, 292,
//! 179, 166, 216 and 129, which exercises both straight and elbowed leaders.

use crate::models::{Point, Series};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// The fixed series list the demo chart is rendered from.
pub fn builtin_series() -> Vec<Series> {
    vec![
        Series::new(
            vec![
                p(52.0, 340.0),
                p(145.0, 242.0),
                p(243.0, 158.0),
                p(359.0, 236.0),
                p(456.0, 333.0),
                p(541.0, 227.0),
                p(644.0, 148.0),
                p(731.0, 239.0),
            ],
            "Category 1",
        ),
        Series::new(
            vec![
                p(57.0, 124.0),
                p(149.0, 321.0),
                p(252.0, 213.0),
                p(355.0, 137.0),
                p(444.0, 321.0),
                p(548.0, 129.0),
                p(643.0, 212.0),
                p(742.0, 323.0),
            ],
            "Category 2",
        ),
        Series::new(
            vec![
                p(49.0, 189.0),
                p(143.0, 279.0),
                p(249.0, 198.0),
                p(357.0, 287.0),
                p(442.0, 195.0),
                p(539.0, 278.0),
                p(649.0, 199.0),
                p(737.0, 292.0),
            ],
            "Category 3",
        ),
        Series::new(
            vec![
                p(59.0, 295.0),
                p(141.0, 192.0),
                p(255.0, 295.0),
                p(349.0, 188.0),
                p(457.0, 296.0),
                p(544.0, 182.0),
                p(652.0, 292.0),
                p(739.0, 179.0),
            ],
            "Category 4",
        ),
        Series::new(
            vec![
                p(54.0, 264.0),
                p(146.0, 169.0),
                p(253.0, 266.0),
                p(351.0, 157.0),
                p(456.0, 263.0),
                p(539.0, 154.0),
                p(641.0, 265.0),
                p(746.0, 166.0),
            ],
            "Category 5",
        ),
        Series::new(
            vec![
                p(56.0, 310.0),
                p(147.0, 218.0),
                p(248.0, 308.0),
                p(358.0, 209.0),
                p(453.0, 312.0),
                p(540.0, 210.0),
                p(639.0, 311.0),
                p(734.0, 216.0),
            ],
            "Category 6",
        ),
        Series::new(
            vec![
                p(58.0, 234.0),
                p(142.0, 144.0),
                p(250.0, 234.0),
                p(353.0, 137.0),
                p(454.0, 232.0),
                p(547.0, 136.0),
                p(640.0, 238.0),
                p(748.0, 129.0),
            ],
            "Category 7",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_series_with_expected_terminals() {
        let series = builtin_series();
        assert_eq!(series.len(), 7);
        let terminals: Vec<f64> = series.iter().map(|s| s.terminal().unwrap().y).collect();
        assert_eq!(
            terminals,
            vec![239.0, 323.0, 292.0, 179.0, 166.0, 216.0, 129.0]
        );
    }
}
