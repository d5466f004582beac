use crate::Cell;
use crate::grid::Grid;
use crate::rule::Rule;
use crate::seed::Seed;

/// Grow `rows` rows of the automaton defined by `rule`, starting from `seed`.
///
/// Row 0 is the seed. Every later row is computed from the row right above it, looking at each
/// cell together with its left and right neighbors. The row wraps around, so the left neighbor of
/// column `0` is column `width - 1` and the right neighbor of column `width - 1` is column `0`.
///
/// # Panics
/// If `rows` is `0`.
pub fn evolve(seed: &Seed, rule: Rule, rows: usize) -> Grid {
    evolve_with(seed, rule, rows, |_, _| {})
}

/// Like [`evolve`], but `f` is called with the index and cells of every row, in order, as soon
/// as that row is final. Row 0 (the seed) is reported too.
pub fn evolve_with<F>(seed: &Seed, rule: Rule, rows: usize, mut f: F) -> Grid
where
    F: FnMut(usize, &[Cell]),
{
    let table = rule.table();
    let mut grid = Grid::with_seed(seed, rows);

    f(0, grid.row(0));

    for r in 1..rows {
        let (prev, next) = grid.split_row_mut(r);
        step(prev, next, &table);

        f(r, next);
    }

    grid
}

/// Compute `next` from `prev`. Both rows have the same, non-zero, length.
fn step(prev: &[Cell], next: &mut [Cell], table: &[Cell; 8]) {
    let w = prev.len();

    for (c, cell) in next.iter_mut().enumerate() {
        let left = prev[(c + w - 1) % w];
        let center = prev[c];
        let right = prev[(c + 1) % w];

        let num = (left as usize) << 2 | (center as usize) << 1 | right as usize;

        *cell = table[num];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RULE_90;
    use crate::rule::RULE_184;

    fn seed(s: &str) -> Seed {
        Seed::parse(s).unwrap()
    }

    #[test]
    fn rule_90_from_single_cell() {
        let grid = evolve(&seed("00100"), RULE_90, 3);

        assert_eq!(grid.to_string(), "00100\n01010\n10001");
    }

    #[test]
    fn single_row_is_seed() {
        let seed = seed("1011");
        let grid = evolve(&seed, RULE_90, 1);

        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.row(0), seed.cells());
    }

    #[test]
    fn left_edge_wraps() {
        // Rule 16: only `100` is born, so the cell right of the live one is born. That is
        // column 0 when the last column is alive.
        let grid = evolve(&seed("0001"), Rule::new(16), 2);

        assert_eq!(grid.row(1), &[true, false, false, false]);
    }

    #[test]
    fn right_edge_wraps() {
        // Rule 2: `001` births, so the cell left of a live one is born. Column 0 is alive, so
        // column `w - 1` is born.
        let grid = evolve(&seed("1000"), Rule::new(2), 2);

        assert_eq!(grid.row(1), &[false, false, false, true]);
    }

    #[test]
    fn single_column_is_its_own_neighbor() {
        // The neighborhood of a lone live cell is `111`, of a lone dead cell `000`.
        assert_eq!(evolve(&seed("1"), Rule::new(0b1000_0000), 3).to_string(), "1\n1\n1");
        assert_eq!(evolve(&seed("1"), Rule::new(0b0111_1111), 3).to_string(), "1\n0\n1");
    }

    #[test]
    fn traffic_moves_right() {
        let grid = evolve(&seed("11000"), RULE_184, 4);

        assert_eq!(grid.to_string(), "11000\n10100\n01010\n00101");
    }

    #[test]
    fn observer_sees_every_row_in_order() {
        let mut seen = Vec::new();
        let grid = evolve_with(&seed("00100"), RULE_90, 4, |r, row| {
            seen.push((r, row.to_vec()));
        });

        assert_eq!(seen.len(), 4);
        for (i, (r, row)) in seen.iter().enumerate() {
            assert_eq!(*r, i);
            assert_eq!(row.as_slice(), grid.row(i));
        }
    }
}
