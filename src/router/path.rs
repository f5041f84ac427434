//! Path candidate generation and selection
//!
//! Rather than searching the grid, the router tries a small fixed set of
//! orthogonal templates that match common P&ID drafting conventions
//! (right-angle runs and offset jogs). Component layouts in this domain are
//! sparse and mostly axis-aligned, so the templates cover the usual cases
//! and a deterministic fallback covers the rest.

use crate::model::Point;

use super::grid::Grid;
use super::obstacles::ObstacleSet;

/// Alignment of two ports at grid resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Same grid column: a single vertical run connects the ports
    Vertical,
    /// Same grid row: a single horizontal run connects the ports
    Horizontal,
    /// Neither: right-angle routing is required
    Unaligned,
}

/// Classify two ports by comparing their grid cells
pub fn classify(grid: &Grid, start: Point, end: Point) -> Alignment {
    let a = grid.cell(start);
    let b = grid.cell(end);
    if a.x == b.x {
        Alignment::Vertical
    } else if a.y == b.y {
        Alignment::Horizontal
    } else {
        Alignment::Unaligned
    }
}

/// The four orthogonal candidates for unaligned ports, in selection order
///
/// 1. Horizontal then vertical (L)
/// 2. Vertical then horizontal (L)
/// 3. Z-route with a horizontal crossbar at the midpoint height
/// 4. Z-route with a vertical crossbar at the midpoint width
pub fn candidates(start: Point, end: Point) -> [Vec<Point>; 4] {
    let mid = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
    [
        vec![start, Point::new(end.x, start.y), end],
        vec![start, Point::new(start.x, end.y), end],
        vec![
            start,
            Point::new(start.x, mid.y),
            Point::new(end.x, mid.y),
            end,
        ],
        vec![
            start,
            Point::new(mid.x, start.y),
            Point::new(mid.x, end.y),
            end,
        ],
    ]
}

/// Deterministic fallback when no candidate is clear of obstacles
///
/// The Z-route with its crossbar at the midpoint height (the third
/// candidate). It may cross an obstacle in dense layouts, but it guarantees
/// the router always yields a usable path.
pub fn fallback(start: Point, end: Point) -> Vec<Point> {
    let mid_y = (start.y + end.y) / 2.0;
    vec![
        start,
        Point::new(start.x, mid_y),
        Point::new(end.x, mid_y),
        end,
    ]
}

/// Check a candidate polyline against the obstacle set
///
/// Only the endpoints of each segment are tested, not the interior cells a
/// segment passes through. A full line-rasterization check would change
/// which candidate wins in edge cases, so this coarseness is kept as
/// documented behavior.
///
/// The cells of the path's own start and end points are exempt: ports sit
/// inside their own equipment's padded box, and a pipe only has to avoid
/// other equipment, not the components it connects.
fn is_clear(candidate: &[Point], obstacles: &ObstacleSet, grid: &Grid) -> bool {
    let start_cell = grid.cell(candidate[0]);
    let end_cell = grid.cell(candidate[candidate.len() - 1]);
    let blocked = |point: Point| {
        let cell = grid.cell(point);
        cell != start_cell && cell != end_cell && obstacles.contains(cell)
    };
    candidate
        .windows(2)
        .all(|seg| !blocked(seg[0]) && !blocked(seg[1]))
}

/// Pick the first obstacle-free candidate, in generation order
///
/// Always returns a path with at least two points: if every candidate is
/// rejected, the midpoint Z-route is returned unconditionally.
pub fn select(
    start: Point,
    end: Point,
    candidates: &[Vec<Point>],
    obstacles: &ObstacleSet,
    grid: &Grid,
) -> Vec<Point> {
    for candidate in candidates {
        if candidate.len() >= 2 && is_clear(candidate, obstacles, grid) {
            return candidate.clone();
        }
    }
    fallback(start, end)
}

/// Route a single pipe between two resolved port positions
///
/// Aligned ports get the direct two-point segment regardless of obstacles;
/// unaligned ports go through candidate selection.
pub fn route(grid: &Grid, obstacles: &ObstacleSet, start: Point, end: Point) -> Vec<Point> {
    match classify(grid, start, end) {
        Alignment::Vertical | Alignment::Horizontal => vec![start, end],
        Alignment::Unaligned => select(start, end, &candidates(start, end), obstacles, grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::grid::GridCell;

    fn grid() -> Grid {
        Grid::new(10.0)
    }

    #[test]
    fn test_classify_vertical() {
        // Same grid column even though x differs within the cell
        let alignment = classify(&grid(), Point::new(12.0, 5.0), Point::new(18.0, 95.0));
        assert_eq!(alignment, Alignment::Vertical);
    }

    #[test]
    fn test_classify_horizontal() {
        let alignment = classify(&grid(), Point::new(10.0, 10.0), Point::new(110.0, 10.0));
        assert_eq!(alignment, Alignment::Horizontal);
    }

    #[test]
    fn test_classify_unaligned() {
        let alignment = classify(&grid(), Point::new(0.0, 0.0), Point::new(50.0, 80.0));
        assert_eq!(alignment, Alignment::Unaligned);
    }

    #[test]
    fn test_candidate_templates() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(50.0, 80.0);
        let cands = candidates(start, end);

        assert_eq!(cands[0], vec![start, Point::new(50.0, 0.0), end]);
        assert_eq!(cands[1], vec![start, Point::new(0.0, 80.0), end]);
        assert_eq!(
            cands[2],
            vec![start, Point::new(0.0, 40.0), Point::new(50.0, 40.0), end]
        );
        assert_eq!(
            cands[3],
            vec![start, Point::new(25.0, 0.0), Point::new(25.0, 80.0), end]
        );
    }

    #[test]
    fn test_select_prefers_first_clear() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(50.0, 80.0);
        let cands = candidates(start, end);

        let path = select(start, end, &cands, &ObstacleSet::default(), &grid());
        assert_eq!(path, cands[0]);
    }

    #[test]
    fn test_select_skips_blocked_candidate() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(50.0, 80.0);
        let cands = candidates(start, end);

        // Block the elbow of the horizontal-then-vertical candidate
        let mut obstacles = ObstacleSet::default();
        obstacles.block(grid().cell(Point::new(50.0, 0.0)));

        let path = select(start, end, &cands, &obstacles, &grid());
        assert_eq!(path, vec![start, Point::new(0.0, 80.0), end]);
    }

    #[test]
    fn test_select_falls_back_when_all_blocked() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(50.0, 80.0);
        let cands = candidates(start, end);

        // Blocking every candidate's elbow cells rejects all four
        let mut obstacles = ObstacleSet::default();
        for elbow in [
            Point::new(50.0, 0.0),
            Point::new(0.0, 80.0),
            Point::new(0.0, 40.0),
            Point::new(50.0, 40.0),
            Point::new(25.0, 0.0),
            Point::new(25.0, 80.0),
        ] {
            obstacles.block(grid().cell(elbow));
        }

        let path = select(start, end, &cands, &obstacles, &grid());
        assert_eq!(path, fallback(start, end));
        assert_eq!(
            path,
            vec![start, Point::new(0.0, 40.0), Point::new(50.0, 40.0), end]
        );
    }

    #[test]
    fn test_select_never_returns_empty() {
        let start = Point::new(3.0, 4.0);
        let end = Point::new(90.0, 70.0);
        let path = select(start, end, &[], &ObstacleSet::default(), &grid());
        assert!(path.len() >= 2);
        assert_eq!(path[0], start);
        assert_eq!(path[path.len() - 1], end);
    }

    #[test]
    fn test_route_aligned_ignores_obstacles() {
        let start = Point::new(10.0, 10.0);
        let end = Point::new(110.0, 10.0);

        let mut obstacles = ObstacleSet::default();
        for x in 0..=11 {
            obstacles.block(GridCell::new(x, 1));
        }

        let path = route(&grid(), &obstacles, start, end);
        assert_eq!(path, vec![start, end]);
    }

    #[test]
    fn test_endpoint_cells_exempt_from_blocking() {
        let start = Point::new(10.0, 10.0);
        let end = Point::new(60.0, 90.0);

        // The cells under both ports are blocked, as they would be by the
        // ports' own components; the elbow is clear, so the first candidate
        // still wins.
        let mut obstacles = ObstacleSet::default();
        obstacles.block(grid().cell(start));
        obstacles.block(grid().cell(end));

        let path = route(&grid(), &obstacles, start, end);
        assert_eq!(path, vec![start, Point::new(60.0, 10.0), end]);
    }

    #[test]
    fn test_route_unaligned_first_candidate() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(50.0, 80.0);
        let path = route(&grid(), &ObstacleSet::default(), start, end);
        assert_eq!(path, vec![start, Point::new(50.0, 0.0), end]);
    }
}
