use crate::cells::{GridCoordinate, WallSide};
use crate::config::DEFAULT_CELL_WIDTH;
use crate::grid::Grid;
use std::fmt;

const CORNER: char = '+';
const WALL_LR: char = '-';
const WALL_UD: char = '|';
const OPEN: char = ' ';

pub trait CellDisplay {
    /// Render the contents of a grid cell as text.
    /// Longer strings are cut down to the cell width, shorter ones centred.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::new()
    }
}

/// Blank cells apart from a `$` on the goal.
#[derive(Debug, Copy, Clone)]
pub struct GoalDisplay {
    goal: GridCoordinate,
}
impl GoalDisplay {
    pub fn new(goal: GridCoordinate) -> GoalDisplay {
        GoalDisplay { goal }
    }
}
impl CellDisplay for GoalDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.goal {
            String::from("$")
        } else {
            String::new()
        }
    }
}

/// `@` where the player stands, `$` on the goal.
#[derive(Debug, Copy, Clone)]
pub struct PlayerDisplay {
    player: GridCoordinate,
    goal: GoalDisplay,
}
impl PlayerDisplay {
    pub fn new(player: GridCoordinate, goal: GridCoordinate) -> PlayerDisplay {
        PlayerDisplay {
            player,
            goal: GoalDisplay::new(goal),
        }
    }
}
impl CellDisplay for PlayerDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.player {
            String::from("@")
        } else {
            self.goal.render_cell_body(coord)
        }
    }
}

/// Draw the maze as text. The row index runs left to right and the column index top to bottom,
/// so each cell's top, right, bottom and left walls are drawn where their names say.
pub fn render_grid(grid: &Grid, display: &dyn CellDisplay, cell_width: usize) -> String {
    let cell_width = cell_width.max(1);
    let (rows_count, columns_count) = (grid.rows().0, grid.columns().0);

    let horizontal_boundary = |col: usize, side: WallSide| -> String {
        let mut line = String::new();
        for row in 0..rows_count {
            line.push(CORNER);
            let glyph = if grid[GridCoordinate::new(row, col)].has_wall(side) {
                WALL_LR
            } else {
                OPEN
            };
            line.extend(std::iter::repeat(glyph).take(cell_width));
        }
        line.push(CORNER);
        line.push('\n');
        line
    };

    let mut output = String::new();
    for col in 0..columns_count {
        // Each cell row draws its own northern boundary, the southern boundary of the previous
        // line of cells is the same set of walls.
        output.push_str(&horizontal_boundary(col, WallSide::Top));

        let mut middle_section = String::new();
        for row in 0..rows_count {
            let coord = GridCoordinate::new(row, col);
            let cell = &grid[coord];
            middle_section.push(if cell.has_wall(WallSide::Left) { WALL_UD } else { OPEN });
            middle_section.push_str(&fit_body(&display.render_cell_body(coord), cell_width));
        }
        let east_cell = &grid[GridCoordinate::new(rows_count - 1, col)];
        middle_section.push(if east_cell.has_wall(WallSide::Right) { WALL_UD } else { OPEN });
        middle_section.push('\n');
        output.push_str(&middle_section);
    }
    output.push_str(&horizontal_boundary(columns_count - 1, WallSide::Bottom));

    output
}

fn fit_body(body: &str, cell_width: usize) -> String {
    let clipped = body.chars().take(cell_width).collect::<String>();
    format!("{:^width$}", clipped, width = cell_width)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let goal_display = GoalDisplay::new(self.goal());
        write!(f, "{}", render_grid(self, &goal_display, DEFAULT_CELL_WIDTH))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    struct Blank;
    impl CellDisplay for Blank {}

    fn grid(cols: usize, rows: usize) -> Grid {
        Grid::new(ColumnsCount(cols), RowsCount(rows)).expect("valid grid dimensions")
    }

    fn gc(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate::new(row, col)
    }

    #[test]
    fn enclosed_single_cell() {
        let g = grid(1, 1);
        assert_eq!(render_grid(&g, &Blank, 3), "+---+\n|   |\n+---+\n");
        assert_eq!(format!("{}", g), "+---+\n| $ |\n+---+\n");
    }

    #[test]
    fn rows_run_across_columns_run_down() {
        // 1 column, 2 rows: the two cells sit side by side
        let mut g = grid(1, 2);
        g.carve(gc(0, 0), gc(1, 0)).unwrap();
        assert_eq!(render_grid(&g, &Blank, 1), "+-+-+\n|   |\n+-+-+\n");

        // 2 columns, 1 row: the two cells are stacked
        let mut g = grid(2, 1);
        g.carve(gc(0, 0), gc(0, 1)).unwrap();
        assert_eq!(render_grid(&g, &Blank, 1), "+-+\n| |\n+ +\n| |\n+-+\n");
    }

    #[test]
    fn player_and_goal_markers() {
        let g = grid(2, 2);
        let display = PlayerDisplay::new(gc(0, 0), g.goal());
        let text = render_grid(&g, &display, 3);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "| @ |   |");
        assert_eq!(lines[3], "|   | $ |");
    }

    #[test]
    fn player_on_goal_shows_player() {
        let display = PlayerDisplay::new(gc(1, 1), gc(1, 1));
        assert_eq!(display.render_cell_body(gc(1, 1)), "@");
    }

    #[test]
    fn long_bodies_are_clipped() {
        assert_eq!(fit_body("abcdef", 3), "abc");
        assert_eq!(fit_body("x", 5), "  x  ");
        assert_eq!(fit_body("", 2), "  ");
    }
}
