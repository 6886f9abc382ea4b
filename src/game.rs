use crate::cells::{GridCoordinate, WallSide};
use crate::config::MazeConfig;
use crate::errors::*;
use crate::generators::{self, NeighbourSelector, RngSelector};
use crate::grid::Grid;
use crate::grid_displays::{self, PlayerDisplay};

use log::{debug, info};
use rand::rngs::OsRng;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveOutcome {
    /// A wall or the edge of the grid is in the way.
    Blocked,
    Moved(GridCoordinate),
    /// The goal was reached and a fresh maze has replaced the old one.
    Won { mazes_completed: usize },
}

/// One player walking through a sequence of mazes.
#[derive(Debug)]
pub struct Game<S: NeighbourSelector = RngSelector<OsRng>> {
    config: MazeConfig,
    grid: Grid,
    player: GridCoordinate,
    mazes_completed: usize,
    selector: S,
}

impl Game {
    pub fn new(config: MazeConfig) -> Result<Game> {
        Game::with_selector(config, generators::os_selector())
    }
}

impl<S: NeighbourSelector> Game<S> {
    pub fn with_selector(config: MazeConfig, mut selector: S) -> Result<Game<S>> {
        let grid = generators::generate_maze_with(config.columns(), config.rows(), &mut selector)
            .chain_err(|| "failed to generate the first maze")?;
        let player = grid.start();
        Ok(Game {
            config,
            grid,
            player,
            mazes_completed: 0,
            selector,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> GridCoordinate {
        self.player
    }

    #[inline]
    pub fn mazes_completed(&self) -> usize {
        self.mazes_completed
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Try to move the player one cell across `side`.
    pub fn step(&mut self, side: WallSide) -> Result<MoveOutcome> {
        let destination = match self.grid.move_from(self.player, side) {
            Some(destination) => destination,
            None => return Ok(MoveOutcome::Blocked),
        };
        debug!("player moved {:?} -> {:?}", self.player, destination);
        self.player = destination;

        if self.grid.is_goal(destination) {
            self.mazes_completed += 1;
            info!("maze {} completed, generating the next one", self.mazes_completed);
            self.regenerate()?;
            Ok(MoveOutcome::Won { mazes_completed: self.mazes_completed })
        } else {
            Ok(MoveOutcome::Moved(destination))
        }
    }

    /// Replace the current maze with a new one and put the player back at the start.
    pub fn regenerate(&mut self) -> Result<()> {
        self.grid = generators::generate_maze_with(self.config.columns(),
                                                   self.config.rows(),
                                                   &mut self.selector)
            .chain_err(|| "failed to generate the next maze")?;
        self.player = self.grid.start();
        Ok(())
    }

    pub fn render(&self) -> String {
        let display = PlayerDisplay::new(self.player, self.grid.goal());
        grid_displays::render_grid(&self.grid, &display, self.config.cell_width())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Always takes the first candidate neighbour.
    struct FirstChoice;
    impl NeighbourSelector for FirstChoice {
        fn select(&mut self, _: usize) -> usize {
            0
        }
    }

    fn config(cols: usize, rows: usize) -> MazeConfig {
        MazeConfig::new(ColumnsCount(cols), RowsCount(rows)).unwrap()
    }

    #[test]
    fn starts_at_origin() {
        let game = Game::new(MazeConfig::default()).unwrap();
        assert_eq!(game.player(), GridCoordinate::new(0, 0));
        assert_eq!(game.mazes_completed(), 0);
        assert_eq!(game.grid().size(), 100);
    }

    #[test]
    fn walls_block_movement() {
        // A 1 column, 3 row corridor: only moving right is ever open.
        let mut game = Game::with_selector(config(1, 3), FirstChoice).unwrap();
        assert_eq!(game.step(WallSide::Top).unwrap(), MoveOutcome::Blocked);
        assert_eq!(game.step(WallSide::Left).unwrap(), MoveOutcome::Blocked);
        assert_eq!(game.step(WallSide::Bottom).unwrap(), MoveOutcome::Blocked);
        assert_eq!(game.player(), GridCoordinate::new(0, 0));
    }

    #[test]
    fn reaching_the_goal_regenerates() {
        let mut game = Game::with_selector(config(1, 3), FirstChoice).unwrap();
        assert_eq!(game.step(WallSide::Right).unwrap(),
                   MoveOutcome::Moved(GridCoordinate::new(1, 0)));
        assert_eq!(game.step(WallSide::Left).unwrap(),
                   MoveOutcome::Moved(GridCoordinate::new(0, 0)));
        assert_eq!(game.step(WallSide::Right).unwrap(),
                   MoveOutcome::Moved(GridCoordinate::new(1, 0)));
        assert_eq!(game.step(WallSide::Right).unwrap(),
                   MoveOutcome::Won { mazes_completed: 1 });
        assert_eq!(game.player(), GridCoordinate::new(0, 0));
        assert!(game.grid().iter().all(|cell| cell.is_visited()));
    }

    #[test]
    fn can_always_walk_to_the_goal() {
        // Follow the left hand wall; in a perfect maze that reaches every cell.
        let mut game = Game::with_selector(config(6, 4),
                                           RngSelector(StdRng::seed_from_u64(42)))
            .unwrap();
        let turn_left = |side: WallSide| match side {
            WallSide::Top => WallSide::Left,
            WallSide::Left => WallSide::Bottom,
            WallSide::Bottom => WallSide::Right,
            WallSide::Right => WallSide::Top,
        };
        let mut heading = WallSide::Right;
        let mut won = false;
        for _ in 0..4 * 6 * 4 * 4 {
            heading = turn_left(heading);
            let mut outcome = game.step(heading).unwrap();
            while outcome == MoveOutcome::Blocked {
                heading = turn_left(turn_left(turn_left(heading)));
                outcome = game.step(heading).unwrap();
            }
            if let MoveOutcome::Won { mazes_completed } = outcome {
                assert_eq!(mazes_completed, 1);
                won = true;
                break;
            }
        }
        assert!(won);
    }

    #[test]
    fn render_shows_the_player() {
        let game = Game::with_selector(config(2, 2), FirstChoice).unwrap();
        let text = game.render();
        assert!(text.contains('@'));
        assert!(text.contains('$'));
        assert_eq!(text.lines().count(), 5);
    }
}
