use amazeing::{
    cells::WallSide,
    config::MazeConfig,
    game::{Game, MoveOutcome},
    generators,
    grid::Grid,
    grid_displays::{render_grid, GoalDisplay},
    units::{ColumnsCount, RowsCount},
};
use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    process,
};

const USAGE: &str = "A-maze-ing

Usage:
    maze_driver -h | --help
    maze_driver render [--columns=<c>] [--rows=<r>] [--cell-width=<w>] [--save-edges=<path>]
    maze_driver play [--columns=<c>] [--rows=<r>] [--cell-width=<w>]

Options:
    -h --help              Show this screen.
    --columns=<c>          Cells along the vertical axis [default: 10].
    --rows=<r>             Cells along the horizontal axis [default: 10].
    --cell-width=<w>       Glyphs used to draw the inside of one cell [default: 3].
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.

Play keys, one or more per line followed by enter:
    w  up    a  left    s  down    d  right    q  quit
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_render: bool,
    cmd_play: bool,
    flag_columns: usize,
    flag_rows: usize,
    flag_cell_width: usize,
    flag_save_edges: String,
}

mod errors {
    #![allow(deprecated)]
    use error_chain::*;
    error_chain! {

        links {
            Maze(::amazeing::errors::Error, ::amazeing::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        eprint!("{}", report(e));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Help, version and usage mistakes print docopt's own message and exit here.
    let args = parse_args(std::env::args()).unwrap_or_else(|e| e.exit());

    let config = MazeConfig::new(ColumnsCount(args.flag_columns), RowsCount(args.flag_rows))?
        .with_cell_width(args.flag_cell_width);

    if args.cmd_render {
        let maze_grid = generators::generate_maze(config.columns(), config.rows())?;
        let goal_display = GoalDisplay::new(maze_grid.goal());
        print!("{}", render_grid(&maze_grid, &goal_display, config.cell_width()));

        if !args.flag_save_edges.is_empty() {
            save_maze_graph(&maze_grid, &args.flag_save_edges)?;
        }
    } else if args.cmd_play {
        play(config)?;
    }

    Ok(())
}

fn parse_args<I, S>(argv: I) -> ::std::result::Result<MazeArgs, docopt::Error>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Docopt::new(USAGE).and_then(|d| d.argv(argv).deserialize())
}

/// The error and each of its causes on their own line.
fn report(e: &Error) -> String {
    let mut text = format!("error: {}\n", e);
    for cause in e.iter().skip(1) {
        text.push_str(&format!("caused by: {}\n", cause));
    }
    text
}

fn play(config: MazeConfig) -> Result<()> {
    let mut game = Game::new(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}> ", game.render())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.chain_err(|| "failed to read a move")?;

        for key in line.chars().filter(|c| !c.is_whitespace()) {
            let side = match key.to_ascii_lowercase() {
                'w' => WallSide::Top,
                'a' => WallSide::Left,
                's' => WallSide::Bottom,
                'd' => WallSide::Right,
                'q' => {
                    info!("quit after {} mazes", game.mazes_completed());
                    return Ok(());
                }
                _ => continue,
            };

            if let MoveOutcome::Won { mazes_completed } = game.step(side)? {
                writeln!(stdout, "Maze {} solved! Here is another.", mazes_completed)?;
            }
        }

        write!(stdout, "{}> ", game.render())?;
        stdout.flush()?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &Grid, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    let vertices_count = maze_grid.size();
    let edges_count = maze_grid.passages_count();
    graph_data.push_str(vertices_count.to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(edges_count.to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze_grid.passages() {
        let index_a = maze_grid
            .grid_coordinate_to_index(src)
            .ok_or("passage leads outside the grid")?;
        let index_b = maze_grid
            .grid_coordinate_to_index(dst)
            .ok_or("passage leads outside the grid")?;
        let src_as_1_based_index = index_a + 1;
        let dst_as_1_based_index = index_b + 1;

        graph_data.push_str(src_as_1_based_index.to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str(dst_as_1_based_index.to_string().as_ref());
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    info!("saved {} passages to {}", edges_count, file_path);
    Ok(())
}
