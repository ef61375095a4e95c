//! Command-line options and command execution for the `mazer` binary.

use std::error::Error;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mazer_core::{Cell, Grid, Overlay, render};
use mazer_gen::GenParams;
use mazer_paths::{Algorithm, SearchResult};

use mazer_api::{GenerateRequest, GenerateResponse, MazeService, SolveRequest};

/// Generate random grid mazes and solve them with BFS, DFS and A*.
#[derive(Parser, Debug)]
#[command(name = "mazer", about, long_about = None, version)]
pub struct Cli {
    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a maze and print it
    Generate {
        #[command(flatten)]
        params: GenArgs,

        /// Print the generate response as JSON instead of a drawing
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Solve a maze given as a JSON solve request
    Solve {
        /// Algorithm to use, overriding the one in the request
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// File holding the request; stdin when absent
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the search result as JSON instead of a drawing
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate a maze, then solve it
    Run {
        #[command(flatten)]
        params: GenArgs,

        /// Algorithm to use, or "all" to compare every algorithm
        #[arg(short, long, default_value = "all")]
        algorithm: String,
    },
}

/// Generation parameters shared by `generate` and `run`.
#[derive(Args, Debug, Clone, Copy)]
pub struct GenArgs {
    /// Number of rows
    #[arg(short, long, default_value_t = GenParams::default().rows)]
    pub rows: i32,

    /// Number of columns
    #[arg(short, long, default_value_t = GenParams::default().cols)]
    pub cols: i32,

    /// Probability that a cell is a wall, in [0.0, 1.0)
    #[arg(short = 'p', long, default_value_t = GenParams::default().wall_probability)]
    pub wall_probability: f64,

    /// Seed for a reproducible maze
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,
}

impl From<GenArgs> for GenerateRequest {
    fn from(a: GenArgs) -> Self {
        Self {
            rows: Some(a.rows),
            cols: Some(a.cols),
            wall_probability: Some(a.wall_probability),
            seed: a.seed,
        }
    }
}

/// Execute `cli`, reading a solve request from `stdin` when needed and
/// writing everything to `out`.
pub fn run(cli: Cli, stdin: impl Read, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let service = MazeService::default();

    match cli.command {
        Command::Generate { params, json } => {
            let resp = service.generate(&params.into())?;
            if json {
                writeln!(out, "{}", serde_json::to_string(&resp)?)?;
            } else {
                let GenerateResponse { grid, start, end } = &resp;
                write!(out, "{}", render(grid, &Overlay::endpoints(*start, *end)))?;
            }
        }
        Command::Solve {
            algorithm,
            input,
            json,
        } => {
            let body = match input {
                Some(path) => std::fs::read_to_string(path)?,
                None => read_all(stdin)?,
            };
            let mut req: SolveRequest = serde_json::from_str(&body)?;
            if let Some(a) = algorithm {
                req.algorithm = Some(a.name().to_string());
            }
            let result = service.solve(&req)?;
            if json {
                writeln!(out, "{}", serde_json::to_string(&result)?)?;
            } else if let (Some(grid), Some(start), Some(end)) = (&req.grid, req.start, req.end) {
                let algo = req
                    .algorithm
                    .as_deref()
                    .map(Algorithm::from_name)
                    .unwrap_or_default();
                draw_result(out, algo, grid, start, end, &result)?;
            }
        }
        Command::Run { params, algorithm } => {
            let algorithms = parse_algorithms(&algorithm)?;
            let GenerateResponse { grid, start, end } = service.generate(&params.into())?;
            for algo in algorithms {
                let result = algo.solve(&grid, start, end)?;
                writeln!(out, "== {algo} ==")?;
                draw_result(out, algo, &grid, start, end, &result)?;
            }
        }
    }
    Ok(())
}

fn read_all(mut r: impl Read) -> std::io::Result<String> {
    let mut s = String::new();
    r.read_to_string(&mut s)?;
    Ok(s)
}

/// `"all"` or a single strict algorithm name.
fn parse_algorithms(name: &str) -> Result<Vec<Algorithm>, Box<dyn Error>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    Ok(vec![name.parse()?])
}

fn draw_result(
    out: &mut impl Write,
    algo: Algorithm,
    grid: &Grid,
    start: Cell,
    end: Cell,
    result: &SearchResult,
) -> std::io::Result<()> {
    let overlay = Overlay::endpoints(start, end)
        .with_path(&result.path)
        .with_visited(&result.visited_order);
    write!(out, "{}", render(grid, &overlay))?;
    writeln!(
        out,
        "{algo}: found={} steps={} visited={}",
        result.found,
        result.steps,
        result.visited_order.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(args: &[&str], stdin: &str) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(cli, stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["mazer", "generate"]).unwrap();
        let Command::Generate { params, json } = cli.command else {
            panic!("expected generate");
        };
        assert!(!json);
        assert!(!cli.debug);
        assert_eq!((params.rows, params.cols, params.wall_probability), (20, 20, 0.3));
        assert_eq!(params.seed, None);
    }

    #[test]
    fn parse_negative_seed() {
        let cli = Cli::try_parse_from(["mazer", "generate", "-s", "-5"]).unwrap();
        let Command::Generate { params, .. } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(params.seed, Some(-5));
    }

    #[test]
    fn parse_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["mazer", "solve", "-a", "dijkstra"]).is_err());
        assert!(Cli::try_parse_from(["mazer", "solve", "-a", "A*"]).is_ok());
    }

    #[test]
    fn generate_draws_open_maze() {
        let out = exec(&["mazer", "generate", "-r", "2", "-c", "3", "-p", "0", "-s", "1"], "");
        assert_eq!(out, "S..\n..E\n");
    }

    #[test]
    fn generate_json() {
        let out = exec(
            &["mazer", "generate", "-r", "2", "-c", "2", "-p", "0", "--json"],
            "",
        );
        assert_eq!(out.trim(), r#"{"grid":[[0,0],[0,0]],"start":[0,0],"end":[1,1]}"#);
    }

    #[test]
    fn solve_from_stdin() {
        let req = r#"{"grid": [[0,0,0],[0,0,0],[0,0,0]], "start": [0,0], "end": [2,2]}"#;
        let out = exec(&["mazer", "solve"], req);
        assert_eq!(out, "Soo\n*oo\n**E\nbfs: found=true steps=4 visited=9\n");
    }

    #[test]
    fn solve_override_json() {
        let req = r#"{"grid": [[0,1],[1,0]], "start": [0,0], "end": [1,1], "algorithm": "bfs"}"#;
        let out = exec(&["mazer", "solve", "-a", "dfs", "--json"], req);
        assert_eq!(
            out.trim(),
            r#"{"found":false,"steps":0,"path":[],"visited_order":[[0,0]]}"#
        );
    }

    #[test]
    fn run_compares_all() {
        let out = exec(&["mazer", "run", "-r", "3", "-c", "3", "-p", "0"], "");
        assert!(out.contains("== bfs =="));
        assert!(out.contains("== dfs =="));
        assert!(out.contains("== astar =="));
        assert!(out.contains("astar: found=true steps=4 visited=9"));
    }

    #[test]
    fn run_rejects_unknown_algorithm() {
        let cli = Cli::try_parse_from(["mazer", "run", "-a", "nope"]).unwrap();
        assert!(run(cli, std::io::empty(), &mut Vec::<u8>::new()).is_err());
    }
}
