use std::env;
use std::error::Error as StdError;
use std::path::PathBuf;
use std::process;

use graphboard::vis::PlotSettings;

// 引数省略時は作業ディレクトリの既定パスを使う
const DEFAULT_INPUT: &str = "json_example.json";
const DEFAULT_OUTPUT: &str = "example_output.png";

fn main() {
    let mut args = env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));

    let settings = PlotSettings::default();
    if let Err(err) = graphboard::render_graph_file(&input, &output, &settings) {
        eprintln!("graphboard: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
