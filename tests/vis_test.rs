use std::fs;

use tempfile::tempdir;

use graphboard::error::Error;
use graphboard::graph::{DataPoint, DataSequence, GraphDocument};
use graphboard::table::{GraphTable, MergePolicy};
use graphboard::vis::{render_png, resolve_color, PlotKind, PlotSettings};

fn seq(title: &str, color: &str, points: &[(&str, f64)]) -> DataSequence {
    DataSequence {
        title: title.to_string(),
        color: color.to_string(),
        points: points
            .iter()
            .map(|(label, value)| DataPoint {
                label: label.to_string(),
                value: *value,
            })
            .collect(),
    }
}

fn sales_doc(kind: &str) -> GraphDocument {
    GraphDocument {
        title: "Soft Drink Sales".to_string(),
        kind: kind.to_string(),
        sequences: vec![
            seq("X-Cola", "red", &[("2008", 22.0), ("2009", 24.0)]),
            seq("Y-Cola", "green", &[("2008", 18.4), ("2009", 20.1)]),
        ],
    }
}

// テストでは画像ビューアを起動しない
fn test_settings() -> PlotSettings {
    PlotSettings {
        show: false,
        ..PlotSettings::default()
    }
}

#[test]
fn test_render_bar_chart() {
    let doc = sales_doc("bar");
    let table = GraphTable::from_document(&doc, MergePolicy::First).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("bar.png");
    render_png(&doc, &table, &test_settings(), &path).unwrap();

    // 画像が書き出されている
    assert!(path.exists());
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_render_line_chart() {
    let doc = sales_doc("line");
    let table = GraphTable::from_document(&doc, MergePolicy::First).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("line.png");
    render_png(&doc, &table, &test_settings(), &path).unwrap();

    assert!(path.exists());
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_unsupported_plot_type() {
    let doc = sales_doc("scatter");
    let table = GraphTable::from_document(&doc, MergePolicy::First).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("scatter.png");
    let err = render_png(&doc, &table, &test_settings(), &path).unwrap_err();

    assert!(matches!(err, Error::UnsupportedPlotType(ref kind) if kind == "scatter"));
    // 失敗時には画像を書き出さない
    assert!(!path.exists());
}

#[test]
fn test_unknown_color_fails() {
    let doc = GraphDocument {
        title: "t".to_string(),
        kind: "bar".to_string(),
        sequences: vec![seq("a", "no-such-color", &[("x", 1.0)])],
    };
    let table = GraphTable::from_document(&doc, MergePolicy::First).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("bad_color.png");
    let err = render_png(&doc, &table, &test_settings(), &path).unwrap_err();

    assert!(matches!(err, Error::InvalidColor(ref name) if name == "no-such-color"));
}

#[test]
fn test_empty_document_fails() {
    let doc = GraphDocument {
        title: "t".to_string(),
        kind: "bar".to_string(),
        sequences: vec![],
    };
    let table = GraphTable::from_document(&doc, MergePolicy::First).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.png");
    let err = render_png(&doc, &table, &test_settings(), &path).unwrap_err();

    assert!(matches!(err, Error::Empty(_)));
}

#[test]
fn test_plot_kind_parsing() {
    assert_eq!(PlotKind::from_str("bar"), Some(PlotKind::Bar));
    assert_eq!(PlotKind::from_str("Line"), Some(PlotKind::Line));
    assert_eq!(PlotKind::from_str("scatter"), None);
    assert_eq!(PlotKind::Bar.name(), "bar");
    assert_eq!(PlotKind::Line.name(), "line");
}

#[test]
fn test_resolve_colors() {
    use plotters::style::RGBColor;

    // 色名は大文字小文字を区別しない
    assert_eq!(resolve_color("blue").unwrap(), RGBColor(0, 0, 255));
    assert_eq!(resolve_color("yellowGreen").unwrap(), RGBColor(154, 205, 50));

    // 16進数形式
    assert_eq!(resolve_color("#ff8000").unwrap(), RGBColor(255, 128, 0));
    assert_eq!(resolve_color("#f80").unwrap(), RGBColor(255, 136, 0));

    assert!(matches!(
        resolve_color("not-a-color"),
        Err(Error::InvalidColor(_))
    ));
    assert!(matches!(resolve_color("#12"), Err(Error::InvalidColor(_))));
}

#[test]
fn test_render_graph_file_end_to_end() {
    let json = r#"{
        "graph": {
            "title": "Soft Drink Sales",
            "datasequences": [
                { "title": "X-Cola", "color": "red",
                  "datapoints": [ {"title": "2008", "value": 22.0},
                                  {"title": "2009", "value": 24.0} ] },
                { "title": "Y-Cola",
                  "datapoints": [ {"title": "2008", "value": 18.4},
                                  {"title": "2009", "value": 20.1} ] }
            ]
        }
    }"#;

    let dir = tempdir().unwrap();
    let input = dir.path().join("sales.json");
    let output = dir.path().join("sales.png");
    fs::write(&input, json).unwrap();

    graphboard::render_graph_file(&input, &output, &test_settings()).unwrap();

    assert!(output.exists());
    assert!(fs::metadata(&output).unwrap().len() > 0);
}
