use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::graph::{DataPoint, DataSequence, GraphDocument, DEFAULT_COLOR, DEFAULT_KIND};

/// Read a graph document from a JSON file.
///
/// Fails with [`Error::Io`] when the file is missing, [`Error::Json`] on
/// malformed JSON, [`Error::KeyNotFound`] when a required key (`graph`,
/// `title`, `datasequences`, `datapoints`, point `title`/`value`) is absent,
/// and [`Error::Format`] when a value has the wrong JSON type. The plot type
/// and series colors are defaulted when omitted.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<GraphDocument> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    let reader = BufReader::new(file);

    let root: Value = serde_json::from_reader(reader).map_err(Error::Json)?;

    let graph = root
        .get("graph")
        .ok_or_else(|| Error::KeyNotFound("graph".to_string()))?
        .as_object()
        .ok_or_else(|| Error::Format("'graph' must be an object".to_string()))?;

    let title = require_string(graph, "title")?;

    // "type" defaults to bar; kept as a string so the renderer decides support
    let kind = match graph.get("type") {
        Some(value) => value
            .as_str()
            .ok_or_else(|| Error::Format("'type' must be a string".to_string()))?
            .to_string(),
        None => DEFAULT_KIND.to_string(),
    };

    let entries = graph
        .get("datasequences")
        .ok_or_else(|| Error::KeyNotFound("datasequences".to_string()))?
        .as_array()
        .ok_or_else(|| Error::Format("'datasequences' must be an array".to_string()))?;

    let mut sequences = Vec::with_capacity(entries.len());
    for entry in entries {
        sequences.push(read_sequence(entry)?);
    }

    let doc = GraphDocument {
        title,
        kind,
        sequences,
    };
    log::info!(
        "loaded graph '{}' ({} series, type '{}')",
        doc.title,
        doc.sequences.len(),
        doc.kind
    );
    Ok(doc)
}

// 1つのdatasequenceエントリを読み込む
fn read_sequence(value: &Value) -> Result<DataSequence> {
    let map = value
        .as_object()
        .ok_or_else(|| Error::Format("each datasequence must be an object".to_string()))?;

    let title = require_string(map, "title")?;

    let color = match map.get("color") {
        Some(value) => value
            .as_str()
            .ok_or_else(|| Error::Format("'color' must be a string".to_string()))?
            .to_string(),
        None => DEFAULT_COLOR.to_string(),
    };

    let entries = map
        .get("datapoints")
        .ok_or_else(|| Error::KeyNotFound("datapoints".to_string()))?
        .as_array()
        .ok_or_else(|| Error::Format("'datapoints' must be an array".to_string()))?;

    let mut points = Vec::with_capacity(entries.len());
    for entry in entries {
        points.push(read_point(entry)?);
    }

    Ok(DataSequence {
        title,
        color,
        points,
    })
}

fn read_point(value: &Value) -> Result<DataPoint> {
    let map = value
        .as_object()
        .ok_or_else(|| Error::Format("each datapoint must be an object".to_string()))?;

    let label = require_string(map, "title")?;

    let number = map
        .get("value")
        .ok_or_else(|| Error::KeyNotFound("value".to_string()))?
        .as_f64()
        .ok_or_else(|| Error::Format("'value' must be a number".to_string()))?;

    Ok(DataPoint {
        label,
        value: number,
    })
}

fn require_string(map: &Map<String, Value>, key: &str) -> Result<String> {
    map.get(key)
        .ok_or_else(|| Error::KeyNotFound(key.to_string()))?
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| Error::Format(format!("'{}' must be a string", key)))
}

/// Write a graph document back to its JSON wire format (pretty-printed).
pub fn write_graph<P: AsRef<Path>>(doc: &GraphDocument, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    let writer = BufWriter::new(file);

    let root = json!({ "graph": doc });
    serde_json::to_writer_pretty(writer, &root).map_err(Error::Json)?;

    Ok(())
}
