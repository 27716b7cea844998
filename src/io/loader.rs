use std::io::BufRead;
use std::str::FromStr;

use log::info;

use crate::graph::Graph;
use crate::{Error, Result};

/// Loads a node feed into `graph`: one record per line with the node id in
/// the first comma-separated field, any further fields ignored. Blank lines
/// are skipped. Returns the number of nodes inserted; a feed without any
/// record is rejected.
pub fn read_nodes<R: BufRead>(graph: &mut Graph, reader: R) -> Result<usize> {
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let field = match record.split_once(',') {
            Some((first, _)) => first,
            None => record,
        };
        let id = parse_field(field, index, "node id")?;
        graph.insert_node(id);
        count += 1;
    }

    if count == 0 {
        return Err(Error::EmptyNodeList);
    }
    info!("loaded {} nodes", count);
    Ok(count)
}

/// Loads an edge feed into `graph`: `source,dest,<capacity>,mindelay` per
/// line. The third field is carried by the feed but plays no part in
/// routing, so it is skipped unparsed. Both endpoints must already be
/// loaded and delays must not be negative. Returns the number of edges
/// inserted.
pub fn read_edges<R: BufRead>(graph: &mut Graph, reader: R) -> Result<usize> {
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() < 4 {
            return Err(Error::MalformedRecord(
                index + 1,
                format!("expected 4 fields, got {}", fields.len()),
            ));
        }
        let source = parse_field(fields[0], index, "source id")?;
        let dest = parse_field(fields[1], index, "destination id")?;
        let delay = parse_field(fields[3], index, "delay")?;
        graph.insert_edge(source, dest, delay)?;
        count += 1;
    }

    info!("loaded {} edges", count);
    Ok(count)
}

fn parse_field<T: FromStr>(field: &str, index: usize, what: &str) -> Result<T> {
    field
        .trim()
        .parse()
        .map_err(|_| Error::MalformedRecord(index + 1, format!("bad {}: {:?}", what, field)))
}
