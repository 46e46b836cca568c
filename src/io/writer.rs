use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::route::Route;

/// Route output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space separated `x,y` tokens, no trailing separator
    #[default]
    Text,
    /// `{"route": [[x, y], ...], "length": ...}`
    Json,
}

#[derive(Serialize)]
struct RouteDocument {
    route: Vec<[i64; 2]>,
    length: f64,
}

/// Write a route to an output stream
pub fn write_route<W: Write>(mut writer: W, route: &Route, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            let tokens: Vec<String> = route.points().iter().map(|p| p.to_string()).collect();
            writer.write_all(tokens.join(" ").as_bytes())?;
        }
        OutputFormat::Json => {
            let document = RouteDocument {
                route: route.points().iter().map(|p| [p.x, p.y]).collect(),
                length: route.length(),
            };
            serde_json::to_writer(&mut writer, &document)?;
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn route() -> Route {
        Route::new(vec![Point::new(1, 2), Point::new(1, 3), Point::new(5, 2)])
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        write_route(&mut out, &route(), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1,2 1,3 5,2");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        let route = Route::new(vec![Point::new(0, 0), Point::new(3, 4)]);
        write_route(&mut out, &route, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["route"], serde_json::json!([[0, 0], [3, 4]]));
        assert_eq!(value["length"], 5.0);
    }
}
