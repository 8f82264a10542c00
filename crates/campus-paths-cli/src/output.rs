use clap::ValueEnum;

use campus_paths_lib::{BuildingsResponse, PathResponse};

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON matching the HTTP service payloads.
    Json,
}

impl OutputFormat {
    pub fn render_buildings(self, response: &BuildingsResponse) -> serde_json::Result<String> {
        match self {
            OutputFormat::Text => Ok(response.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(response).map(with_newline),
        }
    }

    /// Render a route. Text output for a missing route is a single notice
    /// line; JSON output keeps the sentinel payload.
    pub fn render_path(
        self,
        response: &PathResponse,
        from: &str,
        to: &str,
    ) -> serde_json::Result<String> {
        match self {
            OutputFormat::Text if response.is_no_path() => {
                Ok(format!("No route found between {from} and {to}.\n"))
            }
            OutputFormat::Text => Ok(response.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(response).map(with_newline),
        }
    }
}

fn with_newline(mut rendered: String) -> String {
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_paths_lib::{Building, CampusMap, PathRecord};

    fn two_building_map() -> CampusMap {
        let building = |short: &str, x: f64| Building {
            short_name: short.to_string(),
            long_name: format!("{short} Hall"),
            x,
            y: 0.0,
        };
        CampusMap::from_records(
            vec![building("AAA", 0.0), building("BBB", 30.0)],
            vec![PathRecord {
                x1: 0.0,
                y1: 0.0,
                x2: 30.0,
                y2: 0.0,
                distance: 30.0,
            }],
        )
        .unwrap()
    }

    #[test]
    fn text_route_lists_directions() {
        let map = two_building_map();
        let path = map.find_shortest_path("AAA", "BBB").unwrap();
        let response = PathResponse::from_path("AAA", "BBB", path.as_ref());
        let text = OutputFormat::Text.render_path(&response, "AAA", "BBB").unwrap();
        assert_eq!(
            text,
            "Path from AAA to BBB\n\tWalk 30 feet E\nTotal distance: 30 feet\n"
        );
    }

    #[test]
    fn text_route_reports_missing_route() {
        let map = two_building_map();
        let path = map.find_shortest_path("BBB", "AAA").unwrap();
        let response = PathResponse::from_path("BBB", "AAA", path.as_ref());
        let text = OutputFormat::Text.render_path(&response, "BBB", "AAA").unwrap();
        assert_eq!(text, "No route found between BBB and AAA.\n");
    }

    #[test]
    fn text_route_to_self_on_sentinel_coordinate() {
        let corner = Building {
            short_name: "ZZZ".to_string(),
            long_name: "Corner Hall".to_string(),
            x: -1.0,
            y: -1.0,
        };
        let map = CampusMap::from_records(vec![corner], Vec::new()).unwrap();
        let path = map.find_shortest_path("ZZZ", "ZZZ").unwrap();
        let response = PathResponse::from_path("ZZZ", "ZZZ", path.as_ref());
        let text = OutputFormat::Text.render_path(&response, "ZZZ", "ZZZ").unwrap();
        assert_eq!(text, "Path from ZZZ to ZZZ\nTotal distance: 0 feet\n");
    }

    #[test]
    fn json_route_keeps_sentinel() {
        let response = PathResponse::from_path("BBB", "AAA", None);
        let json = OutputFormat::Json.render_path(&response, "BBB", "AAA").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["start"]["x"], -1.0);
        assert_eq!(value["path"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn buildings_render_in_both_formats() {
        let response = BuildingsResponse::from_map(&two_building_map());
        let text = OutputFormat::Text.render_buildings(&response).unwrap();
        assert_eq!(text, "AAA: AAA Hall\nBBB: BBB Hall\n");

        let json = OutputFormat::Json.render_buildings(&response).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["names"]["BBB"], "BBB Hall");
        assert_eq!(value["buildings"][0]["shortName"], "AAA");
    }
}
