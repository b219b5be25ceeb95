//! Askama templates for the web frontend.

use askama::Template;

use crate::backend::RouteStops;
use crate::domain::{Route, Stop};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with backend status.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Fare-by-bus-type calculator page.
#[derive(Template)]
#[template(path = "fare_by_type.html")]
pub struct FareByTypeTemplate {
    pub fare_types: &'static [(&'static str, &'static str)],
    pub bus_types: &'static [&'static str],
}

/// Fare-by-route calculator page.
#[derive(Template)]
#[template(path = "fare_by_line.html")]
pub struct FareByLineTemplate {
    pub fare_types: &'static [(&'static str, &'static str)],
}

/// Route stop listing and trip-segment picker page.
#[derive(Template)]
#[template(path = "route_stops.html")]
pub struct RouteStopsTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route type-ahead dropdown fragment.
#[derive(Template)]
#[template(path = "route_list.html")]
pub struct RouteListTemplate {
    pub routes: Vec<RouteView>,
}

/// Stop columns plus the start-stop selection list fragment.
#[derive(Template)]
#[template(path = "stop_list.html")]
pub struct StopListTemplate {
    pub columns: Vec<StopColumnView>,
    pub selection: Vec<SelectionView>,
    pub has_warning: bool,
    pub warning: String,
}

/// Fare calculation result fragment.
#[derive(Template)]
#[template(path = "fare_result.html")]
pub struct FareResultTemplate {
    pub total_fare: String,
}

/// Trip segment result fragment.
#[derive(Template)]
#[template(path = "segment_result.html")]
pub struct SegmentResultTemplate {
    pub segments: u32,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route view model for the dropdown.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub route_name: String,
    pub output_name: String,
}

impl RouteView {
    pub fn from_route(route: &Route) -> Self {
        Self {
            route_name: route.route_name.as_str().to_string(),
            output_name: route.output_name.clone(),
        }
    }
}

/// One stop row in a direction column.
#[derive(Debug, Clone)]
pub struct StopView {
    pub seq: u32,
    pub name: String,
    pub boarding: u32,
    pub alighting: u32,
    pub phantom: bool,
}

impl StopView {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            seq: stop.sequence,
            name: stop.name.clone(),
            boarding: stop.boarding,
            alighting: stop.alighting,
            phantom: stop.is_phantom(),
        }
    }
}

/// One direction column of the stop listing.
#[derive(Debug, Clone)]
pub struct StopColumnView {
    /// Column heading, e.g. "去程"; empty for single-column routes.
    pub heading: String,

    /// Destination name shown under the heading; may be empty.
    pub dest: String,

    pub stops: Vec<StopView>,
}

/// One entry of the start-stop picker, carrying the stable stop key
/// in data attributes for the segment request.
#[derive(Debug, Clone)]
pub struct SelectionView {
    /// Serialized direction half of the stop key ("outbound"/"inbound").
    pub direction: &'static str,
    pub sequence: u32,
    /// "(去) 站名" style label.
    pub label: String,
}

impl StopListTemplate {
    /// Build the fragment view from a converted stop listing.
    ///
    /// Routes with both directions render two columns; routes with a
    /// single populated side render one unlabeled column, matching the
    /// single-column display mode of the product.
    pub fn from_route_stops(stops: &RouteStops) -> Self {
        let mut columns = Vec::new();

        if !stops.outbound.is_empty() && !stops.inbound.is_empty() {
            columns.push(StopColumnView {
                heading: crate::domain::Direction::Outbound.heading().to_string(),
                dest: stops.outbound_dest.clone().unwrap_or_default(),
                stops: stops.outbound.iter().map(StopView::from_stop).collect(),
            });
            columns.push(StopColumnView {
                heading: crate::domain::Direction::Inbound.heading().to_string(),
                dest: stops.inbound_dest.clone().unwrap_or_default(),
                stops: stops.inbound.iter().map(StopView::from_stop).collect(),
            });
        } else {
            let side = if stops.outbound.is_empty() {
                &stops.inbound
            } else {
                &stops.outbound
            };
            columns.push(StopColumnView {
                heading: String::new(),
                dest: String::new(),
                stops: side.iter().map(StopView::from_stop).collect(),
            });
        }

        let selection = stops
            .flattened()
            .iter()
            .map(|stop| SelectionView {
                direction: match stop.direction {
                    crate::domain::Direction::Outbound => "outbound",
                    crate::domain::Direction::Inbound => "inbound",
                },
                sequence: stop.sequence,
                label: format!("({}) {}", stop.direction.label(), stop.name),
            })
            .collect();

        Self {
            columns,
            selection,
            has_warning: stops.warning.is_some(),
            warning: stops.warning.clone().unwrap_or_default(),
        }
    }
}
