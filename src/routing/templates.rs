//! The fixed route templates accepted by the gateway.

/// Number of path segments a template captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDepth {
    One,
    Two,
}

impl RouteDepth {
    /// Number of required path parameters at this depth.
    pub fn segment_count(self) -> usize {
        match self {
            RouteDepth::One => 1,
            RouteDepth::Two => 2,
        }
    }
}

/// A fixed URL shape with a declared number of required path parameters.
#[derive(Debug, Clone, Copy)]
pub struct RouteTemplate {
    pub depth: RouteDepth,
    pub pattern: &'static str,
}

/// The complete route table.
///
/// The two-segment template is a distinct endpoint, not a fallback of
/// the one-segment one.
pub const TEMPLATES: [RouteTemplate; 2] = [
    RouteTemplate {
        depth: RouteDepth::One,
        pattern: "/static/{seg1}",
    },
    RouteTemplate {
        depth: RouteDepth::Two,
        pattern: "/static/{seg1}/{seg2}",
    },
];

/// Look up the template capturing exactly `segment_count` parameters.
pub fn template_for(segment_count: usize) -> Option<&'static RouteTemplate> {
    TEMPLATES
        .iter()
        .find(|t| t.depth.segment_count() == segment_count)
}
