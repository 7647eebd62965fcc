pub mod generator;
pub mod geometry;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::{project_wheel, WheelProjector};
pub use geometry::{
    annular_sector_path, describe_arc, house_midpoint, large_arc_flag, polar_to_xy, screen_angle,
    WheelGeometry,
};
pub use primitives::{Color, Label, Point, Segment, Stroke};
pub use spec::{
    AspectLine, AxisKind, AxisLine, BodyGlyph, CuspLine, RingCircle, SignSegment, Tick,
    WheelDrawing,
};
pub use svg::{render_svg, write_svg};
pub use visual_config::VisualConfig;
