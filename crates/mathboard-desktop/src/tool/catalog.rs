use crate::math::Size;
use super::{ToolKind, ToolSpec};

const fn tool(
    kind: ToolKind,
    id: &'static str,
    title: &'static str,
    width: f32,
    height: f32,
) -> ToolSpec {
    ToolSpec {
        kind,
        id,
        title,
        default_size: Size::new(width, height),
        transparent_by_default: false,
    }
}

const fn overlay(
    kind: ToolKind,
    id: &'static str,
    title: &'static str,
    width: f32,
    height: f32,
) -> ToolSpec {
    ToolSpec {
        transparent_by_default: true,
        ..tool(kind, id, title, width, height)
    }
}

/// Per-kind table, in `ToolKind` discriminant order.
pub static TOOL_CATALOG: [ToolSpec; 20] = [
    tool(ToolKind::NumberLine, "number-line", "Number Line", 800.0, 260.0),
    overlay(ToolKind::Ruler, "ruler", "Ruler", 500.0, 120.0),
    overlay(ToolKind::Protractor, "protractor", "Protractor", 420.0, 260.0),
    tool(ToolKind::FractionBars, "fraction-bars", "Fraction Bars", 640.0, 480.0),
    tool(ToolKind::Calculator, "calculator", "Calculator", 320.0, 480.0),
    tool(ToolKind::Probability, "probability", "Probability Simulator", 600.0, 520.0),
    tool(ToolKind::Dice, "dice", "Dice", 420.0, 360.0),
    tool(ToolKind::Spinner, "spinner", "Spinner", 420.0, 460.0),
    tool(ToolKind::Clock, "clock", "Clock", 420.0, 460.0),
    tool(ToolKind::Timer, "timer", "Timer", 360.0, 300.0),
    tool(ToolKind::Geoboard, "geoboard", "Geoboard", 520.0, 560.0),
    tool(ToolKind::BaseTenBlocks, "base-ten-blocks", "Base-Ten Blocks", 700.0, 500.0),
    tool(ToolKind::HundredChart, "hundred-chart", "Hundred Chart", 520.0, 600.0),
    tool(ToolKind::CoordinatePlane, "coordinate-plane", "Coordinate Plane", 600.0, 600.0),
    tool(ToolKind::Shapes, "shapes", "Shape Explorer", 600.0, 500.0),
    tool(ToolKind::Money, "money", "Money", 640.0, 420.0),
    tool(ToolKind::TenFrame, "ten-frame", "Ten Frame", 520.0, 300.0),
    tool(ToolKind::PlaceValue, "place-value", "Place Value Chart", 700.0, 360.0),
    tool(ToolKind::Thermometer, "thermometer", "Thermometer", 300.0, 520.0),
    tool(ToolKind::BalanceScale, "balance-scale", "Balance Scale", 620.0, 440.0),
];
