use chrono::format::{Item, StrftimeItems};

use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, ValueFormat};

const MAX_GRID_STEPS: usize = 50;

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    for (name, size) in [("width", config.width), ("height", config.height)] {
        if let Some(size) = size {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "canvas {name} must be finite and > 0"
                )));
            }
        }
    }

    let padding = config.padding;
    for (side, value) in [
        ("top", padding.top),
        ("right", padding.right),
        ("bottom", padding.bottom),
        ("left", padding.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "padding `{side}` must be finite and >= 0"
            )));
        }
    }

    if !config.max_item_size.is_finite() || config.max_item_size <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "max item size must be finite and > 0".to_owned(),
        ));
    }
    if !config.item_spacing.is_finite() || config.item_spacing < 0.0 {
        return Err(ChartError::InvalidConfig(
            "item spacing must be finite and >= 0".to_owned(),
        ));
    }
    if config.grid_steps == 0 || config.grid_steps > MAX_GRID_STEPS {
        return Err(ChartError::InvalidConfig(format!(
            "grid steps must be between 1 and {MAX_GRID_STEPS}"
        )));
    }
    if !config.stroke_width.is_finite() || config.stroke_width <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    if !config.point_radius.is_finite() || config.point_radius < 0.0 {
        return Err(ChartError::InvalidConfig(
            "point radius must be finite and >= 0".to_owned(),
        ));
    }

    if config.palette.is_empty() {
        return Err(ChartError::InvalidConfig(
            "palette must contain at least one color".to_owned(),
        ));
    }
    for color in config.palette.colors() {
        color.validate()?;
    }
    if let Some(accent) = config.role_accent {
        accent.color().validate()?;
    }

    match &config.value_format {
        ValueFormat::Number {
            precision: Some(precision),
        }
        | ValueFormat::Currency { precision, .. }
        | ValueFormat::Percent { precision } => {
            if *precision > 12 {
                return Err(ChartError::InvalidConfig(
                    "value format precision must be <= 12".to_owned(),
                ));
            }
        }
        ValueFormat::Date { pattern } => {
            if pattern.is_empty() {
                return Err(ChartError::InvalidConfig(
                    "date format pattern must not be empty".to_owned(),
                ));
            }
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(ChartError::InvalidConfig(format!(
                    "date format pattern `{pattern}` is not a valid strftime pattern"
                )));
            }
        }
        ValueFormat::Number { precision: None } | ValueFormat::Compact => {}
    }

    Ok(())
}
