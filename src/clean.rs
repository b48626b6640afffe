//! The rewrite passes: decimal cleaning, transform folding, attribute stripping.

use log::{debug, warn};

use crate::Options;
use crate::ast::*;
use crate::error::CleanError;
use crate::format::{format_f64, format_value};

/// Positional/dimensional attributes rewritten by the decimal cleaner.
const VALUE_ATTRIBUTES: &[&str] = &[
    "x", "y", "x1", "y1", "x2", "y2", "cx", "cy", "r", "rx", "ry", "width", "height",
];

/// Position attributes that can absorb a translation, by shape tag.
fn position_attributes(tag: &str) -> Option<&'static [&'static str]> {
    match tag {
        "rect" => Some(&["x", "y"]),
        "circle" | "ellipse" => Some(&["cx", "cy"]),
        "line" => Some(&["x1", "y1", "x2", "y2"]),
        _ => None,
    }
}

/// Apply all enabled passes, in order: decimals, folding, stripping.
///
/// Folding runs after cleaning so it formats its own results; both use the
/// same precision, so the order is otherwise immaterial.
pub fn clean(doc: &mut Document, options: &Options) -> Result<(), CleanError> {
    clean_decimals(doc, options.precision)?;

    if options.fold_translations {
        fold_translations(doc, options.precision)?;
    }

    for attr in &options.strip {
        strip_attribute(doc, attr);
    }

    Ok(())
}

/// Reformat every recognized numeric attribute in the tree at `precision`.
pub fn clean_decimals(doc: &mut Document, precision: u8) -> Result<(), CleanError> {
    doc.try_for_each_element_mut(|elem| {
        for attr in &mut elem.attributes {
            if attr.name.matches("points") {
                attr.value = clean_points(&attr.value, precision)?;
            } else if attr.name.prefix.is_none()
                && VALUE_ATTRIBUTES.contains(&attr.name.local.as_str())
            {
                attr.value = format_value(&attr.value, precision)?;
            }
        }
        Ok(())
    })
}

/// Reformat a `points` list: numeric tokens separated by whitespace and/or
/// commas, re-joined as space-separated "x,y" pairs.
fn clean_points(points: &str, precision: u8) -> Result<String, CleanError> {
    let tokens: Vec<&str> = points
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() % 2 != 0 {
        return Err(CleanError::MalformedPoints {
            points: points.to_string(),
            count: tokens.len(),
        });
    }

    let mut pairs = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        pairs.push(format!(
            "{},{}",
            format_value(pair[0], precision)?,
            format_value(pair[1], precision)?
        ));
    }

    Ok(pairs.join(" "))
}

/// Fold `translate(dx[, dy])` transforms into shape position attributes.
pub fn fold_translations(doc: &mut Document, precision: u8) -> Result<(), CleanError> {
    doc.try_for_each_element_mut(|elem| fold_element(elem, precision))
}

fn fold_element(elem: &mut Element, precision: u8) -> Result<(), CleanError> {
    let Some(transform) = elem.get_attr("transform").map(str::to_string) else {
        return Ok(());
    };
    let Some((dx, dy, leftover)) = parse_translate(&transform) else {
        return Ok(());
    };
    let Some(coords) = position_attributes(&elem.name.local) else {
        // Not a shape we know how to move; the transform stays.
        debug!(
            "<{}> has no known position attributes, keeping {transform:?}",
            elem.name.local
        );
        return Ok(());
    };

    if leftover {
        warn!(
            "<{}> transform {transform:?} combines translate with other functions; \
             folding the translate and discarding the rest",
            elem.name.local
        );
    }
    debug!("<{}>: folding translate by ({dx}, {dy})", elem.name.local);

    for (i, coord) in coords.iter().enumerate() {
        let current = match elem.get_attr(coord) {
            Some(v) => v.trim().parse::<f64>().map_err(|_| CleanError::Format {
                value: v.to_string(),
            })?,
            None => 0.0,
        };
        let delta = if i % 2 == 0 { dx } else { dy };
        elem.set_attr(coord, format_f64(current + delta, precision));
    }

    elem.remove_attr("transform");
    Ok(())
}

/// Parse the first `translate(...)` occurrence in a transform list.
///
/// Returns the offset and whether the attribute contained anything besides
/// the translate itself. A single argument means `dy = 0`, per SVG
/// semantics. `None` when there is no translate with one or two numeric
/// arguments; the caller leaves such transforms alone.
fn parse_translate(transform: &str) -> Option<(f64, f64, bool)> {
    let start = transform.find("translate")?;
    let rest = transform[start + "translate".len()..].trim_start();
    let args = rest.strip_prefix('(')?;
    let (args, tail) = args.split_once(')')?;

    let mut numbers = args
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|t| !t.is_empty());
    let dx: f64 = numbers.next()?.parse().ok()?;
    let dy: f64 = match numbers.next() {
        Some(t) => t.parse().ok()?,
        None => 0.0,
    };
    if numbers.next().is_some() {
        // More than two components, not a plain translation
        return None;
    }

    let leftover = !transform[..start].trim().is_empty() || !tail.trim().is_empty();
    Some((dx, dy, leftover))
}

/// Remove the named attribute from every element that has it.
pub fn strip_attribute(doc: &mut Document, name: &str) {
    doc.for_each_element_mut(|elem| elem.remove_attr(name));
}
