// src/core/title.rs

//! The startup banner: the word VOLT in block letters, colored with a horizontal
//! gradient across the Poimandres palette.

use anyhow::{Result, anyhow};
use colored::Colorize;

const TITLE: &str = r"
▀██▀  ▀█▀  ▄▄█▀▀██   ▀██▀      █▀▀██▀▀█
 ▀█▄  ▄▀  ▄█▀    ██   ██          ██
  ██  █   ██      ██  ██          ██
   ███    ▀█▄     ██  ██          ██
    █      ▀▀█▄▄▄█▀  ▄██▄▄▄▄▄█   ▄██▄
";

// blue, cyan, magenta, red, yellow
const POIMANDRES_STOPS: [&str; 5] = ["add7ff", "89ddff", "fae4fc", "d0679d", "fffac2"];

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

/// Parses a six digit hex color, with or without a leading `#`.
pub fn parse_hex_color(code: &str) -> Result<Rgb> {
    let digits = code.strip_prefix('#').unwrap_or(code);
    let bytes = hex::decode(digits).map_err(|e| anyhow!("Invalid color '{}': {}", code, e))?;
    match bytes.as_slice() {
        [r, g, b] => Ok(Rgb { r: *r, g: *g, b: *b }),
        _ => Err(anyhow!("Invalid color '{}': expected 6 hex digits", code)),
    }
}

/// Computes one color per column so that column 0 gets the first stop and the last
/// column gets the last stop.
pub fn gradient(stops: &[Rgb], width: usize) -> Vec<Rgb> {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Vec::new();
    };
    if width <= 1 || stops.len() == 1 {
        return vec![*first; width];
    }

    let segments = stops.len() - 1;
    let span = (width - 1) * segments;

    (0..width)
        .map(|column| {
            let position = column * segments;
            let index = position / (width - 1);
            let offset = position % (width - 1);
            match (stops.get(index), stops.get(index + 1)) {
                (Some(from), Some(to)) => mix(*from, *to, offset, width - 1),
                _ if position >= span => *last,
                _ => *first,
            }
        })
        .collect()
}

fn mix(from: Rgb, to: Rgb, num: usize, den: usize) -> Rgb {
    let channel = |a: u8, b: u8| {
        let value = (usize::from(a) * (den - num) + usize::from(b) * num) / den;
        u8::try_from(value).unwrap_or(u8::MAX)
    };
    Rgb {
        r: channel(from.r, to.r),
        g: channel(from.g, to.g),
        b: channel(from.b, to.b),
    }
}

/// Renders the banner with the gradient applied column by column.
pub fn render_title() -> Result<String> {
    let stops = POIMANDRES_STOPS
        .iter()
        .map(|code| parse_hex_color(code))
        .collect::<Result<Vec<_>>>()?;

    let width = TITLE.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    let colors = gradient(&stops, width);

    let lines: Vec<String> = TITLE
        .lines()
        .map(|line| {
            line.chars()
                .zip(&colors)
                .map(|(ch, color)| ch.to_string().truecolor(color.r, color.g, color.b).to_string())
                .collect()
        })
        .collect();

    Ok(lines.join("\n"))
}
