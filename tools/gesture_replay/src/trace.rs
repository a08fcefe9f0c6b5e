use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use letter_gestures::{Letter, PointerEvent, PointerEventKind};

const HEADER: &str = "pointer,ms,kind,x,y";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReplayLine {
    Pointer(PointerEvent),
    Forward(PointerEvent),
    Enable { t_ms: u64, enabled: bool },
}

impl ReplayLine {
    pub fn t_ms(&self) -> u64 {
        match self {
            ReplayLine::Pointer(event) | ReplayLine::Forward(event) => event.t_ms,
            ReplayLine::Enable { t_ms, .. } => *t_ms,
        }
    }
}

pub fn parse_trace(path: &Path) -> Result<Vec<ReplayLine>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_trace_str(&text).with_context(|| format!("invalid trace {}", path.display()))
}

pub fn parse_trace_str(text: &str) -> Result<Vec<ReplayLine>> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed == HEADER {
            continue;
        }
        let parsed = parse_line(trimmed).with_context(|| format!("line {line_no}: '{trimmed}'"))?;
        out.push(parsed);
    }
    Ok(out)
}

fn parse_line(line: &str) -> Result<ReplayLine> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    match parts.as_slice() {
        ["pointer", ms, kind, x, y] => Ok(ReplayLine::Pointer(parse_event(ms, kind, x, y)?)),
        ["forward", ms, kind, x, y] => Ok(ReplayLine::Forward(parse_event(ms, kind, x, y)?)),
        ["enable", ms, flag] => Ok(ReplayLine::Enable {
            t_ms: parse_ms(ms)?,
            enabled: match *flag {
                "1" => true,
                "0" => false,
                other => bail!("invalid enable flag '{other}', expected 0 or 1"),
            },
        }),
        [tag, ..] if matches!(*tag, "pointer" | "forward" | "enable") => {
            bail!("wrong column count for '{tag}' line")
        }
        [tag, ..] => bail!("unknown line type '{tag}'"),
        [] => bail!("empty line"),
    }
}

fn parse_event(ms: &str, kind: &str, x: &str, y: &str) -> Result<PointerEvent> {
    let kind = parse_kind(kind).ok_or_else(|| anyhow!("invalid pointer kind '{kind}'"))?;
    let x: f32 = x.parse().with_context(|| format!("invalid x '{x}'"))?;
    let y: f32 = y.parse().with_context(|| format!("invalid y '{y}'"))?;
    if !x.is_finite() || !y.is_finite() {
        bail!("coordinates must be finite");
    }
    Ok(PointerEvent::new(kind, parse_ms(ms)?, x, y))
}

fn parse_ms(ms: &str) -> Result<u64> {
    ms.parse().with_context(|| format!("invalid ms '{ms}'"))
}

pub fn parse_kind(kind: &str) -> Option<PointerEventKind> {
    match kind.to_ascii_lowercase().as_str() {
        "press" | "down" => Some(PointerEventKind::Press),
        "move" => Some(PointerEventKind::Move),
        "release" | "up" => Some(PointerEventKind::Release),
        "cancel" => Some(PointerEventKind::Cancel),
        _ => None,
    }
}

pub fn kind_label(kind: PointerEventKind) -> &'static str {
    match kind {
        PointerEventKind::Press => "press",
        PointerEventKind::Move => "move",
        PointerEventKind::Release => "release",
        PointerEventKind::Cancel => "cancel",
    }
}

pub fn parse_expected_letters(path: &Path) -> Result<Vec<Letter>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_expected_letters_str(&text)
        .with_context(|| format!("invalid expectation file {}", path.display()))
}

/// One letter per line; blank lines and `#` comments are skipped.
pub fn parse_expected_letters_str(text: &str) -> Result<Vec<Letter>> {
    let mut letters = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }
        let mut chars = token.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::from_char(c),
            _ => None,
        };
        let letter = letter
            .ok_or_else(|| anyhow!("line {}: unsupported letter '{}'", idx + 1, token))?;
        letters.push(letter);
    }
    Ok(letters)
}
