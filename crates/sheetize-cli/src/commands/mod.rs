//! CLI command implementations

pub mod export;
pub mod grid;
pub mod json_output;
pub mod pack;
pub mod preview;
pub mod slice;

use sheetize_spec::{Clip, Size};

/// Parse a `WIDTHxHEIGHT` pair such as `32x16`.
pub fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid width '{}': {}", w, e))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid height '{}': {}", h, e))?;
    Ok(Size::new(width, height))
}

/// Parse a `NAME=FRAMES` clip descriptor such as `walk=4`.
pub fn parse_clip(s: &str) -> Result<Clip, String> {
    let (name, frames) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=FRAMES, got '{}'", s))?;
    if name.is_empty() {
        return Err(format!("clip name is empty in '{}'", s));
    }
    let frame_count = frames
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid frame count '{}': {}", frames, e))?;
    Ok(Clip::new(name, frame_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("32x16"), Ok(Size::new(32, 16)));
        assert_eq!(parse_size("8X8"), Ok(Size::new(8, 8)));
        assert!(parse_size("32").is_err());
        assert!(parse_size("ax4").is_err());
        assert!(parse_size("-1x4").is_err());
    }

    #[test]
    fn test_parse_clip() {
        assert_eq!(parse_clip("walk=4"), Ok(Clip::new("walk", 4)));
        assert_eq!(parse_clip("a=b=2"), Ok(Clip::new("a=b", 2)));
        assert!(parse_clip("walk").is_err());
        assert!(parse_clip("=3").is_err());
        assert!(parse_clip("walk=x").is_err());
    }
}
