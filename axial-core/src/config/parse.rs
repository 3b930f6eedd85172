//! Minimal TOML parser for `board.toml`
//!
//! Handles only the subset the board file uses, not the whole TOML language.
//!
//! Supported features:
//! - `[section]` headers
//! - `key = value` pairs with integer (decimal or `0x` hex, `_` separators)
//!   or boolean values
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys that are absent keep their default value. Unknown sections and
//! keys are errors so typos do not silently fall back to defaults.

use heapless::Vec;

use super::types::{BoardConfig, ConfigError};

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Joystick,
    Buttons,
    Leds,
    Display,
    Timing,
}

/// A parsed right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value {
    Int(u32),
    Bool(bool),
}

/// Parse `board.toml` contents into a validated [`BoardConfig`]
pub fn parse_config(input: &str) -> Result<BoardConfig, ConfigError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;
    let mut seen: Vec<Section, 5> = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ConfigError::Syntax { line: line_no });
            }
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(ConfigError::InvalidSection { line: line_no })?;
            if seen.contains(&section) {
                return Err(ConfigError::DuplicateSection { line: line_no });
            }
            seen.push(section)
                .map_err(|_| ConfigError::InvalidSection { line: line_no })?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::Syntax { line: line_no })?;
        let value = parse_value(value).ok_or(ConfigError::InvalidValue { line: line_no })?;
        apply_value(&mut config, section, key, value, line_no)?;
    }

    config.validate()?;
    Ok(config)
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "joystick" => Some(Section::Joystick),
        "buttons" => Some(Section::Buttons),
        "leds" => Some(Section::Leds),
        "display" => Some(Section::Display),
        "timing" => Some(Section::Timing),
        _ => None,
    }
}

/// Split `key = value`
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_value(s: &str) -> Option<Value> {
    match s {
        "true" => return Some(Value::Bool(true)),
        "false" => return Some(Value::Bool(false)),
        _ => {}
    }

    // Reject anything but plain digits and separators up front so
    // `from_str_radix` never sees a sign
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || !digits.chars().all(|c| c == '_' || c.is_digit(radix))
    {
        return None;
    }

    let mut value: u32 = 0;
    for c in digits.chars().filter(|c| *c != '_') {
        let digit = c.to_digit(radix)?;
        value = value.checked_mul(radix)?.checked_add(digit)?;
    }
    Some(Value::Int(value))
}

fn int<T: TryFrom<u32>>(value: Value, line: usize) -> Result<T, ConfigError> {
    match value {
        Value::Int(v) => T::try_from(v).map_err(|_| ConfigError::InvalidValue { line }),
        Value::Bool(_) => Err(ConfigError::InvalidValue { line }),
    }
}

fn boolean(value: Value, line: usize) -> Result<bool, ConfigError> {
    match value {
        Value::Bool(b) => Ok(b),
        Value::Int(_) => Err(ConfigError::InvalidValue { line }),
    }
}

fn apply_value(
    config: &mut BoardConfig,
    section: Section,
    key: &str,
    value: Value,
    line: usize,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => return Err(ConfigError::KeyOutsideSection { line }),
        Section::Joystick => {
            let j = &mut config.joystick;
            match key {
                "center" => j.center = int(value, line)?,
                "rest_center" => j.rest_center = int(value, line)?,
                "rest_radius" => j.rest_radius = int(value, line)?,
                _ => return Err(ConfigError::UnknownKey { line }),
            }
        }
        Section::Buttons => match key {
            "debounce_ms" => config.buttons.debounce_ms = int(value, line)?,
            _ => return Err(ConfigError::UnknownKey { line }),
        },
        Section::Leds => {
            let l = &mut config.leds;
            match key {
                "pwm_wrap" => l.pwm_wrap = int(value, line)?,
                "clock_divider_x100" => l.clock_divider_x100 = int(value, line)?,
                "status_active_low" => l.status_active_low = boolean(value, line)?,
                _ => return Err(ConfigError::UnknownKey { line }),
            }
        }
        Section::Display => {
            let d = &mut config.display;
            match key {
                "width" => d.width = int(value, line)?,
                "height" => d.height = int(value, line)?,
                "address" => d.address = int(value, line)?,
                "cursor_size" => d.cursor_size = int(value, line)?,
                _ => return Err(ConfigError::UnknownKey { line }),
            }
        }
        Section::Timing => {
            let t = &mut config.timing;
            match key {
                "frame_interval_ms" => t.frame_interval_ms = int(value, line)?,
                "startup_delay_ms" => t.startup_delay_ms = int(value, line)?,
                _ => return Err(ConfigError::UnknownKey { line }),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD_TOML: &str = include_str!("../../../axial-firmware/board.toml");

    #[test]
    fn test_shipped_board_file_matches_defaults() {
        assert_eq!(parse_config(BOARD_TOML), Ok(BoardConfig::default()));
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config(""), Ok(BoardConfig::default()));
        assert_eq!(parse_config("# only a comment\n\n"), Ok(BoardConfig::default()));
    }

    #[test]
    fn test_overrides() {
        let input = "\
[joystick]
rest_radius = 150 # wider rest zone

[display]
address = 0x3D
cursor_size = 6

[leds]
status_active_low = true
clock_divider_x100 = 1_000

[timing]
frame_interval_ms = 50
";
        let config = parse_config(input).unwrap();
        assert_eq!(config.joystick.rest_radius, 150);
        assert_eq!(config.joystick.center, 2047);
        assert_eq!(config.display.address, 0x3D);
        assert_eq!(config.display.cursor_size, 6);
        assert!(config.leds.status_active_low);
        assert_eq!(config.leds.clock_divider_x100, 1000);
        assert_eq!(config.timing.frame_interval_ms, 50);
        assert_eq!(config.timing.startup_delay_ms, 1000);
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_config("[joystick]\n[motor]\n"),
            Err(ConfigError::InvalidSection { line: 2 })
        );
    }

    #[test]
    fn test_duplicate_section() {
        assert_eq!(
            parse_config("[leds]\npwm_wrap = 255\n[leds]\n"),
            Err(ConfigError::DuplicateSection { line: 3 })
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[buttons]\ndebounce = 10\n"),
            Err(ConfigError::UnknownKey { line: 2 })
        );
    }

    #[test]
    fn test_key_before_section() {
        assert_eq!(
            parse_config("center = 2047\n"),
            Err(ConfigError::KeyOutsideSection { line: 1 })
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(
            parse_config("[leds\n"),
            Err(ConfigError::Syntax { line: 1 })
        );
        assert_eq!(
            parse_config("[leds]\npwm_wrap\n"),
            Err(ConfigError::Syntax { line: 2 })
        );
    }

    #[test]
    fn test_invalid_values() {
        // Negative
        assert_eq!(
            parse_config("[leds]\npwm_wrap = -1\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
        // Does not fit u8
        assert_eq!(
            parse_config("[display]\naddress = 0x100\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
        // Bool where an int is expected
        assert_eq!(
            parse_config("[timing]\nstartup_delay_ms = true\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
        // Int where a bool is expected
        assert_eq!(
            parse_config("[leds]\nstatus_active_low = 1\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
        // Quoted strings are not supported
        assert_eq!(
            parse_config("[display]\nwidth = \"128\"\n"),
            Err(ConfigError::InvalidValue { line: 2 })
        );
    }

    #[test]
    fn test_validation_runs_after_parse() {
        assert_eq!(
            parse_config("[display]\nwidth = 96\n"),
            Err(ConfigError::OutOfRange("display.width"))
        );
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), Some(Value::Int(42)));
        assert_eq!(parse_value("0x3c"), Some(Value::Int(0x3C)));
        assert_eq!(parse_value("25_000"), Some(Value::Int(25_000)));
        assert_eq!(parse_value("_1"), None);
        assert_eq!(parse_value("0x"), None);
        assert_eq!(parse_value("4294967296"), None);
        assert_eq!(parse_value("+5"), None);
    }
}
