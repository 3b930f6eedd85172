//! Build script for axial-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sections and keys accepted in board.toml
const SCHEMA: &[(&str, &[&str])] = &[
    ("joystick", &["center", "rest_center", "rest_radius"]),
    ("buttons", &["debounce_ms"]),
    ("leds", &["pwm_wrap", "clock_divider_x100", "status_active_low"]),
    ("display", &["width", "height", "address", "cursor_size"]),
    ("timing", &["frame_interval_ms", "startup_delay_ms"]),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let content = fs::read_to_string(Path::new("board.toml"))
        .unwrap_or_else(|e| fail("Cannot read board.toml", &[e.to_string()]));

    let config: toml::Value = toml::from_str(&content).unwrap_or_else(|e| {
        let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
        fail("Invalid TOML syntax in board.toml", &lines)
    });

    let mut errors = Vec::new();
    validate_schema(&config, &mut errors);
    validate_joystick(&config, &mut errors);
    validate_leds(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_positive(&config, "buttons", "debounce_ms", &mut errors);
    validate_positive(&config, "timing", "frame_interval_ms", &mut errors);

    if !errors.is_empty() {
        fail("Invalid board.toml", &errors);
    }

    println!("cargo:warning=board.toml validated successfully");
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let rule = "═".repeat(68);
    let body = lines
        .iter()
        .map(|line| {
            let line = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  {:<64}  ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n╔{rule}╗\n║  ERROR: {:<57}  ║\n╠{rule}╣\n{}\n╚{rule}╝\n",
        title, body
    );
}

/// Reject unknown sections and keys, and anything nested
fn validate_schema(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return;
    };

    for (section, value) in root {
        let Some(keys) = SCHEMA
            .iter()
            .find(|(name, _)| *name == section.as_str())
            .map(|(_, keys)| keys)
        else {
            errors.push(format!("unknown section [{}]", section));
            continue;
        };

        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };

        for (key, value) in table {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", section, key));
            } else if key == "status_active_low" {
                if !value.is_bool() {
                    errors.push(format!("[{}] {} must be true or false", section, key));
                }
            } else if !value.is_integer() {
                errors.push(format!("[{}] {} must be an integer", section, key));
            }
        }
    }
}

fn get_int(config: &toml::Value, section: &str, key: &str) -> Option<i64> {
    config.get(section)?.get(key)?.as_integer()
}

fn check_range(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    if let Some(v) = get_int(config, section, key) {
        if v < min || v > max {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
        }
    }
}

fn validate_positive(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) {
    check_range(config, section, key, 1, u32::MAX as i64, errors);
}

fn validate_joystick(config: &toml::Value, errors: &mut Vec<String>) {
    check_range(config, "joystick", "center", 0, 4095, errors);
    check_range(config, "joystick", "rest_center", 0, 4095, errors);

    let rest_center = get_int(config, "joystick", "rest_center").unwrap_or(2060);
    let rest_radius = get_int(config, "joystick", "rest_radius").unwrap_or(100);
    if rest_radius < 0 || rest_radius > rest_center || rest_center + rest_radius > 4095 {
        errors.push("[joystick] rest zone must lie within 0-4095".to_string());
    }
}

fn validate_leds(config: &toml::Value, errors: &mut Vec<String>) {
    check_range(config, "leds", "pwm_wrap", 1, 65535, errors);
    // 8.4 fixed-point divider: 1.00 to 255.00
    check_range(config, "leds", "clock_divider_x100", 100, 25500, errors);
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    // SSD1306 driver geometry is fixed
    check_range(config, "display", "width", 128, 128, errors);
    check_range(config, "display", "height", 64, 64, errors);
    check_range(config, "display", "address", 0, 0x7F, errors);
    check_range(config, "display", "cursor_size", 1, 64, errors);
}
