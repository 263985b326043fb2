/*!
The branch table mapping a target identity to its source filter and defines.

Pure and infallible: any tuple with no branch yields the empty override and
the build tool's own defaults apply downstream.
*/

use once_cell::sync::Lazy;

use crate::config::{Define, FilterRule, ResolvedConfig};
use crate::identity::{TargetIdentity, TargetKind};

/// Per-platform subtrees under `system/`, in the order excludes are emitted.
/// `system/common` is absent on purpose: no branch ever filters it out.
const SYSTEM_DIRS: &[&str] = &[
    "arduino",
    "emscripten",
    "espidf",
    "freertos",
    "rpi_pico",
    "mbed",
    "unix",
    "flipper",
    "windows",
    "zephyr",
];

/// Every branch starts from this: admit everything, drop the test and
/// example subtrees.
static BASELINE: Lazy<Vec<FilterRule>> = Lazy::new(|| {
    vec![
        FilterRule::include("*"),
        FilterRule::exclude("tests/"),
        FilterRule::exclude("example/"),
    ]
});

/// Resolves the identity to its build configuration.
pub fn resolve(identity: &TargetIdentity) -> ResolvedConfig {
    let kind = identity.kind();
    let config = match kind {
        TargetKind::Zephyr => platform_branch("zephyr", None, vec![Define::flag("ZENOH_ZEPHYR")]),
        TargetKind::ArduinoEsp32 => platform_branch(
            "arduino",
            // opencr sources live under the kept arduino tree but belong to
            // a different board.
            Some("system/arduino/opencr"),
            vec![
                Define::flag("ZENOH_ARDUINO_ESP32"),
                Define::value("ZENOH_C_STANDARD", "99"),
            ],
        ),
        TargetKind::ArduinoOpenCr => platform_branch(
            "arduino",
            Some("system/arduino/esp32"),
            vec![
                Define::flag("ZENOH_ARDUINO_OPENCR"),
                Define::value("ZENOH_C_STANDARD", "99"),
                // No threading on this constrained target.
                Define::value("Z_FEATURE_MULTI_THREAD", "0"),
            ],
        ),
        TargetKind::EspIdf => platform_branch("espidf", None, vec![Define::flag("ZENOH_ESPIDF")]),
        TargetKind::Mbed => platform_branch(
            "mbed",
            None,
            vec![
                Define::flag("ZENOH_MBED"),
                Define::value("ZENOH_C_STANDARD", "99"),
            ],
        ),
        TargetKind::Generic => generic_branch(),
        TargetKind::Unsupported => ResolvedConfig::empty(),
    };

    tracing::debug!(
        ?kind,
        rules = config.src_filter.len(),
        defines = config.defines.len(),
        "resolved build configuration"
    );

    config
}

/// Keeps one system subtree and excludes the rest. `carve_out` drops a leaf
/// inside the kept subtree, taking the kept directory's slot in the exclude
/// order.
fn platform_branch(
    keep: &str,
    carve_out: Option<&str>,
    defines: Vec<Define>,
) -> ResolvedConfig {
    let mut src_filter = BASELINE.clone();

    for dir in SYSTEM_DIRS {
        if *dir == keep {
            if let Some(leaf) = carve_out {
                src_filter.push(FilterRule::exclude(leaf));
            }
        } else {
            src_filter.push(FilterRule::exclude(format!("system/{dir}/")));
        }
    }

    ResolvedConfig {
        src_filter,
        defines,
    }
}

/// Drops every system subtree wholesale, then re-admits `system/common`.
fn generic_branch() -> ResolvedConfig {
    let mut src_filter = BASELINE.clone();
    src_filter.push(FilterRule::exclude("system/*"));
    src_filter.push(FilterRule::include("system/common"));

    ResolvedConfig {
        src_filter,
        defines: vec![Define::flag("ZENOH_GENERIC")],
    }
}
