/*!
Target identity as PlatformIO reports it, plus the dispatch key the resolver
branches on.
*/

use crate::env::BuildEnv;
use crate::errors::BuildConfError;
use crate::BuildConfResult;

/// Sentinel identity value selecting the platform-agnostic `system/common`
/// layer.
pub const GENERIC: &str = "generic";

/// Immutable for the run; read once per invocation from the build
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetIdentity {
    pub framework: String,
    pub platform: String,
    pub board: String,
    /// `ZENOH_GENERIC=1`: unconditionally rewrite the identity to the
    /// generic sentinel. An override, not a fallback.
    pub generic: bool,
}

impl TargetIdentity {
    pub fn new<F, P, B>(framework: F, platform: P, board: B, generic: bool) -> Self
    where
        F: Into<String>,
        P: Into<String>,
        B: Into<String>,
    {
        TargetIdentity {
            framework: framework.into(),
            platform: platform.into(),
            board: board.into(),
            generic,
        }
    }

    /// Reads `PIOFRAMEWORK` (first element of the list), `PIOPLATFORM`,
    /// `PIOENV`, and `ZENOH_GENERIC` (textual `"1"` means true).
    ///
    /// A missing or empty framework list is a precondition violation owned
    /// by the build tool; a missing platform or board is tolerated and
    /// simply never matches a branch.
    pub fn from_env(env: &dyn BuildEnv) -> BuildConfResult<Self> {
        let frameworks = env.var("PIOFRAMEWORK").ok_or_else(|| {
            BuildConfError::MissingVariable {
                var: "PIOFRAMEWORK".into(),
            }
        })?;
        let framework = frameworks
            .split(|c: char| c == ',' || c.is_whitespace())
            .find(|part| !part.is_empty())
            .ok_or(BuildConfError::EmptyFrameworkList)?;

        let platform = env.var("PIOPLATFORM").unwrap_or_default();
        let board = env.var("PIOENV").unwrap_or_default();
        let generic = env.var("ZENOH_GENERIC") == Some("1");

        Ok(TargetIdentity::new(framework, platform, board, generic))
    }

    /// Applies the generic override to the identity fields themselves.
    pub fn normalize(mut self) -> Self {
        if self.generic {
            self.framework = GENERIC.into();
            self.platform = GENERIC.into();
            self.board = GENERIC.into();
        }
        self
    }

    /// Collapses the identity to its dispatch leaf. Leaves are mutually
    /// exclusive by construction; at most one matches.
    pub fn kind(&self) -> TargetKind {
        if self.generic {
            return TargetKind::Generic;
        }

        match (
            self.framework.as_str(),
            self.platform.as_str(),
            self.board.as_str(),
        ) {
            ("zephyr", _, _) => TargetKind::Zephyr,
            ("arduino", "espressif32", _) => TargetKind::ArduinoEsp32,
            ("arduino", "ststm32", "opencr") => TargetKind::ArduinoOpenCr,
            // ststm32 boards other than opencr have no mapping yet and fall
            // through to the empty override.
            ("espidf", _, _) => TargetKind::EspIdf,
            ("mbed", _, _) => TargetKind::Mbed,
            (GENERIC, _, _) => TargetKind::Generic,
            _ => TargetKind::Unsupported,
        }
    }
}

/// One leaf per resolver branch, plus the empty fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Zephyr,
    ArduinoEsp32,
    ArduinoOpenCr,
    EspIdf,
    Mbed,
    Generic,
    Unsupported,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::env::LibraryEnv;

    #[test]
    fn dispatch_leaves() {
        let kind = |f: &str, p: &str, b: &str| TargetIdentity::new(f, p, b, false).kind();

        assert_eq!(kind("zephyr", "any", "any"), TargetKind::Zephyr);
        assert_eq!(kind("arduino", "espressif32", "x"), TargetKind::ArduinoEsp32);
        assert_eq!(kind("arduino", "ststm32", "opencr"), TargetKind::ArduinoOpenCr);
        assert_eq!(kind("arduino", "ststm32", "nucleo_f429zi"), TargetKind::Unsupported);
        assert_eq!(kind("arduino", "atmelavr", "uno"), TargetKind::Unsupported);
        assert_eq!(kind("espidf", "espressif32", "esp32"), TargetKind::EspIdf);
        assert_eq!(kind("mbed", "x", "y"), TargetKind::Mbed);
        assert_eq!(kind("generic", "generic", "generic"), TargetKind::Generic);
        assert_eq!(kind("simba", "x", "y"), TargetKind::Unsupported);
    }

    #[test]
    fn generic_flag_beats_identity() {
        let identity = TargetIdentity::new("zephyr", "nordicnrf52", "nrf52840", true);
        assert_eq!(identity.kind(), TargetKind::Generic);

        let normalized = identity.normalize();
        assert_eq!(
            normalized,
            TargetIdentity::new(GENERIC, GENERIC, GENERIC, true)
        );
    }

    #[test]
    fn normalize_without_flag_is_identity() {
        let identity = TargetIdentity::new("mbed", "ststm32", "nucleo_f767zi", false);
        assert_eq!(identity.clone().normalize(), identity);
    }

    #[test]
    fn from_env_takes_first_framework() {
        let mut env = LibraryEnv::new();
        env.set_var("PIOFRAMEWORK", "arduino, espidf");
        env.set_var("PIOPLATFORM", "espressif32");
        env.set_var("PIOENV", "esp32dev");

        let identity = TargetIdentity::from_env(&env).unwrap();
        assert_eq!(
            identity,
            TargetIdentity::new("arduino", "espressif32", "esp32dev", false)
        );
    }

    #[test]
    fn from_env_parses_generic_flag() {
        let mut env = LibraryEnv::new();
        env.set_var("PIOFRAMEWORK", "zephyr");
        env.set_var("ZENOH_GENERIC", "1");

        let identity = TargetIdentity::from_env(&env).unwrap();
        assert!(identity.generic);

        // Anything other than "1" is false, matching the script input format.
        env.set_var("ZENOH_GENERIC", "true");
        assert!(!TargetIdentity::from_env(&env).unwrap().generic);
    }

    #[test]
    fn from_env_requires_framework() {
        let env = LibraryEnv::new();
        assert!(TargetIdentity::from_env(&env).is_err());

        let mut env = LibraryEnv::new();
        env.set_var("PIOFRAMEWORK", "  ");
        assert!(TargetIdentity::from_env(&env).is_err());
    }

    #[test]
    fn from_env_tolerates_missing_platform_and_board() {
        let mut env = LibraryEnv::new();
        env.set_var("PIOFRAMEWORK", "mbed");

        let identity = TargetIdentity::from_env(&env).unwrap();
        assert_eq!(identity, TargetIdentity::new("mbed", "", "", false));
    }
}
