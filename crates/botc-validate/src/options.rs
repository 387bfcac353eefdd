use botc_ingest::LoadOptions;

/// Strictness toggles for a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Any warning fails the run.
    pub strict_warnings: bool,
    /// Loader policy (control characters, header normalization).
    pub load: LoadOptions,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three toggles on.
    pub fn strict() -> Self {
        Self {
            strict_warnings: true,
            load: LoadOptions::strict(),
        }
    }

    /// Builds options from individual flags; `strict` switches every toggle on.
    pub fn from_flags(
        strict: bool,
        strict_warnings: bool,
        fail_on_control_chars: bool,
        fail_on_header_normalization: bool,
    ) -> Self {
        if strict {
            return Self::strict();
        }
        Self {
            strict_warnings,
            load: LoadOptions {
                fail_on_control_chars,
                fail_on_header_normalization,
            },
        }
    }

    pub fn with_strict_warnings(mut self, enable: bool) -> Self {
        self.strict_warnings = enable;
        self
    }

    pub fn with_fail_on_control_chars(mut self, enable: bool) -> Self {
        self.load.fail_on_control_chars = enable;
        self
    }

    pub fn with_fail_on_header_normalization(mut self, enable: bool) -> Self {
        self.load.fail_on_header_normalization = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_flag_enables_everything() {
        let options = ValidationOptions::from_flags(true, false, false, false);
        assert_eq!(options, ValidationOptions::strict());
        assert!(options.strict_warnings);
        assert!(options.load.fail_on_control_chars);
        assert!(options.load.fail_on_header_normalization);
    }

    #[test]
    fn individual_flags_are_independent() {
        let options = ValidationOptions::from_flags(false, false, true, false);
        assert!(!options.strict_warnings);
        assert!(options.load.fail_on_control_chars);
        assert!(!options.load.fail_on_header_normalization);

        let built = ValidationOptions::new()
            .with_strict_warnings(true)
            .with_fail_on_header_normalization(true);
        assert!(built.strict_warnings);
        assert!(!built.load.fail_on_control_chars);
        assert!(built.load.fail_on_header_normalization);
    }
}
