use crate::error::Result;
use crate::options::{InputSource, OutputFormat};
use crate::pattern::build_family;
use derive_builder::Builder;
use reserve_sizer_core::family::{CLASSES_COUNTER, FILES_COUNTER, METHODS_COUNTER, MODULES_COUNTER};
use reserve_sizer_core::{Extractor, Reduction, Recommender, TableKind};
use std::num::NonZeroU64;
use std::path::PathBuf;

/// Counter name patterns for each metric, in `pattern` module syntax.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct FamilyConfig {
    #[builder(default = "vec![FILES_COUNTER.to_string()]")]
    pub files: Vec<String>,
    #[builder(default = "vec![CLASSES_COUNTER.to_string(), MODULES_COUNTER.to_string()]")]
    pub class_modules: Vec<String>,
    #[builder(default = "vec![METHODS_COUNTER.to_string()]")]
    pub methods: Vec<String>,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            files: vec![FILES_COUNTER.to_string()],
            class_modules: vec![CLASSES_COUNTER.to_string(), MODULES_COUNTER.to_string()],
            methods: vec![METHODS_COUNTER.to_string()],
        }
    }
}

impl FamilyConfig {
    /// Compiles the patterns into an [`Extractor`].
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn extractor(&self) -> Result<Extractor> {
        Ok(Extractor::new(
            build_family("files", Reduction::First, &self.files)?,
            build_family("classes+modules", Reduction::Sum, &self.class_modules)?,
            build_family("methods", Reduction::First, &self.methods)?,
        ))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub input: InputSource,
    #[builder(default)]
    pub families: FamilyConfig,

    #[builder(default = "TableKind::ClassTable.default_floor()")]
    pub class_floor: NonZeroU64,
    #[builder(default = "TableKind::MethodTable.default_floor()")]
    pub method_floor: NonZeroU64,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::default(),
            families: FamilyConfig::default(),
            class_floor: TableKind::ClassTable.default_floor(),
            method_floor: TableKind::MethodTable.default_floor(),
            format: OutputFormat::default(),
            output_path: None,
        }
    }
}

impl Config {
    #[must_use]
    pub const fn recommender(&self) -> Recommender {
        Recommender::new(self.class_floor, self.method_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();
        assert_eq!(built.families, default.families);
        assert_eq!(built.class_floor, default.class_floor);
        assert_eq!(built.method_floor, default.method_floor);
        assert_eq!(built.input, InputSource::Stdin);
        assert_eq!(built.format, OutputFormat::Flags);
    }

    #[test]
    fn family_builder_overrides_one_family() {
        let families = FamilyConfigBuilder::default()
            .methods(vec!["re:types\\.input\\.methods\\..*".to_string()])
            .build()
            .unwrap();
        assert_eq!(families.files, FamilyConfig::default().files);
        let extractor = families.extractor().unwrap();
        assert!(extractor.methods().matches("types.input.methods.public"));
    }

    #[test]
    fn invalid_family_pattern_fails_extractor() {
        let families = FamilyConfig { files: vec!["re:[".to_string()], ..FamilyConfig::default() };
        assert!(families.extractor().is_err());
    }
}
