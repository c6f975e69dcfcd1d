use crate::Error;
use std::{fmt, path::Path};

/// Settings for one generation run.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Export statement used by `.js` and `.jsx` artifacts
    pub module: ModuleStyle,
    /// Major version of the client consuming the artifact, which decides its shape
    pub consumer_major_version: ConsumerVersion,
    /// Declare the exact type of the data in `.ts` artifacts instead of a generic interface
    pub explicit_typing: bool,
    /// Remove federation-only types from the schema before introspecting it
    pub federation_aware: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub enum ModuleStyle {
    #[serde(rename = "commonjs")]
    CommonJs,
    #[default]
    #[serde(rename = "esmodule", alias = "es2015")]
    EsModule,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "u8")]
pub enum ConsumerVersion {
    /// Introspection-like `__schema.types` list
    V2,
    /// Compact `possibleTypes` map
    #[default]
    V3,
}

impl TryFrom<u8> for ConsumerVersion {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ConsumerVersion::V2),
            3 => Ok(ConsumerVersion::V3),
            other => Err(Error::InvalidConfigCombination(format!(
                "consumer major version {other} is not supported, expected 2 or 3"
            ))),
        }
    }
}

impl fmt::Display for ConsumerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsumerVersion::V2 => f.write_str("2"),
            ConsumerVersion::V3 => f.write_str("3"),
        }
    }
}

/// How the artifact is written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputEncoding {
    /// Plain JSON (`.json`)
    Data,
    /// A JavaScript module default-exporting the data (`.js`, `.jsx`)
    Script,
    /// A TypeScript module declaring the type of the data (`.ts`, `.tsx`)
    TypedSource,
}

impl OutputEncoding {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Ok(OutputEncoding::Data),
            Some("js" | "jsx") => Ok(OutputEncoding::Script),
            Some("ts" | "tsx") => Ok(OutputEncoding::TypedSource),
            _ => Err(Error::UnsupportedOutputExtension {
                file: path.display().to_string(),
                extension: path
                    .extension()
                    .map(|extension| format!(".{}", extension.to_string_lossy())),
            }),
        }
    }
}

impl GenerationConfig {
    /// Rejects combinations the emitter has no sensible output for.
    pub fn check(&self, encoding: OutputEncoding) -> Result<(), Error> {
        if self.module == ModuleStyle::CommonJs && encoding == OutputEncoding::TypedSource {
            return Err(Error::InvalidConfigCombination(
                "the commonjs module style cannot be used with a TypeScript output file".to_owned(),
            ));
        }

        Ok(())
    }
}

/// The checks run before any generation work: the output file must have a supported extension,
/// and the configuration must be usable with the encoding it implies.
pub fn validate(config: &GenerationConfig, output_file: impl AsRef<Path>) -> Result<OutputEncoding, Error> {
    let encoding = OutputEncoding::from_path(output_file)?;
    config.check(encoding)?;

    Ok(encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: GenerationConfig = toml::from_str("").unwrap();

        assert_eq!(config.module, ModuleStyle::EsModule);
        assert_eq!(config.consumer_major_version, ConsumerVersion::V3);
        assert!(!config.explicit_typing);
        assert!(!config.federation_aware);
    }

    #[test]
    fn values() {
        let input = r#"
            module = "commonjs"
            consumerMajorVersion = 2
            explicitTyping = true
            federationAware = true
        "#;

        let config: GenerationConfig = toml::from_str(input).unwrap();

        assert_eq!(
            config,
            GenerationConfig {
                module: ModuleStyle::CommonJs,
                consumer_major_version: ConsumerVersion::V2,
                explicit_typing: true,
                federation_aware: true,
            }
        );
    }

    #[test]
    fn es2015_alias() {
        let config: GenerationConfig = toml::from_str(r#"module = "es2015""#).unwrap();
        assert_eq!(config.module, ModuleStyle::EsModule);
    }

    #[test]
    fn unsupported_consumer_version() {
        let error = toml::from_str::<GenerationConfig>("consumerMajorVersion = 4").unwrap_err();

        assert!(error
            .to_string()
            .contains("consumer major version 4 is not supported, expected 2 or 3"));

        let error = ConsumerVersion::try_from(1).unwrap_err();
        assert!(matches!(error, Error::InvalidConfigCombination(_)));
    }

    #[test]
    fn unknown_field() {
        let error = toml::from_str::<GenerationConfig>("apolloClientVersion = 3").unwrap_err();
        assert!(error.to_string().contains("unknown field `apolloClientVersion`"));
    }

    #[test]
    fn extension_mapping() {
        let cases = [
            ("fragment-matcher.json", OutputEncoding::Data),
            ("fragment-matcher.js", OutputEncoding::Script),
            ("src/fragment-matcher.jsx", OutputEncoding::Script),
            ("possible-types.ts", OutputEncoding::TypedSource),
            ("possible-types.d/out.tsx", OutputEncoding::TypedSource),
        ];

        for (path, expected) in cases {
            assert_eq!(OutputEncoding::from_path(path).unwrap(), expected, "{path}");
        }
    }

    #[test]
    fn unsupported_extensions() {
        for path in ["schema.graphql", "result.JSON", "out.mjs", "README"] {
            let error = OutputEncoding::from_path(path).unwrap_err();
            assert!(matches!(error, Error::UnsupportedOutputExtension { .. }), "{path}");
        }

        let error = OutputEncoding::from_path("matcher.yaml").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Extension .yaml is not supported. The output file must end with one of: .json, .js, .jsx, .ts, .tsx"
        );
    }

    #[test]
    fn missing_extension_names_the_file() {
        let error = OutputEncoding::from_path("generated/README").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Output file generated/README has no extension, which is not supported. The output file must end with one of: .json, .js, .jsx, .ts, .tsx"
        );

        // A dotfile has a name but no extension.
        let error = OutputEncoding::from_path(".json").unwrap_err();
        assert!(matches!(
            error,
            Error::UnsupportedOutputExtension { ref file, extension: None } if file == ".json"
        ));
    }

    #[test]
    fn commonjs_with_typescript() {
        let config = GenerationConfig {
            module: ModuleStyle::CommonJs,
            ..Default::default()
        };

        for path in ["matcher.ts", "matcher.tsx"] {
            let error = validate(&config, path).unwrap_err();
            assert!(matches!(error, Error::InvalidConfigCombination(_)), "{path}");
        }

        assert_eq!(validate(&config, "matcher.js").unwrap(), OutputEncoding::Script);
        assert_eq!(validate(&config, "matcher.json").unwrap(), OutputEncoding::Data);
    }
}
